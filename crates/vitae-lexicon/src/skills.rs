use regex::Regex;
use std::sync::LazyLock;

/// Bucket a keyword falls into for composite-factor scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillClass {
    /// Named technology: language, framework, database, tool.
    Hard,
    /// Interpersonal or organizational ability.
    Soft,
    /// Technical practice or discipline (ml, api design, agile, ...).
    Technical,
    /// Everything else; domain vocabulary.
    IndustrySpecific,
}

static HARD_SKILL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Programming languages
        r"(?i)^(python|java|javascript|typescript|c\+\+|c#|ruby|go|rust|swift|kotlin|php|r|scala|perl)$",
        // Frameworks and libraries
        r"(?i)^(react|angular|vue|django|flask|spring|express|next\.?js|gatsby|svelte|ember)$",
        // Databases
        r"(?i)^(mysql|postgresql|mongodb|redis|elasticsearch|cassandra|oracle|sql server|dynamodb)$",
        // Cloud and DevOps
        r"(?i)^(aws|azure|gcp|docker|kubernetes|jenkins|terraform|ansible|git|ci/cd)$",
        // Tools
        r"(?i)^(photoshop|illustrator|figma|sketch|autocad|solidworks|tableau|power bi|excel)$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("hard skill pattern"))
    .collect()
});

static SOFT_SKILL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\b(leadership|communication|teamwork|collaboration|adaptability|problem[- ]solving)\b",
        r"(?i)\b(time[- ]management|critical[- ]thinking|creativity|emotional[- ]intelligence)\b",
        r"(?i)\b(conflict[- ]resolution|negotiation|presentation|public[- ]speaking)\b",
        r"(?i)\b(interpersonal|organizational|analytical|strategic[- ]thinking)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("soft skill pattern"))
    .collect()
});

static TECHNICAL_SKILL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\b(machine[- ]learning|artificial[- ]intelligence|data[- ]science|deep[- ]learning)\b",
        r"(?i)\b(natural[- ]language[- ]processing|computer[- ]vision|neural[- ]networks)\b",
        r"(?i)\b(api[- ]design|rest|graphql|microservices|distributed[- ]systems)\b",
        r"(?i)\b(agile|scrum|devops|ci/cd|test[- ]driven[- ]development)\b",
        r"(?i)\b(system[- ]architecture|software[- ]design|database[- ]design)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("technical skill pattern"))
    .collect()
});

/// Classify a keyword. Hard skills win over soft, soft over technical;
/// anything unmatched is industry-specific.
pub fn classify_skill(keyword: &str) -> SkillClass {
    let lower = keyword.to_lowercase();
    if HARD_SKILL_PATTERNS.iter().any(|p| p.is_match(&lower)) {
        SkillClass::Hard
    } else if SOFT_SKILL_PATTERNS.iter().any(|p| p.is_match(&lower)) {
        SkillClass::Soft
    } else if TECHNICAL_SKILL_PATTERNS.iter().any(|p| p.is_match(&lower)) {
        SkillClass::Technical
    } else {
        SkillClass::IndustrySpecific
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn languages_are_hard_skills() {
        assert_eq!(classify_skill("Python"), SkillClass::Hard);
        assert_eq!(classify_skill("rust"), SkillClass::Hard);
        assert_eq!(classify_skill("c++"), SkillClass::Hard);
    }

    #[test]
    fn soft_skills_detected() {
        assert_eq!(classify_skill("leadership"), SkillClass::Soft);
        assert_eq!(classify_skill("problem-solving"), SkillClass::Soft);
        assert_eq!(classify_skill("problem solving"), SkillClass::Soft);
    }

    #[test]
    fn practices_are_technical() {
        assert_eq!(classify_skill("machine learning"), SkillClass::Technical);
        assert_eq!(classify_skill("microservices"), SkillClass::Technical);
        assert_eq!(classify_skill("scrum"), SkillClass::Technical);
    }

    #[test]
    fn unknown_terms_are_industry_specific() {
        assert_eq!(classify_skill("hipaa"), SkillClass::IndustrySpecific);
        assert_eq!(classify_skill("underwriting"), SkillClass::IndustrySpecific);
    }
}
