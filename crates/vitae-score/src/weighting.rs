use crate::pattern::TermMatcher;
use vitae_core::{Section, SectionMap, SectionWeightedScore};

/// Fixed section weights; experience placement dominates.
const W_EXPERIENCE: f64 = 0.40;
const W_SKILLS: f64 = 0.30;
const W_SUMMARY: f64 = 0.15;
const W_EDUCATION: f64 = 0.10;
const W_OTHER: f64 = 0.05;

/// Per-section saturation multipliers: roughly 3 occurrences max out a
/// section's contribution (4 for experience, where repetition is natural).
const SAT_EXPERIENCE: f64 = 25.0;
const SAT_SKILLS: f64 = 33.0;
const SAT_SUMMARY: f64 = 50.0;
const SAT_EDUCATION: f64 = 50.0;
const SAT_OTHER: f64 = 50.0;

/// Re-weight keyword matches by the section they occur in.
pub fn section_weighted_scores(
    sections: &SectionMap,
    keywords: &[String],
) -> Vec<SectionWeightedScore> {
    keywords
        .iter()
        .map(|keyword| score_keyword(sections, keyword))
        .collect()
}

/// Section-weighted score for a single keyword.
pub fn score_keyword(sections: &SectionMap, keyword: &str) -> SectionWeightedScore {
    let matcher = TermMatcher::new(keyword);

    let experience = matcher.count(sections.text(Section::Experience));
    let skills = matcher.count(sections.text(Section::Skills));
    let summary = matcher.count(sections.text(Section::Summary));
    let education = matcher.count(sections.text(Section::Education));
    let other = matcher.count(sections.text(Section::Certifications))
        + matcher.count(sections.text(Section::Projects))
        + matcher.count(sections.text(Section::Other));

    let experience_score = saturate(experience, SAT_EXPERIENCE);
    let skills_score = saturate(skills, SAT_SKILLS);
    let summary_score = saturate(summary, SAT_SUMMARY);
    let education_score = saturate(education, SAT_EDUCATION);
    let other_score = saturate(other, SAT_OTHER);

    let total = experience_score * W_EXPERIENCE
        + skills_score * W_SKILLS
        + summary_score * W_SUMMARY
        + education_score * W_EDUCATION
        + other_score * W_OTHER;

    SectionWeightedScore {
        keyword: keyword.to_string(),
        experience_score,
        skills_score,
        summary_score,
        education_score,
        other_score,
        total_weighted_score: total.round(),
    }
}

/// Mean of the per-keyword totals; the reported section score.
pub fn mean_section_score(scores: &[SectionWeightedScore]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().map(|s| s.total_weighted_score).sum::<f64>() / scores.len() as f64
}

fn saturate(count: usize, multiplier: f64) -> f64 {
    (count as f64 * multiplier).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_with(section: Section, text: &str) -> SectionMap {
        let mut map = SectionMap::new();
        for line in text.lines() {
            map.push_line(section, line);
        }
        map
    }

    #[test]
    fn experience_placement_beats_other_placement() {
        // Same frequency, different section — the weight table decides
        let in_experience = map_with(Section::Experience, "built python python services");
        let in_other = map_with(Section::Other, "built python python services");

        let exp = score_keyword(&in_experience, "python");
        let other = score_keyword(&in_other, "python");
        assert!(exp.total_weighted_score >= other.total_weighted_score);
        assert!(exp.total_weighted_score > 0.0);
    }

    #[test]
    fn three_occurrences_saturate_skills() {
        let map = map_with(Section::Skills, "python python python");
        let score = score_keyword(&map, "python");
        assert_eq!(score.skills_score, 99.0);

        let map4 = map_with(Section::Skills, "python python python python");
        let score4 = score_keyword(&map4, "python");
        assert_eq!(score4.skills_score, 100.0);
    }

    #[test]
    fn certifications_and_projects_count_as_other() {
        let mut map = SectionMap::new();
        map.push_line(Section::Certifications, "aws certified");
        map.push_line(Section::Projects, "aws deployment project");
        let score = score_keyword(&map, "aws");
        assert_eq!(score.other_score, 100.0);
        assert_eq!(score.experience_score, 0.0);
    }

    #[test]
    fn absent_keyword_scores_zero() {
        let map = map_with(Section::Experience, "wrote documentation");
        let score = score_keyword(&map, "python");
        assert_eq!(score.total_weighted_score, 0.0);
    }

    #[test]
    fn mean_over_keywords() {
        let map = map_with(Section::Experience, "python and rust daily");
        let keywords = vec!["python".to_string(), "rust".to_string(), "cobol".to_string()];
        let scores = section_weighted_scores(&map, &keywords);
        let mean = mean_section_score(&scores);
        assert!(mean > 0.0);
        assert!(mean < scores[0].total_weighted_score * 3.0);
    }

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean_section_score(&[]), 0.0);
    }
}
