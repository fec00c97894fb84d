use regex::Regex;
use std::sync::LazyLock;
use vitae_core::{Section, SectionMap};

/// Header patterns per section, matched against whole trimmed lines.
static SECTION_HEADERS: LazyLock<Vec<(Section, Vec<Regex>)>> = LazyLock::new(|| {
    let compile = |patterns: &[&str]| -> Vec<Regex> {
        patterns
            .iter()
            .map(|p| Regex::new(&format!(r"(?i)^{p}$")).expect("section header pattern"))
            .collect()
    };
    vec![
        (
            Section::Summary,
            compile(&[
                r"(professional )?summary",
                r"(executive )?overview",
                r"about( me)?",
                r"profile",
                r"objective",
            ]),
        ),
        (
            Section::Experience,
            compile(&[
                r"(work )?experience",
                r"(professional )?history",
                r"employment( history)?",
                r"career( history)?",
                r"work",
            ]),
        ),
        (
            Section::Skills,
            compile(&[
                r"(technical )?skills",
                r"(core )?competencies",
                r"expertise",
                r"technologies",
                r"tools( & technologies)?",
            ]),
        ),
        (
            Section::Education,
            compile(&[
                r"education",
                r"academic( background)?",
                r"qualifications",
                r"degrees?",
            ]),
        ),
        (
            Section::Certifications,
            compile(&[
                r"certifications?",
                r"licenses?",
                r"credentials",
                r"professional development",
            ]),
        ),
        (
            Section::Projects,
            compile(&[r"projects?", r"key projects?", r"notable work", r"portfolio"]),
        ),
    ]
});

/// Split raw resume text into named sections by header-line matching.
///
/// Lines before any recognized header accumulate under `other`. Empty
/// input yields an all-empty map; there are no error conditions.
pub fn detect_sections(text: &str) -> SectionMap {
    let mut map = SectionMap::new();
    let mut current = Section::Other;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(section) = match_header(trimmed) {
            current = section;
        } else {
            map.push_line(current, line);
        }
    }

    map
}

fn match_header(line: &str) -> Option<Section> {
    SECTION_HEADERS
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|p| p.is_match(line)))
        .map(|(section, _)| *section)
}
