//! @acp:module "Structural Validator"
//! @acp:summary "Heading, bullet and FAQ checks for generated Markdown bodies"
//! @acp:domain generation
//! @acp:layer service
//!
//! Every rule is evaluated on every call; issues are collected, never
//! short-circuited. A body with no H2 headings therefore fails both the H2
//! count and the FAQ count at once.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// `Q:` line inside a FAQ section, any leading whitespace, any case
static FAQ_QUESTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*Q:\s+").unwrap());

/// `- item` bullet line
static BULLET_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*-\s+\S").unwrap());

const H1_PREFIX: &str = "# ";
const H2_PREFIX: &str = "## ";

/// Heading text of the outline FAQ section (exact match)
pub const FAQ_HEADING: &str = "FAQs";

pub const ARTICLE_MIN_H2: usize = 5;
pub const ARTICLE_MIN_FAQS: usize = 5;
pub const OUTLINE_MIN_H2: usize = 8;
pub const OUTLINE_FAQ_BULLETS: (usize, usize) = (5, 8);
pub const OUTLINE_SECTION_BULLETS: (usize, usize) = (3, 6);

/// Which structural contract to check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    #[default]
    Article,
    Outline,
}

/// A single unmet structural rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationIssue {
    MissingH1,
    TooFewH2 { found: usize, required: usize },
    TooFewFaqs { found: usize, required: usize },
    MissingFaqSection,
    FaqBulletsOutOfRange { found: usize, min: usize, max: usize },
    SectionBulletsOutOfRange { heading: String, found: usize, min: usize, max: usize },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::MissingH1 => write!(f, "Missing H1 title"),
            ValidationIssue::TooFewH2 { required, .. } => {
                write!(f, "Needs at least {} H2 headings", required)
            }
            ValidationIssue::TooFewFaqs { required, .. } => {
                write!(f, "FAQs must include at least {} Q/A pairs", required)
            }
            ValidationIssue::MissingFaqSection => {
                write!(f, "Outline must include an H2 \"{}\" section", FAQ_HEADING)
            }
            ValidationIssue::FaqBulletsOutOfRange { found, min, max } => write!(
                f,
                "FAQs section must list {}-{} questions (found {})",
                min, max, found
            ),
            ValidationIssue::SectionBulletsOutOfRange {
                heading,
                found,
                min,
                max,
            } => write!(
                f,
                "Section \"{}\" must have {}-{} bullet points (found {})",
                heading, min, max, found
            ),
        }
    }
}

/// Check a Markdown body against the structural contract for `mode`
pub fn validate(body: &str, mode: ValidationMode) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if count_h1(body) < 1 {
        issues.push(ValidationIssue::MissingH1);
    }

    let h2 = count_h2(body);
    match mode {
        ValidationMode::Article => {
            if h2 < ARTICLE_MIN_H2 {
                issues.push(ValidationIssue::TooFewH2 {
                    found: h2,
                    required: ARTICLE_MIN_H2,
                });
            }
            let faqs = count_faqs(body);
            if faqs < ARTICLE_MIN_FAQS {
                issues.push(ValidationIssue::TooFewFaqs {
                    found: faqs,
                    required: ARTICLE_MIN_FAQS,
                });
            }
        }
        ValidationMode::Outline => {
            if h2 < OUTLINE_MIN_H2 {
                issues.push(ValidationIssue::TooFewH2 {
                    found: h2,
                    required: OUTLINE_MIN_H2,
                });
            }
            check_outline_bullets(body, &mut issues);
        }
    }

    issues
}

fn check_outline_bullets(body: &str, issues: &mut Vec<ValidationIssue>) {
    let mut saw_faq = false;
    for (heading, found) in section_bullet_counts(body) {
        if heading == FAQ_HEADING {
            saw_faq = true;
            let (min, max) = OUTLINE_FAQ_BULLETS;
            if !(min..=max).contains(&found) {
                issues.push(ValidationIssue::FaqBulletsOutOfRange { found, min, max });
            }
        } else {
            let (min, max) = OUTLINE_SECTION_BULLETS;
            if !(min..=max).contains(&found) {
                issues.push(ValidationIssue::SectionBulletsOutOfRange {
                    heading,
                    found,
                    min,
                    max,
                });
            }
        }
    }
    if !saw_faq {
        issues.push(ValidationIssue::MissingFaqSection);
    }
}

pub fn count_h1(body: &str) -> usize {
    body.lines().filter(|line| line.starts_with(H1_PREFIX)).count()
}

pub fn count_h2(body: &str) -> usize {
    body.lines().filter(|line| line.starts_with(H2_PREFIX)).count()
}

/// Count `Q:` lines after the first `## faq...` heading (indentation allowed),
/// up to the next unindented H2
pub fn count_faqs(body: &str) -> usize {
    let mut lines = body.lines();
    let found_faq = lines
        .by_ref()
        .any(|line| line.trim().to_lowercase().starts_with("## faq"));
    if !found_faq {
        return 0;
    }

    lines
        .take_while(|line| !line.starts_with(H2_PREFIX))
        .filter(|line| FAQ_QUESTION_PATTERN.is_match(line))
        .count()
}

/// Bullet count per H2 section, in document order
pub fn section_bullet_counts(body: &str) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for line in body.lines() {
        if let Some(heading) = line.strip_prefix(H2_PREFIX) {
            counts.push((heading.trim().to_string(), 0));
        } else if BULLET_PATTERN.is_match(line) {
            if let Some((_, count)) = counts.last_mut() {
                *count += 1;
            }
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn article_body(h1: bool, h2: usize, faqs: usize) -> String {
        let mut lines = Vec::new();
        if h1 {
            lines.push("# Title".to_string());
        }
        for i in 0..h2.saturating_sub(1) {
            lines.push(format!("## Section {}", i));
            lines.push("Body text.".to_string());
        }
        if h2 > 0 {
            lines.push("## FAQs".to_string());
        }
        for i in 0..faqs {
            lines.push(format!("Q: Question {}?", i));
            lines.push("A: Answer.".to_string());
        }
        lines.join("\n")
    }

    #[test]
    fn test_article_soundness() {
        let issues = validate(&article_body(false, 3, 2), ValidationMode::Article);
        assert_eq!(
            issues,
            vec![
                ValidationIssue::MissingH1,
                ValidationIssue::TooFewH2 { found: 3, required: 5 },
                ValidationIssue::TooFewFaqs { found: 2, required: 5 },
            ]
        );
    }

    #[test]
    fn test_article_completeness() {
        let body = article_body(true, 5, 5);
        assert_eq!(count_h1(&body), 1);
        assert_eq!(count_h2(&body), 5);
        assert!(validate(&body, ValidationMode::Article).is_empty());
    }

    #[test]
    fn test_no_h2_reports_both_issues() {
        let body = "# Title\n\nQ: orphan question?\nA: answer";
        let issues = validate(body, ValidationMode::Article);
        assert_eq!(
            issues,
            vec![
                ValidationIssue::TooFewH2 { found: 0, required: 5 },
                ValidationIssue::TooFewFaqs { found: 0, required: 5 },
            ]
        );
    }

    #[test]
    fn test_faq_scan_stops_at_next_h2() {
        let body = "## FAQ\nQ: one?\nQ: two?\n## After\nQ: three?\nQ: four?";
        assert_eq!(count_faqs(body), 2);
    }

    #[test]
    fn test_indented_faq_heading_starts_scan() {
        let body = "# Title\n  ## FAQs\nQ: one?\nQ: two?\nQ: three?\n## Next\nQ: four?";
        assert_eq!(count_faqs(body), 3);
    }

    #[test]
    fn test_faq_question_pattern_is_lenient() {
        let body = "## Frequently asked\n## faqs and answers\n   q: lower?\n\tQ:  tabbed?\nQ:missing-space";
        assert_eq!(count_faqs(body), 2);
    }

    #[test]
    fn test_issue_strings() {
        assert_eq!(ValidationIssue::MissingH1.to_string(), "Missing H1 title");
        assert_eq!(
            ValidationIssue::TooFewFaqs { found: 1, required: 5 }.to_string(),
            "FAQs must include at least 5 Q/A pairs"
        );
        assert_eq!(
            ValidationIssue::SectionBulletsOutOfRange {
                heading: "Intro".into(),
                found: 7,
                min: 3,
                max: 6
            }
            .to_string(),
            "Section \"Intro\" must have 3-6 bullet points (found 7)"
        );
    }

    fn outline_with(section_bullets: usize, faq_bullets: usize) -> String {
        let mut lines = vec!["# Outline".to_string()];
        for i in 0..7 {
            lines.push(format!("## Section {}", i));
            let n = if i == 0 { section_bullets } else { 4 };
            for j in 0..n {
                lines.push(format!("- point {}", j));
            }
        }
        lines.push("## FAQs".to_string());
        for j in 0..faq_bullets {
            lines.push(format!("- question {}?", j));
        }
        lines.join("\n")
    }

    #[test]
    fn test_outline_seven_bullets_flagged_outside_faqs() {
        let issues = validate(&outline_with(7, 5), ValidationMode::Outline);
        assert_eq!(
            issues,
            vec![ValidationIssue::SectionBulletsOutOfRange {
                heading: "Section 0".into(),
                found: 7,
                min: 3,
                max: 6,
            }]
        );
    }

    #[test]
    fn test_outline_seven_bullets_allowed_under_faqs() {
        assert!(validate(&outline_with(4, 7), ValidationMode::Outline).is_empty());
    }

    #[test]
    fn test_outline_faq_bounds() {
        let issues = validate(&outline_with(4, 9), ValidationMode::Outline);
        assert_eq!(
            issues,
            vec![ValidationIssue::FaqBulletsOutOfRange { found: 9, min: 5, max: 8 }]
        );
    }

    #[test]
    fn test_outline_faq_heading_is_case_sensitive() {
        let body = outline_with(4, 5).replace("## FAQs", "## faqs");
        let issues = validate(&body, ValidationMode::Outline);
        assert!(issues.contains(&ValidationIssue::MissingFaqSection));
    }

    #[test]
    fn test_outline_too_few_headings() {
        let body = "# Outline\n## One\n- a\n- b\n- c\n## FAQs\n- q1\n- q2\n- q3\n- q4\n- q5";
        assert_eq!(
            validate(body, ValidationMode::Outline),
            vec![ValidationIssue::TooFewH2 { found: 2, required: 8 }]
        );
    }

    #[test]
    fn test_bullet_pattern() {
        let counts = section_bullet_counts("## A\n- one\n  -   two\n-\n-nospace\n* star");
        assert_eq!(counts, vec![("A".to_string(), 2)]);
    }
}
