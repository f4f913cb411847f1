//! ATS Checker: a fixed, ordered battery of independent formatting and
//! content rules. Each triggered rule emits one `Issue` and deducts points
//! (by severity, from `AnalysisConfig`) from a starting score of 100.
//!
//! Rules never look at each other's outcome; order only affects presentation.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::resume_parser::{parse_resume, StructuredResume};
use crate::analysis::settings::AnalysisConfig;
use crate::analysis::types::{Issue, Location, Severity};

// Text, then a tab or three or more spaces, then more text.
static TABLE_GAP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S(?:\t+| {3,})\S").unwrap());

const MIN_TABLE_LINES: usize = 3;
const MAX_BOX_DRAWING: usize = 5;
const MIN_WORDS: usize = 200;
const MAX_WORDS: usize = 1500;

const DECORATIVE_CHARS: &[char] = &[
    '★', '☆', '●', '○', '■', '□', '▪', '▫', '◆', '◇', '►', '▶', '✓', '✔', '✗', '✘', '➢', '➤',
    '❖', '♦', '❧', '→', '⇒', '❯',
];

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompatibilityLabel {
    Excellent,
    Good,
    #[serde(rename = "Needs Work")]
    NeedsWork,
}

impl CompatibilityLabel {
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => CompatibilityLabel::Excellent,
            60..=79 => CompatibilityLabel::Good,
            _ => CompatibilityLabel::NeedsWork,
        }
    }
}

impl fmt::Display for CompatibilityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CompatibilityLabel::Excellent => "Excellent",
            CompatibilityLabel::Good => "Good",
            CompatibilityLabel::NeedsWork => "Needs Work",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsReport {
    pub score: u32, // 0 – 100
    pub issues: Vec<Issue>,
    pub total_issues: usize,
    pub compatibility_label: CompatibilityLabel,
}

// ────────────────────────────────────────────────────────────────────────────
// Rule table
// ────────────────────────────────────────────────────────────────────────────

/// Everything a rule may inspect. Built once per check.
pub struct RuleContext<'a> {
    pub text: &'a str,
    pub lines: Vec<&'a str>,
    pub resume: &'a StructuredResume,
    pub config: &'a AnalysisConfig,
}

/// What a triggered rule reports; the checker turns it into an `Issue`.
pub struct Finding {
    pub severity: Severity,
    pub message: String,
    pub fix: String,
    pub location: Option<Location>,
}

/// One independent ATS check. Add a rule by implementing this and listing it in `RULES`.
pub trait AtsRule: Send + Sync {
    fn id(&self) -> &'static str;
    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding>;
}

pub const RULES: &[&dyn AtsRule] = &[
    &TablesRule,
    &ComplexFormattingRule,
    &SectionHeadersRule,
    &SpecialCharactersRule,
    &ContactInfoRule,
    &DocumentLengthRule,
    &QuantifiedAchievementsRule,
];

fn first_line_where(lines: &[&str], pred: impl Fn(&str) -> bool) -> Option<Location> {
    lines
        .iter()
        .position(|&l| pred(l))
        .map(|idx| Location::Line(idx + 1))
}

pub struct TablesRule;

impl AtsRule for TablesRule {
    fn id(&self) -> &'static str {
        "tables"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let is_row = |l: &str| TABLE_GAP_RE.is_match(l.trim());
        let rows = ctx.lines.iter().filter(|&&l| is_row(l)).count();
        (rows >= MIN_TABLE_LINES).then(|| Finding {
            severity: Severity::High,
            message: format!("Table-like layout detected on {rows} lines"),
            fix: "Replace tables and column layouts with plain single-column text".to_string(),
            location: first_line_where(&ctx.lines, is_row),
        })
    }
}

pub struct ComplexFormattingRule;

impl AtsRule for ComplexFormattingRule {
    fn id(&self) -> &'static str {
        "complex_formatting"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let is_box = |c: char| ('\u{2500}'..='\u{257F}').contains(&c);
        let count = ctx.text.chars().filter(|c| is_box(*c)).count();
        (count > MAX_BOX_DRAWING).then(|| Finding {
            severity: Severity::Medium,
            message: format!("Complex formatting detected ({count} box-drawing characters)"),
            fix: "Use simple, clean formatting without borders or text boxes".to_string(),
            location: first_line_where(&ctx.lines, |l| l.chars().any(is_box)),
        })
    }
}

pub struct SectionHeadersRule;

impl AtsRule for SectionHeadersRule {
    fn id(&self) -> &'static str {
        "section_headers"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let headers = &ctx.resume.unrecognized_headers;
        let first = headers.first()?;
        let shown: Vec<&str> = headers.iter().take(3).map(|h| h.text.as_str()).collect();

        let hint = first
            .text
            .split(|c: char| !c.is_alphabetic())
            .filter(|w| !w.is_empty())
            .find_map(|w| ctx.config.header_hint(&w.to_lowercase()));
        let fix = match hint {
            Some(label) => format!("Rename '{}' to '{label}'", first.text),
            None => "Use standard headers like Experience, Education, Skills and Summary".to_string(),
        };

        Some(Finding {
            severity: Severity::Medium,
            message: format!("Non-standard section headers found: {}", shown.join(", ")),
            fix,
            location: Some(Location::Line(first.line)),
        })
    }
}

pub struct SpecialCharactersRule;

impl AtsRule for SpecialCharactersRule {
    fn id(&self) -> &'static str {
        "special_characters"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let is_decorative = |c: char| {
            DECORATIVE_CHARS.contains(&c)
                || ('\u{1F300}'..='\u{1FAFF}').contains(&c)
                || ('\u{2600}'..='\u{27BF}').contains(&c)
        };
        let count = ctx.text.chars().filter(|c| is_decorative(*c)).count();
        (count > 0).then(|| Finding {
            severity: Severity::Low,
            message: format!("{count} decorative symbols or emoji found"),
            fix: "Remove decorative symbols; use plain '•' or '-' bullets".to_string(),
            location: first_line_where(&ctx.lines, |l| l.chars().any(is_decorative)),
        })
    }
}

pub struct ContactInfoRule;

impl AtsRule for ContactInfoRule {
    fn id(&self) -> &'static str {
        "contact_info"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let contact = &ctx.resume.contact;
        let (severity, missing) = match (contact.has_email(), contact.has_phone()) {
            (true, true) => return None,
            (false, false) => (Severity::High, "email address and phone number"),
            (false, true) => (Severity::Medium, "email address"),
            (true, false) => (Severity::Medium, "phone number"),
        };
        Some(Finding {
            severity,
            message: format!("No {missing} found at the top of the résumé"),
            fix: format!("Add your {missing} in plain text in the header area"),
            location: ctx
                .resume
                .sections
                .first()
                .map(|s| Location::Section(s.label.clone())),
        })
    }
}

pub struct DocumentLengthRule;

impl AtsRule for DocumentLengthRule {
    fn id(&self) -> &'static str {
        "document_length"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        let words = ctx.resume.total_words;
        if words < MIN_WORDS {
            Some(Finding {
                severity: Severity::Medium,
                message: format!("Résumé is short ({words} words)"),
                fix: "Expand on your experience and achievements".to_string(),
                location: None,
            })
        } else if words > MAX_WORDS {
            Some(Finding {
                severity: Severity::Low,
                message: format!("Résumé is long ({words} words)"),
                fix: "Trim to the most relevant one or two pages".to_string(),
                location: None,
            })
        } else {
            None
        }
    }
}

pub struct QuantifiedAchievementsRule;

impl AtsRule for QuantifiedAchievementsRule {
    fn id(&self) -> &'static str {
        "quantified_achievements"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Finding> {
        if ctx.resume.metric_lines() > 0 {
            return None;
        }
        Some(Finding {
            severity: Severity::Medium,
            message: "No quantified achievements found".to_string(),
            fix: "Add numbers, percentages or amounts to show measurable results".to_string(),
            location: ctx
                .resume
                .section("Experience")
                .map(|s| Location::Section(s.label.clone())),
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Checker
// ────────────────────────────────────────────────────────────────────────────

#[tracing::instrument(skip_all)]
pub fn check_ats(text: &str, config: &AnalysisConfig) -> AtsReport {
    let resume = parse_resume(text, config);
    check_ats_parsed(text, &resume, config)
}

/// Runs the rule battery against an already-parsed résumé.
pub fn check_ats_parsed(
    text: &str,
    resume: &StructuredResume,
    config: &AnalysisConfig,
) -> AtsReport {
    let ctx = RuleContext {
        text,
        lines: text.lines().collect(),
        resume,
        config,
    };

    let issues: Vec<Issue> = RULES
        .iter()
        .filter(|rule| config.rule_enabled(rule.id()))
        .filter_map(|rule| {
            let finding = rule.evaluate(&ctx)?;
            let issue = Issue::ats(
                rule.id(),
                finding.severity,
                config.deduction(finding.severity),
                finding.message,
                finding.fix,
            );
            Some(match finding.location {
                Some(location) => issue.at(location),
                None => issue,
            })
        })
        .collect();

    let deducted = issues
        .iter()
        .map(|i| i.deduction)
        .fold(0u32, u32::saturating_add);
    let score = 100u32.saturating_sub(deducted);

    debug!(score, issues = issues.len(), "ats check complete");

    AtsReport {
        score,
        total_issues: issues.len(),
        compatibility_label: CompatibilityLabel::from_score(score),
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(report: &AtsReport) -> Vec<&str> {
        report.issues.iter().map(|i| i.category.as_str()).collect()
    }

    const CLEAN: &str = "Jane Doe\n\
        jane@example.com | 555-123-4567\n\
        EXPERIENCE\n\
        • Led a team of 5 engineers and cut latency by 40%\n\
        EDUCATION\n\
        State University\n\
        SKILLS\n\
        Rust, Go";

    #[test]
    fn test_contact_and_metric_present_means_no_such_issues() {
        let report = check_ats(CLEAN, &AnalysisConfig::default());
        let cats = categories(&report);
        assert!(!cats.contains(&"contact_info"));
        assert!(!cats.contains(&"quantified_achievements"));
    }

    #[test]
    fn test_scenario_resume_has_contact_and_metric() {
        let text = "John Doe. john@x.com. 555-123-4567. EXPERIENCE: Led team of 5 engineers, \
            increased revenue 20%. SKILLS: Python, React.";
        let report = check_ats(text, &AnalysisConfig::default());
        let cats = categories(&report);
        assert!(!cats.contains(&"contact_info"));
        assert!(!cats.contains(&"quantified_achievements"));
    }

    #[test]
    fn test_missing_both_contacts_is_high() {
        let report = check_ats("Jane Doe\nEXPERIENCE\nBuilt 3 apps", &AnalysisConfig::default());
        let issue = report.issues.iter().find(|i| i.category == "contact_info").unwrap();
        assert_eq!(issue.severity, Severity::High);
        assert_eq!(issue.deduction, 15);
    }

    #[test]
    fn test_missing_phone_only_is_medium() {
        let text = "Jane Doe jane@example.com\nEXPERIENCE\nBuilt 3 apps";
        let report = check_ats(text, &AnalysisConfig::default());
        let issue = report.issues.iter().find(|i| i.category == "contact_info").unwrap();
        assert_eq!(issue.severity, Severity::Medium);
    }

    #[test]
    fn test_table_layout_detected() {
        let text = "Name\nCompany     Role     Years\nAcme\tEngineer\t2020\nInitech     Lead     2022\n";
        let report = check_ats(text, &AnalysisConfig::default());
        let issue = report.issues.iter().find(|i| i.category == "tables").unwrap();
        assert_eq!(issue.severity, Severity::High);
        assert_eq!(issue.location, Some(Location::Line(2)));
    }

    #[test]
    fn test_two_spaced_lines_are_not_a_table() {
        let text = "Name\nAcme     2020\nInitech     2022\n";
        assert!(!categories(&check_ats(text, &AnalysisConfig::default())).contains(&"tables"));
    }

    #[test]
    fn test_box_drawing_triggers_complex_formatting() {
        let text = "Name\n┌──────┐\n│ Jane │\n└──────┘";
        assert!(categories(&check_ats(text, &AnalysisConfig::default())).contains(&"complex_formatting"));
    }

    #[test]
    fn test_decorative_characters_flagged_plain_bullets_not() {
        let config = AnalysisConfig::default();
        assert!(categories(&check_ats("Name\n★ Rockstar", &config)).contains(&"special_characters"));
        assert!(!categories(&check_ats("Name\n• Shipped", &config)).contains(&"special_characters"));
    }

    #[test]
    fn test_nonstandard_header_with_hint() {
        let report = check_ats("JANE DOE\nMY WORK STORY\nStuff", &AnalysisConfig::default());
        let issue = report.issues.iter().find(|i| i.category == "section_headers").unwrap();
        assert!(issue.message.contains("MY WORK STORY"));
        assert!(issue.fix.contains("Experience"));
    }

    #[test]
    fn test_score_is_100_minus_deductions_and_labelled() {
        let report = check_ats(CLEAN, &AnalysisConfig::default());
        let deducted: u32 = report.issues.iter().map(|i| i.deduction).sum();
        assert_eq!(report.score, 100 - deducted);
        assert_eq!(report.compatibility_label, CompatibilityLabel::from_score(report.score));
        assert_eq!(report.total_issues, report.issues.len());
    }

    #[test]
    fn test_score_floors_at_zero() {
        let config = AnalysisConfig::from_json(
            r#"{"rule_deductions": {"high": 90, "medium": 90, "low": 90}}"#,
        )
        .unwrap();
        let report = check_ats("", &config);
        assert_eq!(report.score, 0);
        assert_eq!(report.compatibility_label, CompatibilityLabel::NeedsWork);
    }

    #[test]
    fn test_maximum_deductions_sum_without_overflow() {
        let config = AnalysisConfig::from_json(
            r#"{"rule_deductions": {"high": 100, "medium": 100, "low": 100}}"#,
        )
        .unwrap();
        let report = check_ats("Jane Doe\nEXPERIENCE\nBuilt apps", &config);
        assert!(report.total_issues >= 2);
        assert_eq!(report.score, 0);
    }

    #[test]
    fn test_disabled_rule_is_skipped() {
        let config = AnalysisConfig::from_json(r#"{"disabled_rules": ["document_length"]}"#).unwrap();
        assert!(!categories(&check_ats(CLEAN, &config)).contains(&"document_length"));
    }

    #[test]
    fn test_label_thresholds() {
        assert_eq!(CompatibilityLabel::from_score(80), CompatibilityLabel::Excellent);
        assert_eq!(CompatibilityLabel::from_score(79), CompatibilityLabel::Good);
        assert_eq!(CompatibilityLabel::from_score(60), CompatibilityLabel::Good);
        assert_eq!(CompatibilityLabel::from_score(59), CompatibilityLabel::NeedsWork);
        assert_eq!(
            serde_json::to_value(CompatibilityLabel::NeedsWork).unwrap(),
            "Needs Work"
        );
    }

    #[test]
    fn test_rule_ids_are_unique() {
        let mut ids: Vec<&str> = RULES.iter().map(|r| r.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), RULES.len());
    }
}
