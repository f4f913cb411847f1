//! Optimizer: merges ATS issues, missing keywords and grammar issues into one
//! ranked action list, with keyword-placement guidance and section suggestions.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::ats_checker::AtsReport;
use crate::analysis::grammar_checker::GrammarReport;
use crate::analysis::keyword_matcher::{KeywordScore, MatchResult};
use crate::analysis::resume_parser::{StructuredResume, UNLABELED};
use crate::analysis::settings::AnalysisConfig;
use crate::analysis::tokenizer::{normalize, TokenSet};
use crate::analysis::types::{Issue, IssueKind, Location, Severity};

static SENTENCE_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+(?:\s+|$)|\n").unwrap());

const CORE_SECTIONS: &[&str] = &["Experience", "Education", "Skills"];
const PREFERRED_PLACEMENT: &[&str] = &["Skills", "Experience"];
const MAX_PLACEMENT_SECTIONS: usize = 2;
const MAX_RENAMES: usize = 5;
const MAX_CONTEXT_CHARS: usize = 100;

// Bracketed parts are for the candidate to fill in with real figures.
const EXAMPLE_TEMPLATES: &[&str] = &[
    "Developed {keyword}-based solutions that improved [metric] by [X]%",
    "Implemented {keyword} to streamline [process], reducing [time or cost] by [X]%",
    "Led a team using {keyword} to deliver [outcome] ahead of schedule",
    "Built scalable {keyword} services supporting [N]+ users",
    "Used {keyword} to reduce [metric] by [X]%",
];

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixSource {
    Ats,
    Keyword,
    Grammar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityFix {
    /// 1 = critical (blocks ATS parsing or top missing keyword), 2 = improvement.
    pub priority: u8,
    pub source: FixSource,
    pub category: String,
    pub message: String,
    pub fix: String,
    pub location: Option<Location>,
    pub keyword_weight: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordPlacement {
    pub keyword: String,
    pub weight: f64,
    pub sections: Vec<String>, // 1 – 2 candidate sections
    pub example: String,
    /// Job-description sentence that mentions the keyword.
    pub context: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionAction {
    Rename,
    Add,
    Quantify,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSuggestion {
    pub action: SectionAction,
    pub section: String,
    pub current: Option<String>,
    pub suggestion: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizationPlan {
    pub priority_fixes: Vec<PriorityFix>,
    pub keyword_placement: Vec<KeywordPlacement>,
    pub section_suggestions: Vec<SectionSuggestion>,
}

// ────────────────────────────────────────────────────────────────────────────
// Optimizer
// ────────────────────────────────────────────────────────────────────────────

#[tracing::instrument(skip_all)]
pub fn optimize(
    match_result: &MatchResult,
    ats: &AtsReport,
    grammar: &GrammarReport,
    resume: &StructuredResume,
    job_text: &str,
    config: &AnalysisConfig,
) -> OptimizationPlan {
    let mut missing: Vec<&KeywordScore> = match_result.missing().collect();
    missing.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    missing.truncate(config.max_keyword_suggestions());

    let placement_sections = placement_sections(resume);
    let sentences = job_sentences(job_text, config);
    let keyword_placement: Vec<KeywordPlacement> = missing
        .iter()
        .enumerate()
        .map(|(idx, kw)| KeywordPlacement {
            keyword: kw.keyword.clone(),
            weight: kw.weight,
            sections: placement_sections.clone(),
            example: example_sentence(&kw.keyword, idx),
            context: keyword_context(&sentences, &kw.keyword),
        })
        .collect();

    let priority_fixes = rank_fixes(&ats.issues, &missing, &grammar.issues, &placement_sections);
    let section_suggestions = section_suggestions(resume, config);

    debug!(
        fixes = priority_fixes.len(),
        placements = keyword_placement.len(),
        section_suggestions = section_suggestions.len(),
        "optimization plan built"
    );

    OptimizationPlan {
        priority_fixes,
        keyword_placement,
        section_suggestions,
    }
}

/// Skills, then Experience, then any other detected section; `Skills` when nothing is detected.
fn placement_sections(resume: &StructuredResume) -> Vec<String> {
    let detected: Vec<&str> = resume.labels().collect();
    let mut picks: Vec<String> = PREFERRED_PLACEMENT
        .iter()
        .filter(|label| detected.contains(label))
        .map(|label| label.to_string())
        .collect();
    for label in detected.iter().filter(|l| **l != UNLABELED) {
        if picks.len() >= MAX_PLACEMENT_SECTIONS {
            break;
        }
        if !picks.iter().any(|p| p.as_str() == *label) {
            picks.push(label.to_string());
        }
    }
    picks.truncate(MAX_PLACEMENT_SECTIONS);
    if picks.is_empty() {
        picks.push("Skills".to_string());
    }
    picks
}

/// Job-description sentences paired with their normalised tokens.
fn job_sentences<'a>(job_text: &'a str, config: &AnalysisConfig) -> Vec<(&'a str, TokenSet)> {
    SENTENCE_BREAK_RE
        .split(job_text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| (s, normalize(s, config)))
        .collect()
}

/// First sentence whose canonical terms include `keyword`, cut to `MAX_CONTEXT_CHARS`.
fn keyword_context(sentences: &[(&str, TokenSet)], keyword: &str) -> Option<String> {
    sentences
        .iter()
        .find(|(_, tokens)| tokens.canonical_terms().any(|t| t == keyword))
        .map(|(sentence, _)| {
            sentence
                .chars()
                .take(MAX_CONTEXT_CHARS)
                .collect::<String>()
                .trim_end()
                .to_string()
        })
}

pub fn example_sentence(keyword: &str, idx: usize) -> String {
    EXAMPLE_TEMPLATES[idx % EXAMPLE_TEMPLATES.len()].replace("{keyword}", keyword)
}

fn issue_fix(issue: &Issue, source: FixSource, priority: u8) -> PriorityFix {
    PriorityFix {
        priority,
        source,
        category: issue.category.clone(),
        message: issue.message.clone(),
        fix: issue.fix.clone(),
        location: issue.location.clone(),
        keyword_weight: None,
    }
}

fn rank_fixes(
    ats_issues: &[Issue],
    missing: &[&KeywordScore],
    grammar_issues: &[Issue],
    sections: &[String],
) -> Vec<PriorityFix> {
    let mut ats: Vec<&Issue> = ats_issues
        .iter()
        .filter(|i| i.kind == IssueKind::Ats)
        .collect();
    ats.sort_by(|a, b| b.deduction.cmp(&a.deduction));

    let mut grammar: Vec<&Issue> = grammar_issues.iter().collect();
    grammar.sort_by(|a, b| b.severity.cmp(&a.severity));

    let top_weight = missing.iter().map(|k| k.weight).fold(f64::MIN, f64::max);
    let target = sections.join(" or ");

    let ats_fixes = ats.into_iter().map(|issue| {
        let priority = if issue.severity == Severity::High { 1 } else { 2 };
        issue_fix(issue, FixSource::Ats, priority)
    });

    let keyword_fixes = missing.iter().map(|kw| PriorityFix {
        priority: if kw.weight == top_weight { 1 } else { 2 },
        source: FixSource::Keyword,
        category: "missing_keyword".to_string(),
        message: format!("Missing keyword \"{}\" from the job description", kw.keyword),
        fix: format!("Add \"{}\" to {target} where it reflects real experience", kw.keyword),
        location: None,
        keyword_weight: Some(kw.weight),
    });

    let grammar_fixes = grammar
        .into_iter()
        .map(|issue| issue_fix(issue, FixSource::Grammar, 2));

    ats_fixes.chain(keyword_fixes).chain(grammar_fixes).collect()
}

fn indefinite_article(word: &str) -> &'static str {
    match word.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

fn section_suggestions(
    resume: &StructuredResume,
    config: &AnalysisConfig,
) -> Vec<SectionSuggestion> {
    let mut suggestions = Vec::new();

    let renames = resume
        .sections
        .iter()
        .filter(|s| s.has_nonstandard_header())
        .filter_map(|s| {
            let header = s.header.as_deref()?;
            Some((header.to_string(), s.label.clone()))
        })
        .chain(resume.unrecognized_headers.iter().filter_map(|h| {
            h.text
                .split(|c: char| !c.is_alphabetic())
                .filter(|w| !w.is_empty())
                .find_map(|w| config.header_hint(&w.to_lowercase()))
                .map(|label| (h.text.clone(), label.to_string()))
        }))
        .take(MAX_RENAMES);
    for (current, label) in renames {
        suggestions.push(SectionSuggestion {
            action: SectionAction::Rename,
            suggestion: format!("Rename '{current}' to the standard header '{label}'"),
            section: label,
            current: Some(current),
        });
    }

    for label in CORE_SECTIONS {
        if !resume.has_section(label) {
            suggestions.push(SectionSuggestion {
                action: SectionAction::Add,
                section: label.to_string(),
                current: None,
                suggestion: format!(
                    "Add {} '{label}' section with a standard header",
                    indefinite_article(label)
                ),
            });
        }
    }

    for section in resume
        .sections
        .iter()
        .filter(|s| s.label == "Experience" && s.line_count > 0 && s.metric_lines == 0)
    {
        suggestions.push(SectionSuggestion {
            action: SectionAction::Quantify,
            section: section.label.clone(),
            current: section.header.clone(),
            suggestion: "Add numbers to your experience bullets: team size, percentages, amounts"
                .to_string(),
        });
    }

    suggestions
}
