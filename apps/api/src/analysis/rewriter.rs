//! Deterministic auto-fix: applies the caller-selected rewrites to a résumé.
//!
//! Only edits that cannot misstate the candidate's record are offered; no
//! metrics or achievements are ever invented.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::grammar_checker::suggest_action_verb;
use crate::analysis::keyword_matcher::match_keywords;
use crate::analysis::resume_parser::parse_resume;
use crate::analysis::settings::AnalysisConfig;

const MAX_ADDED_KEYWORDS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixKind {
    /// Append up to three missing job keywords to the Skills section.
    MissingKeywords,
    /// Swap weak phrases for strong action verbs.
    ActionVerbs,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoFixResult {
    pub original_text: String,
    pub fixed_text: String,
    pub improvements_applied: Vec<String>,
    pub word_count_change: i64,
}

#[tracing::instrument(skip_all)]
pub fn auto_fix(
    resume_text: &str,
    job_text: &str,
    selected: &[FixKind],
    config: &AnalysisConfig,
) -> AutoFixResult {
    let mut fixed = resume_text.to_string();
    let mut applied = Vec::new();

    if selected.contains(&FixKind::MissingKeywords) {
        let matched = match_keywords(&fixed, job_text, config);
        let keywords: Vec<String> = matched
            .missing_keywords
            .into_iter()
            .take(MAX_ADDED_KEYWORDS)
            .collect();
        if !keywords.is_empty() {
            let (text, note) = add_skills(&fixed, &keywords, config);
            fixed = text;
            applied.push(note);
        }
    }

    if selected.contains(&FixKind::ActionVerbs) {
        for phrase in config.weak_phrases() {
            let verb = suggest_action_verb(phrase, config);
            if let Some(text) = replace_first(&fixed, phrase, &verb) {
                fixed = text;
                applied.push(format!("Replaced '{phrase}' with '{verb}'"));
            }
        }
    }

    let word_count_change =
        fixed.split_whitespace().count() as i64 - resume_text.split_whitespace().count() as i64;
    debug!(fixes = applied.len(), word_count_change, "auto-fix applied");

    AutoFixResult {
        original_text: resume_text.to_string(),
        fixed_text: fixed,
        improvements_applied: applied,
        word_count_change,
    }
}

fn add_skills(text: &str, keywords: &[String], config: &AnalysisConfig) -> (String, String) {
    let joined = keywords.join(", ");
    let parsed = parse_resume(text, config);
    let mut lines: Vec<String> = text.lines().map(str::to_string).collect();

    let Some(skills) = parsed.section("Skills") else {
        let mut out = text.trim_end().to_string();
        out.push_str(&format!("\n\nSKILLS\n{joined}"));
        if text.ends_with('\n') {
            out.push('\n');
        }
        return (out, format!("Created Skills section with: {joined}"));
    };

    let header_idx = skills.lines.start;
    let last_content = (header_idx + 1..skills.lines.end)
        .rev()
        .find(|idx| !lines[*idx].trim().is_empty());
    let header_has_items = lines[header_idx]
        .split_once(':')
        .is_some_and(|(_, rest)| !rest.trim().is_empty());

    match last_content {
        Some(idx) => append_items(&mut lines[idx], &joined),
        None if header_has_items => append_items(&mut lines[header_idx], &joined),
        None => lines.insert(header_idx + 1, joined.clone()),
    }

    let mut out = lines.join("\n");
    if text.ends_with('\n') {
        out.push('\n');
    }
    (out, format!("Added missing keywords to Skills: {joined}"))
}

fn append_items(line: &mut String, items: &str) {
    let trimmed_len = line.trim_end().trim_end_matches([',', ';', '.']).len();
    line.truncate(trimmed_len);
    line.push_str(", ");
    line.push_str(items);
}

/// Replaces the first word-bounded, case-insensitive occurrence of `phrase`.
fn replace_first(text: &str, phrase: &str, verb: &str) -> Option<String> {
    let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(phrase))).ok()?;
    let found = re.find(text)?;
    let capitalised = found.as_str().starts_with(char::is_uppercase);
    let replacement = if capitalised {
        let mut chars = verb.chars();
        chars
            .next()
            .map(|first| first.to_uppercase().chain(chars).collect::<String>())
            .unwrap_or_default()
    } else {
        verb.to_string()
    };
    Some(format!(
        "{}{}{}",
        &text[..found.start()],
        replacement,
        &text[found.end()..]
    ))
}
