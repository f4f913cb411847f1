//! Grammar/Style Checker: line-by-line style rules plus a Flesch readability score.
//!
//! Like the ATS checker, each check is an independent rule in a table; the
//! heuristics are deliberately approximate but fully deterministic.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::settings::AnalysisConfig;
use crate::analysis::types::{Issue, Location, Severity};

static PASSIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:was|were|been|being)\s+(?:\w+ly\s+)?(?:\w+(?:ed|en)|responsible\s+for\s+\w+ing)\b",
    )
    .unwrap()
});

static FIRST_PERSON_I_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bI\b").unwrap());

static FIRST_PERSON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:me|my|mine|myself)\b").unwrap());

const PASSIVE_CAP: usize = 5;
const UNKNOWN_WORD_CAP: usize = 5;
const MIN_SPELLCHECK_LEN: usize = 4;
const REPETITION_THRESHOLD: usize = 3;
const REPETITION_CAP: usize = 3;
const FEW_ACTION_VERBS: usize = 5;

const STEM_SUFFIXES: &[&str] = &["ing", "ed", "es", "s", "ly", "ers", "er", "d"];

// Preferred replacement verb for the built-in weak phrases.
const PHRASE_VERBS: &[(&str, &str)] = &[
    ("responsible for", "led"),
    ("duties included", "managed"),
    ("worked on", "developed"),
    ("helped with", "delivered"),
    ("helped to", "drove"),
    ("participated in", "executed"),
    ("assisted with", "coordinated"),
    ("assisted in", "coordinated"),
    ("involved in", "delivered"),
    ("tasked with", "executed"),
    ("in charge of", "directed"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarReport {
    pub total_issues: usize,
    pub readability_score: u32, // 0 – 100, Flesch reading ease
    pub action_verb_count: usize,
    pub weak_phrase_count: usize,
    pub issues: Vec<Issue>,
    pub suggestions: Vec<String>,
}

/// Deterministic replacement verb for a weak phrase.
pub fn suggest_action_verb(phrase: &str, config: &AnalysisConfig) -> String {
    let verbs = config.action_verbs();
    let preferred = PHRASE_VERBS
        .iter()
        .find(|(p, _)| *p == phrase)
        .map(|(_, v)| *v)
        .filter(|v| config.is_action_verb(v));
    match preferred {
        Some(verb) => verb.to_string(),
        None if verbs.is_empty() => "led".to_string(),
        None => {
            let idx = phrase.bytes().map(usize::from).sum::<usize>() % verbs.len();
            verbs[idx].clone()
        }
    }
}

/// Byte offsets of `phrase` in `haystack` that sit on word boundaries.
pub fn find_phrase(haystack: &str, phrase: &str) -> Vec<usize> {
    haystack
        .match_indices(phrase)
        .filter(|(start, _)| {
            let before = haystack[..*start].chars().next_back();
            let after = haystack[start + phrase.len()..].chars().next();
            !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
        })
        .map(|(start, _)| start)
        .collect()
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphabetic()).filter(|w| !w.is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Rule table
// ────────────────────────────────────────────────────────────────────────────

pub struct GrammarContext<'a> {
    pub lines: Vec<&'a str>,
    pub config: &'a AnalysisConfig,
}

pub trait GrammarRule: Send + Sync {
    fn id(&self) -> &'static str;
    fn check(&self, ctx: &GrammarContext<'_>) -> Vec<Issue>;
}

pub const GRAMMAR_RULES: &[&dyn GrammarRule] = &[
    &WeakPhraseRule,
    &PassiveVoiceRule,
    &FirstPersonRule,
    &SpellingRule,
    &RepetitionRule,
];

fn numbered<'a>(lines: &'a [&'a str]) -> impl Iterator<Item = (Location, String)> + 'a {
    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| (Location::Line(idx + 1), line.to_string()))
}

pub struct WeakPhraseRule;

impl GrammarRule for WeakPhraseRule {
    fn id(&self) -> &'static str {
        "weak_phrase"
    }

    fn check(&self, ctx: &GrammarContext<'_>) -> Vec<Issue> {
        let mut issues = Vec::new();
        for (location, line) in numbered(&ctx.lines) {
            let lower = line.to_lowercase();
            for phrase in ctx.config.weak_phrases() {
                if find_phrase(&lower, phrase).is_empty() {
                    continue;
                }
                let verb = suggest_action_verb(phrase, ctx.config);
                issues.push(
                    Issue::grammar(
                        self.id(),
                        Severity::Medium,
                        format!("Weak phrase \"{phrase}\""),
                        format!("Start with a strong action verb instead, e.g. \"{verb}\""),
                    )
                    .at(location.clone()),
                );
            }
        }
        issues
    }
}

pub struct PassiveVoiceRule;

impl GrammarRule for PassiveVoiceRule {
    fn id(&self) -> &'static str {
        "passive_voice"
    }

    fn check(&self, ctx: &GrammarContext<'_>) -> Vec<Issue> {
        numbered(&ctx.lines)
            .flat_map(|(location, line)| {
                PASSIVE_RE
                    .find_iter(&line)
                    .map(|m| (location.clone(), m.as_str().to_string()))
                    .collect::<Vec<_>>()
            })
            .take(PASSIVE_CAP)
            .map(|(location, phrase)| {
                Issue::grammar(
                    self.id(),
                    Severity::Low,
                    format!("Passive voice: \"{phrase}\""),
                    "Rewrite in active voice, leading with what you did",
                )
                .at(location)
            })
            .collect()
    }
}

pub struct FirstPersonRule;

impl GrammarRule for FirstPersonRule {
    fn id(&self) -> &'static str {
        "first_person"
    }

    fn check(&self, ctx: &GrammarContext<'_>) -> Vec<Issue> {
        numbered(&ctx.lines)
            .filter_map(|(location, line)| {
                let mut found: Vec<String> = FIRST_PERSON_I_RE
                    .find_iter(&line)
                    .chain(FIRST_PERSON_RE.find_iter(&line))
                    .map(|m| m.as_str().to_lowercase())
                    .collect();
                if found.is_empty() {
                    return None;
                }
                found.dedup();
                Some(
                    Issue::grammar(
                        self.id(),
                        Severity::Medium,
                        format!("First-person pronoun ({})", found.join(", ")),
                        "Drop first-person pronouns and start with the action",
                    )
                    .at(location),
                )
            })
            .collect()
    }
}

pub struct SpellingRule;

impl SpellingRule {
    fn is_known(word: &str, config: &AnalysisConfig) -> bool {
        if config.is_known_word(word) {
            return true;
        }
        STEM_SUFFIXES.iter().any(|suffix| {
            word.strip_suffix(*suffix).is_some_and(|stem| {
                !stem.is_empty()
                    && (config.is_known_word(stem) || config.is_known_word(&format!("{stem}e")))
            })
        })
    }

    /// Whitespace-separated tokens that are plain prose (no URLs, emails, versions).
    fn prose_tokens(line: &str) -> impl Iterator<Item = &str> {
        line.split_whitespace().filter(|raw| {
            let core = raw.trim_matches(|c: char| !c.is_alphanumeric());
            !core.chars().any(|c| c.is_ascii_digit() || "@/\\._".contains(c))
        })
    }
}

impl GrammarRule for SpellingRule {
    fn id(&self) -> &'static str {
        "spelling"
    }

    fn check(&self, ctx: &GrammarContext<'_>) -> Vec<Issue> {
        let mut issues = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut unknown = 0;

        for (location, line) in numbered(&ctx.lines) {
            for word in Self::prose_tokens(&line).flat_map(words) {
                let lower = word.to_lowercase();
                if seen.contains(&lower) {
                    continue;
                }

                if let Some(correction) = ctx.config.misspelling(&lower) {
                    seen.insert(lower.clone());
                    issues.push(
                        Issue::grammar(
                            self.id(),
                            Severity::High,
                            format!("Misspelling: \"{word}\""),
                            format!("Did you mean \"{correction}\"?"),
                        )
                        .at(location.clone()),
                    );
                    continue;
                }

                let is_lowercase = word.chars().all(char::is_lowercase);
                if unknown >= UNKNOWN_WORD_CAP
                    || !is_lowercase
                    || word.chars().count() < MIN_SPELLCHECK_LEN
                    || Self::is_known(&lower, ctx.config)
                {
                    continue;
                }
                seen.insert(lower.clone());
                unknown += 1;
                issues.push(
                    Issue::grammar(
                        self.id(),
                        Severity::Low,
                        format!("Unrecognised word: \"{word}\""),
                        "Check the spelling, or add the term to the spelling allowlist",
                    )
                    .at(location.clone()),
                );
            }
        }
        issues
    }
}

pub struct RepetitionRule;

impl GrammarRule for RepetitionRule {
    fn id(&self) -> &'static str {
        "repetition"
    }

    fn check(&self, ctx: &GrammarContext<'_>) -> Vec<Issue> {
        let all_words: Vec<String> = ctx
            .lines
            .iter()
            .flat_map(|l| words(l))
            .map(str::to_lowercase)
            .collect();

        ctx.config
            .action_verbs()
            .iter()
            .filter_map(|verb| {
                let count = all_words.iter().filter(|w| *w == verb).count();
                (count > REPETITION_THRESHOLD).then(|| {
                    Issue::grammar(
                        self.id(),
                        Severity::Low,
                        format!("\"{verb}\" used {count} times"),
                        "Vary your action verbs",
                    )
                })
            })
            .take(REPETITION_CAP)
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Readability
// ────────────────────────────────────────────────────────────────────────────

fn syllables(word: &str) -> usize {
    let lower = word.to_lowercase();
    let mut count = 0;
    let mut prev_vowel = false;
    for c in lower.chars() {
        let vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }
    if lower.ends_with('e') && !lower.ends_with("le") && count > 1 {
        count -= 1;
    }
    count.max(1)
}

/// Flesch reading ease, clamped to 0–100 and rounded. Sentences end at `.`, `!`,
/// `?` or a line break; text with no words scores 0.
pub fn readability_score(text: &str) -> u32 {
    let sentences = text
        .split(['.', '!', '?', '\n'])
        .filter(|s| words(s).next().is_some())
        .count();
    let word_list: Vec<&str> = words(text).collect();
    if word_list.is_empty() || sentences == 0 {
        return 0;
    }
    let total_words = word_list.len() as f64;
    let total_syllables: usize = word_list.iter().map(|w| syllables(w)).sum();
    let ease = 206.835
        - 1.015 * (total_words / sentences as f64)
        - 84.6 * (total_syllables as f64 / total_words);
    ease.clamp(0.0, 100.0).round() as u32
}

/// Total occurrences of configured action verbs in `text`.
pub fn count_action_verbs(text: &str, config: &AnalysisConfig) -> usize {
    words(text)
        .filter(|w| config.is_action_verb(&w.to_lowercase()))
        .count()
}

// ────────────────────────────────────────────────────────────────────────────
// Checker
// ────────────────────────────────────────────────────────────────────────────

#[tracing::instrument(skip_all)]
pub fn check_grammar(text: &str, config: &AnalysisConfig) -> GrammarReport {
    let ctx = GrammarContext {
        lines: text.lines().collect(),
        config,
    };

    let issues: Vec<Issue> = GRAMMAR_RULES
        .iter()
        .filter(|rule| config.rule_enabled(rule.id()))
        .flat_map(|rule| rule.check(&ctx))
        .collect();

    let readability_score = readability_score(text);
    let action_verb_count = count_action_verbs(text, config);
    let weak_phrase_count = issues.iter().filter(|i| i.category == "weak_phrase").count();
    let suggestions = general_suggestions(&issues, action_verb_count, config);

    debug!(
        issues = issues.len(),
        readability_score, action_verb_count, "grammar check complete"
    );

    GrammarReport {
        total_issues: issues.len(),
        readability_score,
        action_verb_count,
        weak_phrase_count,
        issues,
        suggestions,
    }
}

fn general_suggestions(
    issues: &[Issue],
    action_verb_count: usize,
    config: &AnalysisConfig,
) -> Vec<String> {
    let has = |category: &str| issues.iter().any(|i| i.category == category);
    let mut suggestions = Vec::new();

    if has("weak_phrase") {
        suggestions.push("Start bullet points with strong action verbs".to_string());
    }
    if has("passive_voice") {
        suggestions.push("Convert passive voice to active voice".to_string());
    }
    if has("first_person") {
        suggestions.push("Remove first-person pronouns (I, me, my)".to_string());
    }
    if has("spelling") {
        suggestions.push("Proofread for spelling errors".to_string());
    }
    if has("repetition") {
        suggestions.push("Vary your action verbs".to_string());
    }
    if action_verb_count < FEW_ACTION_VERBS {
        let examples: Vec<&str> = config.action_verbs().iter().take(3).map(String::as_str).collect();
        if !examples.is_empty() {
            suggestions.push(format!("Use more action verbs such as {}", examples.join(", ")));
        }
    }
    if suggestions.is_empty() {
        suggestions.push("Writing style looks strong".to_string());
    }
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(text: &str) -> GrammarReport {
        check_grammar(text, &AnalysisConfig::default())
    }

    fn count(report: &GrammarReport, category: &str) -> usize {
        report.issues.iter().filter(|i| i.category == category).count()
    }

    #[test]
    fn test_responsible_for_managing_is_weak_and_passive() {
        let report = check("I was responsible for managing a team");
        assert_eq!(count(&report, "weak_phrase"), 1);
        assert_eq!(count(&report, "passive_voice"), 1);
        assert_eq!(count(&report, "first_person"), 1);
        assert_eq!(count(&report, "spelling"), 0);
        assert_eq!(report.weak_phrase_count, 1);
    }

    #[test]
    fn test_passive_voice_patterns() {
        assert!(PASSIVE_RE.is_match("The system was redesigned"));
        assert!(PASSIVE_RE.is_match("reports were quickly written"));
        assert!(PASSIVE_RE.is_match("has been chosen"));
        assert!(!PASSIVE_RE.is_match("Redesigned the system"));
    }

    #[test]
    fn test_passive_voice_capped() {
        let text = "was fixed\nwas tested\nwas shipped\nwas mocked\nwas built\nwas planned\nwas staged";
        assert_eq!(count(&check(text), "passive_voice"), PASSIVE_CAP);
    }

    #[test]
    fn test_first_person_one_issue_per_line() {
        let report = check("My role: I led my team\nBuilt things for me");
        assert_eq!(count(&report, "first_person"), 2);
        assert_eq!(report.issues[0].location, Some(Location::Line(1)));
    }

    #[test]
    fn test_known_misspelling_is_high() {
        let report = check("Strong managment skills");
        let issue = report.issues.iter().find(|i| i.category == "spelling").unwrap();
        assert_eq!(issue.severity, Severity::High);
        assert!(issue.fix.contains("management"));
    }

    #[test]
    fn test_spelling_skips_caps_digits_and_urls() {
        let report = check("Used AWS and Kubernetes on k8s at github.com/jdoe with jane@x.com");
        assert_eq!(count(&report, "spelling"), 0);
    }

    #[test]
    fn test_unknown_lowercase_words_flagged_and_capped() {
        let report = check("qwzxa blorfed snarkle vimbly trompish glaxo frindle");
        assert_eq!(count(&report, "spelling"), UNKNOWN_WORD_CAP);
    }

    #[test]
    fn test_stemmed_words_are_known() {
        let report = check("managing teams while building services");
        assert_eq!(count(&report, "spelling"), 0);
    }

    #[test]
    fn test_repetition_over_threshold() {
        let report = check("Led a\nLed b\nLed c\nLed d");
        assert_eq!(count(&report, "repetition"), 1);
        assert_eq!(report.action_verb_count, 4);
    }

    #[test]
    fn test_readability_bounds() {
        assert_eq!(readability_score(""), 0);
        let simple = readability_score("The cat sat. The dog ran.");
        let dense = readability_score(
            "Institutionalized multidimensional organizational transformation methodologies",
        );
        assert!(simple <= 100);
        assert!(simple > dense);
    }

    #[test]
    fn test_syllable_heuristic() {
        assert_eq!(syllables("cat"), 1);
        assert_eq!(syllables("make"), 1);
        assert_eq!(syllables("table"), 2);
        assert_eq!(syllables("engineering"), 4);
    }

    #[test]
    fn test_suggested_verb_is_deterministic() {
        let config = AnalysisConfig::default();
        assert_eq!(suggest_action_verb("responsible for", &config), "led");
        let custom = suggest_action_verb("was part of", &config);
        assert_eq!(custom, suggest_action_verb("was part of", &config));
        assert!(config.is_action_verb(&custom));
    }

    #[test]
    fn test_find_phrase_respects_word_boundaries() {
        assert_eq!(find_phrase("reworked on site", "worked on"), Vec::<usize>::new());
        assert_eq!(find_phrase("i worked on apis", "worked on"), vec![2]);
    }

    #[test]
    fn test_clean_text_suggests_nothing_to_fix() {
        let report = check(
            "Led platform migration.\nBuilt billing service.\nReduced costs.\nDesigned APIs.\nShipped features.",
        );
        assert_eq!(report.total_issues, 0);
        assert_eq!(report.suggestions, vec!["Writing style looks strong".to_string()]);
    }
}
