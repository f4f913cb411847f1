//! Analysis configuration: every lookup table and weight the core consults.
//!
//! `AnalysisSettings` is the serde shape operators edit (any subset may be given in a
//! JSON file; missing fields fall back to the built-in tables). `AnalysisConfig` is
//! the validated, indexed form loaded once at startup and passed by reference into
//! every core call.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::corpus;
use crate::analysis::lexicon;
use crate::analysis::tokenizer::split_pieces;
use crate::analysis::types::Severity;
use crate::errors::AnalysisError;

/// Upper bound for any single rule deduction; the ATS score itself runs 0–100.
pub const MAX_RULE_DEDUCTION: u32 = 100;

/// Points deducted from the ATS score per triggered rule, by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDeductions {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl Default for RuleDeductions {
    fn default() -> Self {
        Self {
            high: 15,
            medium: 10,
            low: 5,
        }
    }
}

impl RuleDeductions {
    pub fn for_severity(&self, severity: Severity) -> u32 {
        match severity {
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }
}

/// Blend weights for the overall score. Normalised by their sum, so they need not add to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub ats: f64,
    pub keyword_match: f64,
    pub readability: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            ats: 0.4,
            keyword_match: 0.4,
            readability: 0.2,
        }
    }
}

impl ScoreWeights {
    /// Weighted mean of three 0–100 sub-scores, rounded and clamped to 0–100.
    pub fn blend(&self, ats: u32, keyword_match: u32, readability: u32) -> u32 {
        let total = self.ats + self.keyword_match + self.readability;
        if total <= 0.0 {
            return 0;
        }
        let weighted = self.ats * ats as f64
            + self.keyword_match * keyword_match as f64
            + self.readability * readability as f64;
        (weighted / total).round().clamp(0.0, 100.0) as u32
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    pub stop_words: Vec<String>,
    /// Surface variant → canonical term.
    pub synonyms: BTreeMap<String, String>,
    /// Section label → header variants.
    pub section_headers: BTreeMap<String, Vec<String>>,
    /// Word found in an unrecognised header → label to suggest instead.
    pub header_hints: BTreeMap<String, String>,
    pub weak_phrases: Vec<String>,
    pub action_verbs: Vec<String>,
    pub spelling_allowlist: Vec<String>,
    pub misspellings: BTreeMap<String, String>,
    pub rule_deductions: RuleDeductions,
    pub disabled_rules: Vec<String>,
    pub score_weights: ScoreWeights,
    pub top_n_keywords: usize,
    pub min_job_tokens: usize,
    /// Weight multiplier for job-description terms already in the role's keyword library.
    /// 1.0 keeps scoring independent of what earlier analyses recorded.
    pub library_boost: f64,
    pub max_keyword_suggestions: usize,
    pub require_non_empty_input: bool,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        fn owned(words: &[&str]) -> Vec<String> {
            words.iter().map(|w| w.to_string()).collect()
        }
        fn pairs(table: &[(&str, &str)]) -> BTreeMap<String, String> {
            table
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        }

        Self {
            stop_words: owned(lexicon::STOP_WORDS),
            synonyms: pairs(lexicon::SYNONYMS),
            section_headers: lexicon::SECTION_HEADERS
                .iter()
                .map(|(label, variants)| (label.to_string(), owned(variants)))
                .collect(),
            header_hints: pairs(lexicon::HEADER_HINTS),
            weak_phrases: owned(lexicon::WEAK_PHRASES),
            action_verbs: owned(lexicon::ACTION_VERBS),
            spelling_allowlist: owned(lexicon::SPELLING_ALLOWLIST),
            misspellings: pairs(lexicon::MISSPELLINGS),
            rule_deductions: RuleDeductions::default(),
            disabled_rules: Vec::new(),
            score_weights: ScoreWeights::default(),
            top_n_keywords: 30,
            min_job_tokens: 3,
            library_boost: 1.0,
            max_keyword_suggestions: 10,
            require_non_empty_input: false,
        }
    }
}

/// Validated, indexed analysis configuration. Read-only once built.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    settings: AnalysisSettings,
    stop_words: HashSet<String>,
    synonyms: HashMap<String, String>,
    synonym_max_words: usize,
    header_lookup: HashMap<String, String>,
    header_hints: HashMap<String, String>,
    weak_phrases: Vec<String>,
    action_verbs: Vec<String>,
    action_verb_set: HashSet<String>,
    misspellings: HashMap<String, String>,
    dictionary: HashSet<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::index(AnalysisSettings::default())
    }
}

impl AnalysisConfig {
    pub fn from_settings(settings: AnalysisSettings) -> Result<Self, AnalysisError> {
        validate(&settings)?;
        Ok(Self::index(settings))
    }

    pub fn from_json(json: &str) -> Result<Self, AnalysisError> {
        let settings: AnalysisSettings = serde_json::from_str(json)
            .map_err(|e| AnalysisError::Configuration(format!("malformed settings: {e}")))?;
        Self::from_settings(settings)
    }

    /// Loads settings from `path`, or the built-in tables when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, AnalysisError> {
        match path {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|e| {
                    AnalysisError::Configuration(format!(
                        "cannot read settings file '{}': {e}",
                        path.display()
                    ))
                })?;
                Self::from_json(&json)
            }
            None => Self::from_settings(AnalysisSettings::default()),
        }
    }

    fn index(settings: AnalysisSettings) -> Self {
        let lower = |s: &str| s.trim().to_lowercase();

        let stop_words: HashSet<String> = settings.stop_words.iter().map(|w| lower(w)).collect();

        let mut synonyms = HashMap::new();
        let mut synonym_max_words = 1;
        for (variant, canonical) in &settings.synonyms {
            let pieces = split_pieces(variant);
            if pieces.is_empty() {
                continue;
            }
            synonym_max_words = synonym_max_words.max(pieces.len());
            synonyms.insert(pieces.join(" "), lower(canonical));
        }

        let mut header_lookup = HashMap::new();
        for (label, variants) in &settings.section_headers {
            for variant in variants {
                header_lookup.insert(normalize_header(variant), label.trim().to_string());
            }
        }

        let header_hints = settings
            .header_hints
            .iter()
            .map(|(word, label)| (lower(word), label.trim().to_string()))
            .collect();

        let weak_phrases: Vec<String> = settings.weak_phrases.iter().map(|p| lower(p)).collect();
        let action_verbs: Vec<String> = settings.action_verbs.iter().map(|v| lower(v)).collect();
        let action_verb_set = action_verbs.iter().cloned().collect();

        let misspellings: HashMap<String, String> = settings
            .misspellings
            .iter()
            .map(|(wrong, right)| (lower(wrong), lower(right)))
            .collect();

        let mut dictionary: HashSet<String> = corpus::vocabulary().map(str::to_string).collect();
        dictionary.extend(lexicon::COMMON_WORDS.iter().map(|w| w.to_string()));
        dictionary.extend(stop_words.iter().cloned());
        dictionary.extend(action_verbs.iter().cloned());
        dictionary.extend(settings.spelling_allowlist.iter().map(|w| lower(w)));
        dictionary.extend(misspellings.values().cloned());
        let phrase_words = synonyms
            .iter()
            .flat_map(|(k, v)| [k.as_str(), v.as_str()])
            .chain(header_lookup.keys().map(String::as_str))
            .chain(weak_phrases.iter().map(String::as_str))
            .flat_map(str::split_whitespace)
            .map(str::to_string)
            .collect::<Vec<_>>();
        dictionary.extend(phrase_words);

        Self {
            settings,
            stop_words,
            synonyms,
            synonym_max_words,
            header_lookup,
            header_hints,
            weak_phrases,
            action_verbs,
            action_verb_set,
            misspellings,
            dictionary,
        }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Canonical form for a lower-cased, space-joined surface variant.
    pub fn synonym(&self, variant: &str) -> Option<&str> {
        self.synonyms.get(variant).map(String::as_str)
    }

    pub fn synonym_max_words(&self) -> usize {
        self.synonym_max_words
    }

    /// Section label for a header line's normalised text.
    pub fn header_label(&self, normalized: &str) -> Option<&str> {
        self.header_lookup.get(normalized).map(String::as_str)
    }

    pub fn header_hint(&self, word: &str) -> Option<&str> {
        self.header_hints.get(word).map(String::as_str)
    }

    pub fn weak_phrases(&self) -> &[String] {
        &self.weak_phrases
    }

    pub fn action_verbs(&self) -> &[String] {
        &self.action_verbs
    }

    pub fn is_action_verb(&self, word: &str) -> bool {
        self.action_verb_set.contains(word)
    }

    pub fn misspelling(&self, word: &str) -> Option<&str> {
        self.misspellings.get(word).map(String::as_str)
    }

    pub fn is_known_word(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    pub fn rule_enabled(&self, rule_id: &str) -> bool {
        !self.settings.disabled_rules.iter().any(|r| r == rule_id)
    }

    pub fn deduction(&self, severity: Severity) -> u32 {
        self.settings.rule_deductions.for_severity(severity)
    }

    pub fn score_weights(&self) -> &ScoreWeights {
        &self.settings.score_weights
    }

    pub fn top_n_keywords(&self) -> usize {
        self.settings.top_n_keywords
    }

    pub fn min_job_tokens(&self) -> usize {
        self.settings.min_job_tokens
    }

    pub fn library_boost(&self) -> f64 {
        self.settings.library_boost
    }

    /// False when the boost is neutral and library lookups cannot change a score.
    pub fn library_boost_enabled(&self) -> bool {
        (self.settings.library_boost - 1.0).abs() > f64::EPSILON
    }

    pub fn max_keyword_suggestions(&self) -> usize {
        self.settings.max_keyword_suggestions
    }

    pub fn require_non_empty_input(&self) -> bool {
        self.settings.require_non_empty_input
    }
}

/// Lower-cases a header line and strips decoration so `## Work Experience:` and
/// `WORK EXPERIENCE` compare equal.
pub fn normalize_header(line: &str) -> String {
    line.trim()
        .trim_matches(|c: char| c.is_whitespace() || "#*-=_•:|".contains(c))
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .replace(" & ", " and ")
}

fn validate(settings: &AnalysisSettings) -> Result<(), AnalysisError> {
    let fail = |msg: String| Err(AnalysisError::Configuration(msg));

    if settings.synonyms.is_empty() {
        return fail("synonym table is empty".to_string());
    }
    for (variant, canonical) in &settings.synonyms {
        if split_pieces(variant).is_empty() || canonical.trim().is_empty() {
            return fail(format!("synonym entry '{variant}' -> '{canonical}' is blank"));
        }
    }

    if settings.section_headers.is_empty() {
        return fail("section header whitelist is empty".to_string());
    }
    let mut seen: HashMap<String, &str> = HashMap::new();
    for (label, variants) in &settings.section_headers {
        if label.trim().is_empty() || variants.is_empty() {
            return fail(format!("section header label '{label}' has no variants"));
        }
        for variant in variants {
            let normalized = normalize_header(variant);
            if normalized.is_empty() {
                return fail(format!("section header label '{label}' has a blank variant"));
            }
            if let Some(other) = seen.insert(normalized.clone(), label.as_str()) {
                if other != label.as_str() {
                    return fail(format!(
                        "header variant '{normalized}' is claimed by both '{other}' and '{label}'"
                    ));
                }
            }
        }
    }

    let w = &settings.score_weights;
    let weights = [w.ats, w.keyword_match, w.readability];
    if weights.iter().any(|x| !x.is_finite() || *x < 0.0) || weights.iter().sum::<f64>() <= 0.0 {
        return fail(format!("score weights must be non-negative with a positive sum, got {w:?}"));
    }

    if settings.top_n_keywords == 0 {
        return fail("top_n_keywords must be at least 1".to_string());
    }
    if !settings.library_boost.is_finite() || settings.library_boost <= 0.0 {
        return fail(format!(
            "library_boost must be positive, got {}",
            settings.library_boost
        ));
    }

    let d = &settings.rule_deductions;
    if [d.high, d.medium, d.low].iter().any(|x| *x > MAX_RULE_DEDUCTION) {
        return fail(format!(
            "rule deductions must not exceed {MAX_RULE_DEDUCTION}, got {d:?}"
        ));
    }

    Ok(())
}
