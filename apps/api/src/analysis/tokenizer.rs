//! Tokenizer / normaliser shared by every analysis stage.
//!
//! Text is split into pieces (runs of alphanumerics plus `- . + #`, so `C++`,
//! `C#` and `Node.js` survive), case-folded, resolved through the synonym table
//! with greedy longest-match over multi-word keys, and finally filtered against
//! the stop-word list. Synonym hits are never dropped as stop words.

use std::collections::HashSet;

use serde::Serialize;

use crate::analysis::settings::AnalysisConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Text as written, multi-word synonym hits joined by a single space.
    pub surface: String,
    pub canonical: String,
}

/// Ordered normalised tokens of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TokenSet {
    tokens: Vec<Token>,
}

impl TokenSet {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    pub fn canonical_terms(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.canonical.as_str())
    }

    /// Distinct canonical forms, for membership checks.
    pub fn canonical_set(&self) -> HashSet<&str> {
        self.canonical_terms().collect()
    }
}

fn raw_pieces(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || matches!(c, '-' | '.' | '+' | '#')))
        .map(|piece| {
            piece
                .trim_start_matches(|c: char| !c.is_alphanumeric())
                .trim_end_matches(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
        })
        .filter(|piece| !piece.is_empty())
}

/// Lower-cased pieces of `text` with no synonym or stop-word handling.
pub fn split_pieces(text: &str) -> Vec<String> {
    raw_pieces(text).map(str::to_lowercase).collect()
}

/// Normalises `text` into a `TokenSet`. Empty or whitespace-only input yields an empty set.
pub fn normalize(text: &str, config: &AnalysisConfig) -> TokenSet {
    let pieces: Vec<&str> = raw_pieces(text).collect();
    let lowered: Vec<String> = pieces.iter().map(|p| p.to_lowercase()).collect();
    let max_words = config.synonym_max_words().max(1);

    let mut tokens = Vec::with_capacity(pieces.len());
    let mut i = 0;
    while i < pieces.len() {
        let widest = max_words.min(pieces.len() - i);
        let hit = (1..=widest).rev().find_map(|width| {
            let key = lowered[i..i + width].join(" ");
            config.synonym(&key).map(|canonical| (width, canonical))
        });

        match hit {
            Some((width, canonical)) => {
                tokens.push(Token {
                    surface: pieces[i..i + width].join(" "),
                    canonical: canonical.to_string(),
                });
                i += width;
            }
            None => {
                if !config.is_stop_word(&lowered[i]) {
                    tokens.push(Token {
                        surface: pieces[i].to_string(),
                        canonical: lowered[i].clone(),
                    });
                }
                i += 1;
            }
        }
    }

    TokenSet { tokens }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canon(text: &str) -> Vec<String> {
        normalize(text, &AnalysisConfig::default())
            .canonical_terms()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_empty_input_yields_empty_set() {
        assert!(normalize("", &AnalysisConfig::default()).is_empty());
        assert!(normalize("   \n\t ", &AnalysisConfig::default()).is_empty());
    }

    #[test]
    fn test_technical_terms_keep_symbols() {
        assert_eq!(canon("C++, C# and Rust."), vec!["c++", "c#", "rust"]);
    }

    #[test]
    fn test_dotted_names_resolve_through_synonyms() {
        assert_eq!(canon("Node.js / React.js"), vec!["node", "react"]);
    }

    #[test]
    fn test_synonym_equivalence_js() {
        assert_eq!(canon("JS"), canon("JavaScript"));
    }

    #[test]
    fn test_multi_word_synonym_longest_match() {
        assert_eq!(canon("Amazon Web Services"), vec!["aws"]);
        assert_eq!(canon("CI/CD pipelines"), vec!["ci/cd", "pipelines"]);
        assert_eq!(canon("Google Cloud Platform"), vec!["gcp"]);
    }

    #[test]
    fn test_stop_words_dropped() {
        assert_eq!(canon("the team and the product"), vec!["team", "product"]);
    }

    #[test]
    fn test_synonym_checked_before_stop_words() {
        let config =
            AnalysisConfig::from_json(r#"{"synonyms": {"it": "information technology"}}"#).unwrap();
        let tokens = normalize("IT support", &config);
        let terms: Vec<&str> = tokens.canonical_terms().collect();
        assert_eq!(terms, vec!["information technology", "support"]);
    }

    #[test]
    fn test_surface_form_is_preserved() {
        let tokens = normalize("Front End work with JS", &AnalysisConfig::default());
        let first = tokens.iter().next().unwrap();
        assert_eq!(first.surface, "Front End");
        assert_eq!(first.canonical, "frontend");
    }

    #[test]
    fn test_trailing_punctuation_trimmed() {
        assert_eq!(canon("(Python), Docker!"), vec!["python", "docker"]);
    }

    #[test]
    fn test_normalization_is_deterministic() {
        let text = "Senior Python developer; Kubernetes, k8s, AWS.";
        assert_eq!(canon(text), canon(text));
        assert_eq!(canon(text), vec!["senior", "python", "developer", "kubernetes", "kubernetes", "aws"]);
    }
}
