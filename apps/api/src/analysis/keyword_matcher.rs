//! Keyword Matcher: TF-IDF keyword extraction from a job description and
//! coverage scoring of a résumé against it.
//!
//! Algorithm:
//! 1. Normalise the job description; count each canonical term (`tf = count / tokens`).
//! 2. Weight by inverse document frequency against the static reference corpus,
//!    boosting terms the role's keyword library already knows.
//! 3. Keep the top-N by weight (ties keep first-appearance order).
//! 4. A keyword is found when its canonical form occurs anywhere in the résumé.
//! 5. score = Σ(found weight) / Σ(weight) × 100, rounded.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::corpus;
use crate::analysis::settings::AnalysisConfig;
use crate::analysis::tokenizer::{normalize, TokenSet};

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// One required keyword of the job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordScore {
    pub keyword: String,
    pub frequency: u32, // occurrences in the job description
    pub weight: f64,    // tf × idf (× library boost)
    pub found: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u32, // 0 – 100
    pub found_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub matched_count: usize,
    pub total_count: usize,
    /// Required keywords in rank order.
    pub keywords: Vec<KeywordScore>,
    /// Found keyword → share of résumé tokens (percent, two decimals).
    pub keyword_density: BTreeMap<String, f64>,
}

impl MatchResult {
    /// Missing keywords with their weights, in rank order.
    pub fn missing(&self) -> impl Iterator<Item = &KeywordScore> {
        self.keywords.iter().filter(|k| !k.found)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Extraction
// ────────────────────────────────────────────────────────────────────────────

fn is_candidate(term: &str) -> bool {
    term.chars().count() >= 2 && term.chars().any(char::is_alphabetic)
}

/// Ranks the job description's candidate terms and keeps the top-N.
/// `library` holds terms the role's keyword library has accumulated.
pub fn extract_keywords(
    job: &TokenSet,
    config: &AnalysisConfig,
    library: &[String],
) -> Vec<KeywordScore> {
    let total = job.len();
    if total == 0 {
        return Vec::new();
    }

    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for term in job.canonical_terms().filter(|t| is_candidate(t)) {
        let count = counts.entry(term).or_insert(0);
        if *count == 0 {
            order.push(term);
        }
        *count += 1;
    }

    let boosted: HashSet<String> = library.iter().map(|k| k.trim().to_lowercase()).collect();

    let mut ranked: Vec<KeywordScore> = order
        .into_iter()
        .map(|term| {
            let frequency = counts.get(term).copied().unwrap_or(0);
            let tf = frequency as f64 / total as f64;
            let mut weight = tf * corpus::inverse_document_frequency(term);
            if boosted.contains(term) {
                weight *= config.library_boost();
            }
            KeywordScore {
                keyword: term.to_string(),
                frequency,
                weight,
                found: false,
            }
        })
        .collect();

    // sort_by is stable: equal weights keep first-appearance order
    ranked.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    ranked.truncate(config.top_n_keywords());
    ranked
}

// ────────────────────────────────────────────────────────────────────────────
// Matching
// ────────────────────────────────────────────────────────────────────────────

pub fn match_keywords(resume_text: &str, job_text: &str, config: &AnalysisConfig) -> MatchResult {
    match_keywords_with_library(resume_text, job_text, config, &[])
}

/// Like [`match_keywords`], boosting job terms that appear in `library`.
#[tracing::instrument(skip_all)]
pub fn match_keywords_with_library(
    resume_text: &str,
    job_text: &str,
    config: &AnalysisConfig,
    library: &[String],
) -> MatchResult {
    let job = normalize(job_text, config);
    if job.len() < config.min_job_tokens() {
        debug!(job_tokens = job.len(), "job description below minimum token count");
        return MatchResult::default();
    }

    let resume = normalize(resume_text, config);
    let present = resume.canonical_set();

    let mut keywords = extract_keywords(&job, config, library);
    for keyword in &mut keywords {
        keyword.found = present.contains(keyword.keyword.as_str());
    }

    let total_weight: f64 = keywords.iter().map(|k| k.weight).sum();
    let found_weight: f64 = keywords.iter().filter(|k| k.found).map(|k| k.weight).sum();
    let score = if total_weight > 0.0 {
        (found_weight / total_weight * 100.0).round().clamp(0.0, 100.0) as u32
    } else {
        0
    };

    let found_keywords: Vec<String> = keywords
        .iter()
        .filter(|k| k.found)
        .map(|k| k.keyword.clone())
        .collect();
    let missing_keywords: Vec<String> = keywords
        .iter()
        .filter(|k| !k.found)
        .map(|k| k.keyword.clone())
        .collect();

    let keyword_density = keyword_density(&resume, &found_keywords);

    debug!(
        score,
        found = found_keywords.len(),
        total = keywords.len(),
        "keyword match complete"
    );

    MatchResult {
        score,
        matched_count: found_keywords.len(),
        total_count: keywords.len(),
        found_keywords,
        missing_keywords,
        keywords,
        keyword_density,
    }
}

fn keyword_density(resume: &TokenSet, found: &[String]) -> BTreeMap<String, f64> {
    if resume.is_empty() {
        return BTreeMap::new();
    }
    let total = resume.len() as f64;
    found
        .iter()
        .map(|keyword| {
            let count = resume.canonical_terms().filter(|t| *t == keyword.as_str()).count() as f64;
            let percent = (count / total * 100.0 * 100.0).round() / 100.0;
            (keyword.clone(), percent)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO_RESUME: &str = "John Doe. john@x.com. 555-123-4567. EXPERIENCE: Led team of 5 \
        engineers, increased revenue 20%. SKILLS: Python, React.";
    const SCENARIO_JOB: &str = "Looking for a Python developer with React and Docker experience.";

    #[test]
    fn test_scenario_python_react_found_docker_missing() {
        let result = match_keywords(SCENARIO_RESUME, SCENARIO_JOB, &AnalysisConfig::default());
        assert!(result.found_keywords.contains(&"python".to_string()));
        assert!(result.found_keywords.contains(&"react".to_string()));
        assert!(result.missing_keywords.contains(&"docker".to_string()));
        assert!(result.score > 0 && result.score < 100, "score = {}", result.score);
    }

    #[test]
    fn test_domain_terms_rank_above_generic_terms() {
        let result = match_keywords(SCENARIO_RESUME, SCENARIO_JOB, &AnalysisConfig::default());
        let rank = |kw: &str| result.keywords.iter().position(|k| k.keyword == kw).unwrap();
        assert!(rank("docker") < rank("experience"));
        assert!(rank("python") < rank("developer"));
    }

    #[test]
    fn test_short_job_description_yields_zero() {
        let result = match_keywords("Python expert", "the Python", &AnalysisConfig::default());
        assert_eq!(result.score, 0);
        assert!(result.found_keywords.is_empty());
        assert!(result.missing_keywords.is_empty());
        assert_eq!(result.total_count, 0);
    }

    #[test]
    fn test_synonym_equivalence() {
        let config = AnalysisConfig::default();
        let job = "JavaScript engineer for frontend dashboards";
        let a = match_keywords("Shipped apps in JS", job, &config);
        let b = match_keywords("Shipped apps in JavaScript", job, &config);
        assert_eq!(a.found_keywords, b.found_keywords);
        assert_eq!(a.missing_keywords, b.missing_keywords);
        assert!(a.found_keywords.contains(&"javascript".to_string()));
    }

    #[test]
    fn test_equal_weights_keep_first_appearance_order() {
        let job = TokenSet::default();
        assert!(extract_keywords(&job, &AnalysisConfig::default(), &[]).is_empty());

        let job = normalize("zorblax quuxly frobnic", &AnalysisConfig::default());
        let ranked = extract_keywords(&job, &AnalysisConfig::default(), &[]);
        let names: Vec<&str> = ranked.iter().map(|k| k.keyword.as_str()).collect();
        assert_eq!(names, vec!["zorblax", "quuxly", "frobnic"]);
    }

    #[test]
    fn test_top_n_cutoff() {
        let config = AnalysisConfig::from_json(r#"{"top_n_keywords": 2}"#).unwrap();
        let result = match_keywords("", "python react docker kubernetes", &config);
        assert_eq!(result.total_count, 2);
        assert_eq!(result.keywords.len(), 2);
    }

    #[test]
    fn test_library_boost_reorders() {
        let config = AnalysisConfig::from_json(r#"{"library_boost": 1.25}"#).unwrap();
        let job = normalize("python java ruby", &config);
        let plain = extract_keywords(&job, &config, &[]);
        assert_eq!(plain[0].keyword, "ruby");
        let boosted = extract_keywords(&job, &config, &["Java".to_string()]);
        assert_eq!(boosted[0].keyword, "java");
    }

    #[test]
    fn test_neutral_boost_ignores_library() {
        let config = AnalysisConfig::default();
        let plain = match_keywords_with_library(SCENARIO_RESUME, SCENARIO_JOB, &config, &[]);
        let library = vec!["docker".to_string(), "react".to_string()];
        let with_library =
            match_keywords_with_library(SCENARIO_RESUME, SCENARIO_JOB, &config, &library);
        assert_eq!(plain, with_library);
    }

    #[test]
    fn test_numbers_are_not_keywords() {
        let config = AnalysisConfig::default();
        let result = match_keywords("", "5 years 2024 python rust go", &config);
        assert!(result.keywords.iter().all(|k| k.keyword.chars().any(char::is_alphabetic)));
    }

    #[test]
    fn test_full_coverage_scores_100() {
        let config = AnalysisConfig::default();
        let result = match_keywords("Python, Docker, Kubernetes", "python docker kubernetes", &config);
        assert_eq!(result.score, 100);
        assert_eq!(result.matched_count, 3);
    }

    #[test]
    fn test_keyword_density_reported_for_found_terms() {
        let config = AnalysisConfig::default();
        let result = match_keywords("python python rust docker", "python docker kafka", &config);
        assert_eq!(result.keyword_density.get("python"), Some(&50.0));
        assert!(!result.keyword_density.contains_key("kafka"));
    }
}
