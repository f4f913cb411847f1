//! End-to-end analysis: parse, match, check, optimize, blend.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::ats_checker::{check_ats_parsed, CompatibilityLabel};
use crate::analysis::grammar_checker::check_grammar;
use crate::analysis::keyword_matcher::{match_keywords_with_library, MatchResult};
use crate::analysis::optimizer::{optimize, OptimizationPlan};
use crate::analysis::resume_parser::{parse_resume, StructuredResume};
use crate::analysis::settings::AnalysisConfig;
use crate::analysis::tokenizer::normalize;
use crate::analysis::types::Issue;
use crate::errors::AnalysisError;

/// Aggregate of one résumé / job-description analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub ats_score: u32,
    pub match_score: u32,
    pub readability_score: u32,
    pub overall_score: u32,
    pub compatibility_label: CompatibilityLabel,
    /// ATS issues in rule order, then grammar issues.
    pub issues: Vec<Issue>,
    pub suggestions: OptimizationPlan,
    pub keyword_match: MatchResult,
    pub action_verb_count: usize,
    pub style_tips: Vec<String>,
    pub structure: StructuredResume,
}

impl AnalysisResult {
    fn empty() -> Self {
        Self {
            ats_score: 0,
            match_score: 0,
            readability_score: 0,
            overall_score: 0,
            compatibility_label: CompatibilityLabel::from_score(0),
            issues: Vec::new(),
            suggestions: OptimizationPlan::default(),
            keyword_match: MatchResult::default(),
            action_verb_count: 0,
            style_tips: Vec::new(),
            structure: StructuredResume::default(),
        }
    }
}

/// Runs every stage against one résumé and one job description.
///
/// `library` holds keywords accumulated for the caller's role bucket; they only
/// boost the weight of job terms that already appear in the job description, and
/// only when the configured library boost is not neutral.
#[tracing::instrument(skip_all)]
pub fn analyze(
    resume_text: &str,
    job_text: &str,
    library: &[String],
    config: &AnalysisConfig,
) -> Result<AnalysisResult, AnalysisError> {
    if resume_text.trim().is_empty() {
        if config.require_non_empty_input() {
            return Err(AnalysisError::InvalidInput("resume text is empty".into()));
        }
        debug!("empty resume, returning degenerate result");
        return Ok(AnalysisResult::empty());
    }

    if config.require_non_empty_input() {
        let job_tokens = normalize(job_text, config).len();
        if job_tokens < config.min_job_tokens() {
            return Err(AnalysisError::InvalidInput(format!(
                "job description needs at least {} meaningful words, found {job_tokens}",
                config.min_job_tokens()
            )));
        }
    }

    let structure = parse_resume(resume_text, config);
    let keyword_match = match_keywords_with_library(resume_text, job_text, config, library);
    let ats = check_ats_parsed(resume_text, &structure, config);
    let grammar = check_grammar(resume_text, config);
    let suggestions = optimize(&keyword_match, &ats, &grammar, &structure, job_text, config);

    let overall_score =
        config
            .score_weights()
            .blend(ats.score, keyword_match.score, grammar.readability_score);

    debug!(
        ats_score = ats.score,
        match_score = keyword_match.score,
        readability_score = grammar.readability_score,
        overall_score,
        "analysis complete"
    );

    let mut issues = ats.issues;
    issues.extend(grammar.issues);

    Ok(AnalysisResult {
        ats_score: ats.score,
        match_score: keyword_match.score,
        readability_score: grammar.readability_score,
        overall_score,
        compatibility_label: ats.compatibility_label,
        issues,
        suggestions,
        keyword_match,
        action_verb_count: grammar.action_verb_count,
        style_tips: grammar.suggestions,
        structure,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::settings::AnalysisSettings;
    use crate::analysis::types::IssueKind;

    const RESUME: &str = "John Doe. john@x.com. 555-123-4567. EXPERIENCE: Led team of 5 engineers, \
        increased revenue 20%. SKILLS: Python, React.";
    const JOB: &str = "Looking for a Python developer with React and Docker experience.";

    fn run(resume: &str, job: &str) -> AnalysisResult {
        analyze(resume, job, &[], &AnalysisConfig::default()).unwrap()
    }

    fn strict() -> AnalysisConfig {
        AnalysisConfig::from_settings(AnalysisSettings {
            require_non_empty_input: true,
            ..AnalysisSettings::default()
        })
        .unwrap()
    }

    #[test]
    fn test_scenario_docker_missing() {
        let result = run(RESUME, JOB);
        let km = &result.keyword_match;
        assert!(km.found_keywords.contains(&"python".to_string()));
        assert!(km.found_keywords.contains(&"react".to_string()));
        assert!(km.missing_keywords.contains(&"docker".to_string()));
        assert!(result.match_score > 0 && result.match_score < 100);
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        assert_eq!(run(RESUME, JOB), run(RESUME, JOB));
    }

    #[test]
    fn test_scores_stay_in_bounds() {
        let pairs = [
            (RESUME, JOB),
            ("x", "y"),
            ("I I I was helped.\n\t\t\t|||\n■■■", "rust rust rust rust"),
            ("SKILLS\nRust, Go, Kubernetes", "Rust Go Kubernetes Terraform engineer"),
        ];
        for (resume, job) in pairs {
            let result = run(resume, job);
            for score in [
                result.ats_score,
                result.match_score,
                result.readability_score,
                result.overall_score,
            ] {
                assert!(score <= 100, "score {score} out of range for {resume:?}");
            }
        }
    }

    #[test]
    fn test_empty_resume_is_all_zero() {
        let result = run("   \n ", JOB);
        assert_eq!(result.overall_score, 0);
        assert_eq!(result.ats_score, 0);
        assert!(result.issues.is_empty());
        assert!(result.suggestions.priority_fixes.is_empty());
        assert_eq!(result.compatibility_label, CompatibilityLabel::NeedsWork);
    }

    #[test]
    fn test_short_job_description_zeroes_match_only() {
        let result = run(RESUME, "python");
        assert_eq!(result.match_score, 0);
        assert!(result.keyword_match.found_keywords.is_empty());
        assert!(result.keyword_match.missing_keywords.is_empty());
        assert!(result.ats_score > 0);
    }

    #[test]
    fn test_strict_config_rejects_degenerate_input() {
        let config = strict();
        assert!(matches!(
            analyze("", JOB, &[], &config),
            Err(AnalysisError::InvalidInput(_))
        ));
        assert!(matches!(
            analyze(RESUME, "python", &[], &config),
            Err(AnalysisError::InvalidInput(_))
        ));
        assert!(analyze(RESUME, JOB, &[], &config).is_ok());
    }

    #[test]
    fn test_ats_issues_precede_grammar_issues() {
        let resume = "Jane\nI was responsible for managing a team\nWORK HISTORY\nstuff";
        let result = run(resume, JOB);
        let first_grammar = result
            .issues
            .iter()
            .position(|i| i.kind == IssueKind::Grammar)
            .unwrap();
        assert!(result.issues[..first_grammar]
            .iter()
            .all(|i| i.kind == IssueKind::Ats));
        assert!(result.issues[first_grammar..]
            .iter()
            .all(|i| i.kind == IssueKind::Grammar));
    }

    #[test]
    fn test_overall_score_follows_configured_weights() {
        let config = AnalysisConfig::from_settings(AnalysisSettings {
            score_weights: crate::analysis::settings::ScoreWeights {
                ats: 1.0,
                keyword_match: 0.0,
                readability: 0.0,
            },
            ..AnalysisSettings::default()
        })
        .unwrap();
        let result = analyze(RESUME, JOB, &[], &config).unwrap();
        assert_eq!(result.overall_score, result.ats_score);
    }

    #[test]
    fn test_better_keyword_coverage_never_lowers_overall() {
        let weaker = run(RESUME, JOB);
        let stronger = run(&format!("{RESUME} Docker."), JOB);
        assert!(stronger.match_score >= weaker.match_score);
        assert!(
            stronger.overall_score >= weaker.overall_score
                || stronger.ats_score < weaker.ats_score
                || stronger.readability_score < weaker.readability_score,
            "overall dropped without any sub-score dropping"
        );
    }

    #[test]
    fn test_library_keywords_raise_weight() {
        let plain = run(RESUME, JOB);
        let config = AnalysisConfig::from_json(r#"{"library_boost": 1.25}"#).unwrap();
        let boosted = analyze(RESUME, JOB, &["docker".to_string()], &config).unwrap();
        let weight = |r: &AnalysisResult| {
            r.keyword_match
                .keywords
                .iter()
                .find(|k| k.keyword == "docker")
                .map(|k| k.weight)
                .unwrap()
        };
        assert!(weight(&boosted) > weight(&plain));
    }
}
