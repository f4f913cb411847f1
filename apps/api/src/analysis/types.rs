//! Value types shared by every stage of the analysis pipeline.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Documents
// ────────────────────────────────────────────────────────────────────────────

/// Where a document's text came from before it reached the core.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    #[default]
    Plain,
    Pdf,
    Docx,
}

impl SourceFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Plain => "plain",
            SourceFormat::Pdf => "pdf",
            SourceFormat::Docx => "docx",
        }
    }
}

impl FromStr for SourceFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" | "txt" => Ok(SourceFormat::Plain),
            "pdf" => Ok(SourceFormat::Pdf),
            "docx" => Ok(SourceFormat::Docx),
            _ => Err(format!("unknown source format '{s}'")),
        }
    }
}

/// Immutable plain text plus its source-format tag. Built once at ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentText {
    text: String,
    format: SourceFormat,
}

impl DocumentText {
    pub fn new(text: impl Into<String>, format: SourceFormat) -> Self {
        Self {
            text: text.into(),
            format,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SourceFormat::Plain)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn format(&self) -> SourceFormat {
        self.format
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Role type
// ────────────────────────────────────────────────────────────────────────────

/// Keyword-library bucket. Never changes how a document is scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleType {
    #[serde(rename = "Full Stack", alias = "full_stack", alias = "fullstack")]
    FullStack,
    #[serde(alias = "frontend")]
    Frontend,
    #[serde(alias = "backend")]
    Backend,
    #[default]
    #[serde(alias = "other")]
    Other,
}

impl RoleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleType::FullStack => "Full Stack",
            RoleType::Frontend => "Frontend",
            RoleType::Backend => "Backend",
            RoleType::Other => "Other",
        }
    }
}

impl fmt::Display for RoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleType {
    type Err = String;

    /// Lenient: ignores case, spaces, hyphens and underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "fullstack" => Ok(RoleType::FullStack),
            "frontend" => Ok(RoleType::Frontend),
            "backend" => Ok(RoleType::Backend),
            "other" => Ok(RoleType::Other),
            _ => Err(format!("unknown role type '{s}'")),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Issues
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Ats,
    Grammar,
}

/// Ordered so that `High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Where in the résumé a finding points. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Location {
    Line(usize),
    Section(String),
}

/// A single finding from the ATS or grammar checker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    /// Rule id that produced the finding, e.g. `tables` or `weak_phrase`.
    pub category: String,
    pub severity: Severity,
    pub message: String,
    pub fix: String,
    pub location: Option<Location>,
    /// Points taken off the ATS score. Always 0 for grammar findings.
    pub deduction: u32,
}

impl Issue {
    pub fn ats(
        category: &str,
        severity: Severity,
        deduction: u32,
        message: impl Into<String>,
        fix: impl Into<String>,
    ) -> Self {
        Self {
            kind: IssueKind::Ats,
            category: category.to_string(),
            severity,
            message: message.into(),
            fix: fix.into(),
            location: None,
            deduction,
        }
    }

    pub fn grammar(
        category: &str,
        severity: Severity,
        message: impl Into<String>,
        fix: impl Into<String>,
    ) -> Self {
        Self {
            kind: IssueKind::Grammar,
            category: category.to_string(),
            severity,
            message: message.into(),
            fix: fix.into(),
            location: None,
            deduction: 0,
        }
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_type_serde_full_stack_uses_display_name() {
        let json = serde_json::to_string(&RoleType::FullStack).unwrap();
        assert_eq!(json, r#""Full Stack""#);
        let back: RoleType = serde_json::from_str(r#""full_stack""#).unwrap();
        assert_eq!(back, RoleType::FullStack);
    }

    #[test]
    fn test_role_type_from_str_is_lenient() {
        assert_eq!("Full-Stack".parse::<RoleType>(), Ok(RoleType::FullStack));
        assert_eq!("BACKEND".parse::<RoleType>(), Ok(RoleType::Backend));
        assert!("data".parse::<RoleType>().is_err());
    }

    #[test]
    fn test_role_type_default_is_other() {
        assert_eq!(RoleType::default(), RoleType::Other);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }

    #[test]
    fn test_location_serializes_tagged() {
        let json = serde_json::to_value(Location::Line(4)).unwrap();
        assert_eq!(json["type"], "line");
        assert_eq!(json["value"], 4);
    }

    #[test]
    fn test_document_text_counts() {
        let doc = DocumentText::plain("Jane Doe\nSKILLS\nRust, Go");
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.word_count(), 5);
        assert_eq!(doc.format(), SourceFormat::Plain);
        assert!(!doc.is_blank());
        assert!(DocumentText::plain("  \n ").is_blank());
    }

    #[test]
    fn test_grammar_issue_has_no_deduction() {
        let issue = Issue::grammar("weak_phrase", Severity::Medium, "m", "f").at(Location::Line(2));
        assert_eq!(issue.deduction, 0);
        assert_eq!(issue.kind, IssueKind::Grammar);
        assert_eq!(issue.location, Some(Location::Line(2)));
    }
}
