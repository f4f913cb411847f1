//! Résumé Parser: segments raw text into labelled sections and extracts
//! lightweight per-section facts (bullets, action-verb lines, metric lines,
//! dates), contact fields from the first section, skills and certification
//! list items, and experience and education entries.
//!
//! Parsing is total: text with no recognised header becomes a single
//! `Unlabeled` section.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::settings::{normalize_header, AnalysisConfig};

pub const UNLABELED: &str = "Unlabeled";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});

static LINKEDIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/in/[\w-]+").unwrap()
});

static GITHUB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:https?://)?(?:www\.)?github\.com/[\w-]+").unwrap());

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:https?://|www\.)[^\s,;]+").unwrap());

// Number next to a percentage, currency, multiplier or countable quantity.
static METRIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:\d+(?:\.\d+)?\s*%|[$€£]\s?\d[\d,]*(?:\.\d+)?|\b\d+(?:\.\d+)?x\b|\b\d[\d,]*(?:\.\d+)?\+?\s*(?:k|m|b|million|billion|thousand|hundred|users|customers|clients|people|engineers|developers|members|employees|reports|projects|products|applications|services|hours|days|weeks|months|requests|transactions|downloads|sales|orders|stores|countries|teams|students)\b)",
    )
    .unwrap()
});

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+)?(?:19|20)\d{2}(?:\s*(?:-|–|—|to)\s*(?:(?:(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+)?(?:19|20)\d{2}|present|current|now))?\b",
    )
    .unwrap()
});

static DEGREE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:bachelor(?:'s)?|master(?:'s)?|doctorate|associate(?:'s)?|ph\.?d|mba|b\.sc|m\.sc|b\.s|m\.s|b\.a|m\.a|b\.tech|m\.tech|b\.eng|m\.eng)\b\.?",
    )
    .unwrap()
});

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());

const MAX_EXPERIENCE_ENTRIES: usize = 10;
const MIN_EXPERIENCE_ENTRY_CHARS: usize = 20;
const MIN_EDUCATION_ENTRY_CHARS: usize = 10;
const MAX_CERTIFICATION_CHARS: usize = 200;

const BULLET_CHARS: &[char] = &[
    '•', '-', '*', '–', '▪', '◦', '●', '·', '>', '○', '■', '►', '✓', '➢',
];

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub url: Option<String>,
}

impl ContactFields {
    pub fn has_email(&self) -> bool {
        self.email.is_some()
    }

    pub fn has_phone(&self) -> bool {
        self.phone.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Whitelist label (`Experience`, `Skills`, ...) or `Unlabeled`.
    pub label: String,
    /// Header line as written; `None` for leading unlabeled content.
    pub header: Option<String>,
    /// 0-based source lines covered, header included, end exclusive.
    pub lines: Range<usize>,
    pub line_count: usize, // non-blank content lines
    pub bullet_count: usize,
    pub action_verb_lines: usize,
    pub metric_lines: usize,
    pub dates: Vec<String>,
}

impl Section {
    pub fn is_labeled(&self) -> bool {
        self.header.is_some()
    }

    /// True when the header does not name its label, e.g. `Work History` for Experience.
    pub fn has_nonstandard_header(&self) -> bool {
        self.header
            .as_deref()
            .map(|h| {
                let head = h.split(':').next().unwrap_or(h);
                !normalize_header(head).contains(&self.label.to_lowercase())
            })
            .unwrap_or(false)
    }
}

/// One position from an Experience section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// First line of the entry: title, company or both.
    pub title: String,
    pub dates: Option<String>,
    pub responsibilities: Vec<String>,
}

/// One block from an Education section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    /// First line of the entry, usually the institution or the degree line.
    pub institution: String,
    pub degree: Option<String>,
    /// Most recent year mentioned.
    pub year: Option<u16>,
}

/// A line that looks like a section header but is not on the whitelist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderCandidate {
    pub line: usize, // 1-based
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredResume {
    pub sections: Vec<Section>,
    pub contact: ContactFields,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<String>,
    pub unrecognized_headers: Vec<HeaderCandidate>,
    pub total_lines: usize,
    pub total_words: usize,
}

impl StructuredResume {
    pub fn section(&self, label: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.label == label)
    }

    pub fn has_section(&self, label: &str) -> bool {
        self.section(label).is_some()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .filter(|s| s.is_labeled())
            .map(|s| s.label.as_str())
    }

    pub fn metric_lines(&self) -> usize {
        self.sections.iter().map(|s| s.metric_lines).sum()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Line helpers
// ────────────────────────────────────────────────────────────────────────────

/// Text after a leading bullet glyph or `1.` / `2)` marker, if the line has one.
pub fn bullet_stripped(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    if let Some(rest) = trimmed.strip_prefix(BULLET_CHARS) {
        return Some(rest.trim_start());
    }
    let digits = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
    if (1..=2).contains(&digits) {
        let rest = &trimmed[digits..];
        if let Some(rest) = rest.strip_prefix(['.', ')']) {
            if rest.starts_with(char::is_whitespace) {
                return Some(rest.trim_start());
            }
        }
    }
    None
}

pub fn strip_bullet(line: &str) -> &str {
    bullet_stripped(line).unwrap_or(line).trim()
}

pub fn is_metric_line(line: &str) -> bool {
    METRIC_RE.is_match(line)
}

pub fn contains_action_verb(line: &str, config: &AnalysisConfig) -> bool {
    line.split(|c: char| !c.is_alphabetic())
        .filter(|w| !w.is_empty())
        .any(|w| config.is_action_verb(&w.to_lowercase()))
}

struct HeaderMatch<'a> {
    label: &'a str,
    remainder: Option<&'a str>,
}

fn match_header<'a>(line: &'a str, config: &'a AnalysisConfig) -> Option<HeaderMatch<'a>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(label) = config.header_label(&normalize_header(trimmed)) {
        return Some(HeaderMatch {
            label,
            remainder: None,
        });
    }

    let (head, rest) = trimmed.split_once(':')?;
    let label = config.header_label(&normalize_header(head))?;
    let rest = rest.trim();
    Some(HeaderMatch {
        label,
        remainder: (!rest.is_empty()).then_some(rest),
    })
}

fn looks_like_header(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.chars().count() > 40 || bullet_stripped(trimmed).is_some() {
        return false;
    }
    if trimmed
        .chars()
        .any(|c| c.is_ascii_digit() || c == '@' || c == ',')
        || trimmed.ends_with('.')
    {
        return false;
    }
    if !(1..=4).contains(&trimmed.split_whitespace().count()) {
        return false;
    }
    let letters: Vec<char> = trimmed.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.is_empty() {
        return false;
    }
    let all_caps = letters.len() >= 4 && letters.iter().all(|c| c.is_uppercase());
    all_caps || trimmed.ends_with(':')
}

// ────────────────────────────────────────────────────────────────────────────
// Parsing
// ────────────────────────────────────────────────────────────────────────────

struct SectionBuilder<'a> {
    label: &'a str,
    header: Option<&'a str>,
    lines: Range<usize>,
    content: Vec<&'a str>,
}

impl<'a> SectionBuilder<'a> {
    fn has_content(&self) -> bool {
        self.content.iter().any(|l| !l.trim().is_empty())
    }

    fn text(&self) -> String {
        self.header
            .into_iter()
            .chain(self.content.iter().copied())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn finish(self, config: &AnalysisConfig) -> Section {
        let lines: Vec<&str> = self
            .content
            .iter()
            .copied()
            .filter(|l| !l.trim().is_empty())
            .collect();

        Section {
            label: self.label.to_string(),
            header: self.header.map(str::to_string),
            lines: self.lines,
            line_count: lines.len(),
            bullet_count: lines.iter().filter(|l| bullet_stripped(l).is_some()).count(),
            action_verb_lines: lines
                .iter()
                .filter(|l| contains_action_verb(l, config))
                .count(),
            metric_lines: lines.iter().filter(|l| is_metric_line(l)).count(),
            dates: lines
                .iter()
                .flat_map(|l| DATE_RE.find_iter(l).map(|m| m.as_str().to_string()))
                .collect(),
        }
    }
}

#[tracing::instrument(skip_all)]
pub fn parse_resume(text: &str, config: &AnalysisConfig) -> StructuredResume {
    let lines: Vec<&str> = text.lines().collect();

    let mut builders: Vec<SectionBuilder<'_>> = Vec::new();
    let mut header_lines = Vec::new();
    let mut current = SectionBuilder {
        label: UNLABELED,
        header: None,
        lines: 0..0,
        content: Vec::new(),
    };

    for (idx, &line) in lines.iter().enumerate() {
        match match_header(line, config) {
            Some(HeaderMatch { label, remainder }) => {
                let mut previous = std::mem::replace(
                    &mut current,
                    SectionBuilder {
                        label,
                        header: Some(line.trim()),
                        lines: idx..idx,
                        content: remainder.into_iter().collect(),
                    },
                );
                previous.lines.end = idx;
                builders.push(previous);
                header_lines.push(idx);
            }
            None => current.content.push(line),
        }
    }
    current.lines.end = lines.len();
    builders.push(current);
    builders.retain(|b| b.header.is_some() || b.has_content());

    let contact = builders
        .first()
        .map(|b| extract_contact(&b.text()))
        .unwrap_or_default();
    let skills_lines: Vec<&str> = builders
        .iter()
        .filter(|b| b.label == "Skills")
        .flat_map(|b| b.content.iter().copied())
        .collect();
    let skills = extract_skills(&skills_lines);
    let experience: Vec<ExperienceEntry> = builders
        .iter()
        .filter(|b| b.label == "Experience")
        .flat_map(|b| split_entries(&b.content))
        .filter_map(|entry| experience_entry(&entry))
        .take(MAX_EXPERIENCE_ENTRIES)
        .collect();
    let education: Vec<EducationEntry> = builders
        .iter()
        .filter(|b| b.label == "Education")
        .flat_map(|b| split_entries(&b.content))
        .filter_map(|entry| education_entry(&entry))
        .collect();
    let certification_lines: Vec<&str> = builders
        .iter()
        .filter(|b| b.label == "Certifications")
        .flat_map(|b| b.content.iter().copied())
        .collect();
    let certifications = extract_certifications(&certification_lines);
    let unrecognized_headers = find_unrecognized_headers(&lines, &header_lines);
    let sections: Vec<Section> = builders.into_iter().map(|b| b.finish(config)).collect();

    debug!(
        sections = sections.len(),
        skills = skills.len(),
        experience = experience.len(),
        education = education.len(),
        unrecognized = unrecognized_headers.len(),
        "resume parsed"
    );

    StructuredResume {
        sections,
        contact,
        skills,
        experience,
        education,
        certifications,
        unrecognized_headers,
        total_lines: lines.len(),
        total_words: text.split_whitespace().count(),
    }
}

fn extract_contact(text: &str) -> ContactFields {
    let find = |re: &Regex| re.find(text).map(|m| m.as_str().trim().to_string());
    let url = URL_RE
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches(['.', ')']).to_string())
        .find(|u| {
            let lower = u.to_lowercase();
            !lower.contains("linkedin.com") && !lower.contains("github.com")
        });

    ContactFields {
        email: find(&EMAIL_RE),
        phone: find(&PHONE_RE),
        linkedin: find(&LINKEDIN_RE),
        github: find(&GITHUB_RE),
        url,
    }
}

fn extract_skills(lines: &[&str]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut skills = Vec::new();
    for line in lines {
        let line = strip_bullet(line);
        let items = line.split_once(':').map(|(_, rest)| rest).unwrap_or(line);
        for item in items.split([',', ';', '|', '•']) {
            let item = item.trim().trim_end_matches('.');
            if item.is_empty() || item.chars().count() > 40 || !item.chars().any(char::is_alphabetic)
            {
                continue;
            }
            if seen.insert(item.to_lowercase()) {
                skills.push(item.to_string());
            }
        }
    }
    skills
}

/// Groups section lines into entries. Blank lines separate entries, and so does
/// a dated non-bullet line that follows a run of bullets.
fn split_entries<'a>(lines: &[&'a str]) -> Vec<Vec<&'a str>> {
    let mut entries = Vec::new();
    let mut current: Vec<&'a str> = Vec::new();
    let mut after_bullets = false;

    for &line in lines {
        if line.trim().is_empty() {
            if !current.is_empty() {
                entries.push(std::mem::take(&mut current));
            }
            after_bullets = false;
            continue;
        }
        let is_bullet = bullet_stripped(line).is_some();
        if !is_bullet && after_bullets && DATE_RE.is_match(line) && !current.is_empty() {
            entries.push(std::mem::take(&mut current));
        }
        after_bullets = is_bullet;
        current.push(line);
    }
    if !current.is_empty() {
        entries.push(current);
    }
    entries
}

fn entry_chars(entry: &[&str]) -> usize {
    entry.iter().map(|l| l.trim().chars().count()).sum()
}

fn experience_entry(entry: &[&str]) -> Option<ExperienceEntry> {
    if entry_chars(entry) < MIN_EXPERIENCE_ENTRY_CHARS {
        return None;
    }
    let (first, rest) = entry.split_first()?;
    Some(ExperienceEntry {
        title: strip_bullet(first).to_string(),
        dates: entry
            .iter()
            .find_map(|l| DATE_RE.find(l))
            .map(|m| m.as_str().to_string()),
        responsibilities: rest
            .iter()
            .filter_map(|l| bullet_stripped(l))
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect(),
    })
}

fn education_entry(entry: &[&str]) -> Option<EducationEntry> {
    if entry_chars(entry) < MIN_EDUCATION_ENTRY_CHARS {
        return None;
    }
    let first = entry.first()?;
    Some(EducationEntry {
        institution: strip_bullet(first).to_string(),
        degree: entry
            .iter()
            .find_map(|l| DEGREE_RE.find(l))
            .map(|m| m.as_str().to_string()),
        year: entry
            .iter()
            .flat_map(|l| YEAR_RE.find_iter(l))
            .filter_map(|m| m.as_str().parse::<u16>().ok())
            .max(),
    })
}

fn extract_certifications(lines: &[&str]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    lines
        .iter()
        .map(|l| strip_bullet(l))
        .filter(|l| {
            l.chars().any(char::is_alphabetic) && l.chars().count() <= MAX_CERTIFICATION_CHARS
        })
        .filter(|l| seen.insert(l.to_lowercase()))
        .map(str::to_string)
        .collect()
}

fn find_unrecognized_headers(lines: &[&str], header_lines: &[usize]) -> Vec<HeaderCandidate> {
    let name_line = lines.iter().position(|l| !l.trim().is_empty());
    lines
        .iter()
        .enumerate()
        .filter(|(idx, _)| Some(*idx) != name_line && !header_lines.contains(idx))
        .filter(|(_, line)| looks_like_header(line))
        .map(|(idx, line)| HeaderCandidate {
            line: idx + 1,
            text: line.trim().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> StructuredResume {
        parse_resume(text, &AnalysisConfig::default())
    }

    const SAMPLE: &str = "Jane Doe\n\
        jane@example.com | (555) 123-4567 | linkedin.com/in/janedoe | github.com/jdoe\n\
        \n\
        WORK EXPERIENCE\n\
        Acme Corp, Senior Engineer, Jan 2020 - Present\n\
        • Led migration of 12 services to Kubernetes\n\
        • Reduced cloud spend by 30%\n\
        - Maintained internal tooling\n\
        \n\
        EDUCATION\n\
        B.S. Computer Science, 2015 - 2019\n\
        \n\
        Skills: Rust, Python, Docker; PostgreSQL\n";

    #[test]
    fn test_sections_detected_in_order() {
        let parsed = parse(SAMPLE);
        let labels: Vec<&str> = parsed.sections.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec![UNLABELED, "Experience", "Education", "Skills"]);
    }

    #[test]
    fn test_section_facts() {
        let parsed = parse(SAMPLE);
        let exp = parsed.section("Experience").unwrap();
        assert_eq!(exp.header.as_deref(), Some("WORK EXPERIENCE"));
        assert_eq!(exp.line_count, 4);
        assert_eq!(exp.bullet_count, 3);
        assert_eq!(exp.action_verb_lines, 2); // led, reduced
        assert_eq!(exp.metric_lines, 2);
        assert_eq!(exp.dates, vec!["Jan 2020 - Present".to_string()]);
        assert_eq!(exp.lines, 3..9);
    }

    #[test]
    fn test_contact_from_first_section() {
        let parsed = parse(SAMPLE);
        assert_eq!(parsed.contact.email.as_deref(), Some("jane@example.com"));
        assert!(parsed.contact.has_phone());
        assert_eq!(parsed.contact.linkedin.as_deref(), Some("linkedin.com/in/janedoe"));
        assert_eq!(parsed.contact.github.as_deref(), Some("github.com/jdoe"));
    }

    #[test]
    fn test_contact_outside_first_section_ignored() {
        let parsed = parse("Jane Doe\nEXPERIENCE\nBuilt things\nCONTACT ME\nlate@example.com");
        assert!(!parsed.contact.has_email());
    }

    #[test]
    fn test_inline_header_content_and_skills() {
        let parsed = parse(SAMPLE);
        let skills = parsed.section("Skills").unwrap();
        assert_eq!(skills.line_count, 1);
        assert_eq!(parsed.skills, vec!["Rust", "Python", "Docker", "PostgreSQL"]);
    }

    #[test]
    fn test_experience_entry_from_sample() {
        let parsed = parse(SAMPLE);
        assert_eq!(parsed.experience.len(), 1);
        let entry = &parsed.experience[0];
        assert_eq!(entry.title, "Acme Corp, Senior Engineer, Jan 2020 - Present");
        assert_eq!(entry.dates.as_deref(), Some("Jan 2020 - Present"));
        assert_eq!(
            entry.responsibilities,
            vec![
                "Led migration of 12 services to Kubernetes",
                "Reduced cloud spend by 30%",
                "Maintained internal tooling",
            ]
        );
    }

    #[test]
    fn test_experience_entries_split_on_blank_lines_and_dated_lines() {
        let parsed = parse(
            "Jane Doe\nEXPERIENCE\n\
             Acme Corp, Engineer, 2020 - Present\n\
             - Built billing APIs\n\
             Beta LLC, Intern, 2018 - 2019\n\
             - Wrote integration tests\n\
             \n\
             Gamma Inc, Contractor, 2017\n\
             - Ported reports to SQL\n\
             \n\
             Misc\n",
        );
        let titles: Vec<&str> = parsed.experience.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Acme Corp, Engineer, 2020 - Present",
                "Beta LLC, Intern, 2018 - 2019",
                "Gamma Inc, Contractor, 2017",
            ],
            "short trailing entry is skipped"
        );
        assert_eq!(parsed.experience[1].dates.as_deref(), Some("2018 - 2019"));
        assert_eq!(parsed.experience[2].responsibilities, vec!["Ported reports to SQL"]);
    }

    #[test]
    fn test_wrapped_bullet_line_stays_in_entry() {
        let parsed = parse(
            "Jane Doe\nEXPERIENCE\nAcme Corp, Engineer, 2020 - Present\n\
             - Built billing APIs used by\nthe finance team\n- Led audits",
        );
        assert_eq!(parsed.experience.len(), 1);
        assert_eq!(parsed.experience[0].responsibilities.len(), 2);
    }

    #[test]
    fn test_education_entry_from_sample() {
        let parsed = parse(SAMPLE);
        assert_eq!(
            parsed.education,
            vec![EducationEntry {
                institution: "B.S. Computer Science, 2015 - 2019".to_string(),
                degree: Some("B.S.".to_string()),
                year: Some(2019),
            }]
        );
    }

    #[test]
    fn test_education_entries_per_block() {
        let parsed = parse(
            "Jane Doe\nEDUCATION\nState University\nMaster's in Data Science, 2021\n\n\
             City College\nAssociate of Science, 2016",
        );
        assert_eq!(parsed.education.len(), 2);
        assert_eq!(parsed.education[0].institution, "State University");
        assert_eq!(parsed.education[0].degree.as_deref(), Some("Master's"));
        assert_eq!(parsed.education[0].year, Some(2021));
        assert_eq!(parsed.education[1].degree.as_deref(), Some("Associate"));
    }

    #[test]
    fn test_education_without_degree_or_year() {
        let parsed = parse("Jane Doe\nEDUCATION\nSelf-taught through open courseware");
        assert_eq!(parsed.education.len(), 1);
        assert_eq!(parsed.education[0].degree, None);
        assert_eq!(parsed.education[0].year, None);
    }

    #[test]
    fn test_certifications_listed() {
        let parsed = parse(
            "Jane Doe\nCERTIFICATIONS\n• AWS Certified Solutions Architect (2022)\n- CKA\n\n\
             - cka\nSKILLS\nRust",
        );
        assert_eq!(
            parsed.certifications,
            vec!["AWS Certified Solutions Architect (2022)", "CKA"]
        );
        assert!(parse(SAMPLE).certifications.is_empty());
    }

    #[test]
    fn test_education_then_skills_with_leading_content() {
        let parsed = parse("John Smith\nEDUCATION\nState University\nSKILLS\nGo, SQL");
        let labels: Vec<&str> = parsed.sections.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec![UNLABELED, "Education", "Skills"]);
    }

    #[test]
    fn test_education_then_skills_without_leading_content() {
        let parsed = parse("EDUCATION\nState University\nSKILLS\nGo, SQL");
        let labels: Vec<&str> = parsed.sections.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Education", "Skills"]);
    }

    #[test]
    fn test_no_headers_yields_single_unlabeled_section() {
        let parsed = parse("just some text\nwith no structure at all");
        assert_eq!(parsed.sections.len(), 1);
        assert_eq!(parsed.sections[0].label, UNLABELED);
        assert_eq!(parsed.sections[0].metric_lines, 0);
    }

    #[test]
    fn test_empty_text_has_no_sections() {
        let parsed = parse("");
        assert!(parsed.sections.is_empty());
        assert_eq!(parsed.total_words, 0);
    }

    #[test]
    fn test_header_decoration_and_case_ignored() {
        let parsed = parse("Name\n## professional summary ##\nEngineer\n=== Technical Skills ===\nRust");
        assert!(parsed.has_section("Summary"));
        assert!(parsed.has_section("Skills"));
    }

    #[test]
    fn test_unrecognized_headers_collected() {
        let parsed = parse("JANE DOE\nMY JOURNEY\nBuilt stuff\nHobbies:\nChess\nEXPERIENCE\nLed team");
        let texts: Vec<&str> = parsed
            .unrecognized_headers
            .iter()
            .map(|h| h.text.as_str())
            .collect();
        assert_eq!(texts, vec!["MY JOURNEY", "Hobbies:"]);
        assert_eq!(parsed.unrecognized_headers[0].line, 2);
    }

    #[test]
    fn test_metric_patterns() {
        assert!(is_metric_line("increased revenue 20%"));
        assert!(is_metric_line("saved $1.2M annually"));
        assert!(is_metric_line("served 10k users"));
        assert!(is_metric_line("made builds 3x faster"));
        assert!(is_metric_line("Led team of 5 engineers"));
        assert!(!is_metric_line("Jan 2020 - Present"));
        assert!(!is_metric_line("Maintained internal tooling"));
    }

    #[test]
    fn test_bullet_stripping() {
        assert_eq!(bullet_stripped("• Led team"), Some("Led team"));
        assert_eq!(bullet_stripped("2) Shipped"), Some("Shipped"));
        assert_eq!(bullet_stripped("2020 was a year"), None);
        assert_eq!(strip_bullet("  plain line "), "plain line");
    }

    #[test]
    fn test_nonstandard_header_flag() {
        let parsed = parse("Name\nWORK HISTORY\nAcme\nSKILLS\nRust");
        assert!(parsed.section("Experience").unwrap().has_nonstandard_header());
        assert!(!parsed.section("Skills").unwrap().has_nonstandard_header());
    }
}
