//! Static reference corpus: how many of `CORPUS_DOCUMENTS` background documents
//! ("common English/tech" postings and résumés) contain each term.
//!
//! Generic workplace vocabulary sits in the thousands, stack-specific terms in
//! the tens, so inverse document frequency lets domain terms dominate a job
//! description's keyword ranking. Terms absent from the table are treated as
//! maximally rare.

use std::collections::HashMap;
use std::sync::LazyLock;

pub const CORPUS_DOCUMENTS: u32 = 10_000;

const DOCUMENT_FREQUENCIES: &[(&str, u32)] = &[
    // generic workplace vocabulary
    ("ability", 2200),
    ("across", 1800),
    ("analysis", 900),
    ("analytical", 500),
    ("application", 1000),
    ("applications", 900),
    ("bachelor", 500),
    ("benefits", 1400),
    ("budget", 700),
    ("build", 1500),
    ("building", 1300),
    ("business", 2500),
    ("certification", 300),
    ("certifications", 250),
    ("certified", 350),
    ("cloud", 700),
    ("code", 800),
    ("collaborate", 600),
    ("collaboration", 600),
    ("college", 800),
    ("communication", 1100),
    ("company", 2400),
    ("computer", 1400),
    ("create", 1800),
    ("cross", 700),
    ("customer", 1400),
    ("customers", 1300),
    ("data", 1600),
    ("degree", 900),
    ("deliver", 900),
    ("design", 1300),
    ("detail", 1000),
    ("develop", 1200),
    ("developer", 700),
    ("developers", 450),
    ("developing", 900),
    ("development", 1700),
    ("education", 1000),
    ("engineer", 800),
    ("engineering", 900),
    ("engineers", 650),
    ("ensure", 1000),
    ("environment", 1100),
    ("experience", 3200),
    ("fast", 1200),
    ("features", 900),
    ("field", 1000),
    ("functional", 500),
    ("growth", 1200),
    ("help", 3000),
    ("helped", 900),
    ("high", 3000),
    ("implement", 600),
    ("improve", 1200),
    ("increase", 1200),
    ("infrastructure", 400),
    ("job", 2000),
    ("junior", 300),
    ("knowledge", 1900),
    ("lead", 1100),
    ("leadership", 800),
    ("level", 2000),
    ("location", 1200),
    ("maintain", 800),
    ("make", 3500),
    ("manage", 1000),
    ("management", 1800),
    ("manager", 1000),
    ("market", 1500),
    ("marketing", 1100),
    ("mobile", 900),
    ("multiple", 1300),
    ("network", 800),
    ("office", 1800),
    ("operations", 900),
    ("organization", 1100),
    ("organizational", 400),
    ("paced", 400),
    ("people", 3000),
    ("performance", 1300),
    ("planning", 800),
    ("platform", 800),
    ("problem", 1200),
    ("process", 1600),
    ("processes", 900),
    ("product", 1300),
    ("products", 1200),
    ("professional", 1500),
    ("project", 1400),
    ("projects", 1200),
    ("qualifications", 700),
    ("quality", 1600),
    ("related", 1800),
    ("remote", 700),
    ("reports", 1000),
    ("research", 1200),
    ("responsible", 900),
    ("results", 1400),
    ("revenue", 800),
    ("salary", 900),
    ("sales", 1300),
    ("scale", 700),
    ("science", 1000),
    ("security", 900),
    ("senior", 700),
    ("service", 1900),
    ("services", 1500),
    ("skills", 2600),
    ("software", 900),
    ("solutions", 1000),
    ("solving", 600),
    ("strategy", 900),
    ("summary", 600),
    ("support", 2100),
    ("system", 1300),
    ("systems", 1100),
    ("team", 3000),
    ("teamwork", 300),
    ("technical", 1100),
    ("technologies", 700),
    ("technology", 1500),
    ("test", 900),
    ("testing", 600),
    ("tests", 500),
    ("time", 4200),
    ("tools", 1200),
    ("training", 1200),
    ("university", 900),
    ("user", 1400),
    ("users", 1200),
    ("various", 1100),
    ("verbal", 500),
    ("web", 1500),
    ("worked", 1100),
    ("written", 1300),
    // stack-specific vocabulary
    ("agile", 150),
    ("ai", 200),
    ("android", 70),
    ("angular", 50),
    ("ansible", 12),
    ("api", 150),
    ("aws", 120),
    ("azure", 70),
    ("backend", 40),
    ("c#", 55),
    ("c++", 60),
    ("cassandra", 10),
    ("ci/cd", 40),
    ("css", 100),
    ("data science", 40),
    ("database", 300),
    ("deep learning", 30),
    ("devops", 40),
    ("django", 30),
    ("docker", 45),
    ("dynamodb", 8),
    ("elasticsearch", 15),
    ("excel", 400),
    ("express", 200),
    ("figma", 20),
    ("flask", 25),
    ("frontend", 40),
    ("fullstack", 15),
    ("gcp", 30),
    ("git", 70),
    ("github", 60),
    ("gitlab", 15),
    ("go", 400),
    ("graphql", 15),
    ("hadoop", 15),
    ("html", 120),
    ("ios", 60),
    ("java", 160),
    ("javascript", 140),
    ("jenkins", 20),
    ("jira", 40),
    ("kafka", 18),
    ("kanban", 20),
    ("kotlin", 20),
    ("kubernetes", 30),
    ("linux", 80),
    ("llm", 10),
    ("machine learning", 90),
    ("microservices", 25),
    ("mongodb", 35),
    ("mysql", 50),
    ("nextjs", 8),
    ("nlp", 15),
    ("node", 80),
    ("numpy", 12),
    ("pandas", 20),
    ("php", 60),
    ("postgresql", 35),
    ("python", 150),
    ("pytorch", 12),
    ("rabbitmq", 6),
    ("rails", 50),
    ("react", 90),
    ("redis", 25),
    ("redux", 15),
    ("rest", 500),
    ("ruby", 60),
    ("rust", 40),
    ("salesforce", 40),
    ("scala", 20),
    ("scrum", 60),
    ("serverless", 10),
    ("spark", 40),
    ("spring", 110),
    ("sql", 200),
    ("swift", 70),
    ("tableau", 25),
    ("tdd", 8),
    ("tensorflow", 15),
    ("terraform", 15),
    ("typescript", 60),
    ("ui", 90),
    ("unit testing", 30),
    ("unix", 40),
    ("ux", 60),
    ("vue", 35),
];

static FREQUENCY_INDEX: LazyLock<HashMap<&'static str, u32>> =
    LazyLock::new(|| DOCUMENT_FREQUENCIES.iter().copied().collect());

/// Number of background documents containing `term` (0 when unknown).
pub fn document_frequency(term: &str) -> u32 {
    FREQUENCY_INDEX.get(term).copied().unwrap_or(0)
}

/// Smoothed inverse document frequency: `ln((N + 1) / (df + 1)) + 1`.
pub fn inverse_document_frequency(term: &str) -> f64 {
    let n = CORPUS_DOCUMENTS as f64;
    let df = document_frequency(term).min(CORPUS_DOCUMENTS) as f64;
    ((n + 1.0) / (df + 1.0)).ln() + 1.0
}

/// Single-word corpus terms, used as part of the spelling dictionary.
pub fn vocabulary() -> impl Iterator<Item = &'static str> {
    DOCUMENT_FREQUENCIES
        .iter()
        .map(|(term, _)| *term)
        .filter(|term| !term.contains(' '))
}
