//! Analysis core: pure, synchronous text analysis of a résumé against a job description.
//!
//! Every entry point takes an `&AnalysisConfig`. Only `handlers` touches I/O.

pub mod ats_checker;
pub mod corpus;
pub mod grammar_checker;
pub mod handlers;
pub mod keyword_matcher;
pub mod lexicon;
pub mod optimizer;
pub mod pipeline;
pub mod resume_parser;
pub mod rewriter;
pub mod settings;
pub mod tokenizer;
pub mod types;
