//! Document ingestion: the boundary between uploaded bytes and the analysis core.
//!
//! Size limits are enforced here, before any decoding, so the core only ever
//! sees bounded, cleaned text.

pub mod extract;
pub mod handlers;
pub mod preprocess;

use tracing::debug;

use crate::analysis::types::DocumentText;
use crate::errors::AppError;

/// Byte and character ceilings applied to every incoming document.
#[derive(Debug, Clone, Copy)]
pub struct IngestLimits {
    pub max_upload_bytes: usize,
    pub max_document_chars: usize,
}

impl IngestLimits {
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self {
            max_upload_bytes: config.max_upload_bytes,
            max_document_chars: config.max_document_chars,
        }
    }

    /// Rejects text the core should never be handed.
    pub fn check_text(&self, label: &str, text: &str) -> Result<(), AppError> {
        let chars = text.chars().count();
        if chars > self.max_document_chars {
            return Err(AppError::PayloadTooLarge(format!(
                "{label} has {chars} characters; the limit is {}",
                self.max_document_chars
            )));
        }
        Ok(())
    }
}

/// Decodes and cleans one uploaded file. CPU-bound; call from a blocking task.
pub fn ingest_bytes(
    filename: Option<&str>,
    content_type: Option<&str>,
    bytes: &[u8],
    limits: IngestLimits,
) -> Result<DocumentText, AppError> {
    if bytes.len() > limits.max_upload_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "upload is {} bytes; the limit is {}",
            bytes.len(),
            limits.max_upload_bytes
        )));
    }
    if bytes.is_empty() {
        return Err(AppError::Validation("uploaded file is empty".into()));
    }

    extract::ensure_supported(filename)?;
    let format = extract::detect_format(filename, content_type, bytes);
    let raw = extract::extract_text(bytes, format)?;
    let text = preprocess::clean_text(&raw);
    limits.check_text("document", &text)?;

    let document = DocumentText::new(text, format);
    if document.is_blank() {
        return Err(AppError::Ingest(
            "no readable text found; scanned images are not supported".into(),
        ));
    }
    debug!(
        ?format,
        words = document.word_count(),
        lines = document.line_count(),
        "document ingested"
    );
    Ok(document)
}
