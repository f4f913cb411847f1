//! Binary document → plain text. PDF via `pdf-extract`, DOCX via `docx-rs`,
//! anything else is treated as (lossy) UTF-8.

use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild};

use crate::analysis::types::SourceFormat;
use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF";
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

// Binary formats that would only decode to noise.
const UNSUPPORTED_EXTENSIONS: &[&str] =
    &["doc", "rtf", "odt", "pages", "png", "jpg", "jpeg", "gif"];

/// Rejects uploads whose extension names a format no decoder here understands.
pub fn ensure_supported(filename: Option<&str>) -> Result<(), AppError> {
    let extension = filename
        .and_then(|f| f.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match extension {
        Some(ext) if UNSUPPORTED_EXTENSIONS.contains(&ext.as_str()) => {
            Err(AppError::UnsupportedMediaType(format!(
                ".{ext} files are not supported; upload PDF, DOCX or plain text"
            )))
        }
        _ => Ok(()),
    }
}

/// Picks the decoder from the file extension, then the declared content type,
/// then the leading magic bytes.
pub fn detect_format(
    filename: Option<&str>,
    content_type: Option<&str>,
    bytes: &[u8],
) -> SourceFormat {
    let extension = filename
        .and_then(|f| f.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("pdf") => return SourceFormat::Pdf,
        Some("docx") => return SourceFormat::Docx,
        Some("txt" | "md" | "text") => return SourceFormat::Plain,
        _ => {}
    }

    match content_type {
        Some("application/pdf") => return SourceFormat::Pdf,
        Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document") => {
            return SourceFormat::Docx
        }
        _ => {}
    }

    if bytes.starts_with(PDF_MAGIC) {
        SourceFormat::Pdf
    } else if bytes.starts_with(ZIP_MAGIC) {
        SourceFormat::Docx
    } else {
        SourceFormat::Plain
    }
}

pub fn extract_text(bytes: &[u8], format: SourceFormat) -> Result<String, AppError> {
    match format {
        SourceFormat::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| AppError::Ingest(format!("PDF could not be read: {e}"))),
        SourceFormat::Docx => docx_text(bytes),
        SourceFormat::Plain => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}

/// Paragraph text of a DOCX body, one paragraph per line.
fn docx_text(bytes: &[u8]) -> Result<String, AppError> {
    let docx = read_docx(bytes)
        .map_err(|e| AppError::Ingest(format!("DOCX could not be read: {e:?}")))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect();
    Ok(paragraphs.join("\n"))
}

fn paragraph_text(para: &Paragraph) -> String {
    para.children
        .iter()
        .filter_map(|child| match child {
            ParagraphChild::Run(run) => Some(run),
            _ => None,
        })
        .flat_map(|run| run.children.iter())
        .filter_map(|child| match child {
            RunChild::Text(t) => Some(t.text.as_str()),
            RunChild::Tab(_) => Some("\t"),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_wins_over_magic() {
        assert_eq!(detect_format(Some("cv.PDF"), None, b"plain"), SourceFormat::Pdf);
        assert_eq!(detect_format(Some("cv.txt"), None, b"%PDF-1.7"), SourceFormat::Plain);
    }

    #[test]
    fn test_content_type_then_magic() {
        assert_eq!(
            detect_format(None, Some("application/pdf"), b""),
            SourceFormat::Pdf
        );
        assert_eq!(detect_format(Some("upload"), None, b"PK\x03\x04rest"), SourceFormat::Docx);
        assert_eq!(detect_format(None, None, b"Jane Doe"), SourceFormat::Plain);
    }

    #[test]
    fn test_legacy_word_files_rejected() {
        let err = ensure_supported(Some("cv.doc")).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedMediaType(_)));
        assert!(ensure_supported(Some("cv.docx")).is_ok());
        assert!(ensure_supported(None).is_ok());
    }

    #[test]
    fn test_plain_bytes_decode_lossily() {
        let text = extract_text(b"Jane \xff Doe", SourceFormat::Plain).unwrap();
        assert!(text.starts_with("Jane "));
        assert!(text.ends_with(" Doe"));
    }

    #[test]
    fn test_garbage_docx_is_ingest_error() {
        let err = extract_text(b"PK\x03\x04broken", SourceFormat::Docx).unwrap_err();
        assert!(matches!(err, AppError::Ingest(_)));
    }
}
