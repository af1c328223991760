//! Caller-facing extraction entry points.
//!
//! Every failure is returned as an [`ExtractionResponse::Failure`] value so
//! batch callers can move on to the next document.

use std::path::Path;

use tracing::{debug, warn};

use crate::models::recipient::ExtractionResponse;
use crate::pdf::TextSource;
use crate::recipient::RecipientExtractor;

/// Extract a recipient from already decoded document text.
pub fn extract_from_text(extractor: &RecipientExtractor, text: &str) -> ExtractionResponse {
    match extractor.extract(text) {
        Ok(data) => ExtractionResponse::Success(data),
        Err(e) => {
            debug!("no recipient found: {}", e);
            ExtractionResponse::Failure(e.to_string())
        }
    }
}

/// Extract a recipient from raw PDF bytes.
pub fn extract_from_bytes(
    extractor: &RecipientExtractor,
    source: &dyn TextSource,
    data: &[u8],
) -> ExtractionResponse {
    match source.read_text(data) {
        Ok(text) => extract_from_text(extractor, &text),
        Err(e) => {
            warn!("text extraction failed: {}", e);
            ExtractionResponse::Failure(e.to_string())
        }
    }
}

/// Extract a recipient from a PDF file on disk.
pub fn extract_from_file(
    extractor: &RecipientExtractor,
    source: &dyn TextSource,
    path: &Path,
) -> ExtractionResponse {
    match std::fs::read(path) {
        Ok(data) => extract_from_bytes(extractor, source, &data),
        Err(e) => {
            warn!("failed to read {}: {}", path.display(), e);
            ExtractionResponse::Failure(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PdfError;
    use crate::models::recipient::StrategyKind;
    use crate::pdf::PdfTextSource;

    fn canned(text: &'static str) -> impl TextSource {
        move |_data: &[u8]| -> crate::pdf::Result<String> { Ok(text.to_string()) }
    }

    #[test]
    fn test_success_from_bytes() {
        let source = canned("Rechnung\nFrau\nErika Muster\n");
        let response = extract_from_bytes(&RecipientExtractor::new(), &source, b"%PDF");
        let data = response.data().unwrap();
        assert_eq!(data.name, "Erika Muster");
        assert_eq!(data.anrede, "Frau");
        assert_eq!(data.parsing_method, StrategyKind::SalutationPattern);
    }

    #[test]
    fn test_no_match_is_failure_value() {
        let response = extract_from_text(&RecipientExtractor::new(), "Lorem ipsum dolor sit amet");
        assert!(!response.is_success());
        assert!(response.error().unwrap().contains("None of the parsing methods"));
        assert!(response.data().is_none());
    }

    #[test]
    fn test_source_failure_carries_message() {
        let source = |_data: &[u8]| -> crate::pdf::Result<String> {
            Err(PdfError::TextExtraction("bad xref".to_string()))
        };
        let response = extract_from_bytes(&RecipientExtractor::new(), &source, b"");
        assert_eq!(response.error(), Some("failed to extract text: bad xref"));
    }

    #[test]
    fn test_corrupt_pdf_bytes() {
        let response = extract_from_bytes(&RecipientExtractor::new(), &PdfTextSource::new(), b"garbage");
        assert!(response.error().unwrap().starts_with("failed to parse PDF"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let response = extract_from_file(
            &RecipientExtractor::new(),
            &PdfTextSource::new(),
            &dir.path().join("missing.pdf"),
        );
        assert!(!response.is_success());
    }

    #[test]
    fn test_batch_order_insensitive() {
        let extractor = RecipientExtractor::new();
        let texts = ["Herrn\nMax Mustermann", "Lorem ipsum", "Antragsnummer\nJohn Smith"];
        let forward: Vec<_> = texts.iter().map(|t| extract_from_text(&extractor, t)).collect();
        let mut backward: Vec<_> = texts.iter().rev().map(|t| extract_from_text(&extractor, t)).collect();
        backward.reverse();
        assert_eq!(forward, backward);
    }
}
