//! PDF text sourcing.

mod extractor;

pub use extractor::{PdfContent, PdfExtractor, PdfTextSource};

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from the entire PDF.
    fn extract_text(&self) -> Result<String>;
}

/// Turns raw document bytes into plain text.
///
/// Line breaks in the returned text are best effort; consumers rely on
/// line adjacency only.
pub trait TextSource: Send + Sync {
    fn read_text(&self, data: &[u8]) -> Result<String>;
}

impl<F> TextSource for F
where
    F: Fn(&[u8]) -> Result<String> + Send + Sync,
{
    fn read_text(&self, data: &[u8]) -> Result<String> {
        self(data)
    }
}
