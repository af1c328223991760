//! Error types for the briefkopf-core library.

use thiserror::Error;

/// Main error type for the briefkopf library.
#[derive(Error, Debug)]
pub enum BriefkopfError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Recipient extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Message template error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while turning PDF bytes into text.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to recipient extraction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// No strategy produced a usable name.
    #[error("Could not extract patient name from PDF. None of the parsing methods found valid data.")]
    NoMatch,
}

/// Errors related to message templates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Template has no body text.
    #[error("template body is empty")]
    EmptyBody,
}

/// Result type for the briefkopf library.
pub type Result<T> = std::result::Result<T, BriefkopfError>;
