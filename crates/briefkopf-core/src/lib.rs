//! Core library for briefkopf.
//!
//! This crate provides:
//! - PDF text extraction (lopdf + pdf-extract)
//! - Recipient salutation/name extraction from known invoice layouts
//! - Invoice e-mail templates pre-filled with the extracted recipient

pub mod error;
pub mod models;
pub mod pdf;
pub mod pipeline;
pub mod recipient;
pub mod template;

pub use error::{BriefkopfError, ExtractionError, PdfError, Result, TemplateError};
pub use models::config::BriefkopfConfig;
pub use models::recipient::{Candidate, ExtractionResponse, RecipientData, StrategyKind};
pub use pdf::{PdfExtractor, PdfProcessor, PdfTextSource, TextSource};
pub use pipeline::{extract_from_bytes, extract_from_file, extract_from_text};
pub use recipient::{normalize_anrede, RecipientExtractor, RecipientStrategy};
pub use template::{MessageTemplate, RenderedMessage};
