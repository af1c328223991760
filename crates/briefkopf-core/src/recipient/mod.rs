//! Recipient salutation and name extraction.

mod extractor;
pub mod rules;

pub use extractor::RecipientExtractor;
pub use rules::{normalize_anrede, RecipientStrategy};

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
