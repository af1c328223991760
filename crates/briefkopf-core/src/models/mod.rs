//! Data models shared across briefkopf.

pub mod config;
pub mod recipient;

pub use config::{BriefkopfConfig, ExtractionConfig, PdfConfig, TemplateConfig};
pub use recipient::{Candidate, ExtractionResponse, RecipientData, StrategyKind};
