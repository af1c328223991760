//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{BriefkopfError, Result};

/// Default letterhead preceding the recipient block in clinic invoices.
pub const DEFAULT_CLINIC_MARKER: &str =
    "Ugur Kaganaslan, Dentklar Digital Dental Studio BaG, Nassauische Str. 30,10717 Berlin";

/// Default letterhead preceding the recipient block in practice invoices.
pub const DEFAULT_PRACTICE_MARKER: &str = "ZÄ Turan & Kaganaslan, Nassauische Str. 30, 10717 Berlin";

/// Main configuration for briefkopf.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BriefkopfConfig {
    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Recipient extraction configuration.
    pub extraction: ExtractionConfig,

    /// Message template configuration.
    pub template: TemplateConfig,
}

/// PDF processing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Texts shorter than this are still parsed but reported as suspicious.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self { min_text_length: 50 }
    }
}

/// Recipient extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Letterhead literal anchoring the clinic layout.
    pub clinic_marker: String,

    /// Letterhead literal anchoring the practice layout.
    pub practice_marker: String,

    /// Number of non-blank lines kept in the diagnostic excerpt.
    pub excerpt_lines: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            clinic_marker: DEFAULT_CLINIC_MARKER.to_string(),
            practice_marker: DEFAULT_PRACTICE_MARKER.to_string(),
            excerpt_lines: 5,
        }
    }
}

/// Overrides for the built-in invoice message template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Subject line; unset uses the built-in subject, empty falls back to "Message from {name}".
    pub subject: Option<String>,

    /// Body text with `{{ANREDE_SUFFIX}}`, `{{ANREDE}}`, `{{NAME}}` placeholders.
    pub body: Option<String>,
}

impl BriefkopfConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| BriefkopfError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| BriefkopfError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
