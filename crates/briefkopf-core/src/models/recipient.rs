//! Recipient data produced by the extractor and the response shape handed to callers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies which strategy produced a recipient's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Name follows the "Antragsnummer" marker.
    #[serde(rename = "Antragsnummer")]
    Antragsnummer,
    /// Salutation and name follow the clinic letterhead (variant A).
    #[serde(rename = "Dentklar marker")]
    ClinicLetterhead,
    /// Salutation and name follow the practice letterhead (variant B).
    #[serde(rename = "ZÄ Turan marker")]
    PracticeLetterhead,
    /// Salutation/name pattern anywhere in the document.
    #[serde(rename = "Anrede pattern search")]
    SalutationPattern,
}

impl StrategyKind {
    /// Stable identifier reported as the parsing method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Antragsnummer => "Antragsnummer",
            Self::ClinicLetterhead => "Dentklar marker",
            Self::PracticeLetterhead => "ZÄ Turan marker",
            Self::SalutationPattern => "Anrede pattern search",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tentative output of a single strategy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Candidate {
    /// Trimmed name; empty means the strategy found no usable name.
    pub name: String,
    /// Normalized salutation ("Herr", "Frau", ...) or empty.
    pub anrede: String,
    /// Diagnostic excerpt of the text around the match.
    pub extracted_text: String,
}

impl Candidate {
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn has_anrede(&self) -> bool {
        !self.anrede.is_empty()
    }
}

/// The accepted extraction result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientData {
    /// Recipient name, never empty.
    pub name: String,
    /// Salutation, possibly empty.
    pub anrede: String,
    /// Diagnostic excerpt (up to a handful of lines).
    pub extracted_text: String,
    /// Strategy that supplied the name.
    pub parsing_method: StrategyKind,
}

impl RecipientData {
    pub(crate) fn from_candidate(candidate: Candidate, kind: StrategyKind) -> Self {
        Self {
            name: candidate.name,
            anrede: candidate.anrede,
            extracted_text: candidate.extracted_text,
            parsing_method: kind,
        }
    }

    /// Salutation and name joined for display, e.g. "Frau Erika Muster".
    pub fn display_name(&self) -> String {
        if self.anrede.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.anrede, self.name)
        }
    }
}

/// Discriminated outcome of one extraction call.
///
/// Serializes as `{"success": true, "data": {...}}` or
/// `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResponse {
    Success(RecipientData),
    Failure(String),
}

impl ExtractionResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn data(&self) -> Option<&RecipientData> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(message) => Some(message),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct ResponseRepr {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<RecipientData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Serialize for ExtractionResponse {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let repr = match self {
            Self::Success(data) => ResponseRepr {
                success: true,
                data: Some(data.clone()),
                error: None,
            },
            Self::Failure(message) => ResponseRepr {
                success: false,
                data: None,
                error: Some(message.clone()),
            },
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ExtractionResponse {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = ResponseRepr::deserialize(deserializer)?;
        match (repr.success, repr.data, repr.error) {
            (true, Some(data), _) => Ok(Self::Success(data)),
            (false, _, Some(error)) => Ok(Self::Failure(error)),
            (true, None, _) => Err(serde::de::Error::missing_field("data")),
            (false, _, None) => Err(serde::de::Error::missing_field("error")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> RecipientData {
        RecipientData {
            name: "Max Mustermann".to_string(),
            anrede: "Herr".to_string(),
            extracted_text: "Herrn\nMax Mustermann".to_string(),
            parsing_method: StrategyKind::SalutationPattern,
        }
    }

    #[test]
    fn test_success_shape() {
        let json = serde_json::to_value(ExtractionResponse::Success(sample())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": true,
                "data": {
                    "name": "Max Mustermann",
                    "anrede": "Herr",
                    "extractedText": "Herrn\nMax Mustermann",
                    "parsingMethod": "Anrede pattern search"
                }
            })
        );
    }

    #[test]
    fn test_failure_shape() {
        let json = serde_json::to_value(ExtractionResponse::Failure("boom".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({ "success": false, "error": "boom" }));
    }

    #[test]
    fn test_failure_without_error_rejected() {
        let parsed: Result<ExtractionResponse, _> = serde_json::from_str(r#"{"success": false}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_display_name() {
        let mut data = sample();
        assert_eq!(data.display_name(), "Herr Max Mustermann");
        data.anrede.clear();
        assert_eq!(data.display_name(), "Max Mustermann");
    }

    #[test]
    fn test_strategy_kind_display_matches_serde() {
        for kind in [
            StrategyKind::Antragsnummer,
            StrategyKind::ClinicLetterhead,
            StrategyKind::PracticeLetterhead,
            StrategyKind::SalutationPattern,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
    }
}
