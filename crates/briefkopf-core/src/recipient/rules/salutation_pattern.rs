//! Fallback scan for a salutation line followed by a two-word name.

use super::patterns::SALUTATION_BLOCK;
use super::{normalize_anrede, RecipientStrategy};
use crate::models::recipient::{Candidate, StrategyKind};

/// Searches the whole document, independent of any marker.
#[derive(Default)]
pub struct SalutationPatternStrategy;

impl SalutationPatternStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl RecipientStrategy for SalutationPatternStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::SalutationPattern
    }

    fn try_parse(&self, text: &str) -> Option<Candidate> {
        let caps = SALUTATION_BLOCK.captures(text)?;
        let full_match = caps.get(0)?;

        Some(Candidate {
            name: caps[2].trim().to_string(),
            anrede: normalize_anrede(&caps[1]),
            extracted_text: full_match.as_str().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_first_block() {
        let text = "Lorem\nHerrn\nMax Mustermann\nBlah\nFrau\nErika Muster";
        let candidate = SalutationPatternStrategy::new().try_parse(text).unwrap();
        assert_eq!(candidate.name, "Max Mustermann");
        assert_eq!(candidate.anrede, "Herr");
        assert_eq!(candidate.extracted_text, "Herrn\nMax Mustermann");
    }

    #[test]
    fn test_umlauts_and_hyphens() {
        let text = "FRAU\r\n  Jürgen-Özdemir Weiß";
        let candidate = SalutationPatternStrategy::new().try_parse(text).unwrap();
        assert_eq!(candidate.name, "Jürgen-Özdemir Weiß");
        assert_eq!(candidate.anrede, "Frau");
    }

    #[test]
    fn test_requires_two_tokens() {
        assert!(SalutationPatternStrategy::new().try_parse("Herr\nMustermann\n").is_none());
        assert!(SalutationPatternStrategy::new().try_parse("Herr Max Mustermann").is_none());
    }
}
