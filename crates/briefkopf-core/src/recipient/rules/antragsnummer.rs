//! Name following the "Antragsnummer" marker of application forms.

use tracing::trace;

use super::patterns::{ADDRESS_LINE, ANTRAGSNUMMER_MARKER};
use super::{diagnostic_excerpt, lines_after_marker, RecipientStrategy};
use crate::models::recipient::{Candidate, StrategyKind};

/// Reads the first plausible name line after "Antragsnummer".
///
/// Lines starting with a digit (the application number itself) are
/// skipped. The first remaining line is rejected if it looks like a
/// street or postal fragment. Never yields a salutation.
pub struct AntragsnummerStrategy {
    excerpt_lines: usize,
}

impl AntragsnummerStrategy {
    pub fn new() -> Self {
        Self { excerpt_lines: 5 }
    }

    /// Set how many lines the diagnostic excerpt keeps.
    pub fn with_excerpt_lines(mut self, count: usize) -> Self {
        self.excerpt_lines = count;
        self
    }
}

impl Default for AntragsnummerStrategy {
    fn default() -> Self {
        Self::new()
    }
}

fn starts_with_digit(line: &str) -> bool {
    line.chars().next().is_some_and(|c| c.is_ascii_digit())
}

impl RecipientStrategy for AntragsnummerStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Antragsnummer
    }

    fn try_parse(&self, text: &str) -> Option<Candidate> {
        let lines = lines_after_marker(text, ANTRAGSNUMMER_MARKER)?;

        let name = lines.iter().copied().find(|line| !starts_with_digit(line))?;
        if ADDRESS_LINE.is_match(name) {
            trace!("Antragsnummer: rejected address-like line {:?}", name);
            return None;
        }

        Some(Candidate {
            name: name.to_string(),
            anrede: String::new(),
            extracted_text: diagnostic_excerpt(&lines, self.excerpt_lines),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Option<Candidate> {
        AntragsnummerStrategy::new().try_parse(text)
    }

    #[test]
    fn test_name_after_marker() {
        let candidate = parse("Formular\nAntragsnummer\n\n  Erika Mustermann  \nStr. 1").unwrap();
        assert_eq!(candidate.name, "Erika Mustermann");
        assert!(candidate.anrede.is_empty());
        assert_eq!(candidate.extracted_text, "Erika Mustermann\nStr. 1");
    }

    #[test]
    fn test_skips_application_number() {
        let candidate = parse("...Antragsnummer\n12345\nJohn Smith\n...").unwrap();
        assert_eq!(candidate.name, "John Smith");
        assert_eq!(candidate.extracted_text, "12345\nJohn Smith\n...");
    }

    #[test]
    fn test_rejects_address_lines() {
        assert!(parse("Antragsnummer\nStraße 5\nMax").is_none());
        assert!(parse("Antragsnummer\n4711\nstr. 9").is_none());
        assert!(parse("Antragsnummer\nD 10717 Berlin").is_none());
    }

    #[test]
    fn test_missing_marker_or_lines() {
        assert!(parse("Rechnung\nFrau\nErika Muster").is_none());
        assert!(parse("Antragsnummer\n  \n").is_none());
        assert!(parse("Antragsnummer\n123\n456").is_none());
    }
}
