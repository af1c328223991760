//! Common regex patterns and markers for recipient extraction.

use lazy_static::lazy_static;
use regex::Regex;

/// Literal anchoring the application-form layout.
pub const ANTRAGSNUMMER_MARKER: &str = "Antragsnummer";

lazy_static! {
    // Street or postal fragments ("Str. 5", "Straße", "D 10717")
    pub static ref ADDRESS_LINE: Regex = Regex::new(
        r"(?i)^(?:Str\.|Straße|D\s*\d)"
    ).unwrap();

    // Salutation alone on its line
    pub static ref SALUTATION_LINE: Regex = Regex::new(
        r"(?i)^(?:Herrn|Herr|Frau)$"
    ).unwrap();

    // Salutation or academic title alone on its line
    pub static ref TITLE_LINE: Regex = Regex::new(
        r"(?i)^(?:Herrn|Herr|Frau|Dr\.|Prof\.)$"
    ).unwrap();

    // Salutation followed by a two-word name on the next line
    pub static ref SALUTATION_BLOCK: Regex = Regex::new(
        r"(?i)(Herrn|Herr|Frau)\s*\n\s*([A-ZÄÖÜa-zäöüß\-]+\s+[A-ZÄÖÜa-zäöüß\-]+)"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_line() {
        assert!(ADDRESS_LINE.is_match("Str. des 17. Juni 1"));
        assert!(ADDRESS_LINE.is_match("straße 4"));
        assert!(ADDRESS_LINE.is_match("D 10717 Berlin"));
        assert!(!ADDRESS_LINE.is_match("D-10717"));
        assert!(!ADDRESS_LINE.is_match("Dieter Maier"));
    }

    #[test]
    fn test_title_lines() {
        assert!(SALUTATION_LINE.is_match("HERRN"));
        assert!(!SALUTATION_LINE.is_match("Dr."));
        assert!(!SALUTATION_LINE.is_match("Herr Max"));
        assert!(TITLE_LINE.is_match("prof."));
        assert!(TITLE_LINE.is_match("Frau"));
    }

    #[test]
    fn test_salutation_block() {
        let caps = SALUTATION_BLOCK.captures("Frau \n  Jördis Groß-Weber\n").unwrap();
        assert_eq!(&caps[1], "Frau");
        assert_eq!(&caps[2], "Jördis Groß-Weber");
    }
}
