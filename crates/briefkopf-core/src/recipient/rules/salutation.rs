//! Salutation normalization.

/// Normalize a captured title token.
///
/// "Herrn" (accusative) maps to "Herr"; anything else is title-cased,
/// so "FRAU" becomes "Frau" and "dr." becomes "Dr.".
pub fn normalize_anrede(token: &str) -> String {
    match token.to_lowercase().as_str() {
        "herrn" | "herr" => return "Herr".to_string(),
        "frau" => return "Frau".to_string(),
        _ => {}
    }

    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tokens() {
        assert_eq!(normalize_anrede("Herrn"), "Herr");
        assert_eq!(normalize_anrede("HERRN"), "Herr");
        assert_eq!(normalize_anrede("herr"), "Herr");
        assert_eq!(normalize_anrede("FRAU"), "Frau");
    }

    #[test]
    fn test_generic_fallback() {
        assert_eq!(normalize_anrede("dr."), "Dr.");
        assert_eq!(normalize_anrede("PROF."), "Prof.");
        assert_eq!(normalize_anrede("ärztin"), "Ärztin");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize_anrede(""), "");
    }
}
