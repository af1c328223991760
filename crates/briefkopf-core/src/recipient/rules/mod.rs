//! Rule-based recipient strategies for known invoice layouts.

pub mod antragsnummer;
pub mod letterhead;
pub mod patterns;
pub mod salutation;
pub mod salutation_pattern;

pub use antragsnummer::AntragsnummerStrategy;
pub use letterhead::{ClinicLetterheadStrategy, PracticeLetterheadStrategy};
pub use salutation::normalize_anrede;
pub use salutation_pattern::SalutationPatternStrategy;

use crate::models::recipient::{Candidate, StrategyKind};

/// A single self-contained heuristic for locating a recipient.
pub trait RecipientStrategy: Send + Sync {
    /// Identifier reported as the parsing method.
    fn kind(&self) -> StrategyKind;

    /// Try to read a candidate from the document text.
    ///
    /// Returns `None` when the strategy's anchor is missing or its
    /// validity check rejects what follows.
    fn try_parse(&self, text: &str) -> Option<Candidate>;
}

/// Trimmed non-blank lines of `text`.
pub fn non_blank_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Non-blank lines following the first occurrence of `marker`.
///
/// The remainder of the marker's own line counts as the first line.
pub fn lines_after_marker<'a>(text: &'a str, marker: &str) -> Option<Vec<&'a str>> {
    if marker.is_empty() {
        return None;
    }
    let start = text.find(marker)? + marker.len();
    Some(non_blank_lines(&text[start..]))
}

/// Join the first `count` lines for troubleshooting output.
pub fn diagnostic_excerpt(lines: &[&str], count: usize) -> String {
    lines.iter().take(count).copied().collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank_lines() {
        let text = "a\r\n\n   \n\u{00a0}b \u{00a0}\n\tc";
        assert_eq!(non_blank_lines(text), vec!["a", "b", "c"]);
        assert!(non_blank_lines("").is_empty());
    }

    #[test]
    fn test_lines_after_marker() {
        let text = "Kopf\nMARKER rest\n\nZeile 2\n";
        assert_eq!(lines_after_marker(text, "MARKER"), Some(vec!["rest", "Zeile 2"]));
        assert_eq!(lines_after_marker(text, "missing"), None);
        assert_eq!(lines_after_marker(text, ""), None);
    }

    #[test]
    fn test_diagnostic_excerpt() {
        let lines = ["1", "2", "3", "4", "5", "6"];
        assert_eq!(diagnostic_excerpt(&lines, 5), "1\n2\n3\n4\n5");
        assert_eq!(diagnostic_excerpt(&lines[..2], 5), "1\n2");
    }
}
