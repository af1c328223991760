//! Recipient block following a practice letterhead.
//!
//! Invoices print the sender's letterhead on one line directly above the
//! recipient window. Two layouts are known:
//!
//! - clinic layout: salutation within the first 3 lines, name on the next
//! - practice layout: optional salutation or academic title within the
//!   first 5 lines; without one the first line is taken as the name

use tracing::trace;

use super::patterns::{SALUTATION_LINE, TITLE_LINE};
use super::{diagnostic_excerpt, lines_after_marker, normalize_anrede, RecipientStrategy};
use crate::models::config::{DEFAULT_CLINIC_MARKER, DEFAULT_PRACTICE_MARKER};
use crate::models::recipient::{Candidate, StrategyKind};

const CLINIC_SCAN_LINES: usize = 3;
const PRACTICE_SCAN_LINES: usize = 5;

/// Clinic letterhead strategy.
pub struct ClinicLetterheadStrategy {
    marker: String,
    excerpt_lines: usize,
}

impl ClinicLetterheadStrategy {
    pub fn new() -> Self {
        Self::with_marker(DEFAULT_CLINIC_MARKER)
    }

    pub fn with_marker(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            excerpt_lines: 5,
        }
    }

    pub fn with_excerpt_lines(mut self, count: usize) -> Self {
        self.excerpt_lines = count;
        self
    }
}

impl Default for ClinicLetterheadStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipientStrategy for ClinicLetterheadStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ClinicLetterhead
    }

    fn try_parse(&self, text: &str) -> Option<Candidate> {
        let lines = lines_after_marker(text, &self.marker)?;

        let position = lines
            .iter()
            .take(CLINIC_SCAN_LINES)
            .position(|line| SALUTATION_LINE.is_match(line));

        let Some(i) = position else {
            trace!("clinic letterhead: no salutation in first {} lines", CLINIC_SCAN_LINES);
            return None;
        };

        // A salutation on the last line still counts; the name is then empty.
        Some(Candidate {
            name: lines.get(i + 1).map(|s| s.to_string()).unwrap_or_default(),
            anrede: normalize_anrede(lines[i]),
            extracted_text: diagnostic_excerpt(&lines, self.excerpt_lines),
        })
    }
}

/// Practice letterhead strategy.
pub struct PracticeLetterheadStrategy {
    marker: String,
    excerpt_lines: usize,
}

impl PracticeLetterheadStrategy {
    pub fn new() -> Self {
        Self::with_marker(DEFAULT_PRACTICE_MARKER)
    }

    pub fn with_marker(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            excerpt_lines: 5,
        }
    }

    pub fn with_excerpt_lines(mut self, count: usize) -> Self {
        self.excerpt_lines = count;
        self
    }
}

impl Default for PracticeLetterheadStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipientStrategy for PracticeLetterheadStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::PracticeLetterhead
    }

    fn try_parse(&self, text: &str) -> Option<Candidate> {
        let lines = lines_after_marker(text, &self.marker)?;

        let title = lines
            .iter()
            .take(PRACTICE_SCAN_LINES)
            .position(|line| TITLE_LINE.is_match(line));

        // Some documents omit the title and start with the name. A preamble
        // before the recipient block is then taken as the name.
        let (anrede, name_index) = match title {
            Some(i) => (normalize_anrede(lines[i]), i + 1),
            None => (String::new(), 0),
        };

        let name = lines.get(name_index).copied().unwrap_or_default();
        if name.is_empty() {
            return None;
        }

        Some(Candidate {
            name: name.to_string(),
            anrede,
            extracted_text: diagnostic_excerpt(&lines, self.excerpt_lines),
        })
    }
}
