//! Ordered strategy driver: first usable name wins, then a salutation repair pass.

use tracing::{debug, trace};

use crate::error::ExtractionError;
use crate::models::config::ExtractionConfig;
use crate::models::recipient::{Candidate, RecipientData, StrategyKind};

use super::rules::{
    AntragsnummerStrategy, ClinicLetterheadStrategy, PracticeLetterheadStrategy, RecipientStrategy,
    SalutationPatternStrategy,
};
use super::Result;

/// Extracts a recipient's salutation and name from document text.
///
/// Strategies run in a fixed order of decreasing specificity:
/// Antragsnummer, clinic letterhead, practice letterhead, salutation pattern.
pub struct RecipientExtractor {
    strategies: Vec<Box<dyn RecipientStrategy>>,
}

impl RecipientExtractor {
    /// Create an extractor with the built-in markers.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Create an extractor whose markers and excerpt size come from configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        let excerpt = config.excerpt_lines;

        let mut strategies: Vec<Box<dyn RecipientStrategy>> = Vec::with_capacity(4);
        strategies.push(Box::new(AntragsnummerStrategy::new().with_excerpt_lines(excerpt)));
        strategies.push(Box::new(
            ClinicLetterheadStrategy::with_marker(config.clinic_marker.as_str())
                .with_excerpt_lines(excerpt),
        ));
        strategies.push(Box::new(
            PracticeLetterheadStrategy::with_marker(config.practice_marker.as_str())
                .with_excerpt_lines(excerpt),
        ));
        strategies.push(Box::new(SalutationPatternStrategy::new()));

        Self { strategies }
    }

    /// Strategy identifiers in the order they are tried.
    pub fn order(&self) -> Vec<StrategyKind> {
        self.strategies.iter().map(|s| s.kind()).collect()
    }

    /// Extract the recipient, filling a missing salutation from other strategies.
    pub fn extract(&self, text: &str) -> Result<RecipientData> {
        let (kind, candidate) = self.find_name(text).ok_or(ExtractionError::NoMatch)?;
        let mut data = RecipientData::from_candidate(candidate, kind);

        if data.anrede.is_empty() {
            if let Some(anrede) = self.repair_anrede(text, kind) {
                debug!("salutation {:?} supplied by another strategy", anrede);
                data.anrede = anrede;
            }
        }

        Ok(data)
    }

    /// First pass: the first strategy yielding a non-empty name.
    pub fn find_name(&self, text: &str) -> Option<(StrategyKind, Candidate)> {
        for strategy in &self.strategies {
            match strategy.try_parse(text) {
                Some(candidate) if candidate.has_name() => {
                    debug!("{} matched name {:?}", strategy.kind(), candidate.name);
                    return Some((strategy.kind(), candidate));
                }
                Some(_) => trace!("{} matched without a usable name", strategy.kind()),
                None => trace!("{} did not match", strategy.kind()),
            }
        }
        None
    }

    /// Second pass: the first non-empty salutation from any strategy but `used`.
    ///
    /// The candidate's own name is irrelevant here; name and salutation
    /// may come from different strategies.
    pub fn repair_anrede(&self, text: &str, used: StrategyKind) -> Option<String> {
        self.strategies
            .iter()
            .filter(|s| s.kind() != used)
            .filter_map(|s| s.try_parse(text))
            .find(Candidate::has_anrede)
            .map(|c| c.anrede)
    }
}

impl Default for RecipientExtractor {
    fn default() -> Self {
        Self::new()
    }
}
