pub mod engine;
pub mod metrics;
pub mod significance;
pub mod types;

pub use self::types::ScoreDetails;
use crate::config::{Config, DetectionLimits, ScoringWeights};

/// Composite fitness of a vote-share vector: higher is better.
///
/// Scoring is total over its input. Degenerate vectors (ties everywhere,
/// empty win lists, out-of-band shares) resolve to penalties, never errors.
#[derive(Debug, Clone)]
pub struct Scorer {
    pub limits: DetectionLimits,
    pub weights: ScoringWeights,
}

impl Scorer {
    pub fn new(limits: DetectionLimits, weights: ScoringWeights) -> Self {
        Self { limits, weights }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.limits.clone(), config.weights.clone())
    }

    pub fn score(&self, shares: &[f64]) -> f64 {
        engine::score(self, shares)
    }

    pub fn score_details(&self, shares: &[f64]) -> ScoreDetails {
        engine::score_details(self, shares)
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
