use crate::error::{SeatForgeError, SfResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub limits: DetectionLimits,
    #[command(flatten)]
    pub weights: ScoringWeights,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchParams {
    #[arg(long, default_value_t = 18)]
    pub num_districts: usize,
    /// Stagnant iterations tolerated before restarting from the initial vector.
    #[arg(long, default_value_t = 100_000)]
    pub max_iterations: usize,
    #[arg(long, default_value_t = 10)]
    pub num_mutations: usize,
    /// Rejected proposals tolerated inside a single mutation before giving up.
    #[arg(long, default_value_t = 10_000)]
    pub mutation_retry_limit: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            num_districts: 18,
            max_iterations: 100_000,
            num_mutations: 10,
            mutation_retry_limit: 10_000,
        }
    }
}

impl SearchParams {
    /// Stagnation span over which the mutation step size stays constant.
    pub fn cooling_window(&self) -> usize {
        (self.max_iterations / 10).max(1)
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DetectionLimits {
    // === OUTCOME ===
    #[arg(long, default_value_t = 11)]
    pub min_republican_seats: usize,

    // === DETECTION TESTS ===
    #[arg(long, default_value_t = 0.3)]
    pub mean_median_diff_cutoff: f64,
    #[arg(long, default_value_t = 0.05)]
    pub t_test_p_cutoff: f64,

    // === PLAUSIBILITY BANDS ===
    #[arg(long, default_value_t = 0.15)]
    pub min_vote: f64,
    #[arg(long, default_value_t = 0.85)]
    pub max_vote: f64,
    #[arg(long, default_value_t = 0.494999)]
    pub min_total_share: f64,
    #[arg(long, default_value_t = 0.505001)]
    pub max_total_share: f64,
}

impl Default for DetectionLimits {
    fn default() -> Self {
        Self {
            min_republican_seats: 11,
            mean_median_diff_cutoff: 0.3,
            t_test_p_cutoff: 0.05,
            min_vote: 0.15,
            max_vote: 0.85,
            min_total_share: 0.494999,
            max_total_share: 0.505001,
        }
    }
}

impl DetectionLimits {
    pub fn vote_in_band(&self, share: f64) -> bool {
        share >= self.min_vote && share <= self.max_vote
    }

    pub fn total_in_band(&self, share: f64) -> bool {
        share >= self.min_total_share && share <= self.max_total_share
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringWeights {
    // === REWARDS ===
    #[arg(long, default_value_t = 0.5)]
    pub seats_weight: f64,
    #[arg(long, default_value_t = 2.0)]
    pub evasion_weight: f64,
    #[arg(long, default_value_t = 4.0)]
    pub durability_til_10_pct_weight: f64,
    #[arg(long, default_value_t = 1.0)]
    pub durability_past_10_pct_weight: f64,

    // === PENALTIES ===
    #[arg(long, default_value_t = -100.0, allow_negative_numbers = true)]
    pub insufficient_seats_penalty: f64,
    #[arg(long, default_value_t = -10.0, allow_negative_numbers = true)]
    pub vote_share_not_in_range_penalty: f64,
    /// Evasion value used when a detection statistic cannot be computed.
    #[arg(long, default_value_t = -100.0, allow_negative_numbers = true)]
    pub evasion_failure_penalty: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            seats_weight: 0.5,
            evasion_weight: 2.0,
            durability_til_10_pct_weight: 4.0,
            durability_past_10_pct_weight: 1.0,
            insufficient_seats_penalty: -100.0,
            vote_share_not_in_range_penalty: -10.0,
            evasion_failure_penalty: -100.0,
        }
    }
}

macro_rules! update_if_present {
    ($target:ident, $source:ident, $matches:ident, $($field:ident),+ $(,)?) => {
        $(
            if $matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                $target.$field = $source.$field.clone();
            }
        )+
    };
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SfResult<Self> {
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Overlays only the flags the user typed on the command line.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        self.search.merge_from_cli(&cli.search, matches);
        self.limits.merge_from_cli(&cli.limits, matches);
        self.weights.merge_from_cli(&cli.weights, matches);
    }

    pub fn validate(&self) -> SfResult<()> {
        let s = &self.search;
        let l = &self.limits;

        if s.num_districts == 0 {
            return Err(SeatForgeError::Config(
                "num_districts must be at least 1".to_string(),
            ));
        }
        if s.max_iterations == 0 {
            return Err(SeatForgeError::Config(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&l.min_vote)
            || !(0.0..=1.0).contains(&l.max_vote)
            || l.min_vote > l.max_vote
        {
            return Err(SeatForgeError::Config(format!(
                "vote band [{}, {}] must be an ordered sub-range of [0, 1]",
                l.min_vote, l.max_vote
            )));
        }
        if l.min_total_share > l.max_total_share {
            return Err(SeatForgeError::Config(format!(
                "total share band [{}, {}] is inverted",
                l.min_total_share, l.max_total_share
            )));
        }
        Ok(())
    }
}

impl SearchParams {
    pub fn merge_from_cli(&mut self, cli: &SearchParams, matches: &ArgMatches) {
        update_if_present!(
            self,
            cli,
            matches,
            num_districts,
            max_iterations,
            num_mutations,
            mutation_retry_limit,
        );
    }
}

impl DetectionLimits {
    pub fn merge_from_cli(&mut self, cli: &DetectionLimits, matches: &ArgMatches) {
        update_if_present!(
            self,
            cli,
            matches,
            min_republican_seats,
            mean_median_diff_cutoff,
            t_test_p_cutoff,
            min_vote,
            max_vote,
            min_total_share,
            max_total_share,
        );
    }
}

impl ScoringWeights {
    pub fn merge_from_cli(&mut self, cli: &ScoringWeights, matches: &ArgMatches) {
        update_if_present!(
            self,
            cli,
            matches,
            seats_weight,
            evasion_weight,
            durability_til_10_pct_weight,
            durability_past_10_pct_weight,
            insufficient_seats_penalty,
            vote_share_not_in_range_penalty,
            evasion_failure_penalty,
        );
    }
}
