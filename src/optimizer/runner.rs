use super::{Climber, ProgressReport, StepOutcome};
use crate::config::Config;
use crate::scorer::Scorer;
use crate::votes::VoteVector;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// Stop conditions. With every field `None` the search never ends on its own.
#[derive(Debug, Clone, Default)]
pub struct OptimizationOptions {
    pub max_time: Option<Duration>,
    pub max_steps: Option<u64>,
    pub max_restarts: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct OptimizationResult {
    pub best_votes: VoteVector,
    pub best_score: f64,
    pub steps: u64,
    pub restarts: usize,
}

/// Receives updates during optimization.
/// Returning `false` from either hook aborts the search.
pub trait ProgressCallback {
    fn on_improvement(&self, report: &ProgressReport) -> bool;
    fn on_restart(&self, restarts: usize) -> bool;
}

pub struct Optimizer {
    scorer: Arc<Scorer>,
    config: Config,
    options: OptimizationOptions,
}

impl Optimizer {
    pub fn new(scorer: Arc<Scorer>, config: Config, options: OptimizationOptions) -> Self {
        Self {
            scorer,
            config,
            options,
        }
    }

    pub fn run<CB: ProgressCallback>(
        &self,
        initial: VoteVector,
        seed: Option<u64>,
        callback: CB,
    ) -> OptimizationResult {
        let opts = &self.options;
        let mut climber = Climber::new(
            self.scorer.clone(),
            self.config.search.clone(),
            initial,
            seed,
        );

        let mut best_votes = climber.current.clone();
        let mut best_score = climber.current_score;
        let start_time = Instant::now();

        info!(
            "Search started: {} districts, {} mutations/step, restart after {} stagnant steps",
            climber.current.len(),
            self.config.search.num_mutations,
            self.config.search.max_iterations
        );

        loop {
            if let Some(limit) = opts.max_time {
                if start_time.elapsed() >= limit {
                    info!("Time limit reached after {} steps", climber.steps);
                    break;
                }
            }
            if let Some(limit) = opts.max_steps {
                if climber.steps >= limit {
                    break;
                }
            }

            match climber.step() {
                StepOutcome::Improved => {
                    if climber.current_score > best_score {
                        best_score = climber.current_score;
                        best_votes = climber.current.clone();
                    }
                    if !callback.on_improvement(&climber.report()) {
                        break;
                    }
                }
                StepOutcome::Restarted => {
                    if !callback.on_restart(climber.restarts) {
                        break;
                    }
                    if let Some(limit) = opts.max_restarts {
                        if climber.restarts >= limit {
                            info!("Restart limit reached after {} steps", climber.steps);
                            break;
                        }
                    }
                }
                StepOutcome::Rejected => {}
            }
        }

        OptimizationResult {
            best_votes,
            best_score,
            steps: climber.steps,
            restarts: climber.restarts,
        }
    }
}
