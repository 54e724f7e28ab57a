pub mod mutation;
pub mod runner;

use crate::config::SearchParams;
use crate::scorer::Scorer;
use crate::util::round_to;
use crate::votes::VoteVector;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Step-decreasing mutation magnitude: `1 / (floor(stagnation / window) + 1)`.
#[inline]
pub fn cooling_alpha(stagnation: usize, window: usize) -> f64 {
    1.0 / ((stagnation / window.max(1)) + 1) as f64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Improved,
    Restarted,
    Rejected,
}

/// What gets surfaced whenever the climber adopts a better vector.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressReport {
    pub step: u64,
    pub score: f64,
    pub sorted_shares: Vec<f64>,
    pub rep_seats: usize,
    pub durability: f64,
    pub evasion: f64,
}

/// Greedy hill-climber over one vote vector.
///
/// Only strictly better candidates are adopted. The proposal step size cools
/// while the climber is stuck, and after `max_iterations` stagnant steps the
/// climber starts over from `initial`.
pub struct Climber {
    pub scorer: Arc<Scorer>,
    pub params: SearchParams,

    pub initial: VoteVector,
    pub current: VoteVector,
    pub current_score: f64,
    pub stagnation: usize,

    pub steps: u64,
    pub restarts: usize,
    pub rng: fastrand::Rng,
}

impl Climber {
    pub fn new(
        scorer: Arc<Scorer>,
        params: SearchParams,
        initial: VoteVector,
        seed: Option<u64>,
    ) -> Self {
        let rng = if let Some(s) = seed {
            fastrand::Rng::with_seed(s)
        } else {
            fastrand::Rng::new()
        };

        let current_score = scorer.score(&initial);

        Climber {
            scorer,
            params,
            current: initial.clone(),
            initial,
            current_score,
            stagnation: 0,
            steps: 0,
            restarts: 0,
            rng,
        }
    }

    pub fn alpha(&self) -> f64 {
        cooling_alpha(self.stagnation, self.params.cooling_window())
    }

    /// One propose/score/accept iteration.
    pub fn step(&mut self) -> StepOutcome {
        self.steps += 1;
        self.stagnation += 1;
        let alpha = self.alpha();

        let proposal = mutation::mutate(
            &mut self.rng,
            &self.current,
            self.params.num_mutations,
            alpha,
            &self.scorer.limits,
            self.params.mutation_retry_limit,
        );

        match proposal {
            Ok(p) => {
                let candidate_score = self.scorer.score(&p.votes);
                if candidate_score > self.current_score {
                    self.current = p.votes;
                    self.current_score = candidate_score;
                    self.stagnation = 0;
                    return StepOutcome::Improved;
                }
            }
            Err(e) => {
                warn!("Step {}: {} (alpha {:.4})", self.steps, e, alpha);
            }
        }

        if self.stagnation > self.params.max_iterations {
            self.restart();
            return StepOutcome::Restarted;
        }

        StepOutcome::Rejected
    }

    pub fn restart(&mut self) {
        debug!(
            "Restarting after {} stagnant steps (score {:.6})",
            self.stagnation, self.current_score
        );
        self.current = self.initial.clone();
        self.current_score = self.scorer.score(&self.current);
        self.stagnation = 0;
        self.restarts += 1;
    }

    pub fn report(&self) -> ProgressReport {
        let d = self.scorer.score_details(&self.current);
        ProgressReport {
            step: self.steps,
            score: self.current_score,
            sorted_shares: self.current.sorted_rounded(3),
            rep_seats: d.rep_seats,
            durability: round_to(d.durability, 6),
            evasion: round_to(d.evasion, 6),
        }
    }
}
