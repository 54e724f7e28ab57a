use crate::config::DetectionLimits;
use crate::error::{SeatForgeError, SfResult};
use crate::util::round_to;
use crate::votes::VoteVector;
use fastrand::Rng;

/// Decimal places kept on every proposed delta.
pub const DELTA_PLACES: u32 = 3;

/// A candidate vector plus how many proposals it took to build.
#[derive(Debug, Clone)]
pub struct Proposal {
    pub votes: VoteVector,
    pub accepted: usize,
    pub rejected: usize,
}

/// Uniform delta in `[-alpha/2, alpha/2]`, rounded to `DELTA_PLACES`.
#[inline]
pub fn random_delta(rng: &mut Rng, alpha: f64) -> f64 {
    round_to((rng.f64() - 0.5) * alpha, DELTA_PLACES)
}

/// Applies exactly `num_mutations` in-band changes to a copy of `current`.
///
/// Each proposal picks a random district and a random delta scaled by
/// `alpha`. Changes accumulate in the copy, so a district hit twice moves
/// twice. A proposal that would leave `[min_vote, max_vote]` is discarded and
/// redrawn without counting; after `retry_limit` discards the call gives up
/// with [`SeatForgeError::MutationStalled`].
pub fn mutate(
    rng: &mut Rng,
    current: &VoteVector,
    num_mutations: usize,
    alpha: f64,
    limits: &DetectionLimits,
    retry_limit: usize,
) -> SfResult<Proposal> {
    let mut votes = current.clone();
    let size = votes.len();

    if num_mutations > 0 && size == 0 {
        return Err(SeatForgeError::Validation(
            "cannot mutate an empty vote vector".to_string(),
        ));
    }

    let mut accepted = 0;
    let mut rejected = 0;
    let shares = votes.as_mut_slice();

    while accepted < num_mutations {
        let idx = rng.usize(0..size);
        let delta = random_delta(rng, alpha);
        let new_val = shares[idx] + delta;

        if limits.vote_in_band(new_val) {
            shares[idx] = new_val;
            accepted += 1;
        } else {
            rejected += 1;
            if rejected > retry_limit {
                return Err(SeatForgeError::MutationStalled {
                    accepted,
                    requested: num_mutations,
                    rejected,
                });
            }
        }
    }

    Ok(Proposal {
        votes,
        accepted,
        rejected,
    })
}
