use super::metrics::{dem_seats, durability, mean_median_diff, rep_seats, total_dem_share};
use super::significance::detection_p_value;
use super::{ScoreDetails, Scorer};

/// Below this durability a near-tie district makes the map fragile.
pub const DURABILITY_FLOOR: f64 = 0.03;
/// Durability beyond this earns the shallower weight.
pub const DURABILITY_KNEE: f64 = 0.1;
/// Below this evasion margin the tests are considered too close to call.
pub const EVASION_FLOOR: f64 = 0.02;
pub const FRAGILE_PENALTY: f64 = -1.0;

/// Fast Path: used by the search loop.
pub fn score(scorer: &Scorer, shares: &[f64]) -> f64 {
    score_details(scorer, shares).total
}

/// Detailed Path: every component and metric behind the score.
pub fn score_details(scorer: &Scorer, shares: &[f64]) -> ScoreDetails {
    let l = &scorer.limits;
    let w = &scorer.weights;

    let mut d = ScoreDetails {
        rep_seats: rep_seats(shares),
        dem_seats: dem_seats(shares),
        total_dem_share: total_dem_share(shares),
        mean_median_diff: mean_median_diff(shares),
        p_value: detection_p_value(shares),
        durability: durability(shares),
        ..Default::default()
    };

    // 1. Seats
    d.seats_component = if d.rep_seats < l.min_republican_seats {
        w.insufficient_seats_penalty
    } else {
        (d.rep_seats - l.min_republican_seats) as f64 * w.seats_weight
    };

    // 2. Detection tests
    d.evasion = match d.mean_median_diff {
        Some(mmd) => {
            (l.mean_median_diff_cutoff - mmd).min(d.p_value - l.t_test_p_cutoff)
        }
        None => w.evasion_failure_penalty,
    };

    d.tests_passed = if d.evasion > 0.0 {
        2
    } else {
        let mm_passed = d
            .mean_median_diff
            .is_some_and(|mmd| mmd <= l.mean_median_diff_cutoff);
        let p_passed = d.p_value >= l.t_test_p_cutoff;
        mm_passed as u8 + p_passed as u8
    };

    d.vote_share_valid = l.total_in_band(d.total_dem_share);
    d.pcts_valid = shares.iter().all(|&v| l.vote_in_band(v));

    d.test_component = if !d.vote_share_valid {
        w.vote_share_not_in_range_penalty
    } else if !d.pcts_valid {
        0.0
    } else {
        d.tests_passed as f64
    };

    // 3. Durability
    d.durability_component = if d.durability < DURABILITY_FLOOR {
        FRAGILE_PENALTY
    } else {
        d.durability.min(DURABILITY_KNEE) * w.durability_til_10_pct_weight
            + (d.durability - DURABILITY_KNEE).max(0.0) * w.durability_past_10_pct_weight
    };

    // 4. Evasion margin
    d.evasion_component = if d.evasion < EVASION_FLOOR {
        FRAGILE_PENALTY
    } else {
        d.evasion * w.evasion_weight
    };

    d.total = d.seats_component + d.test_component + d.durability_component + d.evasion_component;
    d
}
