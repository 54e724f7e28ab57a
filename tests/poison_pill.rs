use seatforge::config::{DetectionLimits, SearchParams};
use seatforge::optimizer::{Climber, StepOutcome};
use seatforge::scorer::Scorer;
use seatforge::votes::VoteVector;
use std::sync::Arc;

// Inputs that would blow up a naive statistics pipeline must still score.

#[test]
fn test_empty_vector_scores_finite() {
    let d = Scorer::default().score_details(&[]);
    assert!(d.total.is_finite());
    assert_eq!(d.rep_seats, 0);
    assert_eq!(d.total_dem_share, 0.0);
    assert_eq!(d.durability, 0.0);
    assert_eq!(d.mean_median_diff, None);
    assert!(!d.vote_share_valid);
}

#[test]
fn test_nan_entries_score_finite() {
    let mut shares = vec![0.4; 17];
    shares.push(f64::NAN);
    let d = Scorer::default().score_details(&shares);
    assert!(d.total.is_finite(), "total was {}", d.total);
    assert!(!d.pcts_valid);
}

#[test]
fn test_single_district_scores_finite() {
    for share in [0.0, 0.3, 0.5, 0.7, 1.0] {
        let total = Scorer::default().score(&[share]);
        assert!(total.is_finite(), "share {} scored {}", share, total);
    }
}

#[test]
fn test_extreme_shares_score_finite() {
    let mut shares = vec![0.0; 9];
    shares.extend(vec![1.0; 9]);
    assert!(Scorer::default().score(&shares).is_finite());
}

#[test]
fn test_stalled_mutation_does_not_abort_search() {
    // Every district sits outside a band it cannot reach in one step
    let limits = DetectionLimits {
        min_vote: 0.15,
        max_vote: 0.2,
        ..Default::default()
    };
    let scorer = Arc::new(Scorer::new(limits, Default::default()));
    let params = SearchParams {
        num_districts: 4,
        max_iterations: 3,
        mutation_retry_limit: 20,
        ..Default::default()
    };
    let initial = VoteVector::uniform(4, 0.9);
    let mut climber = Climber::new(scorer, params, initial.clone(), Some(5));

    for _ in 0..3 {
        assert_eq!(climber.step(), StepOutcome::Rejected);
        assert_eq!(climber.current, initial);
    }
    assert_eq!(climber.step(), StepOutcome::Restarted);
}
