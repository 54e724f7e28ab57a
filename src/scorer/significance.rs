use super::metrics::{dem_margins, mean, rep_margins};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Left-tailed Student's t-test (pooled variance) of `a` against `b`.
///
/// Returns `P(T <= t)` for `t = (mean(a) - mean(b)) / (s_p * sqrt(1/n_a + 1/n_b))`
/// with `n_a + n_b - 2` degrees of freedom, or `None` when the test is
/// undefined: an empty sample, no degrees of freedom, or zero pooled spread.
/// A single-observation sample contributes nothing to the pooled sum of
/// squares but still counts toward the sample sizes.
pub fn t_test_left_tail(a: &[f64], b: &[f64]) -> Option<f64> {
    let (n_a, n_b) = (a.len(), b.len());
    if n_a == 0 || n_b == 0 || n_a + n_b < 3 {
        return None;
    }

    let (mean_a, mean_b) = (mean(a), mean(b));
    let ss_a: f64 = a.iter().map(|x| (x - mean_a).powi(2)).sum();
    let ss_b: f64 = b.iter().map(|x| (x - mean_b).powi(2)).sum();

    let df = (n_a + n_b - 2) as f64;
    let pooled_var = (ss_a + ss_b) / df;
    let std_err = (pooled_var * (1.0 / n_a as f64 + 1.0 / n_b as f64)).sqrt();
    if !std_err.is_finite() || std_err <= 0.0 {
        return None;
    }

    let t = (mean_a - mean_b) / std_err;
    if !t.is_finite() {
        return None;
    }

    let dist = StudentsT::new(0.0, 1.0, df).ok()?;
    let p = dist.cdf(t);
    p.is_finite().then_some(p.clamp(0.0, 1.0))
}

/// Probability that Republican winning margins are not systematically smaller
/// than Democratic ones.
///
/// Policy: an uncomputable test scores as 0.0, i.e. as the strongest possible
/// evidence of a skewed map. Callers never see a failure.
pub fn detection_p_value(shares: &[f64]) -> f64 {
    t_test_left_tail(&rep_margins(shares), &dem_margins(shares)).unwrap_or(0.0)
}
