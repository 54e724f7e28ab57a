//! Pure statistics over a district vote-share vector.
//!
//! A share of exactly 0.5 is a tie: it belongs to neither win list and is not
//! counted as a Republican seat.

pub const TIE: f64 = 0.5;

/// Districts the Democrat loses.
pub fn rep_seats(shares: &[f64]) -> usize {
    shares.iter().filter(|&&v| v < TIE).count()
}

pub fn dem_seats(shares: &[f64]) -> usize {
    shares.iter().filter(|&&v| v > TIE).count()
}

/// Republican vote share in each district the Republican wins.
pub fn rep_margins(shares: &[f64]) -> Vec<f64> {
    shares.iter().filter(|&&v| v < TIE).map(|v| 1.0 - v).collect()
}

/// Democratic vote share in each district the Democrat wins.
pub fn dem_margins(shares: &[f64]) -> Vec<f64> {
    shares.iter().copied().filter(|&v| v > TIE).collect()
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Statewide Democratic share, each district weighted equally.
pub fn total_dem_share(shares: &[f64]) -> f64 {
    mean(shares)
}

/// Middle value; the average of the two middle values for even lengths.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// `(mean - median) / s` with the Bessel-corrected sample deviation
/// `s = sqrt((Σx² - n·mean²) / (n - 1))`.
///
/// Returns `None` when the statistic is undefined: fewer than two districts,
/// or a spread that is zero (or rounds below zero) so the ratio has no value.
pub fn mean_median_diff(shares: &[f64]) -> Option<f64> {
    let n = shares.len();
    if n < 2 {
        return None;
    }
    let nf = n as f64;
    let mean = mean(shares);
    let median = median(shares)?;
    let sum_sqr: f64 = shares.iter().map(|x| x * x).sum();
    let variance = (sum_sqr - nf * mean * mean) / (nf - 1.0);
    if variance.is_nan() || variance <= 0.0 {
        return None;
    }
    let diff = (mean - median) / variance.sqrt();
    diff.is_finite().then_some(diff)
}

/// Twice the smallest distance from a tie; 0.0 for an empty vector.
pub fn durability(shares: &[f64]) -> f64 {
    shares
        .iter()
        .map(|v| (v - TIE).abs())
        .min_by(f64::total_cmp)
        .map_or(0.0, |m| m * 2.0)
}
