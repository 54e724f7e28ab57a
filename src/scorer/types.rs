use serde::Serialize;

/// Every intermediate value behind one score, recomputed from the vector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreDetails {
    // Top-line
    pub total: f64,

    // Components (sum to `total`)
    pub seats_component: f64,
    pub test_component: f64,
    pub durability_component: f64,
    pub evasion_component: f64,

    // Raw metrics
    pub rep_seats: usize,
    pub dem_seats: usize,
    pub total_dem_share: f64,
    pub mean_median_diff: Option<f64>,
    pub p_value: f64,
    pub durability: f64,
    pub evasion: f64,

    // Gates
    pub tests_passed: u8,
    pub vote_share_valid: bool,
    pub pcts_valid: bool,
}
