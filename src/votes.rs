use crate::error::{SeatForgeError, SfResult};
use crate::util::round_to;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::ops::Deref;
use std::path::Path;

/// Democratic vote-share fraction per district, in district order.
///
/// The band invariants live in the scorer and the mutation operator, not here:
/// a `VoteVector` can hold any value so that historical data outside the
/// operating band can still be loaded and scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoteVector(Vec<f64>);

impl VoteVector {
    pub fn uniform(num_districts: usize, share: f64) -> Self {
        Self(vec![share; num_districts])
    }

    pub fn from_shares(shares: Vec<f64>) -> Self {
        Self(shares)
    }

    pub fn from_percentages(pcts: &[f64]) -> Self {
        Self(pcts.iter().map(|p| p / 100.0).collect())
    }

    /// Reads a headered CSV with either a `dem_share` (fraction) or a
    /// `dem_pct` (percentage) column. Other columns are ignored.
    pub fn load_from_csv<P: AsRef<Path>>(path: P) -> SfResult<Self> {
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> SfResult<Self> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let headers = rdr.headers()?.clone();

        let (col, scale) = if let Some(i) = headers.iter().position(|h| h == "dem_share") {
            (i, 1.0)
        } else if let Some(i) = headers.iter().position(|h| h == "dem_pct") {
            (i, 100.0)
        } else {
            return Err(SeatForgeError::Validation(
                "CSV needs a 'dem_share' or 'dem_pct' column".to_string(),
            ));
        };

        let mut shares = Vec::new();
        for (row, record) in rdr.records().enumerate() {
            let record = record?;
            let raw = record.get(col).unwrap_or("");
            let value: f64 = raw.parse().map_err(|_| {
                SeatForgeError::Validation(format!(
                    "row {}: '{}' is not a number",
                    row + 1,
                    raw
                ))
            })?;
            let share = value / scale;
            if !(0.0..=1.0).contains(&share) {
                return Err(SeatForgeError::Validation(format!(
                    "row {}: share {} is outside [0, 1]",
                    row + 1,
                    share
                )));
            }
            shares.push(share);
        }

        if shares.is_empty() {
            return Err(SeatForgeError::Validation("CSV has no districts".to_string()));
        }
        Ok(Self(shares))
    }

    pub fn ensure_len(&self, num_districts: usize) -> SfResult<()> {
        if self.0.len() != num_districts {
            return Err(SeatForgeError::Validation(format!(
                "expected {} districts, got {}",
                num_districts,
                self.0.len()
            )));
        }
        Ok(())
    }

    /// True when every district lies in `[min, max]`.
    pub fn within(&self, min: f64, max: f64) -> bool {
        self.0.iter().all(|&v| v >= min && v <= max)
    }

    /// Ascending shares rounded for display.
    pub fn sorted_rounded(&self, places: u32) -> Vec<f64> {
        let mut sorted: Vec<f64> = self.0.iter().map(|&v| round_to(v, places)).collect();
        sorted.sort_by(f64::total_cmp);
        sorted
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.0
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for VoteVector {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}
