use crate::error::{SeatForgeError, SfResult};
use crate::votes::VoteVector;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Historical district-level results usable as a starting configuration.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownDataset {
    #[strum(to_string = "pennsylvania_2012")]
    Pennsylvania2012,
}

impl KnownDataset {
    /// Democratic share per district, in percent.
    pub fn percentages(&self) -> &'static [f64] {
        match self {
            // U.S. House, 18 districts
            Self::Pennsylvania2012 => &[
                84.9, 90.5, 42.8, 36.6, 37.1, 42.9, 40.6, 43.4, 38.3, 34.4, 41.5, 48.3, 69.1, 76.9,
                43.2, 41.6, 60.3, 36.0,
            ],
        }
    }

    pub fn votes(&self) -> VoteVector {
        VoteVector::from_percentages(self.percentages())
    }
}

pub fn get_all_datasets() -> Vec<(KnownDataset, VoteVector)> {
    KnownDataset::iter().map(|d| (d, d.votes())).collect()
}

/// Where a search begins: a uniform toss-up map or a historical dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StartingPoint {
    Uniform,
    Dataset(KnownDataset),
}

impl StartingPoint {
    pub const UNIFORM_SHARE: f64 = 0.5;

    pub fn parse(name: &str) -> SfResult<Self> {
        let name = name.trim().to_lowercase();
        if name == "uniform" {
            return Ok(Self::Uniform);
        }
        KnownDataset::from_str(&name).map(Self::Dataset).map_err(|_| {
            let known: Vec<String> = KnownDataset::iter().map(|d| d.to_string()).collect();
            SeatForgeError::Config(format!(
                "unknown starting point '{}' (expected 'uniform' or one of: {})",
                name,
                known.join(", ")
            ))
        })
    }

    pub fn resolve(&self, num_districts: usize) -> SfResult<VoteVector> {
        match self {
            Self::Uniform => Ok(VoteVector::uniform(num_districts, Self::UNIFORM_SHARE)),
            Self::Dataset(d) => {
                let votes = d.votes();
                votes.ensure_len(num_districts)?;
                Ok(votes)
            }
        }
    }
}
