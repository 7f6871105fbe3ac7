use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString};

use crate::errors::{RefineError, RefineResult};
use crate::genome_region::GenomeRegion;

/// State of a fitted region relative to the matched normal sample
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    Eq,
    PartialEq,
    Serialize,
    Hash,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GermlineStatus {
    Diploid,
    /// One copy lost in the normal sample
    HetDeletion,
    /// Both copies lost in the normal sample
    HomDeletion,
    Amplification,
    Noise,
    Centromere,
    Unknown,
}

impl GermlineStatus {
    pub fn parse(value: &str) -> RefineResult<Self> {
        Self::from_str(value).map_err(|_| {
            RefineError::domain_value(format!("Unrecognized germline status '{value}'"))
        })
    }
}

/// A segment with all of its fitted copy number values
///
/// Records of this type are produced by the upstream fitting stage and are treated as read-only
/// here.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FittedRegion {
    pub region: GenomeRegion,

    /// Model-fitted absolute copy number in the tumor
    pub tumor_copy_number: f64,

    /// Copy number estimate normalized against the matched reference
    pub ref_normalised_copy_number: f64,

    /// Observed depth ratio in the normal sample
    pub observed_normal_ratio: f64,

    pub tumor_baf: f64,

    pub status: GermlineStatus,
}

impl FittedRegion {
    pub fn chromosome(&self) -> &str {
        &self.region.chromosome
    }

    pub fn start(&self) -> i64 {
        self.region.start()
    }

    pub fn end(&self) -> i64 {
        self.region.end()
    }

    pub fn bases(&self) -> i64 {
        self.region.bases()
    }
}
