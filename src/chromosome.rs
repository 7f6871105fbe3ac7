use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::errors::{RefineError, RefineResult};

/// Sample gender, which determines the expected copy number of the sex chromosomes
#[derive(
    Clone, Copy, Debug, Deserialize, Display, EnumString, Eq, PartialEq, Serialize, Hash,
)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn parse(value: &str) -> RefineResult<Self> {
        Self::from_str(value)
            .map_err(|_| RefineError::domain_value(format!("Unrecognized gender '{value}'")))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChromosomePloidy {
    Haploid,
    Diploid,
}

/// Human nuclear chromosomes
///
/// Parsing accepts labels with or without a 'chr' prefix, so "chr7", "7" and "X" are all
/// recognized. Mitochondrial and unplaced contigs are not recognized.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum HumanChromosome {
    Autosome(u8),
    X,
    Y,
}

/// Number of autosomes in the human nuclear genome
const AUTOSOME_COUNT: u8 = 22;

impl HumanChromosome {
    pub fn parse(label: &str) -> RefineResult<Self> {
        let unprefixed = label
            .strip_prefix("chr")
            .or_else(|| label.strip_prefix("CHR"))
            .unwrap_or(label);
        match unprefixed {
            "X" | "x" => Ok(Self::X),
            "Y" | "y" => Ok(Self::Y),
            _ => match unprefixed.parse::<u8>() {
                Ok(n) if (1..=AUTOSOME_COUNT).contains(&n) => Ok(Self::Autosome(n)),
                _ => Err(RefineError::domain_value(format!(
                    "Unrecognized human chromosome '{label}'"
                ))),
            },
        }
    }

    /// Expected ploidy in the matched normal sample
    ///
    /// Autosomes are always diploid. X is diploid only in female samples, and Y is always treated
    /// as haploid.
    ///
    pub fn ploidy(&self, gender: Gender) -> ChromosomePloidy {
        match (self, gender) {
            (Self::Autosome(_), _) => ChromosomePloidy::Diploid,
            (Self::X, Gender::Female) => ChromosomePloidy::Diploid,
            (Self::X, Gender::Male) => ChromosomePloidy::Haploid,
            (Self::Y, _) => ChromosomePloidy::Haploid,
        }
    }

    pub fn is_diploid(&self, gender: Gender) -> bool {
        self.ploidy(gender) == ChromosomePloidy::Diploid
    }
}

impl FromStr for HumanChromosome {
    type Err = RefineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Expected ratio of normal sample depth relative to a diploid region
///
pub fn get_expected_normal_ratio(chromosome: &str, gender: Gender) -> RefineResult<f64> {
    let chromosome = HumanChromosome::parse(chromosome)?;
    Ok(if chromosome.is_diploid(gender) {
        1.0
    } else {
        0.5
    })
}
