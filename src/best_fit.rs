use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{RefineError, RefineResult};
use crate::numeric::{greater_or_equal, less_or_equal};
use crate::settings::{SelectorSettings, validate_selector_settings};

/// A candidate whole-sample purity/ploidy solution from the model fitting stage
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FittedPurity {
    pub purity: f64,
    pub ploidy: f64,

    /// Goodness-of-fit score from model fitting, carried through without interpretation
    pub score: f64,

    pub diploid_proportion: f64,
}

/// The subset of somatic variant information used for purity support
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SomaticVariant {
    pub allele_frequency: f64,

    /// Location is optional and only used in debug output
    pub chromosome: Option<String>,
    pub position: Option<i64>,
}

impl SomaticVariant {
    pub fn from_allele_frequency(allele_frequency: f64) -> Self {
        Self {
            allele_frequency,
            ..Default::default()
        }
    }
}

/// Inclusive allele frequency window expected for heterozygous somatic variants at a given purity
#[derive(Clone, Debug, PartialEq)]
pub struct SupportWindow {
    pub min_vaf: f64,
    pub max_vaf: f64,
}

impl SupportWindow {
    pub fn contains(&self, vaf: f64) -> bool {
        greater_or_equal(vaf, self.min_vaf) && less_or_equal(vaf, self.max_vaf)
    }
}

/// A clonal heterozygous somatic variant is expected at half the purity, the window extends
/// half_width on each side of this value
///
pub fn somatic_support_window(purity: f64, half_width: f64) -> SupportWindow {
    let expected_vaf = purity / 2.0;
    SupportWindow {
        min_vaf: expected_vaf - half_width,
        max_vaf: expected_vaf + half_width,
    }
}

/// Number of variants with allele frequency inside the candidate's support window
pub fn count_supporting_variants(
    variants: &[SomaticVariant],
    candidate: &FittedPurity,
    half_width: f64,
) -> usize {
    let window = somatic_support_window(candidate.purity, half_width);
    variants
        .iter()
        .filter(|x| window.contains(x.allele_frequency))
        .count()
}

/// Select the candidate purity with the most somatic variant support
///
/// Ties go to the earliest candidate in input order, so if no candidate has any support the
/// first candidate is returned.
///
pub fn select_best_fit_with_settings(
    settings: &SelectorSettings,
    variants: &[SomaticVariant],
    candidates: &[FittedPurity],
) -> RefineResult<FittedPurity> {
    validate_selector_settings(settings)
        .map_err(|e| RefineError::precondition(format!("Invalid selector settings: {e}")))?;

    let Some(first) = candidates.first() else {
        return Err(RefineError::precondition(
            "Best fit selection requires at least one candidate purity",
        ));
    };

    let half_width = settings.somatic_window_half_width;
    let mut best = first;
    let mut best_count = count_supporting_variants(variants, first, half_width);
    for candidate in candidates.iter().skip(1) {
        let count = count_supporting_variants(variants, candidate, half_width);
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }

    debug!(
        "Selected purity {:.4} ploidy {:.4} from {} candidates with {} of {} somatic variants in support",
        best.purity,
        best.ploidy,
        candidates.len(),
        best_count,
        variants.len()
    );

    Ok(best.clone())
}

pub fn select_best_fit(
    variants: &[SomaticVariant],
    candidates: &[FittedPurity],
) -> RefineResult<FittedPurity> {
    select_best_fit_with_settings(&SelectorSettings::default(), variants, candidates)
}
