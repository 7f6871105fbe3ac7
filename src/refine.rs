use log::info;
use serde::{Deserialize, Serialize};

use crate::best_fit::{FittedPurity, SomaticVariant, select_best_fit_with_settings};
use crate::chromosome::Gender;
use crate::combined_region::CombinedRegion;
use crate::errors::{RefineError, RefineResult};
use crate::germline_deletions::extract_germline_deletions_with_settings;
use crate::settings::{RefineSettings, validate_settings};
use crate::{PROGRAM_NAME, PROGRAM_VERSION};

/// All upstream inputs for one sample
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SampleRefinementInput {
    pub candidates: Vec<FittedPurity>,
    pub somatic_variants: Vec<SomaticVariant>,
    pub combined_regions: Vec<CombinedRegion>,
    pub gender: Gender,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SampleRefinement {
    pub best_fit: FittedPurity,
    pub germline_deletions: Vec<CombinedRegion>,
}

/// Select the best purity fit and extract germline deletions for one sample
///
pub fn refine_sample(
    settings: &RefineSettings,
    input: &SampleRefinementInput,
) -> RefineResult<SampleRefinement> {
    validate_settings(settings)
        .map_err(|e| RefineError::precondition(format!("Invalid refinement settings: {e}")))?;

    info!("Starting {PROGRAM_NAME} {PROGRAM_VERSION} sample refinement");

    let best_fit = select_best_fit_with_settings(
        &settings.selector,
        &input.somatic_variants,
        &input.candidates,
    )?;
    info!(
        "Selected purity {:.4} ploidy {:.4} from {} candidate fits",
        best_fit.purity,
        best_fit.ploidy,
        input.candidates.len()
    );

    let germline_deletions = extract_germline_deletions_with_settings(
        &settings.extractor,
        &input.combined_regions,
        input.gender,
    )?;
    info!(
        "Extracted {} germline deletion regions from {} segments",
        germline_deletions.len(),
        input.combined_regions.len()
    );

    if settings.debug {
        for region in germline_deletions.iter() {
            eprintln!(
                "{}\t{}\t{:.4}\t{:.4}",
                region.region().region,
                region.method(),
                region.tumor_copy_number(),
                region.tumor_baf()
            );
        }
    }

    Ok(SampleRefinement {
        best_fit,
        germline_deletions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combined_region::CopyNumberMethod;
    use crate::fitted_region::GermlineStatus;
    use crate::fitted_region::test_utils::get_test_fitted_region;

    fn get_test_input() -> SampleRefinementInput {
        let parent = CombinedRegion::new(get_test_fitted_region(
            "chr1:1-99",
            GermlineStatus::Diploid,
            2.0,
            2.0,
            1.0,
        ))
        .extended_with_unweighted_average(&get_test_fitted_region(
            "chr1:100-200",
            GermlineStatus::HomDeletion,
            0.2,
            0.0,
            0.01,
        ))
        .with_tumor_copy_number(CopyNumberMethod::BafWeighted, 1.8)
        .with_inferred_tumor_baf(0.5);

        let candidate = |purity: f64, ploidy: f64| FittedPurity {
            purity,
            ploidy,
            score: 0.1,
            diploid_proportion: 0.9,
        };

        SampleRefinementInput {
            candidates: vec![candidate(0.3, 2.0), candidate(0.5, 2.1)],
            somatic_variants: [0.06, 0.10, 0.14, 0.24, 0.30]
                .iter()
                .map(|&x| SomaticVariant::from_allele_frequency(x))
                .collect(),
            combined_regions: vec![parent],
            gender: Gender::Female,
        }
    }

    #[test]
    fn test_refine_sample() {
        let input = get_test_input();
        let result = refine_sample(&RefineSettings::default(), &input).unwrap();
        approx::assert_ulps_eq!(result.best_fit.purity, 0.3, max_ulps = 4);
        assert_eq!(result.germline_deletions.len(), 1);
        assert_eq!(
            result.germline_deletions[0].region().region.to_region_str(),
            "chr1:100-200"
        );
    }

    #[test]
    fn test_refine_sample_errors() {
        let mut settings = RefineSettings::default();
        settings.extractor.thread_count = 0;
        let err = refine_sample(&settings, &get_test_input()).unwrap_err();
        assert!(err.is_precondition());

        let mut input = get_test_input();
        input.candidates.clear();
        let err = refine_sample(&RefineSettings::default(), &input).unwrap_err();
        assert!(err.is_precondition());
    }

    #[test]
    fn test_input_from_json() {
        let input = get_test_input();
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"gender\":\"FEMALE\""));
        let input2: SampleRefinementInput = serde_json::from_str(&json).unwrap();
        let result = refine_sample(&RefineSettings::default(), &input2).unwrap();
        assert_eq!(result.germline_deletions.len(), 1);
    }
}
