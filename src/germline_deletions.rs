use log::debug;
use rayon::prelude::*;

use crate::chromosome::{Gender, get_expected_normal_ratio};
use crate::combined_region::{CombinedRegion, CopyNumberMethod};
use crate::errors::{RefineError, RefineResult};
use crate::fitted_region::{FittedRegion, GermlineStatus};
use crate::numeric::less_than;
use crate::region_merge::merge_adjacent;
use crate::settings::{ExtractorSettings, validate_extractor_settings};

/// Upper bound on the tumor copy number of a heterozygous germline deletion
///
/// The larger of the fitted and reference-normalised copy numbers is scaled by the observed normal
/// ratio, which is capped at the ratio expected for the chromosome in a normal sample of the given
/// gender.
///
pub fn get_het_deletion_upper_bound(region: &FittedRegion, gender: Gender) -> RefineResult<f64> {
    let expected_normal_ratio = get_expected_normal_ratio(region.chromosome(), gender)?;
    let max_copy_number = region
        .tumor_copy_number
        .max(region.ref_normalised_copy_number);
    Ok(max_copy_number / (2.0 * expected_normal_ratio.min(region.observed_normal_ratio)))
}

fn create_child(
    child: &FittedRegion,
    method: CopyNumberMethod,
    copy_number: f64,
    baf: f64,
) -> CombinedRegion {
    CombinedRegion::new(child.clone())
        .with_tumor_copy_number(method, copy_number)
        .with_inferred_tumor_baf(baf)
}

/// Germline deletion regions emitted from one parent region, before merging
///
fn get_parent_deletion_children(
    settings: &ExtractorSettings,
    parent: &CombinedRegion,
    gender: Gender,
) -> RefineResult<Vec<CombinedRegion>> {
    let parent_baf = parent.tumor_baf();
    let parent_copy_number = parent.tumor_copy_number();
    let max_copy_number = settings
        .max_het_deletion_copy_number
        .min(parent_copy_number);

    let mut children = Vec::new();
    for child in parent.regions() {
        use GermlineStatus::*;
        match child.status {
            HetDeletion => {
                let upper_bound = get_het_deletion_upper_bound(child, gender)?;
                if less_than(upper_bound, max_copy_number) {
                    children.push(create_child(
                        child,
                        CopyNumberMethod::GermlineHet2HomDeletion,
                        upper_bound,
                        parent_baf,
                    ));
                } else {
                    debug!(
                        "Skipping het deletion {} with copy number bound {upper_bound:.4} (max {max_copy_number:.4})",
                        child.region
                    );
                }
            }
            HomDeletion => {
                children.push(create_child(
                    child,
                    CopyNumberMethod::GermlineHomDeletion,
                    child.ref_normalised_copy_number,
                    parent_baf,
                ));
            }
            Diploid | Amplification | Noise | Centromere | Unknown => {}
        }
    }
    Ok(children)
}

/// Extract and merge the germline deletion regions from a single parent region
///
pub fn extract_parent_germline_deletions(
    settings: &ExtractorSettings,
    parent: &CombinedRegion,
    gender: Gender,
) -> RefineResult<Vec<CombinedRegion>> {
    let children = get_parent_deletion_children(settings, parent, gender)?;
    merge_adjacent(children)
}

/// Replace the germline deletion sub-regions of each parent region with new combined regions
/// carrying a corrected copy number, then merge contiguous results within each parent
///
/// Parents are processed independently, on a worker pool of `settings.thread_count` threads when
/// more than one thread is requested.
/// Output follows parent order, and within each parent the order of the deletion sub-regions.
///
pub fn extract_germline_deletions_with_settings(
    settings: &ExtractorSettings,
    regions: &[CombinedRegion],
    gender: Gender,
) -> RefineResult<Vec<CombinedRegion>> {
    validate_extractor_settings(settings)
        .map_err(|e| RefineError::precondition(format!("Invalid extractor settings: {e}")))?;

    let extract_parent =
        |parent: &CombinedRegion| extract_parent_germline_deletions(settings, parent, gender);
    let parent_results = if settings.thread_count == 1 {
        regions
            .iter()
            .map(extract_parent)
            .collect::<RefineResult<Vec<_>>>()?
    } else {
        let worker_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(settings.thread_count)
            .build()
            .map_err(|e| {
                RefineError::precondition(format!("Unable to build extraction worker pool: {e}"))
            })?;

        worker_pool.install(|| {
            regions
                .par_iter()
                .map(extract_parent)
                .collect::<RefineResult<Vec<_>>>()
        })?
    };

    let result = parent_results.into_iter().flatten().collect::<Vec<_>>();
    debug!(
        "Extracted {} germline deletion regions from {} parent regions",
        result.len(),
        regions.len()
    );
    Ok(result)
}

pub fn extract_germline_deletions(
    regions: &[CombinedRegion],
    gender: Gender,
) -> RefineResult<Vec<CombinedRegion>> {
    extract_germline_deletions_with_settings(&ExtractorSettings::default(), regions, gender)
}
