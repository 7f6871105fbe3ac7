use itertools::Itertools;
use log::debug;

use crate::combined_region::CombinedRegion;
use crate::errors::{RefineError, RefineResult};
use crate::genome_region::get_region_distance;

/// Check that every region has a valid range, and that regions on each chromosome are listed in
/// ascending order without overlap
///
/// Regions on different chromosomes are not compared, so chromosome blocks may appear in any
/// order.
///
pub fn check_region_order(regions: &[CombinedRegion]) -> RefineResult<()> {
    if let Some(region) = regions.iter().find(|x| !x.region().region.range.is_valid()) {
        return Err(RefineError::precondition(format!(
            "Region {} ends before it starts",
            region.region().region
        )));
    }

    for (prev, next) in regions.iter().tuple_windows() {
        let prev = &prev.region().region;
        let next = &next.region().region;
        if prev.chromosome != next.chromosome {
            continue;
        }
        if next.start() < prev.start() {
            return Err(RefineError::precondition(format!(
                "Region {next} starts before preceding region {prev}"
            )));
        }
        if prev.intersect(next) {
            return Err(RefineError::precondition(format!(
                "Region {next} overlaps preceding region {prev}"
            )));
        }
    }
    Ok(())
}

/// Return true if next can be absorbed into target: same germline status, and next begins on
/// the base immediately following target
///
fn is_mergeable(target: &CombinedRegion, next: &CombinedRegion) -> bool {
    target.status() == next.status()
        && target
            .region()
            .region
            .is_left_adjacent_to(&next.region().region)
}

/// Collapse runs of contiguous regions sharing the same germline status
///
/// Regions are scanned left to right. Each incoming region is merged into the last output region
/// when the two are mergeable, and otherwise starts a new output region. Merged values are the
/// unweighted average of the merged regions' aggregate values.
///
/// Only immediate neighbors are ever merged, so input must be in genomic order. This is checked
/// before merging.
///
pub fn merge_adjacent(regions: Vec<CombinedRegion>) -> RefineResult<Vec<CombinedRegion>> {
    check_region_order(&regions)?;

    let mut merged: Vec<CombinedRegion> = Vec::with_capacity(regions.len());
    for region in regions {
        if let Some(target) = merged.last_mut() {
            if is_mergeable(target, &region) {
                *target = target.extended_with_unweighted_average(region.region());
                continue;
            }
            debug!(
                "Not merging {} into {} (status {} vs {}, gap {:?})",
                region.region().region,
                target.region().region,
                region.status(),
                target.status(),
                get_region_distance(&target.region().region, &region.region().region),
            );
        }
        merged.push(region);
    }
    Ok(merged)
}
