use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumString};

use crate::errors::{RefineError, RefineResult};
use crate::fitted_region::{FittedRegion, GermlineStatus};
use crate::numeric::extend_unweighted_mean;

/// Record of which procedure produced the aggregate copy number of a combined region
#[derive(
    Clone, Copy, Debug, Deserialize, Display, EnumCount, EnumString, Eq, PartialEq, Serialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CopyNumberMethod {
    Unknown,
    BafWeighted,
    StructuralVariant,
    LongArm,
    GermlineAmplification,
    GermlineHomDeletion,
    /// Heterozygous germline deletion with a tumor copy number low enough to be reported as a
    /// homozygous loss
    #[strum(serialize = "GERMLINE_HET2HOM_DELETION")]
    #[serde(rename = "GERMLINE_HET2HOM_DELETION")]
    GermlineHet2HomDeletion,
}

impl CopyNumberMethod {
    pub fn parse(value: &str) -> RefineResult<Self> {
        Self::from_str(value).map_err(|_| {
            RefineError::domain_value(format!("Unrecognized copy number method '{value}'"))
        })
    }
}

/// An ordered run of fitted regions reported as a single segment
///
/// The aggregate values are held in `combined`, a fitted region spanning all constituents. Its
/// status is the status of the first constituent.
///
/// Instances are never mutated in place. Each update returns a new value so that regions can be
/// shared freely between worker threads.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(try_from = "CombinedRegionFields")]
pub struct CombinedRegion {
    combined: FittedRegion,
    method: CopyNumberMethod,

    /// True if the BAF value was assigned from a surrounding region rather than fitted
    inferred_baf: bool,

    regions: Vec<FittedRegion>,
}

/// Serialized form of [CombinedRegion], checked before conversion
#[derive(Deserialize)]
struct CombinedRegionFields {
    combined: FittedRegion,
    method: CopyNumberMethod,
    inferred_baf: bool,
    regions: Vec<FittedRegion>,
}

impl TryFrom<CombinedRegionFields> for CombinedRegion {
    type Error = RefineError;

    fn try_from(fields: CombinedRegionFields) -> Result<Self, Self::Error> {
        if fields.regions.is_empty() {
            return Err(RefineError::precondition(format!(
                "Combined region {} has no constituent regions",
                fields.combined.region
            )));
        }
        Ok(Self {
            combined: fields.combined,
            method: fields.method,
            inferred_baf: fields.inferred_baf,
            regions: fields.regions,
        })
    }
}

impl CombinedRegion {
    pub fn new(region: FittedRegion) -> Self {
        Self {
            combined: region.clone(),
            method: CopyNumberMethod::Unknown,
            inferred_baf: false,
            regions: vec![region],
        }
    }

    /// Aggregate values over all constituents, represented as a single fitted region
    pub fn region(&self) -> &FittedRegion {
        &self.combined
    }

    /// Constituent regions in genomic order
    pub fn regions(&self) -> &[FittedRegion] {
        &self.regions
    }

    pub fn chromosome(&self) -> &str {
        self.combined.chromosome()
    }

    pub fn start(&self) -> i64 {
        self.combined.start()
    }

    pub fn end(&self) -> i64 {
        self.combined.end()
    }

    pub fn bases(&self) -> i64 {
        self.combined.bases()
    }

    pub fn status(&self) -> GermlineStatus {
        self.combined.status
    }

    pub fn tumor_copy_number(&self) -> f64 {
        self.combined.tumor_copy_number
    }

    pub fn tumor_baf(&self) -> f64 {
        self.combined.tumor_baf
    }

    pub fn method(&self) -> CopyNumberMethod {
        self.method
    }

    pub fn is_inferred_baf(&self) -> bool {
        self.inferred_baf
    }

    pub fn with_tumor_copy_number(mut self, method: CopyNumberMethod, copy_number: f64) -> Self {
        self.method = method;
        self.combined.tumor_copy_number = copy_number;
        self
    }

    pub fn with_inferred_tumor_baf(mut self, baf: f64) -> Self {
        self.inferred_baf = true;
        self.combined.tumor_baf = baf;
        self
    }

    /// Append a region and update the aggregate copy number and BAF to the unweighted mean over
    /// all constituents
    ///
    /// Constituent length is not used as a weight. Each constituent contributes the value it
    /// carried when it was added, so when `region` is the aggregate of another combined region
    /// any values previously assigned to it are what get averaged.
    ///
    pub fn extended_with_unweighted_average(&self, region: &FittedRegion) -> Self {
        let count = self.regions.len();
        let mut result = self.clone();

        let combined = &mut result.combined;
        combined.region.range.merge(&region.region.range);
        combined.tumor_copy_number =
            extend_unweighted_mean(combined.tumor_copy_number, count, region.tumor_copy_number);
        combined.tumor_baf = extend_unweighted_mean(combined.tumor_baf, count, region.tumor_baf);
        combined.ref_normalised_copy_number = extend_unweighted_mean(
            combined.ref_normalised_copy_number,
            count,
            region.ref_normalised_copy_number,
        );
        combined.observed_normal_ratio = extend_unweighted_mean(
            combined.observed_normal_ratio,
            count,
            region.observed_normal_ratio,
        );

        result.regions.push(region.clone());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitted_region::test_utils::get_test_fitted_region;

    #[test]
    fn test_method_names() {
        assert_eq!(
            CopyNumberMethod::GermlineHet2HomDeletion.to_string(),
            "GERMLINE_HET2HOM_DELETION"
        );
        assert_eq!(
            CopyNumberMethod::parse("GERMLINE_HOM_DELETION").unwrap(),
            CopyNumberMethod::GermlineHomDeletion
        );
        assert!(CopyNumberMethod::parse("NONE").unwrap_err().is_domain_value());
    }

    #[test]
    fn test_setters_return_new_value() {
        let fitted =
            get_test_fitted_region("chr1:100-150", GermlineStatus::HomDeletion, 0.8, 0.1, 1.0);
        let original = CombinedRegion::new(fitted);
        assert_eq!(original.method(), CopyNumberMethod::Unknown);
        assert!(!original.is_inferred_baf());

        let updated = original
            .clone()
            .with_tumor_copy_number(CopyNumberMethod::GermlineHomDeletion, 0.1)
            .with_inferred_tumor_baf(0.3);

        approx::assert_ulps_eq!(original.tumor_copy_number(), 0.8, max_ulps = 4);
        approx::assert_ulps_eq!(updated.tumor_copy_number(), 0.1, max_ulps = 4);
        approx::assert_ulps_eq!(updated.tumor_baf(), 0.3, max_ulps = 4);
        assert_eq!(updated.method(), CopyNumberMethod::GermlineHomDeletion);
        assert!(updated.is_inferred_baf());

        // Constituents keep their fitted values
        approx::assert_ulps_eq!(updated.regions()[0].tumor_copy_number, 0.8, max_ulps = 4);
    }

    #[test]
    fn test_unweighted_average_ignores_length() {
        let short =
            get_test_fitted_region("chr1:1-10", GermlineStatus::HetDeletion, 1.0, 1.0, 1.0);
        let long =
            get_test_fitted_region("chr1:11-1010", GermlineStatus::HetDeletion, 2.0, 1.0, 1.0);
        let last =
            get_test_fitted_region("chr1:1011-1020", GermlineStatus::HetDeletion, 6.0, 1.0, 1.0);

        let combined = CombinedRegion::new(short)
            .extended_with_unweighted_average(&long)
            .extended_with_unweighted_average(&last);

        assert_eq!(combined.start(), 1);
        assert_eq!(combined.end(), 1020);
        assert_eq!(combined.regions().len(), 3);
        assert_eq!(combined.status(), GermlineStatus::HetDeletion);
        approx::assert_ulps_eq!(combined.tumor_copy_number(), 3.0, max_ulps = 4);
        approx::assert_ulps_eq!(combined.tumor_baf(), 0.5, max_ulps = 4);
    }

    #[test]
    fn test_deserialize_requires_constituents() {
        let fitted =
            get_test_fitted_region("chr1:100-150", GermlineStatus::HomDeletion, 0.8, 0.1, 1.0);
        let region = CombinedRegion::new(fitted);
        let json = serde_json::to_string(&region).unwrap();
        assert_eq!(serde_json::from_str::<CombinedRegion>(&json).unwrap(), region);

        let mut value = serde_json::to_value(&region).unwrap();
        value["regions"] = serde_json::json!([]);
        let err = serde_json::from_value::<CombinedRegion>(value).unwrap_err();
        assert!(err.to_string().contains("no constituent regions"));
    }
}
