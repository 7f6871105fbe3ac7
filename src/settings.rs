use serde::{Deserialize, Serialize};
use simple_error::{SimpleResult, bail, map_err_with};

/// Half-width of the allele frequency window used to count somatic variant support for a
/// candidate purity
pub const SOMATIC_WINDOW_HALF_WIDTH: f64 = 0.1;

/// Heterozygous germline deletions are only reported when their tumor copy number bound falls
/// below this value
pub const MAX_HET_DELETION_COPY_NUMBER: f64 = 0.5;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SelectorSettings {
    /// Candidate support windows are [purity/2 - half_width, purity/2 + half_width]
    pub somatic_window_half_width: f64,
}

impl Default for SelectorSettings {
    fn default() -> Self {
        Self {
            somatic_window_half_width: SOMATIC_WINDOW_HALF_WIDTH,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ExtractorSettings {
    /// Number of worker threads used to process parent regions
    pub thread_count: usize,

    pub max_het_deletion_copy_number: f64,
}

impl Default for ExtractorSettings {
    fn default() -> Self {
        Self {
            thread_count: 1,
            max_het_deletion_copy_number: MAX_HET_DELETION_COPY_NUMBER,
        }
    }
}

/// All tunable parameters for one sample refinement run
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct RefineSettings {
    pub selector: SelectorSettings,
    pub extractor: ExtractorSettings,

    /// Turn on extra debug logging in the refinement driver
    pub debug: bool,
}

/// Read settings from a json string, any field not given takes its default value
pub fn read_settings_json(json: &str) -> SimpleResult<RefineSettings> {
    let settings = map_err_with!(
        serde_json::from_str::<RefineSettings>(json),
        "Unable to parse refinement settings json"
    )?;
    validate_settings(&settings)?;
    Ok(settings)
}

pub fn write_settings_json(settings: &RefineSettings) -> SimpleResult<String> {
    map_err_with!(
        serde_json::to_string_pretty(settings),
        "Unable to serialize refinement settings"
    )
}

pub fn validate_selector_settings(settings: &SelectorSettings) -> SimpleResult<()> {
    let half_width = settings.somatic_window_half_width;
    if !(half_width.is_finite() && half_width >= 0.0) {
        bail!(
            "Somatic window half-width must be a non-negative number, found {}",
            half_width
        );
    }
    Ok(())
}

pub fn validate_extractor_settings(settings: &ExtractorSettings) -> SimpleResult<()> {
    if settings.thread_count == 0 {
        bail!("Thread count must be greater than 0");
    }

    let max_cn = settings.max_het_deletion_copy_number;
    if !(max_cn.is_finite() && max_cn >= 0.0) {
        bail!(
            "Maximum het deletion copy number must be a non-negative number, found {}",
            max_cn
        );
    }
    Ok(())
}

pub fn validate_settings(settings: &RefineSettings) -> SimpleResult<()> {
    validate_selector_settings(&settings.selector)?;
    validate_extractor_settings(&settings.extractor)
}
