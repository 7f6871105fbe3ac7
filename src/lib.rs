//! Tumor purity/ploidy candidate selection and germline deletion segment refinement
//!
//! The two entry points are [`select_best_fit`], which picks the purity/ploidy candidate best
//! supported by somatic variant allele frequencies, and [`extract_germline_deletions`], which
//! rewrites germline deletion sub-regions of fitted copy number segments and merges the contiguous
//! results. [`refine_sample`] runs both for one sample.
//!
//! All routines operate on in-memory records and perform no I/O.
//!

pub mod best_fit;
pub mod chromosome;
pub mod combined_region;
pub mod errors;
pub mod fitted_region;
pub mod genome_region;
pub mod germline_deletions;
pub mod int_range;
pub mod logger;
pub mod numeric;
pub mod refine;
pub mod region_merge;
pub mod settings;

pub use crate::best_fit::{FittedPurity, SomaticVariant, select_best_fit};
pub use crate::chromosome::Gender;
pub use crate::combined_region::{CombinedRegion, CopyNumberMethod};
pub use crate::errors::{RefineError, RefineResult};
pub use crate::fitted_region::{FittedRegion, GermlineStatus};
pub use crate::genome_region::GenomeRegion;
pub use crate::germline_deletions::extract_germline_deletions;
pub use crate::refine::{SampleRefinement, SampleRefinementInput, refine_sample};
pub use crate::region_merge::merge_adjacent;
pub use crate::settings::RefineSettings;

pub const PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");
pub const PROGRAM_VERSION: &str = env!("CARGO_PKG_VERSION");
