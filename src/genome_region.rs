use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{RefineError, RefineResult};
pub use crate::int_range::{IntRange, get_int_range_distance};

/// The structure represents a contiguous region of the genome on a single chromosome
///
/// Positions are 1-indexed and fully closed.
///
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Ord, PartialOrd, Serialize)]
pub struct GenomeRegion {
    pub chromosome: String,
    pub range: IntRange,
}

impl GenomeRegion {
    pub fn new(chromosome: &str, start: i64, end: i64) -> Self {
        Self {
            chromosome: chromosome.to_string(),
            range: IntRange::from_pair(start, end),
        }
    }

    /// Convert from a string in 'samtools' region format (e.g. chr20:100-200)
    ///
    pub fn from_region_str(region_str: &str) -> RefineResult<Self> {
        let (chromosome, start, end) = parse_samtools_region_string(region_str)?;
        Ok(Self {
            chromosome,
            range: IntRange::from_pair(start, end),
        })
    }

    /// Convert to a string in 'samtools' region format (e.g. chr20:100-200)
    ///
    pub fn to_region_str(&self) -> String {
        format!("{}:{}", self.chromosome, self.range)
    }

    pub fn start(&self) -> i64 {
        self.range.start
    }

    pub fn end(&self) -> i64 {
        self.range.end
    }

    pub fn bases(&self) -> i64 {
        self.range.size()
    }

    pub fn intersect(&self, other: &Self) -> bool {
        self.chromosome == other.chromosome && self.range.intersect_range(&other.range)
    }

    /// True if other is on the same chromosome and starts on the base immediately following this
    /// region
    pub fn is_left_adjacent_to(&self, other: &Self) -> bool {
        self.chromosome == other.chromosome && self.range.is_left_adjacent_to(&other.range)
    }
}

impl fmt::Display for GenomeRegion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_region_str())
    }
}

/// Returns None if on different chromosomes, Return 0 if the ranges intersect or are adjacent
///
pub fn get_region_distance(r1: &GenomeRegion, r2: &GenomeRegion) -> Option<usize> {
    if r1.chromosome != r2.chromosome {
        None
    } else {
        Some(get_int_range_distance(&r1.range, &r2.range))
    }
}

fn parse_position(region_str: &str, pos_str: &str) -> RefineResult<i64> {
    let mut pos_str = String::from(pos_str);
    pos_str.retain(|c| c != ',');
    pos_str.parse::<i64>().map_err(|_| {
        RefineError::domain_value(format!(
            "Unexpected position '{pos_str}' in genome region string '{region_str}'"
        ))
    })
}

/// Convert from a string in 'samtools' region format (e.g. chr20:100-200) to a tuple of
/// (chromosome, start, end), keeping the 1-indexed fully-closed convention of the input string
///
/// Commas will be stripped out of coordinates if present.
///
/// Unlike samtools, both start and end are required because no chromosome length table is
/// available to fill in an open end. The chromosome is split on the last colon so that contig
/// names containing colons, such as "HLA-DRB1*10:01:01", remain usable.
///
pub fn parse_samtools_region_string(region_str: &str) -> RefineResult<(String, i64, i64)> {
    let Some((chromosome, pos_range_str)) = region_str.rsplit_once(':') else {
        return Err(RefineError::domain_value(format!(
            "Genome region string '{region_str}' has no position range"
        )));
    };
    if chromosome.is_empty() {
        return Err(RefineError::domain_value(format!(
            "Genome region string '{region_str}' has no chromosome name"
        )));
    }
    let Some((start_str, end_str)) = pos_range_str.split_once('-') else {
        return Err(RefineError::domain_value(format!(
            "Genome region string '{region_str}' must include both start and end positions"
        )));
    };

    let start = parse_position(region_str, start_str)?;
    let end = parse_position(region_str, end_str)?;
    if start < 1 || start > end {
        return Err(RefineError::domain_value(format!(
            "Invalid position range in genome region string '{region_str}'"
        )));
    }
    Ok((chromosome.to_string(), start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// This test makes sure the auto-generated ordering for GenomeRegion is doing what we assume
    ///
    #[test]
    fn test_region_order() {
        // Ensure begin pos has priority over end pos
        let region1 = GenomeRegion::new("chr1", 1, 20);
        let region2 = GenomeRegion::new("chr1", 10, 11);
        assert!(region1 < region2);

        // Ensure that equal regions are not gt
        let region1 = GenomeRegion::new("chr2", 10, 10);
        let region2 = GenomeRegion::new("chr2", 10, 10);
        assert!(region1 >= region2);
    }

    #[test]
    fn test_to_region_string() {
        let region = GenomeRegion::new("chr2", 11, 11);
        assert_eq!(region.to_region_str(), "chr2:11-11");
        assert_eq!(region.bases(), 1);
    }

    #[test]
    fn test_samtools_region_string_splitter() {
        // A simple case
        let (chromosome, start, end) = parse_samtools_region_string("chr2:1000-2000").unwrap();
        assert_eq!(chromosome, "chr2");
        assert_eq!(start, 1000);
        assert_eq!(end, 2000);

        // Simple case with commas
        let (_, start, end) = parse_samtools_region_string("chr2:1,000-2,000").unwrap();
        assert_eq!(start, 1000);
        assert_eq!(end, 2000);

        // Colons in the contig name
        let (chromosome, start, end) =
            parse_samtools_region_string("HLA-DRB1*10:01:01:1000-2000").unwrap();
        assert_eq!(chromosome, "HLA-DRB1*10:01:01");
        assert_eq!(start, 1000);
        assert_eq!(end, 2000);
    }

    #[test]
    fn test_samtools_region_string_errors() {
        for s in ["chr2", "chr2:1000", ":1-2", "chr2:a-10", "chr2:20-10", "chr2:0-10"] {
            let err = parse_samtools_region_string(s).unwrap_err();
            assert!(err.is_domain_value(), "{s}");
        }
    }

    #[test]
    fn test_adjacency_and_distance() {
        let r1 = GenomeRegion::from_region_str("chr1:100-150").unwrap();
        let r2 = GenomeRegion::from_region_str("chr1:151-200").unwrap();
        let r3 = GenomeRegion::from_region_str("chr2:151-200").unwrap();
        let r4 = GenomeRegion::from_region_str("chr1:161-200").unwrap();

        assert!(r1.is_left_adjacent_to(&r2));
        assert!(!r1.is_left_adjacent_to(&r3));
        assert!(!r1.intersect(&r2));
        assert_eq!(get_region_distance(&r1, &r2), Some(0));
        assert_eq!(get_region_distance(&r1, &r3), None);
        assert_eq!(get_region_distance(&r1, &r4), Some(10));
    }
}
