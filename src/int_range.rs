use std::fmt;

use serde::{Deserialize, Serialize};

/// A simple type for integer position ranges
///
/// All ranges follow the 1-indexed, fully-closed convention used in copy number segment
/// reporting: [start,end], so a single base at position 10 is [10,10].
///
/// This struct is used instead of the native rust RangeInclusive type just to focus on the
/// specific goals of genomic segment intervals.
///
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Ord, PartialOrd, Serialize)]
pub struct IntRange {
    pub start: i64,
    pub end: i64,
}

impl IntRange {
    pub fn from_pair(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Number of bases covered by the range
    pub fn size(&self) -> i64 {
        self.end - self.start + 1
    }

    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    /// Return true if the ranges share at least one base (adjacency does not count)
    ///
    pub fn intersect_range(&self, other: &IntRange) -> bool {
        other.end >= self.start && other.start <= self.end
    }

    /// Return true if other begins on the base immediately following the end of this range
    ///
    pub fn is_left_adjacent_to(&self, other: &IntRange) -> bool {
        self.end + 1 == other.start
    }

    pub fn merge(&mut self, other: &IntRange) {
        if other.start < self.start {
            self.start = other.start;
        }
        if other.end > self.end {
            self.end = other.end;
        }
    }
}

impl fmt::Display for IntRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Get the distance between 2 ranges
///
/// The notion of 'distance' between two ranges here means the number of bases in the gap
/// between two ranges that don't intersect.
///
///    [---------]            [-----------]
///        R1    -------------     R2
///                R1/R2 dist
///
/// The distance is 0 if the ranges intersect or are adjacent
///
pub fn get_int_range_distance(ir1: &IntRange, ir2: &IntRange) -> usize {
    use std::cmp::max;
    max(max(ir2.start - ir1.end - 1, ir1.start - ir2.end - 1), 0) as usize
}
