//! Range table configuration with a compiled-in snapshot and file overrides
//!
//! The unallocated-range table is external configuration: a bundled snapshot
//! ships with the crate, and callers can replace it with a JSON file of
//! `{"start": .., "end": ..}` objects loaded at startup. Tables are
//! validated once here so the checkers can trust them afterwards.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Unallocated ranges bundled at snapshot time: everything above the highest
/// IANA-delegated ASN up to the start of the 32-bit private-use block
/// (RFC 6996). Snapshot of the IANA 32-bit delegations, 2025-07.
pub const BUNDLED_UNALLOCATED: &[(u32, u32)] = &[(402_333, 4_199_999_999)];

/// Errors raised while loading or validating a range table
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the table file failed
    #[error("failed to read range table {}: {source}", path.display())]
    Io {
        /// Path of the table file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The file contents were not a valid JSON range table
    #[error("failed to parse range table {}: {source}", path.display())]
    Parse {
        /// Path of the table file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// The table contained no ranges
    #[error("range table is empty")]
    EmptyTable,

    /// A range had its end below its start
    #[error("inverted range: start {start} is above end {end}")]
    InvertedRange {
        /// Start of the offending range
        start: u32,
        /// End of the offending range
        end: u32,
    },
}

/// An inclusive range of ASN values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsnRange {
    /// First ASN in the range
    pub start: u32,
    /// Last ASN in the range, inclusive
    pub end: u32,
}

impl AsnRange {
    /// Whether the range contains the given ASN (inclusive on both ends)
    pub fn contains(&self, asn: u32) -> bool {
        self.start <= asn && asn <= self.end
    }
}

/// An ordered, validated sequence of ASN ranges
///
/// Constructed through [`bundled`](RangeTable::bundled),
/// [`from_pairs`](RangeTable::from_pairs), or
/// [`load_json`](RangeTable::load_json); all three guarantee a non-empty
/// table with no inverted ranges. Ordering and disjointness are assumed
/// from the source, not enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeTable {
    ranges: Vec<AsnRange>,
}

impl RangeTable {
    /// The crate's compiled-in snapshot table
    pub fn bundled() -> Self {
        Self {
            ranges: BUNDLED_UNALLOCATED
                .iter()
                .map(|&(start, end)| AsnRange { start, end })
                .collect(),
        }
    }

    /// Build a table from (start, end) pairs
    pub fn from_pairs(pairs: &[(u32, u32)]) -> Result<Self, ConfigError> {
        Self::from_ranges(
            pairs
                .iter()
                .map(|&(start, end)| AsnRange { start, end })
                .collect(),
        )
    }

    /// Build a table from already-parsed ranges
    pub fn from_ranges(ranges: Vec<AsnRange>) -> Result<Self, ConfigError> {
        if ranges.is_empty() {
            return Err(ConfigError::EmptyTable);
        }
        for range in &ranges {
            if range.end < range.start {
                return Err(ConfigError::InvertedRange {
                    start: range.start,
                    end: range.end,
                });
            }
        }
        Ok(Self { ranges })
    }

    /// Load a table from a JSON file of `{"start": .., "end": ..}` objects
    pub fn load_json(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let ranges: Vec<AsnRange> =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_ranges(ranges)
    }

    /// The ranges in table order
    pub fn ranges(&self) -> &[AsnRange] {
        &self.ranges
    }

    /// Consume the table, yielding its ranges
    pub fn into_ranges(self) -> Vec<AsnRange> {
        self.ranges
    }

    /// Number of ranges in the table
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Whether the table has no ranges (never true once constructed)
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
