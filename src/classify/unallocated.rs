//! Unallocated ASN range classification
//!
//! The 16-bit ASN space has been fully delegated for years; only 32-bit
//! blocks still contain gaps. The checker therefore treats everything at or
//! below 65535 as allocated and consults its range table only above that.

use crate::classify::{asn_from_value, ClassifyError};
use crate::config::{AsnRange, RangeTable};
use serde_json::Value;

/// Classifies ASNs against a table of unallocated ranges
///
/// The table is loaded once at construction and never mutated; the checker
/// is a cheap, reusable query object safe to share across threads. Ranges
/// are assumed sorted by start and disjoint (the loaders keep them that
/// way; it is not re-checked here).
#[derive(Debug, Clone)]
pub struct UnallocatedChecker {
    ranges: Vec<AsnRange>,
}

impl UnallocatedChecker {
    /// Create a checker over an already-validated range table
    pub fn from_table(table: RangeTable) -> Self {
        Self {
            ranges: table.into_ranges(),
        }
    }

    /// Create a checker over the crate's bundled snapshot table
    pub fn bundled() -> Self {
        Self::from_table(RangeTable::bundled())
    }

    /// Check whether an ASN lies inside some unallocated range
    ///
    /// Both range boundaries are inclusive: `start` and `end` match, while
    /// `start - 1` and `end + 1` do not.
    pub fn is_unallocated(&self, asn: u32) -> bool {
        // 16-bit space is fully allocated regardless of the table
        if asn <= u32::from(u16::MAX) {
            return false;
        }
        let idx = self.ranges.partition_point(|r| r.start <= asn);
        idx > 0 && asn <= self.ranges[idx - 1].end
    }

    /// Check an untyped attribute value
    ///
    /// Same input contract as [`BogonChecker::check`](crate::classify::BogonChecker::check).
    pub fn check(&self, value: &Value) -> Result<bool, ClassifyError> {
        Ok(self.is_unallocated(asn_from_value(value)?))
    }

    /// Number of ranges in the loaded table
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Whether the table is empty (never true for a constructed checker)
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl Default for UnallocatedChecker {
    fn default() -> Self {
        Self::bundled()
    }
}
