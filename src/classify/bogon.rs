//! Bogon ASN classification
//!
//! A bogon ASN is one reserved by IANA convention (documentation, private
//! use, AS_TRANS, the zero and last ASNs) that should never appear in
//! legitimate routing data.

use crate::classify::{asn_from_value, ClassifyError};
use serde_json::Value;

/// Reserved ASN ranges, inclusive on both ends, sorted and disjoint
const BOGON_RANGES: &[(u32, u32)] = &[
    (0, 0),                       // AS0 (RFC 7607)
    (23_456, 23_456),             // AS_TRANS (RFC 6793)
    (64_496, 64_511),             // documentation and sample code (RFC 5398)
    (64_512, 65_534),             // private use (RFC 6996)
    (65_535, 65_535),             // last 16-bit ASN (RFC 7300)
    (65_536, 65_551),             // documentation and sample code (RFC 5398)
    (65_552, 131_071),            // IANA reserved
    (4_200_000_000, 4_294_967_294), // private use (RFC 6996)
    (4_294_967_295, 4_294_967_295), // last 32-bit ASN (RFC 7300)
];

/// Classifies ASNs against the reserved ("bogon") ranges
///
/// The range table is compiled in and immutable; the checker is a cheap,
/// reusable query object safe to share across threads.
#[derive(Debug, Clone)]
pub struct BogonChecker {
    ranges: &'static [(u32, u32)],
}

impl BogonChecker {
    /// Create a checker over the built-in reserved-range table
    pub fn new() -> Self {
        Self {
            ranges: BOGON_RANGES,
        }
    }

    /// Check whether an ASN falls in a reserved range
    pub fn is_bogon(&self, asn: u32) -> bool {
        let idx = self.ranges.partition_point(|&(start, _)| start <= asn);
        idx > 0 && asn <= self.ranges[idx - 1].1
    }

    /// Check an untyped attribute value
    ///
    /// Fails fast on absent or non-integer input; see
    /// [`asn_from_value`](crate::classify::asn_from_value) for the error
    /// taxonomy.
    pub fn check(&self, value: &Value) -> Result<bool, ClassifyError> {
        Ok(self.is_bogon(asn_from_value(value)?))
    }
}

impl Default for BogonChecker {
    fn default() -> Self {
        Self::new()
    }
}
