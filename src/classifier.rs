//! Combined classification surface for the ascheck library
//!
//! This module bundles both checkers behind one query object, offering a
//! single call that reports where an ASN stands: reserved, not yet
//! delegated, or ordinary allocated space.

use crate::classify::{asn_from_value, BogonChecker, ClassifyError, UnallocatedChecker};
use crate::config::RangeTable;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Where an ASN stands in the numbering space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AsnStatus {
    /// Reserved by convention, never valid in routing data
    Bogon,
    /// Not yet delegated by the numbering authority
    Unallocated,
    /// Ordinary delegated ASN space
    Allocated,
}

impl std::fmt::Display for AsnStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AsnStatus::Bogon => write!(f, "bogon"),
            AsnStatus::Unallocated => write!(f, "unallocated"),
            AsnStatus::Allocated => write!(f, "allocated"),
        }
    }
}

/// Container for both ASN checkers
///
/// Checkers are immutable after construction, so the classifier can be
/// shared across threads without locking.
///
/// # Examples
///
/// ```
/// use ascheck::{AsnClassifier, AsnStatus};
///
/// let classifier = AsnClassifier::new();
/// assert_eq!(classifier.classify(65535), AsnStatus::Bogon);
/// assert_eq!(classifier.classify(13335), AsnStatus::Allocated);
/// ```
#[derive(Debug, Clone)]
pub struct AsnClassifier {
    /// Reserved-range checker
    pub bogon: BogonChecker,
    /// Unallocated-range checker
    pub unallocated: UnallocatedChecker,
}

impl AsnClassifier {
    /// Create a classifier over the bundled range tables
    pub fn new() -> Self {
        Self {
            bogon: BogonChecker::new(),
            unallocated: UnallocatedChecker::bundled(),
        }
    }

    /// Create a classifier with a custom unallocated-range table
    pub fn with_table(table: RangeTable) -> Self {
        Self {
            bogon: BogonChecker::new(),
            unallocated: UnallocatedChecker::from_table(table),
        }
    }

    /// Classify an ASN
    ///
    /// Bogon takes precedence: the 32-bit private-use block is reserved,
    /// not unallocated, even though no registry has delegated it.
    pub fn classify(&self, asn: u32) -> AsnStatus {
        if self.bogon.is_bogon(asn) {
            AsnStatus::Bogon
        } else if self.unallocated.is_unallocated(asn) {
            AsnStatus::Unallocated
        } else {
            AsnStatus::Allocated
        }
    }

    /// Classify an untyped attribute value
    pub fn classify_value(&self, value: &Value) -> Result<AsnStatus, ClassifyError> {
        Ok(self.classify(asn_from_value(value)?))
    }
}

impl Default for AsnClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide classifier over the bundled tables
pub static DEFAULT_CLASSIFIER: Lazy<AsnClassifier> = Lazy::new(AsnClassifier::new);
