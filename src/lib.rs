//! ascheck - ASN validity classification
//!
//! This library classifies ASN (Autonomous System Number) values as bogon
//! (reserved by convention), unallocated (not yet delegated by the
//! numbering authority), or ordinary allocated space.

pub mod classifier;
pub mod classify;
pub mod config;

// Re-export core types for library users
pub use classifier::{AsnClassifier, AsnStatus, DEFAULT_CLASSIFIER};
pub use classify::{asn_from_value, BogonChecker, ClassifyError, UnallocatedChecker};
pub use config::{AsnRange, ConfigError, RangeTable};
