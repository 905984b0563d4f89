//! Error types for classification queries

use thiserror::Error;

/// Errors reported by the loose-input classification entry points
///
/// The typed `is_bogon`/`is_unallocated` paths cannot fail; these errors
/// only arise when a caller hands over untyped attribute data via `check`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// The ASN value was absent (JSON null)
    #[error("missing ASN value")]
    MissingAsn,

    /// The value was present but not an integer
    #[error("expected an integer ASN, found {found}")]
    NotAnInteger {
        /// JSON type of the offending value (e.g., "string")
        found: &'static str,
    },

    /// The value was an integer outside the 32-bit ASN domain
    #[error("ASN {0} is outside the 32-bit range")]
    OutOfRange(i128),
}
