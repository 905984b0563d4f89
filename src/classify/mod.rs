//! ASN validity classification: bogon and unallocated-range checks

pub mod bogon;
pub mod error;
pub mod unallocated;
pub mod value;

pub use bogon::BogonChecker;
pub use error::ClassifyError;
pub use unallocated::UnallocatedChecker;
pub use value::asn_from_value;
