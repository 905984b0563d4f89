//! Extraction of ASN values from untyped attribute data
//!
//! Callers that process routing data often hold attribute values as
//! `serde_json::Value` rather than typed integers. This module maps such a
//! value onto the 32-bit ASN domain, reporting absence and type mismatches
//! as distinct error kinds.

use crate::classify::ClassifyError;
use serde_json::Value;

/// Extract a 32-bit ASN from an untyped JSON value
///
/// Null fails with [`ClassifyError::MissingAsn`], non-integer values fail
/// with [`ClassifyError::NotAnInteger`], and integers outside
/// `0..=4294967295` fail with [`ClassifyError::OutOfRange`].
pub fn asn_from_value(value: &Value) -> Result<u32, ClassifyError> {
    match value {
        Value::Null => Err(ClassifyError::MissingAsn),
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u32::try_from(u).map_err(|_| ClassifyError::OutOfRange(i128::from(u)))
            } else if let Some(i) = n.as_i64() {
                // as_u64 already failed, so this is negative
                Err(ClassifyError::OutOfRange(i128::from(i)))
            } else {
                Err(ClassifyError::NotAnInteger { found: "float" })
            }
        }
        other => Err(ClassifyError::NotAnInteger {
            found: json_type_name(other),
        }),
    }
}

/// Human-readable JSON type name for error messages
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
