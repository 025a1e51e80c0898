//! Inbound create payload.

use serde_json::{Map, Value};

/// Loosely typed create payload.
///
/// Kept as a raw JSON object so that any extra keys the caller sends are
/// forwarded upstream untouched.
pub type CreateEmployeeInput = Map<String, Value>;

/// Keys a create payload must carry with a non-null value.
pub const REQUIRED_CREATE_FIELDS: [&str; 3] = ["name", "salary", "age"];

/// First required key that is absent or `null`, in declaration order.
pub fn first_missing_field(input: &CreateEmployeeInput) -> Option<&'static str> {
    REQUIRED_CREATE_FIELDS
        .into_iter()
        .find(|field| input.get(*field).is_none_or(Value::is_null))
}
