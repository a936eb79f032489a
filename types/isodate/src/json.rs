//! JSON encode/decode for a standalone `Date` value.
//!
//! Struct fields typed `Date` go through the serde impls in `date.rs`; these
//! helpers cover a bare JSON string and report layout failures as
//! `FormatMismatch` rather than an opaque codec error.

use serde_json::Value;

use crate::date::Date;
use crate::error::DateError;

impl Date {
  /// JSON string literal, quotes included: `"YYYY-MM-DD"`.
  pub fn encode_json(&self) -> Result<Vec<u8>, DateError> {
    Ok(serde_json::to_vec(self)?)
  }

  /// Decode a JSON string literal. Any other JSON value is a mismatch;
  /// malformed JSON surfaces as `DateError::Json`.
  pub fn decode_json(bytes: &[u8]) -> Result<Self, DateError> {
    match serde_json::from_slice::<Value>(bytes)? {
      Value::String(s) => s.parse(),
      other => Err(DateError::mismatch(other.to_string())),
    }
  }
}
