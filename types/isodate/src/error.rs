//! Structured error types for date encoding and decoding.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DateError {
  #[error("format mismatch: {input:?} is not a YYYY-MM-DD date")]
  FormatMismatch { input: String },

  #[error("invalid XML tag name: {tag:?}")]
  InvalidTag { tag: String },

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),

  #[error("xml: {0}")]
  Xml(#[from] quick_xml::Error),

  #[error("utf-8: {0}")]
  Utf8(#[from] std::string::FromUtf8Error),

  #[error("io: {0}")]
  Io(#[from] std::io::Error),
}

impl DateError {
  pub fn mismatch(input: impl Into<String>) -> Self {
    Self::FormatMismatch {
      input: input.into(),
    }
  }

  pub fn invalid_tag(tag: impl Into<String>) -> Self {
    Self::InvalidTag { tag: tag.into() }
  }

  /// True for input that failed the layout check, as opposed to a codec or
  /// sink failure.
  pub fn is_format_mismatch(&self) -> bool {
    matches!(self, Self::FormatMismatch { .. })
  }
}
