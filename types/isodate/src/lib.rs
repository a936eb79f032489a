//! isodate: a calendar-date value type with one fixed textual layout.
//!
//! `Date` wraps an instant-in-time and renders it as `YYYY-MM-DD` in every
//! representation: plain text, JSON (via serde) and XML (via quick-xml).
//! Time-of-day and offset are accepted on input but never emitted.
//!
//! No I/O, no logging, no global state; every operation is a pure function.

pub mod date;
pub mod display;
pub mod error;
pub mod json;
pub mod layout;
pub mod xml;

pub use date::Date;
pub use display::{DisplayOptional, OptionalDate, NIL_DISPLAY};
pub use error::DateError;
pub use layout::{LAYOUT, LAYOUT_LEN};
