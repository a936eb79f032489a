//! The `Date` value type: text form, `Display`, and serde hooks.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::display::OptionalDate;
use crate::error::DateError;
use crate::layout::{parse_layout, LAYOUT};

/// A calendar date carried as an instant-in-time.
///
/// The wrapped instant keeps whatever time-of-day and offset it was built
/// with, but every representation emits only the calendar date in that
/// offset, as `YYYY-MM-DD`. Dates produced by parsing sit at midnight UTC.
///
/// Equality, ordering and hashing follow the wrapped instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(DateTime<FixedOffset>);

impl Date {
  /// Wrap an instant in any time zone.
  pub fn new<Tz: TimeZone>(instant: DateTime<Tz>) -> Self {
    Self(instant.fixed_offset())
  }

  /// Midnight UTC on the given calendar day, if it exists.
  pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
    NaiveDate::from_ymd_opt(year, month, day).map(Self::from)
  }

  pub fn instant(&self) -> DateTime<FixedOffset> {
    self.0
  }

  /// Calendar date in the instant's own offset.
  pub fn naive_date(&self) -> NaiveDate {
    self.0.date_naive()
  }

  /// Render as `YYYY-MM-DD`.
  pub fn format(&self) -> String {
    self.0.format(LAYOUT).to_string()
  }

  pub fn to_text(&self) -> Vec<u8> {
    self.format().into_bytes()
  }

  /// Parse UTF-8 bytes strictly as `YYYY-MM-DD`, anchored to midnight UTC.
  pub fn parse_text(bytes: &[u8]) -> Result<Self, DateError> {
    let s = std::str::from_utf8(bytes)
      .map_err(|_| DateError::mismatch(String::from_utf8_lossy(bytes)))?;
    s.parse()
  }

  /// Borrowed view that prints `<nil>` when `date` is absent.
  pub fn display_opt(date: Option<&Date>) -> OptionalDate<'_> {
    OptionalDate::from(date)
  }
}

impl From<NaiveDate> for Date {
  fn from(date: NaiveDate) -> Self {
    Self(date.and_time(NaiveTime::MIN).and_utc().fixed_offset())
  }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Date {
  fn from(instant: DateTime<Tz>) -> Self {
    Self::new(instant)
  }
}

impl From<Date> for DateTime<FixedOffset> {
  fn from(date: Date) -> Self {
    date.0
  }
}

impl FromStr for Date {
  type Err = DateError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    parse_layout(s)
      .map(Self::from)
      .ok_or_else(|| DateError::mismatch(s))
  }
}

impl TryFrom<&str> for Date {
  type Error = DateError;

  fn try_from(s: &str) -> Result<Self, Self::Error> {
    s.parse()
  }
}

impl fmt::Display for Date {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad(&self.format())
  }
}

// ---------------------------------------------------------------------------
// serde hooks (JSON and XML documents both go through these)
// ---------------------------------------------------------------------------

impl Serialize for Date {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(&self.format())
  }
}

impl<'de> Deserialize<'de> for Date {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    deserializer.deserialize_str(DateVisitor)
  }
}

struct DateVisitor;

impl<'de> Visitor<'de> for DateVisitor {
  type Value = Date;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("a date string in YYYY-MM-DD layout")
  }

  fn visit_str<E>(self, v: &str) -> Result<Date, E>
  where
    E: de::Error,
  {
    v.parse().map_err(E::custom)
  }

  fn visit_bytes<E>(self, v: &[u8]) -> Result<Date, E>
  where
    E: de::Error,
  {
    Date::parse_text(v).map_err(E::custom)
  }
}
