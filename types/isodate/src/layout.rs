//! The single textual layout shared by every encode/decode path.

use chrono::NaiveDate;

/// chrono format string for `YYYY-MM-DD`.
pub const LAYOUT: &str = "%Y-%m-%d";

/// Exact byte length of a formatted date.
pub const LAYOUT_LEN: usize = 10;

/// Strictly match `s` against the layout and resolve it to a calendar day.
///
/// chrono's `%Y`/`%m`/`%d` accept signs and unpadded fields, so the shape is
/// checked byte by byte before handing the string to chrono for calendar
/// validation (month range, days in month, leap years).
pub fn parse_layout(s: &str) -> Option<NaiveDate> {
  let bytes = s.as_bytes();
  if bytes.len() != LAYOUT_LEN {
    return None;
  }

  let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
    4 | 7 => *b == b'-',
    _ => b.is_ascii_digit(),
  });
  if !shape_ok {
    return None;
  }

  NaiveDate::parse_from_str(s, LAYOUT).ok()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_padded_date() {
    assert_eq!(
      parse_layout("2019-04-01"),
      NaiveDate::from_ymd_opt(2019, 4, 1)
    );
  }

  #[test]
  fn rejects_shape_violations() {
    for input in [
      "2019-4-1",
      "2019-04-1",
      "04/01/2019",
      "2019/04/01",
      "not-a-date",
      "",
      "+2019-04-01",
      "2019-04-01 ",
      "2019-04-01T00:00:00Z",
      "20190401",
      "2019-0a-01",
      "-019-04-01",
    ] {
      assert!(parse_layout(input).is_none(), "accepted {:?}", input);
    }
  }

  #[test]
  fn rejects_days_not_on_calendar() {
    assert!(parse_layout("2019-02-29").is_none());
    assert!(parse_layout("2019-13-01").is_none());
    assert!(parse_layout("2019-00-10").is_none());
    assert!(parse_layout("2019-04-31").is_none());
    assert!(parse_layout("2020-02-29").is_some());
  }
}
