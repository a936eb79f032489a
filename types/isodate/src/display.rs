//! Display for dates that may be absent.

use std::fmt;

use crate::date::Date;

/// Printed in place of an absent date.
pub const NIL_DISPLAY: &str = "<nil>";

/// Borrowed view over an optional date. Prints the date when present and
/// `<nil>` otherwise, so log and report code never has to match first.
#[derive(Debug, Clone, Copy)]
pub struct OptionalDate<'a>(Option<&'a Date>);

impl<'a> OptionalDate<'a> {
  pub fn get(&self) -> Option<&'a Date> {
    self.0
  }

  pub fn to_display_string(&self) -> String {
    self.to_string()
  }
}

impl<'a> From<Option<&'a Date>> for OptionalDate<'a> {
  fn from(date: Option<&'a Date>) -> Self {
    Self(date)
  }
}

impl<'a> From<&'a Date> for OptionalDate<'a> {
  fn from(date: &'a Date) -> Self {
    Self(Some(date))
  }
}

impl fmt::Display for OptionalDate<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.0 {
      Some(date) => fmt::Display::fmt(date, f),
      None => f.pad(NIL_DISPLAY),
    }
  }
}

/// `.display()` on optional dates.
pub trait DisplayOptional {
  fn display(&self) -> OptionalDate<'_>;
}

impl DisplayOptional for Option<Date> {
  fn display(&self) -> OptionalDate<'_> {
    OptionalDate(self.as_ref())
  }
}

impl DisplayOptional for Option<&Date> {
  fn display(&self) -> OptionalDate<'_> {
    OptionalDate(*self)
  }
}
