use chrono::{Days, NaiveDateTime};

use super::{date::parse_date, lazy_regex::lazy_regex, Error, Result};

/// Where `now` falls relative to a [`ValidityWindow`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WindowStatus {
    Current,
    /// `now` is strictly after the end of the last valid day.
    Expired,
    /// `now` is strictly before the first valid day. Pages go up early, so this is only a warning.
    NotYetValid,
}

/// The date range a menu page claims to be valid for.
///
/// `to` is stored as midnight *after* the last valid day, so the final day counts in full.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ValidityWindow {
    from: NaiveDateTime,
    to: NaiveDateTime,
}

impl ValidityWindow {
    /// Finds the `<h2>DD.MM.YYYY bis DD.MM.YYYY</h2>` header and parses both ends.
    pub fn from_markup(body: &str) -> Result<Self> {
        lazy_regex! {
            HEADER = r"<h2>(?P<from>\d{2}\.\d{2}\.\d{4}) bis (?P<to>\d{2}\.\d{2}\.\d{4})</h2>";
        }
        let captures = HEADER
            .captures(body)
            .ok_or_else(|| Error::validity_unavailable("no validity header on the page"))?;
        let (Some(from), Some(to)) = (captures.name("from"), captures.name("to")) else {
            return Err(Error::validity_unavailable("validity header is incomplete"));
        };
        let from = parse_date(from.as_str())
            .map_err(|e| Error::validity_unavailable(&e.to_string()))?;
        let to = parse_date(to.as_str())
            .map_err(|e| Error::validity_unavailable(&e.to_string()))?
            .checked_add_days(Days::new(1))
            .ok_or_else(|| Error::validity_unavailable("end date out of range"))?;
        Ok(Self { from, to })
    }

    #[inline]
    #[must_use]
    pub const fn valid_from(&self) -> NaiveDateTime {
        self.from
    }

    /// Exclusive end: midnight following the last valid day.
    #[inline]
    #[must_use]
    pub const fn valid_until(&self) -> NaiveDateTime {
        self.to
    }

    #[must_use]
    pub fn status(&self, now: NaiveDateTime) -> WindowStatus {
        if now > self.to {
            WindowStatus::Expired
        } else if now < self.from {
            WindowStatus::NotYetValid
        } else {
            WindowStatus::Current
        }
    }
}
