use chrono::{NaiveDate, NaiveDateTime};

use super::{lazy_regex::lazy_regex, Error, Result};

/// Layout of dates on the menu page.
const DATE_LAYOUT: &str = "%d.%m.%Y";

/// Parses a strict `DD.MM.YYYY` date into local midnight of that day.
pub fn parse_date(raw: &str) -> Result<NaiveDateTime> {
    // chrono alone would accept single-digit fields and padding
    lazy_regex! {
        SHAPE = r"^\d{2}\.\d{2}\.\d{4}$";
    }
    if !SHAPE.is_match(raw) {
        return Err(Error::malformed_date(raw));
    }
    NaiveDate::parse_from_str(raw, DATE_LAYOUT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| Error::malformed_date(raw))
}
