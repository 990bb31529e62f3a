use std::borrow::Cow;

use super::lazy_regex::lazy_regex;

/// Collapses every run of whitespace (including line breaks inside a table cell)
/// into a single space.
pub fn remove_excess_whitespace(s: &str) -> Cow<'_, str> {
    lazy_regex! {
        RUNS = r"\s\s+|[\t\r\n]";
    }
    RUNS.replace_all(s, " ")
}
