use chrono::Weekday;

use super::{
    lazy_regex::{lazy_regex, LazyRegex},
    text_from_markup, Error, Result,
};

/// If this string is found anywhere on the page (any case), the kitchen is on holiday.
pub const HOLIDAY_MARKER: &str = "urlaub";

/// Cell text on days the kitchen serves nothing.
pub const REST_DAY_MARKER: &str = "Ruhetag";

/// Everything from a row's opening tag up to whatever closes it first, so a
/// lookup never runs on into the next row.
macro_rules! row_block {
    ($token: literal) => {
        LazyRegex::new(concat!(
            r#"(?s)<tr class="tr-even tr-"#,
            $token,
            r#"">(.*?)(?:</tr>|<tr[\s>]|</table>|\z)"#
        ))
    };
}

/// Row class suffix and row pattern per weekday, Monday first.
///
/// Rows are numbered `(ordinal - 1) * 2`, except Friday which sits in the row
/// marked `last` instead of `8`.
static ROWS: [(&str, LazyRegex); 5] = [
    ("0", row_block!("0")),
    ("2", row_block!("2")),
    ("4", row_block!("4")),
    ("6", row_block!("6")),
    ("last", row_block!("last")),
];

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum DailyMenu {
    Dish(String),
    /// Open, but nothing is cooked today.
    Resting,
}

/// Row token for `day`, `None` on weekends.
#[must_use]
pub fn row_token(day: Weekday) -> Option<&'static str> {
    ROWS.get(day.num_days_from_monday() as usize)
        .map(|(token, _)| *token)
}

#[must_use]
pub fn is_holiday(body: &str) -> bool {
    body.to_lowercase().contains(HOLIDAY_MARKER)
}

/// Pulls the dish for `day` out of the menu table.
pub fn extract_menu(body: &str, day: Weekday) -> Result<DailyMenu> {
    lazy_regex! {
        DISH_CELL = r#"(?s)<td class="td-2">(.*?)</td>"#;
    }
    let Some((token, row)) = ROWS.get(day.num_days_from_monday() as usize) else {
        return Err(Error::row_not_found(&day.to_string()));
    };
    let cell = row
        .captures(body)
        .and_then(|captures| captures.get(1))
        .and_then(|block| DISH_CELL.captures(block.as_str()))
        .and_then(|captures| captures.get(1))
        .ok_or_else(|| Error::row_not_found(token))?;

    let text = text_from_markup(cell.as_str());
    log::debug!("row tr-{token} holds {text:?}");
    if text == REST_DAY_MARKER {
        return Ok(DailyMenu::Resting);
    }
    Ok(DailyMenu::Dish(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(rows: &[(&str, &str)]) -> String {
        let mut body = String::from("<h2>03.06.2024 bis 07.06.2024</h2>\n<table>\n");
        for (token, dish) in rows {
            body.push_str(&format!(
                "<tr class=\"tr-even tr-{token}\">\n  <td class=\"td-1\">Tag</td>\n  <td class=\"td-2\">{dish}</td>\n</tr>\n"
            ));
        }
        body.push_str("</table>");
        body
    }

    fn week() -> String {
        page(&[
            ("0", "Gulasch"),
            ("2", "Schnitzel"),
            ("4", "Ruhetag"),
            ("6", "Kn&ouml;del\n  mit Ei"),
            ("last", "Fisch &amp; Chips"),
        ])
    }

    #[test]
    fn test_row_tokens() {
        assert_eq!(row_token(Weekday::Mon), Some("0"));
        assert_eq!(row_token(Weekday::Tue), Some("2"));
        assert_eq!(row_token(Weekday::Wed), Some("4"));
        assert_eq!(row_token(Weekday::Thu), Some("6"));
        assert_eq!(row_token(Weekday::Fri), Some("last"));
        assert_eq!(row_token(Weekday::Sat), None);
        assert_eq!(row_token(Weekday::Sun), None);
    }

    #[test]
    fn test_extract_each_weekday() {
        let body = week();
        assert_eq!(
            extract_menu(&body, Weekday::Mon),
            Ok(DailyMenu::Dish("Gulasch".to_string()))
        );
        assert_eq!(
            extract_menu(&body, Weekday::Tue),
            Ok(DailyMenu::Dish("Schnitzel".to_string()))
        );
        assert_eq!(extract_menu(&body, Weekday::Wed), Ok(DailyMenu::Resting));
        assert_eq!(
            extract_menu(&body, Weekday::Thu),
            Ok(DailyMenu::Dish("Knödel mit Ei".to_string()))
        );
        assert_eq!(
            extract_menu(&body, Weekday::Fri),
            Ok(DailyMenu::Dish("Fisch & Chips".to_string()))
        );
    }

    #[test]
    fn test_friday_ignores_row_eight() {
        let body = page(&[("8", "Falsch"), ("last", "Richtig")]);
        assert_eq!(
            extract_menu(&body, Weekday::Fri),
            Ok(DailyMenu::Dish("Richtig".to_string()))
        );
    }

    #[test]
    fn test_missing_row() {
        let body = page(&[("0", "Gulasch")]);
        assert_eq!(
            extract_menu(&body, Weekday::Tue),
            Err(Error::row_not_found("2"))
        );
    }

    #[test]
    fn test_empty_cell_stays_empty() {
        let body = page(&[("0", ""), ("2", "Schnitzel")]);
        assert_eq!(
            extract_menu(&body, Weekday::Mon),
            Ok(DailyMenu::Dish(String::new()))
        );
    }

    #[test]
    fn test_row_without_dish_cell_is_missing() {
        let body = "<table>\n<tr class=\"tr-even tr-0\">\n  <td class=\"td-1\">Montag</td>\n</tr>\n\
            <tr class=\"tr-even tr-2\">\n  <td class=\"td-2\">Schnitzel</td>\n</tr>\n</table>";
        assert_eq!(
            extract_menu(body, Weekday::Mon),
            Err(Error::row_not_found("0"))
        );
    }

    #[test]
    fn test_unclosed_row_ends_at_next_row() {
        let body = "<table><tr class=\"tr-even tr-4\"><td class=\"td-1\">Mittwoch\n\
            <tr class=\"tr-even tr-6\"><td class=\"td-2\">Schnitzel</td></tr></table>";
        assert_eq!(
            extract_menu(body, Weekday::Wed),
            Err(Error::row_not_found("4"))
        );
    }

    #[test]
    fn test_weekend_has_no_row() {
        assert!(matches!(
            extract_menu(&week(), Weekday::Sat),
            Err(Error::RowNotFound(_))
        ));
    }

    #[test]
    fn test_holiday_marker_any_case() {
        assert!(is_holiday("<p>Wir sind auf URLAUB bis 12.08.</p>"));
        assert!(is_holiday("Betriebsurlaub"));
        assert!(!is_holiday(&week()));
    }
}
