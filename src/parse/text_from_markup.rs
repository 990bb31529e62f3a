use scraper::Html;

use super::remove_excess_whitespace;

/// Turns a raw markup snippet (as cut out of the page by a regex) into plain text.
///
/// Character entities are decoded and nested tags are dropped by running the snippet
/// through the HTML fragment parser; whitespace runs are collapsed afterwards.
pub fn text_from_markup(raw: &str) -> String {
    let fragment = Html::parse_fragment(raw);
    let text: String = fragment.root_element().text().collect();
    remove_excess_whitespace(text.trim()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_entities() {
        assert_eq!(
            text_from_markup("Schweinsbraten mit Kn&ouml;del &amp; Kraut"),
            "Schweinsbraten mit Knödel & Kraut"
        );
        assert_eq!(text_from_markup("Fisch&nbsp;&#38;&nbsp;Chips"), "Fisch\u{a0}&\u{a0}Chips");
    }

    #[test]
    fn test_drops_inner_tags() {
        assert_eq!(
            text_from_markup("<strong>Gulasch</strong><br>\n  mit Semmel"),
            "Gulasch mit Semmel"
        );
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(text_from_markup("Ruhetag"), "Ruhetag");
    }
}
