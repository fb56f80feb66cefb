/// Replaces the HTML metacharacters `&`, `<`, `>`, `"` and `'` with their
/// entity representations.
///
/// The ampersand is rewritten first, so the output of a previous escape is not
/// a fixed point: escaping `&lt;` yields `&amp;lt;`.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn escapes_quotes() {
        assert_eq!(
            escape_html(r#"Er sagte "Hallo" und 'Tschüss'"#),
            "Er sagte &quot;Hallo&quot; und &#x27;Tschüss&#x27;"
        );
    }

    #[test]
    fn escapes_ampersand_first() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
        assert_eq!(escape_html("Fish & Chips"), "Fish &amp; Chips");
    }

    #[test]
    fn double_escape_is_not_idempotent() {
        assert_eq!(escape_html(&escape_html("<")), "&amp;lt;");
    }

    #[test]
    fn passes_through_plain_text() {
        assert_eq!(escape_html("Nürnberg Renegades"), "Nürnberg Renegades");
        assert_eq!(escape_html(""), "");
    }
}
