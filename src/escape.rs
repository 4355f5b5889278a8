// SPDX-License-Identifier: MPL-2.0
//! HTML escaping for result markup built with `format!`.
//!
//! Search results arrive as plain text from the server and are spliced
//! into HTML by the hosting page; every such splice goes through
//! [`escape_html`] first.

/// Escapes the five HTML-significant characters (`& < > " '`) as named
/// entities, in a single left-to-right pass over the input.
///
/// Substituted text is never re-scanned, so escaping an already-escaped
/// string double-encodes its ampersands. Callers escape exactly once, at
/// the splice point.
pub fn escape_html(unsafe_text: &str) -> String {
    let mut out = String::with_capacity(unsafe_text.len());
    for ch in unsafe_text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_stays_empty() {
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape_html("Les Misérables"), "Les Misérables");
    }

    #[test]
    fn script_tag_is_neutralized() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
    }

    #[test]
    fn all_five_characters_are_escaped() {
        assert_eq!(
            escape_html(r#"&<>"'"#),
            "&amp;&lt;&gt;&quot;&#039;"
        );
    }

    #[test]
    fn ampersand_first_in_mixed_input() {
        assert_eq!(
            escape_html(r#"Tom & Jerry's "best" <episodes>"#),
            "Tom &amp; Jerry&#039;s &quot;best&quot; &lt;episodes&gt;"
        );
    }

    #[test]
    fn output_contains_no_literal_angle_brackets() {
        let escaped = escape_html("<a href=\"x\">R&D</a>");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('"'));
    }

    #[test]
    fn not_idempotent_by_design() {
        let once = escape_html("<b>");
        let twice = escape_html(&once);
        assert_eq!(once, "&lt;b&gt;");
        assert_eq!(twice, "&amp;lt;b&amp;gt;");
    }
}
