//! DOT identifier escaping.

use regex::Regex;
use std::sync::OnceLock;

fn bare_word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z]+$").expect("valid regex"))
}

/// Escapes a name into a DOT node id.
///
/// Purely alphabetic identifiers pass through bare; anything else (digits,
/// spaces, punctuation, empty) is emitted as a quoted string literal.
pub fn escape_id(id: &str) -> String {
    if bare_word_regex().is_match(id) {
        id.to_string()
    } else {
        quote(id)
    }
}

/// Quotes a string as a DOT string literal, backslash-escaping `"` and `\`.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_alphabetic_identifiers_pass_through() {
        assert_eq!(escape_id("Jean"), "Jean");
        assert_eq!(escape_id("A"), "A");
        assert_eq!(escape_id(escape_id("Jean").as_str()), "Jean");
    }

    #[test]
    fn non_alphabetic_identifiers_are_quoted() {
        assert_eq!(escape_id("Jean Dupont"), "\"Jean Dupont\"");
        assert_eq!(escape_id("jean2"), "\"jean2\"");
        assert_eq!(escape_id(""), "\"\"");
    }

    #[test]
    fn quoting_round_trips_special_characters() {
        let original = "a \"quoted\" \\ name";
        let quoted = quote(original);
        assert_eq!(quoted, "\"a \\\"quoted\\\" \\\\ name\"");

        // Decode: strip the outer quotes, undo the two escapes.
        let inner = &quoted[1..quoted.len() - 1];
        let decoded = inner.replace("\\\\", "\u{0}").replace("\\\"", "\"");
        assert_eq!(decoded.replace('\u{0}', "\\"), original);
    }
}
