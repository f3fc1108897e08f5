//! Escaping of plain text for RTF output
//!
//! RTF reserves `\`, `{` and `}`. The document header declares the
//! Windows-1252 code page, so anything outside ASCII is written as a
//! `\uN?` Unicode escape with `?` as the fallback character.

/// Append `text` to `out`, escaped for inclusion in an RTF body
pub fn escape_into(out: &mut String, text: &str) {
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            // Line break in the form Cocoa writes it
            '\n' => out.push_str("\\\n"),
            // CRLF is one break; a lone CR is an old Mac line ending
            '\r' if chars.peek() == Some(&'\n') => {}
            '\r' => out.push_str("\\\n"),
            '\t' => out.push_str("\\tab "),
            c if c.is_ascii() => out.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    // RTF wants a signed 16-bit value
                    out.push_str(&format!("\\u{}?", *unit as i16));
                }
            }
        }
    }
}

/// Escape `text` for inclusion in an RTF body
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(&mut out, text);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ascii_unchanged() {
        assert_eq!(escape("hello, world!"), "hello, world!");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_reserved_characters() {
        assert_eq!(escape("a\\b"), "a\\\\b");
        assert_eq!(escape("{x}"), "\\{x\\}");
    }

    #[test]
    fn test_whitespace_controls() {
        assert_eq!(escape("a\nb"), "a\\\nb");
        assert_eq!(escape("a\r\nb"), "a\\\nb");
        assert_eq!(escape("a\tb"), "a\\tab b");
    }

    #[test]
    fn test_lone_carriage_return_is_a_break() {
        assert_eq!(escape("a\rb"), "a\\\nb");
        assert_eq!(escape("a\r\rb"), "a\\\n\\\nb");
        assert_eq!(escape("a\r\r\nb"), "a\\\n\\\nb");
        assert_eq!(escape("end\r"), "end\\\n");
    }

    #[test]
    fn test_unicode_escapes() {
        assert_eq!(escape("caf\u{e9}"), "caf\\u233?");
        // U+2014 EM DASH is 8212, still positive as i16
        assert_eq!(escape("\u{2014}"), "\\u8212?");
        // U+FFFD is above i16::MAX
        assert_eq!(escape("\u{fffd}"), "\\u-3?");
        // Astral characters become a surrogate pair
        assert_eq!(escape("\u{1f600}"), "\\u-10179?\\u-8704?");
    }
}
