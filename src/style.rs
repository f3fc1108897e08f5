//! Style types for rich text output
//!
//! This module provides the style flags tracked by a document, the
//! per-append style requests, and the compact style-code syntax
//! (`"BIU"`, `"b"`, ...) used to build them.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RtfError};

/// One of the three independent text attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleFlag {
    Bold,
    Italic,
    Underline,
}

impl StyleFlag {
    /// All flags in the order they are applied and restored
    pub const ALL: [StyleFlag; 3] = [StyleFlag::Bold, StyleFlag::Italic, StyleFlag::Underline];

    /// Control word that turns this flag on
    pub fn on_token(self) -> &'static str {
        match self {
            StyleFlag::Bold => "\\b ",
            StyleFlag::Italic => "\\i ",
            StyleFlag::Underline => "\\ul ",
        }
    }

    /// Control word that turns this flag off
    pub fn off_token(self) -> &'static str {
        match self {
            StyleFlag::Bold => "\\b0 ",
            StyleFlag::Italic => "\\i0 ",
            StyleFlag::Underline => "\\ulnone ",
        }
    }

    /// Token for a transition to `on`
    pub fn token(self, on: bool) -> &'static str {
        if on {
            self.on_token()
        } else {
            self.off_token()
        }
    }

    /// Letter used in style codes (lowercase form)
    pub fn code_letter(self) -> char {
        match self {
            StyleFlag::Bold => 'b',
            StyleFlag::Italic => 'i',
            StyleFlag::Underline => 'u',
        }
    }

    fn from_code_letter(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'b' => Some(StyleFlag::Bold),
            'i' => Some(StyleFlag::Italic),
            'u' => Some(StyleFlag::Underline),
            _ => None,
        }
    }
}

impl fmt::Display for StyleFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StyleFlag::Bold => "bold",
            StyleFlag::Italic => "italic",
            StyleFlag::Underline => "underline",
        };
        f.write_str(name)
    }
}

/// Active style flags of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleState {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl StyleState {
    /// Create a state from the three flags
    pub fn new(bold: bool, italic: bool, underline: bool) -> Self {
        Self {
            bold,
            italic,
            underline,
        }
    }

    /// Get a single flag
    pub fn get(&self, flag: StyleFlag) -> bool {
        match flag {
            StyleFlag::Bold => self.bold,
            StyleFlag::Italic => self.italic,
            StyleFlag::Underline => self.underline,
        }
    }

    /// Set a single flag
    pub fn set(&mut self, flag: StyleFlag, on: bool) {
        match flag {
            StyleFlag::Bold => self.bold = on,
            StyleFlag::Italic => self.italic = on,
            StyleFlag::Underline => self.underline = on,
        }
    }

    /// Check if no flag is active
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    /// Every one of the eight flag combinations
    pub fn all() -> impl Iterator<Item = StyleState> {
        (0u8..8).map(|bits| StyleState::new(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0))
    }

    /// Fold the style control words found in `markup` into a state,
    /// starting from all flags off.
    pub fn replay(markup: &str) -> Self {
        let mut state = Self::default();
        for (flag, on) in style_tokens(markup) {
            state.set(flag, on);
        }
        state
    }
}

/// Extract the style transitions encoded in a markup string, in order.
///
/// Only the bold, italic and underline control words are reported;
/// escaped characters and every other control word are skipped.
pub fn style_tokens(markup: &str) -> Vec<(StyleFlag, bool)> {
    let mut tokens = Vec::new();
    let bytes = markup.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] != b'\\' {
            pos += 1;
            continue;
        }
        pos += 1;
        if pos >= bytes.len() {
            break;
        }
        if !bytes[pos].is_ascii_alphabetic() {
            // Control symbol such as \\ \{ \} or an escaped newline
            pos += 1;
            continue;
        }

        let word_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }
        let word = &markup[word_start..pos];

        let param_start = pos;
        if pos < bytes.len() && bytes[pos] == b'-' {
            pos += 1;
        }
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        let param = &markup[param_start..pos];

        let transition = match word {
            "b" => Some((StyleFlag::Bold, param != "0")),
            "i" => Some((StyleFlag::Italic, param != "0")),
            "ul" => Some((StyleFlag::Underline, param != "0")),
            "ulnone" => Some((StyleFlag::Underline, false)),
            _ => None,
        };
        if let Some(t) = transition {
            tokens.push(t);
        }

        if pos < bytes.len() && bytes[pos] == b' ' {
            pos += 1;
        }
    }

    tokens
}

/// Requested style changes for a single append
///
/// `None` leaves the flag as it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleRequest {
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
}

impl StyleRequest {
    /// Create an empty request (no changes)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: request bold on or off
    pub fn with_bold(mut self, on: bool) -> Self {
        self.bold = Some(on);
        self
    }

    /// Builder: request italic on or off
    pub fn with_italic(mut self, on: bool) -> Self {
        self.italic = Some(on);
        self
    }

    /// Builder: request underline on or off
    pub fn with_underline(mut self, on: bool) -> Self {
        self.underline = Some(on);
        self
    }

    /// Get the requested value for a flag
    pub fn get(&self, flag: StyleFlag) -> Option<bool> {
        match flag {
            StyleFlag::Bold => self.bold,
            StyleFlag::Italic => self.italic,
            StyleFlag::Underline => self.underline,
        }
    }

    fn slot(&mut self, flag: StyleFlag) -> &mut Option<bool> {
        match flag {
            StyleFlag::Bold => &mut self.bold,
            StyleFlag::Italic => &mut self.italic,
            StyleFlag::Underline => &mut self.underline,
        }
    }

    /// Check if the request changes nothing
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Requested changes in application order
    pub fn changes(&self) -> impl Iterator<Item = (StyleFlag, bool)> + '_ {
        StyleFlag::ALL
            .into_iter()
            .filter_map(move |flag| self.get(flag).map(|on| (flag, on)))
    }

    /// Every request over the three flags (3^3 = 27 of them)
    pub fn all() -> impl Iterator<Item = StyleRequest> {
        const VALUES: [Option<bool>; 3] = [None, Some(false), Some(true)];
        (0..27).map(|n| StyleRequest {
            bold: VALUES[n % 3],
            italic: VALUES[(n / 3) % 3],
            underline: VALUES[n / 9],
        })
    }

    /// Parse a style code
    ///
    /// `B`, `I`, `U` turn a flag on, `b`, `i`, `u` turn it off, and a flag
    /// whose letter is absent is left unchanged. Other characters are
    /// ignored. Using both cases of the same letter is an error.
    pub fn parse_code(code: &str) -> Result<Self> {
        let mut request = Self::default();

        for c in code.chars() {
            let Some(flag) = StyleFlag::from_code_letter(c) else {
                continue;
            };
            let on = c.is_ascii_uppercase();
            let slot = request.slot(flag);
            if slot.is_some_and(|prev| prev != on) {
                return Err(RtfError::ConflictingStyleCode {
                    flag,
                    code: code.to_string(),
                });
            }
            *slot = Some(on);
        }

        Ok(request)
    }
}

impl FromStr for StyleRequest {
    type Err = RtfError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_code(s)
    }
}

impl fmt::Display for StyleRequest {
    /// Formats the request back into its style code
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, on) in self.changes() {
            let letter = flag.code_letter();
            if on {
                write!(f, "{}", letter.to_ascii_uppercase())?;
            } else {
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_default_is_plain() {
        let state = StyleState::default();
        assert!(state.is_plain());
        assert!(!state.get(StyleFlag::Bold));
        assert!(!state.get(StyleFlag::Italic));
        assert!(!state.get(StyleFlag::Underline));
    }

    #[test]
    fn test_state_all_combinations() {
        let states: Vec<_> = StyleState::all().collect();
        assert_eq!(states.len(), 8);
        for (i, a) in states.iter().enumerate() {
            for b in &states[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_parse_code_upper_lower() {
        let req = StyleRequest::parse_code("BIU").unwrap();
        assert_eq!(req, StyleRequest::new().with_bold(true).with_italic(true).with_underline(true));

        let req = StyleRequest::parse_code("b").unwrap();
        assert_eq!(req.bold, Some(false));
        assert_eq!(req.italic, None);
        assert_eq!(req.underline, None);

        let req = StyleRequest::parse_code("uI").unwrap();
        assert_eq!(req.bold, None);
        assert_eq!(req.italic, Some(true));
        assert_eq!(req.underline, Some(false));
    }

    #[test]
    fn test_parse_code_ignores_other_characters() {
        let req = StyleRequest::parse_code(" B-x9 ").unwrap();
        assert_eq!(req, StyleRequest::new().with_bold(true));
        assert!(StyleRequest::parse_code("").unwrap().is_empty());
        assert!(StyleRequest::parse_code("xyz").unwrap().is_empty());
    }

    #[test]
    fn test_parse_code_repeated_letter_ok() {
        let req = StyleRequest::parse_code("BB").unwrap();
        assert_eq!(req, StyleRequest::new().with_bold(true));
    }

    #[test]
    fn test_parse_code_conflict_is_error() {
        match StyleRequest::parse_code("Bib") {
            Err(RtfError::ConflictingStyleCode { flag, code }) => {
                assert_eq!(flag, StyleFlag::Bold);
                assert_eq!(code, "Bib");
            }
            other => panic!("expected conflict, got {:?}", other),
        }
        assert!("uU".parse::<StyleRequest>().is_err());
    }

    #[test]
    fn test_request_display() {
        let req = StyleRequest::new().with_underline(false).with_bold(true);
        assert_eq!(req.to_string(), "Bu");
        assert_eq!(StyleRequest::new().to_string(), "");
    }

    #[test]
    fn test_request_all_is_exhaustive() {
        let all: Vec<_> = StyleRequest::all().collect();
        assert_eq!(all.len(), 27);
        assert!(all.contains(&StyleRequest::new()));
        assert!(all.contains(&StyleRequest::new().with_bold(false).with_underline(true)));
    }

    #[test]
    fn test_changes_in_fixed_order() {
        let req = StyleRequest::new().with_underline(true).with_bold(false).with_italic(true);
        let changes: Vec<_> = req.changes().collect();
        assert_eq!(
            changes,
            vec![
                (StyleFlag::Bold, false),
                (StyleFlag::Italic, true),
                (StyleFlag::Underline, true),
            ]
        );
    }

    #[test]
    fn test_style_tokens_skip_header_and_escapes() {
        let markup = "{\\rtf1\\ansi\\f0\\fswiss \\b x\\\\b y\\{\\i z\\i0 \\ul w\\ulnone }";
        assert_eq!(
            style_tokens(markup),
            vec![
                (StyleFlag::Bold, true),
                (StyleFlag::Italic, true),
                (StyleFlag::Italic, false),
                (StyleFlag::Underline, true),
                (StyleFlag::Underline, false),
            ]
        );
        assert_eq!(StyleState::replay(markup), StyleState::new(true, false, false));
    }
}
