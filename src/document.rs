//! RTF document builder
//!
//! An `RtfDocument` is an append-only markup buffer plus the bold, italic
//! and underline flags. A flag's control word is written only when the
//! flag actually changes, so the flags always equal the net effect of the
//! tokens already in the buffer.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, RtfError};
use crate::escape::escape_into;
use crate::style::{StyleFlag, StyleRequest, StyleState};

/// Font used when none is given
pub const DEFAULT_FONT: &str = "Helvetica";

const HEADER: &str = "{\\rtf1\\ansi\\ansicpg1252\\cocoartf1348\\cocoasubrtf170";
const COLOR_TABLE: &str = "{\\colortbl;\\red255\\green255\\blue255;}";
const PREAMBLE: &str = "\\margl1440\\margr1440\\vieww10800\\viewh8400\\viewkind0\\pard\
\\tx720\\tx1440\\tx2160\\tx2880\\tx3600\\tx4320\\tx5040\\tx5760\\tx6480\\tx7200\\tx7920\\tx8640\
\\pardirnatural\\f0 ";
const FOOTER: &str = "}";

fn font_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\\{};\p{Cc}]+$").expect("font name pattern is valid"))
}

/// Check that a font name can be placed in the font table as is
pub fn validate_font_name(name: &str) -> Result<()> {
    if name.trim().is_empty() || !font_name_pattern().is_match(name) {
        return Err(RtfError::InvalidFontName(name.to_string()));
    }
    Ok(())
}

/// A rich text document under construction
#[derive(Debug, Clone)]
pub struct RtfDocument {
    /// Markup written so far (without the closing brace)
    buffer: String,
    /// Currently active flags
    state: StyleState,
    /// Font named in the font table
    font_name: String,
    /// Whether appended text is escaped
    escape_text: bool,
}

impl RtfDocument {
    /// Create a document using the default font
    pub fn new() -> Self {
        Self::build(DEFAULT_FONT.to_string())
    }

    /// Create a document using the given font
    pub fn with_font(font_name: &str) -> Result<Self> {
        validate_font_name(font_name)?;
        Ok(Self::build(font_name.to_string()))
    }

    /// Create a document from configured font and escaping policy
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut doc = Self::with_font(&config.font)?;
        doc.set_escape_text(config.escape_text);
        Ok(doc)
    }

    fn build(font_name: String) -> Self {
        let mut buffer = String::with_capacity(512);
        buffer.push_str(HEADER);
        buffer.push_str("{\\fonttbl\\f0\\fswiss\\fcharset0 ");
        buffer.push_str(&font_name);
        buffer.push_str(";}");
        buffer.push_str(COLOR_TABLE);
        buffer.push_str(PREAMBLE);

        Self {
            buffer,
            state: StyleState::default(),
            font_name,
            escape_text: true,
        }
    }

    /// Get the font name
    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    /// Get the active flags
    pub fn style(&self) -> StyleState {
        self.state
    }

    /// Whether `append_text` escapes its input
    pub fn escapes_text(&self) -> bool {
        self.escape_text
    }

    /// Choose whether `append_text` escapes its input
    pub fn set_escape_text(&mut self, escape: bool) {
        self.escape_text = escape;
    }

    /// Markup written so far, without the closing brace
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Set a flag, writing its control word only if it changes.
    /// Returns whether a token was written.
    pub fn set_flag(&mut self, flag: StyleFlag, on: bool) -> bool {
        if self.state.get(flag) == on {
            return false;
        }
        self.buffer.push_str(flag.token(on));
        self.state.set(flag, on);
        true
    }

    /// Turn bold on or off
    pub fn set_bold(&mut self, on: bool) -> bool {
        self.set_flag(StyleFlag::Bold, on)
    }

    /// Turn italic on or off
    pub fn set_italic(&mut self, on: bool) -> bool {
        self.set_flag(StyleFlag::Italic, on)
    }

    /// Turn underline on or off
    pub fn set_underline(&mut self, on: bool) -> bool {
        self.set_flag(StyleFlag::Underline, on)
    }

    /// Set all three flags, in bold, italic, underline order
    pub fn set_style(&mut self, state: StyleState) {
        for flag in StyleFlag::ALL {
            self.set_flag(flag, state.get(flag));
        }
    }

    /// Append text in the current style
    pub fn append_text(&mut self, text: &str) {
        if self.escape_text {
            escape_into(&mut self.buffer, text);
        } else {
            self.buffer.push_str(text);
        }
    }

    /// Append markup verbatim, regardless of the escaping policy
    pub fn append_raw(&mut self, markup: &str) {
        self.buffer.push_str(markup);
    }

    /// Append text with a temporary style change.
    ///
    /// The requested flags apply to `text` only; the previous flags are
    /// restored afterwards.
    pub fn append_styled_text(&mut self, text: &str, request: StyleRequest) {
        let saved = self.state;
        for (flag, on) in request.changes() {
            self.set_flag(flag, on);
        }
        self.append_text(text);
        self.set_style(saved);
    }

    /// Append text styled by a style code such as `"BIU"` or `"b"`
    pub fn append_style_coded(&mut self, text: &str, code: &str) -> Result<()> {
        let request = StyleRequest::parse_code(code)?;
        self.append_styled_text(text, request);
        Ok(())
    }

    /// The complete document, closed by the envelope terminator.
    ///
    /// This does not modify the document; appending may continue and a
    /// later export includes the new content.
    pub fn export(&self) -> String {
        let mut out = String::with_capacity(self.buffer.len() + FOOTER.len());
        out.push_str(&self.buffer);
        out.push_str(FOOTER);
        debug!(bytes = out.len(), "exported document");
        out
    }

    /// Consume the document and return the complete markup
    pub fn into_rtf(mut self) -> String {
        self.buffer.push_str(FOOTER);
        self.buffer
    }
}

impl Default for RtfDocument {
    fn default() -> Self {
        Self::new()
    }
}
