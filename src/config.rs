//! Configuration file support
//!
//! Loads settings from ~/.rtfclip.toml (or %USERPROFILE%\.rtfclip.toml on Windows)
//!
//! Example:
//! ```text
//! # rtfclip configuration
//! font = "Helvetica"
//! escape-text = true
//!
//! [clipboard]
//! copy = "pbcopy -pboard general -Prefer rtf"
//! paste = "pbpaste -pboard general"
//! inspect = "textutil -info -stdin"
//! convert = "textutil -convert rtf -stdin -stdout"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use toml::{Table, Value};
use tracing::{debug, warn};

use crate::clipboard::ClipboardCommands;
use crate::document::{validate_font_name, DEFAULT_FONT};
use crate::error::{Result, RtfError};

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Font for new documents
    pub font: String,
    /// Whether appended text is escaped
    pub escape_text: bool,
    /// External clipboard utilities
    pub clipboard: ClipboardCommands,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font: DEFAULT_FONT.to_string(),
            escape_text: true,
            clipboard: ClipboardCommands::default(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".rtfclip.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".rtfclip.toml"))
        }
    }

    /// Load configuration from the default path.
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let mut config = Config::default();
        config.apply(&Self::parse(&contents)?);
        Ok(config)
    }

    /// Parse config file contents into a table
    fn parse(contents: &str) -> Result<Table> {
        contents
            .parse::<Table>()
            .map_err(|e| RtfError::Config(e.to_string()))
    }

    /// Apply settings from a parsed table
    fn apply(&mut self, settings: &Table) {
        if let Some(value) = settings.get("font") {
            match value.as_str() {
                Some(font) if validate_font_name(font).is_ok() => self.font = font.to_string(),
                _ => warn!(?value, "ignoring invalid font setting"),
            }
        }

        if let Some(value) = settings.get("escape-text") {
            match value_as_bool(value) {
                Some(b) => self.escape_text = b,
                None => warn!(?value, "ignoring non-boolean escape-text setting"),
            }
        }

        if let Some(value) = settings.get("clipboard") {
            match value.as_table() {
                Some(table) => self.apply_clipboard(table),
                None => warn!("ignoring [clipboard]: not a table"),
            }
        }
    }

    fn apply_clipboard(&mut self, table: &Table) {
        let commands = &mut self.clipboard;
        let slots = [
            ("copy", &mut commands.copy),
            ("paste", &mut commands.paste),
            ("inspect", &mut commands.inspect),
            ("convert", &mut commands.convert),
        ];

        for (key, slot) in slots {
            let Some(value) = table.get(key) else {
                continue;
            };
            match value.as_str() {
                Some(line) => *slot = split_command(line),
                None => warn!(key, "ignoring non-string clipboard command"),
            }
        }
    }
}

/// Split a command line on whitespace
pub fn split_command(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

fn value_as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Boolean(b) => Some(*b),
        Value::String(s) => parse_bool(s),
        _ => None,
    }
}

/// Parse a boolean value from string
fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
