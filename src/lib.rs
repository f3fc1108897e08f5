//! rtfclip - build styled RTF snippets for the system clipboard
//!
//! ```
//! use rtfclip::{RtfDocument, StyleRequest};
//!
//! let mut doc = RtfDocument::new();
//! doc.append_styled_text("this is bold", StyleRequest::new().with_bold(true));
//! doc.append_style_coded(" and this is all three", "BIU").unwrap();
//! assert!(doc.export().ends_with("\\ulnone }"));
//! ```

pub mod clipboard;
pub mod config;
pub mod document;
pub mod error;
pub mod escape;
pub mod style;
pub mod text;

pub use clipboard::{Clipboard, ClipboardCommands, CommandClipboard, MemoryClipboard, TextConverter};
pub use config::Config;
pub use document::{RtfDocument, DEFAULT_FONT};
pub use error::{Result, RtfError};
pub use style::{StyleFlag, StyleRequest, StyleState};
