//! Clipboard access through external utilities
//!
//! The document builder never touches the clipboard itself. Callers hand
//! the exported markup to a `Clipboard`, which is either backed by
//! command-line tools (`pbcopy`, `xclip`, ...) or kept in memory.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::config::split_command;
use crate::error::{Result, RtfError};

/// Somewhere exported markup can be written to and read back from
pub trait Clipboard {
    /// Replace the clipboard contents
    fn write(&mut self, bytes: &[u8]) -> Result<()>;

    /// Read the clipboard contents
    fn read(&mut self) -> Result<Vec<u8>>;
}

/// Rich text inspection and normalization
pub trait TextConverter {
    /// Describe a rich text document
    fn inspect(&self, bytes: &[u8]) -> Result<Vec<u8>>;

    /// Rewrite a rich text document into canonical RTF
    fn convert(&self, bytes: &[u8]) -> Result<Vec<u8>>;
}

/// Command lines used by `CommandClipboard`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardCommands {
    pub copy: Vec<String>,
    pub paste: Vec<String>,
    pub inspect: Vec<String>,
    pub convert: Vec<String>,
}

impl Default for ClipboardCommands {
    fn default() -> Self {
        Self {
            copy: split_command("pbcopy -pboard general -Prefer rtf"),
            paste: split_command("pbpaste -pboard general"),
            inspect: split_command("textutil -info -stdin"),
            convert: split_command("textutil -convert rtf -stdin -stdout"),
        }
    }
}

/// Clipboard backed by external processes
#[derive(Debug, Clone, Default)]
pub struct CommandClipboard {
    commands: ClipboardCommands,
}

impl CommandClipboard {
    /// Create a clipboard using the given command lines
    pub fn new(commands: ClipboardCommands) -> Self {
        Self { commands }
    }

    /// Get the configured command lines
    pub fn commands(&self) -> &ClipboardCommands {
        &self.commands
    }
}

/// Run `argv`, feed `input` on stdin, and return its stdout.
/// A non-zero exit status is an error.
fn run_piped(name: &'static str, argv: &[String], input: &[u8]) -> Result<Vec<u8>> {
    let (program, args) = argv.split_first().ok_or(RtfError::EmptyCommand(name))?;
    debug!(program = %program, ?args, bytes = input.len(), "running clipboard {}", name);

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        // Dropping stdin closes the pipe so the child sees EOF.
        // A child that exits without reading (pbpaste) closes its end first.
        match stdin.write_all(input) {
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
            result => result?,
        }
    }

    let output = child.wait_with_output()?;
    if !output.status.success() {
        return Err(RtfError::CommandFailed {
            program: program.clone(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(output.stdout)
}

impl Clipboard for CommandClipboard {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        run_piped("copy", &self.commands.copy, bytes).map(|_| ())
    }

    fn read(&mut self) -> Result<Vec<u8>> {
        run_piped("paste", &self.commands.paste, &[])
    }
}

impl TextConverter for CommandClipboard {
    fn inspect(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        run_piped("inspect", &self.commands.inspect, bytes)
    }

    fn convert(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        run_piped("convert", &self.commands.convert, bytes)
    }
}

/// In-memory clipboard
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Vec<u8>,
    writes: usize,
}

impl MemoryClipboard {
    /// Create an empty clipboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current contents
    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    /// Number of writes so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Clipboard for MemoryClipboard {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.contents = bytes.to_vec();
        self.writes += 1;
        Ok(())
    }

    fn read(&mut self) -> Result<Vec<u8>> {
        Ok(self.contents.clone())
    }
}

impl TextConverter for MemoryClipboard {
    fn inspect(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        let kind = if bytes.starts_with(b"{\\rtf") {
            "rich text (RTF)"
        } else {
            "plain text"
        };
        Ok(format!("Type: {}\nLength: {} bytes\n", kind, bytes.len()).into_bytes())
    }

    fn convert(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        Ok(bytes.to_vec())
    }
}
