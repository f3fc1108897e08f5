//! rtfclip - put styled rich text on the clipboard
//!
//! Each positional argument is `CODE:TEXT`, where CODE is a style code
//! such as `B` or `BIU`. Arguments without a colon, or whose prefix is
//! not a style code, are appended plainly.

use std::env;
use std::io::{self, Write};
use std::process;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rtfclip::{Clipboard, CommandClipboard, Config, Result, RtfDocument, RtfError, TextConverter};

/// Parsed command line
#[derive(Debug, Default)]
struct Options {
    font: Option<String>,
    print: bool,
    convert: bool,
    raw: bool,
    demo: bool,
    pieces: Vec<String>,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rtfclip=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let options = match parse_args(&args)? {
        Some(options) => options,
        None => return Ok(()),
    };

    let mut config = Config::load()?;
    if let Some(font) = &options.font {
        config.font = font.clone();
    }
    if options.raw {
        config.escape_text = false;
    }

    let mut doc = RtfDocument::from_config(&config)?;
    if options.demo {
        append_demo(&mut doc)?;
    }
    for piece in &options.pieces {
        append_piece(&mut doc, piece)?;
    }

    let mut markup = doc.into_rtf().into_bytes();
    let mut clipboard = CommandClipboard::new(config.clipboard);
    if options.convert {
        markup = clipboard.convert(&markup)?;
    }

    if options.print {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&markup)?;
        stdout.write_all(b"\n")?;
    } else {
        clipboard.write(&markup)?;
    }

    Ok(())
}

/// Parse arguments; `None` means the command was fully handled
fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            "--version" | "-V" => {
                print_version();
                return Ok(None);
            }
            "--font" | "-f" => match iter.next() {
                Some(font) => options.font = Some(font.clone()),
                None => return Err(RtfError::Message(format!("{} requires a font name", arg))),
            },
            "--print" | "-p" => options.print = true,
            "--convert" => options.convert = true,
            "--raw" => options.raw = true,
            "--demo" => options.demo = true,
            "--" => {
                options.pieces.extend(iter.by_ref().cloned());
            }
            s if s.starts_with('-') && s.len() > 1 => {
                return Err(RtfError::Message(format!("Unknown option: {}", s)));
            }
            _ => options.pieces.push(arg.clone()),
        }
    }

    Ok(Some(options))
}

/// Append one `CODE:TEXT` argument. Anything whose prefix is not a
/// style code is appended whole, colon included.
fn append_piece(doc: &mut RtfDocument, piece: &str) -> Result<()> {
    match piece.split_once(':') {
        Some((code, text)) if is_style_code(code) => doc.append_style_coded(text, code),
        _ => {
            doc.append_text(piece);
            Ok(())
        }
    }
}

fn is_style_code(code: &str) -> bool {
    !code.is_empty() && code.chars().all(|c| "bBiIuU".contains(c))
}

fn append_demo(doc: &mut RtfDocument) -> Result<()> {
    doc.append_style_coded("this is bold", "B")?;
    doc.append_style_coded(" and this is italicized", "I")?;
    doc.append_style_coded(" and this is underlined!", "U")?;
    doc.append_style_coded("...And this is all 3!", "BIU")?;
    Ok(())
}

fn print_usage() {
    println!("rtfclip {} - put styled rich text on the clipboard", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: rtfclip [OPTIONS] [CODE:TEXT]...");
    println!();
    println!("Options:");
    println!("  -h, --help       Show this help message");
    println!("  -V, --version    Show version information");
    println!("  -f, --font NAME  Font for the document");
    println!("  -p, --print      Print the markup instead of copying it");
    println!("      --convert    Pass the markup through the converter first");
    println!("      --raw        Append text without escaping");
    println!("      --demo       Append the demo sentence");
    println!();
    println!("Style codes:");
    println!("  B I U          Bold, italic, underline on");
    println!("  b i u          Bold, italic, underline off");
    println!();
    println!("Example:");
    println!("  rtfclip 'B:Warning' ' do not ' 'I:touch'");
    println!();
    println!("Arguments whose prefix is not a style code (\"Note: x\") are appended whole.");
}

fn print_version() {
    println!("rtfclip {}", env!("CARGO_PKG_VERSION"));
}
