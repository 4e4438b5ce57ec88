use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use log::info;

use crate::error::{Error, Result};
use crate::fnt;
use crate::meta::FontDescription;

/// Command line arguments of the `json2fnt` binary.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the font description to convert
    pub input: PathBuf,
    /// Path to where the binary font should be written [default: input with .fnt extension]
    pub output: Option<PathBuf>,
    /// Format of the font description [default: deduced from the input extension]
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,
}

/// Supported font description formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// JSON as written by BMFont JSON generators.
    Json,
    /// Rusty Object Notation.
    Ron,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().map(|os_str| os_str.to_str()) {
            Some(Some("json")) => Ok(Format::Json),
            Some(Some("ron")) => Ok(Format::Ron),
            _ => Err(Error::UnknownFormat(format!(
                "cannot deduce format from {}; supported formats are json and ron",
                path.display()
            ))),
        }
    }
}

impl Args {
    /// Where the `.fnt` file goes.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("fnt"))
    }
}

/// Parses a font description from `text`.
///
/// # Errors
/// Returns the deserializer's error, which names missing or malformed fields.
pub fn parse_description(text: &str, format: Format) -> Result<FontDescription> {
    match format {
        Format::Json => serde_json::from_str(text).map_err(|err| Error::Parse(Box::new(err))),
        Format::Ron => ron::from_str(text).map_err(|err| Error::Parse(Box::new(err))),
    }
}

/// Converts the description at `args.input` into a `.fnt` file, returning
/// the number of bytes written.
///
/// # Errors
/// Fails if the description cannot be read, parsed or encoded, or if the
/// output cannot be stored. The output path is left untouched on failure.
pub fn convert(args: &Args) -> Result<usize> {
    let format = match args.format {
        Some(format) => format,
        None => Format::from_path(&args.input)?,
    };

    let text = std::fs::read_to_string(&args.input)?;
    let font = parse_description(&text, format)?;
    info!(
        "{}: {} glyphs, {} pages, {} kerning pairs",
        font.info.face,
        font.chars.len(),
        font.pages.len(),
        font.kernings.len()
    );

    let output = args.output_path();
    let len = fnt::write_to_path(&font, &output)?;
    info!("Wrote {len} bytes to {}", output.display());
    Ok(len)
}
