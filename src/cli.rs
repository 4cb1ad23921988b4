//! Argument parsing and commands of the `labeltrack` binary.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use thiserror::Error;

use labeltrack::config::{ConfigError, EditorConfig};
use labeltrack::format::{self, FormatError};
use labeltrack::model::Size;
use labeltrack::session::LabelSession;

/// Errors reported by the command line tool.
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration file could not be read
    #[error("Failed to read config {path:?}: {source}")]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration file is invalid
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Label file could not be read or written
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Writing the report failed
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Check and normalize single-box label files.
#[derive(Parser, Debug)]
#[command(name = "labeltrack", version, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Editor configuration file (JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Report malformed, undersized and out-of-bounds lines
    Check {
        /// Label file, one line per image
        labels: PathBuf,

        /// Number of images the file must cover
        #[arg(long)]
        images: Option<usize>,

        /// Image size for the bounds check, e.g. 640x480
        #[arg(long, value_parser = parse_size)]
        size: Option<Size>,
    },

    /// Rewrite a label file with two decimals and sentinels
    Normalize {
        /// Label file, one line per image
        labels: PathBuf,

        /// Number of images the file must cover
        #[arg(long)]
        images: Option<usize>,

        /// Write normalized labels here instead of in place
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Parse an image size written as `<W>x<H>`.
fn parse_size(raw: &str) -> Result<Size, String> {
    let invalid = || format!("invalid size '{raw}', expected e.g. 640x480");
    let (width, height) = raw.split_once(['x', 'X']).ok_or_else(invalid)?;
    let width: f32 = width.trim().parse().map_err(|_| invalid())?;
    let height: f32 = height.trim().parse().map_err(|_| invalid())?;
    if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
        return Err(invalid());
    }
    Ok(Size::new(width, height))
}

/// Load the configuration file, or the defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<EditorConfig, CliError> {
    let Some(path) = path else {
        return Ok(EditorConfig::default());
    };
    let json = std::fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(EditorConfig::from_json(&json)?)
}

/// Run a command, writing its report to `out`. Returns the number of
/// problems found.
pub fn run(
    command: &Command,
    config: &EditorConfig,
    out: &mut dyn Write,
) -> Result<usize, CliError> {
    match command {
        Command::Check {
            labels,
            images,
            size,
        } => check(labels, *images, *size, config, out),
        Command::Normalize {
            labels,
            images,
            output,
        } => normalize(labels, *images, output.as_deref(), out),
    }
}

fn check(
    labels: &Path,
    images: Option<usize>,
    size: Option<Size>,
    config: &EditorConfig,
    out: &mut dyn Write,
) -> Result<usize, CliError> {
    let content = std::fs::read_to_string(labels).map_err(FormatError::from)?;
    let parsed = format::parse_labels_lenient(&content);

    let mut problems = 0;
    for err in &parsed.errors {
        writeln!(out, "{err}")?;
        problems += 1;
    }

    let min = config.min_box_size;
    for (idx, bbox) in parsed.entries.iter().enumerate() {
        let Some(bbox) = bbox else {
            continue;
        };
        let line = idx + 1;
        if let Some(size) = size
            && !bbox.is_within(size)
        {
            writeln!(
                out,
                "Line {line}: box {bbox} exceeds the {}x{} image",
                size.width, size.height
            )?;
            problems += 1;
        }
        if bbox.width < min || bbox.height < min {
            writeln!(out, "Line {line}: box {bbox} is smaller than {min:.2}")?;
            problems += 1;
        }
    }

    let lines = parsed.entries.len();
    if let Some(images) = images
        && images != lines
    {
        writeln!(out, "{lines} lines for {images} images")?;
        problems += 1;
    }

    let boxes = parsed.entries.iter().flatten().count();
    writeln!(
        out,
        "{}: {lines} lines, {boxes} boxes, {} empty, {problems} problems",
        labels.display(),
        lines - boxes
    )?;
    Ok(problems)
}

fn normalize(
    labels: &Path,
    images: Option<usize>,
    output: Option<&Path>,
    out: &mut dyn Write,
) -> Result<usize, CliError> {
    let content = std::fs::read_to_string(labels).map_err(FormatError::from)?;
    let line_count = format::parse_labels_lenient(&content).entries.len();

    let mut session = LabelSession::new(images.unwrap_or(line_count));
    let errors = session.load_labels(&content);
    for err in &errors {
        writeln!(out, "{err}, written as empty")?;
    }

    let target = output.unwrap_or(labels);
    format::write_label_file(target, session.entries())?;
    writeln!(
        out,
        "Wrote {} lines to {}",
        session.len(),
        target.display()
    )?;
    Ok(0)
}
