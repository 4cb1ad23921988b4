//! The label file: one box per image, one line per box.
//!
//! # Format
//!
//! ```text
//! <x>,<y>,<width>,<height>
//! ```
//!
//! Values are image pixels written with two decimals. Line `i` belongs to
//! image `i` of the image list. An image without a box is written as the
//! sentinel `-1.00,-1.00,-1.00,-1.00`. There is no header and no escaping.

use std::path::Path;

use super::FormatError;
use crate::constants::label;
use crate::model::BoundingBox;

/// Serialize one entry, without the trailing newline.
pub fn format_entry(entry: Option<&BoundingBox>) -> String {
    match entry {
        Some(bbox) => bbox.to_string(),
        None => label::EMPTY_SENTINEL.to_string(),
    }
}

/// Parse one line into an entry. The sentinel parses to `None`.
///
/// Errors carry line number 0; whole-file parsers fill in the real number.
pub fn parse_entry(line: &str) -> Result<Option<BoundingBox>, FormatError> {
    let trimmed = line.trim();
    let fields: Vec<&str> = trimmed.split(',').map(str::trim).collect();
    if fields.len() != label::FIELD_COUNT {
        return Err(FormatError::parse(
            0,
            trimmed,
            format!(
                "expected {} comma-separated values, found {}",
                label::FIELD_COUNT,
                fields.len()
            ),
        ));
    }

    let mut values = [0.0f32; label::FIELD_COUNT];
    for (value, field) in values.iter_mut().zip(&fields) {
        *value = field.parse::<f32>().map_err(|e| {
            FormatError::parse(0, trimmed, format!("invalid number '{field}': {e}"))
        })?;
        if !value.is_finite() {
            return Err(FormatError::parse(
                0,
                trimmed,
                format!("non-finite value '{field}'"),
            ));
        }
    }

    if values.iter().all(|&v| v == label::SENTINEL_VALUE) {
        return Ok(None);
    }

    let [x, y, width, height] = values;
    if width < 0.0 || height < 0.0 {
        return Err(FormatError::parse(0, trimmed, "negative box size"));
    }
    Ok(Some(BoundingBox::new(x, y, width, height)))
}

/// Serialize all entries, one line each, every line newline-terminated.
pub fn format_labels(entries: &[Option<BoundingBox>]) -> String {
    let mut out = String::with_capacity(entries.len() * 28);
    for entry in entries {
        out.push_str(&format_entry(entry.as_ref()));
        out.push('\n');
    }
    out
}

/// Non-empty lines of a label file, with their 1-based line numbers.
///
/// Only trailing blank lines are dropped; a blank line in the middle still
/// occupies its image's slot and fails to parse.
fn label_lines(content: &str) -> Vec<(usize, &str)> {
    let mut lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .collect();
    while lines.last().is_some_and(|(_, line)| line.trim().is_empty()) {
        lines.pop();
    }
    lines
}

/// Parse a whole label file, failing on the first malformed line.
pub fn parse_labels(content: &str) -> Result<Vec<Option<BoundingBox>>, FormatError> {
    label_lines(content)
        .into_iter()
        .map(|(line_num, line)| parse_entry(line).map_err(|e| e.at_line(line_num)))
        .collect()
}

/// Result of a lenient parse: every line yields an entry.
#[derive(Debug, Default)]
pub struct LenientParse {
    /// One entry per line; malformed lines become `None`.
    pub entries: Vec<Option<BoundingBox>>,
    /// Errors for the malformed lines, in line order.
    pub errors: Vec<FormatError>,
}

/// Parse a whole label file, treating malformed lines as "no box".
pub fn parse_labels_lenient(content: &str) -> LenientParse {
    let mut result = LenientParse::default();
    for (line_num, line) in label_lines(content) {
        match parse_entry(line) {
            Ok(entry) => result.entries.push(entry),
            Err(e) => {
                let e = e.at_line(line_num);
                log::warn!("Treating malformed label line as empty: {}", e);
                result.entries.push(None);
                result.errors.push(e);
            }
        }
    }
    result
}

/// Read and leniently parse a label file.
pub fn read_label_file(path: &Path) -> Result<LenientParse, FormatError> {
    let content = std::fs::read_to_string(path)?;
    let parsed = parse_labels_lenient(&content);
    log::info!(
        "Read {} label lines from {:?} ({} malformed)",
        parsed.entries.len(),
        path,
        parsed.errors.len()
    );
    Ok(parsed)
}

/// Write entries to a label file, replacing its content.
pub fn write_label_file(path: &Path, entries: &[Option<BoundingBox>]) -> Result<(), FormatError> {
    std::fs::write(path, format_labels(entries))?;
    log::info!("Saved {} label lines to {:?}", entries.len(), path);
    Ok(())
}
