//! Label file import/export.
//!
//! The label file is the only durable output of an annotation session: one
//! line per image, each line either a box or the "no box" sentinel. See
//! [`label_file`] for the exact grammar.
//!
//! ## Usage
//!
//! ```rust
//! use labeltrack::format::{format_labels, parse_labels};
//!
//! let entries = parse_labels("10.00,10.00,100.00,80.00\n-1.00,-1.00,-1.00,-1.00\n")?;
//! assert!(entries[0].is_some());
//! assert!(entries[1].is_none());
//! assert_eq!(format_labels(&entries), "10.00,10.00,100.00,80.00\n-1.00,-1.00,-1.00,-1.00\n");
//! # Ok::<(), labeltrack::format::FormatError>(())
//! ```

mod error;
pub mod label_file;

#[cfg(test)]
mod tests;

pub use error::FormatError;
pub use label_file::{
    LenientParse, format_entry, format_labels, parse_entry, parse_labels, parse_labels_lenient,
    read_label_file, write_label_file,
};
