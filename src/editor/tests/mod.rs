//! Tests for the box editor.
//!
//! `support` provides a recording observer and cursor stack; the other
//! modules drive the editor through the same calls a host makes.

mod support;
