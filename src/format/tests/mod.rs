//! Unit tests for the label file format.
//!
//! These tests verify line parsing, the "no box" sentinel, whole-file
//! parsing in strict and lenient mode, and file round trips.
