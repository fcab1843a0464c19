//! Utils module - file, text and data helpers
//!
//! Every function here is independent; none holds state between calls.

/// Data structure helpers (flattening, chunking)
pub mod data;

/// YAML, JSON and text file operations
pub mod file;

/// Scalar and windowed numeric helpers
pub mod numeric;

/// Text normalization and matching
pub mod text;
