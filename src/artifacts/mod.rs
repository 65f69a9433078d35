//! Data structures and algorithms behind a comparison
//!
//! - `diff`: line diffing, change grouping, context windows and rendering
//! - `text`: canonicalization, normalization and whitespace markers

pub mod diff;
pub mod text;
