//! Entry points for comparing values
//!
//! - `compare`: canonicalize two values and build their diff report
//! - `assertion`: fluent expectations and assertion macros for tests

pub mod assertion;
pub mod compare;
