//! Line-level difference reports for descriptive test failures.
//!
//! Two values are canonicalized to text, optionally normalized, diffed line by
//! line and rendered as a report where every line is prefixed with `"  "`,
//! `"+ "` or `"- "`:
//!
//! ```
//! use linediff::{DiffOptions, compare};
//!
//! let report = compare("a\nx\nc", "a\nb\nc", &DiffOptions::default()).unwrap();
//! assert_eq!(report.change_count(), 1);
//! assert_eq!(report.to_string(), "  a\n- b\n+ x\n  c");
//! ```
//!
//! - `artifacts`: diffing, grouping, windowing and text preparation
//! - `commands`: the comparison entry point and test assertions
//! - `errors`: the crate error type

pub mod artifacts;
pub mod commands;
pub mod errors;

pub use artifacts::diff::operation::{DiffOperation, OperationKind};
pub use artifacts::diff::options::{CountingRule, DiffOptions};
pub use artifacts::diff::report::DiffReport;
pub use artifacts::text::canonical::Comparand;
pub use artifacts::text::normalize::normalize;
pub use commands::assertion::{Expectation, expect};
pub use commands::compare::{compare, is_different_from};
pub use errors::{AssertionFailure, Error, Result};
