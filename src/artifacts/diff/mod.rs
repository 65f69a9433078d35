//! Line diffing and report building
//!
//! This module turns two texts into a [`DiffReport`](report::DiffReport):
//!
//! - `operation`: runs of equal, added or removed lines, diffed with `similar`
//! - `group`: merging adjacent changes into logical change groups
//! - `window`: collapsing unchanged runs around each change
//! - `options`: comparison options and counting rules
//! - `report`: the rendered report and its change count

pub mod group;
pub mod operation;
pub mod options;
pub mod report;
pub mod window;
