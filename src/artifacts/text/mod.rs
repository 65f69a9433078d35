//! Text preparation for comparisons
//!
//! - `canonical`: turning values into comparable text
//! - `normalize`: whitespace normalization for relaxed comparisons
//! - `visible`: visible markers for whitespace in reports

pub mod canonical;
pub mod normalize;
pub mod visible;
