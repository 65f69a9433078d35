#![allow(dead_code)]

use linediff::DiffReport;
use rstest::fixture;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

pub fn text(lines: &[&str]) -> String {
    lines.join("\n")
}

/// Rebuilds one side of a report without context windows: pass `"- "` to drop
/// removed lines and get the actual text back, `"+ "` for the expected text.
pub fn reconstruct(report: &DiffReport, skipped_prefix: &str) -> String {
    report
        .lines()
        .iter()
        .filter(|line| !line.starts_with(skipped_prefix))
        .map(|line| &line[2..])
        .collect::<Vec<_>>()
        .join("\n")
}

#[fixture]
pub fn numbers() -> Vec<&'static str> {
    vec!["123", "234", "345", "456", "567", "678", "789", "890", "901"]
}
