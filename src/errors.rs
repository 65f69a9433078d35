use crate::artifacts::diff::report::DiffReport;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to serialize value for comparison: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Assertion(#[from] AssertionFailure),
}

/// Why an assertion about two values did not hold.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssertionFailure {
    /// Values were expected to differ but have no changes.
    #[error("Strings were unexpectedly identical:\n{actual}")]
    UnexpectedlyIdentical { actual: String },
    /// Values were expected to match but the report has changes.
    #[error("Got {} unexpected differences:\n{report}", .report.change_count())]
    UnexpectedDifferences { report: DiffReport },
}

impl AssertionFailure {
    pub fn report(&self) -> Option<&DiffReport> {
        match self {
            AssertionFailure::UnexpectedDifferences { report } => Some(report),
            AssertionFailure::UnexpectedlyIdentical { .. } => None,
        }
    }
}
