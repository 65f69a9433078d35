use crate::artifacts::diff::options::DiffOptions;
use crate::artifacts::diff::report::DiffReport;
use crate::artifacts::text::canonical::Comparand;

/// Compares `actual` against `expected` and reports their differences.
///
/// Non-text values are canonicalized first; a value that cannot be serialized
/// fails the whole comparison.
pub fn compare<'a, 'b>(
    actual: impl Into<Comparand<'a>>,
    expected: impl Into<Comparand<'b>>,
    options: &DiffOptions,
) -> crate::Result<DiffReport> {
    let (actual, expected) = (actual.into(), expected.into());
    let actual = actual.canonicalize()?;
    let expected = expected.canonicalize()?;

    Ok(DiffReport::between(&actual, &expected, options))
}

pub fn is_different_from<'a, 'b>(
    actual: impl Into<Comparand<'a>>,
    expected: impl Into<Comparand<'b>>,
    options: &DiffOptions,
) -> crate::Result<bool> {
    Ok(!compare(actual, expected, options)?.is_identical())
}
