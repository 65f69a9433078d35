use crate::artifacts::diff::options::DiffOptions;
use crate::artifacts::diff::report::DiffReport;
use crate::artifacts::text::canonical::Comparand;
use crate::errors::AssertionFailure;

/// A pending assertion about `actual`, read as `expect(actual).not().to().be()...`.
#[derive(Debug, Clone)]
pub struct Expectation<'a> {
    actual: Comparand<'a>,
    negated: bool,
}

pub fn expect<'a>(actual: impl Into<Comparand<'a>>) -> Expectation<'a> {
    Expectation {
        actual: actual.into(),
        negated: false,
    }
}

impl<'a> Expectation<'a> {
    /// Flips the polarity of the assertion.
    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    pub fn to(self) -> Self {
        self
    }

    pub fn be(self) -> Self {
        self
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn different_from<'b>(&self, expected: impl Into<Comparand<'b>>) -> crate::Result<()> {
        self.different_from_with(expected, &DiffOptions::default())
    }

    /// Asserts that the values differ, or that they do not when negated.
    ///
    /// An unexpectedly identical pair reports the canonical actual value; an
    /// unexpected difference reports the change count and the full report.
    pub fn different_from_with<'b>(
        &self,
        expected: impl Into<Comparand<'b>>,
        options: &DiffOptions,
    ) -> crate::Result<()> {
        let expected = expected.into();
        let actual = self.actual.canonicalize()?;
        let report = DiffReport::between(&actual, &expected.canonicalize()?, options);

        tracing::debug!(
            negated = self.negated,
            change_count = report.change_count(),
            "evaluated difference assertion"
        );

        match (report.is_identical(), self.negated) {
            (true, false) => Err(AssertionFailure::UnexpectedlyIdentical {
                actual: actual.into_owned(),
            }
            .into()),
            (false, true) => Err(AssertionFailure::UnexpectedDifferences { report }.into()),
            _ => Ok(()),
        }
    }
}

/// Panics unless `actual` differs from `expected`.
///
/// ```
/// linediff::assert_different!("123", "321");
/// linediff::assert_different!("a b", "a  b", linediff::DiffOptions::default());
/// ```
#[macro_export]
macro_rules! assert_different {
    ($actual:expr, $expected:expr $(,)?) => {
        $crate::assert_different!($actual, $expected, $crate::DiffOptions::default())
    };
    ($actual:expr, $expected:expr, $options:expr $(,)?) => {
        if let Err(error) = $crate::expect($actual).different_from_with($expected, &$options) {
            panic!("{}", error);
        }
    };
}

/// Panics with the rendered report if `actual` differs from `expected`.
///
/// ```
/// linediff::assert_not_different!("123", "123");
/// linediff::assert_not_different!(
///     "  a\n\nb ",
///     "a\nb",
///     linediff::DiffOptions::default().with_relaxed_space(true)
/// );
/// ```
#[macro_export]
macro_rules! assert_not_different {
    ($actual:expr, $expected:expr $(,)?) => {
        $crate::assert_not_different!($actual, $expected, $crate::DiffOptions::default())
    };
    ($actual:expr, $expected:expr, $options:expr $(,)?) => {
        if let Err(error) = $crate::expect($actual)
            .not()
            .different_from_with($expected, &$options)
        {
            panic!("{}", error);
        }
    };
}
