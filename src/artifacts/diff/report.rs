use crate::artifacts::diff::group::partition;
use crate::artifacts::diff::operation::DiffOperation;
use crate::artifacts::diff::options::DiffOptions;
use crate::artifacts::diff::window::{DisplayLine, LineKind, layout};
use crate::artifacts::text::normalize::normalize;
use crate::artifacts::text::visible::{ELLIPSIS, RETURN_MARKER, show_whitespace};
use std::borrow::Cow;
use std::fmt;

/// Result of comparing two texts line by line.
///
/// `change_count` is the number of changes under the configured counting
/// rule; `lines` are the prefixed report lines, without line terminators.
///
/// Texts are split on every `\n`, so a text ending in a line terminator has a
/// final empty line and its report ends with a bare `"  "` context line. With
/// `show_space` that line is folded into the `↩` of the line before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffReport {
    change_count: usize,
    lines: Vec<String>,
}

impl DiffReport {
    /// Diffs `actual` against `expected`, which is the baseline: lines only in
    /// `expected` are removed, lines only in `actual` are added.
    pub fn between(actual: &str, expected: &str, options: &DiffOptions) -> Self {
        let (actual, expected) = if options.relaxed_space {
            (Cow::Owned(normalize(actual)), Cow::Owned(normalize(expected)))
        } else {
            (Cow::Borrowed(actual), Cow::Borrowed(expected))
        };

        let expected_lines = expected.split('\n').collect::<Vec<_>>();
        let actual_lines = actual.split('\n').collect::<Vec<_>>();
        let operations = DiffOperation::between(&expected_lines, &actual_lines);

        Self::from_operations(operations, options)
    }

    /// Builds a report from operations computed by any line diff.
    ///
    /// The operations must already be in document order. `relaxed_space` has
    /// no effect here since normalization happens before diffing.
    pub fn from_operations(operations: Vec<DiffOperation<'_>>, options: &DiffOptions) -> Self {
        let segments = partition(operations);
        let change_count = options.counting.count(&segments);
        let lines = render(&layout(&segments, options.context), options.show_space);

        tracing::debug!(
            change_count,
            segments = segments.len(),
            lines = lines.len(),
            "built diff report"
        );

        DiffReport {
            change_count,
            lines,
        }
    }

    pub fn change_count(&self) -> usize {
        self.change_count
    }

    pub fn is_identical(&self) -> bool {
        self.change_count == 0
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn rendered(&self) -> String {
        self.lines.join("\n").trim_end_matches('\n').to_string()
    }
}

impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rendered())
    }
}

fn render(lines: &[DisplayLine<'_>], show_space: bool) -> Vec<String> {
    let last = lines.len().saturating_sub(1);

    let mut rendered = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let prefix = line.kind().prefix();
            match line.kind() {
                LineKind::Ellipsis => format!("{prefix}{ELLIPSIS}"),
                _ if show_space => {
                    let marker = if i < last { RETURN_MARKER } else { "" };
                    format!("{prefix}{}{marker}", show_whitespace(line.content()))
                }
                _ => format!("{prefix}{}", line.content()),
            }
        })
        .collect::<Vec<_>>();

    // the `↩` before it already shows the final line terminator
    let ends_with_terminator = lines.len() > 1
        && lines[last].kind() == LineKind::Context
        && lines[last].content().is_empty();
    if show_space && ends_with_terminator {
        rendered.pop();
    }

    rendered
}
