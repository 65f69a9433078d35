use derive_new::new;
use similar::{Algorithm, DiffTag, capture_diff_slices};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Equal,
    Added,
    Removed,
}

/// A run of lines sharing one operation kind, in document order.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffOperation<'t> {
    kind: OperationKind,
    lines: Vec<&'t str>,
}

impl<'t> DiffOperation<'t> {
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn lines(&self) -> &[&'t str] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<&'t str> {
        self.lines
    }

    pub fn is_change(&self) -> bool {
        self.kind != OperationKind::Equal
    }

    /// Line diff of `actual` against the `expected` baseline.
    ///
    /// Runs Myers' algorithm in linear space, so memory stays proportional to
    /// the number of lines even when the two sides share nothing.
    pub fn between(expected: &[&'t str], actual: &[&'t str]) -> Vec<Self> {
        let mut operations: Vec<DiffOperation<'t>> = Vec::new();
        let mut push = |kind: OperationKind, lines: &[&'t str]| match operations.last_mut() {
            Some(last) if last.kind == kind => last.lines.extend_from_slice(lines),
            _ if lines.is_empty() => {}
            _ => operations.push(DiffOperation::new(kind, lines.to_vec())),
        };

        for op in capture_diff_slices(Algorithm::Myers, expected, actual) {
            let (tag, old, new) = op.as_tag_tuple();
            match tag {
                DiffTag::Equal => push(OperationKind::Equal, &expected[old]),
                DiffTag::Delete => push(OperationKind::Removed, &expected[old]),
                DiffTag::Insert => push(OperationKind::Added, &actual[new]),
                DiffTag::Replace => {
                    push(OperationKind::Removed, &expected[old]);
                    push(OperationKind::Added, &actual[new]);
                }
            }
        }

        operations
    }
}
