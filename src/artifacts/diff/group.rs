use crate::artifacts::diff::operation::{DiffOperation, OperationKind};

/// One logical change: everything between two unchanged runs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiffGroup<'t> {
    removed: Vec<&'t str>,
    added: Vec<&'t str>,
    runs: usize,
    last_kind: Option<OperationKind>,
}

impl<'t> DiffGroup<'t> {
    pub fn removed(&self) -> &[&'t str] {
        &self.removed
    }

    pub fn added(&self) -> &[&'t str] {
        &self.added
    }

    /// Number of distinct added/removed runs that were merged into this group.
    pub fn runs(&self) -> usize {
        self.runs
    }

    fn push_removed(&mut self, lines: Vec<&'t str>) {
        self.start_run(OperationKind::Removed);
        self.removed.extend(lines);
    }

    fn push_added(&mut self, lines: Vec<&'t str>) {
        self.start_run(OperationKind::Added);
        self.added.extend(lines);
    }

    fn start_run(&mut self, kind: OperationKind) {
        if self.last_kind != Some(kind) {
            self.runs += 1;
            self.last_kind = Some(kind);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'t> {
    Unchanged(Vec<&'t str>),
    Changed(DiffGroup<'t>),
}

impl<'t> Segment<'t> {
    pub fn is_changed(&self) -> bool {
        matches!(self, Segment::Changed(_))
    }
}

/// Splits an operation sequence into alternating unchanged runs and change groups.
///
/// Empty operations are dropped, so two segments of the same variant are never
/// adjacent in the result.
pub fn partition(operations: Vec<DiffOperation<'_>>) -> Vec<Segment<'_>> {
    let mut segments: Vec<Segment<'_>> = Vec::new();
    let mut group: Option<DiffGroup<'_>> = None;

    for operation in operations.into_iter().filter(|op| !op.lines().is_empty()) {
        match operation.kind() {
            OperationKind::Removed => group
                .get_or_insert_with(DiffGroup::default)
                .push_removed(operation.into_lines()),
            OperationKind::Added => group
                .get_or_insert_with(DiffGroup::default)
                .push_added(operation.into_lines()),
            OperationKind::Equal => {
                if let Some(group) = group.take() {
                    segments.push(Segment::Changed(group));
                }
                if let Some(Segment::Unchanged(lines)) = segments.last_mut() {
                    lines.extend(operation.into_lines());
                } else {
                    segments.push(Segment::Unchanged(operation.into_lines()));
                }
            }
        }
    }

    if let Some(group) = group {
        segments.push(Segment::Changed(group));
    }

    segments
}
