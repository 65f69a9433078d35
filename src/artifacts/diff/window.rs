use crate::artifacts::diff::group::Segment;
use derive_new::new;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Context,
    Added,
    Removed,
    Ellipsis,
}

impl LineKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            LineKind::Context | LineKind::Ellipsis => "  ",
            LineKind::Added => "+ ",
            LineKind::Removed => "- ",
        }
    }
}

/// A line of the report before prefixing and whitespace markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct DisplayLine<'t> {
    kind: LineKind,
    content: &'t str,
}

impl<'t> DisplayLine<'t> {
    pub fn ellipsis() -> Self {
        DisplayLine::new(LineKind::Ellipsis, "")
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn content(&self) -> &'t str {
        self.content
    }
}

/// Where lines of an unchanged run were dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elision {
    None,
    Front,
    Middle,
    Back,
}

/// The part of an unchanged run that stays visible around its neighbouring changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextWindow<'s, 't> {
    head: &'s [&'t str],
    tail: &'s [&'t str],
    elision: Elision,
}

impl<'s, 't> ContextWindow<'s, 't> {
    fn whole(lines: &'s [&'t str]) -> Self {
        ContextWindow {
            head: lines,
            tail: &[],
            elision: Elision::None,
        }
    }

    /// Trims `lines` to `context` lines on every side that faces a change.
    ///
    /// `after_change` means a change precedes the run, `before_change` that one follows it.
    pub fn new(
        lines: &'s [&'t str],
        after_change: bool,
        before_change: bool,
        context: Option<usize>,
    ) -> Self {
        let Some(context) = context else {
            return Self::whole(lines);
        };
        let len = lines.len();

        match (after_change, before_change) {
            (true, true) if len > context.saturating_mul(2) => ContextWindow {
                head: &lines[..context],
                tail: &lines[len - context..],
                elision: Elision::Middle,
            },
            (false, true) if len > context => ContextWindow {
                head: &[],
                tail: &lines[len - context..],
                elision: Elision::Front,
            },
            (true, false) if len > context => ContextWindow {
                head: &lines[..context],
                tail: &[],
                elision: Elision::Back,
            },
            _ => Self::whole(lines),
        }
    }

    pub fn elision(&self) -> Elision {
        self.elision
    }

    pub fn is_truncated(&self) -> bool {
        self.elision != Elision::None
    }

    fn write_into(&self, out: &mut Vec<DisplayLine<'t>>) {
        let context = |line: &&'t str| DisplayLine::new(LineKind::Context, *line);

        if self.elision == Elision::Front {
            out.push(DisplayLine::ellipsis());
        }
        out.extend(self.head.iter().map(context));
        if self.elision == Elision::Middle {
            out.push(DisplayLine::ellipsis());
        }
        out.extend(self.tail.iter().map(context));
        if self.elision == Elision::Back {
            out.push(DisplayLine::ellipsis());
        }
    }
}

/// Lays segments out as display lines, collapsing unchanged runs to `context` lines.
///
/// A document without changes is never collapsed.
pub fn layout<'t>(segments: &[Segment<'t>], context: Option<usize>) -> Vec<DisplayLine<'t>> {
    let has_changes = segments.iter().any(Segment::is_changed);
    let context = context.filter(|_| has_changes);
    let mut out = Vec::new();

    for (i, segment) in segments.iter().enumerate() {
        match segment {
            Segment::Unchanged(lines) => {
                // segments alternate, so any neighbour of an unchanged run is a change
                let window = ContextWindow::new(lines, i > 0, i + 1 < segments.len(), context);
                if window.is_truncated() {
                    tracing::trace!(
                        segment = i,
                        lines = lines.len(),
                        elision = ?window.elision(),
                        "collapsed unchanged run"
                    );
                }
                window.write_into(&mut out);
            }
            Segment::Changed(group) => {
                out.extend(
                    group
                        .removed()
                        .iter()
                        .map(|line| DisplayLine::new(LineKind::Removed, *line)),
                );
                out.extend(
                    group
                        .added()
                        .iter()
                        .map(|line| DisplayLine::new(LineKind::Added, *line)),
                );
            }
        }
    }

    out
}
