use crate::artifacts::diff::group::Segment;
use serde::Deserialize;

/// How the changes of a report are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CountingRule {
    /// A removed run directly followed by an added run is one change.
    #[default]
    Grouped,
    /// Every added or removed run is a change of its own, so a replaced line counts twice.
    PerOperation,
}

impl CountingRule {
    pub fn count(&self, segments: &[Segment<'_>]) -> usize {
        let groups = segments.iter().filter_map(|segment| match segment {
            Segment::Changed(group) => Some(group),
            Segment::Unchanged(_) => None,
        });

        match self {
            CountingRule::Grouped => groups.count(),
            CountingRule::PerOperation => groups.map(|group| group.runs()).sum(),
        }
    }
}

/// Options of a single comparison. Every field toggles independently.
///
/// Deserializes from the camelCase keys `showSpace`, `relaxedSpace`, `context`
/// and `counting`; missing keys fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiffOptions {
    /// Render spaces, tabs and line ends with visible markers.
    pub show_space: bool,
    /// Normalize whitespace and drop blank lines on both sides before diffing.
    pub relaxed_space: bool,
    /// Unchanged lines kept around each change; `None` keeps everything.
    pub context: Option<usize>,
    pub counting: CountingRule,
}

impl DiffOptions {
    pub fn with_show_space(mut self, show_space: bool) -> Self {
        self.show_space = show_space;
        self
    }

    pub fn with_relaxed_space(mut self, relaxed_space: bool) -> Self {
        self.relaxed_space = relaxed_space;
        self
    }

    pub fn with_context(mut self, context: usize) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_counting(mut self, counting: CountingRule) -> Self {
        self.counting = counting;
        self
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
