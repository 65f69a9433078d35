use regex::Regex;
use std::sync::LazyLock;

static HORIZONTAL_SPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[ \t\x{200B}]+").expect("HORIZONTAL_SPACE is a valid regex pattern")
});
static VERTICAL_SPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x0C\r\x0B]").expect("VERTICAL_SPACE is a valid regex pattern")
});
static LINE_START_SPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n[ \x{200B}]").expect("LINE_START_SPACE is a valid regex pattern")
});
static LINE_END_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" \n").expect("LINE_END_SPACE is a valid regex pattern"));
static TEXT_START_SPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A[ \x{200B}\n]*").expect("TEXT_START_SPACE is a valid regex pattern")
});
static TEXT_END_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \n]*\z").expect("TEXT_END_SPACE is a valid regex pattern"));
static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\n\x0C\r\x0B]+").expect("BLANK_LINES is a valid regex pattern")
});

/// Normalizes whitespace for a relaxed comparison.
///
/// Horizontal whitespace collapses to one space, vertical whitespace becomes a
/// line feed, lines and the whole text are trimmed and blank lines are removed.
pub fn normalize(text: &str) -> String {
    let text = HORIZONTAL_SPACE.replace_all(text, " ");
    let text = VERTICAL_SPACE.replace_all(&text, "\n");
    let text = LINE_START_SPACE.replace_all(&text, "\n");
    let text = LINE_END_SPACE.replace_all(&text, "\n");
    let text = TEXT_START_SPACE.replace(&text, "");
    let text = TEXT_END_SPACE.replace(&text, "");
    BLANK_LINES.replace_all(&text, "\n").into_owned()
}
