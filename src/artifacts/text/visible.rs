use std::borrow::Cow;

pub const RETURN_MARKER: &str = "↩";
pub const ELLIPSIS: &str = "⋮";

const WHITESPACE_MARKERS: phf::Map<char, &'static str> = phf::phf_map! {
    ' ' => "·",
    '\t' => "  → ",
};

/// Replaces spaces and tabs with visible markers.
pub fn show_whitespace(line: &str) -> Cow<'_, str> {
    if !line.chars().any(|c| WHITESPACE_MARKERS.contains_key(&c)) {
        return Cow::Borrowed(line);
    }

    let mut shown = String::with_capacity(line.len() * 2);
    for c in line.chars() {
        match WHITESPACE_MARKERS.get(&c) {
            Some(marker) => shown.push_str(marker),
            None => shown.push(c),
        }
    }

    Cow::Owned(shown)
}
