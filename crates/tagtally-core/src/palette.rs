//! Stable tag colors for the chart collaborator.
//!
//! A handful of common tags get fixed preset colors; everything else is
//! hashed into a fallback palette. The hash must be deterministic across
//! runs so a tag keeps its color between renders.

/// Preset colors for tags the UI ships with.
const PRESETS: &[(&str, &str)] = &[
    ("work", "#4e79a7"),
    ("personal", "#f28e2b"),
    ("gym", "#e15759"),
    ("recreation", "#76b7b2"),
    ("productivity", "#59a14f"),
    ("health", "#edc948"),
    ("study", "#b07aa1"),
    ("family", "#ff9da7"),
];

/// Fallback palette for user-defined tags.
const PALETTE: &[&str] = &[
    "#9c755f", "#bab0ac", "#86bcb6", "#d37295", "#fabfd2", "#b6992d",
    "#499894", "#f1ce63", "#a0cbe8", "#ffbe7d",
];

/// Hash a tag into a stable fallback-palette index.
///
/// Java-style 31-step accumulation over the tag's characters, wrapping in
/// i32, then `abs % palette size`. Same string, same index, every run.
fn palette_index(tag: &str) -> usize {
    let mut hash: i32 = 0;
    for c in tag.chars() {
        hash = hash.wrapping_mul(31).wrapping_add(c as i32);
    }
    hash.unsigned_abs() as usize % PALETTE.len()
}

/// Color for a tag outside the preset set.
pub fn custom_tag_color(tag: &str) -> &'static str {
    PALETTE[palette_index(tag)]
}

/// Color for any tag: preset if known, hashed fallback otherwise.
pub fn tag_color(tag: &str) -> &'static str {
    PRESETS
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, color)| *color)
        .unwrap_or_else(|| custom_tag_color(tag))
}
