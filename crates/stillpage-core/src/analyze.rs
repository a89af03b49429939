//! Draft text statistics: ink count and title derivation.
//!
//! All counts are in Unicode scalar values (chars), not bytes.

use smol_str::SmolStr;

/// Title shown when the draft has no visible content.
pub const TITLE_PLACEHOLDER: &str = "...";

/// Maximum title length before truncation kicks in.
pub const TITLE_MAX_CHARS: usize = 20;

/// Marker appended to truncated titles.
const ELLIPSIS: &str = "...";

/// Statistics derived from the current draft text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextStats {
    /// Non-whitespace character count ("ink" density, not word tokens).
    pub ink_count: usize,
    /// Page-title preview derived from the first line.
    pub title: SmolStr,
}

/// Derive both statistics in one pass over the draft.
pub fn stats(text: &str) -> TextStats {
    TextStats {
        ink_count: ink_count(text),
        title: derive_title(text),
    }
}

/// Count the characters that put ink on the page.
///
/// This is total chars minus whitespace chars, a deliberate proxy for
/// density rather than a dictionary word count.
pub fn ink_count(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Derive the document-title preview from the draft.
///
/// Leading whitespace is stripped, the first line is taken with its
/// internal spaces, and anything past 20 chars is truncated with an
/// ellipsis marker. A draft with no visible content titles as `"..."`.
pub fn derive_title(text: &str) -> SmolStr {
    let first_line = text
        .trim_start()
        .lines()
        .next()
        .unwrap_or("")
        .trim_end();

    if first_line.is_empty() {
        return SmolStr::new_static(TITLE_PLACEHOLDER);
    }

    if first_line.chars().count() <= TITLE_MAX_CHARS {
        return SmolStr::new(first_line);
    }

    let mut title: String = first_line.chars().take(TITLE_MAX_CHARS).collect();
    title.push_str(ELLIPSIS);
    SmolStr::new(title)
}
