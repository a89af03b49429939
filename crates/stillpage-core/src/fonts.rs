//! Font-family resolution.
//!
//! The font control offers a few short codes for common CJK faces; anything
//! else is treated as raw font-family text and passed through unchanged.

/// Short code to full font-stack translations.
const FONT_STACKS: &[(&str, &str)] = &[
    ("kai", "\"Kaiti SC\", KaiTi, STKaiti, serif"),
    ("song", "\"Songti SC\", SimSun, STSong, serif"),
    ("hei", "\"Heiti SC\", SimHei, STHeiti, sans-serif"),
    ("fangsong", "\"FangSong SC\", FangSong, STFangsong, serif"),
];

/// Resolve a configured font value to the stack handed to CSS.
pub fn resolve_stack(family: &str) -> &str {
    FONT_STACKS
        .iter()
        .find(|(code, _)| *code == family)
        .map(|(_, stack)| *stack)
        .unwrap_or(family)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_codes_expand() {
        assert!(resolve_stack("kai").contains("KaiTi"));
        assert!(resolve_stack("song").contains("SimSun"));
        assert!(resolve_stack("hei").contains("SimHei"));
        assert!(resolve_stack("fangsong").contains("FangSong"));
    }

    #[test]
    fn test_unknown_values_pass_through() {
        assert_eq!(resolve_stack("sans-serif"), "sans-serif");
        assert_eq!(resolve_stack("Georgia, serif"), "Georgia, serif");
        assert_eq!(resolve_stack(""), "");
    }
}
