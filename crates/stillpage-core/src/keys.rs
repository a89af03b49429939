//! Keystroke classification for key-sound triggering.
//!
//! Classification operates on `KeyboardEvent.code` (physical key) values,
//! which are stable across layouts and IME state. IME composition is
//! filtered by the caller from the event's `isComposing` flag before
//! classification.

/// Punctuation keys that count as typing.
const PUNCTUATION_CODES: &[&str] = &[
    "Backquote",
    "Quote",
    "Slash",
    "Backslash",
    "Minus",
    "Equal",
    "BracketLeft",
    "BracketRight",
    "Comma",
    "Semicolon",
    "Period",
];

/// Is this a typing keystroke that should produce a sound?
///
/// Letters, digits, Enter, Space, Backspace and the fixed punctuation set
/// qualify; arrows, modifiers, function keys and everything else do not.
pub fn is_typing_key(code: &str) -> bool {
    if let Some(letter) = code.strip_prefix("Key") {
        return letter.len() == 1 && letter.bytes().all(|b| b.is_ascii_uppercase());
    }
    if let Some(digit) = code.strip_prefix("Digit") {
        return digit.len() == 1 && digit.bytes().all(|b| b.is_ascii_digit());
    }
    matches!(code, "Enter" | "Space" | "Backspace") || PUNCTUATION_CODES.contains(&code)
}
