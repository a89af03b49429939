//! Color derivation for editor styling.
//!
//! Configuration colors are 6-hex-digit strings with an optional leading
//! `#`. Derived presentation colors embed the parsed channels into an
//! `rgba()` expression with a caller-supplied alpha.

use std::sync::OnceLock;

use regex_lite::Regex;

/// Fallback for colors that do not match the 6-hex-digit pattern.
pub const OPAQUE_BLACK: &str = "rgba(0, 0, 0, 1)";

fn hex_pattern() -> &'static Regex {
    static HEX: OnceLock<Regex> = OnceLock::new();
    HEX.get_or_init(|| {
        Regex::new("^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").unwrap()
    })
}

/// Parse a `#RRGGBB` color into its three 8-bit channels.
pub fn parse_hex(color: &str) -> Option<[u8; 3]> {
    let caps = hex_pattern().captures(color)?;
    let mut channels = [0u8; 3];
    for (i, channel) in channels.iter_mut().enumerate() {
        *channel = u8::from_str_radix(caps.get(i + 1)?.as_str(), 16).ok()?;
    }
    Some(channels)
}

/// Derive a CSS rgba() string from a hex color and an alpha override.
///
/// Malformed colors fall back to fully opaque black instead of producing
/// a broken style string.
pub fn derive_color(color: &str, alpha: f32) -> String {
    match parse_hex(color) {
        Some([r, g, b]) => format!("rgba({r}, {g}, {b}, {alpha})"),
        None => {
            tracing::debug!(value = color, "invalid color, using opaque black");
            OPAQUE_BLACK.to_string()
        }
    }
}
