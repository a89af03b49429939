//! Reflection of configuration values into page presentation.
//!
//! Each apply function is the observer for one bound setting: it runs once
//! at load (so the page matches stored state) and again on every change of
//! its control. Style writes that cannot meaningfully fail are discarded.

use web_sys::HtmlElement;

use stillpage_core::{color, fonts};

/// Alpha of the editor border tint derived from the text color.
const BORDER_ALPHA: f32 = 0.3;

/// Alpha of the ink-count display color derived from the text color.
const COUNTER_ALPHA: f32 = 0.5;

/// Letter spacing grows with font size at this ratio so large text does
/// not read cramped.
const LETTER_SPACING_DIVISOR: f64 = 25.0;

/// The elements styling writes to.
#[derive(Clone)]
pub struct StyleTargets {
    /// Page body: font family and background.
    pub body: HtmlElement,
    /// The editing surface.
    pub editor: HtmlElement,
    /// The ink-count display.
    pub counter: HtmlElement,
}

impl StyleTargets {
    /// Apply the font-family setting to the whole page.
    pub fn apply_font_family(&self, family: &str) {
        let _ = self
            .body
            .style()
            .set_property("font-family", fonts::resolve_stack(family));
    }

    /// Apply the font-size setting to the editor and the counter.
    pub fn apply_font_size(&self, raw: &str) {
        let Some(size) = parse_px(raw) else {
            tracing::debug!(value = raw, "ignoring non-numeric font size");
            return;
        };
        let editor = self.editor.style();
        let _ = editor.set_property("font-size", &format!("{size}px"));
        let _ = editor.set_property(
            "letter-spacing",
            &format!("{}px", size / LETTER_SPACING_DIVISOR),
        );
        let _ = self
            .counter
            .style()
            .set_property("font-size", &format!("{size}px"));
    }

    /// Apply the text-color setting: editor text, border tint, counter tint.
    pub fn apply_text_color(&self, color: &str) {
        let editor = self.editor.style();
        let _ = editor.set_property("color", color);
        let _ = editor.set_property(
            "border-color",
            &color::derive_color(color, BORDER_ALPHA),
        );
        let _ = self
            .counter
            .style()
            .set_property("color", &color::derive_color(color, COUNTER_ALPHA));
    }

    /// Apply the background-color setting to the page body.
    pub fn apply_background(&self, color: &str) {
        let _ = self.body.style().set_property("background-color", color);
    }
}

fn parse_px(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|size| size.is_finite() && *size > 0.0)
}
