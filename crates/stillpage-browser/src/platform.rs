//! Editing-capability probing for the host browser.
//!
//! Probes run once and are cached for the page lifetime.

use std::sync::OnceLock;

use wasm_bindgen::JsCast;

/// Cached capability probe results.
#[derive(Debug, Clone, Copy)]
pub struct EditingSupport {
    /// Does `contenteditable="plaintext-only"` work here?
    ///
    /// When absent, the surface falls back to `contenteditable="true"`
    /// plus a paste sanitizer.
    pub plaintext_only: bool,
}

static SUPPORT: OnceLock<EditingSupport> = OnceLock::new();

/// Get cached capability info. Detection runs once on first call.
pub fn editing_support() -> EditingSupport {
    *SUPPORT.get_or_init(detect)
}

fn detect() -> EditingSupport {
    let unsupported = EditingSupport {
        plaintext_only: false,
    };

    let Some(window) = web_sys::window() else {
        return unsupported;
    };
    let Some(document) = window.document() else {
        return unsupported;
    };
    let Ok(probe) = document.create_element("div") else {
        return unsupported;
    };
    if probe
        .set_attribute("contenteditable", "plaintext-only")
        .is_err()
    {
        return unsupported;
    }

    // The contentEditable getter reports "inherit" when the attribute
    // value is not a state the engine knows.
    let plaintext_only = probe
        .dyn_ref::<web_sys::HtmlElement>()
        .map(|el| el.content_editable() == "plaintext-only")
        .unwrap_or(false);

    EditingSupport { plaintext_only }
}
