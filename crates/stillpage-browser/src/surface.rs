//! The editing surface: draft restore, persistence, statistics, key sounds.
//!
//! On mount the surface restores the persisted draft and runs one analysis
//! pass. Every input event then persists the full text synchronously and
//! re-renders the ink count and the document title. Qualifying keydowns
//! trigger the key-sound player; on engines without plain-text editing a
//! paste sanitizer strips rich content before insertion.

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, Document, HtmlElement, KeyboardEvent};

use stillpage_core::{analyze, keys};

use crate::audio::KeySoundPlayer;
use crate::platform;
use crate::storage;

/// The mounted editing surface. Owns its DOM listeners.
pub struct Surface {
    _listeners: Vec<EventListener>,
}

impl Surface {
    /// Wire the surface up: editing mode, draft restore, event handlers.
    pub fn mount(
        document: &Document,
        editor: HtmlElement,
        counter: HtmlElement,
        player: KeySoundPlayer,
    ) -> Self {
        let plaintext = platform::editing_support().plaintext_only;
        let mode = if plaintext { "plaintext-only" } else { "true" };
        let _ = editor.set_attribute("contenteditable", mode);

        // Restore the draft before the first analysis pass.
        editor.set_text_content(storage::load_draft().as_deref());
        render_stats(
            document,
            &counter,
            &editor.text_content().unwrap_or_default(),
        );

        let mut listeners = Vec::new();

        {
            let document = document.clone();
            let counter = counter.clone();
            let surface = editor.clone();
            listeners.push(EventListener::new(&editor, "input", move |_event| {
                let mut text = surface.text_content().unwrap_or_default();
                // Some engines leave a lone newline behind once the last
                // visible character is deleted; clear it for real.
                if text == "\n" {
                    surface.set_text_content(Some(""));
                    text.clear();
                }
                storage::save_draft(&text);
                render_stats(&document, &counter, &text);
            }));
        }

        listeners.push(EventListener::new(&editor, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if event.is_composing() {
                return;
            }
            if keys::is_typing_key(&event.code()) {
                player.play();
            }
        }));

        if !plaintext {
            tracing::debug!("plaintext-only editing unsupported, installing paste sanitizer");
            let document = document.clone();
            listeners.push(EventListener::new(&editor, "paste", move |event| {
                let Some(event) = event.dyn_ref::<ClipboardEvent>() else {
                    return;
                };
                event.prevent_default();
                let Some(transfer) = event.clipboard_data() else {
                    return;
                };
                let Ok(text) = transfer.get_data("text/plain") else {
                    return;
                };
                insert_plain_text(&document, &normalize_pasted(&text));
            }));
        }

        Self {
            _listeners: listeners,
        }
    }
}

/// Re-render the ink count and the document-title preview.
fn render_stats(document: &Document, counter: &HtmlElement, text: &str) {
    let stats = analyze::stats(text);
    counter.set_text_content(Some(&stats.ink_count.to_string()));
    document.set_title(&stats.title);
}

/// Normalize clipboard text before insertion: line endings and tabs.
fn normalize_pasted(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\t', "    ")
}

/// Insert text at the caret as plain content.
///
/// `insertText` dispatches a regular input event afterwards, so the
/// persistence/statistics path runs without special casing.
fn insert_plain_text(document: &Document, text: &str) {
    let Some(html) = document.dyn_ref::<web_sys::HtmlDocument>() else {
        return;
    };
    if let Err(err) = html.exec_command_with_show_ui_and_value("insertText", false, text) {
        tracing::warn!("paste insertion failed: {err:?}");
    }
}
