//! Browser DOM layer for the stillpage writing widget.
//!
//! This crate mounts a distraction-free editor widget onto a host page:
//! a content-editable surface with a persisted draft, five bound
//! appearance/sound controls, a live ink count, a document-title preview,
//! and optional per-keystroke sound. It assumes a `wasm32-unknown-unknown`
//! target environment.
//!
//! # Architecture
//!
//! - `storage`: localStorage persistence for configuration and draft
//! - `bind`: input-control to configuration-field bindings
//! - `style`: reflection of configuration into CSS properties
//! - `surface`: the editing surface (draft, statistics, paste fallback)
//! - `audio`: key-sound fetch/decode/playback around the core state machine
//! - `platform`: editing-capability probing
//! - `widget`: the explicit instance that owns all of the above
//!
//! # Re-exports
//!
//! This crate re-exports `stillpage-core` for convenience, so consumers
//! only need to depend on `stillpage-browser`.

// Re-export core crate
pub use stillpage_core;
pub use stillpage_core::*;

pub mod audio;
pub mod bind;
pub mod platform;
pub mod storage;
pub mod style;
pub mod surface;
pub mod widget;

pub use audio::KeySoundPlayer;
pub use widget::{Widget, WidgetError};

use wasm_bindgen::prelude::*;

/// Install the panic hook and the console tracing subscriber.
///
/// Runs once when the wasm module is instantiated, before the host page
/// calls [`mount`].
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let console_level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );
}

/// Mount the widget onto the host page.
///
/// The widget owns every DOM listener it registers and lives for the
/// lifetime of the page (there is no teardown in a single-page context),
/// so the mounted value is intentionally leaked.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    let widget = Widget::mount()?;
    std::mem::forget(widget);
    Ok(())
}
