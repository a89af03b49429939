//! WASM browser tests for stillpage-browser.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use gloo_storage::{LocalStorage, Storage};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, HtmlInputElement, HtmlSelectElement};

use stillpage_browser::bind::control_value;
use stillpage_browser::sound::CuePhase;
use stillpage_browser::{Config, Widget, platform, storage};

fn document() -> Document {
    gloo_utils::document()
}

/// Rebuild the host-page DOM contract inside the test page's body.
fn build_contract(document: &Document) {
    let body = document.body().expect("test page has a body");
    body.set_inner_html(concat!(
        r##"<div id="editor"></div>"##,
        r##"<span id="word-count"></span>"##,
        r##"<select id="font-family">"##,
        r##"<option value="sans-serif">sans-serif</option>"##,
        r##"<option value="kai">kai</option>"##,
        r##"</select>"##,
        r##"<input id="font-size" type="number">"##,
        r##"<input id="text-color" type="text">"##,
        r##"<input id="background-color" type="text">"##,
        r##"<select id="key-sound">"##,
        r##"<option value="none">none</option>"##,
        r##"<option value="click">click</option>"##,
        r##"<option value="pop">pop</option>"##,
        r##"</select>"##,
    ));
}

fn clear_storage() {
    LocalStorage::delete(storage::CONFIG_KEY);
    LocalStorage::delete(storage::DRAFT_KEY);
}

fn element(document: &Document, selector: &str) -> HtmlElement {
    document
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("missing {selector}"))
        .dyn_into()
        .unwrap()
}

fn fire(target: &web_sys::EventTarget, kind: &str) {
    let event = Event::new(kind).unwrap();
    target.dispatch_event(&event).unwrap();
}

// === Storage tests ===

#[wasm_bindgen_test]
fn test_load_config_defaults_when_absent() {
    clear_storage();
    assert_eq!(storage::load_config(), Config::default());
}

#[wasm_bindgen_test]
fn test_load_config_recovers_from_malformed_blob() {
    clear_storage();
    LocalStorage::raw()
        .set_item(storage::CONFIG_KEY, "{definitely not json")
        .unwrap();
    assert_eq!(storage::load_config(), Config::default());
}

#[wasm_bindgen_test]
fn test_load_config_merges_partial_blob() {
    clear_storage();
    LocalStorage::raw()
        .set_item(storage::CONFIG_KEY, r#"{"fontSize": 20}"#)
        .unwrap();
    let config = storage::load_config();
    assert_eq!(
        config,
        Config {
            font_size: 20.0,
            ..Config::default()
        }
    );
}

#[wasm_bindgen_test]
fn test_config_round_trip() {
    clear_storage();
    let config = Config {
        font_family: "kai".into(),
        font_size: 22.0,
        text_color: "#112233".into(),
        background_color: "#FFEEDD".into(),
        key_sound: "click".into(),
    };
    storage::save_config(&config);
    assert_eq!(storage::load_config(), config);
}

#[wasm_bindgen_test]
fn test_draft_is_stored_as_raw_text() {
    clear_storage();
    storage::save_draft("line one\nline two");
    // No JSON quoting around the stored value.
    assert_eq!(
        LocalStorage::raw().get_item(storage::DRAFT_KEY).unwrap(),
        Some("line one\nline two".to_string())
    );
    assert_eq!(storage::load_draft().as_deref(), Some("line one\nline two"));
}

// === Control helpers ===

#[wasm_bindgen_test]
fn test_control_value_reads_inputs_and_selects() {
    let document = document();
    build_contract(&document);

    let input: HtmlInputElement = element(&document, "#font-size").dyn_into().unwrap();
    input.set_value("18");
    assert_eq!(control_value(&input).as_deref(), Some("18"));

    let select: HtmlSelectElement = element(&document, "#key-sound").dyn_into().unwrap();
    select.set_value("click");
    assert_eq!(control_value(&select).as_deref(), Some("click"));
}

// === Widget mount tests ===

#[wasm_bindgen_test]
fn test_mount_fails_without_contract() {
    let document = document();
    let body = document.body().unwrap();
    body.set_inner_html("");
    assert!(Widget::mount_in(&document).is_err());
}

#[wasm_bindgen_test]
fn test_mount_applies_stored_config() {
    let document = document();
    build_contract(&document);
    clear_storage();
    LocalStorage::raw()
        .set_item(
            storage::CONFIG_KEY,
            r##"{"fontSize": 20, "textColor": "#336699"}"##,
        )
        .unwrap();

    let _widget = Widget::mount_in(&document).expect("mount");

    // Controls display stored state.
    let size: HtmlInputElement = element(&document, "#font-size").dyn_into().unwrap();
    assert_eq!(size.value(), "20");

    // Editor styling reflects stored state.
    let editor = element(&document, "#editor");
    let style = editor.style();
    assert_eq!(style.get_property_value("font-size").unwrap(), "20px");
    assert_eq!(style.get_property_value("letter-spacing").unwrap(), "0.8px");
    assert!(
        style
            .get_property_value("color")
            .unwrap()
            .contains("51, 102, 153")
    );
    assert!(
        style
            .get_property_value("border-color")
            .unwrap()
            .contains("0.3")
    );

    // The counter mirrors the font size and carries the 0.5 tint.
    let counter = element(&document, "#word-count");
    assert_eq!(
        counter.style().get_property_value("font-size").unwrap(),
        "20px"
    );
    assert!(
        counter
            .style()
            .get_property_value("color")
            .unwrap()
            .contains("0.5")
    );
}

#[wasm_bindgen_test]
fn test_mount_restores_draft_and_stats() {
    let document = document();
    build_contract(&document);
    clear_storage();
    storage::save_draft("quiet morning\nsecond line");

    let _widget = Widget::mount_in(&document).expect("mount");

    let editor = element(&document, "#editor");
    assert_eq!(
        editor.text_content().as_deref(),
        Some("quiet morning\nsecond line")
    );
    let counter = element(&document, "#word-count");
    assert_eq!(counter.text_content().as_deref(), Some("22"));
    assert_eq!(document.title(), "quiet morning");
}

#[wasm_bindgen_test]
fn test_mount_sets_editing_mode() {
    let document = document();
    build_contract(&document);
    clear_storage();

    let _widget = Widget::mount_in(&document).expect("mount");

    let mode = element(&document, "#editor")
        .get_attribute("contenteditable")
        .unwrap();
    if platform::editing_support().plaintext_only {
        assert_eq!(mode, "plaintext-only");
    } else {
        assert_eq!(mode, "true");
    }
}

#[wasm_bindgen_test]
fn test_control_edit_applies_and_persists() {
    let document = document();
    build_contract(&document);
    clear_storage();

    let _widget = Widget::mount_in(&document).expect("mount");

    let size: HtmlInputElement = element(&document, "#font-size").dyn_into().unwrap();
    size.set_value("24");
    fire(&size, "input");

    let editor = element(&document, "#editor");
    assert_eq!(
        editor.style().get_property_value("font-size").unwrap(),
        "24px"
    );
    // Persisted synchronously, whole blob.
    assert_eq!(storage::load_config().font_size, 24.0);
}

#[wasm_bindgen_test]
fn test_input_persists_draft_and_updates_title() {
    let document = document();
    build_contract(&document);
    clear_storage();

    let _widget = Widget::mount_in(&document).expect("mount");

    let editor = element(&document, "#editor");
    editor.set_text_content(Some("hello wide world"));
    fire(&editor, "input");

    assert_eq!(storage::load_draft().as_deref(), Some("hello wide world"));
    let counter = element(&document, "#word-count");
    assert_eq!(counter.text_content().as_deref(), Some("14"));
    assert_eq!(document.title(), "hello wide world");
}

#[wasm_bindgen_test]
fn test_lone_newline_is_cleared() {
    let document = document();
    build_contract(&document);
    clear_storage();

    let _widget = Widget::mount_in(&document).expect("mount");

    let editor = element(&document, "#editor");
    editor.set_text_content(Some("\n"));
    fire(&editor, "input");

    assert_eq!(editor.text_content().as_deref(), Some(""));
    assert_eq!(storage::load_draft().as_deref(), Some(""));
    assert_eq!(document.title(), "...");
}

// === Key-sound wiring ===

#[wasm_bindgen_test]
fn test_sound_selection_waits_for_unlock() {
    let document = document();
    build_contract(&document);
    clear_storage();
    LocalStorage::raw()
        .set_item(storage::CONFIG_KEY, r#"{"keySound": "click"}"#)
        .unwrap();

    let widget = Widget::mount_in(&document).expect("mount");

    // Bound at load, but no user interaction has happened yet.
    assert_eq!(widget.player().phase(), CuePhase::Pending);
}

#[wasm_bindgen_test]
fn test_selecting_none_disables_player() {
    let document = document();
    build_contract(&document);
    clear_storage();
    LocalStorage::raw()
        .set_item(storage::CONFIG_KEY, r#"{"keySound": "click"}"#)
        .unwrap();

    let widget = Widget::mount_in(&document).expect("mount");
    assert_eq!(widget.player().phase(), CuePhase::Pending);

    let select: HtmlSelectElement = element(&document, "#key-sound").dyn_into().unwrap();
    select.set_value("none");
    fire(&select, "input");

    assert_eq!(widget.player().phase(), CuePhase::Disabled);
    assert_eq!(storage::load_config().key_sound, "none");
}
