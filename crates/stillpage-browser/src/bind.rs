//! Input-control bindings: one control per configuration field.
//!
//! A binding is an owned value, not a fire-and-forget callback: on
//! creation the control is initialized from the stored configuration and
//! the observer runs once, so visual state matches stored state on load.
//! Afterwards every edit of the control runs the observer with the new
//! value, writes it into the shared configuration, and persists the whole
//! blob synchronously. Dropping the binding detaches its listener.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement};

use stillpage_core::{Config, Setting};

use crate::storage;

/// A live control-to-setting binding.
pub struct SettingBinding {
    _listener: EventListener,
}

impl SettingBinding {
    /// Wire `control` to `setting`, invoking `observer` now and on every
    /// subsequent edit.
    pub fn attach(
        control: Element,
        setting: Setting,
        config: Rc<RefCell<Config>>,
        observer: impl Fn(&str) + 'static,
    ) -> Self {
        let initial = setting.display_value(&config.borrow());
        set_control_value(&control, &initial);
        observer(&initial);

        let target = control.clone();
        let listener = EventListener::new(&control, "input", move |_event| {
            let Some(value) = control_value(&target) else {
                return;
            };
            observer(&value);
            let mut config = config.borrow_mut();
            setting.store(&mut config, &value);
            storage::save_config(&config);
        });

        Self {
            _listener: listener,
        }
    }
}

/// Read the `value` property of an input or select control.
pub fn control_value(control: &Element) -> Option<String> {
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = control.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    None
}

fn set_control_value(control: &Element, value: &str) {
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(select) = control.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
    }
}
