//! Widget assembly: the explicit instance that owns all live state.
//!
//! Everything that was ambient in a loose script - the configuration
//! object, the audio handle, the readiness flag, every DOM listener - is a
//! field of `Widget`, constructed once at startup. There is no teardown in
//! a single-page context.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use stillpage_core::sound::SoundChoice;
use stillpage_core::{Config, Setting};

use crate::audio::KeySoundPlayer;
use crate::bind::SettingBinding;
use crate::storage;
use crate::style::StyleTargets;
use crate::surface::Surface;

/// Selector of the content-editable editing surface.
const EDITOR_SELECTOR: &str = "#editor";

/// Selector of the ink-count display element.
const COUNTER_SELECTOR: &str = "#word-count";

/// Mount failures. None of these can occur on a host page that provides
/// the documented DOM contract.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("document has no body")]
    NoBody,
    #[error("missing element {0}")]
    MissingElement(&'static str),
    #[error("element {0} has the wrong type")]
    WrongElementType(&'static str),
    #[error("query for {selector} failed: {message}")]
    QueryFailed {
        selector: &'static str,
        message: String,
    },
}

impl From<WidgetError> for JsValue {
    fn from(err: WidgetError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// The mounted editor widget.
pub struct Widget {
    config: Rc<RefCell<Config>>,
    player: KeySoundPlayer,
    _bindings: Vec<SettingBinding>,
    _surface: Surface,
    _unlock_listeners: Vec<EventListener>,
}

impl Widget {
    /// Mount onto the current page's document.
    pub fn mount() -> Result<Self, WidgetError> {
        Self::mount_in(&gloo_utils::document())
    }

    /// Mount against an explicit document (also used by the browser tests).
    pub fn mount_in(document: &Document) -> Result<Self, WidgetError> {
        let body = document.body().ok_or(WidgetError::NoBody)?;
        let editor: HtmlElement = query(document, EDITOR_SELECTOR)?;
        let counter: HtmlElement = query(document, COUNTER_SELECTOR)?;

        let config = Rc::new(RefCell::new(storage::load_config()));
        let targets = StyleTargets {
            body,
            editor: editor.clone(),
            counter: counter.clone(),
        };

        let player = KeySoundPlayer::new();
        let unlock_listeners = player.install_unlock_listeners(document);

        let mut bindings = Vec::with_capacity(Setting::ALL.len());
        for setting in Setting::ALL {
            let control: Element = query(document, control_selector(setting))?;
            let observer = observer_for(setting, &targets, &player);
            bindings.push(SettingBinding::attach(
                control,
                setting,
                config.clone(),
                observer,
            ));
        }

        let surface = Surface::mount(document, editor, counter, player.clone());

        tracing::info!("widget mounted");

        Ok(Self {
            config,
            player,
            _bindings: bindings,
            _surface: surface,
            _unlock_listeners: unlock_listeners,
        })
    }

    /// Snapshot of the in-memory configuration.
    pub fn config(&self) -> Config {
        self.config.borrow().clone()
    }

    /// Handle to the key-sound player.
    pub fn player(&self) -> &KeySoundPlayer {
        &self.player
    }
}

fn control_selector(setting: Setting) -> &'static str {
    match setting {
        Setting::FontFamily => "#font-family",
        Setting::FontSize => "#font-size",
        Setting::TextColor => "#text-color",
        Setting::BackgroundColor => "#background-color",
        Setting::KeySound => "#key-sound",
    }
}

/// The observer invoked with this setting's value at load and on change.
fn observer_for(
    setting: Setting,
    targets: &StyleTargets,
    player: &KeySoundPlayer,
) -> Box<dyn Fn(&str)> {
    match setting {
        Setting::FontFamily => {
            let targets = targets.clone();
            Box::new(move |value| targets.apply_font_family(value))
        }
        Setting::FontSize => {
            let targets = targets.clone();
            Box::new(move |value| targets.apply_font_size(value))
        }
        Setting::TextColor => {
            let targets = targets.clone();
            Box::new(move |value| targets.apply_text_color(value))
        }
        Setting::BackgroundColor => {
            let targets = targets.clone();
            Box::new(move |value| targets.apply_background(value))
        }
        Setting::KeySound => {
            let player = player.clone();
            Box::new(move |value| player.select(SoundChoice::parse(value)))
        }
    }
}

fn query<T: JsCast>(document: &Document, selector: &'static str) -> Result<T, WidgetError> {
    let element = document
        .query_selector(selector)
        .map_err(|err| WidgetError::QueryFailed {
            selector,
            message: format!("{err:?}"),
        })?
        .ok_or(WidgetError::MissingElement(selector))?;
    element
        .dyn_into()
        .map_err(|_| WidgetError::WrongElementType(selector))
}
