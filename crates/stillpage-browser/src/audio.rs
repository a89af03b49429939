//! Key-sound preparation and playback.
//!
//! Wraps the pure `CueState` machine with the browser half: a lazily
//! created `AudioContext`, asset fetch and decode, one-shot unlock
//! listeners, and a fresh `AudioBufferSourceNode` per trigger so rapid
//! keystrokes overlap instead of waiting on a shared playback element.
//!
//! Both writers of the cue slot (the synchronous selection path and the
//! asynchronous decode completion) run on the one UI thread and go through
//! the shared state's epoch check, so a superseded decode is discarded
//! instead of installed.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AudioBuffer, AudioContext, Document, Response};

use stillpage_core::sound::{CuePhase, CueState, DecodeTicket, SelectOutcome, SoundChoice};

/// Events that count as the unlocking user interaction.
const UNLOCK_EVENTS: &[&str] = &["keydown", "pointerdown", "touchstart"];

struct PlayerInner {
    state: CueState,
    context: Option<AudioContext>,
    cue: Option<AudioBuffer>,
}

/// Shared handle to the key-sound player.
#[derive(Clone)]
pub struct KeySoundPlayer {
    inner: Rc<RefCell<PlayerInner>>,
}

impl Default for KeySoundPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl KeySoundPlayer {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(PlayerInner {
                state: CueState::new(),
                context: None,
                cue: None,
            })),
        }
    }

    /// Current readiness phase (diagnostics and tests).
    pub fn phase(&self) -> CuePhase {
        self.inner.borrow().state.phase()
    }

    /// Register the one-shot interaction listeners that unlock playback.
    ///
    /// Each listener removes itself after its first firing; the unlock
    /// flag inside `CueState` keeps the set of them idempotent. Installed
    /// at mount so a later sound selection knows interaction has already
    /// happened.
    pub fn install_unlock_listeners(&self, document: &Document) -> Vec<EventListener> {
        UNLOCK_EVENTS
            .iter()
            .map(|event| {
                let player = self.clone();
                EventListener::once(document, *event, move |_event| {
                    let ticket = player.inner.borrow_mut().state.unlock();
                    if let Some(ticket) = ticket {
                        player.spawn_decode(ticket);
                    }
                })
            })
            .collect()
    }

    /// React to a change of the key-sound setting.
    ///
    /// Any prepared cue is discarded immediately; a newly named sound
    /// either starts decoding or waits for the unlock interaction.
    pub fn select(&self, choice: SoundChoice) {
        let outcome = {
            let mut inner = self.inner.borrow_mut();
            inner.cue = None;
            inner.state.select(choice)
        };
        if let SelectOutcome::Decode(ticket) = outcome {
            self.spawn_decode(ticket);
        }
    }

    /// Play the prepared cue once. A silent no-op unless ready.
    pub fn play(&self) {
        let inner = self.inner.borrow();
        if !inner.state.can_play() {
            return;
        }
        let (Some(context), Some(cue)) = (&inner.context, &inner.cue) else {
            return;
        };
        if let Err(err) = trigger(context, cue) {
            tracing::debug!("cue playback failed: {err:?}");
        }
    }

    fn spawn_decode(&self, ticket: DecodeTicket) {
        let player = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match decode_asset(&player, &ticket).await {
                Ok(buffer) => {
                    let mut inner = player.inner.borrow_mut();
                    if inner.state.install(&ticket) {
                        inner.cue = Some(buffer);
                    }
                }
                Err(err) => {
                    tracing::warn!(
                        asset = %ticket.asset_url(),
                        "key-sound decode failed: {err:?}"
                    );
                    player.inner.borrow_mut().state.decode_failed(&ticket);
                }
            }
        });
    }

    /// Get the audio context, creating it on first use.
    ///
    /// Creation is deferred to the decode path, which only runs after the
    /// unlock interaction, per autoplay policy.
    fn ensure_context(&self) -> Result<AudioContext, JsValue> {
        let mut inner = self.inner.borrow_mut();
        if let Some(context) = &inner.context {
            return Ok(context.clone());
        }
        let context = AudioContext::new()?;
        inner.context = Some(context.clone());
        Ok(context)
    }
}

/// Fetch one audio asset and decode it into a reusable buffer.
async fn decode_asset(
    player: &KeySoundPlayer,
    ticket: &DecodeTicket,
) -> Result<AudioBuffer, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let response: Response = JsFuture::from(window.fetch_with_str(&ticket.asset_url()))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!(
            "asset fetch returned {}",
            response.status()
        )));
    }
    let bytes: js_sys::ArrayBuffer = JsFuture::from(response.array_buffer()?)
        .await?
        .dyn_into()?;

    let context = player.ensure_context()?;
    JsFuture::from(context.decode_audio_data(&bytes)?)
        .await?
        .dyn_into()
}

/// Start one playback of the decoded cue.
///
/// A fresh source node per trigger lets overlapping keystrokes each play
/// in full.
fn trigger(context: &AudioContext, cue: &AudioBuffer) -> Result<(), JsValue> {
    let source = context.create_buffer_source()?;
    source.set_buffer(Some(cue));
    source.connect_with_audio_node(&context.destination())?;
    source.start()?;
    Ok(())
}
