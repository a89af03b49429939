//! stillpage-core: pure widget logic without browser dependencies.
//!
//! This crate holds everything about the writing widget that does not need
//! a DOM: the configuration model and its merge semantics, draft text
//! statistics, color derivation, keystroke classification, font-stack
//! resolution, and the key-sound readiness state machine. It compiles and
//! tests on native targets; `stillpage-browser` layers the DOM on top.

pub mod analyze;
pub mod color;
pub mod config;
pub mod fonts;
pub mod keys;
pub mod sound;

pub use analyze::{TextStats, derive_title, ink_count, stats};
pub use color::derive_color;
pub use config::{Config, Setting};
pub use fonts::resolve_stack;
pub use keys::is_typing_key;
pub use smol_str::SmolStr;
pub use sound::{CuePhase, CueState, DecodeTicket, SelectOutcome, SoundChoice};
