//! Key-sound readiness state machine.
//!
//! Browsers refuse audio playback before a user interaction, and asset
//! decoding is asynchronous, so "which cue is active" needs more care than
//! a single field: a sound can be selected before playback is unlocked,
//! and a decode for one selection can finish after the user has already
//! picked another. This module keeps those rules pure and natively
//! testable; the browser layer supplies the actual fetch/decode/playback.
//!
//! Phases:
//! - `Disabled`: no sound selected.
//! - `Pending`: a sound is selected but no decoded cue is installed yet
//!   (waiting for the unlock interaction, or a decode is in flight).
//! - `Ready`: a decoded cue is installed and playable.
//!
//! Every selection bumps an epoch; decode tickets carry the epoch they
//! were issued under, and a completed decode only installs if its epoch is
//! still current. A stale decode can therefore never clobber a newer
//! selection.

use smol_str::SmolStr;

/// Control value meaning "no key sound".
pub const MUTED_SENTINEL: &str = "none";

/// Relative directory holding the `<sound-id>.wav` assets.
pub const SOUND_ASSET_DIR: &str = "assets/sounds";

/// The user's key-sound selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SoundChoice {
    /// The `"none"` sentinel.
    Muted,
    /// A named cue asset.
    Cue(SmolStr),
}

impl SoundChoice {
    /// Parse a raw control value. Empty input counts as muted.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == MUTED_SENTINEL {
            SoundChoice::Muted
        } else {
            SoundChoice::Cue(raw.into())
        }
    }
}

/// Readiness of the key-sound player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CuePhase {
    Disabled,
    Pending,
    Ready,
}

/// Tag for one asynchronous decode request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeTicket {
    epoch: u64,
    name: SmolStr,
}

impl DecodeTicket {
    /// Name of the cue this decode was issued for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Relative URL of the asset to fetch.
    pub fn asset_url(&self) -> String {
        format!("{SOUND_ASSET_DIR}/{}.wav", self.name)
    }
}

/// What the driver must do after a selection change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Sound disabled; any prepared cue has been discarded.
    Disabled,
    /// Wait for the first user interaction before decoding.
    AwaitUnlock,
    /// Start decoding now.
    Decode(DecodeTicket),
}

/// The key-sound state machine.
#[derive(Clone, Debug)]
pub struct CueState {
    choice: SoundChoice,
    phase: CuePhase,
    unlocked: bool,
    epoch: u64,
}

impl Default for CueState {
    fn default() -> Self {
        Self::new()
    }
}

impl CueState {
    /// A fresh machine: disabled, locked.
    pub fn new() -> Self {
        Self {
            choice: SoundChoice::Muted,
            phase: CuePhase::Disabled,
            unlocked: false,
            epoch: 0,
        }
    }

    pub fn phase(&self) -> CuePhase {
        self.phase
    }

    pub fn choice(&self) -> &SoundChoice {
        &self.choice
    }

    /// Has the first user interaction already happened?
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Playback is only allowed with a decoded cue installed.
    pub fn can_play(&self) -> bool {
        self.phase == CuePhase::Ready
    }

    /// Apply a new selection.
    ///
    /// Always bumps the epoch, superseding any decode still in flight.
    pub fn select(&mut self, choice: SoundChoice) -> SelectOutcome {
        self.epoch += 1;
        self.choice = choice;
        match &self.choice {
            SoundChoice::Muted => {
                self.phase = CuePhase::Disabled;
                tracing::debug!("key sound disabled");
                SelectOutcome::Disabled
            }
            SoundChoice::Cue(name) => {
                self.phase = CuePhase::Pending;
                if self.unlocked {
                    tracing::debug!(cue = %name, "key sound selected, decoding");
                    SelectOutcome::Decode(DecodeTicket {
                        epoch: self.epoch,
                        name: name.clone(),
                    })
                } else {
                    tracing::debug!(cue = %name, "key sound selected, awaiting unlock");
                    SelectOutcome::AwaitUnlock
                }
            }
        }
    }

    /// Record the first user interaction.
    ///
    /// Idempotent: only the first call flips the flag, and only that call
    /// can hand back a decode ticket for a selection made while locked.
    pub fn unlock(&mut self) -> Option<DecodeTicket> {
        if self.unlocked {
            return None;
        }
        self.unlocked = true;
        match &self.choice {
            SoundChoice::Cue(name) if self.phase == CuePhase::Pending => {
                tracing::debug!(cue = %name, "playback unlocked, decoding");
                Some(DecodeTicket {
                    epoch: self.epoch,
                    name: name.clone(),
                })
            }
            _ => None,
        }
    }

    /// A decode finished; install it only if its selection is still current.
    ///
    /// Returns whether the decoded buffer should become the active cue.
    pub fn install(&mut self, ticket: &DecodeTicket) -> bool {
        if ticket.epoch != self.epoch || self.phase != CuePhase::Pending {
            tracing::debug!(cue = %ticket.name, "discarding superseded decode");
            return false;
        }
        self.phase = CuePhase::Ready;
        true
    }

    /// A decode failed; the feature stays silently unavailable.
    ///
    /// The machine remains `Pending` so a later re-selection of the same
    /// sound issues a fresh decode.
    pub fn decode_failed(&mut self, ticket: &DecodeTicket) {
        if ticket.epoch == self.epoch {
            tracing::debug!(cue = %ticket.name, "decode failed, key sound unavailable");
        }
    }
}
