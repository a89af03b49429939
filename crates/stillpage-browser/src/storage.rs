//! LocalStorage persistence for configuration and draft text.
//!
//! Two independent entries: `config` holds a JSON blob (typed through
//! gloo's serde layer), `draft` holds the raw editor text with no encoding
//! around it. Both are written synchronously on every relevant input
//! event; there is no batching or dirty tracking.

use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};

use stillpage_core::Config;

/// Storage key for the JSON configuration blob.
pub const CONFIG_KEY: &str = "config";

/// Storage key for the plain-text draft.
pub const DRAFT_KEY: &str = "draft";

/// Load the configuration, merging stored fields over defaults.
///
/// An absent entry is normal on first visit; a blob that fails to parse is
/// treated the same way, so corrupt storage can never take the page down.
pub fn load_config() -> Config {
    match LocalStorage::get(CONFIG_KEY) {
        Ok(config) => config,
        Err(StorageError::KeyNotFound(_)) => Config::default(),
        Err(err) => {
            tracing::debug!("stored config unreadable, using defaults: {err}");
            Config::default()
        }
    }
}

/// Persist the full configuration, overwriting the stored blob.
pub fn save_config(config: &Config) {
    if let Err(err) = LocalStorage::set(CONFIG_KEY, config) {
        tracing::warn!("failed to persist config: {err}");
    }
}

/// Load the persisted draft text, if any.
pub fn load_draft() -> Option<String> {
    LocalStorage::raw().get_item(DRAFT_KEY).ok().flatten()
}

/// Persist the full draft text.
pub fn save_draft(text: &str) {
    if let Err(err) = LocalStorage::raw().set_item(DRAFT_KEY, text) {
        tracing::warn!("failed to persist draft: {err:?}");
    }
}
