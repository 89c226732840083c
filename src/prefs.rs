//! Persisted player preferences: high score and mute flag
//!
//! Two independent scalar slots over the key-value surface. Unreadable or
//! missing values fall back to defaults; writes that fail are dropped by
//! the store itself.

use crate::platform::KvStore;

/// Storage key for the best score across sessions
pub const HIGH_SCORE_KEY: &str = "cmg_high_score";
/// Storage key for the mute toggle ("1" muted, "0" not)
pub const MUTED_KEY: &str = "cmg_muted";

pub fn load_high_score(store: &dyn KvStore) -> u32 {
    match store
        .get(HIGH_SCORE_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
    {
        Some(score) => {
            log::info!("loaded high score: {}", score);
            score
        }
        None => 0,
    }
}

pub fn save_high_score(store: &dyn KvStore, score: u32) {
    if let Ok(raw) = serde_json::to_string(&score) {
        store.set(HIGH_SCORE_KEY, &raw);
        log::info!("high score saved: {}", score);
    }
}

pub fn load_muted(store: &dyn KvStore) -> bool {
    store.get(MUTED_KEY).map(|raw| raw == "1").unwrap_or(false)
}

pub fn save_muted(store: &dyn KvStore, muted: bool) {
    store.set(MUTED_KEY, if muted { "1" } else { "0" });
}
