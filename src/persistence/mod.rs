//! Best score persistence
//!
//! A single integer in LocalStorage. Storage failures are swallowed: the
//! game must stay playable with a zero best score.

/// LocalStorage key (used only in wasm32)
#[allow(dead_code)]
const STORAGE_KEY: &str = "flapbox_best_score";

/// Load the persisted best score, defaulting to 0 when storage is missing
/// or holds something unparseable
#[cfg(target_arch = "wasm32")]
pub fn load_best_score() -> u32 {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten();

    if let Some(storage) = storage {
        if let Ok(Some(raw)) = storage.get_item(STORAGE_KEY) {
            if let Ok(best) = raw.parse::<u32>() {
                log::info!("Loaded best score: {}", best);
                return best;
            }
        }
    }

    log::info!("No saved best score, starting at 0");
    0
}

/// Persist a new best score (best effort)
#[cfg(target_arch = "wasm32")]
pub fn save_best_score(score: u32) {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten();

    if let Some(storage) = storage {
        let _ = storage.set_item(STORAGE_KEY, &score.to_string());
        log::info!("Best score saved: {}", score);
    }
}

/// Native stubs
#[cfg(not(target_arch = "wasm32"))]
pub fn load_best_score() -> u32 {
    0
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_best_score(_score: u32) {
    // No-op for native
}
