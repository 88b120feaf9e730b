use wasm_bindgen::prelude::*;
use web_sys::console;

pub mod likes;
pub mod store;

use crate::likes::LikeEngine;
use crate::store::{LocalStorage, PreferenceStore};

/// Set up the panic hook when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Module version.
#[wasm_bindgen]
pub fn version() -> String {
    "1.2.0".to_string()
}

/// The preference store and like engine as one stateful object held by
/// the page. Opens `localStorage` when the browser provides it and falls
/// back to an in-memory store otherwise; either way the instance is the
/// source of truth for the session.
#[wasm_bindgen]
pub struct PreferencesJS {
    store: PreferenceStore,
    likes: LikeEngine,
}

#[wasm_bindgen]
impl PreferencesJS {
    #[wasm_bindgen(constructor)]
    pub fn new() -> PreferencesJS {
        console_error_panic_hook::set_once();

        let store = match LocalStorage::open() {
            Some(backend) => PreferenceStore::new(Box::new(backend)),
            None => {
                console::log_1(&JsValue::from_str(
                    "localStorage unavailable, preferences held in memory for this session",
                ));
                PreferenceStore::in_memory()
            }
        };

        let likes = LikeEngine::load(&store);
        PreferencesJS { store, likes }
    }

    /// Seed counters for the given article ids (JSON array of strings).
    /// Ids that already have a persisted counter keep it.
    pub fn seed_likes(&mut self, ids_json: &str) -> Result<(), JsValue> {
        let ids: Vec<String> = serde_json::from_str(ids_json)
            .map_err(|e| JsValue::from_str(&format!("failed to parse id list: {}", e)))?;
        self.likes.seed_baseline(ids.iter().map(|s| s.as_str()));
        Ok(())
    }

    /// Toggle the visitor's like for an article; returns `{count, liked}`.
    pub fn toggle_like(&mut self, id: &str) -> Result<JsValue, JsValue> {
        let state = self.likes.toggle(id, &mut self.store);
        serde_wasm_bindgen::to_value(&state)
            .map_err(|e| JsValue::from_str(&format!("failed to serialize like state: {}", e)))
    }

    /// Current `{count, liked}` for an article.
    pub fn like_state(&self, id: &str) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.likes.state(id))
            .map_err(|e| JsValue::from_str(&format!("failed to serialize like state: {}", e)))
    }

    pub fn like_count(&self, id: &str) -> u32 {
        self.likes.count_of(id)
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.likes.is_liked(id)
    }

    /// The persisted theme flag.
    pub fn dark_mode(&self) -> bool {
        self.store.dark_mode()
    }

    /// Flip and persist the theme flag; returns the new value.
    pub fn toggle_dark_mode(&mut self) -> bool {
        let next = !self.store.dark_mode();
        self.store.set_dark_mode(next);
        next
    }
}

impl Default for PreferencesJS {
    fn default() -> Self {
        PreferencesJS::new()
    }
}
