//! The persisted preference store: theme flag and like state, mirrored to
//! device-local storage. In-memory state is always authoritative; storage
//! is a best-effort mirror read once at startup.

use std::collections::HashMap;

use utils_common::{codec, Error};

/// Storage key for the theme flag.
pub const KEY_THEME: &str = "darkMode";
/// Storage key for the per-article like counters.
pub const KEY_LIKE_COUNTS: &str = "articleLikes";
/// Storage key for the per-user like flags.
pub const KEY_USER_LIKES: &str = "userLikes";

/// A flat string key-value store. The seam between the preference logic
/// and wherever the bytes actually live.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), Error>;
    fn remove(&mut self, key: &str) -> Result<(), Error>;
}

/// Plain in-memory backend. Used in tests and as the fallback when the
/// browser exposes no `localStorage`.
#[derive(Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl StorageBackend for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), Error> {
        self.entries.remove(key);
        Ok(())
    }
}

/// The browser's `localStorage`.
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// `None` when there is no window or storage is blocked.
    pub fn open() -> Option<LocalStorage> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(LocalStorage { storage })
    }
}

impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.storage
            .set_item(key, value)
            .map_err(|_| Error::Storage(key.to_string()))
    }

    fn remove(&mut self, key: &str) -> Result<(), Error> {
        self.storage
            .remove_item(key)
            .map_err(|_| Error::Storage(key.to_string()))
    }
}

/// Typed access to the persisted preferences over any backend.
pub struct PreferenceStore {
    backend: Box<dyn StorageBackend>,
}

impl PreferenceStore {
    pub fn new(backend: Box<dyn StorageBackend>) -> PreferenceStore {
        PreferenceStore { backend }
    }

    pub fn in_memory() -> PreferenceStore {
        PreferenceStore::new(Box::new(MemoryStore::default()))
    }

    /// The persisted theme flag; absent means light mode.
    pub fn dark_mode(&self) -> bool {
        self.backend.get(KEY_THEME).as_deref() == Some("true")
    }

    /// Persist the theme flag, best effort.
    pub fn set_dark_mode(&mut self, on: bool) {
        let _ = self
            .backend
            .set(KEY_THEME, if on { "true" } else { "false" });
    }

    /// The persisted like counters; corrupt or absent data reads as empty.
    pub fn like_counts(&self) -> HashMap<String, u32> {
        codec::decode_or_default(self.backend.get(KEY_LIKE_COUNTS).as_deref())
    }

    /// The persisted like flags; corrupt or absent data reads as empty.
    pub fn like_flags(&self) -> HashMap<String, bool> {
        codec::decode_or_default(self.backend.get(KEY_USER_LIKES).as_deref())
    }

    /// Mirror both like mappings to storage. Both writes are attempted;
    /// the first failure is reported so the caller can log it, but the
    /// in-memory mappings remain the source of truth either way.
    pub fn write_likes(
        &mut self,
        counts: &HashMap<String, u32>,
        flags: &HashMap<String, bool>,
    ) -> Result<(), Error> {
        let counts_text = codec::encode(counts)?;
        let flags_text = codec::encode(flags)?;
        let first = self.backend.set(KEY_LIKE_COUNTS, &counts_text);
        let second = self.backend.set(KEY_USER_LIKES, &flags_text);
        first.and(second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_flag_round_trips_through_the_backend() {
        let mut store = PreferenceStore::in_memory();
        assert!(!store.dark_mode());

        store.set_dark_mode(true);
        assert!(store.dark_mode());

        store.set_dark_mode(false);
        assert!(!store.dark_mode());
    }

    #[test]
    fn like_mappings_round_trip_exactly() {
        let mut store = PreferenceStore::in_memory();

        let mut counts = HashMap::new();
        counts.insert("dn-101".to_string(), 12);
        counts.insert("مقال".to_string(), 3);
        let mut flags = HashMap::new();
        flags.insert("dn-101".to_string(), true);

        store.write_likes(&counts, &flags).unwrap();

        assert_eq!(store.like_counts(), counts);
        assert_eq!(store.like_flags(), flags);
    }

    #[test]
    fn corrupt_persisted_data_reads_as_empty() {
        let mut backend = MemoryStore::default();
        backend.set(KEY_LIKE_COUNTS, "{broken").unwrap();
        backend.set(KEY_USER_LIKES, "42").unwrap();

        let store = PreferenceStore::new(Box::new(backend));
        assert!(store.like_counts().is_empty());
        assert!(store.like_flags().is_empty());
    }

    #[test]
    fn fresh_store_reads_as_defaults() {
        let store = PreferenceStore::in_memory();
        assert!(store.like_counts().is_empty());
        assert!(store.like_flags().is_empty());
        assert!(!store.dark_mode());
    }
}
