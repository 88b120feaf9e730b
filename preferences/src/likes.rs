//! The like engine: a per-article counter and a per-user flag, kept in a
//! single coupled transition so the pair can never diverge through the
//! exposed API.

use std::collections::HashMap;

use serde::Serialize;

use crate::store::PreferenceStore;

/// What the page needs to render a like button.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeState {
    /// Current counter for the article.
    pub count: u32,
    /// Whether this visitor has liked it.
    pub liked: bool,
}

/// Holds both like mappings and applies the toggle transition. Loaded from
/// the preference store once at startup; every toggle writes both mappings
/// back through it.
#[derive(Debug, Default)]
pub struct LikeEngine {
    counts: HashMap<String, u32>,
    flags: HashMap<String, bool>,
}

impl LikeEngine {
    /// Counter seeded for articles that have no persisted count yet. A
    /// fixed constant: the demo randomness this replaces was placeholder
    /// behavior, not a requirement.
    pub const BASELINE: u32 = 0;

    /// Restore both mappings from the store. Corrupt or absent data comes
    /// back empty, which is a valid starting state.
    pub fn load(store: &PreferenceStore) -> LikeEngine {
        LikeEngine {
            counts: store.like_counts(),
            flags: store.like_flags(),
        }
    }

    /// Give every listed article a counter, seeding absent ones with the
    /// baseline. Flags stay as they are (absent means not liked).
    pub fn seed_baseline<'a, I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for id in ids {
            self.counts.entry(id.to_string()).or_insert(Self::BASELINE);
        }
    }

    pub fn state(&self, id: &str) -> LikeState {
        LikeState {
            count: self.count_of(id),
            liked: self.is_liked(id),
        }
    }

    pub fn count_of(&self, id: &str) -> u32 {
        self.counts.get(id).copied().unwrap_or(0)
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.flags.get(id).copied().unwrap_or(false)
    }

    /// Flip the flag and move the counter with it, then mirror both
    /// mappings to storage. Flag and counter change together before
    /// anything is observable; a failed storage write is tolerated and the
    /// in-memory state stays authoritative.
    pub fn toggle(&mut self, id: &str, store: &mut PreferenceStore) -> LikeState {
        let liked = !self.is_liked(id);
        let count = if liked {
            self.count_of(id) + 1
        } else {
            self.count_of(id).saturating_sub(1)
        };

        self.flags.insert(id.to_string(), liked);
        self.counts.insert(id.to_string(), count);

        let _ = store.write_likes(&self.counts, &self.flags);

        LikeState { count, liked }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StorageBackend;
    use utils_common::Error;

    #[test]
    fn toggle_moves_flag_and_count_together() {
        let mut store = PreferenceStore::in_memory();
        let mut engine = LikeEngine::default();

        let on = engine.toggle("dn-101", &mut store);
        assert_eq!(on, LikeState { count: 1, liked: true });

        let off = engine.toggle("dn-101", &mut store);
        assert_eq!(off, LikeState { count: 0, liked: false });
    }

    #[test]
    fn double_toggle_restores_the_prior_state() {
        let mut store = PreferenceStore::in_memory();
        let mut engine = LikeEngine::default();
        engine.seed_baseline(["dn-102"]);

        let before = engine.state("dn-102");
        engine.toggle("dn-102", &mut store);
        engine.toggle("dn-102", &mut store);
        assert_eq!(engine.state("dn-102"), before);
    }

    #[test]
    fn counter_never_goes_negative() {
        let mut store = PreferenceStore::in_memory();
        let mut engine = LikeEngine::default();

        // Unliked with counter 0: like then unlike lands back on 0.
        engine.toggle("dn-103", &mut store);
        let state = engine.toggle("dn-103", &mut store);
        assert_eq!(state.count, 0);
    }

    #[test]
    fn toggles_write_through_to_the_store() {
        let mut store = PreferenceStore::in_memory();
        let mut engine = LikeEngine::default();

        engine.toggle("dn-104", &mut store);

        // A fresh engine restored from the same store sees the toggle.
        let restored = LikeEngine::load(&store);
        assert_eq!(restored.state("dn-104"), LikeState { count: 1, liked: true });
    }

    #[test]
    fn baseline_seeding_fills_only_absent_counters() {
        let mut store = PreferenceStore::in_memory();
        let mut engine = LikeEngine::default();
        engine.toggle("dn-105", &mut store); // count 1

        engine.seed_baseline(["dn-105", "dn-106"]);
        assert_eq!(engine.count_of("dn-105"), 1);
        assert_eq!(engine.count_of("dn-106"), LikeEngine::BASELINE);
        assert!(!engine.is_liked("dn-106"));
    }

    /// Backend that refuses every write.
    struct ReadOnlyStore;

    impl StorageBackend for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }
        fn set(&mut self, key: &str, _value: &str) -> Result<(), Error> {
            Err(Error::Storage(key.to_string()))
        }
        fn remove(&mut self, key: &str) -> Result<(), Error> {
            Err(Error::Storage(key.to_string()))
        }
    }

    #[test]
    fn a_failing_store_does_not_corrupt_in_memory_state() {
        let mut store = PreferenceStore::new(Box::new(ReadOnlyStore));
        let mut engine = LikeEngine::default();

        let state = engine.toggle("dn-107", &mut store);
        assert_eq!(state, LikeState { count: 1, liked: true });
        assert_eq!(engine.state("dn-107"), state);
    }
}
