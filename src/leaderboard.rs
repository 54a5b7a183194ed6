//! Local leaderboard (snake variant)
//!
//! An append-only score table persisted as JSON through a simple
//! key-value store. Entries are never mutated after creation; the list is
//! re-sorted descending by score after every insertion. No schema
//! versioning.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Speed;

/// Key-value write failure; never propagated into the simulation
#[derive(Debug, Error)]
#[error("key-value store write failed: {0}")]
pub struct StoreError(pub String);

/// Minimal local key-value persistence (LocalStorage, a file, a map)
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store, used in tests and headless hosts
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: HashMap<String, String>,
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A single submitted result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: i32,
    pub speed: Speed,
    pub walls: bool,
}

impl LeaderboardEntry {
    pub fn speed_label(&self) -> &'static str {
        self.speed.label()
    }

    pub fn walls_label(&self) -> &'static str {
        if self.walls { "Yes" } else { "No" }
    }
}

/// Score table, kept sorted descending by score for display
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Store key (shared with the original browser game)
    const STORAGE_KEY: &'static str = "snake_leaderboard";

    pub fn new() -> Self {
        Self::default()
    }

    /// Load from the store. A missing or corrupt record starts fresh
    /// rather than failing; corruption is logged.
    pub fn load(store: &impl KvStore) -> Self {
        let Some(json) = store.get(Self::STORAGE_KEY) else {
            log::info!("no leaderboard found, starting fresh");
            return Self::new();
        };
        match serde_json::from_str::<Vec<LeaderboardEntry>>(&json) {
            Ok(mut entries) => {
                entries.sort_by(|a, b| b.score.cmp(&a.score));
                Self { entries }
            }
            Err(e) => {
                log::warn!("discarding corrupt leaderboard record: {e}");
                Self::new()
            }
        }
    }

    /// Append an entry, re-sort descending by score, and persist. A write
    /// failure is logged and swallowed; it never reaches the caller.
    pub fn submit(&mut self, entry: LeaderboardEntry, store: &mut impl KvStore) {
        self.entries.push(entry);
        // Stable sort keeps equal scores in submission order
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));

        match serde_json::to_string(&self.entries) {
            Ok(json) => {
                if let Err(e) = store.set(Self::STORAGE_KEY, &json) {
                    log::warn!("leaderboard not persisted: {e}");
                }
            }
            Err(e) => log::warn!("leaderboard not serialized: {e}"),
        }
    }

    /// Entries in display order (descending by score)
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<i32> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, score: i32) -> LeaderboardEntry {
        LeaderboardEntry {
            name: name.to_string(),
            score,
            speed: Speed::Normal,
            walls: false,
        }
    }

    /// Store whose writes always fail
    struct BrokenStore;

    impl KvStore for BrokenStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_sorted_descending_after_insertion() {
        let mut store = MemoryStore::default();
        let mut board = Leaderboard::new();
        board.submit(entry("ada", 3), &mut store);
        board.submit(entry("bob", 10), &mut store);
        board.submit(entry("cyd", 1), &mut store);

        let scores: Vec<i32> = board.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![10, 3, 1]);
    }

    #[test]
    fn test_equal_scores_keep_submission_order() {
        let mut store = MemoryStore::default();
        let mut board = Leaderboard::new();
        board.submit(entry("first", 5), &mut store);
        board.submit(entry("second", 5), &mut store);

        assert_eq!(board.entries()[0].name, "first");
        assert_eq!(board.entries()[1].name, "second");
    }

    #[test]
    fn test_roundtrip_through_store() {
        let mut store = MemoryStore::default();
        let mut board = Leaderboard::new();
        board.submit(entry("ada", 7), &mut store);
        board.submit(
            LeaderboardEntry {
                name: "bob".to_string(),
                score: 12,
                speed: Speed::Superfast,
                walls: true,
            },
            &mut store,
        );

        let loaded = Leaderboard::load(&store);
        assert_eq!(loaded.entries(), board.entries());
        assert_eq!(loaded.top_score(), Some(12));
        assert_eq!(loaded.entries()[0].speed_label(), "Superfast");
        assert_eq!(loaded.entries()[0].walls_label(), "Yes");
    }

    #[test]
    fn test_missing_record_starts_fresh() {
        let store = MemoryStore::default();
        let board = Leaderboard::load(&store);
        assert!(board.is_empty());
    }

    #[test]
    fn test_corrupt_record_starts_fresh() {
        let mut store = MemoryStore::default();
        store.set("snake_leaderboard", "{not json").unwrap();
        let board = Leaderboard::load(&store);
        assert!(board.is_empty());
    }

    #[test]
    fn test_write_failure_swallowed() {
        let mut store = BrokenStore;
        let mut board = Leaderboard::new();
        // Must not panic or error; the in-memory list still updates
        board.submit(entry("ada", 4), &mut store);
        assert_eq!(board.top_score(), Some(4));
    }
}
