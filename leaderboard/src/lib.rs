//! Persisted top-10 leaderboard for Pong
//!
//! Entries are kept sorted by descending score and capped at [`CAPACITY`].
//! The whole list is rewritten to its [`Storage`] after every update.

pub mod error;
pub mod store;

pub use error::*;
pub use store::*;

use serde::{Deserialize, Serialize};

/// Maximum number of entries kept
pub const CAPACITY: usize = 10;

/// One leaderboard line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
}

impl LeaderboardEntry {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

// ============================================================================
// Serialization Helpers
// ============================================================================

/// Serialize entries as a JSON array of `{"name", "score"}` records
pub fn to_bytes(entries: &[LeaderboardEntry]) -> LeaderboardResult<Vec<u8>> {
    serde_json::to_vec(entries).map_err(LeaderboardError::Encode)
}

/// Deserialize entries written by [`to_bytes`]
pub fn from_bytes(bytes: &[u8]) -> LeaderboardResult<Vec<LeaderboardEntry>> {
    serde_json::from_slice(bytes).map_err(LeaderboardError::Parse)
}

/// Sort descending by score (stable, so earlier entries win ties) and cap
fn rank(entries: &mut Vec<LeaderboardEntry>) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(CAPACITY);
}

/// Ranked entries plus the store they are saved to
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
    storage: Box<dyn Storage>,
}

impl Leaderboard {
    /// Load from `storage`. Never fails: a missing store is an empty
    /// leaderboard, an unreadable or malformed one is logged and treated
    /// as empty.
    pub fn load(storage: Box<dyn Storage>) -> Self {
        let mut entries = match storage.read().and_then(|bytes| match bytes {
            Some(bytes) => from_bytes(&bytes),
            None => Ok(Vec::new()),
        }) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("Ignoring stored leaderboard: {err}");
                Vec::new()
            }
        };
        rank(&mut entries);
        log::info!("Leaderboard loaded with {} entries", entries.len());

        Self { entries, storage }
    }

    /// Add a result, re-rank, keep the top entries and save everything.
    ///
    /// The in-memory list is updated even if saving fails.
    pub fn update(&mut self, name: &str, score: u32) -> LeaderboardResult<()> {
        self.entries.push(LeaderboardEntry::new(name, score));
        rank(&mut self.entries);
        self.save()
    }

    /// Current ranking, best first
    pub fn get(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Would `score` make it onto the board right now
    pub fn qualifies(&self, score: u32) -> bool {
        self.entries.len() < CAPACITY || self.entries.iter().any(|entry| score > entry.score)
    }

    fn save(&mut self) -> LeaderboardResult<()> {
        let bytes = to_bytes(&self.entries)?;
        self.storage.write(&bytes)?;
        log::info!("Leaderboard saved ({} entries)", self.entries.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> (Leaderboard, MemoryStorage) {
        let storage = MemoryStorage::new();
        (Leaderboard::load(Box::new(storage.clone())), storage)
    }

    #[test]
    fn test_update_orders_descending() {
        let (mut board, _) = empty();
        board.update("Alice", 5).unwrap();
        board.update("Bob", 10).unwrap();

        assert_eq!(
            board.get(),
            &[LeaderboardEntry::new("Bob", 10), LeaderboardEntry::new("Alice", 5)]
        );
    }

    #[test]
    fn test_update_keeps_top_ten() {
        let (mut board, _) = empty();
        for score in 1..=11 {
            board.update(&format!("P{score}"), score).unwrap();
        }

        let scores: Vec<u32> = board.get().iter().map(|e| e.score).collect();
        assert_eq!(scores, (2..=11).rev().collect::<Vec<u32>>());
    }

    #[test]
    fn test_low_score_falls_off_full_board() {
        let (mut board, _) = empty();
        for score in 10..20 {
            board.update("P", score).unwrap();
        }
        board.update("Late", 3).unwrap();

        assert_eq!(board.get().len(), CAPACITY);
        assert!(board.get().iter().all(|e| e.name != "Late"));
    }

    #[test]
    fn test_ties_keep_earlier_entry_first() {
        let (mut board, _) = empty();
        board.update("First", 7).unwrap();
        board.update("Second", 7).unwrap();

        assert_eq!(board.get()[0].name, "First");
        assert_eq!(board.get()[1].name, "Second");
    }

    #[test]
    fn test_update_persists_full_list() {
        let (mut board, storage) = empty();
        board.update("Alice", 5).unwrap();
        board.update("Bob", 10).unwrap();

        let saved = from_bytes(&storage.contents().unwrap()).unwrap();
        assert_eq!(saved, board.get());
    }

    #[test]
    fn test_stored_format_is_name_score_records() {
        let bytes = to_bytes(&[LeaderboardEntry::new("Ann", 3)]).unwrap();
        assert_eq!(bytes, br#"[{"name":"Ann","score":3}]"#.to_vec());
    }

    #[test]
    fn test_load_reads_existing_entries() {
        let storage = MemoryStorage::with_contents(r#"[{"name":"Bob","score":10},{"name":"Alice","score":5}]"#);
        let board = Leaderboard::load(Box::new(storage));
        assert_eq!(board.get().len(), 2);
        assert_eq!(board.get()[0], LeaderboardEntry::new("Bob", 10));
    }

    #[test]
    fn test_load_ranks_unsorted_oversized_store() {
        let entries: Vec<LeaderboardEntry> =
            (0..15).map(|i| LeaderboardEntry::new(format!("P{i}"), i)).collect();
        let storage = MemoryStorage::with_contents(to_bytes(&entries).unwrap());

        let board = Leaderboard::load(Box::new(storage));

        assert_eq!(board.get().len(), CAPACITY);
        assert_eq!(board.get()[0].score, 14);
        assert_eq!(board.get()[9].score, 5);
    }

    #[test]
    fn test_malformed_store_loads_empty() {
        let storage = MemoryStorage::with_contents("{not json");
        let board = Leaderboard::load(Box::new(storage));
        assert!(board.get().is_empty());
    }

    #[test]
    fn test_failed_save_still_updates_memory() {
        let storage = MemoryStorage::new().read_only();
        let mut board = Leaderboard::load(Box::new(storage));

        let result = board.update("Alice", 5);

        assert!(matches!(result, Err(LeaderboardError::ReadOnly)));
        assert_eq!(board.get(), &[LeaderboardEntry::new("Alice", 5)]);
    }

    #[test]
    fn test_qualifies() {
        let (mut board, _) = empty();
        assert!(board.qualifies(0));
        for score in 10..20 {
            board.update("P", score).unwrap();
        }
        assert!(!board.qualifies(10));
        assert!(board.qualifies(11));
    }
}
