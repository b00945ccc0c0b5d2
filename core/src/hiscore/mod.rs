//! High-score persistence.
//!
//! The leaderboard is a fixed table of [`MAX_HISCORES`] entries owned by the
//! simulation. [`HighScoreStore`] reads it from and writes it to a flat text
//! file (see [`codec`] for the record format); ranking new scores is the
//! table's business, expressed through [`HighScoreTable`].

pub mod codec;
pub mod store;
pub mod table;

pub use codec::{decode, encode, parse_score};
pub use store::{HIGH_SCORE_FILE, HighScoreError, HighScoreStore, LOAD_BUFFER_SIZE};
pub use table::ScoreBoard;

/// Number of entries in the leaderboard and records in the file.
pub const MAX_HISCORES: usize = 10;

/// Width of the name field in characters.
pub const NAME_LEN: usize = 4;

/// One leaderboard row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighScoreEntry {
    /// Exactly four characters, space padded.
    pub name: [u8; NAME_LEN],
    pub score: i32,
}

impl HighScoreEntry {
    pub const fn new(name: [u8; NAME_LEN], score: i32) -> Self {
        Self { name, score }
    }
}

impl Default for HighScoreEntry {
    fn default() -> Self {
        Self {
            name: [b' '; NAME_LEN],
            score: 0,
        }
    }
}

/// The simulation-side leaderboard the store loads into and saves from.
pub trait HighScoreTable {
    /// Offer a score loaded from disk. Where (or whether) it lands is up to
    /// the table's own ranking policy.
    fn insert_hi_score(&mut self, score: i32, name: [u8; NAME_LEN]);

    /// The current table, best first.
    fn hi_scores(&self) -> &[HighScoreEntry; MAX_HISCORES];
}
