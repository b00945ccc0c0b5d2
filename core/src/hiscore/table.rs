use super::{HighScoreEntry, HighScoreTable, MAX_HISCORES, NAME_LEN};

/// Ranked leaderboard: best score first, fixed size.
///
/// A new score goes below every existing score it does not beat, pushing
/// the last entry off the end. Scores that beat nothing are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBoard {
    entries: [HighScoreEntry; MAX_HISCORES],
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self {
            entries: [HighScoreEntry::default(); MAX_HISCORES],
        }
    }

    /// Insert and report the rank taken, if any.
    pub fn insert(&mut self, score: i32, name: [u8; NAME_LEN]) -> Option<usize> {
        let rank = self.entries.iter().position(|e| score > e.score)?;
        self.entries[rank..].rotate_right(1);
        self.entries[rank] = HighScoreEntry::new(name, score);
        Some(rank)
    }

    pub fn entries(&self) -> &[HighScoreEntry; MAX_HISCORES] {
        &self.entries
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl HighScoreTable for ScoreBoard {
    fn insert_hi_score(&mut self, score: i32, name: [u8; NAME_LEN]) {
        self.insert(score, name);
    }

    fn hi_scores(&self) -> &[HighScoreEntry; MAX_HISCORES] {
        &self.entries
    }
}
