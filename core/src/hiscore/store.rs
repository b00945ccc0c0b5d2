use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::codec::{decode, encode};
use super::{HighScoreEntry, HighScoreTable, MAX_HISCORES};

/// Default file name, relative to the working directory.
pub const HIGH_SCORE_FILE: &str = "Methane.HiScores";

/// Read limit for the score file. Well above the largest file the
/// fixed-width format can produce (4 name bytes, at most 11 score
/// characters and a delimiter per record).
pub const LOAD_BUFFER_SIZE: usize = MAX_HISCORES * 64;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Why a load or save did not happen.
#[derive(Debug)]
pub enum HighScoreError {
    /// No score file yet. Not a failure in practice: nothing was saved.
    Missing,
    /// The file exists but could not be read or written.
    Io(io::Error),
}

impl std::fmt::Display for HighScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => write!(f, "no high score file"),
            Self::Io(e) => write!(f, "high score I/O error: {e}"),
        }
    }
}

impl std::error::Error for HighScoreError {}

impl From<io::Error> for HighScoreError {
    fn from(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::NotFound {
            Self::Missing
        } else {
            Self::Io(e)
        }
    }
}

// ---------------------------------------------------------------------------
// HighScoreStore
// ---------------------------------------------------------------------------

/// Loads and saves the leaderboard file.
///
/// Every failure is non-fatal: a missing or unreadable file leaves the
/// in-memory table untouched, an unwritable one means scores are simply
/// not kept.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the file without touching any table.
    ///
    /// At most `LOAD_BUFFER_SIZE - 2` bytes are read; decoding treats the
    /// end of what was read like a terminating zero byte.
    pub fn try_load(&self) -> Result<Vec<HighScoreEntry>, HighScoreError> {
        let mut buf = Vec::with_capacity(LOAD_BUFFER_SIZE);
        File::open(&self.path)?
            .take((LOAD_BUFFER_SIZE - 2) as u64)
            .read_to_end(&mut buf)?;
        Ok(decode(&buf))
    }

    /// Load the file into `table` through its insertion policy.
    /// Returns how many records were read from disk.
    pub fn load(&self, table: &mut dyn HighScoreTable) -> usize {
        match self.try_load() {
            Ok(entries) => {
                for entry in &entries {
                    table.insert_hi_score(entry.score, entry.name);
                }
                info!(
                    path = %self.path.display(),
                    records = entries.len(),
                    "loaded high scores"
                );
                entries.len()
            }
            Err(HighScoreError::Missing) => {
                debug!(path = %self.path.display(), "no high scores available");
                0
            }
            Err(e) => {
                warn!(path = %self.path.display(), "cannot read high scores: {e}");
                0
            }
        }
    }

    /// Write all `MAX_HISCORES` entries, truncating any previous file.
    pub fn try_save(&self, entries: &[HighScoreEntry; MAX_HISCORES]) -> Result<(), HighScoreError> {
        std::fs::write(&self.path, encode(entries)).map_err(HighScoreError::Io)
    }

    /// Save the table's current entries. Returns whether the file was written.
    pub fn save(&self, table: &dyn HighScoreTable) -> bool {
        match self.try_save(table.hi_scores()) {
            Ok(()) => {
                info!(path = %self.path.display(), "saved high scores");
                true
            }
            Err(e) => {
                warn!(path = %self.path.display(), "high scores not saved: {e}");
                false
            }
        }
    }
}

impl Default for HighScoreStore {
    fn default() -> Self {
        Self::new(HIGH_SCORE_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_exceeds_largest_file() {
        let widest = HighScoreEntry::new(*b"WWWW", i32::MIN);
        let text = encode(&[widest; MAX_HISCORES]);
        assert!(text.len() < LOAD_BUFFER_SIZE - 2);
    }

    #[test]
    fn not_found_maps_to_missing() {
        let e: HighScoreError = io::Error::from(io::ErrorKind::NotFound).into();
        assert!(matches!(e, HighScoreError::Missing));

        let e: HighScoreError = io::Error::from(io::ErrorKind::PermissionDenied).into();
        assert!(matches!(e, HighScoreError::Io(_)));
    }
}
