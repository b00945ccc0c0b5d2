//! Text encoding of the leaderboard.
//!
//! Each record is the four raw name bytes, the score in decimal ASCII, and
//! a `$` terminator, with nothing between records:
//!
//! ```text
//! ABCD1234$WXYZ500$
//! ```
//!
//! Decoding is tolerant. It stops quietly at the first zero byte, at a
//! record with no terminating `$` (truncated file), or at a record too
//! short to hold a name (corrupt file); everything before that point is
//! kept.

use super::{HighScoreEntry, MAX_HISCORES, NAME_LEN};

/// Record terminator.
pub const DELIMITER: u8 = b'$';

/// Serialize exactly `MAX_HISCORES` records.
///
/// Name bytes that would break the framing on reload (NUL or the `$`
/// delimiter) are written as spaces.
pub fn encode(entries: &[HighScoreEntry; MAX_HISCORES]) -> Vec<u8> {
    let mut out = Vec::with_capacity(MAX_HISCORES * 16);
    for entry in entries {
        out.extend(entry.name.iter().map(|&b| match b {
            0 | DELIMITER => b' ',
            other => other,
        }));
        out.extend_from_slice(entry.score.to_string().as_bytes());
        out.push(DELIMITER);
    }
    out
}

/// Extract up to `MAX_HISCORES` records from raw file contents.
pub fn decode(bytes: &[u8]) -> Vec<HighScoreEntry> {
    // Everything past the first NUL is treated as unread buffer.
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    let mut rest = &bytes[..end];
    let mut entries = Vec::with_capacity(MAX_HISCORES);

    while entries.len() < MAX_HISCORES && !rest.is_empty() {
        let Some(split) = rest.iter().position(|&b| b == DELIMITER) else {
            break; // truncated trailing record
        };
        let record = &rest[..split];
        if record.len() < NAME_LEN {
            break; // corrupt record
        }

        let mut name = [0u8; NAME_LEN];
        name.copy_from_slice(&record[..NAME_LEN]);
        entries.push(HighScoreEntry::new(name, parse_score(&record[NAME_LEN..])));

        rest = &rest[split + 1..];
    }

    entries
}

/// Lenient decimal parse in the manner of C `atoi`: optional leading
/// whitespace, an optional sign, then digits up to the first non-digit.
/// No digits gives 0; overflow saturates.
pub fn parse_score(text: &[u8]) -> i32 {
    let mut iter = text
        .iter()
        .copied()
        .skip_while(|b| b.is_ascii_whitespace())
        .peekable();

    let negative = match iter.peek() {
        Some(b'-') => {
            iter.next();
            true
        }
        Some(b'+') => {
            iter.next();
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    for b in iter.take_while(u8::is_ascii_digit) {
        value = (value * 10 + (b - b'0') as i64).min(i32::MAX as i64 + 1);
    }
    if negative {
        value = -value;
    }
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
