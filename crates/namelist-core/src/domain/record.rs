//! Name record domain types.
//!
//! These types represent rows of the `names` table, independent of any
//! infrastructure concerns (database driver, HTTP encoding, etc.).

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A persisted name record.
///
/// `id` and `date_added` are assigned once at insert time and never change;
/// only `name` is mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Store-assigned primary key.
    pub id: i64,
    /// User-supplied name. Duplicates across records are allowed.
    pub name: String,
    /// UTC timestamp of insertion.
    pub date_added: DateTime<Utc>,
}

/// A record that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub name: String,
    pub date_added: DateTime<Utc>,
}

impl NewRecord {
    /// Create a new record stamped with the current time.
    ///
    /// The timestamp is truncated to milliseconds so that the value handed
    /// back to callers matches what every supported store keeps.
    pub fn now(name: impl Into<String>) -> Self {
        Self::at(name, Utc::now())
    }

    /// Create a new record with an explicit insertion time.
    pub fn at(name: impl Into<String>, date_added: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            date_added: date_added.trunc_subsecs(3),
        }
    }

    /// Attach the store-assigned ID.
    pub fn into_record(self, id: i64) -> Record {
        Record {
            id,
            name: self.name,
            date_added: self.date_added,
        }
    }
}

/// Parse a record identifier the way browser clients produce them.
///
/// Leading whitespace and an optional sign are accepted, then the longest
/// run of ASCII digits is used and any trailing characters are ignored
/// (`"12abc"` is `12`). Input without a leading digit run, or one that
/// overflows `i64`, is not an identifier.
pub fn parse_record_id(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
