//! Table formatting utilities for CLI output.

use std::io::{self, Write};

use chrono::Local;
use namelist_core::Record;

/// Truncates a string to at most `max_chars` characters, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use namelist_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Write the records table: id, name, and the local time each was added.
pub fn write_records<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    writeln!(out, "{:<6} {:<32} Added", "ID", "Name")?;
    writeln!(out, "{}", "-".repeat(60))?;

    for record in records {
        let added = record.date_added.with_timezone(&Local);
        writeln!(
            out,
            "{:<6} {:<32} {}",
            record.id,
            truncate_string(&record.name, 32),
            added.format("%Y-%m-%d %H:%M:%S")
        )?;
    }
    Ok(())
}
