use chrono::{DateTime, Utc};

const STAMP_FMT: &str = "%Y-%m-%d %H:%M";

/// Appends a timestamped line to the notes column. The whole column is read,
/// concatenated and written back; concurrent appends from two sessions race
/// last-write-wins.
pub fn append_note(existing: Option<&str>, stamp: DateTime<Utc>, text: &str) -> String {
    let line = format!("{}: {}", stamp.format(STAMP_FMT), text.trim());

    match existing {
        Some(prev) if !prev.trim().is_empty() => format!("{}\n\n{}", prev, line),
        _ => line,
    }
}
