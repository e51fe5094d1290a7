//! Per-session conversion history
//!
//! Append-only and session-scoped: each session owns its own log, so no
//! locking or sharing is involved. The log itself is uncapped; only the
//! display slice is bounded.

use crate::shared::types::HistoryEntry;

/// How many entries the presentation layer shows by default
pub const DISPLAY_LIMIT: usize = 5;

/// Ordered record of past conversions for one session
#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a formatted entry. No deduplication, no cap at write time.
    pub fn append(&mut self, text: impl Into<String>) {
        self.entries.push(HistoryEntry::new(text.into()));
    }

    /// The last `n` entries, most recent first. Returns fewer when the log
    /// holds fewer, and an empty slice for an empty log.
    pub fn recent(&self, n: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(n).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discard all entries, ending the rolling record for this session.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_returns_last_five_newest_first() {
        let mut log = HistoryLog::new();
        for i in 1..=7 {
            log.append(format!("entry {}", i));
        }
        let recent: Vec<&str> = log
            .recent(DISPLAY_LIMIT)
            .iter()
            .map(|entry| entry.text.as_str())
            .collect();
        assert_eq!(recent, ["entry 7", "entry 6", "entry 5", "entry 4", "entry 3"]);
        assert_eq!(log.len(), 7);
    }

    #[test]
    fn recent_on_short_log_returns_everything() {
        let mut log = HistoryLog::new();
        log.append("only one");
        let recent = log.recent(DISPLAY_LIMIT);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].text, "only one");
    }

    #[test]
    fn recent_on_empty_log_is_empty() {
        let log = HistoryLog::new();
        assert!(log.recent(DISPLAY_LIMIT).is_empty());
        assert!(log.is_empty());
    }

    #[test]
    fn clear_empties_the_log() {
        let mut log = HistoryLog::new();
        log.append("a");
        log.append("b");
        log.clear();
        assert!(log.is_empty());
    }
}
