//! Bounded, newest-first activity log.

use std::collections::VecDeque;

use entities::Activity;

/// Maximum number of entries the log keeps.
pub const MAX_ACTIVITY_ENTRIES: usize = 10;

/// Append-at-front log holding at most [`MAX_ACTIVITY_ENTRIES`] entries.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: VecDeque<Activity>,
}

impl ActivityLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a log from entries ordered newest first, keeping the newest
    /// [`MAX_ACTIVITY_ENTRIES`].
    pub fn from_entries(entries: impl IntoIterator<Item = Activity>) -> Self {
        Self {
            entries: entries.into_iter().take(MAX_ACTIVITY_ENTRIES).collect(),
        }
    }

    /// Puts `entry` at the front, dropping the oldest entry if the log is
    /// over capacity.
    pub fn record(&mut self, entry: Activity) {
        self.entries.push_front(entry);
        while self.entries.len() > MAX_ACTIVITY_ENTRIES {
            self.entries.pop_back();
        }
    }

    /// Copies the entries out, newest first.
    pub fn all(&self) -> Vec<Activity> {
        self.entries.iter().cloned().collect()
    }

    /// Iterates over the entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use entities::ActivityKind;

    use super::*;

    fn entry(n: usize) -> Activity {
        Activity::new(ActivityKind::ProfileUpdated, format!("entry {n}"))
    }

    #[test]
    fn test_record_prepends() {
        let mut log = ActivityLog::new();
        log.record(entry(1));
        log.record(entry(2));

        let descriptions: Vec<_> = log.iter().map(|a| a.description.as_str()).collect();
        assert_eq!(descriptions, vec!["entry 2", "entry 1"]);
    }

    #[test]
    fn test_eleventh_entry_evicts_oldest() {
        let mut log = ActivityLog::new();
        for n in 1..=11 {
            log.record(entry(n));
        }

        let all = log.all();
        assert_eq!(all.len(), MAX_ACTIVITY_ENTRIES);
        assert_eq!(all[0].description, "entry 11");
        assert_eq!(all[9].description, "entry 2");
        assert!(all.iter().all(|a| a.description != "entry 1"));
    }

    #[test]
    fn test_all_does_not_drain() {
        let mut log = ActivityLog::new();
        log.record(entry(1));

        assert_eq!(log.all(), log.all());
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_from_entries_truncates() {
        let log = ActivityLog::from_entries((0..15).map(entry));

        assert_eq!(log.len(), MAX_ACTIVITY_ENTRIES);
        assert_eq!(log.all()[0].description, "entry 0");
    }
}
