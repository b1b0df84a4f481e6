//! In-memory top-five leaderboard.
//!
//! Lives only as long as the process; nothing is written to disk.

use super::constants::LEADERBOARD_CAPACITY;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
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

/// Entries sorted by descending score, at most [`LEADERBOARD_CAPACITY`] long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Default for Leaderboard {
    /// The seeded rivals a fresh process starts with.
    fn default() -> Self {
        Self::with_entries(vec![
            LeaderboardEntry::new("Ace", 42),
            LeaderboardEntry::new("Maverick", 37),
            LeaderboardEntry::new("Goose", 31),
            LeaderboardEntry::new("Iceman", 26),
            LeaderboardEntry::new("Viper", 21),
        ])
    }
}

impl Leaderboard {
    pub fn with_entries(mut entries: Vec<LeaderboardEntry>) -> Self {
        sort_desc(&mut entries);
        entries.truncate(LEADERBOARD_CAPACITY);
        Self { entries }
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a score for `name`.
    ///
    /// An existing entry for the same name is only ever raised. A new name is
    /// inserted and the list is cut back to capacity. Returns whether the
    /// board changed.
    pub fn submit(&mut self, name: &str, score: u32) -> bool {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == name) {
            if score <= entry.score {
                return false;
            }
            entry.score = score;
            sort_desc(&mut self.entries);
            return true;
        }

        self.entries.push(LeaderboardEntry::new(name, score));
        sort_desc(&mut self.entries);
        let before = self.entries.len();
        self.entries.truncate(LEADERBOARD_CAPACITY);
        // the new entry may have been the one cut off
        before <= LEADERBOARD_CAPACITY || self.rank_of(name).is_some()
    }

    /// 1-based position of `name`, if listed.
    pub fn rank_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name).map(|i| i + 1)
    }
}

/// Stable sort, so ties keep their earlier order.
fn sort_desc(entries: &mut [LeaderboardEntry]) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
}
