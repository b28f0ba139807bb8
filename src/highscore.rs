//! Placeholder highscore tables.

use serde::{Deserialize, Serialize};

/// Number of rows in the stub table
pub const STUB_HIGHSCORE_SLOTS: usize = 10;

/// Name shown in rows nobody has claimed yet
pub const STUB_HIGHSCORE_NAME: &str = "No Entry Yet";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighscoreEntry {
    pub name: String,
    pub score: i64,
}

impl HighscoreEntry {
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    /// A zero-score row with the default placeholder name
    pub fn placeholder() -> Self {
        Self::new(STUB_HIGHSCORE_NAME, 0)
    }
}

/// An empty highscore list for games that have no real entries yet:
/// ten rows of `{ name: "No Entry Yet", score: 0 }`.
pub fn populate_stub_highscore() -> Vec<HighscoreEntry> {
    stub_highscore(STUB_HIGHSCORE_SLOTS, STUB_HIGHSCORE_NAME)
}

/// `slots` zero-score rows named `placeholder`.
pub fn stub_highscore(slots: usize, placeholder: &str) -> Vec<HighscoreEntry> {
    vec![HighscoreEntry::new(placeholder, 0); slots]
}
