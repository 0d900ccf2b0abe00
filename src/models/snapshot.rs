use serde::{Deserialize, Serialize};

/// Read-only view of a round for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub root_word: String,
    /// Newest first
    pub used_words: Vec<UsedWord>,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsedWord {
    pub word: String,
    pub length: usize,
}
