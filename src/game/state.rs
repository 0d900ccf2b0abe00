use crate::game::Scorer;

/// State of the current round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    root_word: String,
    /// Accepted words, newest first
    used_words: Vec<String>,
    score: u32,
}

impl GameState {
    pub fn new(root_word: impl Into<String>) -> Self {
        Self {
            root_word: root_word.into(),
            used_words: Vec::new(),
            score: 0,
        }
    }

    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Put an accepted word at the front and add its points.
    /// Returns the points earned.
    pub(crate) fn record(&mut self, word: String) -> u32 {
        let points = Scorer::word_score(&word);
        self.used_words.insert(0, word);
        self.score = self.score.saturating_add(points);
        points
    }
}
