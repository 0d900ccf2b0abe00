/// Letters of a word that are still available to spell with.
/// Each occurrence can be taken once.
#[derive(Debug, Clone)]
pub struct LetterPool {
    letters: Vec<char>,
}

impl LetterPool {
    pub fn new(word: &str) -> Self {
        Self {
            letters: word.chars().collect(),
        }
    }

    /// Remove one occurrence of `letter`. Returns false if none is left.
    pub fn take(&mut self, letter: char) -> bool {
        match self.letters.iter().position(|&c| c == letter) {
            Some(pos) => {
                self.letters.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Take every letter of `word` in order, stopping at the first one missing
    pub fn take_all(&mut self, word: &str) -> bool {
        word.chars().all(|letter| self.take(letter))
    }

    pub fn remaining(&self) -> usize {
        self.letters.len()
    }
}
