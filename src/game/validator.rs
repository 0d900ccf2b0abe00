use crate::{dictionary::SpellChecker, game::Rejection, utils::letters::LetterPool};

/// Shortest word length that counts as an answer
pub const MIN_WORD_LENGTH: usize = 4;

pub struct WordValidator;

impl WordValidator {
    /// Run every check in order and report the first one that fails.
    /// Recognition runs before the length check, so a short real word
    /// still costs a dictionary lookup.
    pub fn check<D: SpellChecker + ?Sized>(
        checker: &D,
        language: &str,
        word: &str,
        root_word: &str,
        used_words: &[String],
    ) -> Result<(), Rejection> {
        if !Self::is_original(word, used_words) {
            return Err(Rejection::DuplicateWord);
        }
        if !Self::is_possible(word, root_word) {
            return Err(Rejection::UnspellableWord {
                root: root_word.to_string(),
            });
        }
        if !Self::is_real(checker, word, language) {
            return Err(Rejection::UnrecognizedWord);
        }
        if !Self::is_long_enough(word, root_word) {
            return Err(Rejection::WordTooShortOrIsRoot);
        }
        Ok(())
    }

    /// Check the word has not been accepted this round
    pub fn is_original(word: &str, used_words: &[String]) -> bool {
        !used_words.iter().any(|used| used == word)
    }

    /// Check every letter of the word can be taken from the root,
    /// counting repeated letters
    pub fn is_possible(word: &str, root_word: &str) -> bool {
        LetterPool::new(root_word).take_all(word)
    }

    /// Check the spell checker finds nothing wrong across the whole word
    pub fn is_real<D: SpellChecker + ?Sized>(checker: &D, word: &str, language: &str) -> bool {
        checker.misspelled_range(word, language).is_none()
    }

    pub fn is_long_enough(word: &str, root_word: &str) -> bool {
        word.chars().count() >= MIN_WORD_LENGTH && word != root_word
    }
}
