use anyhow::{Context, Result};
use std::collections::HashSet;
use std::ops::Range;
use std::path::Path;
use tokio::fs;

/// Spell-check capability the game asks whether a word is real.
pub trait SpellChecker {
    /// Byte range of the first misspelled word in `text`, or `None` when
    /// every word in it is recognized for `language`.
    fn misspelled_range(&self, text: &str, language: &str) -> Option<Range<usize>>;
}

/// Plain word list backed spell checker for a single language
pub struct WordList {
    language: String,
    words: HashSet<String>,
}

impl WordList {
    /// Load a newline separated word list from a file
    pub async fn load<P: AsRef<Path>>(path: P, language: &str) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read dictionary {}", path.display()))?;
        let list = Self::from_lines(&content, language);

        tracing::info!("Loaded {} words into dictionary", list.len());

        Ok(list)
    }

    /// Build a word list from newline separated text.
    /// Entries with anything but letters in them are skipped.
    pub fn from_lines(content: &str, language: &str) -> Self {
        let words = content
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty() && word.chars().all(char::is_alphabetic))
            .collect();

        Self {
            language: language.to_string(),
            words,
        }
    }

    /// Create an empty dictionary that recognizes nothing
    pub fn empty(language: &str) -> Self {
        Self {
            language: language.to_string(),
            words: HashSet::new(),
        }
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellChecker for WordList {
    fn misspelled_range(&self, text: &str, language: &str) -> Option<Range<usize>> {
        if language != self.language {
            return Some(0..text.len());
        }

        word_spans(text).find(|span| !self.contains(&text[span.clone()]))
    }
}

/// Byte ranges of the alphabetic runs in `text`
fn word_spans(text: &str) -> impl Iterator<Item = Range<usize>> + '_ {
    let mut chars = text.char_indices().peekable();

    std::iter::from_fn(move || {
        while let Some(&(_, c)) = chars.peek() {
            if c.is_alphabetic() {
                break;
            }
            chars.next();
        }

        let (start, _) = *chars.peek()?;
        let mut end = start;
        while let Some(&(i, c)) = chars.peek() {
            if !c.is_alphabetic() {
                break;
            }
            end = i + c.len_utf8();
            chars.next();
        }

        Some(start..end)
    })
}
