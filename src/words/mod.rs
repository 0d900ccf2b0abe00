use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// Supplies the candidate root words a round can start from.
pub trait WordSource {
    fn root_words(&self) -> &[String];
}

/// Root words loaded once from a newline separated list
#[derive(Debug, Clone, Default)]
pub struct StartWords {
    words: Vec<String>,
}

impl StartWords {
    /// Load start words from a file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read start words {}", path.display()))?;
        let words = Self::from_lines(&content);

        tracing::info!("Loaded {} start words", words.len());

        Ok(words)
    }

    /// Blank lines are skipped so a trailing newline never yields an empty root
    pub fn from_lines(content: &str) -> Self {
        let words = content
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self { words }
    }

    /// Create an empty source (forces the fallback root word)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for StartWords {
    fn root_words(&self) -> &[String] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lines_trims_and_lowercases() {
        let words = StartWords::from_lines("Silkworm\n  listen  \n\n\nplankton\n");
        assert_eq!(words.root_words(), ["silkworm", "listen", "plankton"]);
    }

    #[test]
    fn test_windows_line_endings() {
        let words = StartWords::from_lines("silkworm\r\nlisten\r\n");
        assert_eq!(words.root_words(), ["silkworm", "listen"]);
    }

    #[test]
    fn test_empty_source() {
        let words = StartWords::empty();
        assert!(words.is_empty());
        assert!(words.root_words().is_empty());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = tokio_test::block_on(StartWords::load("/nonexistent/start.txt"));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_bundled_start_words_load() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/start.txt");
        let words = StartWords::load(path).await.unwrap();

        assert!(!words.is_empty());
        assert!(words
            .root_words()
            .iter()
            .all(|word| word.chars().all(|c| c.is_ascii_lowercase())));
    }
}
