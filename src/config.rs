use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub words: WordsConfig,
    pub dictionary: DictionaryConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WordsConfig {
    pub source_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryConfig {
    pub path: String,
    pub language: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Fixed seed for root word selection, mostly useful for reproducing a round
    pub rng_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let words = WordsConfig {
            source_path: env::var("WORD_SOURCE_PATH")
                .unwrap_or_else(|_| "./data/start.txt".to_string()),
        };

        let dictionary = DictionaryConfig {
            path: env::var("DICTIONARY_PATH")
                .unwrap_or_else(|_| "/usr/share/dict/words".to_string()),
            language: env::var("DICTIONARY_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string()),
        };

        let game = GameConfig {
            rng_seed: match env::var("RNG_SEED") {
                Ok(seed) => Some(seed.parse().context("RNG_SEED must be a number")?),
                Err(_) => None,
            },
        };

        Ok(Config {
            words,
            dictionary,
            game,
        })
    }

    pub fn language(&self) -> &str {
        &self.dictionary.language
    }
}
