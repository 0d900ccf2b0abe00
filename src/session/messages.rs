use serde::{Deserialize, Serialize};

use crate::models::{GameSnapshot, UsedWord};

/// Messages sent from the player to the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    SubmitWord { word: String },
    Restart,
    GetState,
}

impl ClientMessage {
    /// Parse one input line. JSON objects are decoded as messages; anything
    /// else is plain text, where `/restart` and `/state` are commands and
    /// every other line is a word to submit.
    pub fn parse_line(line: &str) -> serde_json::Result<Self> {
        let trimmed = line.trim();
        if trimmed.starts_with('{') {
            return serde_json::from_str(trimmed);
        }

        Ok(match trimmed {
            "/restart" => ClientMessage::Restart,
            "/state" => ClientMessage::GetState,
            _ => ClientMessage::SubmitWord {
                word: line.to_string(),
            },
        })
    }
}

/// Messages sent from the game to the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    GameState {
        root_word: String,
        used_words: Vec<UsedWord>,
        score: u32,
    },
    WordScored {
        word: String,
        points: u32,
        score: u32,
    },
    InvalidWord {
        title: String,
        message: String,
    },
    Error {
        message: String,
    },
}

impl From<GameSnapshot> for ServerMessage {
    fn from(snapshot: GameSnapshot) -> Self {
        ServerMessage::GameState {
            root_word: snapshot.root_word,
            used_words: snapshot.used_words,
            score: snapshot.score,
        }
    }
}
