use thiserror::Error;

/// Why a submitted word was turned down. Display gives the player-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Be more original")]
    DuplicateWord,
    #[error("You can't spell that word from '{root}'!")]
    UnspellableWord { root: String },
    #[error("You can't just make them up, you know!")]
    UnrecognizedWord,
    #[error("Word has to be at least 4 characters long")]
    WordTooShortOrIsRoot,
}

impl Rejection {
    /// Short heading shown above the message
    pub fn title(&self) -> &'static str {
        match self {
            Rejection::DuplicateWord => "Word used already",
            Rejection::UnspellableWord { .. } => "Word not possible",
            Rejection::UnrecognizedWord => "Word not recognized",
            Rejection::WordTooShortOrIsRoot => {
                "Word too short or you entered the same word as the root"
            }
        }
    }
}
