use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};

use crate::{
    dictionary::SpellChecker,
    game::{GameState, Rejection, WordValidator},
    models::{GameSnapshot, UsedWord},
    words::WordSource,
};

/// Root word used when the word source has nothing to offer
pub const FALLBACK_ROOT_WORD: &str = "silkworm";

/// Outcome of a single submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Input was blank after trimming; nothing happened
    Ignored,
    Accepted { word: String, points: u32, score: u32 },
    Rejected(Rejection),
}

/// Runs rounds: picks root words, validates submissions and keeps score
pub struct Game<D, S> {
    dictionary: D,
    source: S,
    language: String,
    rng: StdRng,
    state: GameState,
}

impl<D: SpellChecker, S: WordSource> Game<D, S> {
    /// Create a game seeded from the OS and start the first round
    pub fn new(dictionary: D, source: S, language: &str) -> Self {
        Self::with_rng(dictionary, source, language, StdRng::from_os_rng())
    }

    /// Create a game with a fixed seed, for reproducible rounds
    pub fn with_seed(dictionary: D, source: S, language: &str, seed: u64) -> Self {
        Self::with_rng(dictionary, source, language, StdRng::seed_from_u64(seed))
    }

    fn with_rng(dictionary: D, source: S, language: &str, rng: StdRng) -> Self {
        let mut game = Self {
            dictionary,
            source,
            language: language.to_string(),
            rng,
            state: GameState::new(FALLBACK_ROOT_WORD),
        };
        game.start_game();
        game
    }

    /// Pick a new root word and clear the round
    pub fn start_game(&mut self) -> &str {
        let root_word = match self.source.root_words().choose(&mut self.rng) {
            Some(word) => word.clone(),
            None => {
                tracing::warn!(
                    "Word source is empty, falling back to '{}'",
                    FALLBACK_ROOT_WORD
                );
                FALLBACK_ROOT_WORD.to_string()
            }
        };

        tracing::info!("Starting round with root word '{}'", root_word);
        self.state = GameState::new(root_word);
        self.state.root_word()
    }

    /// Validate a raw submission and, if it passes, record it
    pub fn submit(&mut self, raw: &str) -> Submission {
        let word = raw.trim().to_lowercase();
        if word.is_empty() {
            return Submission::Ignored;
        }

        if let Err(rejection) = WordValidator::check(
            &self.dictionary,
            &self.language,
            &word,
            self.state.root_word(),
            self.state.used_words(),
        ) {
            tracing::debug!("Rejected '{}': {}", word, rejection.title());
            return Submission::Rejected(rejection);
        }

        let points = self.state.record(word.clone());
        tracing::debug!(
            "Accepted '{}' for {} points, score now {}",
            word,
            points,
            self.state.score()
        );

        Submission::Accepted {
            word,
            points,
            score: self.state.score(),
        }
    }

    /// Reset score and used words, then start over with a new root word
    pub fn restart(&mut self) -> &str {
        tracing::info!("Restarting game at score {}", self.state.score());
        self.start_game()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn root_word(&self) -> &str {
        self.state.root_word()
    }

    /// What the presentation layer needs to draw the round
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            root_word: self.state.root_word().to_string(),
            used_words: self
                .state
                .used_words()
                .iter()
                .map(|word| UsedWord {
                    word: word.clone(),
                    length: word.chars().count(),
                })
                .collect(),
            score: self.state.score(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dictionary::WordList, game::Scorer, words::StartWords};

    const WORDS: &str = "silk\nworm\nworms\nmilk\nsilkworm\nlisten\nsilent\ntinsel\ntins\ntin\nlist\n";

    fn game_with_root(root: &str) -> Game<WordList, StartWords> {
        Game::with_seed(
            WordList::from_lines(WORDS, "en"),
            StartWords::from_lines(root),
            "en",
            7,
        )
    }

    #[test]
    fn test_empty_source_falls_back() {
        let game = Game::with_seed(WordList::empty("en"), StartWords::empty(), "en", 1);
        assert_eq!(game.root_word(), FALLBACK_ROOT_WORD);
        assert_eq!(game.state().score(), 0);
        assert!(game.state().used_words().is_empty());
    }

    #[test]
    fn test_root_comes_from_source() {
        let source = StartWords::from_lines("listen\ntinsel\nsilkworm\n");
        let mut game = Game::with_seed(WordList::empty("en"), source, "en", 42);
        for _ in 0..20 {
            let root = game.restart().to_string();
            assert!(["listen", "tinsel", "silkworm"].contains(&root.as_str()));
        }
    }

    #[test]
    fn test_same_seed_same_root() {
        let source = || StartWords::from_lines("listen\ntinsel\nsilkworm\nplankton\n");
        let a = Game::with_seed(WordList::empty("en"), source(), "en", 99);
        let b = Game::with_seed(WordList::empty("en"), source(), "en", 99);
        assert_eq!(a.root_word(), b.root_word());
    }

    #[test]
    fn test_worms_from_silkworm() {
        let mut game = game_with_root("silkworm");
        assert_eq!(
            game.submit("worms"),
            Submission::Accepted {
                word: "worms".to_string(),
                points: 5,
                score: 5
            }
        );
        assert_eq!(game.state().used_words(), ["worms"]);
    }

    #[test]
    fn test_input_is_normalized() {
        let mut game = game_with_root("silkworm");
        assert!(matches!(
            game.submit("  SiLk \n"),
            Submission::Accepted { ref word, .. } if word == "silk"
        ));
    }

    #[test]
    fn test_blank_input_ignored() {
        let mut game = game_with_root("silkworm");
        assert_eq!(game.submit(""), Submission::Ignored);
        assert_eq!(game.submit("   \t\n"), Submission::Ignored);
        assert_eq!(game.state().score(), 0);
    }

    #[test]
    fn test_duplicate_leaves_state_unchanged() {
        let mut game = game_with_root("silkworm");
        game.submit("silk");
        let before = game.state().clone();

        assert_eq!(
            game.submit("SILK"),
            Submission::Rejected(Rejection::DuplicateWord)
        );
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_unspellable() {
        let mut game = game_with_root("listen");
        assert_eq!(
            game.submit("lists"),
            Submission::Rejected(Rejection::UnspellableWord {
                root: "listen".to_string()
            })
        );
    }

    #[test]
    fn test_unrecognized() {
        let mut game = game_with_root("listen");
        assert_eq!(
            game.submit("nilt"),
            Submission::Rejected(Rejection::UnrecognizedWord)
        );
    }

    #[test]
    fn test_short_real_word_rejected() {
        let mut game = game_with_root("listen");
        assert_eq!(
            game.submit("tin"),
            Submission::Rejected(Rejection::WordTooShortOrIsRoot)
        );
    }

    #[test]
    fn test_root_word_rejected() {
        let mut game = game_with_root("listen");
        assert_eq!(
            game.submit("listen"),
            Submission::Rejected(Rejection::WordTooShortOrIsRoot)
        );
        assert!(game.state().used_words().is_empty());
    }

    #[test]
    fn test_score_tracks_accepted_words() {
        let mut game = game_with_root("listen");
        for word in ["silent", "tins", "tin", "list", "tinsel", "silent"] {
            game.submit(word);
        }

        assert_eq!(game.state().used_words(), ["tinsel", "list", "tins", "silent"]);
        assert_eq!(game.state().score(), 20);
        let total: u32 = game.state().used_words().iter().map(|w| Scorer::word_score(w)).sum();
        assert_eq!(game.state().score(), total);
    }

    #[test]
    fn test_restart_clears_round() {
        let mut game = game_with_root("silkworm");
        game.submit("worms");
        game.submit("milk");

        assert_eq!(game.restart(), "silkworm");
        assert_eq!(game.state().score(), 0);
        assert!(game.state().used_words().is_empty());
        assert!(matches!(game.submit("worms"), Submission::Accepted { .. }));
    }

    #[test]
    fn test_snapshot() {
        let mut game = game_with_root("silkworm");
        game.submit("silk");
        game.submit("worms");

        let snapshot = game.snapshot();
        assert_eq!(snapshot.root_word, "silkworm");
        assert_eq!(snapshot.score, 9);
        assert_eq!(
            snapshot.used_words,
            vec![
                UsedWord { word: "worms".to_string(), length: 5 },
                UsedWord { word: "silk".to_string(), length: 4 },
            ]
        );
    }
}
