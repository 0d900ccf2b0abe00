use anyhow::Result;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use word_scramble::{
    config::Config,
    dictionary::WordList,
    game::Game,
    session,
    words::StartWords,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout carries the session, so log to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_scramble=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Word Scramble...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load start words
    let start_words = match StartWords::load(&config.words.source_path).await {
        Ok(words) => words,
        Err(e) => {
            tracing::warn!("Failed to load start words: {:#}. Using the fallback root word.", e);
            StartWords::empty()
        }
    };

    // Load dictionary
    let dictionary = match WordList::load(&config.dictionary.path, config.language()).await {
        Ok(dict) => {
            tracing::info!("Dictionary loaded successfully");
            dict
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load dictionary: {:#}. Using empty dictionary for now.",
                e
            );
            tracing::warn!(
                "Point DICTIONARY_PATH at a word list for full functionality (tried {})",
                config.dictionary.path
            );
            WordList::empty(config.language())
        }
    };

    let mut game = match config.game.rng_seed {
        Some(seed) => Game::with_seed(dictionary, start_words, config.language(), seed),
        None => Game::new(dictionary, start_words, config.language()),
    };

    let reader = BufReader::new(tokio::io::stdin());
    session::run_session(reader, tokio::io::stdout(), &mut game).await?;

    Ok(())
}
