//! Word Scramble: spell as many words as you can from the letters of a root word.
//!
//! [`game::Game`] owns a round. It checks each submission for originality,
//! spellability from the root, dictionary recognition and minimum length,
//! in that order, and scores accepted words by their length.

pub mod config;
pub mod dictionary;
pub mod game;
pub mod models;
pub mod session;
pub mod utils;
pub mod words;
