//! Command-line and environment configuration.

use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_DECK_PATH: &str = "flashcards.txt";

/// Leitner box flashcards in the terminal.
#[derive(Parser, Debug, Clone)]
#[command(name = "flashcards", version, about)]
pub struct Config {
    /// Deck file to load on start and save on exit
    #[arg(short, long, env = "FLASHCARDS_DECK", default_value = DEFAULT_DECK_PATH)]
    pub deck: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "FLASHCARDS_LOG", default_value = "warn")]
    pub log: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["flashcards"]).unwrap();
        // either variable may be set in the environment running the tests
        if std::env::var_os("FLASHCARDS_DECK").is_none() {
            assert_eq!(config.deck, PathBuf::from(DEFAULT_DECK_PATH));
        }
        if std::env::var_os("FLASHCARDS_LOG").is_none() {
            assert_eq!(config.log, "warn");
        }
    }

    #[test]
    fn test_deck_flag() {
        let config = Config::try_parse_from(["flashcards", "--deck", "/tmp/cards.txt"]).unwrap();
        assert_eq!(config.deck, PathBuf::from("/tmp/cards.txt"));
    }
}
