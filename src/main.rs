use anyhow::Context;
use clap::Parser;
use flashcards_app::app::{App, Console};
use flashcards_app::config::Config;
use flashcards_app::storage::load_deck;
use std::io;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let loaded = load_deck(&config.deck)
        .with_context(|| format!("Failed to load deck from {}", config.deck.display()))?;

    if !loaded.found {
        println!("No existing deck found. Starting with an empty deck.");
    }
    for skipped in &loaded.skipped {
        println!(
            "Warning: skipped line {} of {}: {}",
            skipped.line_number,
            config.deck.display(),
            skipped.reason
        );
    }

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    let mut app = App::new(loaded.deck, &config.deck, console);

    app.run(&mut rand::thread_rng())
        .with_context(|| format!("Flashcard session on {} failed", config.deck.display()))
}
