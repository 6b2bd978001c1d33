pub mod text_file;

pub use text_file::{
    LoadedDeck, SkippedLine, load_deck, parse_deck, parse_deck_bytes, render_deck, save_deck,
};
