//! Console application: menu loop, card entry and the terminal reviewer.

use crate::error::Result;
use crate::export::json::{export_json_to_path, import_json};
use crate::models::{Deck, DeckStats, Flashcard, Judgment, ReviewSession, Reviewer, Step};
use crate::storage::save_deck;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Main menu entries
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    AddCard,
    Review,
    List,
    Stats,
    Export,
    Import,
    Save,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" | "a" | "add" => Some(Self::AddCard),
            "2" | "r" | "review" => Some(Self::Review),
            "3" | "l" | "list" => Some(Self::List),
            "4" | "s" | "stats" => Some(Self::Stats),
            "5" | "e" | "export" => Some(Self::Export),
            "6" | "i" | "import" => Some(Self::Import),
            "7" | "w" | "save" => Some(Self::Save),
            "0" | "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

const MENU: &str = "\n1. Add card\n2. Review due cards\n3. List cards\n4. Statistics\n\
5. Export to JSON\n6. Import from JSON\n7. Save\n0. Save and quit\n";

/// Accepts c/i, y/n (any case) and q.
pub fn parse_judgment(input: &str) -> Option<Judgment> {
    match input.trim().to_ascii_lowercase().as_str() {
        "c" | "y" | "yes" | "correct" => Some(Judgment::Correct),
        "i" | "n" | "no" | "incorrect" => Some(Judgment::Incorrect),
        "q" | "quit" => Some(Judgment::Quit),
        _ => None,
    }
}

/// Line-based prompt/response channel over any reader and writer.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// Prints `prompt` and reads one line. `None` means end of input.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Reprompts until `parse` accepts the answer. `None` means end of input.
    pub fn ask_until<T>(
        &mut self,
        prompt: &str,
        retry_hint: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };
            match parse(&line) {
                Some(value) => return Ok(Some(value)),
                None => self.say(retry_hint)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Reviewer for Console<R, W> {
    fn reveal(&mut self, card: &Flashcard, position: usize, total: usize) -> io::Result<Step> {
        self.say(&format!("\n[{position}/{total}] FRONT: {}", card.front))?;
        match self.ask("Press Enter to reveal (q to stop)... ")? {
            Some(line) if !line.trim().eq_ignore_ascii_case("q") => Ok(Step::Reveal),
            _ => Ok(Step::Stop),
        }
    }

    fn judge(&mut self, card: &Flashcard) -> io::Result<Judgment> {
        self.say(&format!("BACK: {}", card.back))?;
        let judgment = self.ask_until(
            "Correct? (c/i, y/n, q to stop): ",
            "Please answer c, i, y, n or q.",
            parse_judgment,
        )?;
        Ok(judgment.unwrap_or(Judgment::Quit))
    }
}

/// Interactive application state
pub struct App<R: BufRead, W: Write> {
    deck: Deck,
    deck_path: PathBuf,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(deck: Deck, deck_path: impl Into<PathBuf>, console: Console<R, W>) -> Self {
        Self {
            deck,
            deck_path: deck_path.into(),
            console,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn into_parts(self) -> (Deck, Console<R, W>) {
        (self.deck, self.console)
    }

    /// Runs the menu until quit or end of input, then saves the deck.
    /// A failed final save is returned to the caller.
    pub fn run<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<()> {
        self.console.say(&format!(
            "Flashcards: {} cards, round {}",
            self.deck.len(),
            self.deck.current_round
        ))?;

        loop {
            self.console.say(MENU)?;
            let choice = self.console.ask_until(
                "Choose an option: ",
                "Unknown option, try again.",
                MenuChoice::parse,
            )?;
            debug!(?choice, "menu choice");

            match choice.unwrap_or(MenuChoice::Quit) {
                MenuChoice::AddCard => self.add_card()?,
                MenuChoice::Review => self.review(rng)?,
                MenuChoice::List => self.list_cards()?,
                MenuChoice::Stats => {
                    let stats = DeckStats::from_deck(&self.deck);
                    self.console.say(stats.render().trim_end())?;
                }
                MenuChoice::Export => self.handle_export()?,
                MenuChoice::Import => self.handle_import()?,
                MenuChoice::Save => {
                    if let Err(e) = save_deck(&self.deck, &self.deck_path) {
                        error!("save failed: {e}");
                        self.console.say(&format!("Save failed: {e}"))?;
                    } else {
                        self.console.say("Deck saved.")?;
                    }
                }
                MenuChoice::Quit => break,
            }
        }

        save_deck(&self.deck, &self.deck_path)?;
        self.console.say(&format!(
            "Progress saved to {}. Goodbye!",
            self.deck_path.display()
        ))?;
        Ok(())
    }

    fn add_card(&mut self) -> Result<()> {
        let Some(front) = self.console.ask("Enter front: ")? else {
            return Ok(());
        };
        let Some(back) = self.console.ask("Enter back: ")? else {
            return Ok(());
        };

        let message = match self.deck.create(&front, &back).map(|_| ()) {
            Ok(()) => format!("Card added ({} in deck).", self.deck.len()),
            Err(e) => format!("Card rejected: {e}"),
        };
        self.console.say(&message)?;
        Ok(())
    }

    fn review<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<()> {
        let summary = ReviewSession::new(&mut self.deck, &mut self.console).run_round(rng)?;
        self.console.say(&summary.message())?;
        Ok(())
    }

    fn list_cards(&mut self) -> Result<()> {
        if self.deck.is_empty() {
            self.console.say("No cards yet.")?;
            return Ok(());
        }

        let lines: Vec<String> = self
            .deck
            .records()
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let accuracy = record
                    .accuracy()
                    .map(|pct| format!("{pct:.0}%"))
                    .unwrap_or_else(|| "-".to_string());
                format!(
                    "{}. {} -> {} [box {}, due round {}, {}/{} correct, {}]",
                    i + 1,
                    record.card.front,
                    record.card.back,
                    record.box_level,
                    record.due_round,
                    record.times_correct,
                    record.times_reviewed,
                    accuracy
                )
            })
            .collect();

        for line in lines {
            self.console.say(&line)?;
        }
        Ok(())
    }

    fn ask_path(&mut self, prompt: &str) -> Result<Option<PathBuf>> {
        Ok(self
            .console
            .ask(prompt)?
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .map(PathBuf::from))
    }

    /// Handles deck export to JSON file
    fn handle_export(&mut self) -> Result<()> {
        let Some(path) = self.ask_path("Export to file: ")? else {
            self.console.say("Export cancelled.")?;
            return Ok(());
        };

        match export_json_to_path(&self.deck, &path) {
            Ok(()) => self.console.say(&format!(
                "Deck exported to {} ({} cards).",
                path.display(),
                self.deck.len()
            ))?,
            Err(e) => self.console.say(&format!("Export failed: {e}"))?,
        }
        Ok(())
    }

    /// Handles card import from JSON file
    fn handle_import(&mut self) -> Result<()> {
        let Some(path) = self.ask_path("Import from file: ")? else {
            self.console.say("Import cancelled.")?;
            return Ok(());
        };

        match import_json(&path) {
            Ok(export) => {
                let report = self.deck.import_cards(&export);
                self.console.say(&format!(
                    "Imported {} cards from {} ({} rejected).",
                    report.added,
                    display_name(&path),
                    report.rejected
                ))?;
            }
            Err(e) => self.console.say(&format!(
                "Import failed: {e}\n\nExpected a file written by the export option:\n\
                 {{ \"exported_at\": ..., \"current_round\": ..., \"cards\": [...] }}"
            ))?,
        }
        Ok(())
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
