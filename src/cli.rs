use crate::game_state::{GameInterface, GameSession, UserAction};
use crate::validator::Rejection;
use crate::wordbank::FALLBACK_ROOT_WORD;
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Word Scramble: make as many words as you can from the letters of a root word
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited list of root words
    #[arg(short = 's', long = "start-words")]
    pub start_words_path: Option<PathBuf>,

    /// Path to a newline-delimited dictionary of accepted words
    #[arg(short = 'd', long = "dictionary")]
    pub dictionary_path: Option<PathBuf>,

    /// Root word used when the word list is empty
    #[arg(long = "fallback", default_value = FALLBACK_ROOT_WORD)]
    pub fallback_root: String,

    /// Seed for root word selection, for repeatable games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

pub fn parse_action(input: &str) -> UserAction {
    let trimmed = input.trim();
    match trimmed.to_lowercase().as_str() {
        "exit" | "quit" => UserAction::Exit,
        "next" | "new" => UserAction::NewGame,
        _ => UserAction::Submit(trimmed.to_string()),
    }
}

/// Read one line of player input. End of input (or a read error) exits.
pub fn read_action<R: BufRead>(reader: &mut R, root_word: &str) -> UserAction {
    println!("\n[{root_word}] Enter a word ('next' for a new game, 'exit' to quit):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => UserAction::Exit,
        Ok(_) => parse_action(&input),
        Err(e) => {
            log::error!("Failed to read input: {e}");
            UserAction::Exit
        }
    }
}

pub fn display_new_game(root_word: &str, word_list_len: usize) {
    println!("New game! Root word: {root_word} ({word_list_len} root words loaded)");
}

pub fn display_used_words(session: &GameSession) {
    println!("{}", session.word_count_label());
    for word in session.used_words() {
        println!("  ({}) {word}", word.chars().count());
    }
}

pub fn display_rejection(rejection: Rejection, root_word: &str) {
    println!("{}: {}", rejection.title(), rejection.message(root_word));
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the `GameInterface` trait
/// This struct wraps a `BufRead` reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_new_game(&mut self, root_word: &str, word_list_len: usize) {
        display_new_game(root_word, word_list_len);
    }

    fn read_action(&mut self, session: &GameSession) -> Option<UserAction> {
        Some(read_action(&mut self.reader, session.root_word()))
    }

    fn display_accepted(&mut self, _word: &str, session: &GameSession) {
        display_used_words(session);
    }

    fn display_rejection(&mut self, rejection: Rejection, root_word: &str) {
        display_rejection(rejection, root_word);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_cli_defaults() {
        let cli = Cli::parse_from(["word-scramble"]);
        assert_eq!(cli.start_words_path, None);
        assert_eq!(cli.dictionary_path, None);
        assert_eq!(cli.fallback_root, "silkworm");
        assert_eq!(cli.seed, None);
        assert!(!cli.tui);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_cli_with_options() {
        let cli = Cli::parse_from([
            "word-scramble",
            "-s",
            "roots.txt",
            "--dictionary",
            "words.txt",
            "--fallback",
            "freedom",
            "--seed",
            "9",
            "--tui",
            "-v",
        ]);
        assert_eq!(cli.start_words_path, Some(PathBuf::from("roots.txt")));
        assert_eq!(cli.dictionary_path, Some(PathBuf::from("words.txt")));
        assert_eq!(cli.fallback_root, "freedom");
        assert_eq!(cli.seed, Some(9));
        assert!(cli.tui);
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_action_commands() {
        assert_eq!(parse_action("exit\n"), UserAction::Exit);
        assert_eq!(parse_action("QUIT"), UserAction::Exit);
        assert_eq!(parse_action("  next "), UserAction::NewGame);
        assert_eq!(parse_action("New"), UserAction::NewGame);
    }

    #[test]
    fn test_parse_action_word_is_trimmed() {
        assert_eq!(
            parse_action("  Silk \n"),
            UserAction::Submit("Silk".to_string())
        );
    }

    #[test]
    fn test_parse_action_blank_line_is_empty_submission() {
        assert_eq!(parse_action("\n"), UserAction::Submit(String::new()));
    }

    #[test]
    fn test_read_action_word() {
        let mut reader = Cursor::new("worm\n");
        assert_eq!(
            read_action(&mut reader, "silkworm"),
            UserAction::Submit("worm".to_string())
        );
    }

    #[test]
    fn test_read_action_end_of_input_exits() {
        let mut reader = Cursor::new("");
        assert_eq!(read_action(&mut reader, "silkworm"), UserAction::Exit);
    }

    #[test]
    fn test_cli_interface_reads_in_order() {
        let session = GameSession::new("silkworm").unwrap();
        let mut interface = CliInterface::new(Cursor::new("silk\nnext\nexit\n"));
        assert_eq!(
            interface.read_action(&session),
            Some(UserAction::Submit("silk".to_string()))
        );
        assert_eq!(interface.read_action(&session), Some(UserAction::NewGame));
        assert_eq!(interface.read_action(&session), Some(UserAction::Exit));
        assert_eq!(interface.read_action(&session), Some(UserAction::Exit));
    }
}
