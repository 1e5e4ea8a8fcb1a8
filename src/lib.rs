// Library interface for word-scramble
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod tui;
pub mod validator;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use dictionary::{Dictionary, WordListDictionary, load_dictionary};
pub use error::ConfigError;
pub use game_state::{GameInterface, GameSession, UserAction, game_loop};
pub use validator::{Rejection, validate};
pub use wordbank::{
    FALLBACK_ROOT_WORD, load_start_words, load_start_words_from_file, load_start_words_from_str,
};
