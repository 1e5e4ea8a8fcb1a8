use crate::dictionary::Dictionary;
use crate::error::ConfigError;
use crate::validator::{Rejection, normalize, validate};
use crate::{debug_log, info_log};
use rand::Rng;
use rand::seq::IndexedRandom;

/// What the player asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Submit(String),
    NewGame,
    Exit,
}

/// Front-end used by [`game_loop`]. Implemented by the line CLI and the TUI.
pub trait GameInterface {
    fn display_new_game(&mut self, root_word: &str, word_list_len: usize);
    /// `None` means nothing actionable was entered; the loop asks again.
    fn read_action(&mut self, session: &GameSession) -> Option<UserAction>;
    fn display_accepted(&mut self, word: &str, session: &GameSession);
    fn display_rejection(&mut self, rejection: Rejection, root_word: &str);
    fn display_exit_message(&mut self);
}

/// State of one play-through: the root word and the words accepted so far,
/// most recent first.
#[derive(Debug, Clone)]
pub struct GameSession {
    root_word: String,
    used_words: Vec<String>,
    fallback_root: String,
}

impl GameSession {
    /// Create a session with the root word to use when a word list is empty.
    ///
    /// The session starts on the fallback word until [`start_new_game`] is
    /// called.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFallback`] if `fallback_root` is blank or
    /// contains anything other than letters.
    ///
    /// [`start_new_game`]: GameSession::start_new_game
    pub fn new(fallback_root: &str) -> Result<Self, ConfigError> {
        let fallback = normalize(fallback_root);
        if fallback.is_empty() || !fallback.chars().all(char::is_alphabetic) {
            return Err(ConfigError::InvalidFallback(fallback_root.to_string()));
        }
        Ok(Self {
            root_word: fallback.clone(),
            used_words: Vec::new(),
            fallback_root: fallback,
        })
    }

    /// Pick a new root word uniformly from `word_list` and clear the used
    /// words. Blank entries are ignored; with nothing left the fallback word
    /// is used.
    pub fn start_new_game<R: Rng + ?Sized>(&mut self, word_list: &[String], rng: &mut R) -> &str {
        let usable: Vec<&String> = word_list.iter().filter(|w| !w.trim().is_empty()).collect();
        self.root_word = match usable.choose(rng) {
            Some(word) => normalize(word),
            None => {
                log::warn!(
                    "Word list is empty, falling back to '{}'",
                    self.fallback_root
                );
                self.fallback_root.clone()
            }
        };
        self.used_words.clear();
        info_log!("New game with root word '{}'", self.root_word);
        &self.root_word
    }

    /// Validate `candidate` against the current root word and, if accepted,
    /// put it at the front of the used words.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] reported by the validator; the session is
    /// left unchanged.
    pub fn submit<D: Dictionary + ?Sized>(
        &mut self,
        candidate: &str,
        dictionary: &D,
    ) -> Result<String, Rejection> {
        if let Err(rejection) = validate(candidate, &self.root_word, &self.used_words, dictionary)
        {
            debug_log!("Rejected '{}': {}", candidate, rejection);
            return Err(rejection);
        }
        let word = normalize(candidate);
        self.used_words.insert(0, word.clone());
        debug_log!("Accepted '{}' ({} words)", word, self.used_words.len());
        Ok(word)
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.used_words.len()
    }

    /// "1 word", "3 words".
    #[must_use]
    pub fn word_count_label(&self) -> String {
        match self.used_words.len() {
            1 => "1 word".to_string(),
            n => format!("{n} words"),
        }
    }
}

/// Run games until the player exits or input runs out.
pub fn game_loop<D, I, R>(
    session: &mut GameSession,
    word_list: &[String],
    dictionary: &D,
    interface: &mut I,
    rng: &mut R,
) where
    D: Dictionary + ?Sized,
    I: GameInterface + ?Sized,
    R: Rng + ?Sized,
{
    let root = session.start_new_game(word_list, rng).to_string();
    interface.display_new_game(&root, word_list.len());

    loop {
        let Some(action) = interface.read_action(session) else {
            continue;
        };

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewGame => {
                let root = session.start_new_game(word_list, rng).to_string();
                interface.display_new_game(&root, word_list.len());
            }
            UserAction::Submit(candidate) => match session.submit(&candidate, dictionary) {
                Ok(word) => interface.display_accepted(&word, session),
                Err(rejection) if rejection.is_silent() => {}
                Err(rejection) => interface.display_rejection(rejection, session.root_word()),
            },
        }
    }
}
