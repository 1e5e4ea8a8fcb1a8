//! Real-word lookup.
//!
//! The game only needs a yes/no answer for "is this an English word", so the
//! lookup is a trait. [`WordListDictionary`] backs it with a plain word list:
//! a user file, the system word list or the list compiled into the binary.

use crate::error::ConfigError;
use crate::info_log;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary.txt");

/// Word list shipped with most Unix systems.
pub const SYSTEM_DICTIONARY_PATH: &str = "/usr/share/dict/words";

pub trait Dictionary {
    fn is_real_word(&self, word: &str) -> bool;
}

impl<F> Dictionary for F
where
    F: Fn(&str) -> bool,
{
    fn is_real_word(&self, word: &str) -> bool {
        self(word)
    }
}

#[derive(Debug, Default, Clone)]
pub struct WordListDictionary {
    words: HashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary from newline-delimited words.
    ///
    /// Entries are lowercased; blank lines and entries with anything other
    /// than letters (possessives, abbreviations) are skipped.
    #[must_use]
    pub fn from_lines(data: &str) -> Self {
        let words = data.lines().filter_map(normalize_entry).collect();
        Self { words }
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Dictionary`] if the file can't be opened or read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let to_error = |source| ConfigError::Dictionary {
            path: path.to_path_buf(),
            source,
        };
        let reader = BufReader::new(File::open(path).map_err(to_error)?);
        let mut words = HashSet::new();
        for line in reader.lines() {
            if let Some(word) = normalize_entry(&line.map_err(to_error)?) {
                words.insert(word);
            }
        }
        Ok(Self { words })
    }

    #[must_use]
    pub fn embedded() -> Self {
        Self::from_lines(EMBEDDED_DICTIONARY)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordListDictionary {
    fn is_real_word(&self, word: &str) -> bool {
        self.words.contains(&word.trim().to_lowercase())
    }
}

fn normalize_entry(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    if !word.is_empty() && word.chars().all(char::is_alphabetic) {
        Some(word)
    } else {
        None
    }
}

/// Pick the dictionary to play with.
///
/// An explicit `path` must load. Without one, the system word list is used
/// when readable and the embedded list otherwise.
///
/// # Errors
///
/// Returns [`ConfigError::Dictionary`] if an explicit `path` can't be read.
pub fn load_dictionary(path: Option<&Path>) -> Result<WordListDictionary, ConfigError> {
    if let Some(path) = path {
        let dictionary = WordListDictionary::from_file(path)?;
        log::info!(
            "Loaded {} dictionary words from {}",
            dictionary.len(),
            path.display()
        );
        return Ok(dictionary);
    }

    match WordListDictionary::from_file(SYSTEM_DICTIONARY_PATH) {
        Ok(dictionary) if !dictionary.is_empty() => {
            log::info!(
                "Loaded {} dictionary words from {SYSTEM_DICTIONARY_PATH}",
                dictionary.len()
            );
            Ok(dictionary)
        }
        Ok(_) => {
            log::warn!("{SYSTEM_DICTIONARY_PATH} is empty, using embedded dictionary");
            Ok(WordListDictionary::embedded())
        }
        Err(e) => {
            info_log!("System dictionary unavailable ({}), using embedded dictionary", e);
            Ok(WordListDictionary::embedded())
        }
    }
}
