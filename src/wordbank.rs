use crate::error::ConfigError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_START_WORDS: &str = include_str!("resources/start.txt");

/// Root word used when no word list supplies one.
pub const FALLBACK_ROOT_WORD: &str = "silkworm";

fn parse_start_word(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    if !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(word)
    } else {
        None
    }
}

pub fn load_start_words_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(parse_start_word).collect()
}

pub fn load_start_words_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ConfigError> {
    let path = path.as_ref();
    let to_error = |source| ConfigError::WordList {
        path: path.to_path_buf(),
        source,
    };
    let reader = BufReader::new(File::open(path).map_err(to_error)?);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = parse_start_word(&line.map_err(to_error)?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Per-user override list, `<config dir>/word-scramble/start.txt`.
pub fn get_start_words_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("word-scramble").join("start.txt"))
}

/// Resolve the root word list: an explicit file, else the user override if
/// present, else the embedded list.
pub fn load_start_words(path: Option<&Path>) -> Result<Vec<String>, ConfigError> {
    if let Some(path) = path {
        let words = load_start_words_from_file(path)?;
        log::info!("Loaded {} root words from {}", words.len(), path.display());
        return Ok(words);
    }

    if let Some(user_path) = get_start_words_path().filter(|p| p.is_file()) {
        match load_start_words_from_file(&user_path) {
            Ok(words) if !words.is_empty() => {
                log::info!(
                    "Loaded {} root words from {}",
                    words.len(),
                    user_path.display()
                );
                return Ok(words);
            }
            Ok(_) => log::warn!("{} has no usable words, ignoring it", user_path.display()),
            Err(e) => log::warn!("{e}; using embedded root words"),
        }
    }

    Ok(load_start_words_from_str(EMBEDDED_START_WORDS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_from_str_trims_and_lowercases() {
        let words = load_start_words_from_str("  Silkworm \nFREEDOM\n\n");
        assert_eq!(words, vec!["silkworm".to_string(), "freedom".to_string()]);
    }

    #[test]
    fn test_load_from_str_skips_non_letters() {
        let words = load_start_words_from_str("silkworm\nabc123\nice cream\n-\n");
        assert_eq!(words, vec!["silkworm".to_string()]);
    }

    #[test]
    fn test_embedded_start_words() {
        let words = load_start_words_from_str(EMBEDDED_START_WORDS);
        assert!(!words.is_empty());
        assert!(words.contains(&FALLBACK_ROOT_WORD.to_string()));
        assert!(words.iter().all(|w| w.len() == 8));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("word_scramble_start_words_test.txt");
        fs::write(&path, "Absolute\nbackpack\n\n").unwrap();
        let words = load_start_words_from_file(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(words, vec!["absolute".to_string(), "backpack".to_string()]);
    }

    #[test]
    fn test_load_from_missing_file_is_error() {
        let result = load_start_words_from_file("/nonexistent/word_scramble/start.txt");
        assert!(matches!(result, Err(ConfigError::WordList { .. })));
    }

    #[test]
    fn test_load_start_words_explicit_path_must_exist() {
        assert!(load_start_words(Some(Path::new("/nonexistent/word_scramble/start.txt"))).is_err());
    }

    #[test]
    fn test_start_words_path_location() {
        if let Some(path) = get_start_words_path() {
            assert!(path.ends_with("word-scramble/start.txt"));
        }
    }
}
