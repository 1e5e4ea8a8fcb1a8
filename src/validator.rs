use crate::dictionary::Dictionary;
use std::fmt;

/// Shortest word the game accepts.
pub const MIN_WORD_LENGTH: usize = 3;

/// Why a candidate word was turned down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Nothing left after trimming.
    Empty,
    AlreadyUsed,
    /// The letters can't be drawn from the root word.
    NotPossible,
    /// The dictionary doesn't know the word.
    NotReal,
    TooShort,
    SameAsRoot,
}

impl Rejection {
    /// Empty input is ignored without an alert.
    #[must_use]
    pub fn is_silent(self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::AlreadyUsed => "Word used already",
            Self::NotPossible => "Word not possible",
            Self::NotReal => "Word not recognized",
            Self::TooShort => "Word is too short",
            Self::SameAsRoot => "Are you serious?",
        }
    }

    #[must_use]
    pub fn message(self, root: &str) -> String {
        match self {
            Self::Empty => String::new(),
            Self::AlreadyUsed => "Be more original".to_string(),
            Self::NotPossible => format!("You can't spell that word from '{root}'!"),
            Self::NotReal => "You can't just make them up, you know!".to_string(),
            Self::TooShort => "Try something longer, dude!".to_string(),
            Self::SameAsRoot => "It's the same word as rootWord, bro!".to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::AlreadyUsed => "already used",
            Self::NotPossible => "not possible",
            Self::NotReal => "not a real word",
            Self::TooShort => "too short",
            Self::SameAsRoot => "same as root",
        };
        f.write_str(name)
    }
}

/// Lowercase and trim raw player input.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[must_use]
pub fn is_original(word: &str, used_words: &[String]) -> bool {
    !used_words.iter().any(|used| used.to_lowercase() == word)
}

/// True when every letter of `word` can be taken from `root`, each letter of
/// `root` used at most once.
#[must_use]
pub fn is_possible(word: &str, root: &str) -> bool {
    let mut available: Vec<char> = root.chars().collect();
    for letter in word.chars() {
        match available.iter().position(|&c| c == letter) {
            Some(pos) => {
                available.remove(pos);
            }
            None => return false,
        }
    }
    true
}

#[must_use]
pub fn is_long_enough(word: &str) -> bool {
    word.chars().count() >= MIN_WORD_LENGTH
}

/// Decide whether `candidate` may be added to `used_words`.
///
/// The checks run in a fixed order and the first failure is reported, so a
/// word that is both unknown and too short is reported as unknown.
///
/// # Errors
///
/// Returns the [`Rejection`] for the first check the candidate fails.
pub fn validate<D: Dictionary + ?Sized>(
    candidate: &str,
    root: &str,
    used_words: &[String],
    dictionary: &D,
) -> Result<(), Rejection> {
    let word = normalize(candidate);

    if word.is_empty() {
        return Err(Rejection::Empty);
    }
    if !is_original(&word, used_words) {
        return Err(Rejection::AlreadyUsed);
    }
    if !is_possible(&word, root) {
        return Err(Rejection::NotPossible);
    }
    if !dictionary.is_real_word(&word) {
        return Err(Rejection::NotReal);
    }
    if !is_long_enough(&word) {
        return Err(Rejection::TooShort);
    }
    if word == root {
        return Err(Rejection::SameAsRoot);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn any_word(_: &str) -> bool {
        true
    }

    fn no_word(_: &str) -> bool {
        false
    }

    fn used(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn test_empty_candidate_rejected() {
        assert_eq!(validate("", "silkworm", &[], &any_word), Err(Rejection::Empty));
        assert_eq!(validate("   \n", "silkworm", &[], &any_word), Err(Rejection::Empty));
    }

    #[test]
    fn test_empty_checked_before_dictionary() {
        assert_eq!(validate("", "silkworm", &[], &no_word), Err(Rejection::Empty));
    }

    #[test]
    fn test_sub_multiset_accepted() {
        assert_eq!(validate("silk", "silkworm", &[], &any_word), Ok(()));
    }

    #[test]
    fn test_repeated_letter_beyond_root_rejected() {
        // Only one 'k' in the root
        assert_eq!(
            validate("silkk", "silkworm", &[], &any_word),
            Err(Rejection::NotPossible)
        );
    }

    #[test]
    fn test_same_as_root_rejected() {
        assert_eq!(
            validate("silkworm", "silkworm", &[], &any_word),
            Err(Rejection::SameAsRoot)
        );
    }

    #[test]
    fn test_already_used_is_case_insensitive() {
        let words = used(&["Silk"]);
        assert_eq!(
            validate("SILK", "silkworm", &words, &any_word),
            Err(Rejection::AlreadyUsed)
        );
    }

    #[test]
    fn test_already_used_checked_before_possible_and_real() {
        // "zzz" can't be spelled and isn't a word, but it was used
        let words = used(&["zzz"]);
        assert_eq!(
            validate("zzz", "silkworm", &words, &no_word),
            Err(Rejection::AlreadyUsed)
        );
    }

    #[test]
    fn test_not_possible_checked_before_real() {
        assert_eq!(
            validate("xq", "silkworm", &[], &no_word),
            Err(Rejection::NotPossible)
        );
    }

    #[test]
    fn test_too_short_after_real_word_check() {
        // "ok" is spellable from the root; the dictionary decides what is reported
        assert_eq!(
            validate("ok", "silkworm", &[], &any_word),
            Err(Rejection::TooShort)
        );
        assert_eq!(
            validate("ok", "silkworm", &[], &no_word),
            Err(Rejection::NotReal)
        );
    }

    #[test]
    fn test_unknown_word_rejected() {
        assert_eq!(
            validate("wilk", "silkworm", &[], &|w: &str| w != "wilk"),
            Err(Rejection::NotReal)
        );
    }

    #[test]
    fn test_candidate_is_normalized() {
        assert_eq!(validate("  WORM \n", "silkworm", &[], &any_word), Ok(()));
    }

    #[test]
    fn test_is_possible() {
        assert!(is_possible("worm", "silkworm"));
        assert!(is_possible("", "silkworm"));
        assert!(is_possible("milk", "silkworm"));
        assert!(is_possible("milks", "silkworm"));
        assert!(!is_possible("milky", "silkworm"));
        assert!(!is_possible("milkk", "silkworm"));
        assert!(!is_possible("silkwormy", "silkworm"));
        assert!(is_possible("fee", "freedom"));
        assert!(!is_possible("feee", "freedom"));
    }

    #[test]
    fn test_is_long_enough() {
        assert!(!is_long_enough("ox"));
        assert!(is_long_enough("owl"));
    }

    #[test]
    fn test_rejection_text() {
        assert!(Rejection::Empty.is_silent());
        assert!(!Rejection::TooShort.is_silent());
        assert_eq!(Rejection::NotPossible.title(), "Word not possible");
        assert_eq!(
            Rejection::NotPossible.message("silkworm"),
            "You can't spell that word from 'silkworm'!"
        );
        assert_eq!(Rejection::AlreadyUsed.message("silkworm"), "Be more original");
    }
}
