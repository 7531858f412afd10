// Caller-side input checks - malformed input is rejected before the trie sees it

use super::charset;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Input is empty")]
    Empty,

    #[error("Enter exactly one character: {0:?}")]
    NotOneCharacter(String),

    #[error("Character '{0}' is not supported")]
    UnsupportedCharacter(char),

    #[error("Morse input may only contain '.', '-' and spaces")]
    ForeignCharacters,
}

lazy_static::lazy_static! {
    static ref MORSE_PHRASE_RE: regex::Regex =
        regex::Regex::new(r"^[.\-\s]+$").unwrap();
}

/// Parse a user-supplied insertion target: one character from the standard table
///
/// Trims surrounding whitespace and folds to uppercase before checking.
pub fn parse_symbol_input(input: &str) -> Result<char, InputError> {
    let trimmed = input.trim().to_uppercase();
    let mut chars = trimmed.chars();
    let symbol = chars.next().ok_or(InputError::Empty)?;
    if chars.next().is_some() {
        return Err(InputError::NotOneCharacter(trimmed));
    }
    if !charset::is_supported(symbol) {
        return Err(InputError::UnsupportedCharacter(symbol));
    }
    Ok(symbol)
}

/// Check that a phrase destined for decode is non-empty dot/dash/space text
pub fn check_morse_phrase(input: &str) -> Result<(), InputError> {
    if input.trim().is_empty() {
        return Err(InputError::Empty);
    }
    if !MORSE_PHRASE_RE.is_match(input) {
        return Err(InputError::ForeignCharacters);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbol_accepts_single_letter() {
        assert_eq!(parse_symbol_input("A"), Ok('A'));
        assert_eq!(parse_symbol_input("  q "), Ok('Q'));
    }

    #[test]
    fn test_parse_symbol_rejects_empty() {
        assert_eq!(parse_symbol_input(""), Err(InputError::Empty));
        assert_eq!(parse_symbol_input("   "), Err(InputError::Empty));
    }

    #[test]
    fn test_parse_symbol_rejects_multiple_characters() {
        assert_eq!(
            parse_symbol_input("AB"),
            Err(InputError::NotOneCharacter("AB".to_string()))
        );
    }

    #[test]
    fn test_parse_symbol_rejects_unsupported() {
        assert_eq!(
            parse_symbol_input("7"),
            Err(InputError::UnsupportedCharacter('7'))
        );
        assert_eq!(
            parse_symbol_input("!"),
            Err(InputError::UnsupportedCharacter('!'))
        );
    }

    #[test]
    fn test_check_morse_phrase() {
        assert_eq!(check_morse_phrase(".- -... -.-."), Ok(()));
        assert_eq!(check_morse_phrase("  .-  "), Ok(()));
        assert_eq!(check_morse_phrase(""), Err(InputError::Empty));
        assert_eq!(check_morse_phrase("   "), Err(InputError::Empty));
        assert_eq!(
            check_morse_phrase(".- abc"),
            Err(InputError::ForeignCharacters)
        );
        assert_eq!(check_morse_phrase("._"), Err(InputError::ForeignCharacters));
    }
}
