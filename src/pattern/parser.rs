// nom tokenizer for dot-dash pattern text

use super::types::{Element, Pattern, PatternError};
use nom::{
    character::complete::one_of,
    combinator::map,
    multi::many1,
    IResult, Parser,
};

/// True for the two characters that encode a Morse element
pub fn is_element_char(c: char) -> bool {
    c == '.' || c == '-'
}

fn element(input: &str) -> IResult<&str, Element> {
    map(one_of(".-"), |c| match c {
        '.' => Element::Dot,
        _ => Element::Dash,
    })
    .parse(input)
}

fn pattern_body(input: &str) -> IResult<&str, Vec<Element>> {
    many1(element).parse(input)
}

/// Parse a complete pattern string such as ".-" or "-.-."
///
/// The whole input must be dot/dash characters; anything else (including
/// whitespace) is rejected with the offending character.
pub fn parse_pattern(input: &str) -> Result<Pattern, PatternError> {
    if input.is_empty() {
        return Err(PatternError::Empty);
    }
    match pattern_body(input) {
        Ok(("", elements)) => Pattern::new(elements),
        Ok((rest, _)) => Err(PatternError::InvalidCharacter(first_char(rest))),
        Err(_) => Err(PatternError::InvalidCharacter(first_char(input))),
    }
}

fn first_char(s: &str) -> char {
    s.chars().next().unwrap_or('?')
}
