// Typed representation of Morse patterns
// A Pattern is an ordered, non-empty sequence of dot/dash elements

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Empty Morse pattern")]
    Empty,

    #[error("Invalid character in Morse pattern: '{0}'")]
    InvalidCharacter(char),
}

/// A single Morse signal element: dot (left branch) or dash (right branch)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Dot,
    Dash,
}

impl Element {
    /// The character used on the wire for this element
    pub fn as_char(self) -> char {
        match self {
            Element::Dot => '.',
            Element::Dash => '-',
        }
    }

    /// Parse a single element character, if it is one
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Element::Dot),
            '-' => Some(Element::Dash),
            _ => None,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The Morse code for one character
///
/// Guaranteed non-empty: construction rejects the empty sequence, so an
/// inserted pattern always terminates at least one step below the trie root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    elements: Vec<Element>,
}

impl Pattern {
    /// Build a pattern from elements, rejecting the empty sequence
    pub fn new(elements: Vec<Element>) -> Result<Self, PatternError> {
        if elements.is_empty() {
            return Err(PatternError::Empty);
        }
        Ok(Self { elements })
    }

    /// The elements in order
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Number of elements (always >= 1)
    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parser::parse_pattern(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in &self.elements {
            write!(f, "{}", element.as_char())?;
        }
        Ok(())
    }
}
