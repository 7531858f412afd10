// MORSE-RS: Morse code trie translator with a console front end

pub mod console;
pub mod core;
pub mod pattern;
pub mod render;

// Re-export commonly used types
pub use crate::core::{charset, validation, InputError, LetterLookup, MorseTrie, Node};
pub use pattern::{Element, Pattern, PatternError};
pub use render::{draw, TreeSnapshot};

/// morse-rs version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
