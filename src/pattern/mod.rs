// Typed dot/dash patterns - the wire format between callers and the trie

pub mod parser;
pub mod types;

pub use parser::is_element_char;
pub use types::{Element, Pattern, PatternError};
