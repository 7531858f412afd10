// Core domain: the trie itself, the standard alphabet and input validation
pub mod charset;
pub mod trie;
pub mod validation;

// Re-export commonly used types
pub use trie::{LetterLookup, MorseTrie, Node};
pub use validation::InputError;
