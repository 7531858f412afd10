// The Morse decision tree: dot descends left, dash descends right
// Insert, encode-search and decode-traverse all live here

use super::charset;
use crate::pattern::{Element, Pattern};

/// One point in the Morse decision tree
///
/// A node carries a symbol only when some inserted pattern terminates exactly
/// at its path from the root; branch-point nodes stay sentinels. Children are
/// exclusively owned by the parent and absent until a pattern explores them.
#[derive(Debug, Default)]
pub struct Node {
    symbol: Option<char>,
    dot: Option<Box<Node>>,
    dash: Option<Box<Node>>,
}

impl Node {
    /// The character terminating here, if any
    pub fn symbol(&self) -> Option<char> {
        self.symbol
    }

    /// The dot (left) child
    pub fn dot(&self) -> Option<&Node> {
        self.dot.as_deref()
    }

    /// The dash (right) child
    pub fn dash(&self) -> Option<&Node> {
        self.dash.as_deref()
    }

    fn child(&self, element: Element) -> Option<&Node> {
        match element {
            Element::Dot => self.dot(),
            Element::Dash => self.dash(),
        }
    }

    fn child_mut(&mut self, element: Element) -> &mut Option<Box<Node>> {
        match element {
            Element::Dot => &mut self.dot,
            Element::Dash => &mut self.dash,
        }
    }
}

/// Result of resolving one pattern against the trie
///
/// Keeps "valid path, but nothing stored there" distinct from "no such path";
/// `decode` renders both as '?' but callers can still tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterLookup {
    /// Full path consumed and a symbol was stored at the final node
    Decoded(char),
    /// Full path consumed but the final node is a sentinel
    Unassigned,
    /// A required child was absent partway down
    NoMatch,
}

/// Binary trie mapping Morse patterns to characters
///
/// The root is always present and always a sentinel; patterns are non-empty
/// by construction, so nothing can ever map to the empty path.
#[derive(Debug, Default)]
pub struct MorseTrie {
    root: Node,
}

impl MorseTrie {
    /// Create an empty trie (root sentinel only)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a trie pre-populated with the standard 26-letter alphabet
    pub fn with_standard_alphabet() -> Self {
        let mut trie = Self::new();
        trie.populate_standard();
        trie
    }

    /// Insert every (letter, code) pair from the standard table
    pub fn populate_standard(&mut self) {
        let table = charset::standard_patterns();
        tracing::debug!("populating trie with {} standard codes", table.len());
        for (symbol, pattern) in table {
            self.insert(*symbol, pattern);
        }
    }

    /// True iff the root has no children; gates encode/decode in callers
    pub fn is_empty(&self) -> bool {
        self.root.dot.is_none() && self.root.dash.is_none()
    }

    /// Entry point for read-only traversal (visualizer contract)
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Store `symbol` at the node the pattern's path leads to
    ///
    /// Sentinel nodes are materialized along the way as needed. Inserting at
    /// an occupied path overwrites: last insertion wins.
    pub fn insert(&mut self, symbol: char, pattern: &Pattern) {
        let mut current = &mut self.root;
        for &element in pattern.elements() {
            current = current
                .child_mut(element)
                .get_or_insert_with(Box::default)
                .as_mut();
        }
        current.symbol = Some(symbol);
    }

    /// Find the pattern for a symbol by depth-first search, dot branch first
    ///
    /// Exact match only; `encode` folds case before calling this.
    pub fn find_code(&self, symbol: char) -> Option<Pattern> {
        let mut path = Vec::new();
        if search(&self.root, symbol, &mut path) {
            Pattern::new(path).ok()
        } else {
            None
        }
    }

    /// Encode plain text into a space-separated Morse phrase
    ///
    /// Input is folded to uppercase. Characters with no mapping become '?'
    /// inline; processing continues for the rest of the input.
    pub fn encode(&self, text: &str) -> String {
        let mut encoded = String::new();
        for symbol in text.to_uppercase().chars() {
            match self.find_code(symbol) {
                Some(pattern) => encoded.push_str(&pattern.to_string()),
                None => encoded.push('?'),
            }
            encoded.push(' ');
        }
        encoded.trim_end().to_string()
    }

    /// Resolve a single typed pattern against the trie
    pub fn lookup(&self, pattern: &Pattern) -> LetterLookup {
        self.resolve(pattern.elements().iter().copied())
    }

    /// Decode a whitespace-separated Morse phrase into plain text
    ///
    /// Fields are split on runs of whitespace. Within a field the core only
    /// recognizes '.'; any other character walks the dash branch (character
    /// classes are validated by the caller). Patterns that miss, or land on a
    /// sentinel node, become '?' with no separator in the output.
    pub fn decode(&self, phrase: &str) -> String {
        phrase
            .split_whitespace()
            .map(|field| {
                let path = field.chars().map(|c| {
                    if c == '.' {
                        Element::Dot
                    } else {
                        Element::Dash
                    }
                });
                match self.resolve(path) {
                    LetterLookup::Decoded(symbol) => symbol,
                    LetterLookup::Unassigned | LetterLookup::NoMatch => '?',
                }
            })
            .collect()
    }

    /// Edges from the root to the deepest node; 0 for an empty trie
    ///
    /// Feeds the renderer's canvas sizing; unused by encode/decode.
    pub fn height(&self) -> usize {
        node_height(&self.root) - 1
    }

    fn resolve<I>(&self, path: I) -> LetterLookup
    where
        I: IntoIterator<Item = Element>,
    {
        let mut current = &self.root;
        for element in path {
            match current.child(element) {
                Some(child) => current = child,
                None => return LetterLookup::NoMatch,
            }
        }
        match current.symbol {
            Some(symbol) => LetterLookup::Decoded(symbol),
            None => LetterLookup::Unassigned,
        }
    }
}

fn search(node: &Node, target: char, path: &mut Vec<Element>) -> bool {
    if node.symbol == Some(target) {
        return true;
    }
    if let Some(dot) = node.dot() {
        path.push(Element::Dot);
        if search(dot, target, path) {
            return true;
        }
        path.pop();
    }
    if let Some(dash) = node.dash() {
        path.push(Element::Dash);
        if search(dash, target, path) {
            return true;
        }
        path.pop();
    }
    false
}

fn node_height(node: &Node) -> usize {
    let dot = node.dot().map_or(0, node_height);
    let dash = node.dash().map_or(0, node_height);
    1 + dot.max(dash)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(s: &str) -> Pattern {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_trie_is_empty() {
        let trie = MorseTrie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.height(), 0);
    }

    #[test]
    fn test_insert_clears_empty() {
        let mut trie = MorseTrie::new();
        trie.insert('E', &pattern("."));
        assert!(!trie.is_empty());
    }

    #[test]
    fn test_insert_materializes_sentinels() {
        let mut trie = MorseTrie::new();
        trie.insert('S', &pattern("..."));

        // The two intermediate nodes exist but carry no symbol
        let first = trie.root().dot().unwrap();
        assert_eq!(first.symbol(), None);
        let second = first.dot().unwrap();
        assert_eq!(second.symbol(), None);
        assert_eq!(second.dot().unwrap().symbol(), Some('S'));
    }

    #[test]
    fn test_concrete_scenario() {
        let mut trie = MorseTrie::new();
        trie.insert('E', &pattern("."));
        trie.insert('T', &pattern("-"));
        trie.insert('A', &pattern(".-"));

        assert_eq!(trie.encode("EAT"), ". .- -");
        assert_eq!(trie.decode(". .- -"), "EAT");
    }

    #[test]
    fn test_encode_folds_case() {
        let trie = MorseTrie::with_standard_alphabet();
        assert_eq!(trie.encode("sos"), trie.encode("SOS"));
        assert_eq!(trie.encode("sos"), "... --- ...");
    }

    #[test]
    fn test_encode_unknown_character() {
        let trie = MorseTrie::with_standard_alphabet();
        assert_eq!(trie.encode("1"), "?");
        // Errors are inline; remaining characters still encode
        assert_eq!(trie.encode("A1B"), ".- ? -...");
    }

    #[test]
    fn test_encode_mixed_validity() {
        let mut trie = MorseTrie::new();
        trie.insert('E', &pattern("."));
        assert_eq!(trie.encode("ET"), ". ?");
    }

    #[test]
    fn test_decode_unknown_pattern() {
        let trie = MorseTrie::with_standard_alphabet();
        // Six dots is deeper than any standard code
        assert_eq!(trie.decode("......"), "?");
        assert_eq!(trie.decode(".- ...... -"), "A?T");
    }

    #[test]
    fn test_decode_splits_on_whitespace_runs() {
        let trie = MorseTrie::with_standard_alphabet();
        assert_eq!(trie.decode("  ...   ---\t..."), "SOS");
    }

    #[test]
    fn test_decode_treats_non_dot_as_dash() {
        let trie = MorseTrie::with_standard_alphabet();
        // Caller-side validation keeps these out in practice
        assert_eq!(trie.decode("x"), trie.decode("-"));
    }

    #[test]
    fn test_lookup_distinguishes_unassigned_from_no_match() {
        let mut trie = MorseTrie::new();
        trie.insert('S', &pattern("..."));

        assert_eq!(trie.lookup(&pattern("...")), LetterLookup::Decoded('S'));
        assert_eq!(trie.lookup(&pattern("..")), LetterLookup::Unassigned);
        assert_eq!(trie.lookup(&pattern("-")), LetterLookup::NoMatch);

        // Both non-decoded outcomes render as '?' in string output
        assert_eq!(trie.decode(".."), "?");
        assert_eq!(trie.decode("-"), "?");
    }

    #[test]
    fn test_idempotent_insert() {
        let mut trie = MorseTrie::new();
        trie.insert('E', &pattern("."));
        trie.insert('E', &pattern("."));
        assert_eq!(trie.encode("E"), ".");
        assert_eq!(trie.decode("."), "E");
        assert_eq!(trie.height(), 1);
    }

    #[test]
    fn test_overwrite_semantics() {
        let mut trie = MorseTrie::new();
        trie.insert('E', &pattern("."));
        trie.insert('X', &pattern("."));
        assert_eq!(trie.decode("."), "X");
        assert_eq!(trie.find_code('E'), None);
    }

    #[test]
    fn test_find_code_is_exact_match() {
        let trie = MorseTrie::with_standard_alphabet();
        assert_eq!(trie.find_code('A').unwrap().to_string(), ".-");
        // No case folding at this level
        assert_eq!(trie.find_code('a'), None);
    }

    #[test]
    fn test_height_of_standard_alphabet() {
        let trie = MorseTrie::with_standard_alphabet();
        assert_eq!(trie.height(), 4);
    }

    #[test]
    fn test_standard_round_trip() {
        let trie = MorseTrie::with_standard_alphabet();
        for &(symbol, _) in charset::STANDARD_CODES {
            let text = symbol.to_string();
            assert_eq!(trie.decode(&trie.encode(&text)), text);
        }
    }

    #[test]
    fn test_empty_trie_returns_question_marks() {
        let trie = MorseTrie::new();
        assert_eq!(trie.encode("E"), "?");
        assert_eq!(trie.decode("."), "?");
    }
}
