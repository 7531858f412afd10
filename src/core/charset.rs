// The standard International Morse alphabet - the 26 Latin letters

use crate::pattern::Pattern;
use std::collections::HashMap;

/// The 26 standard (letter, code) pairs, uppercase
pub const STANDARD_CODES: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
];

lazy_static::lazy_static! {
    static ref CODE_MAP: HashMap<char, &'static str> =
        STANDARD_CODES.iter().copied().collect();

    static ref STANDARD_PATTERNS: Vec<(char, Pattern)> = STANDARD_CODES
        .iter()
        .map(|&(symbol, code)| {
            let pattern = code.parse().expect("standard table codes are well-formed");
            (symbol, pattern)
        })
        .collect();
}

/// Look up the dot-dash code for a symbol (exact match, uppercase table)
pub fn code_for(symbol: char) -> Option<&'static str> {
    CODE_MAP.get(&symbol).copied()
}

/// True if the symbol appears in the standard table
pub fn is_supported(symbol: char) -> bool {
    CODE_MAP.contains_key(&symbol)
}

/// The standard table pre-parsed into typed patterns
pub fn standard_patterns() -> &'static [(char, Pattern)] {
    &STANDARD_PATTERNS
}

/// The typed pattern for one standard symbol
pub fn standard_pattern(symbol: char) -> Option<&'static Pattern> {
    STANDARD_PATTERNS
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, pattern)| pattern)
}
