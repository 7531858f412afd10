//! One-shot Morse conversion utility
//! Encodes text to Morse or decodes a Morse phrase over the standard alphabet

use morse_rs::{validation, MorseTrie};
use std::env;

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <encode|decode> <input...>", args[0]);
        eprintln!("\nExamples:");
        eprintln!("  {} encode \"HELLO WORLD\"", args[0]);
        eprintln!("  {} decode \".... ..\"", args[0]);
        std::process::exit(1);
    }

    let mode = args[1].as_str();
    let input = args[2..].join(" ");
    let trie = MorseTrie::with_standard_alphabet();

    match mode {
        "encode" => println!("{}", trie.encode(&input)),
        "decode" => {
            validation::check_morse_phrase(&input)?;
            println!("{}", trie.decode(&input));
        }
        other => {
            eprintln!("Unknown mode: {} (expected 'encode' or 'decode')", other);
            std::process::exit(1);
        }
    }

    Ok(())
}
