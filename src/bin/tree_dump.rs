//! Tree dump utility
//! Renders the standard Morse tree (or a subset of letters) as an ASCII canvas
//! or a JSON snapshot, printing to stdout or saving to a file

use morse_rs::render::{self, write_snapshot, TreeSnapshot};
use morse_rs::{charset, MorseTrie};
use std::env;
use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    let format_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(format_layer)
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut json = false;
    let mut out: Option<String> = None;
    let mut letters: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => json = true,
            "--out" => {
                i += 1;
                out = Some(
                    args.get(i)
                        .cloned()
                        .ok_or_else(|| anyhow::anyhow!("--out requires a file name"))?,
                );
            }
            "--help" | "-h" => {
                usage(&args[0]);
                return Ok(());
            }
            other if other.starts_with('-') => {
                eprintln!("Unknown flag: {}", other);
                usage(&args[0]);
                std::process::exit(1);
            }
            other => letters = Some(other.to_string()),
        }
        i += 1;
    }

    // Build the tree: the full standard alphabet, or just the letters asked for
    let trie = match &letters {
        None => MorseTrie::with_standard_alphabet(),
        Some(set) => {
            let mut trie = MorseTrie::new();
            for symbol in set.to_uppercase().chars() {
                match charset::standard_pattern(symbol) {
                    Some(pattern) => trie.insert(symbol, pattern),
                    None => anyhow::bail!(
                        "Character '{}' is not in the standard alphabet",
                        symbol
                    ),
                }
            }
            trie
        }
    };

    let snapshot = TreeSnapshot::from_trie(&trie);
    tracing::info!(height = snapshot.height(), "built tree");

    match (json, out) {
        (true, Some(path)) => {
            write_snapshot(&path, &snapshot)?;
            tracing::info!("Saved JSON snapshot to: {}", path);
        }
        (false, Some(path)) => {
            std::fs::write(&path, render::draw(&snapshot))?;
            tracing::info!("Saved tree rendering to: {}", path);
        }
        (true, None) => println!("{}", snapshot.to_json()?),
        (false, None) => println!("{}", render::draw(&snapshot)),
    }

    Ok(())
}

fn usage(program: &str) {
    eprintln!("Usage: {} [--json] [--out FILE] [LETTERS]", program);
    eprintln!("\nExamples:");
    eprintln!("  {}                    # render the full standard tree", program);
    eprintln!("  {} ETA                # render only E, T and A", program);
    eprintln!("  {} --json --out t.json # save the snapshot as JSON", program);
}
