// Interactive menu loop
// Response text is computed by plain functions so it stays testable without I/O

use super::viewer::ViewerHandle;
use crate::core::{charset, validation, MorseTrie};
use crate::render::TreeSnapshot;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

const MENU: &str = "\n--- MORSE CODE MENU ---\n\
                    1. Insert a character\n\
                    2. Encode (text to Morse)\n\
                    3. Decode (Morse to text)\n\
                    4. Display tree\n\
                    0. Quit";

const EMPTY_TREE_MESSAGE: &str = "ERROR: the tree is empty. Insert characters first.";

/// Handle a menu-1 input line: one character, or `ALL` to bulk-populate
pub fn handle_insert(trie: &mut MorseTrie, input: &str) -> String {
    if input.trim().eq_ignore_ascii_case("ALL") {
        trie.populate_standard();
        return format!(
            "Tree populated with all {} supported characters",
            charset::STANDARD_CODES.len()
        );
    }

    let symbol = match validation::parse_symbol_input(input) {
        Ok(symbol) => symbol,
        Err(e) => return format!("ERROR: {}", e),
    };
    match charset::standard_pattern(symbol) {
        Some(pattern) => {
            trie.insert(symbol, pattern);
            format!("Character '{}' (code {}) inserted", symbol, pattern)
        }
        // parse_symbol_input already checked table membership
        None => format!("ERROR: character '{}' is not supported", symbol),
    }
}

/// Handle a menu-2 input line: free text to encode
pub fn handle_encode(trie: &MorseTrie, input: &str) -> String {
    if trie.is_empty() {
        return EMPTY_TREE_MESSAGE.to_string();
    }
    if input.trim().is_empty() {
        return "ERROR: nothing to encode".to_string();
    }
    format!("Morse code: {}", trie.encode(input))
}

/// Handle a menu-3 input line: a dot/dash phrase to decode
pub fn handle_decode(trie: &MorseTrie, input: &str) -> String {
    if trie.is_empty() {
        return EMPTY_TREE_MESSAGE.to_string();
    }
    if let Err(e) = validation::check_morse_phrase(input) {
        return format!("ERROR: {}", e);
    }
    format!("Decoded text: {}", trie.decode(input))
}

/// Run the interactive menu until the user quits or stdin closes
pub async fn run() -> anyhow::Result<()> {
    let mut trie = MorseTrie::new();
    let mut viewer: Option<ViewerHandle> = None;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        println!("{}", MENU);
        let Some(choice) = prompt(&mut lines, "Choose an option: ").await? else {
            break;
        };

        match choice.trim() {
            "1" => {
                let Some(input) =
                    prompt(&mut lines, "Character to insert (or 'ALL' to populate the tree): ")
                        .await?
                else {
                    break;
                };
                println!("{}", handle_insert(&mut trie, &input));
            }
            "2" => {
                let Some(input) = prompt(&mut lines, "Text to encode: ").await? else {
                    break;
                };
                println!("{}", handle_encode(&trie, &input));
            }
            "3" => {
                let Some(input) =
                    prompt(&mut lines, "Morse code to decode (letters separated by spaces): ")
                        .await?
                else {
                    break;
                };
                println!("{}", handle_decode(&trie, &input));
            }
            "4" => {
                if trie.is_empty() {
                    println!("{}", EMPTY_TREE_MESSAGE);
                    continue;
                }
                if viewer.is_none() {
                    println!("Starting the tree viewer...");
                    viewer = Some(ViewerHandle::spawn().await?);
                }
                if let Some(handle) = &viewer {
                    handle.show(TreeSnapshot::from_trie(&trie)).await?;
                }
            }
            "0" => {
                println!("Exiting...");
                break;
            }
            _ => println!("Invalid option. Try again."),
        }
    }

    if let Some(handle) = viewer.take() {
        handle.shutdown().await;
    }
    Ok(())
}

async fn prompt(
    lines: &mut Lines<BufReader<Stdin>>,
    text: &str,
) -> anyhow::Result<Option<String>> {
    print!("{}", text);
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?)
}
