// Plots a tree snapshot onto a character grid for console display

use super::snapshot::TreeSnapshot;

/// Character drawn for sentinel nodes
const SENTINEL: char = 'o';

/// Render a snapshot as fixed-grid ASCII art
///
/// The root sits at the center column; each dot child lands half the current
/// offset to the left, each dash child to the right, so sibling subtrees never
/// overlap. Every level takes two rows: the symbol row and a branch row of
/// '-' runs with '+' marks over the children.
pub fn draw(snapshot: &TreeSnapshot) -> String {
    let height = snapshot.height();
    let width = 1usize << (height + 2);
    let rows = 2 * height + 1;

    let mut grid = vec![vec![' '; width]; rows];
    plot(&mut grid, snapshot, width / 2, 0, width / 4);

    grid.iter()
        .map(|row| row.iter().collect::<String>().trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn plot(grid: &mut [Vec<char>], node: &TreeSnapshot, x: usize, level: usize, offset: usize) {
    grid[2 * level][x] = node.symbol.unwrap_or(SENTINEL);

    if node.dot.is_none() && node.dash.is_none() {
        return;
    }

    let branch_row = 2 * level + 1;
    let left = if node.dot.is_some() { x - offset } else { x };
    let right = if node.dash.is_some() { x + offset } else { x };
    for column in left..=right {
        grid[branch_row][column] = '-';
    }

    if let Some(dot) = &node.dot {
        grid[branch_row][x - offset] = '+';
        plot(grid, dot, x - offset, level + 1, offset / 2);
    }
    if let Some(dash) = &node.dash {
        grid[branch_row][x + offset] = '+';
        plot(grid, dash, x + offset, level + 1, offset / 2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MorseTrie;

    fn snapshot_of(pairs: &[(char, &str)]) -> TreeSnapshot {
        let mut trie = MorseTrie::new();
        for &(symbol, code) in pairs {
            trie.insert(symbol, &code.parse().unwrap());
        }
        TreeSnapshot::from_trie(&trie)
    }

    #[test]
    fn test_empty_tree_renders_lone_sentinel() {
        let rendered = draw(&TreeSnapshot::default());
        assert_eq!(rendered.trim(), "o");
    }

    #[test]
    fn test_root_renders_as_sentinel() {
        let rendered = draw(&snapshot_of(&[('E', ".")]));
        let first_line = rendered.lines().next().unwrap();
        assert_eq!(first_line.trim(), "o");
    }

    #[test]
    fn test_dot_child_left_of_dash_child() {
        let rendered = draw(&snapshot_of(&[('E', "."), ('T', "-")]));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);

        let root_column = lines[0].find('o').unwrap();
        let e_column = lines[2].find('E').unwrap();
        let t_column = lines[2].find('T').unwrap();
        assert!(e_column < root_column);
        assert!(root_column < t_column);

        // Branch row marks both children and connects them
        assert_eq!(lines[1].chars().nth(e_column), Some('+'));
        assert_eq!(lines[1].chars().nth(t_column), Some('+'));
        assert!(lines[1][e_column..t_column].contains('-'));
    }

    #[test]
    fn test_deeper_levels_keep_columns_distinct() {
        let rendered = draw(&snapshot_of(&[('E', "."), ('T', "-"), ('A', ".-")]));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);

        let e_column = lines[2].find('E').unwrap();
        let a_column = lines[4].find('A').unwrap();
        // A hangs off E's dash branch: right of E, still left of center
        assert!(a_column > e_column);
        assert!(a_column < lines[0].find('o').unwrap());
    }

    #[test]
    fn test_full_alphabet_renders_without_collisions() {
        let trie = MorseTrie::with_standard_alphabet();
        let rendered = draw(&TreeSnapshot::from_trie(&trie));

        // Every letter appears exactly once
        for &(symbol, _) in crate::core::charset::STANDARD_CODES {
            assert_eq!(
                rendered.chars().filter(|&c| c == symbol).count(),
                1,
                "letter {} should render exactly once",
                symbol
            );
        }
    }
}
