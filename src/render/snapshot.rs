// Serializable read-only mirror of the trie for visualizers
// One-way by design: a snapshot never converts back into a trie

use crate::core::{MorseTrie, Node};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SnapshotError>;

/// One node of the mirrored tree
///
/// Built exclusively through the trie's read-only accessors; this is the data
/// handed to the viewer task and the JSON shape external visualizers consume.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TreeSnapshot {
    /// Character stored at this node, absent for sentinels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<char>,

    /// Dot (left) subtree
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dot: Option<Box<TreeSnapshot>>,

    /// Dash (right) subtree
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash: Option<Box<TreeSnapshot>>,
}

impl TreeSnapshot {
    /// Mirror the current state of a trie
    pub fn from_trie(trie: &MorseTrie) -> Self {
        Self::from_node(trie.root())
    }

    fn from_node(node: &Node) -> Self {
        Self {
            symbol: node.symbol(),
            dot: node.dot().map(|child| Box::new(Self::from_node(child))),
            dash: node.dash().map(|child| Box::new(Self::from_node(child))),
        }
    }

    /// Edges from this node to its deepest descendant
    pub fn height(&self) -> usize {
        let dot = self.dot.as_ref().map_or(0, |child| child.height() + 1);
        let dash = self.dash.as_ref().map_or(0, |child| child.height() + 1);
        dot.max(dash)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Write a snapshot to a JSON file
pub fn write_snapshot(path: impl AsRef<Path>, snapshot: &TreeSnapshot) -> Result<()> {
    let json = snapshot.to_json()?;
    fs::write(path, json)?;
    Ok(())
}

/// Read a snapshot back from a JSON file
pub fn read_snapshot(path: impl AsRef<Path>) -> Result<TreeSnapshot> {
    let json = fs::read_to_string(path)?;
    Ok(TreeSnapshot::from_json(&json)?)
}
