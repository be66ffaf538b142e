//! Integrity checking, statistics and structure dumps.

use std::fmt::Write as _;

use crate::error::IntegrityError;
use crate::node::Node;

/// Shape statistics for a radix tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of nodes.
    pub nodes: usize,
    /// Nodes where a key ends.
    pub terminals: usize,
    /// Nodes where no key ends (pure branch points).
    pub branches: usize,
    /// Sum of all edge label lengths.
    pub label_bytes: usize,
    /// Number of nodes on the longest root-to-leaf path.
    pub max_depth: usize,
}

/// Verify every invariant under `root` and that it holds `len` keys.
pub(crate) fn check_integrity<V>(
    root: Option<&Node<V>>,
    len: usize,
) -> Result<(), IntegrityError> {
    let mut counted = 0;
    if let Some(root) = root {
        let mut path = Vec::new();
        verify_node(root, true, &mut path, &mut counted)?;
    }

    if counted != len {
        return Err(IntegrityError::LengthMismatch {
            counted,
            recorded: len,
        });
    }
    Ok(())
}

fn verify_node<V>(
    node: &Node<V>,
    is_root: bool,
    path: &mut Vec<u8>,
    counted: &mut usize,
) -> Result<(), IntegrityError> {
    let len_before = path.len();
    path.extend_from_slice(&node.label);

    if node.is_terminal() {
        *counted += 1;
    } else {
        match node.children.len() {
            0 => return Err(IntegrityError::DeadLeaf { path: path.clone() }),
            1 if !is_root => {
                return Err(IntegrityError::UncompressedBranch { path: path.clone() })
            }
            _ => {}
        }
    }

    if node.children.iter().any(|c| c.label.is_empty()) {
        return Err(IntegrityError::EmptyLabel { path: path.clone() });
    }
    for pair in node.children.windows(2) {
        let (a, b) = (pair[0].label[0], pair[1].label[0]);
        if a == b {
            return Err(IntegrityError::DuplicateFirstByte {
                path: path.clone(),
                byte: a,
            });
        }
        if a > b {
            return Err(IntegrityError::UnsortedChildren { path: path.clone() });
        }
    }

    for child in &node.children {
        verify_node(child, false, path, counted)?;
    }

    path.truncate(len_before);
    Ok(())
}

pub(crate) fn stats<V>(root: Option<&Node<V>>) -> TreeStats {
    let mut stats = TreeStats::default();
    if let Some(root) = root {
        collect_stats(root, 1, &mut stats);
    }
    stats
}

fn collect_stats<V>(node: &Node<V>, depth: usize, stats: &mut TreeStats) {
    stats.nodes += 1;
    stats.label_bytes += node.label.len();
    stats.max_depth = stats.max_depth.max(depth);
    if node.is_terminal() {
        stats.terminals += 1;
    } else {
        stats.branches += 1;
    }
    for child in &node.children {
        collect_stats(child, depth + 1, stats);
    }
}

/// One line per node, indented two spaces per level. Terminal nodes are
/// marked with `*`.
pub(crate) fn structure<V>(root: Option<&Node<V>>) -> String {
    let mut out = String::new();
    match root {
        Some(root) => write_node(root, 0, &mut out),
        None => out.push_str("(empty)\n"),
    }
    out
}

fn write_node<V>(node: &Node<V>, depth: usize, out: &mut String) {
    let marker = if node.is_terminal() { " *" } else { "" };
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "{:indent$}{:?}{}",
        "",
        String::from_utf8_lossy(&node.label),
        marker,
        indent = depth * 2
    );
    for child in &node.children {
        write_node(child, depth + 1, out);
    }
}
