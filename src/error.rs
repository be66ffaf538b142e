//! Errors reported by the structural integrity check.

use thiserror::Error;

/// A violated radix tree invariant, found by `check_integrity`.
///
/// `path` is the byte path from the root to the offending node, including
/// that node's own label.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    /// Two children of one node start with the same byte.
    #[error("two children under {:?} start with byte {byte:#04x}", lossy(.path))]
    DuplicateFirstByte {
        /// Path of the parent node.
        path: Vec<u8>,
        /// The shared first byte.
        byte: u8,
    },

    /// Children are not in ascending first-byte order.
    #[error("children under {:?} are out of order", lossy(.path))]
    UnsortedChildren {
        /// Path of the parent node.
        path: Vec<u8>,
    },

    /// A non-terminal, non-root node with exactly one child.
    #[error("node {:?} is a non-terminal node with a single child", lossy(.path))]
    UncompressedBranch {
        /// Path of the node.
        path: Vec<u8>,
    },

    /// A non-terminal node with no children.
    #[error("node {:?} holds no key and has no children", lossy(.path))]
    DeadLeaf {
        /// Path of the node.
        path: Vec<u8>,
    },

    /// A non-root node whose edge label is empty.
    #[error("child of {:?} has an empty label", lossy(.path))]
    EmptyLabel {
        /// Path of the parent node.
        path: Vec<u8>,
    },

    /// The number of terminal nodes disagrees with the recorded length.
    #[error("found {counted} keys but the collection records {recorded}")]
    LengthMismatch {
        /// Terminal nodes reachable from the root.
        counted: usize,
        /// Length tracked by the collection.
        recorded: usize,
    },
}

fn lossy(path: &[u8]) -> String {
    String::from_utf8_lossy(path).into_owned()
}
