//! # radix-rs
//!
//! Ordered, prefix-addressable collections built on a compressed radix tree.
//!
//! Chains of single-child nodes are collapsed into one edge, so a node
//! exists only where a key ends or where keys diverge. Every key sharing a
//! prefix lives in one subtree, which makes "all keys starting with X" a
//! single descent followed by a walk.
//!
//! - [`RadixMap`]: byte-string keys to values
//! - [`RadixSet`]: byte-string keys only
//! - [`SharedRadixMap`]: a [`RadixMap`] behind a reader/writer lock
//!
//! ## Example
//!
//! ```rust
//! use radix_rs::RadixSet;
//!
//! let mut set = RadixSet::new();
//! set.insert("arm");
//! set.insert("armor");
//! set.insert("armored");
//!
//! let mut seen = Vec::new();
//! set.for_each_with_prefix("armor", |key| seen.push(String::from_utf8_lossy(key).into_owned()));
//! assert_eq!(seen, ["armor", "armored"]);
//! ```
//!
//! Keys are arbitrary bytes, the empty key included. Iteration is always in
//! ascending byte order.

#![forbid(unsafe_code)]

mod debug;
mod error;
mod iter;
mod map;
mod node;
mod set;
mod shared;
mod tracing_helpers;
mod tree;

pub use debug::TreeStats;
pub use error::IntegrityError;
pub use iter::{Iter, Keys, Values};
pub use map::RadixMap;
pub use set::RadixSet;
pub use shared::SharedRadixMap;

// =============================================================================
// Configuration
// =============================================================================

/// Edge labels up to this many bytes are stored inline in the node.
const INLINE_LABEL_LEN: usize = 16;

#[cfg(test)]
mod proptests;
