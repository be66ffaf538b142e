//! Radix tree engine.
//!
//! Every operation works on an optional owned root. Mutating operations take
//! the root by value and hand back the new one, since a split or a delete can
//! change which node sits at the top of a subtree. Callers always reassign.
//!
//! All descents compare the current node's label against the remaining key
//! and branch on `p`, the length of their common prefix:
//! - `p == label.len() && p == key.len()`: exact match
//! - `p == label.len()`: the label is a strict prefix, descend by `key[p]`
//! - otherwise the label and key diverge inside the label

use crate::node::{common_prefix_len, Node};
use crate::tracing_helpers::trace_log;

/// Insert `key` with `value` below `root`.
///
/// Returns the new subtree root and the value previously stored under `key`.
pub(crate) fn insert<V>(
    root: Option<Box<Node<V>>>,
    key: &[u8],
    value: V,
) -> (Box<Node<V>>, Option<V>) {
    let Some(mut node) = root else {
        trace_log!(len = key.len(), "radix: new leaf");
        return (Node::leaf(key, value), None);
    };

    let p = common_prefix_len(&node.label, key);

    if p == node.label.len() {
        if p == key.len() {
            let old = node.value.replace(value);
            return (node, old);
        }

        let rest = &key[p..];
        let old = match node.take_child(rest[0]) {
            Some(child) => {
                let (child, old) = insert(Some(child), rest, value);
                node.attach(child);
                old
            }
            None => {
                node.attach(Node::leaf(rest, value));
                None
            }
        };
        return (node, old);
    }

    // The label diverges from the key (or extends past it) at `p`: hoist the
    // shared prefix into a new node and push the old one down.
    let mut prefix = Node::branch(&node.label[..p]);
    if p == key.len() {
        prefix.value = Some(value);
    } else {
        prefix.attach(Node::leaf(&key[p..], value));
    }
    trace_log!(
        prefix_len = p,
        terminal = prefix.is_terminal(),
        "radix: split"
    );

    node.label.drain(..p);
    prefix.attach(node);
    (prefix, None)
}

/// Remove `key` from below `root`.
///
/// Returns the new subtree root (`None` once it is empty) and the removed
/// value. A `None` value means nothing was removed.
pub(crate) fn delete<V>(
    root: Option<Box<Node<V>>>,
    key: &[u8],
) -> (Option<Box<Node<V>>>, Option<V>) {
    let Some(mut node) = root else {
        return (None, None);
    };

    let p = common_prefix_len(&node.label, key);

    if p == node.label.len() && p == key.len() {
        let Some(old) = node.value.take() else {
            // Pure branch point: the key was never present.
            return (Some(node), None);
        };

        match node.children.len() {
            0 => {
                trace_log!(len = key.len(), "radix: detach leaf");
                return (None, Some(old));
            }
            1 => {
                trace_log!(label_len = node.label.len(), "radix: merge");
                node.merge_with_single_child();
            }
            _ => {}
        }
        return (Some(node), Some(old));
    }

    if p == node.label.len() {
        let rest = &key[p..];
        let Some(child) = node.take_child(rest[0]) else {
            return (Some(node), None);
        };

        let (child, removed) = delete(Some(child), rest);
        match child {
            Some(child) => node.attach(child),
            None => {
                if !node.is_terminal() && node.children.len() == 1 {
                    trace_log!(label_len = node.label.len(), "radix: merge");
                    node.merge_with_single_child();
                }
            }
        }
        return (Some(node), removed);
    }

    (Some(node), None)
}

/// Find the node whose path from `root` spells exactly `key`.
///
/// The returned node may be a non-terminal branch point; check
/// [`Node::is_terminal`] before treating the key as present.
pub(crate) fn lookup<'a, V>(root: Option<&'a Node<V>>, key: &[u8]) -> Option<&'a Node<V>> {
    let mut node = root?;
    let mut key = key;

    loop {
        let p = common_prefix_len(&node.label, key);
        if p != node.label.len() {
            return None;
        }
        if p == key.len() {
            return Some(node);
        }

        key = &key[p..];
        node = node.child(key[0])?;
    }
}

/// Mutable twin of [`lookup`].
pub(crate) fn lookup_mut<'a, V>(
    root: Option<&'a mut Node<V>>,
    key: &[u8],
) -> Option<&'a mut Node<V>> {
    let mut node = root?;
    let mut key = key;

    loop {
        let p = common_prefix_len(&node.label, key);
        if p != node.label.len() {
            return None;
        }
        if p == key.len() {
            return Some(node);
        }

        key = &key[p..];
        node = node.child_mut(key[0])?;
    }
}

/// The subtree holding exactly the keys that start with some pattern.
pub(crate) struct Anchor<'a, V> {
    pub(crate) node: &'a Node<V>,
    /// Labels of every node above `node`, concatenated.
    pub(crate) prefix: Vec<u8>,
}

/// Locate the subtree of keys starting with `pattern`.
pub(crate) fn prefix_anchor<'a, V>(
    root: Option<&'a Node<V>>,
    pattern: &[u8],
) -> Option<Anchor<'a, V>> {
    let mut node = root?;
    let mut pattern = pattern;
    let mut prefix = Vec::new();

    loop {
        let p = common_prefix_len(&node.label, pattern);
        if p == pattern.len() {
            return Some(Anchor { node, prefix });
        }
        if p != node.label.len() {
            return None;
        }

        pattern = &pattern[p..];
        let child = node.child(pattern[0])?;
        prefix.extend_from_slice(&node.label);
        node = child;
    }
}

/// Depth-first pre-order walk calling `visit(key, value)` for every terminal
/// node under `node`. Keys are `buffer` followed by the path to the node.
///
/// `buffer` is restored to its entry length before returning.
pub(crate) fn traverse<V, F>(node: Option<&Node<V>>, buffer: &mut Vec<u8>, visit: &mut F)
where
    F: FnMut(&[u8], &V),
{
    let Some(node) = node else {
        return;
    };

    let len_before = buffer.len();
    buffer.extend_from_slice(&node.label);

    if let Some(value) = &node.value {
        visit(buffer.as_slice(), value);
    }
    for child in &node.children {
        traverse(Some(&**child), buffer, visit);
    }

    buffer.truncate(len_before);
}
