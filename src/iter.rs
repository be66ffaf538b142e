//! Iterators over radix tree entries.
//!
//! All iterators walk depth-first with an explicit stack, so entries come out
//! in ascending byte order of their keys.

use std::iter::FusedIterator;

use crate::node::Node;
use crate::tree::Anchor;

/// Iterator over `(key, &value)` pairs.
pub struct Iter<'a, V> {
    /// Nodes still to visit, each with the key length above it.
    stack: Vec<(&'a Node<V>, usize)>,
    buffer: Vec<u8>,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(root: Option<&'a Node<V>>) -> Self {
        Self {
            stack: root.into_iter().map(|node| (node, 0)).collect(),
            buffer: Vec::new(),
        }
    }

    /// Iterate the subtree under `anchor`, or nothing if there is none.
    pub(crate) fn from_anchor(anchor: Option<Anchor<'a, V>>) -> Self {
        match anchor {
            Some(Anchor { node, prefix }) => Self {
                stack: vec![(node, prefix.len())],
                buffer: prefix,
            },
            None => Self::new(None),
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Vec<u8>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, len)) = self.stack.pop() {
            self.buffer.truncate(len);
            self.buffer.extend_from_slice(&node.label);

            let depth = self.buffer.len();
            for child in node.children.iter().rev() {
                self.stack.push((&**child, depth));
            }

            if let Some(value) = &node.value {
                return Some((self.buffer.clone(), value));
            }
        }
        None
    }
}

impl<V> FusedIterator for Iter<'_, V> {}

/// Iterator over keys.
pub struct Keys<'a, V> {
    pub(crate) inner: Iter<'a, V>,
}

impl<V> Iterator for Keys<'_, V> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }
}

impl<V> FusedIterator for Keys<'_, V> {}

/// Iterator over values, in key order.
pub struct Values<'a, V> {
    pub(crate) inner: Iter<'a, V>,
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }
}

impl<V> FusedIterator for Values<'_, V> {}
