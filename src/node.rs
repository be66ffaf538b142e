//! Radix tree node.
//!
//! A node owns the label of the edge leading into it, an optional value
//! (present iff a key ends here) and its children. Children are kept in a
//! vector sorted by the first byte of their labels, so at most one child can
//! start with a given byte and in-order walks visit keys in ascending order.

use smallvec::SmallVec;

use crate::INLINE_LABEL_LEN;

/// Edge label bytes. Short labels stay inline.
pub(crate) type Label = SmallVec<[u8; INLINE_LABEL_LEN]>;

#[derive(Clone)]
pub(crate) struct Node<V> {
    pub(crate) label: Label,
    /// `Some` iff this node is terminal.
    pub(crate) value: Option<V>,
    pub(crate) children: Vec<Box<Node<V>>>,
}

impl<V> Node<V> {
    /// Terminal node with no children.
    pub(crate) fn leaf(label: &[u8], value: V) -> Box<Self> {
        Box::new(Self {
            label: Label::from_slice(label),
            value: Some(value),
            children: Vec::new(),
        })
    }

    /// Non-terminal node; the caller attaches children.
    pub(crate) fn branch(label: &[u8]) -> Box<Self> {
        Box::new(Self {
            label: Label::from_slice(label),
            value: None,
            children: Vec::with_capacity(2),
        })
    }

    #[inline]
    pub(crate) fn is_terminal(&self) -> bool {
        self.value.is_some()
    }

    /// Children always carry a non-empty label.
    #[inline]
    fn first_byte(&self) -> u8 {
        self.label[0]
    }

    #[inline]
    fn child_index(&self, byte: u8) -> Result<usize, usize> {
        self.children
            .binary_search_by_key(&byte, |child| child.first_byte())
    }

    pub(crate) fn child(&self, byte: u8) -> Option<&Node<V>> {
        self.child_index(byte).ok().map(|idx| &*self.children[idx])
    }

    pub(crate) fn child_mut(&mut self, byte: u8) -> Option<&mut Node<V>> {
        match self.child_index(byte) {
            Ok(idx) => Some(&mut *self.children[idx]),
            Err(_) => None,
        }
    }

    /// Detach and return the child whose label starts with `byte`.
    pub(crate) fn take_child(&mut self, byte: u8) -> Option<Box<Node<V>>> {
        self.child_index(byte)
            .ok()
            .map(|idx| self.children.remove(idx))
    }

    /// Attach `child` under its first byte, replacing any child already there.
    pub(crate) fn attach(&mut self, child: Box<Node<V>>) {
        match self.child_index(child.first_byte()) {
            Ok(idx) => self.children[idx] = child,
            Err(idx) => self.children.insert(idx, child),
        }
    }

    /// Absorb the only child: its label is appended to ours and its children
    /// and value replace ours. Requires a non-terminal node with one child.
    pub(crate) fn merge_with_single_child(&mut self) {
        debug_assert!(self.value.is_none());
        debug_assert_eq!(self.children.len(), 1);

        if let Some(child) = self.children.pop() {
            let Node {
                label,
                value,
                children,
            } = *child;
            self.label.extend_from_slice(&label);
            self.children = children;
            self.value = value;
        }
    }
}

/// Length of the longest common prefix of `a` and `b`.
#[inline]
pub(crate) fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
