//! The cells a [`Tree`][crate::Tree] is built from.
//!
//! Every recursive update here takes ownership of a subtree and hands back the (possibly new)
//! root of that subtree so the caller can relink it. A `Node` never knows its parent.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use crate::util::Edit;

/// A single key and the two subtrees hanging off of it.
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Child<K>,
    pub(crate) right: Child<K>,
}

/// An owning slot for a child: either a boxed `Node` or nothing.
pub(crate) struct Child<K>(pub(crate) Option<Box<Node<K>>>);

impl<K> Default for Child<K> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<K> Clone for Child<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        // Each node is listed before its right subtree, which comes before its left subtree.
        // Reversed, that is post-order: both subtrees are built before their parent.
        let mut order = Vec::new();
        let mut stack: Vec<&Node<K>> = self.node().into_iter().collect();
        while let Some(n) = stack.pop() {
            order.push(n);
            stack.extend(n.left.node());
            stack.extend(n.right.node());
        }

        let mut built: Vec<Self> = Vec::new();
        for n in order.into_iter().rev() {
            let right = match n.right.node() {
                Some(_) => built.pop().unwrap_or_default(),
                None => Self::empty(),
            };
            let left = match n.left.node() {
                Some(_) => built.pop().unwrap_or_default(),
                None => Self::empty(),
            };
            built.push(Self(Some(Box::new(Node {
                key: n.key.clone(),
                left,
                right,
            }))));
        }

        built.pop().unwrap_or_default()
    }
}

impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    // TODO walk with an explicit stack like `Clone` so list shaped trees can be printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left.node())
            .field("right", &self.right.node())
            .finish()
    }
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: Child::empty(),
            right: Child::empty(),
        }
    }

    /// Detaches the leftmost node of this subtree. Returns what is left of the subtree along with
    /// the detached node, whose own children are always empty.
    fn take_min(mut self: Box<Self>) -> (Child<K>, Box<Self>) {
        match self.left.take().0 {
            None => {
                let rest = self.right.take();
                (rest, self)
            }
            Some(left) => {
                let (rest, min) = left.take_min();
                self.left = rest;
                (Child(Some(self)), min)
            }
        }
    }
}

impl<K> Child<K> {
    pub(crate) fn empty() -> Self {
        Self(None)
    }

    fn leaf(key: K) -> Self {
        Self(Some(Box::new(Node::new(key))))
    }

    pub(crate) fn node(&self) -> Option<&Node<K>> {
        self.0.as_deref()
    }

    pub(crate) fn take(&mut self) -> Self {
        Self(self.0.take())
    }

    /// How many levels are in this subtree. An empty slot has a height of 0 and a node with no
    /// children has a height of 1.
    pub(crate) fn height(&self) -> usize {
        let mut tallest = 0;
        let mut stack: Vec<(&Node<K>, usize)> = self.node().map(|n| (n, 1)).into_iter().collect();
        while let Some((n, depth)) = stack.pop() {
            tallest = tallest.max(depth);
            stack.extend(n.left.node().map(|left| (left, depth + 1)));
            stack.extend(n.right.node().map(|right| (right, depth + 1)));
        }
        tallest
    }

    pub(crate) fn min(&self) -> Option<&K> {
        let mut current = self.node()?;
        while let Some(left) = current.left.node() {
            current = left;
        }
        Some(&current.key)
    }

    pub(crate) fn max(&self) -> Option<&K> {
        let mut current = self.node()?;
        while let Some(right) = current.right.node() {
            current = right;
        }
        Some(&current.key)
    }

    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.node();
        while let Some(n) = current {
            current = match key.cmp(n.key.borrow()) {
                Ordering::Less => n.left.node(),
                Ordering::Equal => return true,
                Ordering::Greater => n.right.node(),
            };
        }
        false
    }

    /// Borrows every key in ascending order without recursing.
    pub(crate) fn sorted(&self, capacity: usize) -> Vec<&K> {
        let mut keys = Vec::with_capacity(capacity);
        let mut pending = Vec::new();
        let mut cursor = self.node();

        loop {
            while let Some(n) = cursor {
                pending.push(n);
                cursor = n.left.node();
            }
            let Some(n) = pending.pop() else {
                break;
            };
            keys.push(&n.key);
            cursor = n.right.node();
        }

        keys
    }

    /// Returns this subtree with `key` added. A key that is already present leaves the subtree
    /// untouched.
    pub(crate) fn insert(self, key: K) -> (Self, Edit)
    where
        K: Ord,
    {
        let Some(mut n) = self.0 else {
            return (Self::leaf(key), Edit::Inserted);
        };

        let edit = match key.cmp(&n.key) {
            Ordering::Less => {
                let (left, edit) = n.left.take().insert(key);
                n.left = left;
                edit
            }
            Ordering::Equal => Edit::Unchanged,
            Ordering::Greater => {
                let (right, edit) = n.right.take().insert(key);
                n.right = right;
                edit
            }
        };

        if cfg!(debug_assertions) {
            if let Some(left) = n.left.node() {
                assert!(n.key > left.key);
            }
            if let Some(right) = n.right.node() {
                assert!(n.key < right.key);
            }
        }

        (Self(Some(n)), edit)
    }

    /// Returns this subtree without `key`. A missing key leaves the subtree untouched.
    pub(crate) fn delete<Q>(self, key: &Q) -> (Self, Edit)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(mut n) = self.0 else {
            return (Self::empty(), Edit::Unchanged);
        };

        match key.cmp(n.key.borrow()) {
            Ordering::Less => {
                let (left, edit) = n.left.take().delete(key);
                n.left = left;
                (Self(Some(n)), edit)
            }
            Ordering::Greater => {
                let (right, edit) = n.right.take().delete(key);
                n.right = right;
                (Self(Some(n)), edit)
            }
            Ordering::Equal => {
                let replacement = match (n.left.take(), n.right.take()) {
                    // Zero or one child: that child (or nothing) takes our place.
                    (left, Child(None)) => left,
                    (Child(None), right) => right,

                    // With two children the successor, the smallest key in the right subtree,
                    // moves up into this node and is unlinked from below.
                    (left, Child(Some(right))) => {
                        let (rest, successor) = right.take_min();
                        n.key = successor.key;
                        n.left = left;
                        n.right = rest;
                        Self(Some(n))
                    }
                };
                (replacement, Edit::Removed)
            }
        }
    }

    /// Consumes the subtree and returns its keys in ascending order.
    pub(crate) fn into_sorted(self, capacity: usize) -> Vec<K> {
        let mut keys = Vec::with_capacity(capacity);
        let mut pending = Vec::new();
        let mut cursor = self;

        loop {
            while let Some(mut n) = cursor.0.take() {
                cursor = n.left.take();
                pending.push(n);
            }
            let Some(mut n) = pending.pop() else {
                break;
            };
            cursor = n.right.take();
            keys.push(n.key);
        }

        keys
    }

    /// Builds a minimal height subtree from the next `count` keys of an ascending stream.
    ///
    /// The middle key of the range becomes the root. For an even count the left side receives
    /// the extra key, which is the same split `mid = (start + end) / 2` gives over the index
    /// range `[start, end]`.
    pub(crate) fn from_sorted<I>(keys: &mut I, count: usize) -> Self
    where
        I: Iterator<Item = K>,
    {
        if count == 0 {
            return Self::empty();
        }

        let left_count = (count - 1) / 2;
        let left = Self::from_sorted(keys, left_count);
        match keys.next() {
            Some(key) => {
                let right = Self::from_sorted(keys, count - 1 - left_count);
                Self(Some(Box::new(Node { key, left, right })))
            }
            None => left,
        }
    }

    /// Frees every node in this subtree without recursing, so list shaped subtrees of any length
    /// can be dropped.
    pub(crate) fn release(self) {
        let mut stack: Vec<Box<Node<K>>> = self.0.into_iter().collect();
        while let Some(mut n) = stack.pop() {
            stack.extend(n.left.0.take());
            stack.extend(n.right.0.take());
        }
    }
}
