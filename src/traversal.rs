//! The orders a [`Tree`][crate::Tree] can be walked in.
//!
//! Materializing keys with [`Tree::to_vec`][crate::Tree::to_vec] and streaming them through a
//! [`Visit`]or with [`Tree::apply`][crate::Tree::apply] both go through the same walk so they
//! always agree on the order.

use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use crate::error::TraversalError;
use crate::node::Node;

/// Which order to visit the keys of a tree in.
///
/// Selectors coming from outside the program can be checked with [`TryFrom<u8>`] (`0` through
/// `3`, in the order of the variants below) or [`FromStr`]. Anything unrecognised is an error,
/// never a fallback to the default.
///
/// # Examples
///
/// ```
/// use rebuild_bst::{TraversalError, TraversalOrder};
///
/// assert_eq!(TraversalOrder::try_from(1u8), Ok(TraversalOrder::InOrder));
/// assert_eq!("level".parse(), Ok(TraversalOrder::LevelOrder));
/// assert_eq!(TraversalOrder::try_from(4u8), Err(TraversalError::UnknownOrder(4)));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// A node, then its left subtree, then its right subtree.
    #[default]
    PreOrder,
    /// The left subtree, then the node, then the right subtree. This yields keys in ascending
    /// order.
    InOrder,
    /// The left subtree, then the right subtree, then the node.
    PostOrder,
    /// Breadth first: every node at depth 0, then depth 1, and so on, left to right.
    LevelOrder,
}

impl TraversalOrder {
    /// Every order, in selector order.
    pub const ALL: [Self; 4] = [
        Self::PreOrder,
        Self::InOrder,
        Self::PostOrder,
        Self::LevelOrder,
    ];
}

impl TryFrom<u8> for TraversalOrder {
    type Error = TraversalError;

    fn try_from(selector: u8) -> Result<Self, Self::Error> {
        match selector {
            0 => Ok(Self::PreOrder),
            1 => Ok(Self::InOrder),
            2 => Ok(Self::PostOrder),
            3 => Ok(Self::LevelOrder),
            _ => {
                tracing::debug!(selector, "rejected traversal order");
                Err(TraversalError::UnknownOrder(selector))
            }
        }
    }
}

impl From<TraversalOrder> for u8 {
    fn from(order: TraversalOrder) -> Self {
        match order {
            TraversalOrder::PreOrder => 0,
            TraversalOrder::InOrder => 1,
            TraversalOrder::PostOrder => 2,
            TraversalOrder::LevelOrder => 3,
        }
    }
}

impl FromStr for TraversalOrder {
    type Err = TraversalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pre" | "preorder" | "pre-order" => Ok(Self::PreOrder),
            "in" | "inorder" | "in-order" => Ok(Self::InOrder),
            "post" | "postorder" | "post-order" => Ok(Self::PostOrder),
            "level" | "levelorder" | "level-order" | "breadth-first" | "bfs" => {
                Ok(Self::LevelOrder)
            }
            _ => {
                tracing::debug!(selector = s, "rejected traversal order");
                Err(TraversalError::UnknownOrderName(s.to_owned()))
            }
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PreOrder => "pre-order",
            Self::InOrder => "in-order",
            Self::PostOrder => "post-order",
            Self::LevelOrder => "level-order",
        };
        f.write_str(name)
    }
}

/// Something that can be shown keys one at a time.
///
/// Every `FnMut(&K)` closure is a `Visit<K>`, as is any type implementing `visit` by hand.
///
/// # Examples
///
/// ```
/// use rebuild_bst::{TraversalOrder, Tree, Visit};
///
/// struct Sum(i64);
///
/// impl Visit<i64> for Sum {
///     fn visit(&mut self, key: &i64) {
///         self.0 += key;
///     }
/// }
///
/// let tree: Tree<i64> = [3, 1, 2].into_iter().collect();
/// let mut sum = Sum(0);
/// tree.apply(&mut sum, TraversalOrder::InOrder);
/// assert_eq!(sum.0, 6);
/// ```
pub trait Visit<K: ?Sized> {
    /// Called once per key, in traversal order.
    fn visit(&mut self, key: &K);
}

impl<K, F> Visit<K> for F
where
    K: ?Sized,
    F: FnMut(&K),
{
    fn visit(&mut self, key: &K) {
        self(key);
    }
}

/// Feeds every key under `root` to `visit` in the given order.
pub(crate) fn walk<'a, K, F>(root: Option<&'a Node<K>>, order: TraversalOrder, visit: &mut F)
where
    F: FnMut(&'a K),
{
    match order {
        TraversalOrder::PreOrder => pre_order(root, visit),
        TraversalOrder::InOrder => in_order(root, visit),
        TraversalOrder::PostOrder => post_order(root, visit),
        TraversalOrder::LevelOrder => level_order(root, visit),
    }
}

fn pre_order<'a, K, F>(node: Option<&'a Node<K>>, visit: &mut F)
where
    F: FnMut(&'a K),
{
    if let Some(n) = node {
        visit(&n.key);
        pre_order(n.left.node(), visit);
        pre_order(n.right.node(), visit);
    }
}

fn in_order<'a, K, F>(node: Option<&'a Node<K>>, visit: &mut F)
where
    F: FnMut(&'a K),
{
    if let Some(n) = node {
        in_order(n.left.node(), visit);
        visit(&n.key);
        in_order(n.right.node(), visit);
    }
}

fn post_order<'a, K, F>(node: Option<&'a Node<K>>, visit: &mut F)
where
    F: FnMut(&'a K),
{
    if let Some(n) = node {
        post_order(n.left.node(), visit);
        post_order(n.right.node(), visit);
        visit(&n.key);
    }
}

fn level_order<'a, K, F>(root: Option<&'a Node<K>>, visit: &mut F)
where
    F: FnMut(&'a K),
{
    let mut queue: VecDeque<&'a Node<K>> = root.into_iter().collect();
    while let Some(n) = queue.pop_front() {
        visit(&n.key);
        queue.extend(n.left.node());
        queue.extend(n.right.node());
    }
}

/// A lazy pre-order iterator over the keys of a [`Tree`][crate::Tree].
///
/// Created by [`Tree::iter`][crate::Tree::iter]. Only the right children still to be visited are
/// held on a stack, so nothing is collected up front.
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, K> Clone for Iter<'a, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K> fmt::Debug for Iter<'a, K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.stack.pop()?;
        // Right goes on first so the left subtree is finished before it.
        self.stack.extend(n.right.node());
        self.stack.extend(n.left.node());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&n.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K> ExactSizeIterator for Iter<'a, K> {}

impl<'a, K> FusedIterator for Iter<'a, K> {}
