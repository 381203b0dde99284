//! An owned, mutable BST that only balances itself when asked to.
//!
//! Every mutation descends from the root, rebuilds the path it walked on the way back up and
//! keeps a running count of keys. Nothing is rotated on insert or delete, so inserting keys in
//! sorted order gives a tree shaped like a linked list. [`Tree::rebalance`] rebuilds the whole
//! tree to minimal height from its sorted keys.
//!
//! # Examples
//!
//! ```
//! use rebuild_bst::{TraversalOrder, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Inserting the same key again changes nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! for key in [2, 3, 4] {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.height(), 4);
//!
//! tree.rebalance();
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.to_vec(TraversalOrder::LevelOrder), [2, 1, 3, 4]);
//!
//! assert!(tree.delete(&1));
//! assert!(!tree.delete(&1));
//! assert_eq!(tree.len(), 3);
//! ```

use std::borrow::Borrow;
use std::fmt;

use crate::draw::{Drawing, Layout};
use crate::node::{Child, Node};
use crate::traversal::{self, Iter, TraversalOrder, Visit};
use crate::util::Edit;

/// A Binary Search Tree of unique keys. This can be used for inserting, finding, and deleting
/// keys, walking them in any of the [`TraversalOrder`]s, and rebuilding into a balanced shape.
///
/// # Deep trees
///
/// Dropping, [`clear`](Tree::clear), [`clone`](Clone::clone), equality, [`height`](Tree::height),
/// [`contains`](Tree::contains), [`iter`](Tree::iter) and [`rebalance`](Tree::rebalance) use
/// explicit stacks and handle a tree of any shape. [`insert`](Tree::insert),
/// [`delete`](Tree::delete), `Debug` and the depth-first orders of [`to_vec`](Tree::to_vec) and
/// [`apply`](Tree::apply) recurse once per level, so their stack use grows with
/// [`height`](Tree::height). Sorted input makes the height equal to [`len`](Tree::len); call
/// [`rebalance`](Tree::rebalance) before such a tree reaches tens of thousands of levels.
pub struct Tree<K> {
    root: Child<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        self.root.take().release();
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root())
            .finish()
    }
}

/// Renders the tree with the default [`Layout`]. See [`Tree::draw`].
impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.draw(Layout::default()), f)
    }
}

/// Two trees are equal when they hold the same keys, whatever their shapes.
impl<K> PartialEq for Tree<K>
where
    K: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.sorted() == other.sorted()
    }
}

impl<K> Eq for Tree<K> where K: Eq {}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: Child::empty(),
            len: 0,
        }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of levels in the tree: 0 when empty, 1 for a lone root.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// The smallest key, if any.
    pub fn min(&self) -> Option<&K> {
        self.root.min()
    }

    /// The largest key, if any.
    pub fn max(&self) -> Option<&K> {
        self.root.max()
    }

    /// Whether some node holds `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree: Tree<String> = ["b".to_owned(), "a".to_owned()].into_iter().collect();
    ///
    /// assert!(tree.contains("a"));
    /// assert!(!tree.contains("c"));
    /// ```
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.contains(key)
    }

    /// Adds `key` to the tree. Returns `false`, leaving the tree as it was, if the key was
    /// already present.
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let (root, edit) = self.root.take().insert(key);
        self.root = root;
        self.record(edit)
    }

    /// Removes `key` from the tree. Returns `false`, leaving the tree as it was, if the key
    /// wasn't present.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let mut tree: Tree<i32> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.delete(&2));
    /// assert!(!tree.contains(&2));
    /// assert_eq!(tree.len(), 2);
    ///
    /// // Deleting it again is fine, it just doesn't do anything.
    /// assert!(!tree.delete(&2));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (root, edit) = self.root.take().delete(key);
        self.root = root;
        self.record(edit)
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.root.take().release();
        self.len = 0;
    }

    /// Copies the keys out in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::{TraversalOrder, Tree};
    ///
    /// let tree: Tree<i32> = [2, 3, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.to_vec(TraversalOrder::PreOrder), [2, 1, 3]);
    /// assert_eq!(tree.to_vec(TraversalOrder::InOrder), [1, 2, 3]);
    /// assert_eq!(tree.to_vec(TraversalOrder::PostOrder), [1, 3, 2]);
    /// ```
    pub fn to_vec(&self, order: TraversalOrder) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::with_capacity(self.len);
        traversal::walk(self.root(), order, &mut |key: &K| keys.push(key.clone()));
        keys
    }

    /// Shows every key to `visitor`, once each, in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::{TraversalOrder, Tree};
    ///
    /// let tree: Tree<i32> = [2, 3, 1].into_iter().collect();
    ///
    /// let mut seen = Vec::new();
    /// tree.apply(&mut |key: &i32| seen.push(*key), TraversalOrder::LevelOrder);
    /// assert_eq!(seen, [2, 1, 3]);
    /// ```
    pub fn apply<V>(&self, visitor: &mut V, order: TraversalOrder)
    where
        V: Visit<K> + ?Sized,
    {
        traversal::walk(self.root(), order, &mut |key: &K| visitor.visit(key));
    }

    /// A lazy iterator over the keys in pre-order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree: Tree<i32> = [2, 3, 1].into_iter().collect();
    ///
    /// let keys: Vec<_> = tree.iter().copied().collect();
    /// assert_eq!(keys, [2, 1, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root(), self.len)
    }

    /// Rebuilds the tree to minimal height, keeping exactly the same keys. The middle key
    /// becomes the root and each half is rebuilt the same way, so `n` keys end up in
    /// `⌈log2(n + 1)⌉` levels.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::{TraversalOrder, Tree};
    ///
    /// let mut tree: Tree<i32> = (0..7).collect();
    /// assert_eq!(tree.height(), 7);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 3);
    /// assert_eq!(tree.to_vec(TraversalOrder::LevelOrder), [3, 1, 5, 0, 2, 4, 6]);
    /// ```
    pub fn rebalance(&mut self) {
        let before = tracing::enabled!(tracing::Level::DEBUG).then(|| self.height());
        let keys = self.root.take().into_sorted(self.len);
        debug_assert_eq!(keys.len(), self.len);

        self.root = Child::from_sorted(&mut keys.into_iter(), self.len);
        if let Some(before) = before {
            tracing::debug!(
                len = self.len,
                height_before = before,
                height_after = self.height(),
                "rebalanced tree"
            );
        }
    }

    /// Borrows the tree for rendering as text.
    ///
    /// ```
    /// use rebuild_bst::{draw::Layout, Tree};
    ///
    /// let tree: Tree<i32> = [1, 0].into_iter().collect();
    /// println!("{}", tree.draw(Layout::with_indent(4)));
    /// ```
    pub fn draw(&self, layout: Layout) -> Drawing<'_, K> {
        Drawing::new(self, layout)
    }

    pub(crate) fn root(&self) -> Option<&Node<K>> {
        self.root.node()
    }

    fn sorted(&self) -> Vec<&K> {
        self.root.sorted(self.len)
    }

    /// Applies the outcome of an insert or delete to `len`.
    fn record(&mut self, edit: Edit) -> bool {
        match edit {
            Edit::Inserted => {
                self.len += 1;
                tracing::trace!(len = self.len, "inserted key");
            }
            Edit::Removed => {
                self.len -= 1;
                tracing::trace!(len = self.len, "deleted key");
            }
            Edit::Unchanged => tracing::trace!(len = self.len, "key left as is"),
        }
        edit.changed()
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
