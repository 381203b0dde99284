//! Text rendering of a tree for debugging.
//!
//! The drawing is rotated a quarter turn counter-clockwise: the root sits at the left margin,
//! right subtrees are printed above their parent and left subtrees below, each level indented a
//! fixed number of columns further than the one before it.
//!
//! ```
//! use rebuild_bst::{draw::Layout, Tree};
//!
//! let tree: Tree<i32> = [2, 1, 3].into_iter().collect();
//! assert_eq!(tree.draw(Layout::with_indent(2)).to_string(), "  3\n2\n  1\n");
//! ```

use std::fmt;

use crate::node::Node;
use crate::Tree;

/// How a drawing is laid out.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Columns of indentation added per level of depth.
    pub indent: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self { indent: 10 }
    }
}

impl Layout {
    /// A layout indenting each level by `indent` columns.
    pub fn with_indent(indent: usize) -> Self {
        Self { indent }
    }
}

/// A tree paired with a [`Layout`], ready to be formatted. Created by
/// [`Tree::draw`][crate::Tree::draw].
pub struct Drawing<'a, K> {
    tree: &'a Tree<K>,
    layout: Layout,
}

impl<'a, K> Drawing<'a, K> {
    pub(crate) fn new(tree: &'a Tree<K>, layout: Layout) -> Self {
        Self { tree, layout }
    }
}

impl<'a, K> fmt::Display for Drawing<'a, K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        rotated(f, self.tree.root(), 0, self.layout)
    }
}

/// Renders `tree` with `layout` into a `String`. Same as `tree.draw(layout).to_string()`.
///
/// ```
/// use rebuild_bst::{draw, Tree};
///
/// let tree: Tree<i32> = [1, 0].into_iter().collect();
/// assert_eq!(draw::render(&tree, draw::Layout::with_indent(1)), "1\n 0\n");
/// ```
pub fn render<K>(tree: &Tree<K>, layout: Layout) -> String
where
    K: fmt::Display,
{
    tree.draw(layout).to_string()
}

fn rotated<K>(
    f: &mut fmt::Formatter<'_>,
    node: Option<&Node<K>>,
    depth: usize,
    layout: Layout,
) -> fmt::Result
where
    K: fmt::Display,
{
    let Some(n) = node else {
        return Ok(());
    };

    rotated(f, n.right.node(), depth + 1, layout)?;
    writeln!(f, "{:width$}{}", "", n.key, width = depth * layout.indent)?;
    rotated(f, n.left.node(), depth + 1, layout)
}
