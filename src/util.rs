/// What a recursive update did to the subtree it was handed. The `Tree` uses this to keep its
/// `len` in step with the number of reachable nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Edit {
    /// The key was already present (insert) or missing (delete) so nothing changed.
    Unchanged,
    /// A new node was created for the key.
    Inserted,
    /// The node holding the key was released.
    Removed,
}

impl Edit {
    /// Whether the subtree's node count changed.
    pub(crate) fn changed(self) -> bool {
        self != Self::Unchanged
    }
}
