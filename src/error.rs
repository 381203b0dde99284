use thiserror::Error;

/// Error returned when a traversal order selector names no known order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraversalError {
    /// A numeric selector outside of `0..=3`.
    #[error("traversal order {0} not recognised, expected 0 (pre), 1 (in), 2 (post) or 3 (level)")]
    UnknownOrder(u8),

    /// A textual selector that doesn't name an order.
    #[error("traversal order {0:?} not recognised")]
    UnknownOrderName(String),
}
