use thiserror::Error;

/// The error type for fallible [`List`] operations.
///
/// A failed operation never modifies the list.
///
/// [`List`]: crate::List
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The node handle does not belong to this list: it was either issued by
    /// another list, or went stale when its node was removed.
    #[error("node does not belong to this list")]
    InvalidNode,
    /// The operation needs at least one element, but the list is empty.
    #[error("list is empty")]
    Empty,
    /// No element matched the searched-for value.
    #[error("no matching element in list")]
    NotFound,
}
