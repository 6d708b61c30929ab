use thiserror::Error;

/// Error returned when trying to add an item to a container whose insertion cursor
/// already reached its capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("buffer is full (capacity {capacity})")]
pub struct FullError {
    capacity: usize,
}

impl FullError {
    pub(crate) const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The capacity of the container that rejected the item.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Errors raised while building graph views and adjacency lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("invalid direction option {0:?}, expected one of 'o', 'O', 'i', 'I'")]
    InvalidDirection(char),

    #[error("edge endpoint arrays differ in length: {sources} sources, {targets} targets")]
    EdgeLengthMismatch { sources: usize, targets: usize },

    #[error("weight array has {weights} entries for {edges} edges")]
    WeightLengthMismatch { edges: usize, weights: usize },

    #[error("node {node} is out of range for a graph of {nodes} nodes")]
    NodeOutOfRange { node: usize, nodes: usize },

    #[error("graph of {nodes} nodes exceeds traversal capacity {capacity}")]
    CapacityExceeded { nodes: usize, capacity: usize },
}
