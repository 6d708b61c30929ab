//! Directed graphs given as edge lists, and the neighbor structures derived from them.
//!
//! An [`EdgeList`] is a borrowed, validated view over parallel `sources`/`targets`
//! slices. [`AdjacencyList`] and [`WeightedAdjacencyList`] regroup the edges per node,
//! either along the edges ([`Direction::Outgoing`]) or against them
//! ([`Direction::Incoming`]). [`Traversal`] walks an adjacency list breadth-first or
//! depth-first.

mod adjacency;
mod traversal;

pub use self::{
    adjacency::{AdjacencyList, WeightedAdjacencyList},
    traversal::{breadth_first, depth_first, Traversal},
};

use crate::error::GraphError;

/// Which end of each edge the neighbor lists are grouped by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Neighbors of `u` are the targets of edges leaving `u`.
    #[default]
    Outgoing,
    /// Neighbors of `u` are the sources of edges entering `u`.
    Incoming,
}

/// Parses the single-character option: `'o'`/`'O'` for outgoing, `'i'`/`'I'` for incoming.
///
/// # Examples
/// ```
/// # use fixed_capacity::graph::Direction;
/// assert_eq!(Direction::try_from('O'), Ok(Direction::Outgoing));
/// assert_eq!(Direction::try_from('i'), Ok(Direction::Incoming));
/// assert!(Direction::try_from('x').is_err());
/// ```
impl TryFrom<char> for Direction {
    type Error = GraphError;

    fn try_from(op: char) -> Result<Self, GraphError> {
        match op {
            'o' | 'O' => Ok(Self::Outgoing),
            'i' | 'I' => Ok(Self::Incoming),
            _ => Err(GraphError::InvalidDirection(op)),
        }
    }
}

/// Borrowed view of a directed graph with `nodes` nodes and edges `sources[k] -> targets[k]`.
///
/// Node indices are 0-based.
#[derive(Debug, Clone, Copy)]
pub struct EdgeList<'a> {
    // Invariant: `sources.len() == targets.len()`, every endpoint `< nodes`
    nodes: usize,
    sources: &'a [usize],
    targets: &'a [usize],
}

impl<'a> EdgeList<'a> {
    /// Creates a view after checking that both endpoint slices have the same length and
    /// that every endpoint names one of the `nodes` nodes.
    ///
    /// # Errors
    /// Returns [`GraphError::EdgeLengthMismatch`] or [`GraphError::NodeOutOfRange`].
    pub fn new(
        nodes: usize,
        sources: &'a [usize],
        targets: &'a [usize],
    ) -> Result<Self, GraphError> {
        if sources.len() != targets.len() {
            return Err(GraphError::EdgeLengthMismatch {
                sources: sources.len(),
                targets: targets.len(),
            });
        }
        if let Some(&node) = sources.iter().chain(targets).find(|&&v| v >= nodes) {
            return Err(GraphError::NodeOutOfRange { node, nodes });
        }
        Ok(Self {
            nodes,
            sources,
            targets,
        })
    }

    pub const fn node_count(&self) -> usize {
        self.nodes
    }

    pub const fn edge_count(&self) -> usize {
        self.sources.len()
    }

    pub const fn sources(&self) -> &'a [usize] {
        self.sources
    }

    pub const fn targets(&self) -> &'a [usize] {
        self.targets
    }

    /// Returns the graph with every edge reversed. No data is copied.
    pub const fn transpose(&self) -> Self {
        Self {
            nodes: self.nodes,
            sources: self.targets,
            targets: self.sources,
        }
    }

    /// Returns the view whose sources are the nodes neighbor lists are grouped by.
    pub const fn oriented(&self, direction: Direction) -> Self {
        match direction {
            Direction::Outgoing => *self,
            Direction::Incoming => self.transpose(),
        }
    }
}

/// An [`EdgeList`] with one weight per edge.
#[derive(Debug, Clone, Copy)]
pub struct WeightedEdgeList<'a, W> {
    // Invariant: `weights.len() == edges.edge_count()`
    edges: EdgeList<'a>,
    weights: &'a [W],
}

impl<'a, W> WeightedEdgeList<'a, W> {
    /// # Errors
    /// Returns the errors of [`EdgeList::new`], or [`GraphError::WeightLengthMismatch`]
    /// if there is not exactly one weight per edge.
    pub fn new(
        nodes: usize,
        sources: &'a [usize],
        targets: &'a [usize],
        weights: &'a [W],
    ) -> Result<Self, GraphError> {
        Self::from_edges(EdgeList::new(nodes, sources, targets)?, weights)
    }

    /// Attaches weights to an already validated edge list.
    ///
    /// # Errors
    /// Returns [`GraphError::WeightLengthMismatch`] if there is not exactly one weight per edge.
    pub fn from_edges(edges: EdgeList<'a>, weights: &'a [W]) -> Result<Self, GraphError> {
        if weights.len() != edges.edge_count() {
            return Err(GraphError::WeightLengthMismatch {
                edges: edges.edge_count(),
                weights: weights.len(),
            });
        }
        Ok(Self { edges, weights })
    }

    pub const fn edges(&self) -> &EdgeList<'a> {
        &self.edges
    }

    pub const fn weights(&self) -> &'a [W] {
        self.weights
    }

    /// Returns the graph with every edge reversed, keeping each weight on its edge.
    pub const fn transpose(&self) -> Self {
        Self {
            edges: self.edges.transpose(),
            weights: self.weights,
        }
    }
}
