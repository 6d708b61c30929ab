use std::{mem, ops::Range};

use tracing::debug;

use super::{Direction, EdgeList, WeightedEdgeList};
use crate::SeqList;

/// Per-node neighbor lists in compressed form: one flat neighbor array and the
/// offset of each node's run inside it.
///
/// The neighbors of a node appear in the order their edges appear in the input.
///
/// # Examples
/// ```
/// # use fixed_capacity::graph::{AdjacencyList, Direction, EdgeList};
/// let g = EdgeList::new(3, &[0, 0, 2], &[1, 2, 1])?;
///
/// let out = AdjacencyList::build(&g, Direction::Outgoing);
/// assert_eq!(out.neighbors(0), &[1, 2]);
/// assert!(out.neighbors(1).is_empty());
///
/// let inc = AdjacencyList::build(&g, Direction::Incoming);
/// assert_eq!(inc.neighbors(1), &[0, 2]);
/// # Ok::<(), fixed_capacity::GraphError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyList {
    // Invariant: `offsets.len() == nodes + 1`, non-decreasing, from 0 to `neighbors.len()`
    offsets: Box<[usize]>,
    neighbors: Box<[usize]>,
}

impl AdjacencyList {
    pub fn build(graph: &EdgeList<'_>, direction: Direction) -> Self {
        let graph = graph.oriented(direction);
        let offsets = degree_offsets(graph.node_count(), graph.sources());
        let neighbors = group_by_source(&offsets, graph.sources(), graph.targets());
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            ?direction,
            "built adjacency list"
        );
        Self { offsets, neighbors }
    }

    pub fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.neighbors.len()
    }

    /// # Panics
    /// Panics if `node >= self.node_count()`.
    #[track_caller]
    pub fn neighbor_count(&self, node: usize) -> usize {
        self.offsets[node + 1] - self.offsets[node]
    }

    /// # Panics
    /// Panics if `node >= self.node_count()`.
    #[track_caller]
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.neighbors[self.offsets[node]..self.offsets[node + 1]]
    }

    /// Iterates over the neighbor lists of all nodes, in node order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[usize]> + '_ {
        self.offsets
            .windows(2)
            .map(|w| &self.neighbors[w[0]..w[1]])
    }

    fn range(&self, node: usize) -> Range<usize> {
        self.offsets[node]..self.offsets[node + 1]
    }
}

/// An [`AdjacencyList`] with the weight of the corresponding edge next to every neighbor.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedAdjacencyList<W> {
    adjacency: AdjacencyList,
    // Invariant: `weights.len() == adjacency.edge_count()`
    weights: Box<[W]>,
}

impl<W: Clone + Default> WeightedAdjacencyList<W> {
    /// Groups the edge weights per node, in the same order as the neighbors.
    ///
    /// The weight buffer is filled with `W::default()` before every weight is cloned
    /// into its slot, hence the `Default` bound. Weight types without a default value
    /// can be wrapped in `Option<W>`.
    ///
    /// # Examples
    /// ```
    /// # use fixed_capacity::graph::{Direction, WeightedAdjacencyList, WeightedEdgeList};
    /// let g = WeightedEdgeList::new(2, &[0, 1, 0], &[1, 0, 0], &[1.5, 2.5, 3.5])?;
    /// let out = WeightedAdjacencyList::build(&g, Direction::Outgoing);
    /// assert_eq!(out.neighbors(0), &[1, 0]);
    /// assert_eq!(out.neighbor_weights(0), &[1.5, 3.5]);
    /// # Ok::<(), fixed_capacity::GraphError>(())
    /// ```
    pub fn build(graph: &WeightedEdgeList<'_, W>, direction: Direction) -> Self {
        let edges = graph.edges().oriented(direction);
        let adjacency = AdjacencyList::build(graph.edges(), direction);
        let weights = group_by_source(&adjacency.offsets, edges.sources(), graph.weights());
        Self { adjacency, weights }
    }
}

impl<W> WeightedAdjacencyList<W> {
    pub fn adjacency(&self) -> &AdjacencyList {
        &self.adjacency
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    #[track_caller]
    pub fn neighbor_count(&self, node: usize) -> usize {
        self.adjacency.neighbor_count(node)
    }

    #[track_caller]
    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.adjacency.neighbors(node)
    }

    /// Weights of the edges leading to [`neighbors(node)`](Self::neighbors), in the same order.
    ///
    /// # Panics
    /// Panics if `node >= self.node_count()`.
    #[track_caller]
    pub fn neighbor_weights(&self, node: usize) -> &[W] {
        &self.weights[self.adjacency.range(node)]
    }

    /// Iterates over `(neighbors, weights)` pairs of all nodes, in node order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&[usize], &[W])> + '_ {
        self.adjacency
            .offsets
            .windows(2)
            .map(|w| (&self.adjacency.neighbors[w[0]..w[1]], &self.weights[w[0]..w[1]]))
    }
}

/// Counts the out-degree of every node and returns the running sums, starting at 0.
fn degree_offsets(nodes: usize, sources: &[usize]) -> Box<[usize]> {
    let mut offsets = vec![0; nodes + 1].into_boxed_slice();
    for &s in sources {
        offsets[s + 1] += 1;
    }
    for i in 1..offsets.len() {
        offsets[i] += offsets[i - 1];
    }
    offsets
}

/// Stable bucket placement: `values[k]` lands in the run of node `sources[k]`.
///
/// Every node gets a list borrowed over its own run of the output, sized to its
/// degree, so appends never run out of room.
fn group_by_source<T: Clone + Default>(
    offsets: &[usize],
    sources: &[usize],
    values: &[T],
) -> Box<[T]> {
    let mut out = vec![T::default(); values.len()].into_boxed_slice();
    {
        let mut rest = &mut out[..];
        let mut runs: Vec<SeqList<'_, T>> = offsets
            .windows(2)
            .map(|w| {
                let (run, tail) = mem::take(&mut rest).split_at_mut(w[1] - w[0]);
                rest = tail;
                SeqList::from_borrowed(run)
            })
            .collect();

        for (&s, value) in sources.iter().zip(values) {
            // SAFETY: the run of `s` has one slot per occurrence of `s` in `sources`
            unsafe { runs[s].push_unchecked(value.clone()) };
        }
        debug_assert!(runs.iter().all(SeqList::is_full));
    }
    out
}
