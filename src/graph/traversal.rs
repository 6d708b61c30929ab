use tracing::debug;

use super::AdjacencyList;
use crate::{error::GraphError, Queue, SeqList, Stack};

/// Reusable scratch space for walking graphs of up to `capacity` nodes.
///
/// Every node enters the frontier at most once per run, so a [`Queue`] window and a
/// [`Stack`] of `capacity` frames are enough; both are reset at the start of each run
/// instead of being reallocated.
#[derive(Debug)]
pub struct Traversal {
    queue: Queue<'static, usize>,
    stack: Stack<'static, (usize, usize)>,
    visited: Box<[bool]>,
}

impl Traversal {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: Queue::with_capacity(capacity),
            stack: Stack::with_capacity(capacity),
            visited: vec![false; capacity].into_boxed_slice(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.visited.len()
    }

    /// Visits every node reachable from `seeds` in breadth-first order and returns
    /// the visit order. Seeds are expanded in the order given; seeds already reached
    /// from an earlier one are skipped.
    ///
    /// # Errors
    /// Returns [`GraphError::CapacityExceeded`] if the graph has more nodes than this
    /// traversal can hold, or [`GraphError::NodeOutOfRange`] for an unknown seed.
    ///
    /// # Examples
    /// ```
    /// # use fixed_capacity::graph::{AdjacencyList, Direction, EdgeList, Traversal};
    /// let g = EdgeList::new(4, &[0, 0, 1, 2], &[1, 2, 3, 3])?;
    /// let adj = AdjacencyList::build(&g, Direction::Outgoing);
    /// let mut walk = Traversal::new(4);
    /// assert_eq!(walk.breadth_first(&adj, &[0])?, [0, 1, 2, 3]);
    /// assert_eq!(walk.depth_first(&adj, &[0])?, [0, 1, 3, 2]);
    /// # Ok::<(), fixed_capacity::GraphError>(())
    /// ```
    pub fn breadth_first(
        &mut self,
        graph: &AdjacencyList,
        seeds: &[usize],
    ) -> Result<SeqList<'static, usize>, GraphError> {
        self.reset(graph, seeds)?;
        let Self { queue, visited, .. } = self;
        let mut order = SeqList::with_capacity(graph.node_count());

        for &seed in seeds {
            if visited[seed] {
                continue;
            }
            visited[seed] = true;
            // SAFETY: nodes are marked before they are enqueued, so at most
            // `node_count <= capacity` nodes are enqueued per run
            unsafe { queue.enqueue_unchecked(seed) };

            while let Some(&node) = queue.dequeue() {
                // SAFETY: every dequeued node was enqueued exactly once
                unsafe { order.push_unchecked(node) };
                for &next in graph.neighbors(node) {
                    if !visited[next] {
                        visited[next] = true;
                        // SAFETY: see above
                        unsafe { queue.enqueue_unchecked(next) };
                    }
                }
            }
        }

        debug!(visited = order.len(), "breadth-first traversal done");
        Ok(order)
    }

    /// Visits every node reachable from `seeds` depth-first and returns the visit order.
    ///
    /// A node is recorded the first time it is reached. The walk then follows its first
    /// unvisited neighbor, and comes back to try the next one only after everything
    /// reachable from there is done. Each stack frame holds a node and the index of the
    /// next neighbor to try, so the stack never holds more than one frame per node.
    ///
    /// # Errors
    /// Same as [`breadth_first`](Self::breadth_first).
    pub fn depth_first(
        &mut self,
        graph: &AdjacencyList,
        seeds: &[usize],
    ) -> Result<SeqList<'static, usize>, GraphError> {
        self.reset(graph, seeds)?;
        let Self { stack, visited, .. } = self;
        let mut order = SeqList::with_capacity(graph.node_count());

        for &seed in seeds {
            if visited[seed] {
                continue;
            }
            visited[seed] = true;
            // SAFETY: nodes are marked before they are pushed, so at most
            // `node_count <= capacity` frames are pushed per run
            unsafe {
                order.push_unchecked(seed);
                stack.push_unchecked((seed, 0));
            }

            while let Some((node, cursor)) = stack.top_mut() {
                let neighbors = graph.neighbors(*node);
                let unvisited = neighbors[*cursor..].iter().position(|&v| !visited[v]);
                let Some(skip) = unvisited else {
                    // SAFETY: `top_mut` returned a frame
                    unsafe { stack.pop_unchecked() };
                    continue;
                };
                let next = neighbors[*cursor + skip];
                *cursor += skip + 1;
                visited[next] = true;
                // SAFETY: see above
                unsafe {
                    order.push_unchecked(next);
                    stack.push_unchecked((next, 0));
                }
            }
        }

        debug!(visited = order.len(), "depth-first traversal done");
        Ok(order)
    }

    fn reset(&mut self, graph: &AdjacencyList, seeds: &[usize]) -> Result<(), GraphError> {
        let nodes = graph.node_count();
        if nodes > self.capacity() {
            return Err(GraphError::CapacityExceeded {
                nodes,
                capacity: self.capacity(),
            });
        }
        if let Some(&node) = seeds.iter().find(|&&s| s >= nodes) {
            return Err(GraphError::NodeOutOfRange { node, nodes });
        }
        self.queue.clear();
        self.stack.clear();
        self.visited.fill(false);
        Ok(())
    }
}

/// Breadth-first visit order from `seeds`. See [`Traversal::breadth_first`].
///
/// # Errors
/// Returns [`GraphError::NodeOutOfRange`] for an unknown seed.
pub fn breadth_first(
    graph: &AdjacencyList,
    seeds: &[usize],
) -> Result<SeqList<'static, usize>, GraphError> {
    Traversal::new(graph.node_count()).breadth_first(graph, seeds)
}

/// Depth-first visit order from `seeds`. See [`Traversal::depth_first`].
///
/// # Errors
/// Returns [`GraphError::NodeOutOfRange`] for an unknown seed.
pub fn depth_first(
    graph: &AdjacencyList,
    seeds: &[usize],
) -> Result<SeqList<'static, usize>, GraphError> {
    Traversal::new(graph.node_count()).depth_first(graph, seeds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Direction, EdgeList};

    fn adjacency(nodes: usize, sources: &[usize], targets: &[usize]) -> AdjacencyList {
        let g = EdgeList::new(nodes, sources, targets).unwrap();
        AdjacencyList::build(&g, Direction::Outgoing)
    }

    #[test]
    fn test_breadth_first() {
        // two components: 0 -> {1, 2}, 1 -> 3, 2 -> 4 and 5 -> 6
        let adj = adjacency(7, &[0, 0, 1, 2, 5], &[1, 2, 3, 4, 6]);
        assert_eq!(breadth_first(&adj, &[0]).unwrap(), [0, 1, 2, 3, 4]);
        assert_eq!(breadth_first(&adj, &[5, 0]).unwrap(), [5, 6, 0, 1, 2, 3, 4]);
        assert_eq!(breadth_first(&adj, &[3]).unwrap(), [3]);
        assert_eq!(breadth_first(&adj, &[]).unwrap(), []);
    }

    #[test]
    fn test_depth_first() {
        let adj = adjacency(7, &[0, 0, 1, 2, 5], &[1, 2, 3, 4, 6]);
        assert_eq!(depth_first(&adj, &[0]).unwrap(), [0, 1, 3, 2, 4]);
        assert_eq!(depth_first(&adj, &[0, 5]).unwrap(), [0, 1, 3, 2, 4, 5, 6]);
    }

    #[test]
    fn test_depth_first_follows_latest_node() {
        // 0 -> {1, 2, 3}, 1 -> 3: node 3 is reached through 1 before 0 moves on to 2
        let adj = adjacency(4, &[0, 0, 0, 1], &[1, 2, 3, 3]);
        assert_eq!(depth_first(&adj, &[0]).unwrap(), [0, 1, 3, 2]);
        assert_eq!(breadth_first(&adj, &[0]).unwrap(), [0, 1, 2, 3]);

        // a chain back into an earlier branch: 0 -> {1, 2}, 2 -> 3, 3 -> 1
        let adj = adjacency(4, &[0, 0, 2, 3], &[1, 2, 3, 1]);
        assert_eq!(depth_first(&adj, &[0]).unwrap(), [0, 1, 2, 3]);
        assert_eq!(depth_first(&adj, &[2]).unwrap(), [2, 3, 1]);
    }

    #[test]
    fn test_cycles_and_duplicate_seeds() {
        // 0 -> 1 -> 2 -> 0, with self loop on 1
        let adj = adjacency(3, &[0, 1, 2, 1], &[1, 2, 0, 1]);
        assert_eq!(breadth_first(&adj, &[0, 0, 2]).unwrap(), [0, 1, 2]);
        assert_eq!(depth_first(&adj, &[1, 1]).unwrap(), [1, 2, 0]);
    }

    #[test]
    fn test_reuse() {
        let adj = adjacency(4, &[0, 1, 2], &[1, 2, 3]);
        let mut walk = Traversal::new(8);
        for _ in 0..3 {
            assert_eq!(walk.breadth_first(&adj, &[0]).unwrap(), [0, 1, 2, 3]);
            assert_eq!(walk.depth_first(&adj, &[1]).unwrap(), [1, 2, 3]);
        }
        let small = adjacency(2, &[1], &[0]);
        assert_eq!(walk.breadth_first(&small, &[1]).unwrap(), [1, 0]);
    }

    #[test]
    fn test_errors() {
        let adj = adjacency(3, &[0], &[1]);
        assert_eq!(
            breadth_first(&adj, &[3]).unwrap_err(),
            GraphError::NodeOutOfRange { node: 3, nodes: 3 }
        );
        assert_eq!(
            Traversal::new(2).depth_first(&adj, &[0]).unwrap_err(),
            GraphError::CapacityExceeded {
                nodes: 3,
                capacity: 2
            }
        );
    }
}
