//! Dense adjacency list for shortest-path search.
//!
//! Nodes are addressed by a zero-based index assigned in input order.
//! Each undirected edge is stored in both endpoint lists.

/// One outgoing half-edge: (neighbor index, weight).
pub type HalfEdge = (usize, u32);

/// Adjacency list indexed by dense node index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    lists: Vec<Vec<HalfEdge>>,
    edges: usize,
}

impl AdjacencyList {
    /// Create an adjacency list for `nodes` isolated nodes.
    pub fn with_nodes(nodes: usize) -> Self {
        Self {
            lists: vec![Vec::new(); nodes],
            edges: 0,
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.lists.len()
    }

    /// Number of undirected edges added.
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Add an undirected edge. Both indices must be in range.
    ///
    /// A self-loop is stored once.
    pub fn add_undirected(&mut self, u: usize, v: usize, weight: u32) {
        self.lists[u].push((v, weight));
        if u != v {
            self.lists[v].push((u, weight));
        }
        self.edges += 1;
    }

    /// Half-edges leaving `u`, in insertion order.
    pub fn neighbors(&self, u: usize) -> &[HalfEdge] {
        self.lists.get(u).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Weight of the cheapest edge between `u` and `v`, if they are adjacent.
    pub fn cheapest_between(&self, u: usize, v: usize) -> Option<u32> {
        self.neighbors(u)
            .iter()
            .filter(|(n, _)| *n == v)
            .map(|(_, w)| *w)
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_adjacency_list() {
        let adj = AdjacencyList::with_nodes(3);
        assert_eq!(adj.node_count(), 3);
        assert_eq!(adj.edge_count(), 0);
        assert!(adj.neighbors(0).is_empty());
    }

    #[test]
    fn undirected_edge_is_stored_both_ways() {
        let mut adj = AdjacencyList::with_nodes(2);
        adj.add_undirected(0, 1, 5);
        assert_eq!(adj.neighbors(0), &[(1, 5)]);
        assert_eq!(adj.neighbors(1), &[(0, 5)]);
        assert_eq!(adj.edge_count(), 1);
    }

    #[test]
    fn self_loop_stored_once() {
        let mut adj = AdjacencyList::with_nodes(1);
        adj.add_undirected(0, 0, 2);
        assert_eq!(adj.neighbors(0).len(), 1);
    }

    #[test]
    fn cheapest_parallel_edge() {
        let mut adj = AdjacencyList::with_nodes(2);
        adj.add_undirected(0, 1, 9);
        adj.add_undirected(1, 0, 4);
        assert_eq!(adj.cheapest_between(0, 1), Some(4));
        assert_eq!(adj.cheapest_between(1, 0), Some(4));
    }

    #[test]
    fn out_of_range_has_no_neighbors() {
        let adj = AdjacencyList::with_nodes(1);
        assert!(adj.neighbors(5).is_empty());
        assert_eq!(adj.cheapest_between(0, 5), None);
    }
}
