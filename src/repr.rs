/*!
# Graph Representation

The single canonical representation of an unlabelled undirected graph in this
crate: an adjacency array storing, per node, the ordered list of its
neighbors. This is the form consumed by the spanning tree sampler and
produced when a labelled tree drops its labels (see [`crate::tree`]).
*/

use crate::*;

/// An undirected graph stored as one neighbor list per node.
///
/// Neighbor lists keep insertion order; positional access via
/// [`IndexedAdjacencyList`] makes drawing a uniformly random neighbor O(1).
#[derive(Clone, Default)]
pub struct AdjArray {
    nbs: Vec<Vec<Node>>,
    num_edges: NumEdges,
}

impl GraphNodeOrder for AdjArray {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjArray {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for AdjArray {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl AdjacencyTest for AdjArray {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].contains(&v)
    }
}

impl NeighborsSlice for AdjArray {
    fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        &self.nbs[u as usize]
    }
}

impl GraphNew for AdjArray {
    fn new(n: NumNodes) -> Self {
        assert!(n > 0);
        Self {
            nbs: vec![Vec::new(); n as usize],
            num_edges: 0,
        }
    }
}

impl GraphEdgeEditing for AdjArray {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if self.has_edge(u, v) {
            true
        } else {
            self.nbs[u as usize].push(v);
            if u != v {
                self.nbs[v as usize].push(u);
            }
            self.num_edges += 1;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn graph_new() {
        for n in 1..50 {
            let graph = AdjArray::new(n);

            assert_eq!(graph.number_of_edges(), 0);
            assert_eq!(graph.number_of_nodes(), n);
            assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
            assert!(graph.is_singleton());
        }
    }

    #[test]
    fn add_edges_and_query() {
        let graph = AdjArray::from_edges(6, [(1u32, 2u32), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);

        assert_eq!(graph.number_of_nodes(), 6);
        assert_eq!(graph.number_of_edges(), 6);

        assert_eq!(
            graph.ordered_edges(true).collect_vec(),
            vec![
                Edge(0, 1),
                Edge(0, 5),
                Edge(1, 2),
                Edge(2, 4),
                Edge(3, 4),
                Edge(4, 5)
            ]
        );

        for Edge(u, v) in graph.edges(false) {
            assert!(graph.has_edge(u, v));
            assert!(graph.has_edge(v, u));
        }
        assert!(!graph.has_edge(0, 3));

        assert_eq!(graph.degree_of(4), 3);
        assert_eq!(graph.neighbors_of(1).sorted().collect_vec(), vec![0, 2]);
    }

    #[test]
    fn duplicate_edges_are_ignored() {
        let mut graph = AdjArray::new(3);
        assert!(!graph.try_add_edge(0, 1));
        assert!(graph.try_add_edge(0, 1));
        assert!(graph.try_add_edge(1, 0));
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn indexed_neighbors_match_iteration() {
        let graph = AdjArray::from_edges(5, [(0u32, 1u32), (0, 2), (0, 3), (3, 4)]);

        for u in graph.vertices() {
            let via_index = (0..graph.degree_of(u))
                .map(|i| graph.ith_neighbor(u, i))
                .collect_vec();
            assert_eq!(via_index, graph.neighbors_of(u).collect_vec());
        }
    }
}
