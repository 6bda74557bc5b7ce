/*!
# Conversion Boundary

The only place where the labelled tree form meets the plain unlabelled forms:
dropping labels into an [`AdjArray`] (for sampling or for external layout
tooling) and rebuilding a [`LabeledTree`] from a sampled [`ParentArray`].

The sampler carries no label semantics, so reconstruction requires the caller
to supply a [`LabelPair`] per discovered edge.
*/

use crate::{gens::ParentArray, *};

impl<L> LabeledTree<L> {
    /// Drops all labels and orientation, yielding the undirected
    /// neighbor-list form consumed by the spanning tree sampler and by
    /// external layout tools.
    pub fn to_adjacency(&self) -> AdjArray {
        let mut graph = AdjArray::new(self.number_of_nodes());
        for u in self.vertices() {
            for v in self.children_of(u) {
                graph.add_edge(u, v);
            }
        }
        graph
    }

    /// Rebuilds a labelled tree from the parent pointers of a sampled
    /// spanning tree, rooted at the sampling root.
    ///
    /// `label_for_edge` is called once per tree edge, oriented parent ->
    /// child as `Edge(parent, child)`, and supplies the labels for both
    /// directions: `forward` for parent -> child, `backward` for the
    /// ascent.
    pub fn from_parent_array<F>(parents: &ParentArray, mut label_for_edge: F) -> Self
    where
        F: FnMut(Edge) -> LabelPair<L>,
    {
        let mut tree = Self::new(parents.number_of_nodes());
        for Edge(child, parent) in parents.edges() {
            let pair = label_for_edge(Edge(parent, child));
            tree.add_edge(parent, child, pair.forward, pair.backward);
        }
        tree
    }

    /// Returns, per node, the sorted list of its child node identifiers with
    /// all labels dropped: the shape external tree-rendering components
    /// consume to build a layout.
    pub fn children_lists(&self) -> Vec<Vec<Node>> {
        self.vertices()
            .map(|u| self.children_of(u).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use crate::{algo::Traversal, gens::Ust};

    use super::*;

    fn sample_tree() -> LabeledTree<&'static str> {
        let mut tree = LabeledTree::new(6);
        tree.add_edge(0, 1, "01", "10");
        tree.add_edge(0, 2, "02", "20");
        tree.add_edge(1, 3, "13", "31");
        tree.add_edge(3, 4, "34", "43");
        tree.add_edge(3, 5, "35", "53");
        tree
    }

    #[test]
    fn to_adjacency_drops_labels_and_orientation() {
        let graph = sample_tree().to_adjacency();

        assert_eq!(graph.number_of_nodes(), 6);
        assert_eq!(graph.number_of_edges(), 5);
        assert_eq!(
            graph.ordered_edges(true).collect_vec(),
            vec![Edge(0, 1), Edge(0, 2), Edge(1, 3), Edge(3, 4), Edge(3, 5)]
        );

        // rerooting must not change the undirected form
        let mut rerooted = sample_tree();
        rerooted.reroot(5).unwrap();
        assert_eq!(
            rerooted.to_adjacency().ordered_edges(true).collect_vec(),
            graph.ordered_edges(true).collect_vec()
        );
    }

    #[test]
    fn children_lists_for_layout() {
        let tree = sample_tree();

        assert_eq!(
            tree.children_lists(),
            vec![
                vec![1, 2],
                vec![3],
                vec![],
                vec![4, 5],
                vec![],
                vec![]
            ]
        );
    }

    #[test]
    fn sampled_tree_round_trips_into_labelled_form() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let graph = AdjArray::from_edges(5, (0u32..5).tuple_combinations::<(_, _)>().collect_vec());

        let parents = Ust::new().root(0).sample(&graph, rng).unwrap();
        let tree = LabeledTree::from_parent_array(&parents, |Edge(u, v)| {
            LabelPair::new(format!("{u}->{v}"), format!("{v}->{u}"))
        });

        assert_eq!(tree.root(), Ok(0));
        assert_eq!(tree.number_of_nodes(), 5);
        assert_eq!(tree.number_of_edges(), 4);

        for u in tree.vertices() {
            if let Some((p, label)) = tree.parent_edge_of(u) {
                assert_eq!(parents.parent_of(u), Some(p));
                assert_eq!(*label, format!("{u}->{p}"));
                assert_eq!(tree.path_from_root(u).unwrap().last(), Some(&u));
            }
        }

        // the labelled form converts back to a connected 4-edge graph
        let back = tree.to_adjacency();
        assert_eq!(back.number_of_edges(), 4);
        assert_eq!(back.bfs(0).count(), 5);
    }
}
