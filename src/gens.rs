/*!
# Uniform Spanning Tree Sampling

Draws a spanning tree of a connected undirected graph **uniformly at random**
among all its spanning trees, using Wilson's loop-erased random walk. Naive
approaches (random edge insertion, randomized BFS/DFS) produce spanning trees
with a biased distribution; the loop-erased walk is what makes the output
exactly uniform.

The sampler follows the builder pattern of this crate's generators: configure
a [`Ust`], then call [`Ust::sample`] with the graph and an explicit random
source. Randomness is always injected, never read from global state, so a
seeded generator reproduces the exact same tree.

Termination is probabilistic: on a finite connected graph the walk reaches
the growing tree with probability 1, but there is no deterministic worst-case
bound on the number of steps. This is expected behavior of the algorithm, not
a defect; the connectivity precondition is checked up front precisely so that
the only non-terminating inputs are rejected with an error instead.
*/

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::{algo::Connectivity, *};

/// Parent pointers of a sampled spanning tree, rooted at the sampling root.
///
/// A pure result value: produced fresh by every [`Ust::sample`] call and
/// never mutated afterwards. The root is stored as its own parent
/// internally; accessors expose the link as `Option<Node>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentArray {
    parents: Vec<Node>,
    root: Node,
}

impl GraphNodeOrder for ParentArray {
    fn number_of_nodes(&self) -> NumNodes {
        self.parents.len() as NumNodes
    }
}

impl ParentArray {
    pub(crate) fn new(parents: Vec<Node>, root: Node) -> Self {
        debug_assert_eq!(parents[root as usize], root);
        Self { parents, root }
    }

    /// The node all parent pointers lead to
    pub fn root(&self) -> Node {
        self.root
    }

    /// Returns the parent of `u`, or `None` for the root.
    /// ** Panics if `u >= n` **
    pub fn parent_of(&self, u: Node) -> Option<Node> {
        let p = self.parents[u as usize];
        (p != u).then_some(p)
    }

    /// Returns the `n - 1` tree edges as `Edge(child, parent)`
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices()
            .filter_map(|u| self.parent_of(u).map(|p| Edge(u, p)))
    }
}

/// Configurable generator for a **uniform random spanning tree** (UST).
///
/// By default the sampling root is drawn uniformly from the graph's nodes;
/// fix it with [`Ust::root`]. The choice of root does not affect the
/// distribution over the (undirected) output trees.
#[derive(Debug, Copy, Clone, Default)]
pub struct Ust {
    root: Option<Node>,
}

impl Ust {
    /// Creates a new UST sampler with a randomly drawn root
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the sampling root.
    ///
    /// # Panics
    /// Panics if `root >= n` when used in sampling.
    pub fn set_root(&mut self, root: Node) {
        self.root = Some(root);
    }

    /// Fixes the sampling root.
    ///
    /// # Panics
    /// Panics if `root >= n` when used in sampling.
    pub fn root(mut self, root: Node) -> Self {
        self.set_root(root);
        self
    }

    /// Samples a uniformly random spanning tree of `graph`.
    ///
    /// Checks connectivity first (one traversal) and fails with
    /// [`TreeError::DisconnectedGraph`] on disconnected input, as the walk
    /// would never terminate for unreachable vertices.
    /// ** Panics if the graph has no nodes or a fixed root is `>= n` **
    pub fn sample<G, R>(&self, graph: &G, rng: &mut R) -> Result<ParentArray>
    where
        G: IndexedAdjacencyList,
        R: Rng,
    {
        assert!(!graph.is_empty(), "At least one node is required!");

        if !graph.is_connected() {
            return Err(TreeError::DisconnectedGraph);
        }

        let root = match self.root {
            Some(root) => root,
            None => Uniform::new(0 as Node, graph.number_of_nodes())
                .unwrap()
                .sample(rng),
        };

        let mut parents: Vec<Node> = graph.vertices().collect();
        for Edge(child, parent) in UstStream::new(graph, root, rng) {
            parents[child as usize] = parent;
        }

        Ok(ParentArray::new(parents, root))
    }
}

/// Streaming generator for the edges of a uniform random spanning tree.
///
/// Yields exactly `n - 1` edges as `Edge(child, parent)`, each one attaching
/// a node to the tree grown from `root`, in splice order.
///
/// # Internal Algorithm
///
/// For every node not yet in the tree, a random walk records a provisional
/// successor per visited node, **overwriting it on revisit**; that
/// overwrite is the loop erasure, no extra cycle bookkeeping exists. Once
/// the walk hits the tree, the recorded successor chain is spliced in as
/// parent pointers.
///
/// # Precondition
///
/// The graph must be connected, otherwise iteration does not terminate
/// (and a degree-0 node panics). [`Ust::sample`] verifies this before
/// constructing the stream; use it unless the input is known connected.
pub struct UstStream<'a, G, R>
where
    G: IndexedAdjacencyList,
    R: Rng,
{
    graph: &'a G,
    rng: &'a mut R,
    in_tree: NodeBitSet,
    next_hop: Vec<Node>,
    splice: Node,
    scan: Node,
}

impl<'a, G, R> UstStream<'a, G, R>
where
    G: IndexedAdjacencyList,
    R: Rng,
{
    /// Creates a new [`UstStream`] growing a tree from `root`.
    ///
    /// # Panics
    /// Panics if `root >= n`.
    pub fn new(graph: &'a G, root: Node, rng: &'a mut R) -> Self {
        assert!(root < graph.number_of_nodes());

        Self {
            graph,
            rng,
            in_tree: NodeBitSet::new_with_bits_set(graph.number_of_nodes(), [root]),
            next_hop: vec![INVALID_NODE; graph.len()],
            splice: INVALID_NODE,
            scan: 0,
        }
    }
}

impl<G, R> Iterator for UstStream<'_, G, R>
where
    G: IndexedAdjacencyList,
    R: Rng,
{
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // splice phase: fix parents along the recorded successor chain
            if self.splice != INVALID_NODE {
                let u = self.splice;
                if !self.in_tree.set_bit(u) {
                    self.splice = self.next_hop[u as usize];
                    return Some(Edge(u, self.next_hop[u as usize]));
                }
                self.splice = INVALID_NODE;
            }

            while self.scan < self.graph.number_of_nodes() && self.in_tree.get_bit(self.scan) {
                self.scan += 1;
            }
            if self.scan >= self.graph.number_of_nodes() {
                return None;
            }

            // walk phase: overwriting on revisit erases any loop
            let mut u = self.scan;
            while !self.in_tree.get_bit(u) {
                let i = self.rng.random_range(0..self.graph.degree_of(u));
                let v = self.graph.ith_neighbor(u, i);
                self.next_hop[u as usize] = v;
                u = v;
            }
            self.splice = self.scan;
        }
    }
}
