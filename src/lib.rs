/*!
`ltrees` provides two related algorithms over small in-memory tree structures:

- **Re-rooting of edge-labelled rooted trees**: a [`tree::LabeledTree`] keeps
  two independent directional labels per edge and can change its root in
  place, reversing the edges along the path between the old and the new root
  while the labels swap their directional roles.
- **Uniform random spanning tree sampling**: [`gens::Ust`] draws a spanning
  tree of an arbitrary connected undirected graph uniformly at random among
  all its spanning trees, via Wilson's loop-erased random walk.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of
nodes in the structure. For **edges**, we use a simple tuple-struct
`Edge(Node, Node)`; tree edges additionally carry a generic
[`edge::LabelPair`] whose content no algorithm ever inspects.

Unlabelled undirected graphs (the sampler's input) live in a single canonical
adjacency-array representation, [`repr::AdjArray`]; conversions between the
labelled and the unlabelled world go through the dedicated boundary in
[`tree::LabeledTree::to_adjacency`] / [`tree::LabeledTree::from_parent_array`].

# Design

Algorithms are generic over the graph-operation traits in [`ops`] rather than
concrete types. Random sampling is configured via builder structs and always
consumes an explicitly passed-in `rand::Rng`, so seeded generators make every
sample reproducible. All traversals are explicitly iterative (stacks/queues,
parent walks); input depth is caller-controlled, so nothing here recurses.

Recoverable failures (invalid tree shape, missing path, label arity mismatch,
disconnected sampler input) are reported via [`error::TreeError`];
out-of-contract node indices panic.

# Usage

```
use ltrees::prelude::*;

let mut tree = LabeledTree::new(3);
tree.add_edge(0, 1, "down", "up");
tree.add_edge(1, 2, "down", "up");

assert_eq!(tree.root(), Ok(0));
tree.reroot(2).unwrap();
assert_eq!(tree.root(), Ok(2));
assert_eq!(tree.find_path(2, 0), vec![2, 1, 0]);
```

Sampling a uniformly random spanning tree:

```
use ltrees::{gens::Ust, prelude::*};
use rand::SeedableRng;

let graph = AdjArray::from_edges(4, [(0u32, 1u32), (1, 2), (2, 3), (3, 0)]);

let mut rng = rand_pcg::Pcg64Mcg::seed_from_u64(42);
let parents = Ust::new().sample(&graph, &mut rng).unwrap();
assert_eq!(parents.edges().count(), 3);
```
*/

pub mod algo;
mod convert;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
pub mod tree;

/// `ltrees::prelude` includes definitions for nodes, edges and errors, all
/// basic graph operation traits as well as both core data structures.
pub mod prelude {
    pub use super::{
        edge::*,
        error::TreeError,
        node::*,
        ops::*,
        repr::*,
        tree::*,
    };
}

pub(crate) use prelude::*;
pub(crate) use error::Result;
