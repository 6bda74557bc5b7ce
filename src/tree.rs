/*!
# Edge-Labelled Rooted Trees

A rooted tree over nodes `0..n` where every edge carries two independent
directional labels (see [`LabelPair`]). Each node stores its parent link
(with the child->parent label) and a map of its children (with the
parent->child labels); both sides of an edge are kept in sync by every
mutating operation.

The root is not stored; it is the unique node without a parent link and is
recomputed on demand by [`LabeledTree::root`]. This makes construction
order-free: edges may be added in any order and validity is checked lazily.

Re-rooting reverses the direction of every edge on the path between the old
and the new root while swapping the roles of the two labels per reversed
edge; connectivity is untouched. All path work is done with explicit stacks
and parent walks, never recursion.
*/

use std::fmt::{Debug, Display};

use fxhash::FxHashMap;
use itertools::Itertools;

use crate::*;

/// A rooted tree with a [`LabelPair`] of opaque directional labels per edge.
///
/// Nodes are `0..n` with `n` fixed at construction. The tree invariants
/// (exactly one parentless node, `n - 1` edges, connected, acyclic) are the
/// caller's responsibility during construction and are checked lazily by
/// [`LabeledTree::root`]; every mutating operation of this type preserves
/// them once they hold.
#[derive(Clone, PartialEq)]
pub struct LabeledTree<L> {
    /// Per node: the parent and the label observed traversing child -> parent
    parents: Vec<Option<(Node, L)>>,
    /// Per node: the children, each with the label observed parent -> child
    children: Vec<FxHashMap<Node, L>>,
}

impl<L> GraphNodeOrder for LabeledTree<L> {
    fn number_of_nodes(&self) -> NumNodes {
        self.parents.len() as NumNodes
    }
}

impl<L> GraphEdgeOrder for LabeledTree<L> {
    fn number_of_edges(&self) -> NumEdges {
        self.parents.iter().flatten().count() as NumEdges
    }
}

impl<L> GraphNew for LabeledTree<L> {
    fn new(n: NumNodes) -> Self {
        assert!(n > 0);
        Self {
            parents: (0..n).map(|_| None).collect(),
            children: vec![FxHashMap::default(); n as usize],
        }
    }
}

impl<L> LabeledTree<L> {
    /// Registers the edge `{u, v}` with `u` as parent of `v`: `forward` is
    /// observed traversing `u -> v`, `backward` traversing `v -> u`.
    ///
    /// Any prior edge between the same pair (in either orientation) is
    /// overwritten, as is any prior parent link of `v`. No cycle or
    /// connectivity validation happens here; [`LabeledTree::root`] performs
    /// it lazily.
    /// ** Panics if `u >= n || v >= n || u == v` **
    pub fn add_edge(&mut self, u: Node, v: Node, forward: L, backward: L) {
        assert!(u < self.number_of_nodes() && v < self.number_of_nodes());
        assert!(u != v);

        // drop a prior reverse orientation of the same pair
        if self.children[v as usize].remove(&u).is_some() {
            self.parents[u as usize] = None;
        }
        // unhook v from its current parent so both sides stay in sync
        if let Some((w, _)) = self.parents[v as usize].take() {
            self.children[w as usize].remove(&v);
        }

        self.children[u as usize].insert(v, forward);
        self.parents[v as usize] = Some((u, backward));
    }

    /// Returns the unique node without a parent link.
    ///
    /// Fails with [`TreeError::InvalidTree`] carrying the actual count if
    /// zero (a cycle is present) or more than one (a disconnected forest)
    /// such node exists.
    pub fn root(&self) -> Result<Node> {
        let mut root = None;
        let mut parentless: NumNodes = 0;

        for u in self.vertices() {
            if self.parents[u as usize].is_none() {
                root = Some(u);
                parentless += 1;
            }
        }

        match (root, parentless) {
            (Some(r), 1) => Ok(r),
            (_, k) => Err(TreeError::InvalidTree(k)),
        }
    }

    /// Returns all nodes without children in ascending order. O(n).
    pub fn leaves(&self) -> Vec<Node> {
        self.vertices()
            .filter(|&u| self.children[u as usize].is_empty())
            .collect_vec()
    }

    /// Returns the children of `u` in ascending order.
    /// ** Panics if `u >= n` **
    pub fn children_of(&self, u: Node) -> impl Iterator<Item = Node> {
        self.children[u as usize].keys().copied().sorted()
    }

    /// Returns the children of `u` with their parent->child labels,
    /// in ascending node order.
    /// ** Panics if `u >= n` **
    pub fn children_with_labels_of(&self, u: Node) -> impl Iterator<Item = (Node, &L)> {
        self.children[u as usize]
            .iter()
            .map(|(&v, l)| (v, l))
            .sorted_by_key(|&(v, _)| v)
    }

    /// Returns the parent of `u`, or `None` if `u` has no parent link.
    /// ** Panics if `u >= n` **
    pub fn parent_of(&self, u: Node) -> Option<Node> {
        self.parents[u as usize].as_ref().map(|&(p, _)| p)
    }

    /// Returns the parent of `u` together with the child->parent label.
    /// ** Panics if `u >= n` **
    pub fn parent_edge_of(&self, u: Node) -> Option<(Node, &L)> {
        self.parents[u as usize].as_ref().map(|(p, l)| (*p, l))
    }

    /// Returns the ordered node sequence `[from, .., to]` following only
    /// parent->child links, or an empty sequence if `to` is not a descendant
    /// of `from`.
    ///
    /// The search is an explicit stack-based descent; since the structure is
    /// a tree, at most one such path exists. Callers that must distinguish
    /// "not found" use [`LabeledTree::find_path_strict`].
    /// ** Panics if `from >= n || to >= n` **
    pub fn find_path(&self, from: Node, to: Node) -> Vec<Node> {
        assert!(from < self.number_of_nodes() && to < self.number_of_nodes());

        let mut visited = self.vertex_bitset_unset();
        let mut stack = vec![(from, 0usize)];
        let mut path: Vec<Node> = Vec::new();

        while let Some((u, depth)) = stack.pop() {
            if visited.set_bit(u) {
                continue;
            }

            // entries below `depth` are exactly the ancestors of `u`
            path.truncate(depth);
            path.push(u);

            if u == to {
                return path;
            }

            for v in self.children_of(u) {
                if !visited.get_bit(v) {
                    stack.push((v, depth + 1));
                }
            }
        }

        Vec::new()
    }

    /// As [`LabeledTree::find_path`], but fails with
    /// [`TreeError::PathNotFound`] instead of returning an empty sequence.
    /// ** Panics if `from >= n || to >= n` **
    pub fn find_path_strict(&self, from: Node, to: Node) -> Result<Vec<Node>> {
        let path = self.find_path(from, to);
        if path.is_empty() {
            Err(TreeError::PathNotFound { from, to })
        } else {
            Ok(path)
        }
    }

    /// Returns the path from the root down to `to` by walking parent links
    /// upwards from `to` and reversing the collected sequence.
    ///
    /// Equivalent to `find_path(root, to)` on a valid tree, but O(depth)
    /// instead of O(n). The walk is bounded by `n` steps, so a parent cycle
    /// surfaces as [`TreeError::PathNotFound`] rather than a hang.
    /// ** Panics if `to >= n` **
    pub fn path_from_root(&self, to: Node) -> Result<Vec<Node>> {
        assert!(to < self.number_of_nodes());

        let root = self.root()?;

        let mut path = vec![to];
        let mut u = to;
        while let Some(p) = self.parent_of(u) {
            if path.len() >= self.len() {
                return Err(TreeError::PathNotFound { from: root, to });
            }
            path.push(p);
            u = p;
        }
        debug_assert_eq!(u, root);

        path.reverse();
        Ok(path)
    }

    /// Returns the label pairs along the root -> `to` path, one per edge in
    /// path order, oriented with the current root: `forward` descends,
    /// `backward` ascends.
    /// ** Panics if `to >= n` **
    pub fn path_labels(&self, to: Node) -> Result<Vec<LabelPair<&L>>> {
        let path = self.path_from_root(to)?;
        Ok(path
            .iter()
            .tuple_windows()
            .map(|(&a, &b)| self.edge_labels(a, b))
            .collect_vec())
    }

    /// Replaces the label pairs along the root -> `to` path.
    ///
    /// `labels` must contain exactly one pair per edge of that path;
    /// otherwise fails with [`TreeError::EdgeCountMismatch`] before touching
    /// any label.
    /// ** Panics if `to >= n` **
    pub fn replace_path_labels(&mut self, to: Node, labels: Vec<LabelPair<L>>) -> Result<()> {
        let path = self.path_from_root(to)?;

        let expected = path.len() - 1;
        if labels.len() != expected {
            return Err(TreeError::EdgeCountMismatch {
                expected,
                found: labels.len(),
            });
        }

        for ((a, b), pair) in path.iter().copied().tuple_windows().zip(labels) {
            self.children[a as usize].insert(b, pair.forward);
            let (_, backward) = self.parents[b as usize].as_mut().unwrap();
            *backward = pair.backward;
        }

        Ok(())
    }

    /// Makes `new_root` the root by reversing the direction of every edge on
    /// the path from the current root to `new_root`.
    ///
    /// Per reversed edge the two labels swap roles: the value that labelled
    /// the descent now labels the ascent and vice versa. Edges off the path
    /// are untouched and connectivity is preserved. The path is computed
    /// once, before any mutation, and each reversal step is infallible, so
    /// the tree is never observed half-reversed: on any error it is
    /// unchanged.
    ///
    /// Rerooting to the current root is a no-op.
    /// ** Panics if `new_root >= n` **
    pub fn reroot(&mut self, new_root: Node) -> Result<()> {
        assert!(new_root < self.number_of_nodes());

        let old_root = self.root()?;
        let path = self.find_path_strict(old_root, new_root)?;

        for (a, b) in path.into_iter().tuple_windows() {
            let forward = self.children[a as usize].remove(&b).unwrap();
            let (_, backward) = self.parents[b as usize].take().unwrap();

            self.children[b as usize].insert(a, backward);
            self.parents[a as usize] = Some((b, forward));
        }

        Ok(())
    }

    /// Both labels of the tree edge `a -> b` (`a` parent of `b`)
    fn edge_labels(&self, a: Node, b: Node) -> LabelPair<&L> {
        let (_, backward) = self.parents[b as usize].as_ref().unwrap();
        LabelPair {
            forward: &self.children[a as usize][&b],
            backward,
        }
    }
}

impl<L> Display for LabeledTree<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for u in self.vertices() {
            if !self.children[u as usize].is_empty() {
                writeln!(
                    f,
                    "Node {} has children {}.",
                    u,
                    self.children_of(u).join(", ")
                )?;
            }
        }
        Ok(())
    }
}

impl<L: Debug> Debug for LabeledTree<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for u in self.vertices() {
            map.entry(
                &u,
                &(
                    self.parent_edge_of(u),
                    self.children_with_labels_of(u).collect_vec(),
                ),
            );
        }
        map.finish()
    }
}
