//! A weighted directed multigraph stored as a flat edge list.
//!
//! The edge list is the whole state: vertices exist only as endpoints of
//! edges, duplicate edges between the same pair are kept independently, and
//! every weight is non-negative. Algorithms live in
//! [`algorithms`](super::algorithms) and [`dot`](super::dot) and work on
//! `&self` snapshots.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_edge` | \(O(1)\) amortized | Appends to the edge list |
//! | `reverse` | \(O(m)\) | In place |
//! | `vertices` / `terminals` | \(O(m)\) | Recomputed on each call |
//! | `edges_from` / `edges_to` | \(O(m)\) | Lazy filtered iterators |

use core::hash::Hash;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::edge::{Edge, Weight};
use crate::error::{Error, Result};

/// A weighted directed multigraph.
///
/// # Examples
/// ```
/// use satchel::WeightedGraph;
///
/// let mut graph = WeightedGraph::new();
/// graph.add_edge("A", "B", 1)?;
/// graph.add_edge("B", "C", 2)?;
/// assert!(graph.add_edge("C", "A", -1).is_err());
///
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.vertex_count(), 3);
/// assert!(graph.terminals().contains(&"C"));
/// # Ok::<(), satchel::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<Edge<V, W>>",
    into = "Vec<Edge<V, W>>",
    bound(
        serialize = "V: Serialize + Clone, W: Serialize + Clone",
        deserialize = "V: Deserialize<'de>, W: Deserialize<'de> + Weight"
    )
)]
pub struct WeightedGraph<V, W = u32> {
    edges: Vec<Edge<V, W>>,
}

impl<V, W> WeightedGraph<V, W> {
    /// Creates a graph with no edges.
    pub const fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Creates an empty graph with room for `capacity` edges.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
        }
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Edge<V, W>] {
        &self.edges
    }

    /// Number of edges, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Reverses the direction of every edge in place.
    pub fn reverse(&mut self) {
        for edge in &mut self.edges {
            edge.reverse();
        }
    }

    /// Keeps only the edges matching `keep`, preserving order.
    pub(crate) fn retain_edges(&mut self, keep: impl FnMut(&Edge<V, W>) -> bool) {
        self.edges.retain(keep);
    }

    /// A graph over references to this graph's vertices, with the same edges.
    pub(crate) fn borrowed(&self) -> WeightedGraph<&V, W>
    where
        W: Copy,
    {
        WeightedGraph {
            edges: self
                .edges
                .iter()
                .map(|edge| Edge::new(&edge.from, &edge.to, edge.weight))
                .collect(),
        }
    }
}

impl<V, W: Weight> WeightedGraph<V, W> {
    /// Appends the edge `from -> to`.
    ///
    /// # Errors
    /// Returns [`Error::NegativeWeight`] if `weight` is below zero or NaN;
    /// the graph is left unchanged.
    pub fn add_edge(&mut self, from: V, to: V, weight: W) -> Result<()> {
        if !weight.is_valid_weight() {
            #[cfg(feature = "tracing")]
            tracing::debug!(edge = self.edges.len(), "rejecting edge with negative weight");
            return Err(Error::NegativeWeight);
        }
        self.edges.push(Edge::new(from, to, weight));
        Ok(())
    }

    /// Appends the edge `from -> to` with weight one.
    pub fn add_unit_edge(&mut self, from: V, to: V)
    where
        W: num_traits::One,
    {
        self.edges.push(Edge::new(from, to, W::one()));
    }
}

impl<V: Eq + Hash, W> WeightedGraph<V, W> {
    /// Every vertex that appears as a source or destination.
    pub fn vertices(&self) -> HashSet<&V> {
        self.edges
            .iter()
            .flat_map(|edge| [&edge.from, &edge.to])
            .collect()
    }

    /// Number of distinct vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Returns `true` if `vertex` is an endpoint of at least one edge.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.edges
            .iter()
            .any(|edge| edge.from == *vertex || edge.to == *vertex)
    }

    /// Edges leaving `vertex`, in insertion order.
    pub fn edges_from<'a>(&'a self, vertex: &'a V) -> impl Iterator<Item = &'a Edge<V, W>> + 'a {
        self.edges.iter().filter(move |edge| edge.from == *vertex)
    }

    /// Edges entering `vertex`, in insertion order.
    pub fn edges_to<'a>(&'a self, vertex: &'a V) -> impl Iterator<Item = &'a Edge<V, W>> + 'a {
        self.edges.iter().filter(move |edge| edge.to == *vertex)
    }

    /// Destinations that never appear as a source (sinks).
    pub fn terminals(&self) -> HashSet<&V> {
        let sources: HashSet<&V> = self.edges.iter().map(|edge| &edge.from).collect();
        self.edges
            .iter()
            .map(|edge| &edge.to)
            .filter(|to| !sources.contains(to))
            .collect()
    }
}

impl<V, W> Default for WeightedGraph<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a graph from an edge list, validating every weight.
impl<V, W: Weight> TryFrom<Vec<Edge<V, W>>> for WeightedGraph<V, W> {
    type Error = Error;

    fn try_from(edges: Vec<Edge<V, W>>) -> Result<Self> {
        if edges.iter().all(|edge| edge.weight.is_valid_weight()) {
            Ok(Self { edges })
        } else {
            Err(Error::NegativeWeight)
        }
    }
}

impl<V, W> From<WeightedGraph<V, W>> for Vec<Edge<V, W>> {
    fn from(graph: WeightedGraph<V, W>) -> Self {
        graph.edges
    }
}

impl<'a, V, W> IntoIterator for &'a WeightedGraph<V, W> {
    type Item = &'a Edge<V, W>;
    type IntoIter = core::slice::Iter<'a, Edge<V, W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
