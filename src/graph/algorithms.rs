//! Cycle detection and shortest paths for [`WeightedGraph`].
//!
//! These are the simple textbook variants: terminal stripping for cycle
//! detection, Dijkstra with a linear-scan minimum (no priority queue), and
//! Floyd-Warshall relaxing only pairs that already have a known path.
//!
//! Path lengths are summed with [`Weight::checked_path_add`]: a path whose
//! length overflows the weight type, or is infinite, is treated as no path.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `is_acyclic` | \(O(m \cdot d)\) | `d` = number of stripping rounds |
//! | `shortest_path` | \(O(n^2 + n m)\) | Dense minimum extraction |
//! | `all_path_lengths` | \(O(n^3)\) | Sparse distance map |

use core::cmp::Ordering;
use core::hash::Hash;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use super::edge::Weight;
use super::weighted::WeightedGraph;
use crate::error::{Error, Result};

/// One shortest path between two vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<V, W> {
    /// Vertices along the path, starting at the source and ending at the target.
    pub vertices: Vec<V>,
    /// Sum of the edge weights along the path.
    pub length: W,
}

/// Distances and predecessors settled by a Dijkstra run.
struct Settled<'g, V, W> {
    dist: HashMap<&'g V, W>,
    previous: HashMap<&'g V, &'g V>,
}

/// The pending vertex with the smallest known distance. Vertices without a
/// distance are still at infinity and never selected.
fn closest<'g, V: Eq + Hash, W: Weight>(
    pending: &HashSet<&'g V>,
    dist: &HashMap<&'g V, W>,
) -> Option<(&'g V, W)> {
    pending
        .iter()
        .filter_map(|&v| dist.get(v).map(|&d| (v, d)))
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
}

impl<V: Eq + Hash, W: Weight> WeightedGraph<V, W> {
    /// Returns `true` if the graph has no directed cycle.
    ///
    /// Equivalent to [`is_acyclic_above`](Self::is_acyclic_above) with a
    /// threshold of zero, i.e. every edge is considered.
    pub fn is_acyclic(&self) -> bool {
        self.is_acyclic_above(W::zero())
    }

    /// Returns `true` if the edges weighing at least `min_edge_weight` form
    /// no directed cycle.
    ///
    /// Works on a filtered copy: each round removes every edge that points at
    /// a terminal (a vertex with no outgoing edge). An empty copy means the
    /// graph is acyclic; a non-empty copy without terminals holds a cycle.
    pub fn is_acyclic_above(&self, min_edge_weight: W) -> bool {
        let mut working = self.borrowed();
        working.retain_edges(|edge| edge.weight >= min_edge_weight);

        loop {
            if working.is_empty() {
                return true;
            }
            let terminals: HashSet<&V> = working.terminals().into_iter().copied().collect();
            #[cfg(feature = "tracing")]
            tracing::trace!(
                edges = working.edge_count(),
                terminals = terminals.len(),
                "stripping terminals"
            );
            if terminals.is_empty() {
                return false;
            }
            working.retain_edges(|edge| !terminals.contains(edge.to));
        }
    }

    fn dijkstra<'g>(&'g self, source: &V) -> Result<Settled<'g, V, W>> {
        let mut pending = self.vertices();
        let source = *pending.get(source).ok_or(Error::UnknownVertex)?;

        let mut dist = HashMap::from([(source, W::zero())]);
        let mut previous = HashMap::new();

        while let Some((u, u_dist)) = closest(&pending, &dist) {
            pending.remove(u);
            for edge in self.edges_from(u) {
                let Some(alt) = u_dist.checked_path_add(edge.weight) else {
                    continue;
                };
                let improves = dist.get(&edge.to).map_or(true, |&known| alt < known);
                if improves {
                    dist.insert(&edge.to, alt);
                    previous.insert(&edge.to, u);
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            reached = dist.len(),
            unreached = pending.len(),
            "dijkstra settled"
        );
        Ok(Settled { dist, previous })
    }

    /// Length of the shortest path from `source` to every reachable vertex.
    ///
    /// The source itself is included with distance zero; vertices that
    /// cannot be reached are left out, as are vertices whose only paths
    /// are infinite or overflow `W`.
    ///
    /// # Errors
    /// Returns [`Error::UnknownVertex`] if `source` is not an endpoint of
    /// any edge.
    ///
    /// # Examples
    /// ```
    /// use satchel::WeightedGraph;
    ///
    /// let mut graph = WeightedGraph::new();
    /// graph.add_edge('A', 'B', 1)?;
    /// graph.add_edge('B', 'C', 2)?;
    /// graph.add_edge('A', 'C', 5)?;
    ///
    /// let dist = graph.shortest_path(&'A')?;
    /// assert_eq!(dist[&'C'], 3);
    /// # Ok::<(), satchel::Error>(())
    /// ```
    pub fn shortest_path(&self, source: &V) -> Result<HashMap<V, W>>
    where
        V: Clone,
    {
        let settled = self.dijkstra(source)?;
        Ok(settled
            .dist
            .into_iter()
            .map(|(vertex, d)| (vertex.clone(), d))
            .collect())
    }

    /// One shortest path from `source` to `target`, or `None` if `target`
    /// cannot be reached.
    ///
    /// # Errors
    /// Returns [`Error::UnknownVertex`] if `source` is not a vertex.
    pub fn shortest_route(&self, source: &V, target: &V) -> Result<Option<Route<V, W>>>
    where
        V: Clone,
    {
        let settled = self.dijkstra(source)?;
        let Some((&end, &length)) = settled.dist.get_key_value(target) else {
            return Ok(None);
        };

        let mut vertices = vec![end.clone()];
        let mut current = end;
        while let Some(&prev) = settled.previous.get(current) {
            vertices.push(prev.clone());
            current = prev;
        }
        vertices.reverse();
        Ok(Some(Route { vertices, length }))
    }

    /// Every vertex reachable from `source`, including `source` itself.
    ///
    /// # Errors
    /// Returns [`Error::UnknownVertex`] if `source` is not a vertex.
    pub fn reachable_from(&self, source: &V) -> Result<HashSet<V>>
    where
        V: Clone,
    {
        let settled = self.dijkstra(source)?;
        Ok(settled.dist.into_keys().cloned().collect())
    }

    /// Shortest path length between every ordered pair of distinct vertices
    /// connected by a path.
    ///
    /// Pairs without a path are absent from the map and self pairs are
    /// never included. Parallel edges count with their smallest weight.
    /// Infinite edges and path sums that overflow `W` do not count as paths.
    ///
    /// # Examples
    /// ```
    /// use satchel::WeightedGraph;
    ///
    /// let mut graph = WeightedGraph::new();
    /// graph.add_edge('A', 'B', 1)?;
    /// graph.add_edge('B', 'C', 2)?;
    /// graph.add_edge('A', 'C', 5)?;
    ///
    /// let all = graph.all_path_lengths();
    /// assert_eq!(all[&('A', 'C')], 3);
    /// assert!(!all.contains_key(&('C', 'A')));
    /// # Ok::<(), satchel::Error>(())
    /// ```
    pub fn all_path_lengths(&self) -> HashMap<(V, V), W>
    where
        V: Clone,
    {
        let mut dist: HashMap<(&V, &V), W> = HashMap::new();
        for edge in self
            .edges()
            .iter()
            .filter(|edge| !edge.is_loop() && edge.weight.is_finite_weight())
        {
            match dist.entry((&edge.from, &edge.to)) {
                Entry::Occupied(mut known) => {
                    if edge.weight < *known.get() {
                        known.insert(edge.weight);
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(edge.weight);
                }
            }
        }

        let vertices: Vec<&V> = self.vertices().into_iter().collect();
        for &k in &vertices {
            for &i in &vertices {
                if i == k {
                    continue;
                }
                // i cannot reach k, nothing to relax through it
                let Some(&d_ik) = dist.get(&(i, k)) else {
                    continue;
                };
                for &j in &vertices {
                    if j == i || j == k {
                        continue;
                    }
                    let Some(&d_kj) = dist.get(&(k, j)) else {
                        continue;
                    };
                    let Some(through) = d_ik.checked_path_add(d_kj) else {
                        continue;
                    };
                    match dist.entry((i, j)) {
                        Entry::Occupied(mut known) => {
                            if through < *known.get() {
                                known.insert(through);
                            }
                        }
                        Entry::Vacant(slot) => {
                            slot.insert(through);
                        }
                    }
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            vertices = vertices.len(),
            pairs = dist.len(),
            "all path lengths computed"
        );
        dist.into_iter()
            .map(|((from, to), d)| ((from.clone(), to.clone()), d))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(edges: &[(char, char, u32)]) -> WeightedGraph<char> {
        let mut g = WeightedGraph::new();
        for &(from, to, weight) in edges {
            g.add_edge(from, to, weight).unwrap();
        }
        g
    }

    fn triangle() -> WeightedGraph<char> {
        graph(&[('A', 'B', 1), ('B', 'C', 2), ('A', 'C', 5)])
    }

    #[test]
    fn empty_graph_is_acyclic() {
        assert!(WeightedGraph::<char>::new().is_acyclic());
    }

    #[test]
    fn dag_is_acyclic() {
        assert!(triangle().is_acyclic());
        let diamond = graph(&[('a', 'b', 1), ('a', 'c', 1), ('b', 'd', 1), ('c', 'd', 1)]);
        assert!(diamond.is_acyclic());
    }

    #[test]
    fn directed_cycle_is_detected() {
        let cycle = graph(&[('A', 'B', 1), ('B', 'C', 1), ('C', 'A', 1)]);
        assert!(!cycle.is_acyclic());
    }

    #[test]
    fn cycle_hanging_off_a_dag_is_detected() {
        let g = graph(&[('s', 'a', 1), ('a', 'b', 1), ('b', 'a', 1), ('b', 't', 1)]);
        assert!(!g.is_acyclic());
    }

    #[test]
    fn self_loop_is_a_cycle() {
        assert!(!graph(&[('a', 'a', 1)]).is_acyclic());
    }

    #[test]
    fn light_edges_can_be_ignored() {
        let g = graph(&[('A', 'B', 3), ('B', 'C', 3), ('C', 'A', 0)]);
        assert!(!g.is_acyclic());
        assert!(g.is_acyclic_above(1));
        // the original graph is untouched
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn dijkstra_prefers_cheaper_detour() {
        let dist = triangle().shortest_path(&'A').unwrap();
        assert_eq!(dist, HashMap::from([('A', 0), ('B', 1), ('C', 3)]));
    }

    #[test]
    fn dijkstra_omits_unreachable_vertices() {
        let dist = triangle().shortest_path(&'C').unwrap();
        assert_eq!(dist, HashMap::from([('C', 0)]));

        let dist = triangle().shortest_path(&'B').unwrap();
        assert_eq!(dist, HashMap::from([('B', 0), ('C', 2)]));
    }

    #[test]
    fn dijkstra_rejects_unknown_source() {
        assert_eq!(triangle().shortest_path(&'Z'), Err(Error::UnknownVertex));
        assert_eq!(triangle().reachable_from(&'Z'), Err(Error::UnknownVertex));
    }

    #[test]
    fn dijkstra_with_float_weights() {
        let mut g: WeightedGraph<&str, f64> = WeightedGraph::new();
        g.add_edge("x", "y", 0.5).unwrap();
        g.add_edge("y", "z", 0.25).unwrap();
        g.add_edge("x", "z", 1.0).unwrap();
        let dist = g.shortest_path(&"x").unwrap();
        assert!((dist[&"z"] - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn overflowing_paths_are_not_relaxed() {
        let mut g: WeightedGraph<u8> = WeightedGraph::new();
        g.add_edge(0, 1, u32::MAX).unwrap();
        g.add_edge(1, 2, 1).unwrap();

        let dist = g.shortest_path(&0).unwrap();
        assert_eq!(dist, HashMap::from([(0, 0), (1, u32::MAX)]));
        assert_eq!(g.shortest_route(&0, &2).unwrap(), None);

        let all = g.all_path_lengths();
        assert_eq!(all, HashMap::from([((0, 1), u32::MAX), ((1, 2), 1)]));
    }

    #[test]
    fn overflow_falls_back_to_a_longer_fitting_path() {
        let mut g: WeightedGraph<char, u8> = WeightedGraph::new();
        g.add_edge('a', 'b', 200).unwrap();
        g.add_edge('b', 'c', 100).unwrap();
        g.add_edge('a', 'x', 1).unwrap();
        g.add_edge('x', 'b', 250).unwrap();
        g.add_edge('x', 'c', 254).unwrap();

        let dist = g.shortest_path(&'a').unwrap();
        assert_eq!(dist[&'c'], 255);
        assert_eq!(g.all_path_lengths()[&('a', 'c')], 255);
    }

    #[test]
    fn infinite_edges_do_not_reach() {
        let mut g: WeightedGraph<char, f64> = WeightedGraph::new();
        g.add_edge('a', 'b', f64::INFINITY).unwrap();
        g.add_edge('b', 'c', 1.0).unwrap();

        assert_eq!(g.shortest_path(&'a').unwrap(), HashMap::from([('a', 0.0)]));
        assert_eq!(g.reachable_from(&'a').unwrap(), HashSet::from(['a']));
        assert_eq!(g.shortest_route(&'a', &'b').unwrap(), None);
        assert_eq!(g.all_path_lengths(), HashMap::from([(('b', 'c'), 1.0)]));
    }

    #[test]
    fn reachable_from_includes_source() {
        let g = graph(&[('a', 'b', 1), ('b', 'c', 1), ('x', 'y', 1)]);
        assert_eq!(g.reachable_from(&'a').unwrap(), HashSet::from(['a', 'b', 'c']));
    }

    #[test]
    fn route_follows_predecessors() {
        let g = triangle();
        let route = g.shortest_route(&'A', &'C').unwrap().unwrap();
        assert_eq!(route.vertices, vec!['A', 'B', 'C']);
        assert_eq!(route.length, 3);

        assert_eq!(g.shortest_route(&'C', &'A').unwrap(), None);
        let trivial = g.shortest_route(&'B', &'B').unwrap().unwrap();
        assert_eq!(trivial.vertices, vec!['B']);
        assert_eq!(trivial.length, 0);
    }

    #[test]
    fn all_pairs_on_triangle() {
        let all = triangle().all_path_lengths();
        assert_eq!(
            all,
            HashMap::from([(('A', 'B'), 1), (('A', 'C'), 3), (('B', 'C'), 2)])
        );
    }

    #[test]
    fn all_pairs_skips_self_pairs_even_on_cycles() {
        let g = graph(&[('a', 'b', 1), ('b', 'a', 2), ('a', 'a', 7)]);
        let all = g.all_path_lengths();
        assert_eq!(all, HashMap::from([(('a', 'b'), 1), (('b', 'a'), 2)]));
    }

    #[test]
    fn all_pairs_uses_cheapest_parallel_edge() {
        let g = graph(&[('a', 'b', 4), ('a', 'b', 1), ('b', 'c', 0)]);
        let all = g.all_path_lengths();
        assert_eq!(all[&('a', 'b')], 1);
        assert_eq!(all[&('a', 'c')], 1);
        assert_eq!(all[&('b', 'c')], 0);
    }

    #[test]
    fn all_pairs_matches_dijkstra_on_a_chain() {
        let g = graph(&[('a', 'b', 2), ('b', 'c', 3), ('c', 'd', 4), ('a', 'd', 20)]);
        let all = g.all_path_lengths();
        for source in ['a', 'b', 'c', 'd'] {
            for (target, d) in g.shortest_path(&source).unwrap() {
                if target != source {
                    assert_eq!(all[&(source, target)], d);
                }
            }
        }
        assert_eq!(all.len(), 6);
    }
}
