//! Graphviz-style text rendering.
//!
//! Output grammar: `digraph{E1;E2;...}` where each edge is `SRC->DST`,
//! followed by `[style=dotted]` for weight zero or `[weight=N]` for weights
//! above one. Unit edges carry no annotation.

use core::fmt::Display;

use num_traits::{One, ToPrimitive};

use super::edge::{Edge, Weight};
use super::weighted::WeightedGraph;

/// Annotation for an edge of the given weight, if any.
fn annotation<W>(weight: W) -> Option<String>
where
    W: Weight + One + ToPrimitive + Display,
{
    if weight.is_zero() {
        Some("[style=dotted]".to_owned())
    } else if weight > W::one() {
        // integral weights, as graphviz expects
        let n = weight
            .to_i64()
            .map_or_else(|| weight.to_string(), |n| n.to_string());
        Some(format!("[weight={n}]"))
    } else {
        None
    }
}

fn render_edge<V, W, F>(edge: &Edge<V, W>, node_formatter: &F) -> String
where
    W: Weight + One + ToPrimitive + Display,
    F: Fn(&V) -> String,
{
    let mut out = format!("{}->{}", node_formatter(&edge.from), node_formatter(&edge.to));
    if let Some(modifier) = annotation(edge.weight) {
        out.push_str(&modifier);
    }
    out
}

impl<V, W> WeightedGraph<V, W>
where
    W: Weight + One + ToPrimitive + Display,
{
    /// Renders the graph, formatting vertices with their `Display` impl.
    ///
    /// # Examples
    /// ```
    /// use satchel::WeightedGraph;
    ///
    /// let mut graph = WeightedGraph::new();
    /// graph.add_edge("A", "B", 0)?;
    /// graph.add_edge("B", "C", 2)?;
    /// assert_eq!(
    ///     graph.to_text_diagram(),
    ///     "digraph{A->B[style=dotted];B->C[weight=2]}"
    /// );
    /// # Ok::<(), satchel::Error>(())
    /// ```
    pub fn to_text_diagram(&self) -> String
    where
        V: Display,
    {
        self.to_text_diagram_with(|vertex: &V| vertex.to_string())
    }

    /// Renders the graph, formatting vertices with `node_formatter`.
    pub fn to_text_diagram_with<F>(&self, node_formatter: F) -> String
    where
        F: Fn(&V) -> String,
    {
        let body = self
            .edges()
            .iter()
            .map(|edge| render_edge(edge, &node_formatter))
            .collect::<Vec<_>>()
            .join(";");
        format!("digraph{{{body}}}")
    }
}
