//! # `satchel` - Small Generic Data Structures
//!
//! A handful of independent, in-memory utilities:
//!
//! - **Multisets** ([`Bag`], [`BagOfWords`]): item → positive count maps with
//!   union, difference, intersection and max-combine operators.
//! - **Weighted digraphs** ([`WeightedGraph`]): an edge-list multigraph with
//!   terminal-stripping cycle detection, Dijkstra, Floyd-Warshall and a
//!   Graphviz-style text rendering.
//! - **Combinatorics** ([`combinatorics`]): ordered tuple enumeration.
//! - **Statistics** ([`stats`]): mean, median, variance, histograms.
//!
//! Nothing here performs I/O or spawns threads. Instances carry no internal
//! synchronization; share them across threads behind your own lock.
//!
//! ## Errors
//!
//! Every fallible operation returns [`Result`] with the crate-wide
//! [`Error`]. All variants are invalid-argument conditions raised by the
//! call that received the bad input. Absence is not an error: a missing bag
//! item counts as zero and unreachable vertices are left out of
//! shortest-path results.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events from the graph algorithms.
//!
//! ## Example
//!
//! ```rust
//! use satchel::{Bag, WeightedGraph};
//!
//! let a: Bag<&str> = ["x", "y", "y"].into_iter().collect();
//! let b: Bag<&str> = ["y", "z"].into_iter().collect();
//! assert_eq!((&a & &b).get(&"y"), 1);
//! assert_eq!((&a + &b).total_count(), 5);
//!
//! let mut graph = WeightedGraph::new();
//! graph.add_edge("A", "B", 1)?;
//! graph.add_edge("B", "C", 2)?;
//! graph.add_edge("A", "C", 5)?;
//! assert!(graph.is_acyclic());
//! assert_eq!(graph.shortest_path(&"A")?[&"C"], 3);
//! # Ok::<(), satchel::Error>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

pub mod collections;
pub mod combinatorics;
pub mod error;
pub mod graph;
pub mod stats;

pub use collections::{Bag, BagOfWords, Tokenizer};
pub use error::{Error, Result};
pub use graph::{Edge, Route, WeightedGraph};
