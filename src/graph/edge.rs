//! Edge triples and the numeric bound on edge weights.

use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// Numeric types usable as edge weights.
///
/// Implemented for the primitive integers and floats. Path lengths are
/// built with [`Weight::checked_path_add`], so a sum that overflows an
/// integer or reaches infinity never becomes a distance.
pub trait Weight: Copy + PartialOrd + Zero {
    /// Returns `true` if the weight is usable as an edge weight: zero or
    /// greater, and comparable (so NaN is rejected).
    #[inline]
    fn is_valid_weight(&self) -> bool {
        *self >= Self::zero()
    }

    /// Returns `true` if the weight can be part of a path length. Always
    /// `true` for integers; `false` for infinite floats.
    fn is_finite_weight(&self) -> bool;

    /// Adds two path lengths, or returns `None` if the sum does not fit
    /// (integer overflow) or is not finite.
    fn checked_path_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_int_weight {
    ($($t:ty),* $(,)?) => {
        $(
            impl Weight for $t {
                #[inline]
                fn is_finite_weight(&self) -> bool {
                    true
                }

                #[inline]
                fn checked_path_add(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($t:ty),* $(,)?) => {
        $(
            impl Weight for $t {
                #[inline]
                fn is_finite_weight(&self) -> bool {
                    self.is_finite()
                }

                #[inline]
                fn checked_path_add(self, rhs: Self) -> Option<Self> {
                    let sum = self + rhs;
                    sum.is_finite().then_some(sum)
                }
            }
        )*
    };
}

impl_int_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_float_weight!(f32, f64);

/// A directed, weighted edge `from -> to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge<V, W> {
    /// Source vertex.
    pub from: V,
    /// Destination vertex.
    pub to: V,
    /// Non-negative weight.
    pub weight: W,
}

impl<V, W> Edge<V, W> {
    /// Creates an edge. Weight validation happens when it is added to a graph.
    pub const fn new(from: V, to: V, weight: W) -> Self {
        Self { from, to, weight }
    }

    /// Swaps source and destination in place.
    pub fn reverse(&mut self) {
        core::mem::swap(&mut self.from, &mut self.to);
    }

    /// Returns `true` if the edge starts and ends at the same vertex.
    pub fn is_loop(&self) -> bool
    where
        V: PartialEq,
    {
        self.from == self.to
    }
}

impl<V, W> From<(V, V, W)> for Edge<V, W> {
    fn from((from, to, weight): (V, V, W)) -> Self {
        Self { from, to, weight }
    }
}

impl<V, W> From<Edge<V, W>> for (V, V, W) {
    fn from(edge: Edge<V, W>) -> Self {
        (edge.from, edge.to, edge.weight)
    }
}
