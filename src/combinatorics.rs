//! Ordered tuple enumeration over a sequence.
//!
//! [`all_tuples`] yields every length-`n` subsequence of its input: each
//! tuple keeps the input order and every element is used at most once per
//! tuple. Tuples come out in lexicographic order of element positions.
//!
//! ```
//! use satchel::combinatorics::all_tuples;
//!
//! let tuples: Vec<Vec<char>> = all_tuples(2, "abc".chars())?.collect();
//! assert_eq!(tuples, vec![vec!['a', 'b'], vec!['a', 'c'], vec!['b', 'c']]);
//! # Ok::<(), satchel::Error>(())
//! ```

use crate::error::{Error, Result};

/// Iterator over the length-`n` subsequences of a sequence.
///
/// Created by [`all_tuples`].
#[derive(Debug, Clone)]
pub struct Tuples<T> {
    items: Vec<T>,
    indices: Vec<usize>,
    done: bool,
    remaining: Option<usize>,
}

/// Binomial coefficient `C(n, k)`, or `None` if it overflows `usize`.
fn binomial(n: usize, k: usize) -> Option<usize> {
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        acc = acc.checked_mul((n - i) as u128)? / (i as u128 + 1);
    }
    usize::try_from(acc).ok()
}

impl<T> Tuples<T> {
    fn new(n: usize, items: Vec<T>) -> Self {
        Self {
            remaining: binomial(items.len(), n),
            indices: (0..n).collect(),
            items,
            done: false,
        }
    }

    /// Moves `indices` to the next combination; returns `false` when exhausted.
    fn advance(&mut self) -> bool {
        let n = self.indices.len();
        let len = self.items.len();
        let Some(pivot) = (0..n).rev().find(|&i| self.indices[i] < len - n + i) else {
            return false;
        };
        self.indices[pivot] += 1;
        for j in pivot + 1..n {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl<T: Clone> Iterator for Tuples<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        let tuple = self.indices.iter().map(|&i| self.items[i].clone()).collect();
        self.done = !self.advance();
        self.remaining = self.remaining.map(|r| r.saturating_sub(1));
        Some(tuple)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(r) => (r, Some(r)),
            None => (usize::MAX, None),
        }
    }
}

/// Every length-`n` tuple drawn in order from `items`.
///
/// `n == items.len()` yields the whole sequence once; `n == 1` yields each
/// element on its own.
///
/// # Errors
/// Returns [`Error::InvalidLength`] if `n` is zero or longer than `items`.
pub fn all_tuples<T, I>(n: usize, items: I) -> Result<Tuples<T>>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    let items: Vec<T> = items.into_iter().collect();
    if n == 0 || n > items.len() {
        return Err(Error::InvalidLength {
            requested: n,
            available: items.len(),
        });
    }
    Ok(Tuples::new(n, items))
}

/// Every ordered pair of distinct positions of `items`.
///
/// # Errors
/// Returns [`Error::InvalidLength`] if `items` has fewer than two elements.
pub fn all_pairs<T, I>(items: I) -> Result<impl Iterator<Item = (T, T)>>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    Ok(all_tuples(2, items)?
        .filter_map(|tuple| <[T; 2]>::try_from(tuple).ok())
        .map(|[a, b]| (a, b)))
}

/// Every ordered triple of distinct positions of `items`.
///
/// # Errors
/// Returns [`Error::InvalidLength`] if `items` has fewer than three elements.
pub fn all_triples<T, I>(items: I) -> Result<impl Iterator<Item = (T, T, T)>>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    Ok(all_tuples(3, items)?
        .filter_map(|tuple| <[T; 3]>::try_from(tuple).ok())
        .map(|[a, b, c]| (a, b, c)))
}
