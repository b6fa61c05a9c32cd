//! A multiset ("bag") keyed by any hashable value.
//!
//! `Bag` behaves like a set with repeated membership: each distinct item
//! maps to a strictly positive occurrence count. Setting a count to zero or
//! below removes the item, so the backing map never holds a non-positive
//! entry.
//!
//! ### Operators
//! | Expression | Method | Count of `x` in the result |
//! |------------|--------|----------------------------|
//! | `&a + &b` | [`Bag::union`] | `a[x] + b[x]` |
//! | `&a - &b` | [`Bag::difference`] | `a[x] - b[x]` for keys in both, else `a[x]` |
//! | `&a & &b` | [`Bag::intersect`] | `min(a[x], b[x])` for keys in both |
//! | `&a \| &b` | [`Bag::max_combine`] | `max(a[x], b[x])` |
//!
//! `+=` and `-=` are the in-place forms ([`Bag::add_all`], [`Bag::subtract_all`]).

use core::fmt;
use core::hash::Hash;
use core::ops::{Add, AddAssign, BitAnd, BitOr, Sub, SubAssign};
use std::collections::hash_map;
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// A multiset mapping each item to a positive occurrence count.
///
/// # Examples
/// ```
/// use satchel::Bag;
///
/// let mut bag: Bag<&str> = [("a", 1), ("b", 2)].into_iter().collect();
/// assert_eq!(bag.total_count(), 3);
/// assert_eq!(bag.unique_count(), 2);
///
/// bag.set("a", 0);
/// assert!(!bag.contains(&"a"));
/// assert_eq!(bag.get(&"missing"), 0);
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "HashMap<T, usize>",
    into = "HashMap<T, usize>",
    bound(
        serialize = "T: Serialize + Clone",
        deserialize = "T: Deserialize<'de>"
    )
)]
pub struct Bag<T: Eq + Hash> {
    counts: HashMap<T, usize>,
}

impl<T: Eq + Hash> Bag<T> {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Creates an empty bag with room for `capacity` distinct items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: HashMap::with_capacity(capacity),
        }
    }

    /// Builds a bag from `(item, count)` seeds, applying each through [`Bag::set`].
    ///
    /// Later seeds for the same item overwrite earlier ones; non-positive
    /// counts are dropped.
    pub fn from_counts<I>(seeds: I) -> Self
    where
        I: IntoIterator<Item = (T, isize)>,
    {
        let mut bag = Self::new();
        for (item, count) in seeds {
            bag.set(item, count);
        }
        bag
    }

    /// Returns how many times `item` occurs, or zero if it is absent.
    pub fn get(&self, item: &T) -> usize {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Sets the count of `item`.
    ///
    /// A positive `value` is stored as-is; zero or a negative value removes
    /// the item if present. Counts above `isize::MAX` are reachable through
    /// [`Bag::add_count`] and [`Bag::add_all`].
    pub fn set(&mut self, item: T, value: isize) {
        match usize::try_from(value) {
            Ok(count) if count > 0 => {
                self.counts.insert(item, count);
            }
            _ => {
                self.counts.remove(&item);
            }
        }
    }

    /// Returns `true` if `item` occurs at least once.
    pub fn contains(&self, item: &T) -> bool {
        self.counts.contains_key(item)
    }

    /// Adds a single occurrence of `item`.
    pub fn add(&mut self, item: T) {
        let count = self.counts.entry(item).or_insert(0);
        *count = count.saturating_add(1);
    }

    /// Adds `count` occurrences of `item`. A negative `count` removes
    /// occurrences, dropping the item once its count reaches zero.
    ///
    /// Counts saturate at `usize::MAX`.
    pub fn add_count(&mut self, item: T, count: isize) {
        let current = self.get(&item);
        let updated = if count >= 0 {
            current.saturating_add(count.unsigned_abs())
        } else {
            current.saturating_sub(count.unsigned_abs())
        };
        if updated == 0 {
            self.counts.remove(&item);
        } else {
            self.counts.insert(item, updated);
        }
    }

    /// Number of distinct items.
    pub fn unique_count(&self) -> usize {
        self.counts.len()
    }

    /// Alias for [`Bag::unique_count`].
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if the bag holds no items.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of occurrences (the cardinality of the multiset),
    /// saturating at `usize::MAX`.
    pub fn total_count(&self) -> usize {
        self.counts.values().fold(0, |sum, &count| sum.saturating_add(count))
    }

    /// Distinct items, in unspecified order.
    pub fn keys(&self) -> hash_map::Keys<'_, T, usize> {
        self.counts.keys()
    }

    /// `(item, count)` pairs, in unspecified order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.counts.iter(),
        }
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.counts.clear();
    }
}

impl<T: Eq + Hash + Clone> Bag<T> {
    /// Adds every occurrence from `other` to this bag. Counts saturate at
    /// `usize::MAX`.
    pub fn add_all(&mut self, other: &Bag<T>) {
        for (item, &count) in &other.counts {
            match self.counts.get_mut(item) {
                Some(existing) => *existing = existing.saturating_add(count),
                None => {
                    self.counts.insert(item.clone(), count);
                }
            }
        }
    }

    /// Subtracts `other` from this bag, in place.
    ///
    /// Only items present in *both* bags are touched; items that exist only
    /// in `other` have nothing to subtract from and are ignored. Counts that
    /// fall to zero or below remove the item.
    pub fn subtract_all(&mut self, other: &Bag<T>) {
        self.counts.retain(|item, count| match other.counts.get(item) {
            Some(&removed) if removed >= *count => false,
            Some(&removed) => {
                *count -= removed;
                true
            }
            None => true,
        });
    }

    /// Returns a new bag whose counts are the sums of `self` and `other`.
    pub fn union(&self, other: &Bag<T>) -> Bag<T> {
        let mut bag = self.clone();
        bag.add_all(other);
        bag
    }

    /// Returns a copy of `self` with `other` subtracted (see [`Bag::subtract_all`]).
    pub fn difference(&self, other: &Bag<T>) -> Bag<T> {
        let mut bag = self.clone();
        bag.subtract_all(other);
        bag
    }

    /// Returns the items present in both bags, each with the smaller count.
    pub fn intersect(&self, other: &Bag<T>) -> Bag<T> {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .counts
            .iter()
            .filter_map(|(item, &count)| {
                large
                    .counts
                    .get(item)
                    .map(|&theirs| (item.clone(), count.min(theirs)))
            })
            .collect::<HashMap<_, _>>()
            .into()
    }

    /// Returns the items present in either bag, each with the larger count.
    pub fn max_combine(&self, other: &Bag<T>) -> Bag<T> {
        let keys: HashSet<&T> = self.counts.keys().chain(other.counts.keys()).collect();
        keys.into_iter()
            .map(|item| (item.clone(), self.get(item).max(other.get(item))))
            .collect::<HashMap<_, _>>()
            .into()
    }
}

impl<T: Eq + Hash> Default for Bag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + fmt::Debug> fmt::Debug for Bag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Bag").field(&self.counts).finish()
    }
}

impl<T: Eq + Hash + fmt::Display> fmt::Display for Bag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Bag({")?;
        for (i, (item, count)) in self.counts.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}: {count}")?;
        }
        f.write_str("})")
    }
}

/// Seeds a bag from a map; zero counts are dropped.
impl<T: Eq + Hash> From<HashMap<T, usize>> for Bag<T> {
    fn from(mut counts: HashMap<T, usize>) -> Self {
        counts.retain(|_, count| *count > 0);
        Self { counts }
    }
}

impl<T: Eq + Hash> From<Bag<T>> for HashMap<T, usize> {
    fn from(bag: Bag<T>) -> Self {
        bag.counts
    }
}

/// Counts every yielded item once.
impl<T: Eq + Hash> FromIterator<T> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bag = Self::new();
        bag.extend(iter);
        bag
    }
}

/// Seeds from `(item, count)` pairs, see [`Bag::from_counts`].
impl<T: Eq + Hash> FromIterator<(T, isize)> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = (T, isize)>>(iter: I) -> Self {
        Self::from_counts(iter)
    }
}

impl<T: Eq + Hash> Extend<T> for Bag<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

/// Iterator over `(item, count)` pairs of a [`Bag`].
pub struct Iter<'a, T> {
    inner: hash_map::Iter<'a, T, usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(item, &count)| (item, count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T: Eq + Hash> IntoIterator for &'a Bag<T> {
    type Item = (&'a T, usize);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Eq + Hash> IntoIterator for Bag<T> {
    type Item = (T, usize);
    type IntoIter = hash_map::IntoIter<T, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

impl<T: Eq + Hash + Clone> AddAssign<&Bag<T>> for Bag<T> {
    fn add_assign(&mut self, other: &Bag<T>) {
        self.add_all(other);
    }
}

impl<T: Eq + Hash + Clone> SubAssign<&Bag<T>> for Bag<T> {
    fn sub_assign(&mut self, other: &Bag<T>) {
        self.subtract_all(other);
    }
}

impl<T: Eq + Hash + Clone> Add for &Bag<T> {
    type Output = Bag<T>;

    fn add(self, other: &Bag<T>) -> Bag<T> {
        self.union(other)
    }
}

impl<T: Eq + Hash + Clone> Sub for &Bag<T> {
    type Output = Bag<T>;

    fn sub(self, other: &Bag<T>) -> Bag<T> {
        self.difference(other)
    }
}

impl<T: Eq + Hash + Clone> BitAnd for &Bag<T> {
    type Output = Bag<T>;

    fn bitand(self, other: &Bag<T>) -> Bag<T> {
        self.intersect(other)
    }
}

impl<T: Eq + Hash + Clone> BitOr for &Bag<T> {
    type Output = Bag<T>;

    fn bitor(self, other: &Bag<T>) -> Bag<T> {
        self.max_combine(other)
    }
}
