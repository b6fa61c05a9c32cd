//! Descriptive statistics over `f64` slices.
//!
//! Every function rejects an empty sequence with [`Error::EmptyInput`].
//! NaN values are not filtered and propagate through `mean`, `variance`
//! and `std_dev`.
//!
//! [`variance`] is the total squared deviation from the mean, without
//! dividing by the length; [`population_variance`] is the divided form.

use core::fmt;

use crate::error::{Error, Result};

/// Number of bins used by [`histogram`] callers that have no preference.
pub const DEFAULT_BINS: usize = 10;

fn non_empty(data: &[f64]) -> Result<&[f64]> {
    if data.is_empty() {
        Err(Error::EmptyInput)
    } else {
        Ok(data)
    }
}

/// Arithmetic mean.
///
/// # Examples
/// ```
/// use satchel::stats::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0])?, 2.5);
/// # Ok::<(), satchel::Error>(())
/// ```
pub fn mean(data: &[f64]) -> Result<f64> {
    let data = non_empty(data)?;
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Median: the middle value of the sorted data, or the mean of the two
/// middle values when the length is even.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
pub fn median(data: &[f64]) -> Result<f64> {
    let data = non_empty(data)?;
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Sum of squared deviations from the mean, `Σ (x - mean)²`.
///
/// # Examples
/// ```
/// use satchel::stats::variance;
/// assert_eq!(variance(&[1.0, 3.0])?, 2.0);
/// # Ok::<(), satchel::Error>(())
/// ```
pub fn variance(data: &[f64]) -> Result<f64> {
    let m = mean(data)?;
    Ok(data.iter().map(|x| (x - m) * (x - m)).sum())
}

/// `sqrt(variance(data))`.
pub fn std_dev(data: &[f64]) -> Result<f64> {
    variance(data).map(f64::sqrt)
}

/// Population variance: the mean squared deviation, `variance(data) / n`.
pub fn population_variance(data: &[f64]) -> Result<f64> {
    Ok(variance(data)? / data.len() as f64)
}

/// Equal-width bin counts over the range of some data.
///
/// Bin `i` covers `[edges[i], edges[i + 1])`; the last bin is closed on
/// both ends so the maximum is counted.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    edges: Vec<f64>,
    counts: Vec<usize>,
}

impl Histogram {
    /// Bin boundaries, one more than the number of bins.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Number of values per bin.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of bins.
    pub fn bins(&self) -> usize {
        self.counts.len()
    }
}

/// One line per bin: `[lo,hi): ###`, the last one as `[lo,hi]: ###`.
impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last = self.counts.len() - 1;
        for (i, &count) in self.counts.iter().enumerate() {
            let (lo, hi) = (self.edges[i], self.edges[i + 1]);
            let close = if i == last { ']' } else { ')' };
            write!(f, "[{lo:.3},{hi:.3}{close}: {}", "#".repeat(count))?;
            if i != last {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

/// Counts `data` into `bins` equal-width bins spanning its minimum to its
/// maximum. When every value is the same the range is widened by 0.5 on
/// each side.
///
/// # Errors
/// - [`Error::EmptyInput`] if `data` is empty.
/// - [`Error::InvalidLength`] if `bins` is zero.
/// - [`Error::NonFinite`] if `data` contains NaN or an infinity.
///
/// # Examples
/// ```
/// use satchel::stats::histogram;
///
/// let hist = histogram(&[0.0, 1.0, 1.5, 2.0], 2)?;
/// assert_eq!(hist.counts(), &[1, 3]);
/// assert_eq!(hist.to_string(), "[0.000,1.000): #\n[1.000,2.000]: ###");
/// # Ok::<(), satchel::Error>(())
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn histogram(data: &[f64], bins: usize) -> Result<Histogram> {
    let data = non_empty(data)?;
    if bins == 0 {
        return Err(Error::InvalidLength {
            requested: 0,
            available: data.len(),
        });
    }
    if !data.iter().all(|x| x.is_finite()) {
        return Err(Error::NonFinite);
    }

    let (mut lo, mut hi) = data
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        });
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    // `hi - lo` overflows when the data spans more than f64::MAX; scale
    // before subtracting in that case only
    let n = bins as f64;
    let wide = !(hi - lo).is_finite();
    let width = if wide { hi / n - lo / n } else { (hi - lo) / n };
    let edges: Vec<f64> = (0..=bins)
        .map(|i| {
            let t = i as f64 / n;
            if i == bins {
                hi
            } else if wide {
                lo * (1.0 - t) + hi * t
            } else {
                lo + width * i as f64
            }
        })
        .collect();

    let mut counts = vec![0usize; bins];
    for &x in data {
        let offset = if wide { x / width - lo / width } else { (x - lo) / width };
        let bin = (offset as usize).min(bins - 1);
        counts[bin] += 1;
    }

    Ok(Histogram { edges, counts })
}
