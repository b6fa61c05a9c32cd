//! Tuple enumeration and descriptive statistics.

use std::collections::HashSet;

use proptest::prelude::*;
use satchel::combinatorics::{all_pairs, all_tuples};
use satchel::stats::{histogram, mean, median, population_variance, std_dev, variance};
use satchel::Error;

fn binomial(n: usize, k: usize) -> usize {
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

proptest! {
    #[test]
    fn tuple_count_is_binomial(len in 1usize..10, n in 1usize..10) {
        prop_assume!(n <= len);
        let tuples: Vec<Vec<usize>> = all_tuples(n, 0..len).unwrap().collect();
        prop_assert_eq!(tuples.len(), binomial(len, n));

        let distinct: HashSet<&Vec<usize>> = tuples.iter().collect();
        prop_assert_eq!(distinct.len(), tuples.len());
        for tuple in &tuples {
            prop_assert_eq!(tuple.len(), n);
            prop_assert!(tuple.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn median_is_bounded(data in proptest::collection::vec(-1e6f64..1e6, 1..50)) {
        let m = median(&data).unwrap();
        let lo = data.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(lo <= m && m <= hi);
    }

    #[test]
    fn variance_is_non_negative(data in proptest::collection::vec(-1e3f64..1e3, 1..50)) {
        let v = variance(&data).unwrap();
        prop_assert!(v >= 0.0);
        prop_assert_eq!(std_dev(&data).unwrap(), v.sqrt());
        prop_assert_eq!(population_variance(&data).unwrap(), v / data.len() as f64);

        // the sum of squared deviations grows with every value that is not the mean
        let m = mean(&data).unwrap();
        let mut longer = data.clone();
        longer.push(m + 1.0);
        prop_assert!(variance(&longer).unwrap() >= v);
    }

    #[test]
    fn histogram_keeps_every_value(data in proptest::collection::vec(-1e3f64..1e3, 1..80),
                                   bins in 1usize..16) {
        let hist = histogram(&data, bins).unwrap();
        prop_assert_eq!(hist.counts().iter().sum::<usize>(), data.len());
        prop_assert_eq!(hist.to_string().lines().count(), bins);
    }
}

#[test]
fn pairs_of_a_short_sequence() {
    let pairs: Vec<_> = all_pairs(["a", "b", "c"]).unwrap().collect();
    assert_eq!(pairs, vec![("a", "b"), ("a", "c"), ("b", "c")]);
    assert!(all_pairs(["only"]).is_err());
}

#[test]
fn too_long_tuples_are_invalid() {
    let err = all_tuples(5, [1, 2, 3]).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(
        err,
        Error::InvalidLength {
            requested: 5,
            available: 3
        }
    );
}

#[test]
fn variance_is_the_total_squared_deviation() {
    let data = [1.0, 2.0, 3.0, 4.0];
    assert_eq!(variance(&data).unwrap(), 5.0);
    assert_eq!(std_dev(&data).unwrap(), 5f64.sqrt());
    assert_eq!(population_variance(&data).unwrap(), 1.25);
}

#[test]
fn histogram_of_extreme_finite_values() {
    let hist = histogram(&[-1e308, 1e308], 4).unwrap();
    assert!(hist.edges().iter().all(|e| e.is_finite()));
    assert_eq!(hist.counts(), &[1, 0, 0, 1]);
}

#[test]
fn mean_of_integers_as_floats() {
    assert_eq!(mean(&[1.0, 2.0]).unwrap(), 1.5);
    assert_eq!(mean(&[]).unwrap_err(), Error::EmptyInput);
}
