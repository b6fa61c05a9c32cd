use criterion::{black_box, criterion_group, criterion_main, Criterion};
use satchel::{Bag, BagOfWords};
use std::collections::HashMap;

const TEXT: &str = "the quick brown fox jumps over the lazy dog while the cat sleeps";

fn bench_counting(c: &mut Criterion) {
    let items: Vec<u32> = (0..10_000).map(|i| (i * 31) % 997).collect();

    c.bench_function("bag_from_iter", |b| {
        b.iter(|| black_box(items.iter().copied().collect::<Bag<u32>>()))
    });

    c.bench_function("std_hash_map_counts", |b| {
        b.iter(|| {
            let mut counts: HashMap<u32, usize> = HashMap::new();
            for &item in &items {
                *counts.entry(item).or_insert(0) += 1;
            }
            black_box(counts)
        })
    });

    c.bench_function("bag_of_words_add_text", |b| {
        b.iter(|| {
            let mut words = BagOfWords::new();
            for _ in 0..100 {
                words.add_text(black_box(TEXT));
            }
            black_box(words)
        })
    });
}

fn bench_operators(c: &mut Criterion) {
    let left: Bag<u32> = (0..5_000).map(|i| i % 701).collect();
    let right: Bag<u32> = (0..5_000).map(|i| (i * 3) % 911).collect();

    c.bench_function("bag_union", |b| b.iter(|| black_box(&left + &right)));
    c.bench_function("bag_intersect", |b| b.iter(|| black_box(&left & &right)));
    c.bench_function("bag_max_combine", |b| b.iter(|| black_box(&left | &right)));
    c.bench_function("bag_difference", |b| b.iter(|| black_box(&left - &right)));
}

criterion_group!(benches, bench_counting, bench_operators);
criterion_main!(benches);
