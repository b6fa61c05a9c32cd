use criterion::{black_box, criterion_group, criterion_main, Criterion};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use satchel::WeightedGraph;

const SIZE: u32 = 200;

/// Layered DAG: every vertex links to the next three, with varying weights.
fn layered() -> Vec<(u32, u32, u32)> {
    let mut edges = Vec::new();
    for u in 0..SIZE {
        for step in 1..=3 {
            let v = u + step;
            if v < SIZE {
                edges.push((u, v, (u * 7 + step) % 11));
            }
        }
    }
    edges
}

fn bench_shortest_path(c: &mut Criterion) {
    let edges = layered();
    let mut graph = WeightedGraph::new();
    for &(u, v, w) in &edges {
        graph.add_edge(u, v, w).unwrap();
    }

    let mut reference: DiGraph<(), u32> = DiGraph::new();
    for _ in 0..SIZE {
        reference.add_node(());
    }
    for &(u, v, w) in &edges {
        reference.add_edge(NodeIndex::new(u as usize), NodeIndex::new(v as usize), w);
    }

    c.bench_function("weighted_graph_dijkstra", |b| {
        b.iter(|| black_box(graph.shortest_path(black_box(&0)).unwrap()))
    });

    c.bench_function("petgraph_dijkstra", |b| {
        b.iter(|| {
            black_box(petgraph::algo::dijkstra(
                &reference,
                NodeIndex::new(0),
                None,
                |e| *e.weight(),
            ))
        })
    });
}

fn bench_all_pairs(c: &mut Criterion) {
    let mut graph = WeightedGraph::new();
    for (u, v, w) in layered().into_iter().filter(|&(u, _, _)| u < 60) {
        graph.add_edge(u, v, w).unwrap();
    }

    c.bench_function("weighted_graph_all_path_lengths", |b| {
        b.iter(|| black_box(graph.all_path_lengths()))
    });
}

fn bench_cycle_detection(c: &mut Criterion) {
    let mut graph = WeightedGraph::new();
    for (u, v, w) in layered() {
        graph.add_edge(u, v, w).unwrap();
    }

    c.bench_function("weighted_graph_is_acyclic", |b| {
        b.iter(|| black_box(graph.is_acyclic()))
    });

    c.bench_function("weighted_graph_to_text_diagram", |b| {
        b.iter(|| black_box(graph.to_text_diagram()))
    });
}

criterion_group!(
    benches,
    bench_shortest_path,
    bench_all_pairs,
    bench_cycle_detection
);
criterion_main!(benches);
