// Copyright 2026 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Broad-phase benchmarks: per-tick rebuild cost, and candidate pair
//! finding through the quadtree vs. a naive all-pairs sweep.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use quadrat_index::{Aabb, Config, QuadTree};

const WORLD: f64 = 500.0;
const BOX_SIZE: f64 = 10.0;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_boxes(count: usize, seed: u64) -> Vec<Aabb<f64>> {
    let mut rng = Rng::new(seed);
    let span = WORLD - BOX_SIZE;
    (0..count)
        .map(|_| {
            let x = rng.next_f64() * span;
            let y = rng.next_f64() * span;
            Aabb::from_xywh(x, y, BOX_SIZE, BOX_SIZE)
        })
        .collect()
}

fn world_tree() -> QuadTree<f64, usize> {
    QuadTree::new(Config {
        width: WORLD,
        height: WORLD,
        max_depth: 5,
        max_objects: 3,
    })
    .unwrap()
}

fn build_tree(boxes: &[Aabb<f64>]) -> QuadTree<f64, usize> {
    let mut tree = world_tree();
    for (i, r) in boxes.iter().enumerate() {
        tree.insert(*r, i).unwrap();
    }
    tree
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild");
    for &n in &[100_usize, 1_000, 5_000] {
        let boxes = gen_boxes(n, 0x9e37_79b9);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("quadtree/{n}"), |b| {
            let mut tree = world_tree();
            b.iter(|| {
                tree.clear();
                for (i, r) in boxes.iter().enumerate() {
                    tree.insert(*r, i).unwrap();
                }
                black_box(tree.node_count())
            });
        });
    }
    group.finish();
}

fn bench_overlap_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlap_pairs");
    for &n in &[100_usize, 1_000, 5_000] {
        let boxes = gen_boxes(n, 0x5bd1_e995);
        group.throughput(Throughput::Elements(n as u64));

        let tree = build_tree(&boxes);
        group.bench_function(format!("quadtree/{n}"), |b| {
            let mut candidates = Vec::new();
            b.iter(|| {
                let mut overlaps = 0_usize;
                for (i, r) in boxes.iter().enumerate() {
                    tree.retrieve_into(r, &mut candidates);
                    overlaps += candidates
                        .iter()
                        .filter(|it| it.payload != i && it.aabb.intersects(r))
                        .count();
                }
                black_box(overlaps)
            });
        });

        group.bench_function(format!("naive/{n}"), |b| {
            b.iter(|| {
                let mut overlaps = 0_usize;
                for (i, a) in boxes.iter().enumerate() {
                    for (j, b2) in boxes.iter().enumerate() {
                        if i != j && a.intersects(b2) {
                            overlaps += 1;
                        }
                    }
                }
                black_box(overlaps)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rebuild, bench_overlap_pairs);
criterion_main!(benches);
