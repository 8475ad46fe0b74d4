// Copyright 2025 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use groundcover_cache::RegionCache;
use groundcover_rtree::{RTree, Region};
use kurbo::Rect;

fn gen_grid_regions(n: usize, cell: f64) -> Vec<Region<f64>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Region::new(x0, y0, cell, cell));
        }
    }
    out
}

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

fn gen_random_regions(count: usize, extent: f64, rect_w: f64, rect_h: f64) -> Vec<Region<f64>> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        let x0 = rng.next_f64() * (extent - rect_w).max(1.0);
        let y0 = rng.next_f64() * (extent - rect_h).max(1.0);
        out.push(Region::new(x0, y0, rect_w, rect_h));
    }
    out
}

fn bench_rtree_insert_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree");
    for &n in &[16usize, 32, 64] {
        let regions = gen_grid_regions(n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("insert_search_grid_n{n}"), |b| {
            b.iter_batched(
                RTree::<f64, u32>::new,
                |mut tree| {
                    for (i, r) in regions.iter().copied().enumerate() {
                        tree.insert(r, i as u32);
                    }
                    let hits = tree.search(&Region::new(100.0, 100.0, 200.0, 200.0));
                    black_box(hits.len());
                },
                BatchSize::SmallInput,
            )
        });
    }

    let regions = gen_random_regions(4096, 2000.0, 24.0, 24.0);
    group.bench_function("insert_search_random_4096", |b| {
        b.iter_batched(
            RTree::<f64, u32>::new,
            |mut tree| {
                for (i, r) in regions.iter().copied().enumerate() {
                    tree.insert(r, i as u32);
                }
                let hits = tree.search(&Region::new(500.0, 500.0, 400.0, 400.0));
                black_box(hits.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_rtree_removal(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_removal");
    let regions = gen_grid_regions(48, 10.0);
    group.throughput(Throughput::Elements((48 * 48) as u64));
    group.bench_function("remove_outside_viewport", |b| {
        b.iter_batched(
            || {
                let mut tree = RTree::<f64, u32>::new();
                for (i, r) in regions.iter().copied().enumerate() {
                    tree.insert(r, i as u32);
                }
                tree
            },
            |mut tree| {
                let gone = tree.remove_outside(&Region::new(120.0, 120.0, 160.0, 160.0));
                black_box(gone.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_cache_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("region_cache");

    // Steady-state eviction: many more tiles than capacity.
    let tiles: Vec<Rect> = gen_random_regions(2048, 4000.0, 64.0, 64.0)
        .into_iter()
        .map(|r| Rect::new(r.x, r.y, r.x + r.w, r.y + r.h))
        .collect();
    group.throughput(Throughput::Elements(tiles.len() as u64));
    group.bench_function("update_churn_cap256", |b| {
        b.iter_batched(
            || RegionCache::<u32>::with_capacity(256),
            |mut cache| {
                for (i, t) in tiles.iter().copied().enumerate() {
                    let _ = cache.update(t, i as u32);
                }
                black_box(cache.len());
            },
            BatchSize::SmallInput,
        )
    });

    // Read-heavy: repeated viewport searches over a warm cache.
    group.bench_function("search_warm_cap256", |b| {
        b.iter_batched(
            || {
                let mut cache = RegionCache::<u32>::with_capacity(256);
                for (i, t) in tiles.iter().copied().take(256).enumerate() {
                    let _ = cache.update(t, i as u32);
                }
                cache
            },
            |mut cache| {
                for step in 0..16_u32 {
                    let x = f64::from(step) * 100.0;
                    let hits = cache.search(Rect::new(x, x, x + 800.0, x + 800.0));
                    black_box(hits.len());
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_rtree_insert_search,
    bench_rtree_removal,
    bench_cache_churn
);
criterion_main!(benches);
