// Copyright 2025 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic region cache usage: insert tiles, query overlap, observe eviction.

use groundcover_cache::RegionCache;
use kurbo::Rect;

fn main() {
    // Room for four 64x64 tiles; leaf budget sized to the working set.
    let mut cache: RegionCache<String> = RegionCache::with_capacity_and_branching(4, 8);

    for i in 0..4_i32 {
        let x = f64::from(i) * 64.0;
        let tile = Rect::new(x, 0.0, x + 64.0, 64.0);
        let evicted = cache.update(tile, format!("tile {i}"));
        println!("update tile {i}: evicted {evicted:?}");
    }

    // Everything overlapping the left half of the row.
    let visible = cache.search(Rect::new(0.0, 0.0, 120.0, 64.0));
    println!("visible in left half: {visible:?}");

    // A fifth tile pushes out the coldest one (tile 2 or 3 stayed cold;
    // tiles 0 and 1 were just warmed by the search).
    let evicted = cache.update(Rect::new(0.0, 64.0, 64.0, 128.0), "tile 4".into());
    println!("update tile 4: evicted {evicted:?}");
    println!("cache: {cache:?}");
}
