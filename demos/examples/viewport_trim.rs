// Copyright 2025 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trimming a tile cache as a viewport scrolls: keep what is visible,
//! pluck what fell off the edge.

use groundcover_cache::RegionCache;
use kurbo::Rect;

fn tile_at(col: i32, row: i32) -> Rect {
    let x = f64::from(col) * 32.0;
    let y = f64::from(row) * 32.0;
    Rect::new(x, y, x + 32.0, y + 32.0)
}

fn main() {
    // Leaf budget sized to the working set so trimming sees every tile.
    let mut cache: RegionCache<(i32, i32)> = RegionCache::with_capacity_and_branching(64, 96);

    // Fill an 8x8 tile neighborhood.
    for row in 0..8 {
        for col in 0..8 {
            cache.update(tile_at(col, row), (col, row));
        }
    }
    println!("cached tiles: {}", cache.len());

    // The viewport scrolls to the bottom-right quadrant.
    let viewport = Rect::new(128.0, 128.0, 256.0, 256.0);
    let dropped = cache.pluck_outside(viewport);
    println!("dropped {} tiles outside the viewport", dropped.len());
    println!("still cached: {}", cache.len());

    // Redraw of the top-left visible tile block invalidates its content.
    let redrawn = cache.pluck_inside(Rect::new(128.0, 128.0, 192.0, 192.0));
    println!("invalidated {redrawn:?}");
    println!("cache: {cache:?}");
}
