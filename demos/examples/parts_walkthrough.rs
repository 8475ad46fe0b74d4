// Copyright 2025 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The cache's two halves driven directly: a recency list deciding what
//! stays, and an R-tree answering overlap queries.

use groundcover_recency::RecencyList;
use groundcover_rtree::{RTree, Region};

fn main() {
    // Recency: capacity two, three keys.
    let mut recent: RecencyList<&str, u32> = RecencyList::with_capacity(2);
    recent.update("a", 1);
    recent.update("b", 2);
    let evicted = recent.update("c", 3);
    println!("inserting c evicted: {evicted:?}");
    let order: Vec<_> = recent.iter().map(|(k, _)| *k).collect();
    println!("most- to least-recent: {order:?}");

    // Spatial: a sparse tile row and a window over it.
    let mut tree: RTree<f64, char> = RTree::new();
    tree.insert(Region::new(0.0, 0.0, 10.0, 10.0), 'p');
    tree.insert(Region::new(30.0, 0.0, 10.0, 10.0), 'q');
    tree.insert(Region::new(90.0, 0.0, 10.0, 10.0), 's');
    tree.insert(Region::new(60.0, 0.0, 10.0, 10.0), 'r');
    let window = Region::new(5.0, 0.0, 70.0, 10.0);
    let hits: Vec<_> = tree.search(&window).into_iter().map(|(_, p)| p).collect();
    println!("tiles overlapping {window:?}: {hits:?}");

    let outside = tree.remove_outside(&window);
    println!("removed {} tiles outside the window", outside.len());
    println!("tree: {tree:?}");
}
