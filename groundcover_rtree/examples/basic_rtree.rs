// Copyright 2025 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of the Groundcover R-tree: insert, search, and removal.

use groundcover_rtree::{RTree, Region};

fn main() {
    let mut tree: RTree<i64, u32> = RTree::new();
    tree.insert(Region::new(0, 0, 10, 10), 1);
    tree.insert(Region::new(5, 5, 15, 15), 2);
    tree.insert(Region::new(40, 40, 10, 10), 3);

    // Everything overlapping the query window.
    let hits: Vec<_> = tree.search(&Region::new(4, 4, 4, 4));
    println!("hits in (4,4,4,4): {hits:?}");

    // Drop whatever lies outside it.
    let evicted = tree.remove_outside(&Region::new(0, 0, 25, 25));
    println!("removed outside (0,0,25,25): {evicted:?}");
    println!("tree after removal: {tree:?}");
}
