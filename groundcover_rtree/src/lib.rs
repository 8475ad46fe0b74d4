// Copyright 2025 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=groundcover_rtree --heading-base-level=0

//! Groundcover R-tree: a capacity-split bounding-rectangle index.
//!
//! Groundcover R-tree is the spatial half of a rectangle-keyed cache.
//!
//! - Insert axis-aligned regions with arbitrary payloads; duplicates allowed.
//! - Query by intersection, exact equality, containment, or disjointness.
//! - Every query has a removing variant that returns the extracted entries.
//!
//! It is generic over the scalar type `T` and does not depend on any geometry
//! crate. Higher layers (like a region cache) can compute world-space regions
//! and feed them here.
//!
//! The tree favors a cheap, predictable insert over balance: a leaf that
//! reaches its capacity hands each entry to a fresh single-entry leaf child,
//! and child bounds only ever grow. Workloads that hammer one corner of the
//! plane get a lopsided tree; intersection queries remain exact because a
//! recorded bound always encloses its subtree, while the equality,
//! containment, and disjointness walks prune against those bounds and can
//! skip entries once bounds have grown loose.
//!
//! # Example
//!
//! ```rust
//! use groundcover_rtree::{RTree, Region};
//!
//! // Index a few tiles.
//! let mut tree: RTree<f64, u32> = RTree::new();
//! tree.insert(Region::new(0.0, 0.0, 64.0, 64.0), 1);
//! tree.insert(Region::new(64.0, 0.0, 64.0, 64.0), 2);
//! tree.insert(Region::new(0.0, 64.0, 64.0, 64.0), 3);
//!
//! // Which tiles overlap a viewport?
//! let viewport = Region::new(32.0, 32.0, 64.0, 64.0);
//! let mut hits: Vec<u32> = tree.search(&viewport).into_iter().map(|(_, p)| p).collect();
//! hits.sort_unstable();
//! assert_eq!(hits, [1, 2, 3]);
//!
//! // Evict everything outside the viewport.
//! let gone = tree.remove_outside(&viewport);
//! assert!(gone.is_empty()); // all three touch it
//! ```
//!
//! ## Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates. Region equality
//! is exact per-field; there is no epsilon tolerance anywhere.

#![no_std]

extern crate alloc;

pub mod tree;
pub mod types;

pub use tree::RTree;
pub use types::{Region, Scalar, area};
