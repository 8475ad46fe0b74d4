// Copyright 2025 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=groundcover_cache --heading-base-level=0

//! Groundcover Cache: a Kurbo-native, recency-bounded region cache.
//!
//! Groundcover Cache is a building block for tile-based rendering pipelines:
//! it answers "what cached content overlaps this rectangle?" while keeping
//! the number of live entries bounded and evicting whatever has gone
//! untouched the longest.
//!
//! - Entries are keyed by exact rectangle; values are opaque to the cache
//!   (rendered tile handles, in a typical pipeline).
//! - Point lookups ([`RegionCache::get`]) and geometric queries
//!   ([`RegionCache::search`] and friends) both count as touches and warm
//!   their entries.
//! - Bulk trimming ([`RegionCache::pluck_inside`] /
//!   [`RegionCache::pluck_outside`]) drops everything within or beyond a
//!   rectangle, e.g. after a layer is redrawn or the viewport moves.
//!
//! ## Integration with the Groundcover R-tree
//!
//! Geometric state lives in a [`groundcover_rtree::RTree`] and recency state
//! in a [`groundcover_recency::RecencyList`]; the cache owns both and keeps
//! them synchronized on every write. Reads that warm entries deliberately
//! leave the tree alone — see [`RegionCache::search`]. Containment and
//! disjointness selection inherits the tree's bound-pruned walks, so on a
//! deep tree with grown bounds the bulk operations are best-effort; sizing
//! the branching to the working set keeps them exact.
//!
//! ## Exactness
//!
//! Rectangles are value keys: equality is exact on all four fields with no
//! epsilon. Coordinates are assumed finite (no NaNs).
//!
//! # Example
//!
//! ```
//! use groundcover_cache::RegionCache;
//! use kurbo::Rect;
//!
//! // Room for two tiles.
//! let mut cache: RegionCache<&str> = RegionCache::with_capacity(2);
//!
//! let a = Rect::new(0.0, 0.0, 64.0, 64.0);
//! let b = Rect::new(64.0, 0.0, 128.0, 64.0);
//! let c = Rect::new(0.0, 64.0, 64.0, 128.0);
//!
//! assert_eq!(cache.update(a, "tile a"), None);
//! assert_eq!(cache.update(b, "tile b"), None);
//!
//! // The third tile pushes out the coldest entry.
//! assert_eq!(cache.update(c, "tile c"), Some("tile a"));
//! assert_eq!(cache.get(a), None);
//!
//! // Overlap query warms what it finds.
//! let visible = cache.search(Rect::new(0.0, 0.0, 200.0, 64.0));
//! assert_eq!(visible, ["tile b"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cache;
mod key;
pub mod util;

pub use cache::RegionCache;
pub use groundcover_rtree::Region;
