// Copyright 2025 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The region cache: a recency list and a spatial tree kept in lockstep.

use alloc::vec::Vec;
use core::fmt::Debug;

use groundcover_recency::RecencyList;
use groundcover_rtree::{RTree, Region};
use kurbo::Rect;

use crate::key::RegionKey;
use crate::util::rect_to_region;

/// A bounded cache of rectangle-keyed values with geometric lookup.
///
/// Two structures back the cache and every operation keeps them in step:
/// a [`RecencyList`] decides how many distinct rectangles may be live and
/// which goes first when room is needed, while an [`RTree`] answers the
/// geometric queries. Entries enter through [`add`](RegionCache::add) or
/// [`update`](RegionCache::update), are re-warmed by [`get`](RegionCache::get)
/// and by geometric hits, and leave through [`pluck`](RegionCache::pluck),
/// the bulk pluck variants, or capacity-driven eviction.
///
/// The cache is the sole owner of both halves; callers cannot reach either
/// structure directly.
///
/// Rectangles are compared exactly, field for field. `Rect::new(0., 0., 8., 8.)`
/// and a rect computed to nearly-but-not-exactly those coordinates are
/// different entries.
pub struct RegionCache<V> {
    list: RecencyList<RegionKey, V>,
    tree: RTree<f64, V>,
}

impl<V: Clone> Default for RegionCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> RegionCache<V> {
    /// Create a cache holding a single entry (the default capacity).
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Create a cache holding at most `capacity` entries.
    ///
    /// A zero capacity silently collapses to one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_branching(capacity, 3)
    }

    /// Create a cache with an explicit tree branching factor.
    ///
    /// Both values silently floor to one.
    pub fn with_capacity_and_branching(capacity: usize, branching: usize) -> Self {
        Self {
            list: RecencyList::with_capacity(capacity),
            tree: RTree::with_branching(branching),
        }
    }

    /// The maximum number of entries this cache holds.
    pub fn capacity(&self) -> usize {
        self.list.capacity()
    }

    /// Number of entries currently cached.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Remove all entries from both halves.
    pub fn clear(&mut self) {
        self.list.clear();
        self.tree.clear();
    }

    /// Store `value` under `rect` unless this exact rectangle is already
    /// cached; a present rectangle is left untouched (value kept, recency
    /// unchanged). Returns the value evicted to make room, if any.
    pub fn add(&mut self, rect: Rect, value: V) -> Option<V> {
        let key = RegionKey::new(&rect_to_region(rect));
        if self.list.contains_key(&key) {
            return None;
        }
        self.update(rect, value)
    }

    /// Look up the value cached under this exact rectangle, warming it.
    ///
    /// This is a pure recency-list point lookup; the spatial tree is not
    /// consulted. Use [`search`](RegionCache::search) for overlap queries.
    pub fn get(&mut self, rect: Rect) -> Option<&V> {
        let key = RegionKey::new(&rect_to_region(rect));
        self.list.get(&key)
    }

    /// Store `value` under `rect`, replacing any previous value for this
    /// exact rectangle. Returns the value evicted to make room, if any.
    ///
    /// At most one entry is evicted per call; its rectangle is removed from
    /// the spatial tree as well, so eviction is never visible to geometric
    /// queries afterwards.
    pub fn update(&mut self, rect: Rect, value: V) -> Option<V> {
        let region = rect_to_region(rect);
        let key = RegionKey::new(&region);

        let evicted = self.list.update(key, value.clone()).map(|(ekey, evalue)| {
            self.tree.remove_equal(&ekey.region());
            evalue
        });

        // Replace, not accumulate: successive updates to one rectangle must
        // keep a single geometric entry.
        self.tree.remove_equal(&region);
        self.tree.insert(region, value);
        evicted
    }

    /// Remove the entry for this exact rectangle from both halves,
    /// returning its value. Absent rectangles are a quiet no-op.
    pub fn pluck(&mut self, rect: Rect) -> Option<V> {
        let region = rect_to_region(rect);
        let key = RegionKey::new(&region);
        let value = self.list.pluck(&key);
        self.tree.remove_equal(&region);
        value
    }

    /// Remove every entry lying entirely inside `rect`, returning the
    /// removed values.
    pub fn pluck_inside(&mut self, rect: Rect) -> Vec<V> {
        let region = rect_to_region(rect);
        let removed = self.tree.remove_inside(&region);
        self.forget(removed)
    }

    /// Remove every entry with no overlap with `rect`, returning the
    /// removed values. Useful for trimming a cache to a viewport.
    pub fn pluck_outside(&mut self, rect: Rect) -> Vec<V> {
        let region = rect_to_region(rect);
        let removed = self.tree.remove_outside(&region);
        self.forget(removed)
    }

    /// Values cached under rectangles overlapping `rect`; every hit is
    /// re-warmed as most-recently-used.
    pub fn search(&mut self, rect: Rect) -> Vec<V> {
        let region = rect_to_region(rect);
        let hits = self.tree.search(&region);
        self.refresh(hits)
    }

    /// Values cached under rectangles lying entirely inside `rect`; every
    /// hit is re-warmed as most-recently-used.
    pub fn search_inside(&mut self, rect: Rect) -> Vec<V> {
        let region = rect_to_region(rect);
        let hits = self.tree.search_inside(&region);
        self.refresh(hits)
    }

    /// Values cached under rectangles with no overlap with `rect`; every
    /// hit is re-warmed as most-recently-used.
    pub fn search_outside(&mut self, rect: Rect) -> Vec<V> {
        let region = rect_to_region(rect);
        let hits = self.tree.search_outside(&region);
        self.refresh(hits)
    }

    /// Drop recency entries for rectangles already removed from the tree.
    fn forget(&mut self, removed: Vec<(Region<f64>, V)>) -> Vec<V> {
        let mut out = Vec::with_capacity(removed.len());
        for (r, v) in removed {
            self.list.pluck(&RegionKey::new(&r));
            out.push(v);
        }
        out
    }

    /// Re-touch each geometric hit in the recency list.
    ///
    /// A refresh can evict a colder key from the recency list; read paths
    /// deliberately leave the spatial tree untouched, so such an eviction is
    /// not mirrored there.
    fn refresh(&mut self, hits: Vec<(Region<f64>, V)>) -> Vec<V> {
        let mut out = Vec::with_capacity(hits.len());
        for (r, v) in hits {
            let _ = self.list.update(RegionKey::new(&r), v.clone());
            out.push(v);
        }
        out
    }
}

impl<V> Debug for RegionCache<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RegionCache")
            .field("len", &self.list.len())
            .field("capacity", &self.list.capacity())
            .field("tree", &self.tree)
            .finish_non_exhaustive()
    }
}
