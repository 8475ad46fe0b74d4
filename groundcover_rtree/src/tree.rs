// Copyright 2025 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capacity-split region tree: insertion, predicate queries, removal.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::types::{Region, Scalar, area};

/// A bounding-rectangle spatial index mapping regions to payloads.
///
/// Insertion descends toward the child whose recorded bound needs the least
/// area growth and converts a full leaf into an internal node with one
/// single-entry leaf child per resident entry. The tree never rebalances,
/// and recorded bounds are never tightened after a removal, so a long-lived
/// tree can carry looser bounds than strictly necessary. A bound always
/// encloses everything in its subtree, which keeps intersection queries
/// exact; the other predicates are checked against those same bounds on the
/// way down and see the looseness (see [`RTree::query`]).
///
/// Regions are not unique keys: inserting the same region twice stores two
/// entries.
pub struct RTree<T, P> {
    root: Node<T, P>,
    branching: usize,
    len: usize,
}

enum Node<T, P> {
    Leaf(Vec<(Region<T>, P)>),
    Internal(Vec<Child<T, P>>),
}

struct Child<T, P> {
    bound: Region<T>,
    node: Node<T, P>,
}

impl<T: Scalar, P> Default for RTree<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar, P> RTree<T, P> {
    /// Create an empty tree with the default leaf capacity of 3.
    pub fn new() -> Self {
        Self::with_branching(3)
    }

    /// Create an empty tree that splits leaves at `branching` entries.
    ///
    /// A zero capacity silently collapses to one.
    pub fn with_branching(branching: usize) -> Self {
        Self {
            root: Node::Leaf(Vec::new()),
            branching: branching.max(1),
            len: 0,
        }
    }

    /// Number of entries stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree stores no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The leaf capacity this tree splits at.
    pub fn branching(&self) -> usize {
        self.branching
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.root = Node::Leaf(Vec::new());
        self.len = 0;
    }

    /// Insert `payload` under `region`.
    pub fn insert(&mut self, region: Region<T>, payload: P) {
        self.root.insert(self.branching, region, payload);
        self.len += 1;
    }

    /// Collect all entries whose region satisfies `pred`.
    ///
    /// At an internal node, `pred` is evaluated against each child's
    /// recorded bound and the whole subtree is skipped when the bound fails.
    /// Querying an empty tree returns an empty result.
    pub fn query<F>(&self, pred: F) -> Vec<(Region<T>, P)>
    where
        F: Fn(&Region<T>) -> bool,
        P: Clone,
    {
        let mut out = Vec::new();
        self.root.collect(&pred, &mut out);
        out
    }

    /// Remove and return all entries whose region satisfies `pred`.
    ///
    /// Subtree pruning works as in [`RTree::query`]. Recorded bounds are not
    /// recomputed after entries leave; they keep enclosing the removed area.
    pub fn query_remove<F>(&mut self, pred: F) -> Vec<(Region<T>, P)>
    where
        F: Fn(&Region<T>) -> bool,
    {
        let mut out = Vec::new();
        self.root.drain(&pred, &mut out);
        self.len -= out.len();
        out
    }

    /// All entries whose region intersects `region`.
    pub fn search(&self, region: &Region<T>) -> Vec<(Region<T>, P)>
    where
        P: Clone,
    {
        self.query(|r| r.intersects(region))
    }

    /// All entries stored under exactly `region`.
    pub fn find(&self, region: &Region<T>) -> Vec<(Region<T>, P)>
    where
        P: Clone,
    {
        self.query(|r| r == region)
    }

    /// All entries whose region lies entirely inside `region`.
    pub fn search_inside(&self, region: &Region<T>) -> Vec<(Region<T>, P)>
    where
        P: Clone,
    {
        self.query(|r| region.contains(r))
    }

    /// All entries whose region does not intersect `region`.
    pub fn search_outside(&self, region: &Region<T>) -> Vec<(Region<T>, P)>
    where
        P: Clone,
    {
        self.query(|r| !r.intersects(region))
    }

    /// Remove and return all entries whose region intersects `region`.
    pub fn remove_intersecting(&mut self, region: &Region<T>) -> Vec<(Region<T>, P)> {
        self.query_remove(|r| r.intersects(region))
    }

    /// Remove and return all entries stored under exactly `region`.
    ///
    /// Removing a region that is not present is a no-op returning nothing.
    pub fn remove_equal(&mut self, region: &Region<T>) -> Vec<(Region<T>, P)> {
        self.query_remove(|r| r == region)
    }

    /// Remove and return all entries whose region lies entirely inside `region`.
    pub fn remove_inside(&mut self, region: &Region<T>) -> Vec<(Region<T>, P)> {
        self.query_remove(|r| region.contains(r))
    }

    /// Remove and return all entries whose region does not intersect `region`.
    pub fn remove_outside(&mut self, region: &Region<T>) -> Vec<(Region<T>, P)> {
        self.query_remove(|r| !r.intersects(region))
    }
}

impl<T: Scalar, P> Node<T, P> {
    fn insert(&mut self, branching: usize, region: Region<T>, payload: P) {
        match self {
            Self::Internal(children) => {
                let best = choose_child(children, &region);
                let child = &mut children[best];
                child.bound = child.bound.union(&region);
                child.node.insert(branching, region, payload);
            }
            Self::Leaf(entries) => {
                entries.push((region, payload));
                if entries.len() >= branching {
                    // Give every resident entry its own leaf child; the node
                    // keeps this fan-out until the children split in turn.
                    let children = core::mem::take(entries)
                        .into_iter()
                        .map(|(r, p)| Child {
                            bound: r,
                            node: Self::Leaf(vec![(r, p)]),
                        })
                        .collect();
                    *self = Self::Internal(children);
                }
            }
        }
    }

    fn collect<F>(&self, pred: &F, out: &mut Vec<(Region<T>, P)>)
    where
        F: Fn(&Region<T>) -> bool,
        P: Clone,
    {
        match self {
            Self::Leaf(entries) => {
                for (r, p) in entries {
                    if pred(r) {
                        out.push((*r, p.clone()));
                    }
                }
            }
            Self::Internal(children) => {
                for c in children {
                    if pred(&c.bound) {
                        c.node.collect(pred, out);
                    }
                }
            }
        }
    }

    fn drain<F>(&mut self, pred: &F, out: &mut Vec<(Region<T>, P)>)
    where
        F: Fn(&Region<T>) -> bool,
    {
        match self {
            Self::Leaf(entries) => {
                out.extend(entries.extract_if(.., |(r, _)| pred(r)));
            }
            Self::Internal(children) => {
                for c in children {
                    if pred(&c.bound) {
                        c.node.drain(pred, out);
                    }
                }
            }
        }
    }

    fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Internal(children) => {
                1 + children.iter().map(|c| c.node.depth()).max().unwrap_or(0)
            }
        }
    }
}

/// Index of the child whose bound grows the least when enclosing `region`.
/// Ties resolve to the first child encountered.
fn choose_child<T: Scalar, P>(children: &[Child<T, P>], region: &Region<T>) -> usize {
    let mut best = 0_usize;
    let mut best_growth: Option<T::Acc> = None;
    for (i, c) in children.iter().enumerate() {
        let grown = c.bound.union(region);
        let growth = area(&grown) - area(&c.bound);
        if best_growth.map(|bg| growth < bg).unwrap_or(true) {
            best_growth = Some(growth);
            best = i;
        }
    }
    best
}

impl<T: Scalar, P> Debug for RTree<T, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RTree")
            .field("branching", &self.branching)
            .field("len", &self.len)
            .field("depth", &self.root.depth())
            .finish_non_exhaustive()
    }
}
