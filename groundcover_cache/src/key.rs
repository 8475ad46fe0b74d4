// Copyright 2025 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical keys for rectangle-addressed lookups.

use groundcover_rtree::Region;

/// Canonical key for a region: the bit patterns of its four fields.
///
/// The encoding is deterministic and lossless, so the exact region can be
/// recovered for geometric cleanup when an entry is evicted by key. Bitwise
/// equality is stricter than `f64` equality: `-0.0` and `0.0` form distinct
/// keys. Keys are used only for recency lookups; geometry always works on
/// the raw fields.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub(crate) struct RegionKey([u64; 4]);

impl RegionKey {
    pub(crate) fn new(r: &Region<f64>) -> Self {
        Self([r.x.to_bits(), r.y.to_bits(), r.w.to_bits(), r.h.to_bits()])
    }

    /// The exact region this key encodes.
    pub(crate) fn region(self) -> Region<f64> {
        let [x, y, w, h] = self.0;
        Region::new(
            f64::from_bits(x),
            f64::from_bits(y),
            f64::from_bits(w),
            f64::from_bits(h),
        )
    }
}
