// Copyright 2025 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between kurbo rectangles and origin/extent regions.

use groundcover_rtree::Region;
use kurbo::Rect;

/// Convert a kurbo rect into the index's origin/extent region.
pub fn rect_to_region(r: Rect) -> Region<f64> {
    Region::new(r.x0, r.y0, r.x1 - r.x0, r.y1 - r.y0)
}

/// Convert an origin/extent region back into a kurbo rect.
pub fn region_to_rect(r: Region<f64>) -> Rect {
    Rect::new(r.x, r.y, r.x + r.w, r.y + r.h)
}
