// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

use crate::range::{FlatRange, FlatRangeError};

/// Computes the axis-aligned bounds of the X/Y components of `range`.
///
/// Returns `Ok(None)` when the range holds no tuples. Components beyond Y do
/// not contribute. NaN components are ignored, following [`f64::min`] and
/// [`f64::max`].
///
/// ```rust
/// use kurbo::Rect;
/// use tessera_flat::{FlatRange, extent};
///
/// let coords = [0.0, 0.0, 10.0, 0.0, 10.0, 4.0];
/// let bounds = extent(&coords, FlatRange::full(6, 2).unwrap()).unwrap();
/// assert_eq!(bounds, Some(Rect::new(0.0, 0.0, 10.0, 4.0)));
/// ```
pub fn extent(src: &[f64], range: FlatRange) -> Result<Option<Rect>, FlatRangeError> {
    range.check(src.len())?;
    if range.is_empty() {
        return Ok(None);
    }
    let mut bounds = Rect::new(
        f64::INFINITY,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NEG_INFINITY,
    );
    for tuple in src[range.offset()..range.end()].chunks_exact(range.stride()) {
        bounds.x0 = bounds.x0.min(tuple[0]);
        bounds.y0 = bounds.y0.min(tuple[1]);
        bounds.x1 = bounds.x1.max(tuple[0]);
        bounds.y1 = bounds.y1.max(tuple[1]);
    }
    Ok(Some(bounds))
}
