// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};
use tessera_flat::FlatRangeError;

/// A geometry whose coordinates live in a single flat buffer.
///
/// Implementors provide storage access, their extent, and a change hook;
/// transforms are supplied by the provided methods, which forward to
/// [`scale_geometry`](crate::scale_geometry) and
/// [`translate_geometry`](crate::translate_geometry).
pub trait SimpleGeometry {
    /// Axis-aligned bounds of the geometry's X/Y components.
    fn extent(&self) -> Rect;

    /// Number of values per coordinate tuple.
    fn stride(&self) -> usize;

    /// Mutable access to the coordinate buffer, or `None` if the geometry has none.
    fn flat_coordinates_mut(&mut self) -> Option<&mut [f64]>;

    /// Called once after the coordinates have been mutated.
    fn changed(&mut self);

    /// Scales the geometry by `sx`, `sy` about `origin`.
    ///
    /// Without an origin the geometry scales about the center of its extent.
    fn scale(&mut self, sx: f64, sy: f64, origin: Option<Point>) -> Result<(), FlatRangeError> {
        crate::scale_geometry(self, sx, sy, origin)
    }

    /// Moves the geometry by `delta`.
    fn translate(&mut self, delta: Vec2) -> Result<(), FlatRangeError> {
        crate::translate_geometry(self, delta)
    }
}
