// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use tessera_flat::{FlatRangeError, ScaleParams};

use crate::geometry::SimpleGeometry;

/// Scales `geometry` in place by `sx`, `sy` about `origin`.
///
/// When `origin` is `None` the center of [`SimpleGeometry::extent`] is used.
/// A geometry without coordinates is left alone and not notified. Otherwise
/// every tuple is scaled and [`SimpleGeometry::changed`] is called once.
///
/// Fails without touching the geometry if its buffer is not a whole number of
/// tuples.
pub fn scale_geometry<G: SimpleGeometry + ?Sized>(
    geometry: &mut G,
    sx: f64,
    sy: f64,
    origin: Option<Point>,
) -> Result<(), FlatRangeError> {
    let origin = origin.unwrap_or_else(|| geometry.extent().center());
    let params = ScaleParams::new(sx, sy).about(origin);
    let stride = geometry.stride();
    let Some(coords) = geometry.flat_coordinates_mut() else {
        return Ok(());
    };
    if coords.is_empty() {
        return Ok(());
    }
    tessera_flat::scale_slice_in_place(coords, stride, params)?;
    geometry.changed();
    Ok(())
}

/// Moves `geometry` in place by `delta`.
///
/// Follows the same empty-geometry and notification rules as [`scale_geometry`].
pub fn translate_geometry<G: SimpleGeometry + ?Sized>(
    geometry: &mut G,
    delta: Vec2,
) -> Result<(), FlatRangeError> {
    let stride = geometry.stride();
    let Some(coords) = geometry.flat_coordinates_mut() else {
        return Ok(());
    };
    if coords.is_empty() {
        return Ok(());
    }
    tessera_flat::translate_slice_in_place(coords, stride, delta)?;
    geometry.changed();
    Ok(())
}
