// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale and translate over flat coordinate buffers.
//!
//! Every operation comes in four shapes that share one output contract:
//! - `op(src, range, ..)` returns a freshly allocated buffer.
//! - `op_into(src, range, .., dest)` overwrites `dest`, reusing its capacity.
//! - `op_in_place(buf, range, ..)` treats `buf` as both source and destination.
//! - `op_slice_in_place(buf, stride, ..)` transforms a whole slice without resizing.
//!
//! Output tuples are packed densely from index 0 regardless of the range
//! offset, and the output always holds exactly `range.len()` values. Only the
//! first two components of each tuple are transformed; the rest are copied.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};

use crate::range::{FlatRange, FlatRangeError};

/// Anisotropic scale factors plus the point they scale about.
///
/// The origin defaults to [`Point::ZERO`]. Factors are not restricted: zero
/// collapses an axis and negative values mirror it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleParams {
    /// Factor applied along the X axis.
    pub sx: f64,
    /// Factor applied along the Y axis.
    pub sy: f64,
    /// Fixed point of the transform.
    pub origin: Point,
}

impl ScaleParams {
    /// Scale by `sx`, `sy` about the coordinate origin.
    #[must_use]
    pub const fn new(sx: f64, sy: f64) -> Self {
        Self {
            sx,
            sy,
            origin: Point::ZERO,
        }
    }

    /// Scale by the same factor on both axes about the coordinate origin.
    #[must_use]
    pub const fn uniform(s: f64) -> Self {
        Self::new(s, s)
    }

    /// Returns these factors scaling about `origin` instead.
    #[must_use]
    pub const fn about(self, origin: Point) -> Self {
        Self { origin, ..self }
    }

    /// Applies the transform to a single point.
    ///
    /// An axis whose factor is exactly `1.0` is returned untouched, since
    /// `(v - o) + o` does not round-trip for every `v` and `o`.
    #[must_use]
    pub fn apply(&self, pt: Point) -> Point {
        Point::new(
            scale_axis(pt.x, self.sx, self.origin.x),
            scale_axis(pt.y, self.sy, self.origin.y),
        )
    }
}

#[inline]
fn scale_axis(v: f64, factor: f64, origin: f64) -> f64 {
    if factor == 1.0 {
        v
    } else {
        (v - origin) * factor + origin
    }
}

impl Default for ScaleParams {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

/// Scales the tuples of `range` into a new, densely packed buffer.
///
/// ```rust
/// use tessera_flat::{FlatRange, ScaleParams, scale};
///
/// let range = FlatRange::full(4, 2).unwrap();
/// let out = scale(&[1.0, 2.0, 3.0, 4.0], range, ScaleParams::new(2.0, 3.0)).unwrap();
/// assert_eq!(out, [2.0, 6.0, 6.0, 12.0]);
/// ```
pub fn scale(
    src: &[f64],
    range: FlatRange,
    params: ScaleParams,
) -> Result<Vec<f64>, FlatRangeError> {
    let mut dest = Vec::new();
    scale_into(src, range, params, &mut dest)?;
    Ok(dest)
}

/// Scales the tuples of `range` into `dest`.
///
/// Any previous contents of `dest` are discarded; on success it holds exactly
/// `range.len()` values.
pub fn scale_into(
    src: &[f64],
    range: FlatRange,
    params: ScaleParams,
    dest: &mut Vec<f64>,
) -> Result<(), FlatRangeError> {
    map_into(src, range, dest, |pt| params.apply(pt))
}

/// Scales the tuples of `range`, writing the result back into `buf`.
///
/// The output is packed from index 0 and `buf` is truncated to `range.len()`
/// values, exactly as if `buf` were both source and destination of
/// [`scale_into`]. A non-zero `range.offset()` therefore moves the range to
/// the front of the buffer.
pub fn scale_in_place(
    buf: &mut Vec<f64>,
    range: FlatRange,
    params: ScaleParams,
) -> Result<(), FlatRangeError> {
    map_in_place(buf, range, |pt| params.apply(pt))
}

/// Scales every tuple of `buf` in place.
///
/// `buf.len()` must be a multiple of `stride`. The buffer is never resized.
pub fn scale_slice_in_place(
    buf: &mut [f64],
    stride: usize,
    params: ScaleParams,
) -> Result<(), FlatRangeError> {
    map_slice_in_place(buf, stride, |pt| params.apply(pt))
}

/// Translates the tuples of `range` into a new, densely packed buffer.
pub fn translate(src: &[f64], range: FlatRange, delta: Vec2) -> Result<Vec<f64>, FlatRangeError> {
    let mut dest = Vec::new();
    translate_into(src, range, delta, &mut dest)?;
    Ok(dest)
}

/// Translates the tuples of `range` into `dest`, discarding its previous contents.
pub fn translate_into(
    src: &[f64],
    range: FlatRange,
    delta: Vec2,
    dest: &mut Vec<f64>,
) -> Result<(), FlatRangeError> {
    map_into(src, range, dest, |pt| pt + delta)
}

/// Translates the tuples of `range`, writing the result back into `buf`.
///
/// Packing and truncation follow [`scale_in_place`].
pub fn translate_in_place(
    buf: &mut Vec<f64>,
    range: FlatRange,
    delta: Vec2,
) -> Result<(), FlatRangeError> {
    map_in_place(buf, range, |pt| pt + delta)
}

/// Translates every tuple of `buf` in place.
pub fn translate_slice_in_place(
    buf: &mut [f64],
    stride: usize,
    delta: Vec2,
) -> Result<(), FlatRangeError> {
    map_slice_in_place(buf, stride, |pt| pt + delta)
}

fn map_into(
    src: &[f64],
    range: FlatRange,
    dest: &mut Vec<f64>,
    map: impl Fn(Point) -> Point,
) -> Result<(), FlatRangeError> {
    range.check(src.len())?;
    dest.clear();
    dest.reserve(range.len());
    for tuple in src[range.offset()..range.end()].chunks_exact(range.stride()) {
        let pt = map(Point::new(tuple[0], tuple[1]));
        dest.push(pt.x);
        dest.push(pt.y);
        dest.extend_from_slice(&tuple[2..]);
    }
    Ok(())
}

fn map_in_place(
    buf: &mut Vec<f64>,
    range: FlatRange,
    map: impl Fn(Point) -> Point,
) -> Result<(), FlatRangeError> {
    range.check(buf.len())?;
    let stride = range.stride();
    if range.offset() == 0 {
        map_tuples(&mut buf[..range.end()], stride, map);
    } else {
        // The packed index trails the source index, so moving each tuple
        // before rewriting it never clobbers a tuple that is still unread.
        for (i, j) in range.tuple_starts().enumerate() {
            let dst = i * stride;
            buf.copy_within(j..j + stride, dst);
            let pt = map(Point::new(buf[dst], buf[dst + 1]));
            buf[dst] = pt.x;
            buf[dst + 1] = pt.y;
        }
    }
    buf.truncate(range.len());
    Ok(())
}

fn map_slice_in_place(
    buf: &mut [f64],
    stride: usize,
    map: impl Fn(Point) -> Point,
) -> Result<(), FlatRangeError> {
    FlatRange::full(buf.len(), stride)?;
    map_tuples(buf, stride, map);
    Ok(())
}

fn map_tuples(buf: &mut [f64], stride: usize, map: impl Fn(Point) -> Point) {
    for tuple in buf.chunks_exact_mut(stride) {
        let pt = map(Point::new(tuple[0], tuple[1]));
        tuple[0] = pt.x;
        tuple[1] = pt.y;
    }
}
