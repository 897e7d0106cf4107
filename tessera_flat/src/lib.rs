// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tessera_flat --heading-base-level=0

//! Tessera Flat: transforms over flat, strided coordinate buffers.
//!
//! Geometries in Tessera store their coordinates in a single `[f64]` buffer,
//! tuple after tuple. A tuple has `stride` components: the first two are X and
//! Y, anything after that (Z, M) rides along untouched. This crate provides
//! the numeric building blocks that operate on such buffers without knowing
//! anything about points, rings, or polygons:
//! - [`scale`] and friends: anisotropic scale about an origin.
//! - [`translate`] and friends: shift by a [`kurbo::Vec2`].
//! - [`extent`]: X/Y bounding box as a [`kurbo::Rect`].
//!
//! Which tuples participate is described by a [`FlatRange`], a validated
//! half-open range of buffer indices plus the stride. Malformed ranges are
//! reported as [`FlatRangeError`] before any value is written.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use tessera_flat::{FlatRange, ScaleParams, scale_in_place};
//!
//! // A unit square as an X,Y ring.
//! let mut coords = vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
//! let range = FlatRange::full(coords.len(), 2).unwrap();
//!
//! // Double it about its own center.
//! let params = ScaleParams::uniform(2.0).about(Point::new(0.5, 0.5));
//! scale_in_place(&mut coords, range, params).unwrap();
//! assert_eq!(coords, [-0.5, -0.5, 1.5, -0.5, 1.5, 1.5, -0.5, 1.5]);
//! ```
//!
//! ## Output layout
//!
//! Transforms write their output densely from index 0, whatever the range
//! offset, and the output always holds exactly `range.len()` values. A reused
//! destination buffer is truncated or grown to that length. In-place variants
//! behave as if the buffer were its own destination, so a range with a
//! non-zero offset ends up at the front of the buffer.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod extent;
mod range;
mod transform;

pub use extent::extent;
pub use range::{FlatRange, FlatRangeError};
pub use transform::{
    ScaleParams, scale, scale_in_place, scale_into, scale_slice_in_place, translate,
    translate_in_place, translate_into, translate_slice_in_place,
};
