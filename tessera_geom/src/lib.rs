// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tessera_geom --heading-base-level=0

//! Tessera Geom: transforms for geometries backed by flat coordinate buffers.
//!
//! Points, line strings, polygons and their multi variants can all store
//! their coordinates as one flat `[f64]` buffer with a fixed stride. This
//! crate lets such geometries be scaled and translated as a whole without the
//! caller knowing that layout. It consists of:
//! - [`SimpleGeometry`]: the seam a geometry implements. It exposes the
//!   geometry's extent, stride, and coordinate buffer, plus a
//!   [`changed`](SimpleGeometry::changed) hook.
//! - [`scale_geometry`] / [`translate_geometry`]: the transforms, also
//!   available as provided methods on the trait.
//! - [`FlatGeometry`]: a ready-made owned geometry with a [`GeometryLayout`]
//!   and a revision counter.
//!
//! The numeric work is done by [`tessera_flat`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use tessera_geom::{FlatGeometry, SimpleGeometry};
//!
//! let mut rect = FlatGeometry::from_points([
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 4.0),
//!     Point::new(0.0, 4.0),
//! ]);
//!
//! // No origin: scale about the center of the extent, (5, 2).
//! rect.scale(2.0, 2.0, None).unwrap();
//! assert_eq!(
//!     rect.coordinates(),
//!     &[-5.0, -2.0, 15.0, -2.0, 15.0, 6.0, -5.0, 6.0]
//! );
//! assert_eq!(rect.revision(), 1);
//! ```
//!
//! ## Change notification
//!
//! A successful transform of a non-empty geometry calls
//! [`SimpleGeometry::changed`] exactly once. Geometries without coordinates
//! are left untouched and are not notified. Callers are expected to
//! serialize mutations of a geometry; the `&mut` receiver enforces that.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod flat_geometry;
mod geometry;
mod layout;
mod transform;

pub use flat_geometry::FlatGeometry;
pub use geometry::SimpleGeometry;
pub use layout::GeometryLayout;
pub use transform::{scale_geometry, translate_geometry};

pub use tessera_flat::FlatRangeError;
