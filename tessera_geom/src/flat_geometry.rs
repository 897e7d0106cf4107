// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use tessera_flat::{FlatRange, FlatRangeError};

use crate::geometry::SimpleGeometry;
use crate::layout::GeometryLayout;

/// An owned geometry: a [`GeometryLayout`] plus its flat coordinates.
///
/// `FlatGeometry` keeps the coordinate buffer a whole number of tuples long
/// and counts mutations in a revision, bumped by every
/// [`SimpleGeometry::changed`] call. Observers can compare revisions to
/// detect changes without comparing coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlatGeometry {
    layout: GeometryLayout,
    coordinates: Vec<f64>,
    revision: u64,
}

impl FlatGeometry {
    /// Creates a geometry from flat coordinates laid out as `layout`.
    pub fn new(layout: GeometryLayout, coordinates: Vec<f64>) -> Result<Self, FlatRangeError> {
        FlatRange::full(coordinates.len(), layout.stride())?;
        Ok(Self {
            layout,
            coordinates,
            revision: 0,
        })
    }

    /// Creates a geometry with no coordinates.
    #[must_use]
    pub const fn empty(layout: GeometryLayout) -> Self {
        Self {
            layout,
            coordinates: Vec::new(),
            revision: 0,
        }
    }

    /// Creates a single X/Y point.
    #[must_use]
    pub fn point(pt: Point) -> Self {
        Self::from_points([pt])
    }

    /// Creates an X/Y geometry from a sequence of points.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let coordinates = points.into_iter().flat_map(|pt| [pt.x, pt.y]).collect();
        Self {
            layout: GeometryLayout::Xy,
            coordinates,
            revision: 0,
        }
    }

    /// The tuple layout.
    #[must_use]
    pub fn layout(&self) -> GeometryLayout {
        self.layout
    }

    /// The flat coordinates.
    #[must_use]
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// Number of coordinate tuples.
    #[must_use]
    pub fn tuple_count(&self) -> usize {
        self.coordinates.len() / self.layout.stride()
    }

    /// Returns `true` if the geometry has no coordinates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// X/Y of each tuple, in order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.coordinates
            .chunks_exact(self.layout.stride())
            .map(|tuple| Point::new(tuple[0], tuple[1]))
    }

    /// The revision counter, bumped on every change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces layout and coordinates, counting as a change.
    pub fn set_coordinates(
        &mut self,
        layout: GeometryLayout,
        coordinates: Vec<f64>,
    ) -> Result<(), FlatRangeError> {
        FlatRange::full(coordinates.len(), layout.stride())?;
        self.layout = layout;
        self.coordinates = coordinates;
        self.changed();
        Ok(())
    }

    /// Consumes the geometry, returning its coordinates.
    #[must_use]
    pub fn into_coordinates(self) -> Vec<f64> {
        self.coordinates
    }
}

impl SimpleGeometry for FlatGeometry {
    /// Bounds of the coordinates, or [`Rect::ZERO`] when there are none.
    fn extent(&self) -> Rect {
        FlatRange::full(self.coordinates.len(), self.layout.stride())
            .and_then(|range| tessera_flat::extent(&self.coordinates, range))
            .ok()
            .flatten()
            .unwrap_or(Rect::ZERO)
    }

    fn stride(&self) -> usize {
        self.layout.stride()
    }

    fn flat_coordinates_mut(&mut self) -> Option<&mut [f64]> {
        Some(self.coordinates.as_mut_slice())
    }

    fn changed(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::{Point, Rect};
    use tessera_flat::FlatRangeError;

    use super::FlatGeometry;
    use crate::{GeometryLayout, SimpleGeometry};

    #[test]
    fn new_rejects_partial_tuples() {
        assert_eq!(
            FlatGeometry::new(GeometryLayout::Xyz, vec![1.0, 2.0, 3.0, 4.0]),
            Err(FlatRangeError::Misaligned { len: 4, stride: 3 })
        );
        let geom = FlatGeometry::new(GeometryLayout::Xyzm, vec![0.0; 8]).unwrap();
        assert_eq!(geom.tuple_count(), 2);
        assert_eq!(geom.revision(), 0);
    }

    #[test]
    fn extent_covers_xy_only() {
        let geom = FlatGeometry::new(
            GeometryLayout::Xym,
            vec![1.0, -2.0, 100.0, -3.0, 4.0, -100.0],
        )
        .unwrap();
        assert_eq!(geom.extent(), Rect::new(-3.0, -2.0, 1.0, 4.0));
        assert_eq!(FlatGeometry::empty(GeometryLayout::Xy).extent(), Rect::ZERO);
    }

    #[test]
    fn from_points_and_back() {
        let pts = [Point::new(1.0, 2.0), Point::new(3.0, 4.0)];
        let geom = FlatGeometry::from_points(pts);
        assert_eq!(geom.layout(), GeometryLayout::Xy);
        assert_eq!(geom.coordinates(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(geom.points().collect::<Vec<_>>(), pts);
        assert_eq!(FlatGeometry::point(Point::new(5.0, 6.0)).tuple_count(), 1);
    }

    #[test]
    fn changes_bump_revision() {
        let mut geom = FlatGeometry::point(Point::new(1.0, 1.0));
        geom.scale(2.0, 2.0, Some(Point::ZERO)).unwrap();
        assert_eq!(geom.revision(), 1);
        assert_eq!(geom.coordinates(), &[2.0, 2.0]);

        geom.set_coordinates(GeometryLayout::Xyz, vec![0.0, 0.0, 1.0])
            .unwrap();
        assert_eq!(geom.revision(), 2);
        assert!(geom.set_coordinates(GeometryLayout::Xyz, vec![0.0]).is_err());
        assert_eq!(geom.revision(), 2);
        assert_eq!(geom.stride(), 3);
    }

    #[test]
    fn empty_geometry_is_not_notified() {
        let mut geom = FlatGeometry::empty(GeometryLayout::Xyz);
        geom.scale(3.0, 3.0, None).unwrap();
        assert_eq!(geom.revision(), 0);
        assert!(geom.is_empty());
    }
}
