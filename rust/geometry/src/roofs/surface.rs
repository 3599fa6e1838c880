// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh assembly shared by the roof builders

use crate::footprint::{Footprint, Orientation};
use crate::mesh::{calculate_normals, Mesh};
use nalgebra::{Point2, Point3};
use smallvec::SmallVec;

/// Face corners closer than this collapse into one
const COINCIDENT_EPSILON: f64 = 1e-9;

/// Lift a footprint point to `elevation`
#[inline]
pub(crate) fn lift(point: &Point2<f64>, elevation: f64) -> Point3<f64> {
    Point3::new(point.x, point.y, elevation)
}

/// Accumulates roof or wall faces into a [`Mesh`]
///
/// Faces are given in footprint edge order (edge start, edge end, then the
/// corners above). On a clockwise footprint every face is reversed so normals
/// keep pointing away from the building.
pub(crate) struct SurfaceBuilder {
    mesh: Mesh,
    reversed: bool,
}

impl SurfaceBuilder {
    pub(crate) fn new(winding: Orientation) -> Self {
        Self {
            mesh: Mesh::new(),
            reversed: winding == Orientation::Clockwise,
        }
    }

    /// Builder wound to match `footprint`, sized for `faces_per_edge`
    /// quads per footprint edge
    pub(crate) fn for_footprint(footprint: &Footprint, faces_per_edge: usize) -> Self {
        let faces = footprint.len() * faces_per_edge;
        Self {
            mesh: Mesh::with_capacity(faces * 4, faces * 6),
            reversed: footprint.orientation() == Orientation::Clockwise,
        }
    }

    /// Add a shared vertex, returning its index
    #[inline]
    pub(crate) fn vertex(&mut self, position: Point3<f64>) -> u32 {
        self.mesh.push_position(position)
    }

    /// Add a triangle over existing vertices, honoring the footprint winding
    #[inline]
    pub(crate) fn triangle(&mut self, a: u32, b: u32, c: u32) {
        if self.reversed {
            self.mesh.add_triangle(a, c, b);
        } else {
            self.mesh.add_triangle(a, b, c);
        }
    }

    /// Add a planar convex face with its own vertices, fanned from the first
    /// corner
    ///
    /// Consecutive coincident corners are merged, so a quad with a collapsed
    /// side becomes a triangle; faces left with fewer than 3 corners are
    /// dropped.
    pub(crate) fn face(&mut self, corners: &[Point3<f64>]) {
        let mut unique: SmallVec<[Point3<f64>; 4]> = SmallVec::new();
        for corner in corners {
            let duplicate = unique
                .last()
                .is_some_and(|last| (corner - last).norm() < COINCIDENT_EPSILON);
            if !duplicate {
                unique.push(*corner);
            }
        }
        while unique.len() > 1
            && (unique[0] - unique[unique.len() - 1]).norm() < COINCIDENT_EPSILON
        {
            unique.pop();
        }
        if unique.len() < 3 {
            return;
        }

        let first = self.vertex(unique[0]);
        let mut previous = self.vertex(unique[1]);
        for corner in &unique[2..] {
            let current = self.vertex(*corner);
            self.triangle(first, previous, current);
            previous = current;
        }
    }

    /// Finish the mesh, deriving normals from face winding
    pub(crate) fn finish(mut self) -> Mesh {
        calculate_normals(&mut self.mesh);
        self.mesh
    }
}
