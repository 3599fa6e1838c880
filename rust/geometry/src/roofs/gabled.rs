// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Gabled roof - two slopes under a full-length ridge, closed by gable walls

use super::surface::{lift, SurfaceBuilder};
use super::{RoofBuilder, RoofGeometry};
use crate::analysis::PolygonAnalysis;
use crate::factory::RoofType;
use crate::footprint::Footprint;
use crate::height::roof_height;
use crate::params::RoofParams;
use crate::ridge::RidgeLine;
use crate::Result;
use nalgebra::{Point2, Point3};

/// Gabled roof builder
///
/// Edges with both ends on one side of the ridge slope up to the (unclamped)
/// ridge line. Edges that pass under the ridge become triangular gable walls
/// topped by the crossing point.
pub struct GabledRoofBuilder;

/// Ridge line and elevations shared by the ridged builders
pub(super) struct RidgeFrame {
    pub ridge: RidgeLine,
    pub wall_height: f64,
    pub ridge_z: f64,
    pub rise: f64,
}

impl RidgeFrame {
    pub(super) fn new(footprint: &Footprint, params: &RoofParams) -> Self {
        let analysis = PolygonAnalysis::analyze(footprint, params.roof_rotation);
        let rise = roof_height(analysis.width, params.roof_pitch);
        Self {
            ridge: RidgeLine::from_analysis(&analysis),
            wall_height: params.wall_height,
            ridge_z: params.wall_height + rise,
            rise,
        }
    }

    /// True when the edge runs under the ridge line
    #[inline]
    pub(super) fn crosses(&self, a: &Point2<f64>, b: &Point2<f64>) -> bool {
        self.ridge.side(a) != self.ridge.side(b)
    }

    /// Slope quad from edge `a -> b` up to the ridge
    pub(super) fn slope_quad(&self, a: &Point2<f64>, b: &Point2<f64>) -> [Point3<f64>; 4] {
        [
            lift(a, self.wall_height),
            lift(b, self.wall_height),
            self.ridge.project(b, self.ridge_z),
            self.ridge.project(a, self.ridge_z),
        ]
    }

    /// Point under the ridge where edge `a -> b` crosses it, at ridge height
    #[inline]
    pub(super) fn crossing(&self, a: &Point2<f64>, b: &Point2<f64>) -> Point3<f64> {
        self.ridge.crossing(a, b, self.ridge_z)
    }
}

impl RoofBuilder for GabledRoofBuilder {
    fn build(&self, footprint: &Footprint, params: &RoofParams) -> Result<RoofGeometry> {
        let frame = RidgeFrame::new(footprint, params);

        let mut roof = SurfaceBuilder::for_footprint(footprint, 1);
        let mut gables = SurfaceBuilder::for_footprint(footprint, 1);

        for (a, b) in footprint.edges() {
            if frame.crosses(&a, &b) {
                gables.face(&[
                    lift(&a, frame.wall_height),
                    lift(&b, frame.wall_height),
                    frame.crossing(&a, &b),
                ]);
            } else {
                roof.face(&frame.slope_quad(&a, &b));
            }
        }

        Ok(RoofGeometry::with_gables(roof.finish(), gables.finish()))
    }

    fn roof_type(&self) -> RoofType {
        RoofType::Gabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roofs::tests::{rect, square};
    use approx::assert_relative_eq;

    #[test]
    fn test_square_topology() {
        let geometry = GabledRoofBuilder
            .build(&square(4.0), &RoofParams::new(3.0, 30.0, 0.0))
            .unwrap();

        assert_eq!(geometry.roof_mesh.vertex_count(), 8);
        assert_eq!(geometry.roof_mesh.triangle_count(), 4);

        let gables = geometry.gable_mesh.unwrap();
        assert_eq!(gables.vertex_count(), 6);
        assert_eq!(gables.triangle_count(), 2);
    }

    #[test]
    fn test_rotated_ridge_swaps_slopes_and_gables() {
        // Ridge along X: the short ends (x = 0, x = 10) are gables
        let footprint = rect(10.0, 4.0);
        let gables = GabledRoofBuilder
            .build(&footprint, &RoofParams::new(3.0, 30.0, 0.0))
            .unwrap()
            .gable_mesh
            .unwrap();
        for v in gables.vertices() {
            assert!(v.x == 0.0 || v.x == 10.0);
        }

        // Turned 90°: the ridge crosses the long sides instead
        let gables = GabledRoofBuilder
            .build(&footprint, &RoofParams::new(3.0, 30.0, 90.0))
            .unwrap()
            .gable_mesh
            .unwrap();
        for v in gables.vertices() {
            assert!(v.y == 0.0 || v.y == 4.0);
        }
    }

    #[test]
    fn test_slopes_face_up_and_gables_face_out() {
        let geometry = GabledRoofBuilder
            .build(&rect(10.0, 4.0), &RoofParams::default())
            .unwrap();

        for n in geometry.roof_mesh.normals.chunks_exact(3) {
            assert!(n[2] > 0.0);
        }

        let gables = geometry.gable_mesh.unwrap();
        for (v, n) in gables.vertices().zip(gables.normals.chunks_exact(3)) {
            assert!(n[2].abs() < 1e-5);
            // outward: -X at the x = 0 end, +X at the x = 10 end
            assert_relative_eq!(n[0], if v.x < 5.0 { -1.0 } else { 1.0 }, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_ridge_frame_crossing_height() {
        let frame = RidgeFrame::new(&square(4.0), &RoofParams::new(3.0, 45.0, 0.0));
        assert_relative_eq!(frame.rise, 2.0, epsilon = 1e-12);
        let c = frame.crossing(&Point2::new(4.0, 0.0), &Point2::new(4.0, 4.0));
        assert_relative_eq!(c.z, 5.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 2.0);
    }
}
