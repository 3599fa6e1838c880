// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hipped roof - slopes on every side meeting a shortened ridge

use super::surface::{lift, SurfaceBuilder};
use super::tented::TentedRoofBuilder;
use super::{RoofBuilder, RoofGeometry};
use crate::analysis::PolygonAnalysis;
use crate::factory::RoofType;
use crate::footprint::Footprint;
use crate::height::roof_height;
use crate::params::RoofParams;
use crate::ridge::RidgeLine;
use crate::Result;

/// Footprints with `length / width` below this are built as a pyramid
pub const HIP_ASPECT_THRESHOLD: f64 = 1.3;

/// Ridge points closer than this are treated as the same point
pub const RIDGE_POINT_EPSILON: f64 = 1e-6;

/// Hipped roof builder
///
/// The ridge is a segment of length `length - width` centered on the
/// centroid. Each footprint vertex climbs to its nearest point on that
/// segment; edges whose ends meet the same ridge point become hip ends.
pub struct HippedRoofBuilder;

impl RoofBuilder for HippedRoofBuilder {
    fn build(&self, footprint: &Footprint, params: &RoofParams) -> Result<RoofGeometry> {
        let analysis = PolygonAnalysis::analyze(footprint, params.roof_rotation);

        let aspect = analysis.aspect_ratio();
        if aspect < HIP_ASPECT_THRESHOLD {
            tracing::debug!(aspect, "near-square footprint, building hipped roof as tented");
            return Ok(TentedRoofBuilder::build_surface(footprint, params));
        }

        let ridge_z = params.wall_height + roof_height(analysis.width, params.roof_pitch);
        let half_length = (analysis.length - analysis.width) / 2.0;
        let ridge = RidgeLine::from_analysis(&analysis);

        let mut roof = SurfaceBuilder::for_footprint(footprint, 1);
        for (a, b) in footprint.edges() {
            let ra = ridge.project_clamped(&a, half_length, ridge_z);
            let rb = ridge.project_clamped(&b, half_length, ridge_z);
            let (a, b) = (lift(&a, params.wall_height), lift(&b, params.wall_height));

            if (ra - rb).norm() < RIDGE_POINT_EPSILON {
                roof.face(&[a, b, ra]);
            } else {
                roof.face(&[a, b, rb, ra]);
            }
        }

        Ok(RoofGeometry::roof_only(roof.finish()))
    }

    fn roof_type(&self) -> RoofType {
        RoofType::Hipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roofs::tests::rect;
    use approx::assert_relative_eq;

    #[test]
    fn test_rectangle_has_two_slopes_and_two_hip_ends() {
        let footprint = rect(8.0, 4.0);
        let params = RoofParams::new(3.0, 45.0, 0.0);
        let roof = HippedRoofBuilder.build(&footprint, &params).unwrap().roof_mesh;

        // 2 quads (4 vertices, 2 triangles) + 2 triangles (3 vertices)
        assert_eq!(roof.vertex_count(), 2 * 4 + 2 * 3);
        assert_eq!(roof.triangle_count(), 2 * 2 + 2);

        let ridge_z = 3.0 + roof_height(4.0, 45.0);
        let top: Vec<_> = roof
            .vertices()
            .filter(|v| (v.z as f64 - ridge_z).abs() < 1e-5)
            .collect();
        assert!(!top.is_empty());
        for v in top {
            assert_relative_eq!(v.y, 2.0);
            assert!(v.x >= 2.0 - 1e-5 && v.x <= 6.0 + 1e-5);
        }
    }

    #[test]
    fn test_near_square_matches_tented() {
        let footprint = rect(5.0, 4.0);
        let params = RoofParams::new(3.0, 30.0, 0.0);
        let hipped = HippedRoofBuilder.build(&footprint, &params).unwrap();
        let tented = TentedRoofBuilder.build(&footprint, &params).unwrap();
        assert_eq!(hipped, tented);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // 5.2 / 4 == 1.3: builds a ridge, not a pyramid
        let footprint = rect(5.2, 4.0);
        let params = RoofParams::default();
        let hipped = HippedRoofBuilder.build(&footprint, &params).unwrap();
        let tented = TentedRoofBuilder.build(&footprint, &params).unwrap();
        assert_ne!(hipped, tented);
        assert_eq!(hipped.roof_mesh.vertex_count(), 14);
    }

    #[test]
    fn test_rotated_ridge_stays_centered() {
        let footprint = rect(12.0, 4.0);
        let params = RoofParams::new(0.0, 30.0, 90.0);
        let roof = HippedRoofBuilder.build(&footprint, &params).unwrap().roof_mesh;

        let ridge_z = roof_height(4.0, 30.0) as f32;
        for v in roof.vertices().filter(|v| (v.z - ridge_z).abs() < 1e-5) {
            assert_relative_eq!(v.x, 6.0, epsilon = 1e-5);
        }
    }
}
