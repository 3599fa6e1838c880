// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Half-hip (jerkinhead) roof - a gable wall clipped by a small hip near the
//! ridge

use super::gabled::RidgeFrame;
use super::surface::{lift, SurfaceBuilder};
use super::{RoofBuilder, RoofGeometry};
use crate::factory::RoofType;
use crate::footprint::Footprint;
use crate::params::RoofParams;
use crate::Result;
use nalgebra::{Point2, Point3};

/// Fraction of the roof rise, measured down from the ridge, taken by the hip
pub const HALF_HIP_CLIP_RATIO: f64 = 0.3;

/// Half-hip roof builder
///
/// Slopes match the gabled roof. Each gable is cut at the clip elevation:
/// a trapezoidal wall below, a hip triangle above reaching the ridge.
pub struct HalfHipRoofBuilder;

/// Point `fraction` of the way from `point` toward its ridge projection,
/// at `elevation`
fn toward_ridge(
    frame: &RidgeFrame,
    point: &Point2<f64>,
    fraction: f64,
    elevation: f64,
) -> Point3<f64> {
    let foot = frame.ridge.project(point, elevation).xy();
    lift(&(point + (foot - point) * fraction), elevation)
}

impl RoofBuilder for HalfHipRoofBuilder {
    fn build(&self, footprint: &Footprint, params: &RoofParams) -> Result<RoofGeometry> {
        let frame = RidgeFrame::new(footprint, params);
        let reach = 1.0 - HALF_HIP_CLIP_RATIO;
        let clip_z = frame.wall_height + frame.rise * reach;

        let mut roof = SurfaceBuilder::for_footprint(footprint, 1);
        let mut gables = SurfaceBuilder::for_footprint(footprint, 1);

        for (a, b) in footprint.edges() {
            if !frame.crosses(&a, &b) {
                roof.face(&frame.slope_quad(&a, &b));
                continue;
            }

            let a_clip = toward_ridge(&frame, &a, reach, clip_z);
            let b_clip = toward_ridge(&frame, &b, reach, clip_z);

            gables.face(&[
                lift(&a, frame.wall_height),
                lift(&b, frame.wall_height),
                b_clip,
                a_clip,
            ]);
            roof.face(&[a_clip, b_clip, frame.crossing(&a, &b)]);
        }

        Ok(RoofGeometry::with_gables(roof.finish(), gables.finish()))
    }

    fn roof_type(&self) -> RoofType {
        RoofType::HalfHip
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::height::roof_height;
    use crate::roofs::tests::rect;
    use crate::roofs::GabledRoofBuilder;
    use approx::assert_relative_eq;

    #[test]
    fn test_rectangle_topology() {
        let geometry = HalfHipRoofBuilder
            .build(&rect(10.0, 4.0), &RoofParams::new(3.0, 30.0, 0.0))
            .unwrap();

        // 2 slope quads + 2 hip triangles on the roof
        assert_eq!(geometry.roof_mesh.vertex_count(), 2 * 4 + 2 * 3);
        // 2 trapezoidal gable walls
        let gables = geometry.gable_mesh.unwrap();
        assert_eq!(gables.vertex_count(), 2 * 4);
        assert_eq!(gables.triangle_count(), 4);
    }

    #[test]
    fn test_gable_walls_stop_at_clip_elevation() {
        let params = RoofParams::new(3.0, 40.0, 0.0);
        let gables = HalfHipRoofBuilder
            .build(&rect(10.0, 4.0), &params)
            .unwrap()
            .gable_mesh
            .unwrap();

        let rise = roof_height(4.0, 40.0);
        let clip_z = 3.0 + rise * (1.0 - HALF_HIP_CLIP_RATIO);
        let top = gables.vertices().map(|v| v.z).fold(f32::MIN, f32::max);
        assert_relative_eq!(top as f64, clip_z, epsilon = 1e-5);

        // Clip points sit 70% of the way to the ridge (y = 2)
        for v in gables.vertices().filter(|v| v.z > 3.0) {
            let expected = if v.y < 2.0 { 1.4 } else { 2.6 };
            assert_relative_eq!(v.y, expected, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_slopes_match_gabled() {
        let footprint = rect(10.0, 4.0);
        let params = RoofParams::default();
        let half_hip = HalfHipRoofBuilder.build(&footprint, &params).unwrap().roof_mesh;
        let gabled = GabledRoofBuilder.build(&footprint, &params).unwrap().roof_mesh;

        // Edge order: slope quad, hip triangle, slope quad, hip triangle
        assert_eq!(half_hip.positions[0..12], gabled.positions[0..12]);
        assert_eq!(half_hip.positions[21..33], gabled.positions[12..24]);
    }

    #[test]
    fn test_hip_triangles_reach_ridge_crossing() {
        let params = RoofParams::new(3.0, 30.0, 0.0);
        let roof = HalfHipRoofBuilder
            .build(&rect(10.0, 4.0), &params)
            .unwrap()
            .roof_mesh;

        let ridge_z = 3.0 + roof_height(4.0, 30.0);
        let clip_z = 3.0 + roof_height(4.0, 30.0) * (1.0 - HALF_HIP_CLIP_RATIO);

        // Hip triangles are vertices 4..7 (east end) and 11..14 (west end):
        // two clip points, then the crossing of the end wall with the ridge
        for (first, x) in [(4, 10.0_f32), (11, 0.0)] {
            for clip in [roof.vertex(first), roof.vertex(first + 1)] {
                assert_relative_eq!(clip.x, x, epsilon = 1e-5);
                assert_relative_eq!(clip.z as f64, clip_z, epsilon = 1e-5);
            }

            let apex = roof.vertex(first + 2);
            assert_relative_eq!(apex.x, x, epsilon = 1e-5);
            assert_relative_eq!(apex.y, 2.0, epsilon = 1e-5);
            assert_relative_eq!(apex.z as f64, ridge_z, epsilon = 1e-5);
        }
    }
}
