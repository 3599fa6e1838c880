// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pitched (single slope / shed) roof
//!
//! One tilted plane rising across the ridge direction. Edges whose ends sit
//! at different heights get a wall face filling the gap down to the eave.

use super::surface::{lift, SurfaceBuilder};
use super::{RoofBuilder, RoofGeometry};
use crate::analysis::PolygonAnalysis;
use crate::factory::RoofType;
use crate::footprint::Footprint;
use crate::height::roof_height;
use crate::params::RoofParams;
use crate::Result;
use nalgebra::Point2;

/// Elevation differences below this count as level
pub const ELEVATION_EPSILON: f64 = 1e-6;

/// Single-slope roof builder
pub struct PitchedRoofBuilder;

/// Elevation of every footprint vertex on the tilted plane
///
/// The lowest vertex along the slope direction sits at `wall_height`, the
/// highest at `wall_height + rise`.
fn slope_elevations(
    points: &[Point2<f64>],
    analysis: &PolygonAnalysis,
    wall_height: f64,
    rise: f64,
) -> Vec<f64> {
    let slope = analysis.slope_direction();
    let offsets: Vec<f64> = points.iter().map(|p| p.coords.dot(&slope)).collect();

    let (min, max) = offsets
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), &d| (lo.min(d), hi.max(d)));
    let extent = max - min;

    if extent < ELEVATION_EPSILON {
        tracing::debug!(extent, "footprint has no extent across the ridge, slope stays level");
        return vec![wall_height; points.len()];
    }

    offsets
        .iter()
        .map(|d| wall_height + (d - min) / extent * rise)
        .collect()
}

impl RoofBuilder for PitchedRoofBuilder {
    fn build(&self, footprint: &Footprint, params: &RoofParams) -> Result<RoofGeometry> {
        let analysis = PolygonAnalysis::analyze(footprint, params.roof_rotation);
        // A single slope runs the whole width, twice the run of a ridged roof
        let rise = roof_height(analysis.width * 2.0, params.roof_pitch);

        let points = footprint.points();
        let elevations = slope_elevations(points, &analysis, params.wall_height, rise);

        let mut roof = SurfaceBuilder::for_footprint(footprint, 1);
        for (p, &z) in points.iter().zip(&elevations) {
            roof.vertex(lift(p, z));
        }
        let mean_z = elevations.iter().sum::<f64>() / elevations.len() as f64;
        let center = roof.vertex(lift(&analysis.centroid, mean_z));

        let n = points.len();
        for i in 0..n {
            roof.triangle(i as u32, ((i + 1) % n) as u32, center);
        }

        let mut walls = SurfaceBuilder::for_footprint(footprint, 1);
        for i in 0..n {
            let j = (i + 1) % n;
            let (za, zb) = (elevations[i], elevations[j]);
            if (za - zb).abs() <= ELEVATION_EPSILON {
                continue;
            }
            walls.face(&[
                lift(&points[i], params.wall_height),
                lift(&points[j], params.wall_height),
                lift(&points[j], zb),
                lift(&points[i], za),
            ]);
        }

        Ok(RoofGeometry::with_gables(roof.finish(), walls.finish()))
    }

    fn roof_type(&self) -> RoofType {
        RoofType::Pitched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roofs::tests::rect;
    use approx::assert_relative_eq;

    #[test]
    fn test_slope_spans_full_width() {
        let footprint = rect(10.0, 4.0);
        let params = RoofParams::new(3.0, 30.0, 0.0);
        let geometry = PitchedRoofBuilder.build(&footprint, &params).unwrap();
        let roof = &geometry.roof_mesh;

        // Ridge along X, slope rises toward +Y
        let rise = roof_height(8.0, 30.0);
        assert_eq!(roof.vertex(0).z, 3.0);
        assert_eq!(roof.vertex(1).z, 3.0);
        assert_relative_eq!(roof.vertex(2).z as f64, 3.0 + rise, epsilon = 1e-5);
        assert_relative_eq!(roof.vertex(3).z as f64, 3.0 + rise, epsilon = 1e-5);

        // Fan center at the mean elevation
        assert_relative_eq!(roof.vertex(4).z as f64, 3.0 + rise / 2.0, epsilon = 1e-5);
        assert_eq!(roof.triangle_count(), 4);
    }

    #[test]
    fn test_roof_is_planar() {
        let footprint = rect(10.0, 4.0);
        let roof = PitchedRoofBuilder
            .build(&footprint, &RoofParams::new(3.0, 25.0, 20.0))
            .unwrap()
            .roof_mesh;

        let first: Vec<f32> = roof.normals[0..3].to_vec();
        for n in roof.normals.chunks_exact(3) {
            for k in 0..3 {
                assert_relative_eq!(n[k], first[k], epsilon = 1e-5);
            }
        }
        assert!(first[2] > 0.0);
    }

    #[test]
    fn test_walls_only_under_sloped_edges() {
        let footprint = rect(10.0, 4.0);
        let geometry = PitchedRoofBuilder
            .build(&footprint, &RoofParams::new(3.0, 30.0, 0.0))
            .unwrap();
        let walls = geometry.gable_mesh.unwrap();

        // The two side edges climb; the eave and high edges are level
        assert_eq!(walls.triangle_count(), 2);
        assert_eq!(walls.vertex_count(), 6);
        for n in walls.normals.chunks_exact(3) {
            assert!(n[2].abs() < 1e-5, "wall normal {:?} is not horizontal", n);
        }
    }

    #[test]
    fn test_zero_pitch_is_level() {
        let geometry = PitchedRoofBuilder
            .build(&rect(10.0, 4.0), &RoofParams::new(2.5, 0.0, 0.0))
            .unwrap();
        for v in geometry.roof_mesh.vertices() {
            assert_eq!(v.z, 2.5);
        }
        assert!(geometry.gable_mesh.unwrap().is_empty());
    }
}
