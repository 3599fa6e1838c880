// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tented (pyramidal) roof - every edge rises to one apex over the centroid

use super::surface::{lift, SurfaceBuilder};
use super::{RoofBuilder, RoofGeometry};
use crate::analysis::PolygonAnalysis;
use crate::factory::RoofType;
use crate::footprint::Footprint;
use crate::height::roof_height;
use crate::params::RoofParams;
use crate::Result;

/// Tented roof builder
///
/// The apex always sits over the vertex centroid, so `roof_rotation` has no
/// effect on the result.
pub struct TentedRoofBuilder;

impl TentedRoofBuilder {
    pub(crate) fn build_surface(footprint: &Footprint, params: &RoofParams) -> RoofGeometry {
        let analysis = PolygonAnalysis::analyze(footprint, params.roof_rotation);
        let rise = roof_height(analysis.min_extent(), params.roof_pitch);

        let mut surface = SurfaceBuilder::for_footprint(footprint, 1);
        for p in footprint.points() {
            surface.vertex(lift(p, params.wall_height));
        }
        let apex = surface.vertex(lift(&analysis.centroid, params.wall_height + rise));

        let n = footprint.len() as u32;
        for i in 0..n {
            surface.triangle(i, (i + 1) % n, apex);
        }

        RoofGeometry::roof_only(surface.finish())
    }
}

impl RoofBuilder for TentedRoofBuilder {
    fn build(&self, footprint: &Footprint, params: &RoofParams) -> Result<RoofGeometry> {
        Ok(Self::build_surface(footprint, params))
    }

    fn roof_type(&self) -> RoofType {
        RoofType::Tented
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roofs::tests::{hexagon, rect};
    use approx::assert_relative_eq;

    #[test]
    fn test_one_triangle_per_edge_sharing_apex() {
        let footprint = hexagon(3.0);
        let mesh = TentedRoofBuilder
            .build(&footprint, &RoofParams::default())
            .unwrap()
            .roof_mesh;

        let n = footprint.len();
        assert_eq!(mesh.triangle_count(), n);
        assert_eq!(mesh.vertex_count(), n + 1);
        for tri in mesh.triangles() {
            assert!(tri.contains(&(n as u32)));
        }
    }

    #[test]
    fn test_apex_height_uses_smaller_extent() {
        let footprint = rect(10.0, 4.0);
        let params = RoofParams::new(3.0, 45.0, 0.0);
        let mesh = TentedRoofBuilder.build(&footprint, &params).unwrap().roof_mesh;

        let apex = mesh.vertex(4);
        assert_relative_eq!(apex.x, 5.0);
        assert_relative_eq!(apex.y, 2.0);
        assert_relative_eq!(apex.z as f64, 3.0 + roof_height(4.0, 45.0), epsilon = 1e-5);
    }

    #[test]
    fn test_rotation_has_no_effect() {
        let footprint = rect(10.0, 4.0);
        let base = TentedRoofBuilder
            .build(&footprint, &RoofParams::new(3.0, 30.0, 0.0))
            .unwrap();
        let rotated = TentedRoofBuilder
            .build(&footprint, &RoofParams::new(3.0, 30.0, 73.0))
            .unwrap();
        assert_eq!(base, rotated);
    }

    #[test]
    fn test_faces_point_up() {
        let mesh = TentedRoofBuilder
            .build(&rect(6.0, 6.0), &RoofParams::default())
            .unwrap()
            .roof_mesh;
        let apex_normal = &mesh.normals[4 * 3..4 * 3 + 3];
        assert!(apex_normal[2] > 0.99);
    }
}
