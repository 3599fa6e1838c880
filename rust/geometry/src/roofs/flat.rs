// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Flat roof - the footprint triangulated at eave height

use super::surface::{lift, SurfaceBuilder};
use super::{RoofBuilder, RoofGeometry};
use crate::factory::RoofType;
use crate::footprint::{Footprint, Orientation};
use crate::params::RoofParams;
use crate::triangulation::triangulate_polygon;
use crate::Result;

/// Flat roof builder
/// Shares the footprint vertices; every triangle faces +Z
pub struct FlatRoofBuilder;

impl RoofBuilder for FlatRoofBuilder {
    fn build(&self, footprint: &Footprint, params: &RoofParams) -> Result<RoofGeometry> {
        let points = footprint.points();
        let indices = triangulate_polygon(points)?;

        let mut surface = SurfaceBuilder::new(Orientation::CounterClockwise);
        for p in points {
            surface.vertex(lift(p, params.wall_height));
        }

        // earcut winding is not tied to the input winding, so orient each
        // triangle on its own
        for tri in indices.chunks_exact(3) {
            let (a, b, c) = (tri[0], tri[1], tri[2]);
            let ab = points[b] - points[a];
            let ac = points[c] - points[a];
            let (a, b, c) = (a as u32, b as u32, c as u32);
            if ab.perp(&ac) >= 0.0 {
                surface.triangle(a, b, c);
            } else {
                surface.triangle(a, c, b);
            }
        }

        Ok(RoofGeometry::roof_only(surface.finish()))
    }

    fn roof_type(&self) -> RoofType {
        RoofType::Flat
    }
}
