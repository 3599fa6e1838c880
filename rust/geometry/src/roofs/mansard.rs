// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mansard roof - a steep lower band under a shallow pyramid cap

use super::surface::{lift, SurfaceBuilder};
use super::{RoofBuilder, RoofGeometry};
use crate::analysis::PolygonAnalysis;
use crate::factory::RoofType;
use crate::footprint::Footprint;
use crate::height::roof_height;
use crate::params::RoofParams;
use crate::Result;
use nalgebra::Point2;

/// Pitch of the lower band, degrees
pub const MANSARD_LOWER_PITCH_DEG: f64 = 70.0;
/// Pitch of the upper cap, degrees
pub const MANSARD_UPPER_PITCH_DEG: f64 = 30.0;
/// Share of the span given to the lower band when sizing its rise
pub const MANSARD_BREAK_RATIO: f64 = 0.4;
/// How far the break-level outline shrinks toward the centroid
pub const MANSARD_INSET_RATIO: f64 = 0.2;

/// Mansard roof builder
///
/// Both pitches are fixed, so `roof_pitch` and `roof_rotation` do not change
/// the result.
pub struct MansardRoofBuilder;

/// Stage elevations for a footprint whose smaller extent is `span`
fn stage_rises(span: f64) -> (f64, f64) {
    let lower = roof_height(span * MANSARD_BREAK_RATIO, MANSARD_LOWER_PITCH_DEG);
    let upper = roof_height(span * (1.0 - MANSARD_BREAK_RATIO), MANSARD_UPPER_PITCH_DEG);
    (lower, upper)
}

impl RoofBuilder for MansardRoofBuilder {
    fn build(&self, footprint: &Footprint, params: &RoofParams) -> Result<RoofGeometry> {
        let analysis = PolygonAnalysis::analyze(footprint, params.roof_rotation);
        let (lower, upper) = stage_rises(analysis.min_extent());
        let break_z = params.wall_height + lower;
        let peak = lift(&analysis.centroid, break_z + upper);

        let centroid = analysis.centroid;
        let inset = |p: &Point2<f64>| {
            lift(&(centroid + (p - centroid) * (1.0 - MANSARD_INSET_RATIO)), break_z)
        };

        let mut roof = SurfaceBuilder::for_footprint(footprint, 2);
        for (a, b) in footprint.edges() {
            let (a_break, b_break) = (inset(&a), inset(&b));
            roof.face(&[
                lift(&a, params.wall_height),
                lift(&b, params.wall_height),
                b_break,
                a_break,
            ]);
            roof.face(&[a_break, b_break, peak]);
        }

        Ok(RoofGeometry::roof_only(roof.finish()))
    }

    fn roof_type(&self) -> RoofType {
        RoofType::Mansard
    }
}
