// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Roof geometry factory - dispatch from archetype to builder

use crate::footprint::Footprint;
use crate::params::RoofParams;
use crate::roofs::{
    FlatRoofBuilder, GabledRoofBuilder, HalfHipRoofBuilder, HippedRoofBuilder,
    MansardRoofBuilder, PitchedRoofBuilder, RoofBuilder, RoofGeometry, TentedRoofBuilder,
};
use crate::Result;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Roof archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum RoofType {
    #[default]
    Flat,
    /// Single slope (shed)
    Pitched,
    /// Pyramid
    Tented,
    Hipped,
    Gabled,
    /// Jerkinhead
    HalfHip,
    Mansard,
}

impl RoofType {
    pub const ALL: [RoofType; 7] = [
        RoofType::Flat,
        RoofType::Pitched,
        RoofType::Tented,
        RoofType::Hipped,
        RoofType::Gabled,
        RoofType::HalfHip,
        RoofType::Mansard,
    ];

    /// Parse an archetype tag, case-insensitively
    ///
    /// Unknown tags fall back to [`RoofType::Flat`].
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "flat" => RoofType::Flat,
            "pitched" | "shed" | "single-slope" => RoofType::Pitched,
            "tented" | "pyramid" | "pyramidal" => RoofType::Tented,
            "hipped" | "hip" => RoofType::Hipped,
            "gabled" | "gable" => RoofType::Gabled,
            "half-hip" | "half_hip" | "halfhip" | "jerkinhead" => RoofType::HalfHip,
            "mansard" => RoofType::Mansard,
            other => {
                tracing::debug!(tag = other, "unknown roof type, falling back to flat");
                RoofType::Flat
            }
        }
    }

    /// Canonical tag
    pub fn as_tag(self) -> &'static str {
        match self {
            RoofType::Flat => "flat",
            RoofType::Pitched => "pitched",
            RoofType::Tented => "tented",
            RoofType::Hipped => "hipped",
            RoofType::Gabled => "gabled",
            RoofType::HalfHip => "half-hip",
            RoofType::Mansard => "mansard",
        }
    }

    /// True for archetypes that emit a separate wall mesh under the roof
    pub fn has_gable_walls(self) -> bool {
        matches!(
            self,
            RoofType::Pitched | RoofType::Gabled | RoofType::HalfHip
        )
    }
}

impl From<&str> for RoofType {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl From<String> for RoofType {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<RoofType> for &'static str {
    fn from(roof_type: RoofType) -> Self {
        roof_type.as_tag()
    }
}

impl fmt::Display for RoofType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Roof geometry factory
pub struct RoofGeometryFactory;

impl RoofGeometryFactory {
    /// Builder for an archetype
    pub fn builder(roof_type: RoofType) -> &'static dyn RoofBuilder {
        match roof_type {
            RoofType::Flat => &FlatRoofBuilder,
            RoofType::Pitched => &PitchedRoofBuilder,
            RoofType::Tented => &TentedRoofBuilder,
            RoofType::Hipped => &HippedRoofBuilder,
            RoofType::Gabled => &GabledRoofBuilder,
            RoofType::HalfHip => &HalfHipRoofBuilder,
            RoofType::Mansard => &MansardRoofBuilder,
        }
    }

    /// Validate `params` and build the roof
    pub fn build(
        footprint: &Footprint,
        params: &RoofParams,
        roof_type: RoofType,
    ) -> Result<RoofGeometry> {
        params.validate()?;
        let geometry = Self::builder(roof_type).build(footprint, params)?;

        tracing::debug!(
            %roof_type,
            footprint_vertices = footprint.len(),
            triangles = geometry.triangle_count(),
            "built roof"
        );

        Ok(geometry)
    }
}

/// Build one roof
pub fn generate_roof(
    footprint: &Footprint,
    params: &RoofParams,
    roof_type: RoofType,
) -> Result<RoofGeometry> {
    RoofGeometryFactory::build(footprint, params, roof_type)
}

/// Build one roof from an open string tag; unknown tags build a flat roof
pub fn generate_roof_from_tag(
    footprint: &Footprint,
    params: &RoofParams,
    tag: &str,
) -> Result<RoofGeometry> {
    RoofGeometryFactory::build(footprint, params, RoofType::from_tag(tag))
}

/// A self-contained roof request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoofJob {
    pub footprint: Footprint,
    #[serde(default)]
    pub roof_type: RoofType,
    #[serde(default)]
    pub params: RoofParams,
}

impl RoofJob {
    pub fn new(footprint: Footprint, roof_type: RoofType, params: RoofParams) -> Self {
        Self {
            footprint,
            roof_type,
            params,
        }
    }

    pub fn run(&self) -> Result<RoofGeometry> {
        generate_roof(&self.footprint, &self.params, self.roof_type)
    }
}

/// Build many independent roofs in parallel
///
/// Results come back in job order; one failing job does not affect others.
pub fn generate_roofs(jobs: &[RoofJob]) -> Vec<Result<RoofGeometry>> {
    jobs.par_iter().map(RoofJob::run).collect()
}
