// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Roof builders - one per architectural archetype
//!
//! Every builder is a stateless unit struct. Given the same footprint and
//! parameters it returns the same geometry, bit for bit.

mod flat;
mod gabled;
mod half_hip;
mod hipped;
mod mansard;
mod pitched;
pub(crate) mod surface;
mod tented;


pub use flat::FlatRoofBuilder;
pub use gabled::GabledRoofBuilder;
pub use half_hip::{HalfHipRoofBuilder, HALF_HIP_CLIP_RATIO};
pub use hipped::{HippedRoofBuilder, HIP_ASPECT_THRESHOLD, RIDGE_POINT_EPSILON};
pub use mansard::{
    MansardRoofBuilder, MANSARD_BREAK_RATIO, MANSARD_INSET_RATIO, MANSARD_LOWER_PITCH_DEG,
    MANSARD_UPPER_PITCH_DEG,
};
pub use pitched::{PitchedRoofBuilder, ELEVATION_EPSILON};
pub use tented::TentedRoofBuilder;

use crate::factory::RoofType;
use crate::footprint::Footprint;
use crate::mesh::Mesh;
use crate::params::RoofParams;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Roof builder trait
/// Each builder turns a footprint into one archetype's roof surface
pub trait RoofBuilder: Send + Sync {
    /// Build the roof seated on `footprint` at `params.wall_height`
    fn build(&self, footprint: &Footprint, params: &RoofParams) -> Result<RoofGeometry>;

    /// Archetype produced by this builder
    fn roof_type(&self) -> RoofType;
}

/// Output of a roof builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoofGeometry {
    /// Sloped (or flat) roof surface
    pub roof_mesh: Mesh,
    /// Vertical walls between eave and roof; `None` for archetypes without them
    pub gable_mesh: Option<Mesh>,
}

impl RoofGeometry {
    pub fn roof_only(roof_mesh: Mesh) -> Self {
        Self {
            roof_mesh,
            gable_mesh: None,
        }
    }

    pub fn with_gables(roof_mesh: Mesh, gable_mesh: Mesh) -> Self {
        Self {
            roof_mesh,
            gable_mesh: Some(gable_mesh),
        }
    }

    /// Roof and gable walls merged into one mesh
    pub fn combined(&self) -> Mesh {
        let mut mesh = self.roof_mesh.clone();
        if let Some(gable) = &self.gable_mesh {
            mesh.merge(gable);
        }
        mesh
    }

    pub fn triangle_count(&self) -> usize {
        self.roof_mesh.triangle_count()
            + self.gable_mesh.as_ref().map_or(0, Mesh::triangle_count)
    }
}
