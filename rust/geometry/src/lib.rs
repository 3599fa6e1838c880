// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RoofKit Geometry
//!
//! Roof synthesis for building footprints. A footprint outline plus wall
//! height, pitch and ridge rotation becomes a triangulated roof surface for
//! one of seven archetypes: flat, pitched (shed), tented (pyramid), hipped,
//! gabled, half-hip and mansard.
//!
//! Z is up. Footprints live in the XY plane and roofs are seated at
//! `wall_height`. Every builder is a pure function of its inputs.
//!
//! # Usage
//!
//! ```rust
//! use roofkit_geometry::{generate_roof, Footprint, Point2, RoofParams, RoofType};
//!
//! let footprint = Footprint::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(0.0, 4.0),
//! ])?;
//!
//! let roof = generate_roof(&footprint, &RoofParams::new(3.0, 30.0, 0.0), RoofType::Gabled)?;
//! assert_eq!(roof.roof_mesh.triangle_count(), 4);
//! assert_eq!(roof.gable_mesh.map(|m| m.triangle_count()), Some(2));
//! # Ok::<(), roofkit_geometry::Error>(())
//! ```

pub mod analysis;
pub mod error;
pub mod factory;
pub mod footprint;
pub mod height;
pub mod mesh;
pub mod params;
pub mod ridge;
pub mod roofs;
pub mod triangulation;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};

pub use analysis::{Bounds2, PolygonAnalysis, RidgeAxis};
pub use error::{Error, Result};
pub use factory::{
    generate_roof, generate_roof_from_tag, generate_roofs, RoofGeometryFactory, RoofJob,
    RoofType,
};
pub use footprint::{Footprint, Orientation};
pub use height::roof_height;
pub use mesh::{calculate_normals, Mesh};
pub use params::RoofParams;
pub use ridge::{crossing_parameter, RidgeLine, RidgeSide};
pub use roofs::{RoofBuilder, RoofGeometry};
pub use triangulation::triangulate_polygon;
