// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for roof geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during roof synthesis
///
/// Only precondition violations surface here. Numerical edge cases (near-zero
/// ridge distances, zero pitch, near-square footprints) are absorbed by the
/// builders and degrade the geometry instead of failing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Footprint needs at least 3 points, got {0}")]
    TooFewPoints(usize),

    #[error("Footprint point {0} has a non-finite coordinate")]
    NonFiniteCoordinate(usize),

    #[error("Footprint point {0} must have 2 or 3 coordinates")]
    MalformedPoint(usize),

    #[error("Footprint is degenerate (area {0:.3e}): points are collinear or coincident")]
    DegenerateFootprint(f64),

    #[error("Invalid roof parameters: {0}")]
    InvalidParams(String),

    #[error("Triangulation failed: {0}")]
    TriangulationError(String),
}
