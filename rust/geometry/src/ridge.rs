// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ridge line queries shared by the ridged roof builders
//!
//! Projection onto the ridge, side classification, and the point where a
//! footprint edge passes under the ridge.

use crate::analysis::PolygonAnalysis;
use nalgebra::{Point2, Point3, Vector2};
use serde::{Deserialize, Serialize};

/// Below this separation of signed distances an edge crossing is considered
/// parallel to the ridge and split at its midpoint
pub const RIDGE_CROSSING_EPSILON: f64 = 1e-9;

/// Half-plane of the footprint relative to the ridge direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RidgeSide {
    /// Strictly left of the ridge direction
    Left,
    /// Right of the ridge direction, or exactly on the ridge line
    Right,
}

/// Infinite horizontal line through a point at a given angle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RidgeLine {
    origin: Point2<f64>,
    direction: Vector2<f64>,
    normal: Vector2<f64>,
}

impl RidgeLine {
    /// Line through `origin` with direction `(cos angle, sin angle)`
    pub fn new(origin: Point2<f64>, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            origin,
            direction: Vector2::new(cos, sin),
            normal: Vector2::new(-sin, cos),
        }
    }

    /// Ridge through the footprint centroid at the analyzed ridge angle
    pub fn from_analysis(analysis: &PolygonAnalysis) -> Self {
        Self::new(analysis.centroid, analysis.ridge_angle)
    }

    #[inline]
    pub fn origin(&self) -> Point2<f64> {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.direction
    }

    /// Perpendicular distance from the ridge line, positive on the left
    #[inline]
    pub fn signed_distance(&self, point: &Point2<f64>) -> f64 {
        (point - self.origin).dot(&self.normal)
    }

    /// Position along the ridge measured from the origin
    #[inline]
    pub fn along(&self, point: &Point2<f64>) -> f64 {
        (point - self.origin).dot(&self.direction)
    }

    /// Which side of the ridge `point` lies on; points on the line are `Right`
    #[inline]
    pub fn side(&self, point: &Point2<f64>) -> RidgeSide {
        if self.signed_distance(point) > 0.0 {
            RidgeSide::Left
        } else {
            RidgeSide::Right
        }
    }

    /// Orthogonal projection onto the ridge line, lifted to `elevation`
    #[inline]
    pub fn project(&self, point: &Point2<f64>, elevation: f64) -> Point3<f64> {
        self.point_at(self.along(point), elevation)
    }

    /// Projection onto the segment of half-length `half_length` centered on
    /// the origin
    #[inline]
    pub fn project_clamped(
        &self,
        point: &Point2<f64>,
        half_length: f64,
        elevation: f64,
    ) -> Point3<f64> {
        let t = self.along(point).clamp(-half_length, half_length);
        self.point_at(t, elevation)
    }

    /// Point where edge `p1 -> p2` passes under the ridge, lifted to
    /// `elevation`
    ///
    /// Meant for endpoints on opposite sides. The interpolation parameter is
    /// not clamped.
    pub fn crossing(&self, p1: &Point2<f64>, p2: &Point2<f64>, elevation: f64) -> Point3<f64> {
        let t = crossing_parameter(self.signed_distance(p1), self.signed_distance(p2));
        let p = p1 + (p2 - p1) * t;
        Point3::new(p.x, p.y, elevation)
    }

    #[inline]
    fn point_at(&self, t: f64, elevation: f64) -> Point3<f64> {
        let p = self.origin + self.direction * t;
        Point3::new(p.x, p.y, elevation)
    }
}

/// Edge parameter at which the signed ridge distance interpolates to zero
///
/// Returns 0.5 when the two distances are too close to divide by.
#[inline]
pub fn crossing_parameter(d1: f64, d2: f64) -> f64 {
    if (d2 - d1).abs() < RIDGE_CROSSING_EPSILON {
        tracing::debug!(d1, d2, "ridge crossing on a ridge-parallel edge, using midpoint");
        return 0.5;
    }
    d1 / (d1 - d2)
}
