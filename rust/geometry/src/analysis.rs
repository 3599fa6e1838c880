// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Footprint analysis - centroid, bounds and ridge orientation
//!
//! Every roof builder starts here. The analysis is recomputed per call and
//! never cached, so it always reflects the footprint snapshot it was given.

use crate::footprint::Footprint;
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// Horizontal axis the ridge runs along before rotation is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RidgeAxis {
    X,
    Y,
}

impl RidgeAxis {
    /// Base ridge angle in radians
    #[inline]
    pub fn base_angle(self) -> f64 {
        match self {
            RidgeAxis::X => 0.0,
            RidgeAxis::Y => FRAC_PI_2,
        }
    }
}

/// Axis-aligned 2D bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds2 {
    pub min: Point2<f64>,
    pub max: Point2<f64>,
}

impl Bounds2 {
    pub fn from_points(points: &[Point2<f64>]) -> Self {
        let mut min = Point2::new(f64::MAX, f64::MAX);
        let mut max = Point2::new(f64::MIN, f64::MIN);

        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }

        Self { min, max }
    }

    #[inline]
    pub fn span_x(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn span_y(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Derived measurements of a footprint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolygonAnalysis {
    /// Mean of the footprint vertices (not area-weighted)
    pub centroid: Point2<f64>,
    pub bounds: Bounds2,
    pub ridge_axis: RidgeAxis,
    /// Ridge direction in radians, rotation offset included
    pub ridge_angle: f64,
    /// Bounding-box extent across the ridge axis
    pub width: f64,
    /// Bounding-box extent along the ridge axis
    pub length: f64,
}

impl PolygonAnalysis {
    /// Analyze a footprint with the ridge rotated `rotation_degrees` away
    /// from its default axis
    ///
    /// The ridge follows the longer bounding-box side; equal spans pick X.
    /// Width and length are taken from the unrotated bounding box.
    pub fn analyze(footprint: &Footprint, rotation_degrees: f64) -> Self {
        let bounds = Bounds2::from_points(footprint.points());
        let (span_x, span_y) = (bounds.span_x(), bounds.span_y());

        let (ridge_axis, length, width) = if span_x >= span_y {
            (RidgeAxis::X, span_x, span_y)
        } else {
            (RidgeAxis::Y, span_y, span_x)
        };

        Self {
            centroid: footprint.vertex_centroid(),
            bounds,
            ridge_axis,
            ridge_angle: ridge_axis.base_angle() + rotation_degrees.to_radians(),
            width,
            length,
        }
    }

    /// Unit vector along the ridge
    #[inline]
    pub fn ridge_direction(&self) -> Vector2<f64> {
        Vector2::new(self.ridge_angle.cos(), self.ridge_angle.sin())
    }

    /// Unit vector across the ridge, 90° counter-clockwise from its direction
    #[inline]
    pub fn slope_direction(&self) -> Vector2<f64> {
        Vector2::new(-self.ridge_angle.sin(), self.ridge_angle.cos())
    }

    /// `length / width`; infinite for a zero-width footprint
    #[inline]
    pub fn aspect_ratio(&self) -> f64 {
        if self.width > 0.0 {
            self.length / self.width
        } else {
            f64::INFINITY
        }
    }

    /// Smaller of the two bounding-box extents
    #[inline]
    pub fn min_extent(&self) -> f64 {
        self.width.min(self.length)
    }
}
