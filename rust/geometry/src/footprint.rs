// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Building footprint - the validated outline every roof is seated on

use crate::error::{Error, Result};
use nalgebra::{Point2, Point3};
use serde::{Deserialize, Serialize};

/// Footprints with less absolute area than this are rejected as degenerate
const MIN_FOOTPRINT_AREA: f64 = 1e-9;

/// Winding direction of a footprint seen from above (+Z)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
}

/// Simple closed polygon in the XY plane
///
/// Owned copy of the caller's outline. Winding may be either direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<[f64; 2]>")]
pub struct Footprint {
    points: Vec<Point2<f64>>,
}

impl Footprint {
    /// Validate and copy an outline
    ///
    /// A trailing point equal to the first one (explicitly closed ring) is
    /// dropped. Fails on fewer than 3 distinct points, non-finite
    /// coordinates, or zero area.
    pub fn new(points: impl Into<Vec<Point2<f64>>>) -> Result<Self> {
        let mut points = points.into();

        if points.len() > 3 && points.first() == points.last() {
            points.pop();
        }

        if points.len() < 3 {
            return Err(Error::TooFewPoints(points.len()));
        }

        if let Some(index) = points
            .iter()
            .position(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(Error::NonFiniteCoordinate(index));
        }

        let area = signed_area(&points);
        if area.abs() < MIN_FOOTPRINT_AREA {
            return Err(Error::DegenerateFootprint(area));
        }

        Ok(Self { points })
    }

    /// Build from 3D points, ignoring the vertical (Z) coordinate
    pub fn from_xyz(points: &[Point3<f64>]) -> Result<Self> {
        Self::new(
            points
                .iter()
                .map(|p| Point2::new(p.x, p.y))
                .collect::<Vec<_>>(),
        )
    }

    /// Outline vertices in caller order
    #[inline]
    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a footprint holds at least 3 points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Edges as (start, end) pairs, closing back to the first vertex
    pub fn edges(&self) -> impl Iterator<Item = (Point2<f64>, Point2<f64>)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Shoelace area, positive for counter-clockwise winding
    #[inline]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn orientation(&self) -> Orientation {
        if self.signed_area() >= 0.0 {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        }
    }

    /// Arithmetic mean of the vertices
    pub fn vertex_centroid(&self) -> Point2<f64> {
        let n = self.points.len() as f64;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point2::new(sx / n, sy / n)
    }

    /// Area-weighted centroid of the enclosed region
    ///
    /// Roofs are positioned with [`Footprint::vertex_centroid`]; this is
    /// exposed so callers can measure how far the two drift apart.
    pub fn area_centroid(&self) -> Point2<f64> {
        let a = self.signed_area();
        let (mut cx, mut cy) = (0.0, 0.0);
        for (p, q) in self.edges() {
            let cross = p.x * q.y - q.x * p.y;
            cx += (p.x + q.x) * cross;
            cy += (p.y + q.y) * cross;
        }
        Point2::new(cx / (6.0 * a), cy / (6.0 * a))
    }
}

/// Accepts `[x, y]` or `[x, y, z]` rows; `z` is dropped
impl TryFrom<Vec<Vec<f64>>> for Footprint {
    type Error = Error;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        let points = rows
            .iter()
            .enumerate()
            .map(|(i, row)| match row.as_slice() {
                [x, y] | [x, y, _] => Ok(Point2::new(*x, *y)),
                _ => Err(Error::MalformedPoint(i)),
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(points)
    }
}

impl From<Footprint> for Vec<[f64; 2]> {
    fn from(footprint: Footprint) -> Self {
        footprint.points.iter().map(|p| [p.x, p.y]).collect()
    }
}

fn signed_area(points: &[Point2<f64>]) -> f64 {
    let n = points.len();
    let mut twice_area = 0.0;
    for i in 0..n {
        let p = &points[i];
        let q = &points[(i + 1) % n];
        twice_area += p.x * q.y - q.x * p.y;
    }
    twice_area / 2.0
}
