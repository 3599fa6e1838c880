// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Roof rise from span and pitch

/// Vertical rise of a roof whose slopes climb over half of `span` at
/// `pitch_degrees` from horizontal
///
/// Each archetype picks its own span: full width for ridged roofs, twice the
/// width for a single slope, the smaller extent for a pyramid.
#[inline]
pub fn roof_height(span: f64, pitch_degrees: f64) -> f64 {
    (span / 2.0) * pitch_degrees.to_radians().tan()
}
