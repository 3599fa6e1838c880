// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Roof shape parameters

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// User-facing roof parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoofParams {
    /// Eave elevation above the footprint plane
    pub wall_height: f64,
    /// Slope angle in degrees from horizontal, `[0, 90)`
    pub roof_pitch: f64,
    /// Ridge rotation in degrees away from the footprint-aligned axis
    pub roof_rotation: f64,
}

impl RoofParams {
    pub fn new(wall_height: f64, roof_pitch: f64, roof_rotation: f64) -> Self {
        Self {
            wall_height,
            roof_pitch,
            roof_rotation,
        }
    }

    /// Reject values no builder can seat a roof with
    pub fn validate(&self) -> Result<()> {
        if !self.wall_height.is_finite() || self.wall_height < 0.0 {
            return Err(Error::InvalidParams(format!(
                "wall height must be finite and >= 0, got {}",
                self.wall_height
            )));
        }
        if !(0.0..90.0).contains(&self.roof_pitch) {
            return Err(Error::InvalidParams(format!(
                "roof pitch must be in [0, 90) degrees, got {}",
                self.roof_pitch
            )));
        }
        if !self.roof_rotation.is_finite() {
            return Err(Error::InvalidParams(format!(
                "roof rotation must be finite, got {}",
                self.roof_rotation
            )));
        }
        Ok(())
    }
}

impl Default for RoofParams {
    fn default() -> Self {
        Self {
            wall_height: 3.0,
            roof_pitch: 30.0,
            roof_rotation: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(RoofParams::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(RoofParams::new(-0.1, 30.0, 0.0).validate().is_err());
        assert!(RoofParams::new(f64::INFINITY, 30.0, 0.0).validate().is_err());
        assert!(RoofParams::new(3.0, 90.0, 0.0).validate().is_err());
        assert!(RoofParams::new(3.0, -5.0, 0.0).validate().is_err());
        assert!(RoofParams::new(3.0, f64::NAN, 0.0).validate().is_err());
        assert!(RoofParams::new(3.0, 30.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_accepts_edges_of_range() {
        assert!(RoofParams::new(0.0, 0.0, 0.0).validate().is_ok());
        assert!(RoofParams::new(3.0, 89.9, 720.0).validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let params: RoofParams = serde_json::from_str(r#"{"roof_pitch": 45}"#).unwrap();
        assert_eq!(params.wall_height, 3.0);
        assert_eq!(params.roof_pitch, 45.0);
        assert_eq!(params.roof_rotation, 0.0);
    }
}
