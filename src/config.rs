use crate::error::OrientationError;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Tunables for the orientation kernel
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(default))]
pub struct OrientationConfig {
    /// Largest `|dot(plane_normal, plane_ident_dir)|` accepted by plane
    /// projection. Zero demands an exactly in-plane direction.
    pub in_plane_tolerance: f32,
}

impl OrientationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the in-plane tolerance used by `quat_project_with`
    pub fn with_in_plane_tolerance(mut self, tolerance: f32) -> Self {
        self.in_plane_tolerance = tolerance;
        self
    }

    /// Checks that every field holds a usable value
    pub fn validate(&self) -> crate::Result<()> {
        if !self.in_plane_tolerance.is_finite() || self.in_plane_tolerance < 0.0 {
            return Err(OrientationError::InvalidParameter(format!(
                "in_plane_tolerance must be finite and non-negative, got {}",
                self.in_plane_tolerance
            )));
        }
        Ok(())
    }
}

impl Default for OrientationConfig {
    fn default() -> Self {
        Self {
            in_plane_tolerance: 0.0,
        }
    }
}
