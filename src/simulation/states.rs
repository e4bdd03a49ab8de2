//! Core state types for the gravity ensemble.
//!
//! The ensemble is stored as parallel arrays (one entry per body) instead of
//! a list of body structs, so the force kernel and the integrator can sweep
//! each quantity in one pass. Index 0 is always the anchor body.

use nalgebra::Vector3;

use crate::error::{SimError, SimResult};

pub type NVec3 = Vector3<f64>;

/// Index of the anchor body inside every ensemble.
pub const ANCHOR: usize = 0;

#[derive(Debug, Clone, PartialEq)]
pub struct Ensemble {
    pub mass: Vec<f64>, // mass per body, strictly positive
    pub pos: Vec<NVec3>, // position in world units
    pub vel: Vec<NVec3>, // velocity
    pub acc: Vec<NVec3>, // acceleration, derived from pos and mass
    pub t: f64, // simulation clock
}

impl Ensemble {
    /// Number of bodies
    pub fn len(&self) -> usize {
        self.mass.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mass.is_empty()
    }
}

/// Axis-aligned bounding box spanning `[0, width] x [0, height] x [0, depth]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBox {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl WorldBox {
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self { width, height, depth }
    }

    /// Upper wall on `axis` (0 = x, 1 = y, 2 = z). The lower wall is always 0.
    pub fn upper(&self, axis: usize) -> f64 {
        match axis {
            0 => self.width,
            1 => self.height,
            _ => self.depth,
        }
    }

    /// Every dimension must be a positive finite number
    pub fn validate(&self) -> SimResult<()> {
        for (axis, value) in [("width", self.width), ("height", self.height), ("depth", self.depth)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::InvalidWorld { axis, value });
            }
        }
        Ok(())
    }
}

impl Default for WorldBox {
    fn default() -> Self {
        Self::new(500.0, 500.0, 500.0)
    }
}
