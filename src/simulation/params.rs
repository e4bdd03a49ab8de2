//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - ensemble size and integration step,
//! - softening and gravitational constant (`softening`, `G`),
//! - mass layout (baseline mass, anchor scale factor),
//! - spawn volume and random seed used to build the initial state

use crate::error::{SimError, SimResult};

/// Inclusive integer range each spawn coordinate is drawn from.
/// Deliberately independent of the world box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnRange {
    pub min: i64,
    pub max: i64,
}

impl Default for SpawnRange {
    fn default() -> Self {
        Self { min: 100, max: 400 }
    }
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub n: usize, // number of bodies, anchor included
    pub dt: f64, // fixed step size
    pub softening: f64, // softening length (not squared)
    pub G: f64, // gravitational constant
    pub base_mass: f64, // mass of every non-anchor body
    pub anchor_mass_factor: f64, // anchor mass = base_mass * factor
    pub spawn: SpawnRange, // per-axis spawn coordinates
    pub seed: u64, // seed for the initial state
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            n: 10,
            dt: 0.001,
            softening: 0.1,
            G: 1.0,
            base_mass: 5.0,
            anchor_mass_factor: 5000.0,
            spawn: SpawnRange::default(),
            seed: 42,
        }
    }
}

impl Parameters {
    /// Mass of the anchor body
    pub fn anchor_mass(&self) -> f64 {
        self.base_mass * self.anchor_mass_factor
    }

    /// Reject settings that would produce a degenerate ensemble
    pub fn validate(&self) -> SimResult<()> {
        if self.n == 0 {
            return Err(SimError::EmptyEnsemble);
        }
        positive("dt", self.dt)?;
        positive("base_mass", self.base_mass)?;
        positive("anchor_mass_factor", self.anchor_mass_factor)?;
        if !(self.softening.is_finite() && self.softening >= 0.0) {
            return Err(SimError::InvalidParameter { name: "softening", value: self.softening });
        }
        if !self.G.is_finite() {
            return Err(SimError::InvalidParameter { name: "G", value: self.G });
        }
        if self.spawn.min > self.spawn.max {
            return Err(SimError::EmptySpawnRange { min: self.spawn.min, max: self.spawn.max });
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> SimResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidParameter { name, value })
    }
}
