//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`WorldConfig`]      – bounding box, also the viewer window size
//! - [`ParametersConfig`] – ensemble size, numerical parameters and physical constants
//! - [`SpawnConfig`]      – integer range the initial coordinates are drawn from
//! - [`ViewerConfig`]     – window title and steps per rendered frame
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every field has a default, so an empty document gives the reference setup.
//!
//! # YAML format
//!
//! ```yaml
//! world:
//!   width: 500.0
//!   height: 500.0
//!   depth: 500.0
//!
//! parameters:
//!   n: 10                     # bodies, index 0 is the anchor
//!   dt: 0.001                 # fixed step size
//!   softening: 0.1            # softening length
//!   G: 1.0                    # gravitational constant
//!   base_mass: 5.0
//!   anchor_mass_factor: 5000.0
//!   seed: 42
//!
//! spawn:
//!   min: 100
//!   max: 400
//!
//! viewer:
//!   title: "gravbox"
//!   steps_per_frame: 1
//! ```

use serde::Deserialize;

use crate::simulation::params::{Parameters, SpawnRange};
use crate::simulation::states::WorldBox;

/// Axis-aligned world box
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self { width: 500.0, height: 500.0, depth: 500.0 }
    }
}

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub n: usize, // number of bodies
    pub dt: f64, // time step size
    pub softening: f64, // prevent singular forces at very small separations
    pub G: f64, // gravitational constant
    pub base_mass: f64, // mass of every light body
    pub anchor_mass_factor: f64, // how much heavier the anchor is
    pub seed: u64, // deterministic seed to make runs reproducible
}

impl Default for ParametersConfig {
    fn default() -> Self {
        let p = Parameters::default();
        Self {
            n: p.n,
            dt: p.dt,
            softening: p.softening,
            G: p.G,
            base_mass: p.base_mass,
            anchor_mass_factor: p.anchor_mass_factor,
            seed: p.seed,
        }
    }
}

/// Inclusive integer spawn range, applied on all three axes
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnConfig {
    pub min: i64,
    pub max: i64,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        let s = SpawnRange::default();
        Self { min: s.min, max: s.max }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    pub title: String,
    pub steps_per_frame: usize, // integrator steps between two redraws
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self { title: "gravbox".to_string(), steps_per_frame: 1 }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub world: WorldConfig,
    pub parameters: ParametersConfig,
    pub spawn: SpawnConfig,
    pub viewer: ViewerConfig,
}

impl ScenarioConfig {
    pub fn world_box(&self) -> WorldBox {
        WorldBox::new(self.world.width, self.world.height, self.world.depth)
    }

    pub fn parameters(&self) -> Parameters {
        let p = &self.parameters;
        Parameters {
            n: p.n,
            dt: p.dt,
            softening: p.softening,
            G: p.G,
            base_mass: p.base_mass,
            anchor_mass_factor: p.anchor_mass_factor,
            spawn: SpawnRange { min: self.spawn.min, max: self.spawn.max },
            seed: p.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_reference_setup() {
        let cfg: ScenarioConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg.world_box(), WorldBox::new(500.0, 500.0, 500.0));
        assert_eq!(cfg.parameters(), Parameters::default());
        assert_eq!(cfg.viewer.steps_per_frame, 1);
    }

    #[test]
    fn partial_document_overrides_only_named_fields() {
        let yaml = "
parameters:
  n: 3
  G: 2.5
spawn:
  min: 0
  max: 10
";
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
        let p = cfg.parameters();
        assert_eq!(p.n, 3);
        assert_eq!(p.G, 2.5);
        assert_eq!(p.dt, 0.001);
        assert_eq!(p.spawn, SpawnRange { min: 0, max: 10 });
    }
}
