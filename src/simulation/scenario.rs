//! Build fully-initialized simulation scenarios
//!
//! `initial_ensemble` draws the randomized starting state from an explicit
//! generator. `Scenario` wraps a built [`GravitySystem`] together with the
//! viewer settings and is inserted into Bevy as a `Resource`.

use bevy::prelude::Resource;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::configuration::config::ScenarioConfig;
use crate::error::SimResult;
use crate::simulation::engine::GravitySystem;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Ensemble, NVec3, ANCHOR};

/// Draw the starting state for `params.n` bodies.
///
/// - masses: `base_mass` everywhere, the anchor scaled by `anchor_mass_factor`
/// - positions: integer coordinates drawn uniformly from the spawn range
/// - velocities: standard normal per axis, shifted so the total momentum is zero
///
/// Accelerations are left at zero; the caller derives them.
pub fn initial_ensemble<R: Rng>(params: &Parameters, rng: &mut R) -> Ensemble {
    let n = params.n;

    let mut mass = vec![params.base_mass; n];
    if n > 0 {
        mass[ANCHOR] = params.anchor_mass();
    }

    let spawn = params.spawn;
    let pos: Vec<NVec3> = (0..n)
        .map(|_| {
            NVec3::new(
                rng.gen_range(spawn.min..=spawn.max) as f64,
                rng.gen_range(spawn.min..=spawn.max) as f64,
                rng.gen_range(spawn.min..=spawn.max) as f64,
            )
        })
        .collect();

    let mut vel: Vec<NVec3> = (0..n)
        .map(|_| {
            NVec3::new(
                rng.sample(StandardNormal),
                rng.sample(StandardNormal),
                rng.sample(StandardNormal),
            )
        })
        .collect();

    // v -= mean(m * v) / mean(m)
    if n > 0 {
        let nf = n as f64;
        let mean_p = mass
            .iter()
            .zip(vel.iter())
            .fold(NVec3::zeros(), |acc, (m, v)| acc + *v * *m)
            / nf;
        let mean_m = mass.iter().sum::<f64>() / nf;
        let shift = mean_p / mean_m;
        for v in vel.iter_mut() {
            *v -= shift;
        }
    }

    Ensemble {
        acc: vec![NVec3::zeros(); n],
        mass,
        pos,
        vel,
        t: 0.0,
    }
}

/// Bevy resource holding a running simulation and how to present it
#[derive(Resource)]
pub struct Scenario {
    pub system: GravitySystem,
    pub title: String,
    pub steps_per_frame: usize,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        let system = GravitySystem::new(cfg.world_box(), cfg.parameters())?;

        Ok(Self {
            system,
            title: cfg.viewer.title,
            steps_per_frame: cfg.viewer.steps_per_frame.max(1),
        })
    }
}
