//! The gravity ensemble as seen by its caller
//!
//! `GravitySystem` owns the body arrays, the world box, the parameters and
//! the active force set. After construction only [`GravitySystem::step`]
//! mutates it.

use log::{debug, error, info, log_enabled, Level};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{SimError, SimResult};
use crate::simulation::energy::{self, Energy};
use crate::simulation::forces::{AccelSet, SoftenedGravity};
use crate::simulation::integrator::{first_non_finite, leapfrog_step, reflect_at_walls};
use crate::simulation::params::Parameters;
use crate::simulation::scenario::initial_ensemble;
use crate::simulation::states::{Ensemble, NVec3, WorldBox};

/// Completed steps between two `debug!` energy reports
pub const ENERGY_REPORT_EVERY: u64 = 1000;

pub struct GravitySystem {
    ens: Ensemble,
    world: WorldBox,
    params: Parameters,
    forces: AccelSet,
    initial_energy: Energy,
    steps: u64, // completed steps
    corrupted: bool,
}

impl GravitySystem {
    /// Build a randomized ensemble from `params.seed`
    pub fn new(world: WorldBox, params: Parameters) -> SimResult<Self> {
        let mut rng = StdRng::seed_from_u64(params.seed);
        Self::with_rng(world, params, &mut rng)
    }

    /// Build a randomized ensemble with reference parameters inside a
    /// `width x height x depth` box
    pub fn construct(width: f64, height: f64, depth: f64) -> SimResult<Self> {
        Self::new(WorldBox::new(width, height, depth), Parameters::default())
    }

    /// Build a randomized ensemble drawing from a caller-owned generator
    pub fn with_rng<R: Rng>(world: WorldBox, params: Parameters, rng: &mut R) -> SimResult<Self> {
        world.validate()?;
        params.validate()?;
        let ens = initial_ensemble(&params, rng);
        Self::assemble(world, params, ens)
    }

    /// Build from explicit initial arrays. `mass[0]` is the anchor.
    pub fn from_state(
        world: WorldBox,
        params: Parameters,
        mass: Vec<f64>,
        pos: Vec<NVec3>,
        vel: Vec<NVec3>,
    ) -> SimResult<Self> {
        world.validate()?;
        let n = mass.len();
        if n == 0 {
            return Err(SimError::EmptyEnsemble);
        }
        for (what, found) in [("position", pos.len()), ("velocity", vel.len())] {
            if found != n {
                return Err(SimError::LengthMismatch { what, expected: n, found });
            }
        }
        if let Some((index, &value)) = mass.iter().enumerate().find(|(_, m)| !(m.is_finite() && **m > 0.0)) {
            return Err(SimError::NonPositiveMass { index, value });
        }
        // n and the mass layout come from the arrays here
        let params = Parameters { n, ..params };
        params.validate()?;

        let ens = Ensemble {
            acc: vec![NVec3::zeros(); n],
            mass,
            pos,
            vel,
            t: 0.0,
        };
        Self::assemble(world, params, ens)
    }

    /// Derive initial accelerations and energy so the state starts consistent
    fn assemble(world: WorldBox, params: Parameters, mut ens: Ensemble) -> SimResult<Self> {
        let forces = AccelSet::new().with(SoftenedGravity {
            G: params.G,
            softening: params.softening,
        });

        let mut acc = vec![NVec3::zeros(); ens.len()];
        forces.accumulate_accels(&ens, &mut acc);
        ens.acc = acc;

        if let Some(body) = first_non_finite(&ens) {
            return Err(SimError::NonFinite { body, t: ens.t });
        }

        let initial_energy = energy::energy(&ens, params.G);
        info!(
            "built ensemble: n = {}, seed = {}, KE = {:.6}, PE = {:.6}",
            ens.len(),
            params.seed,
            initial_energy.kinetic,
            initial_energy.potential
        );

        Ok(Self {
            ens,
            world,
            params,
            forces,
            initial_energy,
            steps: 0,
            corrupted: false,
        })
    }

    /// Advance by one fixed `dt`: leapfrog with the anchor pinned, then wall
    /// reflection. A non-finite result poisons the system for good.
    pub fn step(&mut self) -> SimResult<()> {
        if self.corrupted {
            return Err(SimError::Corrupted);
        }

        leapfrog_step(&mut self.ens, &self.forces, self.params.dt);
        reflect_at_walls(&mut self.ens, &self.world);

        if let Some(body) = first_non_finite(&self.ens) {
            self.corrupted = true;
            error!("numerical blow-up: body {} at t = {}", body, self.ens.t);
            return Err(SimError::NonFinite { body, t: self.ens.t });
        }

        self.steps += 1;
        if self.steps % ENERGY_REPORT_EVERY == 0 && log_enabled!(Level::Debug) {
            let e = self.energy();
            debug!(
                "step {}: t = {:.4}, KE = {:.6}, PE = {:.6}, drift = {:.3e}",
                self.steps,
                self.ens.t,
                e.kinetic,
                e.potential,
                e.drift_from(&self.initial_energy)
            );
        }
        Ok(())
    }

    /// Number of steps completed without a blow-up
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Kinetic and potential energy of the current state
    pub fn energy(&self) -> Energy {
        energy::energy(&self.ens, self.params.G)
    }

    /// Energy computed at construction
    pub fn initial_energy(&self) -> Energy {
        self.initial_energy
    }

    /// Total momentum sum_i m_i v_i
    pub fn momentum(&self) -> NVec3 {
        self.ens
            .mass
            .iter()
            .zip(self.ens.vel.iter())
            .fold(NVec3::zeros(), |p, (m, v)| p + *v * *m)
    }

    /// Mass-weighted mean position (barycenter)
    pub fn center_of_mass(&self) -> NVec3 {
        let total: f64 = self.ens.mass.iter().sum();
        let weighted = self
            .ens
            .mass
            .iter()
            .zip(self.ens.pos.iter())
            .fold(NVec3::zeros(), |c, (m, x)| c + *x * *m);
        weighted / total
    }

    pub fn len(&self) -> usize {
        self.ens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ens.is_empty()
    }

    pub fn is_corrupted(&self) -> bool {
        self.corrupted
    }

    pub fn time(&self) -> f64 {
        self.ens.t
    }

    pub fn mass(&self) -> &[f64] {
        &self.ens.mass
    }

    pub fn positions(&self) -> &[NVec3] {
        &self.ens.pos
    }

    pub fn velocities(&self) -> &[NVec3] {
        &self.ens.vel
    }

    pub fn accelerations(&self) -> &[NVec3] {
        &self.ens.acc
    }

    pub fn ensemble(&self) -> &Ensemble {
        &self.ens
    }

    pub fn world(&self) -> &WorldBox {
        &self.world
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }
}
