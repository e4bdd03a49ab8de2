pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use error::{SimError, SimResult};

pub use simulation::states::{Ensemble, WorldBox, NVec3, ANCHOR};
pub use simulation::params::{Parameters, SpawnRange};
pub use simulation::forces::{Acceleration, AccelSet, SoftenedGravity};
pub use simulation::energy::{Energy, energy, kinetic_energy, potential_energy};
pub use simulation::integrator::{leapfrog_step, reflect_at_walls, first_non_finite};
pub use simulation::engine::{GravitySystem, ENERGY_REPORT_EVERY};
pub use simulation::scenario::{Scenario, initial_ensemble};

pub use configuration::config::{ScenarioConfig, WorldConfig, ParametersConfig, SpawnConfig, ViewerConfig};

pub use visualization::viewer::run_viewer;

pub use benchmark::benchmark::{bench_acceleration, bench_step};
