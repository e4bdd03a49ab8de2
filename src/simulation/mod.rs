pub mod states;
pub mod params;
pub mod engine;
pub mod energy;
pub mod forces;
pub mod integrator;
pub mod scenario;
