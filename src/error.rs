//! Error types surfaced by the simulation core

/// Failures raised while building or advancing a [`GravitySystem`](crate::GravitySystem)
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    #[error("ensemble must contain at least one body")]
    EmptyEnsemble,
    #[error("world {axis} must be positive and finite, got {value}")]
    InvalidWorld { axis: &'static str, value: f64 },
    #[error("parameter `{name}` is out of range: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("mass of body {index} must be positive and finite, got {value}")]
    NonPositiveMass { index: usize, value: f64 },
    #[error("spawn range [{min}, {max}] is empty")]
    EmptySpawnRange { min: i64, max: i64 },
    #[error("{what} has {found} entries, expected {expected}")]
    LengthMismatch { what: &'static str, expected: usize, found: usize },
    #[error("body {body} left the finite range at t = {t}")]
    NonFinite { body: usize, t: f64 },
    #[error("simulation state is corrupted by an earlier numerical blow-up")]
    Corrupted,
}

pub type SimResult<T> = Result<T, SimError>;
