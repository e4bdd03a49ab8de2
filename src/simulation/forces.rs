//! Force / acceleration contributors for the gravity ensemble
//!
//! Defines the acceleration trait, the set that sums several terms, and the
//! direct softened Newtonian gravity kernel

use crate::simulation::states::{Ensemble, NVec3};

/// Collection of acceleration terms (gravity, drag, etc)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all bodies in `ens`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, ens: &Ensemble, out: &mut [NVec3]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        for term in &self.terms {
            term.acceleration(ens, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Acceleration sources operating on an [`Ensemble`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, ens: &Ensemble, out: &mut [NVec3]);
}

/// Newtonian gravity with a single global softening length, summed over
/// every ordered pair `(i, j)`, the diagonal included.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoftenedGravity {
    pub G: f64, // gravitational constant
    pub softening: f64, // softening length epsilon
}

impl SoftenedGravity {
    /// Softened inverse-cube distance factor for a raw displacement `r`.
    ///
    /// The zero guard is applied to the softened sum `|r|^2 + eps^2`, so with
    /// any positive softening the `i == j` entry is still inverted. Its
    /// contribution vanishes anyway because it is multiplied by `r = 0`.
    pub fn inv_r3(&self, r: &NVec3) -> f64 {
        let d2 = r.dot(r) + self.softening * self.softening;
        if d2 > 0.0 {
            d2.powf(-1.5)
        } else {
            0.0
        }
    }
}

impl Acceleration for SoftenedGravity {
    fn acceleration(&self, ens: &Ensemble, out: &mut [NVec3]) {
        let n = ens.len();

        for i in 0..n {
            let xi = ens.pos[i];
            let mut sum = NVec3::zeros();

            for j in 0..n {
                // r points from i to j, so body i is pulled along +r
                let r = ens.pos[j] - xi;
                let inv_r3 = self.inv_r3(&r);

                // a_i += G * r * inv_r3 * m_j
                sum += self.G * (r * inv_r3) * ens.mass[j];
            }

            out[i] += sum;
        }
    }
}
