//! Energy diagnostic for the ensemble
//!
//! Pure read-only functions; nothing here touches integrator state.

use crate::simulation::states::Ensemble;

/// Kinetic and potential energy of the ensemble at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Energy {
    pub kinetic: f64,
    pub potential: f64,
}

impl Energy {
    pub fn total(&self) -> f64 {
        self.kinetic + self.potential
    }

    /// Relative drift of the total energy against a reference value
    pub fn drift_from(&self, reference: &Energy) -> f64 {
        let e0 = reference.total();
        if e0 == 0.0 {
            self.total() - e0
        } else {
            (self.total() - e0) / e0.abs()
        }
    }
}

/// KE = 1/2 * sum_i m_i |v_i|^2
pub fn kinetic_energy(ens: &Ensemble) -> f64 {
    0.5 * ens
        .mass
        .iter()
        .zip(ens.vel.iter())
        .map(|(m, v)| m * v.norm_squared())
        .sum::<f64>()
}

/// PE = G * sum_{i<j} -m_i m_j / |r_ij|, unsoftened.
/// Coincident bodies (zero distance) contribute nothing.
#[allow(non_snake_case)]
pub fn potential_energy(ens: &Ensemble, G: f64) -> f64 {
    let n = ens.len();
    let mut pe = 0.0;

    // strict upper triangle: each unordered pair once
    for i in 0..n {
        for j in (i + 1)..n {
            let r = (ens.pos[j] - ens.pos[i]).norm();
            let inv_r = if r > 0.0 { r.recip() } else { 0.0 };
            pe += -(ens.mass[i] * ens.mass[j]) * inv_r;
        }
    }

    G * pe
}

#[allow(non_snake_case)]
pub fn energy(ens: &Ensemble, G: f64) -> Energy {
    Energy {
        kinetic: kinetic_energy(ens),
        potential: potential_energy(ens, G),
    }
}
