//! Fixed-step time integration for the ensemble
//!
//! Provides the kick-drift-kick leapfrog with the anchor body pinned, the
//! elastic wall reflection applied after every step, and the finiteness
//! check that guards against numerical blow-up

use super::forces::AccelSet;
use super::states::{Ensemble, WorldBox, NVec3, ANCHOR};

/// Advance the ensemble by one step of `dt` using velocity-Verlet.
///
/// The stored accelerations serve as `a_n`, so a single force evaluation
/// happens per step. The anchor goes through the same vector update as every
/// other body and is put back afterwards.
pub fn leapfrog_step(ens: &mut Ensemble, forces: &AccelSet, dt: f64) {
    let n = ens.len();
    if n == 0 { // no bodies, return
        return;
    }
    let half_dt = 0.5 * dt; // half step dt/2

    // Save the anchor
    let anchor_x = ens.pos[ANCHOR];
    let anchor_v = ens.vel[ANCHOR];
    let anchor_a = ens.acc[ANCHOR];

    // Kick: v_n+1/2 = v_n + (dt/2) * a_n
    for (v, a) in ens.vel.iter_mut().zip(ens.acc.iter()) {
        *v += *a * half_dt;
    }

    // Drift: x_n+1 = x_n + dt * v_n+1/2
    for (x, v) in ens.pos.iter_mut().zip(ens.vel.iter()) {
        *x += *v * dt;
    }

    // a_n+1 from x_n+1
    let mut a_new = vec![NVec3::zeros(); n];
    forces.accumulate_accels(&*ens, &mut a_new);
    ens.acc = a_new;

    // Second kick: v_n+1 = v_n+1/2 + (dt/2) * a_n+1
    for (v, a) in ens.vel.iter_mut().zip(ens.acc.iter()) {
        *v += *a * half_dt;
    }

    // advance time: t_n+1 = t_n + dt
    ens.t += dt;

    // Restore the anchor
    ens.pos[ANCHOR] = anchor_x;
    ens.vel[ANCHOR] = anchor_v;
    ens.acc[ANCHOR] = anchor_a;
}

/// Flip the velocity component of every body that sits outside the box on
/// that axis. Positions are left alone, so a body may stay past a wall for
/// one more drift before it comes back.
pub fn reflect_at_walls(ens: &mut Ensemble, world: &WorldBox) {
    for (x, v) in ens.pos.iter().zip(ens.vel.iter_mut()) {
        for axis in 0..3 {
            if x[axis] < 0.0 {
                v[axis] = -v[axis];
            }
            if x[axis] > world.upper(axis) {
                v[axis] = -v[axis];
            }
        }
    }
}

/// Index of the first body with a non-finite position, velocity or acceleration
pub fn first_non_finite(ens: &Ensemble) -> Option<usize> {
    (0..ens.len()).find(|&i| {
        !(finite(&ens.pos[i]) && finite(&ens.vel[i]) && finite(&ens.acc[i]))
    })
}

fn finite(v: &NVec3) -> bool {
    v.iter().all(|c| c.is_finite())
}
