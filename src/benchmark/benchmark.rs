use std::time::Instant;

use crate::error::SimResult;
use crate::simulation::engine::GravitySystem;
use crate::simulation::forces::{Acceleration, SoftenedGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, WorldBox};

/// Helper to build a deterministic system of size `n`, no rand needed
fn make_system(n: usize) -> SimResult<GravitySystem> {
    let world = WorldBox::default();
    let params = Parameters::default();

    let mut mass = vec![params.base_mass; n];
    mass[0] = params.anchor_mass();

    let pos = (0..n)
        .map(|i| {
            let i_f = i as f64;
            NVec3::new(
                250.0 + (i_f * 0.37).sin() * 150.0,
                250.0 + (i_f * 0.13).cos() * 150.0,
                250.0 + (i_f * 0.07).sin() * 150.0,
            )
        })
        .collect();

    GravitySystem::from_state(world, params, mass, pos, vec![NVec3::zeros(); n])
}

/// Time one evaluation of the direct O(N^2) acceleration kernel
pub fn bench_acceleration() -> SimResult<()> {
    let ns = [10, 100, 200, 400, 800, 1600, 3200];

    for n in ns {
        let system = make_system(n)?;
        let params = system.params();
        let gravity = SoftenedGravity {
            G: params.G,
            softening: params.softening,
        };
        let mut out = vec![NVec3::zeros(); n];

        // Warm up
        gravity.acceleration(system.ensemble(), &mut out);

        let t0 = Instant::now();
        gravity.acceleration(system.ensemble(), &mut out);
        let dt_kernel = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, kernel = {:8.6} s", dt_kernel);
    }
    Ok(())
}

/// Time full steps (kick, drift, force, kick, reflect, finiteness check)
/// Paste output directly into a spreadsheet to graph
pub fn bench_step() -> SimResult<()> {
    println!("N,step_ms");

    for n in (100..=3200).step_by(100) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 800 { 5 } else { 1 };
        let mut system = make_system(n)?;

        // Warm-up one step
        system.step()?;

        let t0 = Instant::now();
        for _ in 0..steps {
            system.step()?;
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
    Ok(())
}
