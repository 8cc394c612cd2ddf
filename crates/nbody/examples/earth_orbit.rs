//! Earth around the Sun for one year
//!
//! Runs the same system at several timesteps and reports how far the orbit
//! drifts, along with energy and momentum conservation.
//!
//! Run with: cargo run --package nbody --example earth_orbit

use nbody::body::Body;
use nbody::diagnostics::{total_angular_momentum, total_kinetic_energy, total_momentum};
use nbody::forces::ForceModel;
use nbody::integrator::Integrator;
use nbody::simulation::{NewtonianSimulation, SimulationConfig};
use nbody::SimResult;

const YEAR: f64 = 3.156e7; // s
const AU: f64 = 1.496e11; // m

fn earth_and_sun() -> Vec<Body> {
    vec![
        Body::point("Earth", 5.972e24, [AU, 0.0], [0.0, 29_780.0]).expect("valid Earth"),
        Body::point("Sun", 1.989e30, [0.0, 0.0], [0.0, 0.0]).expect("valid Sun"),
    ]
}

fn main() -> SimResult<()> {
    println!("Earth-Sun system: one year at several timesteps\n");
    println!("{}", "=".repeat(60));

    for (label, dt) in [("week", 604_800.0), ("day", 86_400.0), ("hour", 3_600.0)] {
        report(label, dt)?;
    }

    // The recorded series, as a boundary layer would consume it
    let series = nbody::run(earth_and_sun(), YEAR, 604_800.0)?;
    println!("\nWeekly series: {} samples", series.len());
    println!("  bodies: {:?}", series.body_names());
    println!("  frames: {}", series.frames().count());
    if let Some(last) = series.trajectory("Earth").last() {
        println!(
            "  Earth at t = {:.3e} s: ({:.4e}, {:.4e}) m",
            last.time, last.x, last.y
        );
    }

    Ok(())
}

fn report(label: &str, dt: f64) -> SimResult<()> {
    let sim = NewtonianSimulation::default();
    let config = SimulationConfig::new(YEAR, dt);
    let mut bodies = earth_and_sun();

    let initial_energy =
        total_kinetic_energy(&bodies) + sim.force_model().potential_energy(&bodies)?;
    let initial_l = total_angular_momentum(&bodies);
    let initial_p = total_momentum(&bodies);

    let mut r_min = f64::INFINITY;
    let mut r_max = 0.0_f64;
    for _ in 0..config.step_count() {
        sim.advance(&mut bodies, dt)?;
        let r = bodies[0].distance_to(&bodies[1]);
        r_min = r_min.min(r);
        r_max = r_max.max(r);
    }

    let energy = total_kinetic_energy(&bodies) + sim.force_model().potential_energy(&bodies)?;
    let energy_error = ((energy - initial_energy) / initial_energy).abs();
    let l_error = ((total_angular_momentum(&bodies) - initial_l) / initial_l).abs();
    let p_drift = (total_momentum(&bodies) - initial_p).magnitude() / initial_p.magnitude();

    println!(
        "\ndt = 1 {label} ({} steps, order {} integrator)",
        config.step_count(),
        sim.integrator().order()
    );
    println!(
        "  separation: {:.4} - {:.4} AU",
        r_min / AU,
        r_max / AU
    );
    println!("  ΔE = {:.2e}, ΔL = {:.2e}, Δp = {:.2e}", energy_error, l_error, p_drift);

    Ok(())
}
