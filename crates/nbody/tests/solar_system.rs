//! Earth–Sun runs through the public API.
//!
//! SI units throughout: metres, kilograms, seconds.

use nbody::body::Body;
use nbody::diagnostics::frame_momentum;
use nbody::series::TimeSeries;
use nbody::simulation::{NewtonianSimulation, SimulationConfig};
use nbody::{SimulationError, ValidationError};

const EARTH_MASS: f64 = 5.972e24;
const SUN_MASS: f64 = 1.989e30;
const YEAR: f64 = 3.156e7;
const WEEK: f64 = 604_800.0;
const DAY: f64 = 86_400.0;

fn earth_and_sun() -> Vec<Body> {
    vec![
        Body::point("Earth", EARTH_MASS, [1.496e11, 0.0], [0.0, 29_780.0]).unwrap(),
        Body::point("Sun", SUN_MASS, [0.0, 0.0], [0.0, 0.0]).unwrap(),
    ]
}

fn sun_max_displacement(series: &TimeSeries) -> f64 {
    series
        .trajectory("Sun")
        .map(|s| s.x.hypot(s.y))
        .fold(0.0, f64::max)
}

#[test]
fn weekly_steps_for_one_year() {
    let series = nbody::run(earth_and_sun(), YEAR, WEEK).unwrap();

    // t = 0, 1 week, ..., 52 weeks: the last multiple of a week below 3.156e7 s
    let earth: Vec<_> = series.trajectory("Earth").collect();
    let sun: Vec<_> = series.trajectory("Sun").collect();
    assert_eq!(earth.len(), 53);
    assert_eq!(sun.len(), 53);
    assert_eq!(series.len(), 106);

    let last = series.last().unwrap();
    assert_eq!(last.time, 52.0 * WEEK);
    assert!(last.time < YEAR);

    assert!(sun_max_displacement(&series) < 1.0e9);

    // One-week steps are coarse for this integrator: the orbit widens but
    // Earth stays bound
    for s in &earth {
        let r = s.x.hypot(s.y);
        assert!(r > 1.4e11 && r < 3.0e11, "r = {r:e} at t = {}", s.time);
    }
}

#[test]
fn daily_steps_keep_earth_near_one_au() {
    let series = nbody::run(earth_and_sun(), YEAR, DAY).unwrap();

    assert_eq!(series.trajectory("Earth").count(), 366);
    for s in series.trajectory("Earth") {
        assert!(
            (-1.6e11..=1.6e11).contains(&s.x),
            "x = {:e} at t = {}",
            s.x,
            s.time
        );
    }
    assert!(sun_max_displacement(&series) < 1.0e9);
}

#[test]
fn earth_completes_roughly_one_orbit() {
    let series = nbody::run(earth_and_sun(), YEAR, DAY).unwrap();

    // Earth passes through every quadrant
    let earth: Vec<_> = series.trajectory("Earth").collect();
    assert!(earth.iter().any(|s| s.x > 0.0 && s.y > 0.0));
    assert!(earth.iter().any(|s| s.x < 0.0 && s.y > 0.0));
    assert!(earth.iter().any(|s| s.x < 0.0 && s.y < 0.0));
    assert!(earth.iter().any(|s| s.x > 0.0 && s.y < 0.0));
}

#[test]
fn total_momentum_conserved() {
    let series = nbody::run(earth_and_sun(), YEAR, WEEK).unwrap();
    let masses = [("Earth", EARTH_MASS), ("Sun", SUN_MASS)];
    let initial = EARTH_MASS * 29_780.0;

    for frame in series.frames() {
        let p = frame_momentum(frame, &masses);
        assert!(p.x().abs() < initial * 1e-9, "px = {:e}", p.x());
        assert!((p.y() - initial).abs() < initial * 1e-9, "py = {:e}", p.y());
    }
}

#[test]
fn repeated_runs_are_identical() {
    let first = nbody::run(earth_and_sun(), YEAR, WEEK).unwrap();
    let second = nbody::run(earth_and_sun(), YEAR, WEEK).unwrap();

    assert_eq!(first.export(), second.export());
}

#[test]
fn timestep_of_a_full_year_records_nothing() {
    assert!(nbody::run(earth_and_sun(), YEAR, YEAR).unwrap().is_empty());
    assert!(nbody::run(earth_and_sun(), YEAR, 2.0 * YEAR).unwrap().is_empty());
}

#[test]
fn massless_body_rejected_before_run() {
    let err = Body::point("Ghost", 0.0, [1.0, 0.0], [0.0, 0.0]).unwrap_err();
    assert!(matches!(err, ValidationError::NonPositiveMass { .. }));
}

#[test]
fn step_budget_enforced() {
    let sim = NewtonianSimulation::default();
    let config = SimulationConfig::new(YEAR, DAY).with_max_steps(100);

    let err = sim.run(earth_and_sun(), &config).unwrap_err();
    assert!(matches!(err, SimulationError::Configuration(_)));
}

#[test]
fn first_sample_follows_first_step() {
    let series = nbody::run(earth_and_sun(), 2.0 * DAY, DAY).unwrap();
    let first = &series.export()[0];

    assert_eq!(first.body, "Earth");
    assert_eq!(first.time, 0.0);
    assert!(first.vy > 29_000.0);
    assert!(first.ax < 0.0);
}
