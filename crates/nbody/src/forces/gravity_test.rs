use approx::assert_relative_eq;

use crate::body::Body;
use crate::error::{SimulationError, ValidationError};
use crate::forces::gravity::{pairwise_force, DirectGravity};
use crate::forces::{ForceModel, ForceSnapshot, G};
use crate::vector::Vector2D;

fn sun() -> Body {
    Body::point("Sun", 1.989e30, [0.0, 0.0], [0.0, 0.0]).unwrap()
}

fn earth() -> Body {
    Body::point("Earth", 5.972e24, [1.496e11, 0.0], [0.0, 29_780.0]).unwrap()
}

#[test]
fn test_force_toward_other_body() {
    let forces = DirectGravity::new()
        .resultant_forces(&[sun(), earth()])
        .unwrap();

    let on_earth = forces.get("Earth").unwrap();
    let on_sun = forces.get("Sun").unwrap();

    assert!(on_earth.x() < 0.0);
    assert!(on_earth.y().abs() < on_earth.x().abs() * 1e-12);
    assert!(on_sun.x() > 0.0);
}

#[test]
fn test_force_magnitude_uses_both_masses() {
    let force = pairwise_force(&earth(), &sun(), G).unwrap();

    let expected = G * 5.972e24 * 1.989e30 / (1.496e11 * 1.496e11);
    assert_relative_eq!(force.magnitude(), expected, max_relative = 1e-12);
}

#[test]
fn test_unequal_masses_feel_equal_force() {
    let light = Body::point("light", 1.0, [0.0, 0.0], [0.0, 0.0]).unwrap();
    let heavy = Body::point("heavy", 1000.0, [2.0, 0.0], [0.0, 0.0]).unwrap();

    let on_light = pairwise_force(&light, &heavy, 1.0).unwrap();
    let on_heavy = pairwise_force(&heavy, &light, 1.0).unwrap();

    // G m1 m2 / r² = 1000 / 4
    assert_relative_eq!(on_light.magnitude(), 250.0, max_relative = 1e-12);
    assert_relative_eq!(on_heavy.magnitude(), 250.0, max_relative = 1e-12);
}

#[test]
fn test_newtons_third_law_pairwise() {
    let bodies = [
        Body::point("a", 3.0, [0.3, -1.2], [0.0, 0.0]).unwrap(),
        Body::point("b", 5.0, [2.0, 0.7], [0.0, 0.0]).unwrap(),
        Body::point("c", 0.5, [-4.0, 2.5], [0.0, 0.0]).unwrap(),
    ];

    for a in &bodies {
        for b in &bodies {
            if a.name() == b.name() {
                continue;
            }
            let ab = pairwise_force(a, b, 1.0).unwrap();
            let ba = pairwise_force(b, a, 1.0).unwrap();

            assert_relative_eq!(ab.x(), -ba.x(), epsilon = 1e-12, max_relative = 1e-12);
            assert_relative_eq!(ab.y(), -ba.y(), epsilon = 1e-12, max_relative = 1e-12);
        }
    }
}

#[test]
fn test_resultants_sum_to_zero() {
    let bodies = [
        Body::point("a", 3.0, [0.3, -1.2], [0.0, 0.0]).unwrap(),
        Body::point("b", 5.0, [2.0, 0.7], [0.0, 0.0]).unwrap(),
        Body::point("c", 0.5, [-4.0, 2.5], [0.0, 0.0]).unwrap(),
    ];

    let forces = DirectGravity::with_constant(1.0)
        .resultant_forces(&bodies)
        .unwrap();
    let net = forces.net();

    assert!(net.magnitude() < 1e-12, "net force: {:?}", net);
}

#[test]
fn test_resultant_is_vector_sum() {
    // Two equal pulls at right angles on the body at the origin
    let bodies = [
        Body::point("o", 1.0, [0.0, 0.0], [0.0, 0.0]).unwrap(),
        Body::point("east", 1.0, [1.0, 0.0], [0.0, 0.0]).unwrap(),
        Body::point("north", 1.0, [0.0, 1.0], [0.0, 0.0]).unwrap(),
    ];

    let forces = DirectGravity::with_constant(1.0)
        .resultant_forces(&bodies)
        .unwrap();
    let on_origin = forces.get("o").unwrap();

    assert_relative_eq!(on_origin.x(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(on_origin.y(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_snapshot_follows_body_order() {
    let forces = DirectGravity::new()
        .resultant_forces(&[earth(), sun()])
        .unwrap();

    let names: Vec<&str> = forces.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["Earth", "Sun"]);
    assert_eq!(forces.by_index(0), forces.get("Earth"));
    assert_eq!(forces.len(), 2);
}

#[test]
fn test_single_body_feels_no_force() {
    let forces = DirectGravity::new().resultant_forces(&[earth()]).unwrap();
    assert_eq!(forces.get("Earth").unwrap().magnitude(), 0.0);
}

#[test]
fn test_empty_system() {
    let forces = DirectGravity::new().resultant_forces(&[]).unwrap();
    assert!(forces.is_empty());
}

#[test]
fn test_coincident_bodies_rejected() {
    let a = Body::point("a", 1.0, [1.0, 1.0], [0.0, 0.0]).unwrap();
    let b = Body::point("b", 2.0, [1.0, 1.0], [5.0, 0.0]).unwrap();

    let err = DirectGravity::new().resultant_forces(&[a, b]).unwrap_err();

    assert_eq!(
        err,
        SimulationError::CoincidentBodies {
            first: "a".into(),
            second: "b".into()
        }
    );
}

#[test]
fn test_potential_energy_negative() {
    let pe = DirectGravity::new()
        .potential_energy(&[sun(), earth()])
        .unwrap();

    let expected = -G * 1.989e30 * 5.972e24 / 1.496e11;
    assert!(pe < 0.0);
    assert_relative_eq!(pe, expected, max_relative = 1e-12);
}

#[test]
fn test_potential_energy_more_bodies_more_negative() {
    let gravity = DirectGravity::new();
    let pe_two = gravity.potential_energy(&[sun(), earth()]).unwrap();

    let mars = Body::point("Mars", 6.39e23, [0.0, 2.279e11], [-24_070.0, 0.0]).unwrap();
    let pe_three = gravity.potential_energy(&[sun(), earth(), mars]).unwrap();

    assert!(pe_three < pe_two);
}

#[test]
fn test_potential_energy_coincident_rejected() {
    let a = Body::point("a", 1.0, [0.0, 0.0], [0.0, 0.0]).unwrap();
    let b = Body::point("b", 1.0, [0.0, 0.0], [0.0, 0.0]).unwrap();

    assert!(DirectGravity::new().potential_energy(&[a, b]).is_err());
}

#[test]
fn test_try_with_constant_validates() {
    assert_eq!(DirectGravity::try_with_constant(G).unwrap().g, G);
    assert_eq!(DirectGravity::try_with_constant(1.0).unwrap().g, 1.0);

    for g in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            DirectGravity::try_with_constant(g),
            Err(ValidationError::InvalidGravitationalConstant(_))
        ));
    }
}

#[test]
fn test_snapshot_resolve_by_name() {
    let mut snapshot = ForceSnapshot::default();
    snapshot.push("b", Vector2D::new(2.0, 0.0));
    snapshot.push("a", Vector2D::new(1.0, 0.0));

    assert_eq!(snapshot.resolve(1, "a"), Some(Vector2D::new(1.0, 0.0)));
    assert_eq!(snapshot.resolve(0, "a"), Some(Vector2D::new(1.0, 0.0)));
    assert_eq!(snapshot.resolve(5, "b"), Some(Vector2D::new(2.0, 0.0)));
    assert_eq!(snapshot.resolve(0, "c"), None);
}
