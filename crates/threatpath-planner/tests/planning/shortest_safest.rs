use threatpath_core::Error;
use threatpath_geometry::{Circle, Point};
use threatpath_planner::{safest_path, shortest_path, SingleThreatPlanner};

fn reference_threat() -> Circle {
    Circle::new(Point::new(3.0, 4.0), 3.0).unwrap()
}

#[test]
fn test_shortest_path_reference_scenario() {
    let threat = reference_threat();
    let source = Point::new(8.0, 3.0);
    let target = Point::new(-0.5, 4.0);

    let planned = shortest_path(&source, &target, &threat).unwrap();
    assert_eq!(planned.path.points(), &[source, target]);
    assert!((planned.length - source.distance_to(&target)).abs() < 1e-12);
    assert!((planned.risk - 5.94).abs() < 0.1);
}

#[test]
fn test_safest_path_avoids_threat() {
    let threat = reference_threat();
    let source = Point::new(8.0, 3.0);
    let target = Point::new(-0.5, 4.0);
    let direct = source.distance_to(&target);

    let planned = safest_path(&source, &target, &threat).unwrap();
    assert_eq!(planned.risk, 0.0);
    assert!(planned.length > direct);
    // Never longer than going half way around the outer circle plus both legs.
    let bound = source.distance_to(&threat.center())
        + target.distance_to(&threat.center())
        + std::f64::consts::PI * threat.outer_radius();
    assert!(planned.length < bound);
    assert_eq!(planned.path.first(), source);
    assert_eq!(planned.path.last(), target);
}

#[test]
fn test_safest_path_on_vertical_crossing() {
    let threat = reference_threat();
    let planned = safest_path(&Point::new(3.0, 10.0), &Point::new(3.0, -5.0), &threat).unwrap();
    assert_eq!(planned.risk, 0.0);
    assert!(planned.length > 15.0);
    assert!(planned.path.points().len() > 3);
}

#[test]
fn test_safest_path_clear_line_is_direct() {
    let threat = reference_threat();
    let source = Point::new(100.0, 100.0);
    let target = Point::new(-200.0, 90.0);
    let planned = safest_path(&source, &target, &threat).unwrap();
    assert_eq!(planned.path.points(), &[source, target]);
    assert_eq!(planned.risk, 0.0);
}

#[test]
fn test_planning_is_repeatable() {
    let threat = reference_threat();
    let planner = SingleThreatPlanner::new();
    let source = Point::new(8.0, 3.0);
    let target = Point::new(-0.5, 4.0);

    let first = planner.safest_path(&source, &target, &threat).unwrap();
    let second = planner.safest_path(&source, &target, &threat).unwrap();
    assert_eq!(first, second);

    let first = planner
        .shortest_path_with_budget_constraint(&source, &target, &threat, 2.5)
        .unwrap();
    let second = planner
        .shortest_path_with_budget_constraint(&source, &target, &threat, 2.5)
        .unwrap();
    assert_eq!(first.path, second.path);
    assert_eq!(first.risk.to_bits(), second.risk.to_bits());
}

#[test]
fn test_endpoint_on_rim_is_rejected() {
    let threat = reference_threat();
    let on_rim = Point::new(6.0, 4.0);
    let err = safest_path(&on_rim, &Point::new(20.0, 4.0), &threat).unwrap_err();
    assert!(err.is_endpoint_inside());
    assert!(matches!(err, Error::Planning(_)));
}

#[test]
fn test_endpoint_in_epsilon_ring_is_allowed() {
    // Between r and r + epsilon: outside the threat, inside the routing circle.
    let threat = reference_threat();
    let source = Point::new(6.5, 4.0);
    let target = Point::new(-5.0, 4.0);
    let planned = safest_path(&source, &target, &threat).unwrap();
    assert_eq!(planned.risk, 0.0);
    assert_eq!(planned.path.first(), source);
    assert_eq!(planned.path.last(), target);
}
