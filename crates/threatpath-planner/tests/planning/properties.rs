use proptest::prelude::*;
use threatpath_geometry::{Circle, Path, Point};
use threatpath_planner::{safest_path, shortest_path, shortest_path_with_budget_constraint};

fn outside_point(radius: f64) -> impl Strategy<Value = Point> {
    (0.0..std::f64::consts::TAU, 1.5..6.0)
        .prop_map(move |(angle, scale)| Point::new(0.0, 0.0).shifted(radius * scale, angle))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn safest_path_has_zero_risk(source in outside_point(3.0), target in outside_point(3.0)) {
        let threat = Circle::new(Point::new(0.0, 0.0), 3.0).unwrap();
        let planned = safest_path(&source, &target, &threat).unwrap();
        prop_assert_eq!(planned.risk, 0.0);

        let direct = shortest_path(&source, &target, &threat).unwrap();
        if direct.risk > 0.0 {
            prop_assert!(planned.length > direct.length);
        } else {
            prop_assert!(planned.length >= direct.length - 1e-9);
        }

        let half_boundary = 0.5 * Path::compute_path_length(threat.boundary());
        let bound = source.distance_to(&threat.center())
            + target.distance_to(&threat.center())
            + half_boundary;
        prop_assert!(planned.length < bound);
    }

    #[test]
    fn shortest_and_safest_are_symmetric(source in outside_point(3.0), target in outside_point(3.0)) {
        let threat = Circle::new(Point::new(0.0, 0.0), 3.0).unwrap();
        let forward = shortest_path(&source, &target, &threat).unwrap();
        let backward = shortest_path(&target, &source, &threat).unwrap();
        prop_assert!((forward.length - backward.length).abs() < 1e-6);
        prop_assert!((forward.risk - backward.risk).abs() < 1e-6);

        let forward = safest_path(&source, &target, &threat).unwrap();
        let backward = safest_path(&target, &source, &threat).unwrap();
        prop_assert!((forward.length - backward.length).abs() < 1e-6);
    }

    #[test]
    fn budget_path_meets_budget(
        source in outside_point(3.0),
        target in outside_point(3.0),
        fraction in 0.1..0.9f64,
    ) {
        let threat = Circle::new(Point::new(0.0, 0.0), 3.0).unwrap();
        let direct = shortest_path(&source, &target, &threat).unwrap();
        prop_assume!(direct.risk > 0.5);

        let budget = fraction * direct.risk;
        let planned = shortest_path_with_budget_constraint(&source, &target, &threat, budget).unwrap();
        prop_assert!((planned.risk - budget).abs() < 1e-2);
        prop_assert!(planned.length >= direct.length - 1e-9);
        prop_assert_eq!(planned.path.first(), source);
        prop_assert_eq!(planned.path.last(), target);

        let swapped = shortest_path_with_budget_constraint(&target, &source, &threat, budget).unwrap();
        prop_assert!((swapped.length - planned.length).abs() < 1e-3);
        prop_assert!((swapped.risk - planned.risk).abs() < 1e-3);
    }
}
