use threatpath_core::GeometryError;
use threatpath_geometry::{Circle, Point};

fn dot_with_centers(c1: &Circle, c2: &Circle, a: Point, b: Point) -> f64 {
    let cx = c2.center().x - c1.center().x;
    let cy = c2.center().y - c1.center().y;
    (b.x - a.x) * cx + (b.y - a.y) * cy
}

fn ordered_by_y(a: Point, b: Point) -> (Point, Point) {
    if a.y >= b.y {
        (a, b)
    } else {
        (b, a)
    }
}

#[test]
fn test_partition_equal_circles_spans_hull() {
    let c1 = Circle::new(Point::new(0.0, 0.0), 10.0).unwrap();
    let c2 = Circle::new(Point::new(100.0, 0.0), 10.0).unwrap();
    let source = Point::new(50.0, 80.0);
    let target = Point::new(50.0, -80.0);
    let all = vec![c1.clone(), c2.clone()];

    let partition = Circle::partition_between(&c1, &c2, &source, &target, &all).unwrap();

    assert!(dot_with_centers(&c1, &c2, partition.a, partition.b).abs() < 1e-6);
    let (top, bottom) = ordered_by_y(partition.a, partition.b);
    assert!(top.distance_to(&source) < 1e-6);
    assert!(bottom.distance_to(&target) < 1e-6);
    assert!((partition.length() - 160.0).abs() < 1e-6);
}

#[test]
fn test_partition_pivot_weighted_by_radii() {
    let c1 = Circle::new(Point::new(0.0, 0.0), 20.0).unwrap();
    let c2 = Circle::new(Point::new(100.0, 0.0), 10.0).unwrap();
    let source = Point::new(40.0, 90.0);
    let target = Point::new(60.0, -90.0);
    let all = vec![c1.clone(), c2.clone()];

    let partition = Circle::partition_between(&c1, &c2, &source, &target, &all).unwrap();

    // (r1 + (d - r2)) / 2 = (20 + 90) / 2
    assert!((partition.a.x - 55.0).abs() < 1e-6);
    assert!((partition.b.x - 55.0).abs() < 1e-6);
    assert!(dot_with_centers(&c1, &c2, partition.a, partition.b).abs() < 1e-6);
    let (top, bottom) = ordered_by_y(partition.a, partition.b);
    assert!(top.y > 21.0);
    assert!(bottom.y < -21.0);
}

#[test]
fn test_partition_is_perpendicular_for_diagonal_centers() {
    let c1 = Circle::new(Point::new(0.0, 0.0), 5.0).unwrap();
    let c2 = Circle::new(Point::new(30.0, 40.0), 5.0).unwrap();
    let source = Point::new(-20.0, 60.0);
    let target = Point::new(50.0, -20.0);
    let all = vec![c1.clone(), c2.clone()];

    let partition = Circle::partition_between(&c1, &c2, &source, &target, &all).unwrap();
    let length = partition.length();
    assert!(length > 0.0);
    assert!(dot_with_centers(&c1, &c2, partition.a, partition.b).abs() / length < 1e-6);
}

#[test]
fn test_partition_shared_center_is_degenerate() {
    let c1 = Circle::new(Point::new(0.0, 0.0), 5.0).unwrap();
    let c2 = Circle::new(Point::new(0.0, 0.0), 8.0).unwrap();
    let result = Circle::partition_between(
        &c1,
        &c2,
        &Point::new(-20.0, 0.0),
        &Point::new(20.0, 0.0),
        &[c1.clone(), c2.clone()],
    );
    assert!(matches!(
        result,
        Err(GeometryError::DegeneratePartition { .. })
    ));
}

#[test]
fn test_partition_missing_hull_is_degenerate() {
    let c1 = Circle::new(Point::new(100.0, 0.0), 5.0).unwrap();
    let c2 = Circle::new(Point::new(200.0, 0.0), 5.0).unwrap();
    let result = Circle::partition_between(
        &c1,
        &c2,
        &Point::new(0.0, 0.0),
        &Point::new(0.0, 10.0),
        &[],
    );
    assert!(matches!(
        result,
        Err(GeometryError::DegeneratePartition { .. })
    ));
}
