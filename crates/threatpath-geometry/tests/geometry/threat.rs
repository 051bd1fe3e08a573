use threatpath_geometry::{Circle, Entity, Path, Point, Threat};

fn reference_threat() -> Threat {
    Circle::new(Point::new(3.0, 4.0), 3.0).unwrap().into()
}

#[test]
fn test_threat_dispatches_to_circle() {
    let threat = reference_threat();
    assert!(threat.contains(&Point::new(3.0, 4.0)));
    assert!(!threat.contains(&Point::new(8.0, 3.0)));
    assert_eq!(threat.bounds(), (0.0, 1.0, 6.0, 7.0));
    assert_eq!(threat.boundary().len(), 81);
}

#[test]
fn test_threat_risk_of_reference_line() {
    let threat = reference_threat();
    let path = Path::new(vec![Point::new(8.0, 3.0), Point::new(-0.5, 4.0)]).unwrap();
    let risk = threat.path_intersection_length(&path);
    assert!((risk - 5.94).abs() < 0.1);
}

#[test]
fn test_inner_region_inside_outer_region() {
    let circle = Circle::new(Point::new(-10.0, 2.0), 7.5).unwrap();
    let perimeter = Path::compute_path_length(circle.boundary());
    // Sampled perimeter approaches 2 PI (r + epsilon) from below.
    assert!(perimeter < 2.0 * std::f64::consts::PI * 8.5);
    assert!(perimeter > 2.0 * std::f64::consts::PI * 8.5 * 0.999);
    for p in circle.boundary() {
        assert!(!circle.contains(p));
    }
}

#[test]
fn test_circle_is_shareable_across_threads() {
    let circle = std::sync::Arc::new(Circle::new(Point::new(0.0, 0.0), 5.0).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let circle = circle.clone();
            std::thread::spawn(move || circle.boundary().len())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 81);
    }
}
