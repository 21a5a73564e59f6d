use dashboard_rs::core::{LinearScale, Viewport};

#[test]
fn scale_round_trip_within_tolerance() {
    let scale = LinearScale::new(1998.0, 2024.0, 740.0).expect("valid scale");

    let original = 2011.5;
    let px = scale.domain_to_pixel(original);
    let recovered = scale.pixel_to_domain(px);

    assert!((recovered - original).abs() <= 1e-9);
}

#[test]
fn domain_edges_map_to_track_edges() {
    let scale = LinearScale::new(0.0, 70.0, 720.0).expect("valid scale");
    assert_eq!(scale.domain_to_pixel(0.0), 0.0);
    assert_eq!(scale.domain_to_pixel(70.0), 720.0);
    assert_eq!(scale.pixel_to_domain(360.0), 35.0);

    let uneven = LinearScale::new(0.1, 0.7, 3.0).expect("valid scale");
    assert_eq!(uneven.pixel_to_domain(0.0), 0.1);
    assert_eq!(uneven.pixel_to_domain(3.0), 0.7);
}

#[test]
fn single_value_domain_collapses_to_left_edge() {
    let scale = LinearScale::new(2020.0, 2020.0, 740.0).expect("degenerate domain");
    assert_eq!(scale.domain_to_pixel(2020.0), 0.0);
    assert_eq!(scale.pixel_to_domain(512.0), 2020.0);
}

#[test]
fn clamps_stay_inside_track_and_domain() {
    let scale = LinearScale::new(10.0, 20.0, 100.0).expect("valid scale");
    assert_eq!(scale.clamp_pixel(-4.0), 0.0);
    assert_eq!(scale.clamp_pixel(140.0), 100.0);
    assert_eq!(scale.clamp_domain(25.0), 20.0);
    assert_eq!(scale.clamp_domain(9.0), 10.0);
}

#[test]
fn invalid_scales_are_rejected() {
    assert!(LinearScale::new(5.0, 1.0, 100.0).is_err());
    assert!(LinearScale::new(f64::NAN, 1.0, 100.0).is_err());
    assert!(LinearScale::new(0.0, 1.0, 0.0).is_err());
    assert!(LinearScale::new(0.0, 1.0, f64::INFINITY).is_err());
}

#[test]
fn viewport_validity() {
    assert!(Viewport::new(1250, 600).is_valid());
    assert!(!Viewport::new(0, 600).is_valid());
    assert!(!Viewport::new(1250, 0).is_valid());
}
