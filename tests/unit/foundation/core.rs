use super::*;

#[test]
fn image_size_rejects_zero() {
    assert!(ImageSize::new(0, 10).is_err());
    assert!(ImageSize::new(10, 0).is_err());
    assert!(ImageSize::new(1, 1).is_ok());
}

#[test]
fn along_picks_axis_extent() {
    let s = ImageSize::new(640, 480).unwrap();
    assert_eq!(s.along(Axis::X), 640);
    assert_eq!(s.along(Axis::Y), 480);
    assert_eq!(Axis::X.orthogonal(), Axis::Y);
    assert_eq!(s.area(), Some(640 * 480));
}

#[test]
fn axis_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Axis::X).unwrap(), "\"x\"");
    let a: Axis = serde_json::from_str("\"y\"").unwrap();
    assert_eq!(a, Axis::Y);
}
