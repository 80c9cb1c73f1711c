//! Integration tests for the rectangle value object.

use objects_json::{deserialize, serialize};
use objects_shapes::Rectangle;
use quickcheck_macros::quickcheck;

#[test]
fn test_new_stores_fields() {
    let r = Rectangle::new(10.0, 20.0);
    assert!((r.width - 10.0).abs() < f64::EPSILON);
    assert!((r.height - 20.0).abs() < f64::EPSILON);
}

#[test]
fn test_area() {
    assert!((Rectangle::new(10.0, 20.0).area() - 200.0).abs() < f64::EPSILON);
    assert!((Rectangle::new(0.5, 4.0).area() - 2.0).abs() < f64::EPSILON);
}

#[test]
fn test_area_follows_mutation() {
    let mut r = Rectangle::new(2.0, 3.0);
    assert!((r.area() - 6.0).abs() < f64::EPSILON);

    r.width = 5.0;
    r.height = 7.0;
    assert!((r.area() - 35.0).abs() < f64::EPSILON);
}

#[test]
fn test_no_validation() {
    assert!((Rectangle::new(-2.0, 3.0).area() + 6.0).abs() < f64::EPSILON);
    assert!(Rectangle::new(f64::NAN, 1.0).area().is_nan());
    assert!(Rectangle::new(f64::INFINITY, 2.0).area().is_infinite());
}

#[test]
fn test_json_round_trip() {
    let r = Rectangle::new(64.0, 32.5);
    let text = serialize(&r).unwrap();
    assert_eq!(text, r#"{"width":64.0,"height":32.5}"#);
    assert_eq!(deserialize::<Rectangle>(&text).unwrap(), r);
}

#[test]
fn test_deserialize_from_integers() {
    let r: Rectangle = deserialize(r#"{"width":10,"height":20}"#).unwrap();
    assert_eq!(r, Rectangle::new(10.0, 20.0));
}

#[quickcheck]
fn prop_area_is_width_times_height(width: f64, height: f64) -> bool {
    // Compare bit patterns so NaN inputs are checked too.
    Rectangle::new(width, height).area().to_bits() == (width * height).to_bits()
}
