//! Tests for geometry primitives

use super::*;

#[test]
fn test_point_arithmetic() {
    let a = Point::new(2, 3);
    let b = Point::new(-5, 7);

    assert_eq!(a + b, Point::new(-3, 10));
    assert_eq!(a - b, Point::new(7, -4));
    assert_eq!(-a, Point::new(-2, -3));
    assert_eq!(a + Size::new(10, 10), Point::new(12, 13));
}

#[test]
fn test_size_from_rect() {
    let rect = Rect::new(4, 5, 80, 24);
    assert_eq!(Size::from(rect), Size::new(80, 24));
}

#[test]
fn test_rectangle_from_rect_is_area_local() {
    let rect = Rect::new(4, 5, 80, 24);
    let r = Rectangle::from(rect);

    assert_eq!(r.min, Point::ZERO);
    assert_eq!(r.max, Point::new(80, 24));
}

#[test]
fn test_rectangle_contains_is_half_open() {
    let r = Rectangle::from_origin_size(Point::new(2, 3), Size::new(10, 10));

    assert!(r.contains(Point::new(2, 3)));
    assert!(r.contains(Point::new(11, 12)));
    assert!(!r.contains(Point::new(12, 12)));
    assert!(!r.contains(Point::new(11, 13)));
    assert!(!r.contains(Point::new(1, 3)));
}

#[test]
fn test_rectangle_intersect_overlapping() {
    let a = Rectangle::new(Point::new(0, 0), Point::new(10, 10));
    let b = Rectangle::new(Point::new(5, -5), Point::new(20, 7));

    assert_eq!(
        a.intersect(&b),
        Rectangle::new(Point::new(5, 0), Point::new(10, 7))
    );
}

#[test]
fn test_rectangle_intersect_disjoint_is_empty() {
    let a = Rectangle::new(Point::new(0, 0), Point::new(10, 10));
    let b = Rectangle::new(Point::new(10, 0), Point::new(20, 10));

    let r = a.intersect(&b);
    assert!(r.is_empty());
    assert_eq!(r, Rectangle::default());
}

#[test]
fn test_rectangle_with_negative_size_is_empty() {
    let r = Rectangle::from_origin_size(Point::new(3, 3), Size::new(-2, 5));
    assert!(r.is_empty());
    assert!(!r.contains(Point::new(3, 3)));
}

#[test]
fn test_rectangle_translate() {
    let r = Rectangle::from_origin_size(Point::ZERO, Size::new(4, 2));
    let moved = r.translate(Point::new(-1, 6));

    assert_eq!(moved.min, Point::new(-1, 6));
    assert_eq!(moved.width(), 4);
    assert_eq!(moved.height(), 2);
}

#[test]
fn test_point_arithmetic_wraps_at_limits() {
    let max = Point::new(i32::MAX, i32::MAX);

    assert_eq!(max + Point::new(1, 0), Point::new(i32::MIN, i32::MAX));
    assert_eq!(Point::new(i32::MIN, 0) - Point::new(1, 0), Point::new(i32::MAX, 0));
    assert_eq!(-Point::new(i32::MIN, 5), Point::new(i32::MIN, -5));
    assert_eq!(max + Size::new(1, 1), Point::new(i32::MIN, i32::MIN));
}
