//! Signed integer geometry used by the painter and scroll area.
//!
//! Ratatui's `Rect` and `Position` are unsigned, but scroll offsets may go
//! negative (content smaller than the viewport, or scrolled past the top), so
//! content coordinates are expressed with `i32` components. Point arithmetic
//! wraps on overflow instead of panicking.

use std::ops::{Add, Neg, Sub};

use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.wrapping_add(rhs.x), self.y.wrapping_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.wrapping_sub(rhs.x), self.y.wrapping_sub(rhs.y))
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(self.x.wrapping_neg(), self.y.wrapping_neg())
    }
}

/// Point displaced by a size, used to find the far corner of a rectangle
impl Add<Size> for Point {
    type Output = Point;

    fn add(self, rhs: Size) -> Point {
        Point::new(
            self.x.wrapping_add(rhs.width),
            self.y.wrapping_add(rhs.height),
        )
    }
}

/// Width and height of a widget or of its content
///
/// Components are signed so that arithmetic on sizes (e.g. content height
/// minus viewport height) never needs saturating casts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl From<Rect> for Size {
    fn from(rect: Rect) -> Self {
        Size::new(i32::from(rect.width), i32::from(rect.height))
    }
}

/// Half-open rectangle: `min` is inside, `max` is the first point outside
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rectangle {
    pub min: Point,
    pub max: Point,
}

impl Rectangle {
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin, origin + size)
    }

    pub fn width(&self) -> i32 {
        self.max.x.wrapping_sub(self.min.x)
    }

    pub fn height(&self) -> i32 {
        self.max.y.wrapping_sub(self.min.y)
    }

    pub fn is_empty(&self) -> bool {
        self.max.x <= self.min.x || self.max.y <= self.min.y
    }

    pub fn contains(&self, p: Point) -> bool {
        self.min.x <= p.x && p.x < self.max.x && self.min.y <= p.y && p.y < self.max.y
    }

    /// Largest rectangle contained in both; `Rectangle::default()` when they
    /// do not overlap
    pub fn intersect(&self, other: &Rectangle) -> Rectangle {
        let r = Rectangle::new(
            Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        );
        if r.is_empty() { Rectangle::default() } else { r }
    }

    pub fn translate(&self, by: Point) -> Rectangle {
        Rectangle::new(self.min + by, self.max + by)
    }
}

/// Rectangle covering a ratatui area, relative to the area's own top-left
impl From<Rect> for Rectangle {
    fn from(rect: Rect) -> Self {
        Rectangle::from_origin_size(Point::ZERO, Size::from(rect))
    }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod geometry_tests;
