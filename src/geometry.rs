//! Plain 2D value types shared by input, viewport and graph code.
//!
//! Positions are `Point`s, differences between positions are `Vector`s.
//! Screen-space and content-space values use the same types; conversion
//! between the two lives in [`crate::input::coords`].

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A position in screen or content space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A displacement between two points
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

/// Width and height
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Axis-aligned rectangle, `min` inclusive corner plus size
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

#[inline]
pub fn point(x: f64, y: f64) -> Point {
    Point { x, y }
}

#[inline]
pub fn vector(x: f64, y: f64) -> Vector {
    Vector { x, y }
}

#[inline]
pub fn size(width: f64, height: f64) -> Size {
    Size { width, height }
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn to_vector(self) -> Vector {
        vector(self.x, self.y)
    }
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }
}

impl Rect {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Rectangle spanning two arbitrary corners
    pub fn from_corners(a: Point, b: Point) -> Self {
        let min = point(a.x.min(b.x), a.y.min(b.y));
        let max = point(a.x.max(b.x), a.y.max(b.y));
        Self::new(min, size(max.x - min.x, max.y - min.y))
    }

    #[inline]
    pub fn min(&self) -> Point {
        self.origin
    }

    #[inline]
    pub fn max(&self) -> Point {
        point(
            self.origin.x + self.size.width,
            self.origin.y + self.size.height,
        )
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.x <= max.x && p.y >= self.origin.y && p.y <= max.y
    }

    /// Smallest rectangle containing both
    pub fn union(&self, other: &Rect) -> Rect {
        let (a, b) = (self.max(), other.max());
        Rect::from_corners(
            point(self.origin.x.min(other.origin.x), self.origin.y.min(other.origin.y)),
            point(a.x.max(b.x), a.y.max(b.y)),
        )
    }

    /// Grow by `amount` on every side
    pub fn inflate(&self, amount: f64) -> Rect {
        Rect::new(
            point(self.origin.x - amount, self.origin.y - amount),
            size(self.size.width + 2.0 * amount, self.size.height + 2.0 * amount),
        )
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        vector(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        point(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, rhs: Vector) -> Point {
        point(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign<Vector> for Point {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign<Vector> for Point {
    fn sub_assign(&mut self, rhs: Vector) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        vector(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        vector(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        vector(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        vector(self.x / rhs, self.y / rhs)
    }
}
