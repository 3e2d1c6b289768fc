// Copyright 2024 the Figures Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::cmp::Ordering;
use core::fmt;

use crate::{Circle, Point, Rectangle, Shape, SizeOrd};

/// An enum type with variants matching the shape types this crate exports.
///
/// This is the way to compare shapes whose kind is only known at runtime.
/// Shapes of different kinds are never equal, and their size comparisons
/// return `None` ("not comparable") rather than `false`.
///
/// # Examples
///
/// ```
/// use figures::{Circle, ConcreteShape, Rectangle};
///
/// let a = ConcreteShape::from(Circle::with_radius(2.0).unwrap());
/// let b = ConcreteShape::from(Circle::with_radius(3.0).unwrap());
/// let r = ConcreteShape::from(Rectangle::from_size((2.0, 3.0)).unwrap());
///
/// assert_eq!(a.size_lt(&b), Some(true));
/// assert_eq!(b.size_lt(&a), Some(false));
/// assert_eq!(a.size_lt(&r), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConcreteShape {
    /// A [`Circle`] instance.
    Circle(Circle),
    /// A [`Rectangle`] instance.
    Rectangle(Rectangle),
}

macro_rules! from_impl {
    ($Shape: ident) => {
        impl From<$Shape> for ConcreteShape {
            fn from(value: $Shape) -> Self {
                Self::$Shape(value)
            }
        }
    };
}

from_impl!(Circle);
from_impl!(Rectangle);

macro_rules! match_shape {
    ($x:ident, $i:ident, $e: expr) => {
        match $x {
            ConcreteShape::Circle($i) => $e,
            ConcreteShape::Rectangle($i) => $e,
        }
    };
}

impl ConcreteShape {
    /// Compare sizes, if both shapes are of the same kind.
    ///
    /// Circles compare by radius and rectangles by area. A circle and a
    /// rectangle are not comparable and give `None`.
    pub fn size_cmp(&self, other: &ConcreteShape) -> Option<Ordering> {
        match (self, other) {
            (ConcreteShape::Circle(a), ConcreteShape::Circle(b)) => Some(a.size_cmp(b)),
            (ConcreteShape::Rectangle(a), ConcreteShape::Rectangle(b)) => Some(a.size_cmp(b)),
            _ => None,
        }
    }

    /// Is `self` strictly smaller than `other`? `None` if not comparable.
    #[inline]
    pub fn size_lt(&self, other: &ConcreteShape) -> Option<bool> {
        self.size_cmp(other).map(Ordering::is_lt)
    }

    /// Is `self` smaller than or the same size as `other`? `None` if not comparable.
    #[inline]
    pub fn size_le(&self, other: &ConcreteShape) -> Option<bool> {
        self.size_cmp(other).map(Ordering::is_le)
    }

    /// Is `self` strictly larger than `other`? `None` if not comparable.
    #[inline]
    pub fn size_gt(&self, other: &ConcreteShape) -> Option<bool> {
        self.size_cmp(other).map(Ordering::is_gt)
    }

    /// Is `self` larger than or the same size as `other`? `None` if not comparable.
    #[inline]
    pub fn size_ge(&self, other: &ConcreteShape) -> Option<bool> {
        self.size_cmp(other).map(Ordering::is_ge)
    }
}

impl PartialEq<Circle> for ConcreteShape {
    fn eq(&self, other: &Circle) -> bool {
        matches!(self, ConcreteShape::Circle(c) if c == other)
    }
}

impl PartialEq<Rectangle> for ConcreteShape {
    fn eq(&self, other: &Rectangle) -> bool {
        matches!(self, ConcreteShape::Rectangle(r) if r == other)
    }
}

impl Shape for ConcreteShape {
    fn area(&self) -> f64 {
        match_shape!(self, it, it.area())
    }

    fn perimeter(&self) -> f64 {
        match_shape!(self, it, Shape::perimeter(it))
    }

    fn contains(&self, pt: Point) -> bool {
        match_shape!(self, it, it.contains(pt))
    }

    fn bounding_box(&self) -> Rectangle {
        match_shape!(self, it, it.bounding_box())
    }

    fn as_circle(&self) -> Option<Circle> {
        match_shape!(self, it, it.as_circle())
    }

    fn as_rectangle(&self) -> Option<Rectangle> {
        match_shape!(self, it, it.as_rectangle())
    }
}

impl fmt::Display for ConcreteShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match_shape!(self, it, fmt::Display::fmt(it, f))
    }
}
