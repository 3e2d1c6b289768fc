// Copyright 2024 the Figures Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A rectangle.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::common::cmp_measure;
use crate::error::{check_dimensions, check_offset};
use crate::{Circle, InvalidArgument, Point, Shape, Size, SizeOrd, Vec2};

/// An axis-aligned rectangle, anchored at its top-left corner.
///
/// "Top-left" assumes a y-down space: the rectangle covers
/// `x..=x + width` horizontally and `y..=y + height` vertically. Width and
/// height are always finite and non-negative.
///
/// Two rectangles are equal when all four fields match exactly.
/// Rectangles are ordered by area through [`SizeOrd`].
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Rectangle {
    origin: Point,
    size: Size,
}

impl Rectangle {
    /// A new rectangle from its top-left corner and size.
    ///
    /// # Examples
    ///
    /// ```
    /// use figures::{Rectangle, Size};
    ///
    /// let r = Rectangle::new((1.0, 2.0), (3.0, 4.0)).unwrap();
    /// assert_eq!(r.size(), Size::new(3.0, 4.0));
    /// assert!(Rectangle::new((0.0, 0.0), (3.0, -4.0)).is_err());
    /// ```
    #[inline]
    pub fn new(
        origin: impl Into<Point>,
        size: impl Into<Size>,
    ) -> Result<Rectangle, InvalidArgument> {
        let size = size.into();
        check_dimensions(size)?;
        Ok(Rectangle::from_parts(origin.into(), size))
    }

    /// A new rectangle with its top-left corner at the origin.
    #[inline]
    pub fn from_size(size: impl Into<Size>) -> Result<Rectangle, InvalidArgument> {
        Rectangle::new(Point::ZERO, size)
    }

    /// Assemble a rectangle from a size that is already known to be valid.
    #[inline]
    pub(crate) fn from_parts(origin: Point, size: Size) -> Rectangle {
        debug_assert!(check_dimensions(size).is_ok(), "invalid size {size:?}");
        Rectangle { origin, size }
    }

    /// The width of the rectangle.
    #[inline]
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// The height of the rectangle.
    #[inline]
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// The size of the rectangle.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The top-left corner.
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// The x coordinate of the top-left corner.
    #[inline]
    pub fn x(&self) -> f64 {
        self.origin.x
    }

    /// The y coordinate of the top-left corner.
    #[inline]
    pub fn y(&self) -> f64 {
        self.origin.y
    }

    /// Change width and height together.
    ///
    /// If either is negative, NaN or infinite, neither is changed.
    pub fn set_dimensions(&mut self, width: f64, height: f64) -> Result<(), InvalidArgument> {
        let size = Size::new(width, height);
        check_dimensions(size)?;
        self.size = size;
        Ok(())
    }

    /// Move the top-left corner to a new position.
    #[inline]
    pub fn set_position(&mut self, origin: impl Into<Point>) {
        self.origin = origin.into();
    }

    /// Move the rectangle by a relative offset.
    ///
    /// A NaN component is rejected and leaves the rectangle in place.
    pub fn translate(&mut self, offset: impl Into<Vec2>) -> Result<(), InvalidArgument> {
        let offset = offset.into();
        check_offset(offset)?;
        self.origin += offset;
        Ok(())
    }

    /// The area of the rectangle.
    #[inline]
    pub fn area(&self) -> f64 {
        self.size.area()
    }

    /// The perimeter of the rectangle, `2·(width + height)`.
    #[inline]
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.size.width + self.size.height)
    }

    /// Is the point `(x, y)` inside the rectangle?
    ///
    /// All four edges count as inside.
    ///
    /// # Examples
    ///
    /// ```
    /// use figures::Rectangle;
    ///
    /// let r = Rectangle::from_size((10.0, 10.0)).unwrap();
    /// assert!(r.is_point_inside(10.0, 10.0));
    /// assert!(!r.is_point_inside(10.1, 10.0));
    /// ```
    #[inline]
    pub fn is_point_inside(&self, x: f64, y: f64) -> bool {
        let Point { x: x0, y: y0 } = self.origin;
        x0 <= x && x <= x0 + self.size.width && y0 <= y && y <= y0 + self.size.height
    }
}

impl Add<Vec2> for Rectangle {
    type Output = Rectangle;

    #[inline]
    fn add(self, v: Vec2) -> Rectangle {
        Rectangle {
            origin: self.origin + v,
            size: self.size,
        }
    }
}

impl AddAssign<Vec2> for Rectangle {
    #[inline]
    fn add_assign(&mut self, v: Vec2) {
        self.origin += v;
    }
}

impl Sub<Vec2> for Rectangle {
    type Output = Rectangle;

    #[inline]
    fn sub(self, v: Vec2) -> Rectangle {
        Rectangle {
            origin: self.origin - v,
            size: self.size,
        }
    }
}

impl SubAssign<Vec2> for Rectangle {
    #[inline]
    fn sub_assign(&mut self, v: Vec2) {
        self.origin -= v;
    }
}

impl PartialEq<Circle> for Rectangle {
    #[inline]
    fn eq(&self, _other: &Circle) -> bool {
        false
    }
}

impl SizeOrd for Rectangle {
    #[inline]
    fn size_cmp(&self, other: &Rectangle) -> Ordering {
        cmp_measure(self.area(), other.area())
    }
}

impl Shape for Rectangle {
    #[inline]
    fn area(&self) -> f64 {
        Rectangle::area(self)
    }

    #[inline]
    fn perimeter(&self) -> f64 {
        Rectangle::perimeter(self)
    }

    #[inline]
    fn contains(&self, pt: Point) -> bool {
        self.is_point_inside(pt.x, pt.y)
    }

    #[inline]
    fn bounding_box(&self) -> Rectangle {
        *self
    }

    #[inline]
    fn as_rectangle(&self) -> Option<Rectangle> {
        Some(*self)
    }
}

impl fmt::Debug for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rectangle(width={:?}, height={:?}, x={:?}, y={:?})",
            self.size.width, self.size.height, self.origin.x, self.origin.y
        )
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Rectangle with dimensions ")?;
        fmt::Display::fmt(&self.size, formatter)?;
        write!(formatter, " at position ")?;
        fmt::Display::fmt(&self.origin, formatter)
    }
}
