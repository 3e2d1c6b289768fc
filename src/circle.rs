// Copyright 2024 the Figures Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implementation of circle shape.

use core::cmp::Ordering;
use core::f64::consts::PI;
use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::common::cmp_measure;
use crate::error::{check_offset, check_radius};
use crate::{InvalidArgument, Point, Rectangle, Shape, Size, SizeOrd, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A circle.
///
/// The radius is always finite and non-negative. Every way of setting it
/// goes through validation, and a rejected value leaves the circle as it
/// was.
///
/// Two circles are equal when radius and center match exactly. Circles
/// are ordered by radius through [`SizeOrd`].
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// The circle of radius 1 centered on the origin.
    pub const UNIT: Circle = Circle {
        center: Point::ZERO,
        radius: 1.0,
    };

    /// A new circle from center and radius.
    ///
    /// # Examples
    ///
    /// ```
    /// use figures::{Circle, InvalidArgument, Point};
    ///
    /// let c = Circle::new((1.0, 2.0), 5.0).unwrap();
    /// assert_eq!(c.center(), Point::new(1.0, 2.0));
    /// assert_eq!(
    ///     Circle::new(Point::ZERO, -1.0),
    ///     Err(InvalidArgument::NegativeRadius(-1.0))
    /// );
    /// ```
    #[inline]
    pub fn new(center: impl Into<Point>, radius: f64) -> Result<Circle, InvalidArgument> {
        check_radius(radius)?;
        Ok(Circle {
            center: center.into(),
            radius,
        })
    }

    /// A new circle centered on the origin.
    #[inline]
    pub fn with_radius(radius: f64) -> Result<Circle, InvalidArgument> {
        Circle::new(Point::ZERO, radius)
    }

    /// The radius.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The center.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// The x coordinate of the center.
    #[inline]
    pub fn x(&self) -> f64 {
        self.center.x
    }

    /// The y coordinate of the center.
    #[inline]
    pub fn y(&self) -> f64 {
        self.center.y
    }

    /// Change the radius.
    ///
    /// Negative, NaN and infinite values are rejected and the circle keeps
    /// its previous radius.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), InvalidArgument> {
        check_radius(radius)?;
        self.radius = radius;
        Ok(())
    }

    /// Move the center to a new position.
    #[inline]
    pub fn set_center(&mut self, center: impl Into<Point>) {
        self.center = center.into();
    }

    /// Move the center by a relative offset.
    ///
    /// A NaN component is rejected and leaves the circle in place. The
    /// `+=` operator does the same move without the check.
    ///
    /// # Examples
    ///
    /// ```
    /// use figures::Circle;
    ///
    /// let mut c = Circle::with_radius(1.0).unwrap();
    /// c.translate((3.0, 4.0)).unwrap();
    /// assert_eq!((c.x(), c.y()), (3.0, 4.0));
    /// assert!(c.translate((f64::NAN, 0.0)).is_err());
    /// assert_eq!((c.x(), c.y()), (3.0, 4.0));
    /// ```
    pub fn translate(&mut self, offset: impl Into<Vec2>) -> Result<(), InvalidArgument> {
        let offset = offset.into();
        check_offset(offset)?;
        self.center += offset;
        Ok(())
    }

    /// The area of the circle, `π·r²`.
    #[inline]
    pub fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }

    /// The circumference of the circle, `2·π·r`.
    #[inline]
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Is the point `(x, y)` inside the circle, boundary included?
    #[inline]
    pub fn is_point_inside(&self, x: f64, y: f64) -> bool {
        self.center.distance(Point::new(x, y)) <= self.radius
    }

    /// Is the radius exactly 1?
    ///
    /// The center is not taken into account.
    #[inline]
    pub fn is_unit_circle(&self) -> bool {
        self.radius == 1.0
    }
}

impl Add<Vec2> for Circle {
    type Output = Circle;

    #[inline]
    fn add(self, v: Vec2) -> Circle {
        Circle {
            center: self.center + v,
            radius: self.radius,
        }
    }
}

impl AddAssign<Vec2> for Circle {
    #[inline]
    fn add_assign(&mut self, v: Vec2) {
        self.center += v;
    }
}

impl Sub<Vec2> for Circle {
    type Output = Circle;

    #[inline]
    fn sub(self, v: Vec2) -> Circle {
        Circle {
            center: self.center - v,
            radius: self.radius,
        }
    }
}

impl SubAssign<Vec2> for Circle {
    #[inline]
    fn sub_assign(&mut self, v: Vec2) {
        self.center -= v;
    }
}

impl PartialEq<Rectangle> for Circle {
    #[inline]
    fn eq(&self, _other: &Rectangle) -> bool {
        false
    }
}

impl SizeOrd for Circle {
    #[inline]
    fn size_cmp(&self, other: &Circle) -> Ordering {
        cmp_measure(self.radius, other.radius)
    }
}

impl Shape for Circle {
    #[inline]
    fn area(&self) -> f64 {
        Circle::area(self)
    }

    #[inline]
    fn perimeter(&self) -> f64 {
        self.circumference()
    }

    #[inline]
    fn contains(&self, pt: Point) -> bool {
        self.is_point_inside(pt.x, pt.y)
    }

    fn bounding_box(&self) -> Rectangle {
        let r = self.radius;
        // A huge radius may overflow the diameter.
        let d = (2.0 * r).min(f64::MAX);
        Rectangle::from_parts(self.center - Vec2::new(r, r), Size::new(d, d))
    }

    fn as_circle(&self) -> Option<Circle> {
        Some(*self)
    }
}

impl fmt::Debug for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Circle(radius={:?}, x={:?}, y={:?})",
            self.radius, self.center.x, self.center.y
        )
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Circle with radius ")?;
        fmt::Display::fmt(&self.radius, formatter)?;
        write!(formatter, " at position ")?;
        fmt::Display::fmt(&self.center, formatter)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Circle, InvalidArgument, Point, Quantity, Rectangle, Shape, SizeOrd, Vec2};
    use core::cmp::Ordering;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::PI;

    fn circle(radius: f64, x: f64, y: f64) -> Circle {
        Circle::new((x, y), radius).unwrap()
    }

    fn assert_approx_eq(x: f64, y: f64) {
        assert!((x - y).abs() < 1e-9, "{x} != {y}");
    }

    #[test]
    fn metrics() {
        let c = circle(5.0, 0.0, 0.0);
        assert_eq!(c.area(), PI * 25.0);
        assert_eq!(c.circumference(), 10.0 * PI);
        assert_eq!(Shape::perimeter(&c), c.circumference());

        let zero = Circle::with_radius(0.0).unwrap();
        assert_eq!(zero.area(), 0.0);
        assert_eq!(zero.circumference(), 0.0);
    }

    #[test]
    fn metrics_random() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..1000 {
            let r: f64 = rng.random_range(0.0..1e6);
            let c = Circle::with_radius(r).unwrap();
            assert_eq!(c.area(), PI * r.powi(2));
            assert_eq!(c.circumference(), 2.0 * PI * r);
        }
    }

    #[test]
    fn defaults() {
        let c = Circle::with_radius(2.0).unwrap();
        assert_eq!(c.center(), Point::ZERO);
        assert_eq!(Circle::default().radius(), 0.0);
        assert!(Circle::UNIT.is_unit_circle());
    }

    #[test]
    fn rejects_bad_radius() {
        assert_eq!(
            Circle::with_radius(-1.0),
            Err(InvalidArgument::NegativeRadius(-1.0))
        );
        assert_eq!(
            Circle::with_radius(f64::NAN),
            Err(InvalidArgument::NotFinite(Quantity::Radius))
        );
        assert_eq!(
            Circle::with_radius(f64::INFINITY),
            Err(InvalidArgument::NotFinite(Quantity::Radius))
        );
    }

    #[test]
    fn failed_set_radius_keeps_state() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut c = circle(3.0, 1.0, 2.0);
        for _ in 0..100 {
            let r: f64 = -rng.random_range(f64::MIN_POSITIVE..1e6);
            assert_eq!(c.set_radius(r), Err(InvalidArgument::NegativeRadius(r)));
            assert_eq!(c, circle(3.0, 1.0, 2.0));
        }
        assert!(c.set_radius(f64::NAN).is_err());
        assert_eq!(c.radius(), 3.0);

        c.set_radius(4.5).unwrap();
        assert_eq!(c.radius(), 4.5);
    }

    #[test]
    fn set_center_and_translate() {
        let mut c = circle(1.0, 0.0, 0.0);
        c.translate((3.0, 4.0)).unwrap();
        assert_eq!((c.x(), c.y()), (3.0, 4.0));

        c.set_center((-1.0, f64::INFINITY));
        assert_eq!(c.center(), Point::new(-1.0, f64::INFINITY));

        c.set_center(Point::new(0.5, 0.5));
        let err = c.translate(Vec2::new(1.0, f64::NAN)).unwrap_err();
        assert!(matches!(err, InvalidArgument::NanOffset(v) if v.x == 1.0 && v.y.is_nan()));
        assert!(c.translate((f64::NAN, f64::NAN)).is_err());
        assert_eq!(c.center(), Point::new(0.5, 0.5));
    }

    #[test]
    fn operators() {
        let c = circle(2.0, 1.0, 1.0);
        assert_eq!(c + Vec2::new(1.0, -1.0), circle(2.0, 2.0, 0.0));
        assert_eq!(c - Vec2::new(1.0, 1.0), circle(2.0, 0.0, 0.0));

        let mut m = c;
        m += Vec2::new(2.0, 2.0);
        m -= Vec2::new(1.0, 0.0);
        assert_eq!(m, circle(2.0, 2.0, 3.0));
    }

    #[test]
    fn equality() {
        let a = circle(5.0, 1.0, 2.0);
        assert_eq!(a, a);
        assert_eq!(a, circle(5.0, 1.0, 2.0));
        assert_eq!(circle(5.0, 1.0, 2.0), a);
        assert_ne!(a, circle(5.0, 1.0, 3.0));
        assert_ne!(a, circle(5.5, 1.0, 2.0));

        let r = Rectangle::from_size((5.0, 5.0)).unwrap();
        assert!(Circle::with_radius(5.0).unwrap() != r);
    }

    #[test]
    fn ordering_by_radius() {
        let two = Circle::with_radius(2.0).unwrap();
        let three = Circle::with_radius(3.0).unwrap();
        assert!(two.size_lt(&three));
        assert!(!three.size_lt(&two));
        assert!(two.size_le(&two));
        assert!(three.size_gt(&two));
        assert!(three.size_ge(&three));
        assert!(!two.size_ge(&three));

        // Position plays no part in the order.
        let moved = circle(2.0, 10.0, -10.0);
        assert_eq!(two.size_cmp(&moved), Ordering::Equal);
        assert_ne!(two, moved);
    }

    #[test]
    fn point_inside() {
        let c = circle(5.0, 0.0, 0.0);
        assert!(c.is_point_inside(5.0, 0.0));
        assert!(c.is_point_inside(0.0, -5.0));
        assert!(c.is_point_inside(3.0, 4.0));
        assert!(!c.is_point_inside(5.0001, 0.0));
        assert!(!c.is_point_inside(4.0, 4.0));

        let moved = circle(1.0, 10.0, 10.0);
        assert!(moved.contains(Point::new(10.5, 10.5)));
        assert!(!moved.contains(Point::ZERO));

        let dot = Circle::with_radius(0.0).unwrap();
        assert!(dot.is_point_inside(0.0, 0.0));
        assert!(!dot.is_point_inside(1e-300, 0.0));
    }

    #[test]
    fn point_inside_extreme_radii() {
        let huge = Circle::with_radius(1e200).unwrap();
        assert!(huge.is_point_inside(1e199, 0.0));
        assert!(huge.is_point_inside(1e200, 0.0));
        assert!(huge.is_point_inside(0.0, -1e200));
        assert!(!huge.is_point_inside(1.1e200, 0.0));

        let tiny = Circle::with_radius(1e-200).unwrap();
        assert!(tiny.is_point_inside(1e-200, 0.0));
        assert!(tiny.is_point_inside(0.0, 5e-201));
        assert!(!tiny.is_point_inside(3e-200, 0.0));
        assert!(!tiny.is_point_inside(0.0, -2e-200));
    }

    #[test]
    fn unit_circle() {
        assert!(Circle::with_radius(1.0).unwrap().is_unit_circle());
        assert!(circle(1.0, 4.0, 4.0).is_unit_circle());
        assert!(!Circle::with_radius(1.0000001).unwrap().is_unit_circle());
        assert!(!Circle::with_radius(0.0).unwrap().is_unit_circle());
    }

    #[test]
    fn bounding_box() {
        let c = circle(2.0, 1.0, -1.0);
        let bbox = c.bounding_box();
        assert_eq!(bbox.origin(), Point::new(-1.0, -3.0));
        assert_eq!(bbox.width(), 4.0);
        assert_eq!(bbox.height(), 4.0);

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let pt = Point::new(rng.random_range(-4.0..4.0), rng.random_range(-4.0..4.0));
            if c.contains(pt) {
                assert!(bbox.contains(pt), "{pt:?} escapes {bbox:?}");
            }
        }

        let huge = Circle::with_radius(f64::MAX).unwrap();
        assert!(huge.bounding_box().width().is_finite());
    }

    #[test]
    fn as_shape() {
        let c = circle(1.5, 0.0, 0.0);
        assert_eq!(c.as_circle(), Some(c));
        assert_eq!(c.as_rectangle(), None);
        assert_approx_eq(Shape::area(&c), 2.25 * PI);
    }

    #[test]
    fn display() {
        let c = circle(5.0, 1.0, 2.0);
        assert_eq!(format!("{c:?}"), "Circle(radius=5.0, x=1.0, y=2.0)");
        assert_eq!(format!("{c}"), "Circle with radius 5 at position (1, 2)");

        let c = circle(0.125, -3.5, 0.0);
        assert_eq!(format!("{c:?}"), "Circle(radius=0.125, x=-3.5, y=0.0)");
        assert_eq!(
            format!("{c:.1}"),
            "Circle with radius 0.1 at position (-3.5, 0.0)"
        );
    }
}
