// Copyright 2024 the Figures Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simple 2D vector.

use core::fmt;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::Point;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A 2D vector.
///
/// Here it is mostly interpreted as a translation: the offset handed to
/// [`Circle::translate`](crate::Circle::translate) and
/// [`Rectangle::translate`](crate::Rectangle::translate).
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Vec2 {
    /// The x-coordinate.
    pub x: f64,
    /// The y-coordinate.
    pub y: f64,
}

impl Vec2 {
    /// The vector (0, 0).
    pub const ZERO: Vec2 = Vec2::new(0., 0.);

    /// Create a new vector.
    #[inline(always)]
    pub const fn new(x: f64, y: f64) -> Vec2 {
        Vec2 { x, y }
    }

    /// Convert this vector into a [`Point`].
    #[inline(always)]
    pub const fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Magnitude of vector.
    ///
    /// Defers to [`f64::hypot`], which stays accurate where squaring the
    /// components would overflow or underflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use figures::Vec2;
    /// let v = Vec2::new(3.0, 4.0);
    /// assert_eq!(v.hypot(), 5.0);
    /// ```
    #[inline]
    pub fn hypot(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Magnitude squared of vector.
    ///
    /// This overflows to infinity for components beyond about `1e154`.
    #[inline]
    pub fn hypot2(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Is this vector finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Is this vector NaN?
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}

impl From<(f64, f64)> for Vec2 {
    #[inline(always)]
    fn from(v: (f64, f64)) -> Vec2 {
        Vec2 { x: v.0, y: v.1 }
    }
}

impl From<Vec2> for (f64, f64) {
    #[inline(always)]
    fn from(v: Vec2) -> (f64, f64) {
        (v.x, v.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, other: Vec2) {
        *self = *self + other;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, other: Vec2) {
        *self = *self - other;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    #[inline]
    fn neg(self) -> Vec2 {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(")?;
        fmt::Display::fmt(&self.x, formatter)?;
        write!(formatter, ", ")?;
        fmt::Display::fmt(&self.y, formatter)?;
        write!(formatter, ")")
    }
}

// Conversions to and from mint
#[cfg(feature = "mint")]
impl From<Vec2> for mint::Vector2<f64> {
    #[inline]
    fn from(p: Vec2) -> mint::Vector2<f64> {
        mint::Vector2 { x: p.x, y: p.y }
    }
}

#[cfg(feature = "mint")]
impl From<mint::Vector2<f64>> for Vec2 {
    #[inline]
    fn from(p: mint::Vector2<f64>) -> Vec2 {
        Vec2 { x: p.x, y: p.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let v = Vec2::new(1.2332421, 532.10721213123);
        let s = format!("{v:.2}");
        assert_eq!(s.as_str(), "(1.23, 532.11)");
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn hypot_extreme_magnitudes() {
        assert_eq!(Vec2::new(1e200, 0.0).hypot(), 1e200);
        assert_eq!(Vec2::new(0.0, -3e-200).hypot(), 3e-200);
        assert!(Vec2::new(1e200, 1e200).hypot().is_finite());
        assert_eq!(Vec2::new(1e200, 0.0).hypot2(), f64::INFINITY);
    }

    #[test]
    fn arithmetic() {
        let mut v = Vec2::new(1., 2.) + Vec2::new(3., 4.);
        assert_eq!(v, Vec2::new(4., 6.));
        v -= Vec2::new(1., 1.);
        assert_eq!(v, Vec2::new(3., 5.));
        let back = -v;
        v += back;
        assert_eq!(v, Vec2::ZERO);
    }

    #[test]
    fn nan_and_finite() {
        assert!(Vec2::new(f64::NAN, 0.).is_nan());
        assert!(!Vec2::new(f64::INFINITY, 0.).is_nan());
        assert!(!Vec2::new(f64::INFINITY, 0.).is_finite());
        assert_eq!(Vec2::new(3., 4.).hypot2(), 25.);
    }
}
