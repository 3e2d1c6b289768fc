// Copyright 2024 the Figures Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generic traits for shapes.

use core::cmp::Ordering;

use crate::{Circle, Point, Rectangle};

/// A generic trait for closed shapes.
pub trait Shape {
    /// The area enclosed by the shape.
    fn area(&self) -> f64;

    /// Total length of perimeter.
    fn perimeter(&self) -> f64;

    /// Returns `true` if the [`Point`] is inside this shape.
    ///
    /// Points on the boundary count as inside.
    fn contains(&self, pt: Point) -> bool;

    /// The smallest axis-aligned rectangle that encloses the shape.
    fn bounding_box(&self) -> Rectangle;

    /// If the shape is a circle, make it available.
    fn as_circle(&self) -> Option<Circle> {
        None
    }

    /// If the shape is a rectangle, make it available.
    fn as_rectangle(&self) -> Option<Rectangle> {
        None
    }
}

/// An ordering of shapes of one kind by their size.
///
/// The measure is chosen by the implementor: circles order by radius,
/// rectangles by area. Equal size does not imply equal shapes, which is why
/// this is a separate trait rather than [`PartialOrd`].
pub trait SizeOrd {
    /// Compare the sizes of two shapes.
    fn size_cmp(&self, other: &Self) -> Ordering;

    /// Is `self` strictly smaller than `other`?
    #[inline]
    fn size_lt(&self, other: &Self) -> bool {
        self.size_cmp(other) == Ordering::Less
    }

    /// Is `self` smaller than or the same size as `other`?
    #[inline]
    fn size_le(&self, other: &Self) -> bool {
        self.size_cmp(other) != Ordering::Greater
    }

    /// Is `self` strictly larger than `other`?
    #[inline]
    fn size_gt(&self, other: &Self) -> bool {
        self.size_cmp(other) == Ordering::Greater
    }

    /// Is `self` larger than or the same size as `other`?
    #[inline]
    fn size_ge(&self, other: &Self) -> bool {
        self.size_cmp(other) != Ordering::Less
    }
}
