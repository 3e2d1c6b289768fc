// Copyright 2024 the Figures Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validation errors for shape construction and mutation.

use core::fmt;

use crate::{Size, Vec2};

/// The quantity that failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quantity {
    /// A circle radius.
    Radius,
    /// A rectangle width.
    Width,
    /// A rectangle height.
    Height,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Quantity::Radius => "radius",
            Quantity::Width => "width",
            Quantity::Height => "height",
        })
    }
}

/// An argument was rejected by a constructor, setter or translation.
///
/// The operation that returns this error leaves its receiver untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InvalidArgument {
    /// A circle radius was negative.
    NegativeRadius(f64),
    /// A rectangle width or height was negative.
    NegativeDimensions(Size),
    /// A length was NaN or infinite.
    NotFinite(Quantity),
    /// A translation offset was NaN.
    NanOffset(Vec2),
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::NegativeRadius(r) => {
                write!(f, "radius cannot be negative, got {r}")
            }
            InvalidArgument::NegativeDimensions(size) => {
                write!(f, "dimensions cannot be negative, got {size}")
            }
            InvalidArgument::NotFinite(quantity) => {
                write!(f, "{quantity} must be a finite number")
            }
            InvalidArgument::NanOffset(offset) => {
                write!(f, "translation offset must be a number, got ({}, {})", offset.x, offset.y)
            }
        }
    }
}

impl core::error::Error for InvalidArgument {}

/// Validate a circle radius.
pub(crate) fn check_radius(radius: f64) -> Result<(), InvalidArgument> {
    if !radius.is_finite() {
        Err(InvalidArgument::NotFinite(Quantity::Radius))
    } else if radius < 0.0 {
        Err(InvalidArgument::NegativeRadius(radius))
    } else {
        Ok(())
    }
}

/// Validate rectangle dimensions, both at once.
pub(crate) fn check_dimensions(size: Size) -> Result<(), InvalidArgument> {
    if !size.width.is_finite() {
        Err(InvalidArgument::NotFinite(Quantity::Width))
    } else if !size.height.is_finite() {
        Err(InvalidArgument::NotFinite(Quantity::Height))
    } else if size.width < 0.0 || size.height < 0.0 {
        Err(InvalidArgument::NegativeDimensions(size))
    } else {
        Ok(())
    }
}

/// Validate a translation offset.
pub(crate) fn check_offset(offset: Vec2) -> Result<(), InvalidArgument> {
    if offset.is_nan() {
        Err(InvalidArgument::NanOffset(offset))
    } else {
        Ok(())
    }
}
