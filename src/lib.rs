// Copyright 2024 the Figures Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated 2D shapes as plain value types.
//!
//! The figures library provides a [`Circle`] and an axis-aligned
//! [`Rectangle`]. Both are small `Copy` values whose dimensions are checked
//! on every construction and mutation, so a negative (or NaN) radius, width
//! or height can never be observed. They share a handful of vocabulary
//! types ([`Point`], [`Vec2`], [`Size`]) and the [`Shape`] trait.
//!
//! # Examples
//!
//! Basic metrics and point containment:
//! ```
//! use figures::{Circle, Point, Rectangle, Size};
//!
//! let circle = Circle::new((0.0, 0.0), 5.0).unwrap();
//! assert!(circle.is_point_inside(5.0, 0.0));
//! assert!(!circle.is_point_inside(5.0001, 0.0));
//!
//! let rect = Rectangle::new(Point::ZERO, Size::new(2.0, 3.0)).unwrap();
//! assert_eq!(rect.area(), 6.0);
//! assert_eq!(rect.perimeter(), 10.0);
//! ```
//!
//! Ordering shapes of the same kind, and of different kinds:
//!
//! ```
//! use core::cmp::Ordering;
//! use figures::{Circle, ConcreteShape, Rectangle, SizeOrd};
//!
//! let small = Rectangle::from_size((2.0, 3.0)).unwrap();
//! let large = Rectangle::from_size((3.0, 3.0)).unwrap();
//! assert!(small.size_lt(&large));
//! assert_eq!(small.size_cmp(&large), Ordering::Less);
//!
//! // A circle and a rectangle are never comparable.
//! let circle = ConcreteShape::from(Circle::with_radius(5.0).unwrap());
//! let rect = ConcreteShape::from(Rectangle::from_size((5.0, 5.0)).unwrap());
//! assert_eq!(circle.size_lt(&rect), None);
//! assert_ne!(circle, rect);
//! ```
//!
//! # Feature Flags
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm][].
//!   This is useful for `no_std` environments.
//! - `mint`: Enable `From`/`Into` conversion of [`Point`] and [`Vec2`] with [mint][] types.
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//!
//! [libm]: https://docs.rs/libm
//! [mint]: https://docs.rs/mint

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
// The following lints are part of the Linebender standard set,
// but resolving them has been deferred for now.
#![allow(
    clippy::use_self,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc,
    clippy::exhaustive_enums,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("figures requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

mod circle;
pub mod common;
mod concrete_shape;
mod error;
mod parse;
mod point;
mod rectangle;
mod shape;
mod size;
mod vec2;

pub use crate::circle::Circle;
pub use crate::concrete_shape::ConcreteShape;
pub use crate::error::{InvalidArgument, Quantity};
pub use crate::parse::ParseShapeError;
pub use crate::point::Point;
pub use crate::rectangle::Rectangle;
pub use crate::shape::{Shape, SizeOrd};
pub use crate::size::Size;
pub use crate::vec2::Vec2;
