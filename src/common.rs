// Copyright 2024 the Figures Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

#![allow(missing_docs)]

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("figures requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn hypot(self, other: Self) -> Self => hypot;
    fn powi(self, n: i32) -> Self => pow;
}

/// Order two non-NaN measures.
///
/// Signed zeros compare equal, so a shape with a `-0.0` dimension orders
/// the same as one with `0.0`. NaN never reaches this point because every
/// shape constructor rejects it; should it ever, it is treated as equal.
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use figures::common::cmp_measure;
///
/// assert_eq!(cmp_measure(2.0, 3.0), Ordering::Less);
/// assert_eq!(cmp_measure(-0.0, 0.0), Ordering::Equal);
/// ```
#[inline]
pub fn cmp_measure(a: f64, b: f64) -> core::cmp::Ordering {
    a.partial_cmp(&b).unwrap_or(core::cmp::Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cmp::Ordering;

    #[test]
    fn cmp_measure_orders() {
        assert_eq!(cmp_measure(1.0, 1.0), Ordering::Equal);
        assert_eq!(cmp_measure(3.0, 2.0), Ordering::Greater);
        assert_eq!(cmp_measure(0.0, -0.0), Ordering::Equal);
    }
}
