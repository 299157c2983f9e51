//! Range comparison helpers for any `PartialOrd` value.
//!
//! # Example
//!
//! ```rust
//! use pillbox::extensions::RangeExt;
//!
//! assert!(450.0_f64.between(300.0, 600.0));
//! assert!(300_i32.between(300, 600));
//! assert!(!300_i32.between_exclusive(300, 600));
//! ```

/// Inclusive and exclusive bound checks.
///
/// Bounds given in the wrong order (`lower > upper`) contain nothing. Values
/// that do not compare (a NaN float) are never between anything.
pub trait RangeExt: PartialOrd + Sized {
    /// `lower <= self <= upper`.
    fn between(&self, lower: Self, upper: Self) -> bool {
        *self >= lower && *self <= upper
    }

    /// Alias for [`RangeExt::between`].
    fn is_between(&self, lower: Self, upper: Self) -> bool {
        self.between(lower, upper)
    }

    /// `lower < self < upper`.
    fn between_exclusive(&self, lower: Self, upper: Self) -> bool {
        *self > lower && *self < upper
    }
}

impl<T: PartialOrd> RangeExt for T {}
