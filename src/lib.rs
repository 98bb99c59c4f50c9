#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Component-wise arithmetic for two-component value types.
//!
//! Any type that can be built from, and taken apart into, an ordered pair of
//! one element type implements [`PairValue`]. Every operation in [`lifted`]
//! then works on it, as long as the element type has the matching
//! [capability](capability). The [`Size`](data::Size), [`Point`](data::Point)
//! and [`Vector`](data::Vector) types also carry the usual operator syntax.
//!
//! ```rust
//! use pairwise::data::{Point, Size};
//! use pairwise::lifted;
//!
//! let doubled = Size::new(1, 2) + Size::new(1, 2);
//! assert_eq!(doubled, Size::new(2, 4));
//! assert_eq!(doubled * 4, Size::new(8, 16));
//!
//! // A point plus a size is not obviously either, so the caller picks.
//! let moved: Point<f64> = lifted::add(&Point::new(1.5, 20.3), &Size::new(1.0, 2.0));
//! assert!((moved.x - 2.5).abs() < 1e-9);
//! assert!((moved.y - 22.3).abs() < 1e-9);
//! ```
//!
//! Leaving the result type open is rejected at compile time:
//!
//! ```compile_fail,E0283
//! use pairwise::data::{Point, Size};
//!
//! let p = Point::new(1.5, 20.3);
//! let s = Size::new(1.0, 2.0);
//! let _sum = pairwise::lifted::add(&p, &s);
//! ```
//!
//! So is negating a pair of unsigned integers:
//!
//! ```compile_fail,E0600
//! use pairwise::data::Size;
//!
//! let _flipped = -Size::new(1u32, 2u32);
//! ```
use ordered_float::FloatIsNan;

pub mod capability;
pub mod data;
pub mod lifted;
mod macros;

pub use capability::{
  Addable, Arithmeticable, Divisible, Multipliable, Negatable, SignedArithmeticable, Subtractable,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// An element operation left the range of the element type.
  Overflow,
  DivisionByZero,
  /// A component was NaN where a non-NaN float was required.
  NotANumber,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::Overflow => write!(f, "Arithmetic overflow"),
      Error::DivisionByZero => write!(f, "Division by zero"),
      Error::NotANumber => write!(f, "Component is NaN"),
    }
  }
}

impl std::error::Error for Error {}

impl From<FloatIsNan> for Error {
  fn from(_: FloatIsNan) -> Error {
    Error::NotANumber
  }
}

/// A value that is, structurally, an ordered pair of one element type.
///
/// Both directions must be lossless and keep the order of the components:
/// component 0 is the first named field and component 1 the second.
pub trait PairValue: Sized {
  type Element;

  fn from_pair(pair: (Self::Element, Self::Element)) -> Self;

  fn to_pair(&self) -> (Self::Element, Self::Element);

  /// Rebuild the same two components as another pair type.
  fn convert<R>(&self) -> R
  where
    R: PairValue<Element = Self::Element>,
  {
    R::from_pair(self.to_pair())
  }
}

impl<T: Clone> PairValue for (T, T) {
  type Element = T;

  fn from_pair(pair: (T, T)) -> Self {
    pair
  }

  fn to_pair(&self) -> (T, T) {
    self.clone()
  }
}

// Scalar types named by the exported operator macros.
#[doc(hidden)]
pub mod __private {
  pub use num_bigint::{BigInt, BigUint};
  pub use num_rational::{BigRational, Rational64};
  pub use ordered_float::{NotNan, OrderedFloat};
}

#[cfg(test)]
pub mod testing;
