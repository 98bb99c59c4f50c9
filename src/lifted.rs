//! Element operations lifted to pair values.
//!
//! Each function takes its operands apart with [`PairValue::to_pair`], applies
//! the element operation to the two components independently and builds the
//! result with [`PairValue::from_pair`]. Nothing here can fail on its own:
//! overflow, integer division by zero and NaN all come from the element type.
//!
//! [`add`] and [`sub`] accept operands of two different pair types and return
//! a third. The result type must be known at the call site, either from an
//! annotation or a turbofish:
//!
//! ```rust
//! use pairwise::data::{Point, Size, Vector};
//! use pairwise::lifted;
//!
//! let corner: Point<i32> = lifted::add(&Point::new(10, 10), &Size::new(4, 3));
//! assert_eq!(corner, Point::new(14, 13));
//!
//! let offset = lifted::sub::<Vector<i32>, _, _>(&corner, &Point::new(10, 10));
//! assert_eq!(offset, Vector::new(4, 3));
//! ```
use crate::capability::*;
use crate::PairValue;

pub mod checked;

fn map<R, V, F>(value: &V, f: F) -> R
where
  V: PairValue,
  R: PairValue<Element = V::Element>,
  F: Fn(V::Element) -> V::Element,
{
  let (a, b) = value.to_pair();
  R::from_pair((f(a), f(b)))
}

fn zip_with<R, T, U, F>(lhs: &T, rhs: &U, f: F) -> R
where
  T: PairValue,
  U: PairValue<Element = T::Element>,
  R: PairValue<Element = T::Element>,
  F: Fn(T::Element, T::Element) -> T::Element,
{
  let (a0, a1) = lhs.to_pair();
  let (b0, b1) = rhs.to_pair();
  R::from_pair((f(a0, b0), f(a1, b1)))
}

/// Component-wise sum, built as the caller's choice of `R`.
pub fn add<R, T, U>(lhs: &T, rhs: &U) -> R
where
  T: PairValue,
  U: PairValue<Element = T::Element>,
  R: PairValue<Element = T::Element>,
  T::Element: Addable,
{
  zip_with(lhs, rhs, <T::Element as Addable>::add)
}

/// Component-wise difference, built as the caller's choice of `R`.
pub fn sub<R, T, U>(lhs: &T, rhs: &U) -> R
where
  T: PairValue,
  U: PairValue<Element = T::Element>,
  R: PairValue<Element = T::Element>,
  T::Element: Subtractable,
{
  zip_with(lhs, rhs, <T::Element as Subtractable>::subtract)
}

/// `value * scalar`, scaling both components.
pub fn mul<V>(value: &V, scalar: V::Element) -> V
where
  V: PairValue,
  V::Element: Multipliable + Clone,
{
  map(value, |c| Multipliable::multiply(c, scalar.clone()))
}

/// `scalar * value`, the commuted form of [`mul`].
pub fn rmul<V>(scalar: V::Element, value: &V) -> V
where
  V: PairValue,
  V::Element: Multipliable + Clone,
{
  map(value, |c| Multipliable::multiply(scalar.clone(), c))
}

/// `value / scalar`. There is no `scalar / value` form.
pub fn div<V>(value: &V, scalar: V::Element) -> V
where
  V: PairValue,
  V::Element: Divisible + Clone,
{
  map(value, |c| Divisible::divide(c, scalar.clone()))
}

pub fn neg<V>(value: &V) -> V
where
  V: PairValue,
  V::Element: Negatable,
{
  map(value, <V::Element as Negatable>::negate)
}
