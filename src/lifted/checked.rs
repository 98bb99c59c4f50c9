//! Checked counterparts of the lifted operations.
//!
//! These report element failures as [`Error`] values instead of panicking or
//! wrapping. The unchecked operations in [`crate::lifted`] are unaffected.
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedNeg, CheckedSub, Zero};

use crate::capability::Negatable;
use crate::{Error, PairValue};

fn try_map<R, V, F>(value: &V, f: F) -> Result<R, Error>
where
  V: PairValue,
  R: PairValue<Element = V::Element>,
  F: Fn(V::Element) -> Option<V::Element>,
{
  let (a, b) = value.to_pair();
  Ok(R::from_pair((
    f(a).ok_or(Error::Overflow)?,
    f(b).ok_or(Error::Overflow)?,
  )))
}

fn try_zip_with<R, T, U, F>(lhs: &T, rhs: &U, f: F) -> Result<R, Error>
where
  T: PairValue,
  U: PairValue<Element = T::Element>,
  R: PairValue<Element = T::Element>,
  F: Fn(T::Element, T::Element) -> Option<T::Element>,
{
  let (a0, a1) = lhs.to_pair();
  let (b0, b1) = rhs.to_pair();
  Ok(R::from_pair((
    f(a0, b0).ok_or(Error::Overflow)?,
    f(a1, b1).ok_or(Error::Overflow)?,
  )))
}

pub fn add<R, T, U>(lhs: &T, rhs: &U) -> Result<R, Error>
where
  T: PairValue,
  U: PairValue<Element = T::Element>,
  R: PairValue<Element = T::Element>,
  T::Element: CheckedAdd,
{
  try_zip_with(lhs, rhs, |a, b| a.checked_add(&b))
}

pub fn sub<R, T, U>(lhs: &T, rhs: &U) -> Result<R, Error>
where
  T: PairValue,
  U: PairValue<Element = T::Element>,
  R: PairValue<Element = T::Element>,
  T::Element: CheckedSub,
{
  try_zip_with(lhs, rhs, |a, b| a.checked_sub(&b))
}

pub fn mul<V>(value: &V, scalar: V::Element) -> Result<V, Error>
where
  V: PairValue,
  V::Element: CheckedMul,
{
  try_map(value, |c| c.checked_mul(&scalar))
}

/// Fails with [`Error::DivisionByZero`] before touching either component when
/// `scalar` is zero.
pub fn div<V>(value: &V, scalar: V::Element) -> Result<V, Error>
where
  V: PairValue,
  V::Element: CheckedDiv + Zero,
{
  if scalar.is_zero() {
    return Err(Error::DivisionByZero);
  }
  try_map(value, |c| c.checked_div(&scalar))
}

pub fn neg<V>(value: &V) -> Result<V, Error>
where
  V: PairValue,
  V::Element: CheckedNeg + Negatable,
{
  try_map(value, |c| c.checked_neg())
}
