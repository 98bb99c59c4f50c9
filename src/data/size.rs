use num_traits::Zero;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;

use super::Vector;
use crate::PairValue;

/// Extent along two axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Size<T> {
  pub width: T,
  pub height: T,
}

impl<T> Distribution<Size<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Size<T> {
    Size::new(rng.gen(), rng.gen())
  }
}

impl<T> Size<T> {
  pub const fn new(width: T, height: T) -> Size<T> {
    Size { width, height }
  }

  pub fn zero() -> Self
  where
    T: Zero,
  {
    Size::new(T::zero(), T::zero())
  }

  pub fn cast<U, F>(&self, f: F) -> Size<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Size::new(f(self.width.clone()), f(self.height.clone()))
  }
}

impl<T: Clone> PairValue for Size<T> {
  type Element = T;

  fn from_pair((width, height): (T, T)) -> Self {
    Size { width, height }
  }

  fn to_pair(&self) -> (T, T) {
    (self.width.clone(), self.height.clone())
  }
}

impl<T> From<(T, T)> for Size<T> {
  fn from((width, height): (T, T)) -> Size<T> {
    Size { width, height }
  }
}

impl<T> From<[T; 2]> for Size<T> {
  fn from([width, height]: [T; 2]) -> Size<T> {
    Size { width, height }
  }
}

impl<T> From<Size<T>> for (T, T) {
  fn from(size: Size<T>) -> (T, T) {
    (size.width, size.height)
  }
}

impl<T> From<Size<T>> for Vector<T> {
  fn from(size: Size<T>) -> Vector<T> {
    Vector {
      dx: size.width,
      dy: size.height,
    }
  }
}

impl<T: fmt::Display> fmt::Display for Size<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}x{}", self.width, self.height)
  }
}

not_nan!(Size; f32, f64);

crate::pair_operators!(Size);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;

  use num_bigint::BigUint;
  use num_rational::Rational64;
  use ordered_float::OrderedFloat;

  #[test]
  fn double_then_scale() {
    let s = Size::new(1, 2);
    let doubled = s + s;
    assert_eq!(doubled, Size::new(2, 4));
    assert_eq!(doubled * 4, Size::new(8, 16));
    assert_eq!(4 * doubled, Size::new(8, 16));
  }

  #[test]
  fn divide_by_three() {
    assert_pair_close(&(Size::new(2.0, 4.0) / 3.0), (0.667, 1.333), 1e-3);
    let exact = Size::new(Rational64::from_integer(2), Rational64::from_integer(4));
    assert_eq!(
      exact / Rational64::from_integer(3),
      Size::new(Rational64::new(2, 3), Rational64::new(4, 3))
    );
  }

  #[test]
  fn ordered_float_elements() {
    let s = Size::new(OrderedFloat(1.5_f32), OrderedFloat(-0.5));
    assert_eq!(-s, Size::new(OrderedFloat(-1.5), OrderedFloat(0.5)));
    assert_eq!(
      OrderedFloat(2.0_f32) * s,
      Size::new(OrderedFloat(3.0), OrderedFloat(-1.0))
    );
  }

  #[test]
  fn big_unsigned_elements() {
    let s = Size::new(BigUint::from(10_u32), BigUint::from(20_u32));
    assert_eq!(&s + &s, Size::new(BigUint::from(20_u32), BigUint::from(40_u32)));
    assert_eq!(
      &s / BigUint::from(10_u32),
      Size::new(BigUint::from(1_u32), BigUint::from(2_u32))
    );
  }

  #[test]
  #[should_panic]
  fn unsigned_underflow_panics() {
    let _ = Size::new(1_u8, 1) - Size::new(2, 0);
  }

  #[test]
  fn into_vector() {
    assert_eq!(Vector::from(Size::new(3, 4)), Vector::new(3, 4));
  }

  #[test]
  fn display() {
    assert_eq!(Size::new(640, 480).to_string(), "640x480");
  }
}
