//! Single-operation capabilities of element types.
//!
//! The capabilities are separate traits so an element type can
//! support a subset of them. Unsigned integers, for example, are
//! [`Arithmeticable`] but not [`Negatable`].
use num_bigint::{BigInt, BigUint};
use num_rational::{BigRational, Rational64};
use ordered_float::{NotNan, OrderedFloat};

pub trait Addable: Sized {
  fn add(lhs: Self, rhs: Self) -> Self;
}

pub trait Subtractable: Sized {
  fn subtract(lhs: Self, rhs: Self) -> Self;
}

pub trait Multipliable: Sized {
  fn multiply(lhs: Self, rhs: Self) -> Self;
}

/// Division with the element's own semantics. Integer division by zero
/// panics and float division by zero yields an infinity or NaN.
pub trait Divisible: Sized {
  fn divide(lhs: Self, rhs: Self) -> Self;
}

pub trait Negatable: Sized {
  fn negate(value: Self) -> Self;
}

pub trait Arithmeticable: Addable + Subtractable + Multipliable + Divisible {}

impl<T> Arithmeticable for T where T: Addable + Subtractable + Multipliable + Divisible {}

pub trait SignedArithmeticable: Arithmeticable + Negatable {}

impl<T> SignedArithmeticable for T where T: Arithmeticable + Negatable {}

macro_rules! arithmetic {
  ( $( $ty:ty ),* ) => {
    $(
      impl Addable for $ty {
        fn add(lhs: Self, rhs: Self) -> Self {
          lhs + rhs
        }
      }

      impl Subtractable for $ty {
        fn subtract(lhs: Self, rhs: Self) -> Self {
          lhs - rhs
        }
      }

      impl Multipliable for $ty {
        fn multiply(lhs: Self, rhs: Self) -> Self {
          lhs * rhs
        }
      }

      impl Divisible for $ty {
        fn divide(lhs: Self, rhs: Self) -> Self {
          lhs / rhs
        }
      }
    )*
  };
}

macro_rules! signed_arithmetic {
  ( $( $ty:ty ),* ) => {
    arithmetic!($( $ty ),*);
    $(
      impl Negatable for $ty {
        fn negate(value: Self) -> Self {
          -value
        }
      }
    )*
  };
}

signed_arithmetic!(i8, i16, i32, i64, i128, isize);
signed_arithmetic!(f32, f64);
arithmetic!(u8, u16, u32, u64, u128, usize);

signed_arithmetic!(BigInt, BigRational, Rational64);
arithmetic!(BigUint);
signed_arithmetic!(OrderedFloat<f32>, OrderedFloat<f64>, NotNan<f32>, NotNan<f64>);
