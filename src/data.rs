// Fallible conversion from raw floats to `NotNan` components.
macro_rules! not_nan {
  ( $ty:ident; $( $float:ty ),* ) => {
    $(
      impl std::convert::TryFrom<$ty<$float>> for $ty<ordered_float::NotNan<$float>> {
        type Error = crate::Error;
        fn try_from(value: $ty<$float>) -> Result<Self, crate::Error> {
          let (a, b) = crate::PairValue::to_pair(&value);
          Ok(crate::PairValue::from_pair((
            ordered_float::NotNan::new(a)?,
            ordered_float::NotNan::new(b)?,
          )))
        }
      }
    )*
  };
}

mod point;
mod size;
mod vector;

pub use point::Point;
pub use size::Size;
pub use vector::Vector;
