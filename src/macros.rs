/// Attach operator syntax to a generic pair type `Name<T>`.
///
/// `Name<T>` must implement [`PairValue`](crate::PairValue) with
/// `Element = T`. Every impl forwards to [`lifted`](crate::lifted), so each
/// operator is only available when `T` has the matching capability:
///
/// * `v + v`, `v - v`, `&v + &v`, `&v - &v`, `+=` and `-=`
/// * `v * t`, `&v * t`, `t * v`, `t * &v` and `*=`
/// * `v / t`, `&v / t` and `/=`
/// * `-v` and `-&v`
///
/// `t * v` can only be written per scalar type, so it is provided for the
/// primitive numbers and the `num` and `ordered-float` element types.
///
/// ```rust
/// use pairwise::PairValue;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Velocity<T> {
///   north: T,
///   east: T,
/// }
///
/// impl<T: Clone> PairValue for Velocity<T> {
///   type Element = T;
///   fn from_pair((north, east): (T, T)) -> Self {
///     Velocity { north, east }
///   }
///   fn to_pair(&self) -> (T, T) {
///     (self.north.clone(), self.east.clone())
///   }
/// }
///
/// pairwise::pair_operators!(Velocity);
///
/// let v = Velocity { north: 1.0, east: -2.0 };
/// assert_eq!(2.0 * v + v, Velocity { north: 3.0, east: -6.0 });
/// assert_eq!(-v / 2.0, Velocity { north: -0.5, east: 1.0 });
/// ```
#[macro_export]
macro_rules! pair_operators {
  ( $( $ty:ident ),* ) => {
    $(
      // v + v = v
      impl<T> ::core::ops::Add<$ty<T>> for $ty<T>
      where
        T: $crate::capability::Addable,
        $ty<T>: $crate::PairValue<Element = T>,
      {
        type Output = $ty<T>;

        fn add(self, other: $ty<T>) -> Self::Output {
          $crate::lifted::add(&self, &other)
        }
      }

      // &v + &v = v
      impl<'a, 'b, T> ::core::ops::Add<&'a $ty<T>> for &'b $ty<T>
      where
        T: $crate::capability::Addable,
        $ty<T>: $crate::PairValue<Element = T>,
      {
        type Output = $ty<T>;

        fn add(self, other: &'a $ty<T>) -> Self::Output {
          $crate::lifted::add(self, other)
        }
      }

      // v += v
      impl<T> ::core::ops::AddAssign<$ty<T>> for $ty<T>
      where
        T: $crate::capability::Addable,
        $ty<T>: $crate::PairValue<Element = T>,
      {
        fn add_assign(&mut self, other: $ty<T>) {
          *self = $crate::lifted::add(&*self, &other);
        }
      }

      // v - v = v
      impl<T> ::core::ops::Sub<$ty<T>> for $ty<T>
      where
        T: $crate::capability::Subtractable,
        $ty<T>: $crate::PairValue<Element = T>,
      {
        type Output = $ty<T>;

        fn sub(self, other: $ty<T>) -> Self::Output {
          $crate::lifted::sub(&self, &other)
        }
      }

      // &v - &v = v
      impl<'a, 'b, T> ::core::ops::Sub<&'a $ty<T>> for &'b $ty<T>
      where
        T: $crate::capability::Subtractable,
        $ty<T>: $crate::PairValue<Element = T>,
      {
        type Output = $ty<T>;

        fn sub(self, other: &'a $ty<T>) -> Self::Output {
          $crate::lifted::sub(self, other)
        }
      }

      // v -= v
      impl<T> ::core::ops::SubAssign<$ty<T>> for $ty<T>
      where
        T: $crate::capability::Subtractable,
        $ty<T>: $crate::PairValue<Element = T>,
      {
        fn sub_assign(&mut self, other: $ty<T>) {
          *self = $crate::lifted::sub(&*self, &other);
        }
      }

      // v * t = v
      impl<T> ::core::ops::Mul<T> for $ty<T>
      where
        T: $crate::capability::Multipliable + Clone,
        $ty<T>: $crate::PairValue<Element = T>,
      {
        type Output = $ty<T>;

        fn mul(self, scalar: T) -> Self::Output {
          $crate::lifted::mul(&self, scalar)
        }
      }

      // &v * t = v
      impl<'a, T> ::core::ops::Mul<T> for &'a $ty<T>
      where
        T: $crate::capability::Multipliable + Clone,
        $ty<T>: $crate::PairValue<Element = T>,
      {
        type Output = $ty<T>;

        fn mul(self, scalar: T) -> Self::Output {
          $crate::lifted::mul(self, scalar)
        }
      }

      // v *= t
      impl<T> ::core::ops::MulAssign<T> for $ty<T>
      where
        T: $crate::capability::Multipliable + Clone,
        $ty<T>: $crate::PairValue<Element = T>,
      {
        fn mul_assign(&mut self, scalar: T) {
          *self = $crate::lifted::mul(&*self, scalar);
        }
      }

      // v / t = v
      impl<T> ::core::ops::Div<T> for $ty<T>
      where
        T: $crate::capability::Divisible + Clone,
        $ty<T>: $crate::PairValue<Element = T>,
      {
        type Output = $ty<T>;

        fn div(self, scalar: T) -> Self::Output {
          $crate::lifted::div(&self, scalar)
        }
      }

      // &v / t = v
      impl<'a, T> ::core::ops::Div<T> for &'a $ty<T>
      where
        T: $crate::capability::Divisible + Clone,
        $ty<T>: $crate::PairValue<Element = T>,
      {
        type Output = $ty<T>;

        fn div(self, scalar: T) -> Self::Output {
          $crate::lifted::div(self, scalar)
        }
      }

      // v /= t
      impl<T> ::core::ops::DivAssign<T> for $ty<T>
      where
        T: $crate::capability::Divisible + Clone,
        $ty<T>: $crate::PairValue<Element = T>,
      {
        fn div_assign(&mut self, scalar: T) {
          *self = $crate::lifted::div(&*self, scalar);
        }
      }

      // -v = v
      impl<T> ::core::ops::Neg for $ty<T>
      where
        T: $crate::capability::Negatable,
        $ty<T>: $crate::PairValue<Element = T>,
      {
        type Output = $ty<T>;

        fn neg(self) -> Self::Output {
          $crate::lifted::neg(&self)
        }
      }

      // -&v = v
      impl<'a, T> ::core::ops::Neg for &'a $ty<T>
      where
        T: $crate::capability::Negatable,
        $ty<T>: $crate::PairValue<Element = T>,
      {
        type Output = $ty<T>;

        fn neg(self) -> Self::Output {
          $crate::lifted::neg(self)
        }
      }

      $crate::__commuted_mul!(
        $ty;
        i8, i16, i32, i64, i128, isize,
        u8, u16, u32, u64, u128, usize,
        f32, f64,
        $crate::__private::BigInt,
        $crate::__private::BigUint,
        $crate::__private::BigRational,
        $crate::__private::Rational64,
        $crate::__private::OrderedFloat<f32>,
        $crate::__private::OrderedFloat<f64>,
        $crate::__private::NotNan<f32>,
        $crate::__private::NotNan<f64>
      );
    )*
  };
}

// t * v = v, one scalar type at a time. The bound holds off scalars the pair
// type has no PairValue impl for.
#[doc(hidden)]
#[macro_export]
macro_rules! __commuted_mul {
  ( $ty:ident; $( $scalar:ty ),* ) => {
    $(
      impl ::core::ops::Mul<$ty<$scalar>> for $scalar
      where
        for<'x> $ty<$scalar>: $crate::PairValue<Element = $scalar>,
      {
        type Output = $ty<$scalar>;

        fn mul(self, other: $ty<$scalar>) -> Self::Output {
          $crate::lifted::rmul(self, &other)
        }
      }

      impl<'a> ::core::ops::Mul<&'a $ty<$scalar>> for $scalar
      where
        for<'x> $ty<$scalar>: $crate::PairValue<Element = $scalar>,
      {
        type Output = $ty<$scalar>;

        fn mul(self, other: &'a $ty<$scalar>) -> Self::Output {
          $crate::lifted::rmul(self, other)
        }
      }
    )*
  };
}
