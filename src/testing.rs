// Strategies and helpers for property tests over pair values.
use crate::data::{Point, Size, Vector};
use crate::PairValue;

use proptest::arbitrary::*;
use proptest::prelude::*;
use proptest::strategy::*;
use std::fmt::Debug;
use std::ops::Range;

type Mapped<I, O> = Map<StrategyFor<I>, fn(_: I) -> O>;

///////////////////////////////////////////////////////////////////////////////
// Arbitrary pairs

macro_rules! arbitrary_pair {
  ( $( $ty:ident ),* ) => {
    $(
      impl<T> Arbitrary for $ty<T>
      where
        T: Arbitrary + Clone,
        T::Parameters: Clone,
      {
        type Strategy = Mapped<(T, T), $ty<T>>;
        type Parameters = T::Parameters;
        fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
          any_with::<(T, T)>((params.clone(), params)).prop_map($ty::from)
        }
      }
    )*
  };
}

arbitrary_pair!(Point, Size, Vector);

///////////////////////////////////////////////////////////////////////////////
// Bounded pairs

// Both components drawn from `range`. Keeps integer arithmetic clear of
// overflow and float arithmetic clear of NaN and infinities.
fn pair_in<V, T>(range: Range<T>) -> impl Strategy<Value = V>
where
  V: PairValue<Element = T> + Debug,
  Range<T>: Strategy<Value = T> + Clone,
{
  (range.clone(), range).prop_map(V::from_pair)
}

pub fn points<T>(range: Range<T>) -> impl Strategy<Value = Point<T>>
where
  T: Clone + Debug,
  Range<T>: Strategy<Value = T> + Clone,
{
  pair_in(range)
}

pub fn sizes<T>(range: Range<T>) -> impl Strategy<Value = Size<T>>
where
  T: Clone + Debug,
  Range<T>: Strategy<Value = T> + Clone,
{
  pair_in(range)
}

pub fn vectors<T>(range: Range<T>) -> impl Strategy<Value = Vector<T>>
where
  T: Clone + Debug,
  Range<T>: Strategy<Value = T> + Clone,
{
  pair_in(range)
}

///////////////////////////////////////////////////////////////////////////////
// Float comparison

pub fn close(a: f64, b: f64) -> bool {
  (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[track_caller]
pub fn assert_pair_close<V>(actual: &V, expected: (f64, f64), eps: f64)
where
  V: PairValue<Element = f64> + Debug,
{
  let (a, b) = actual.to_pair();
  assert!(
    (a - expected.0).abs() <= eps && (b - expected.1).abs() <= eps,
    "{:?} is not within {} of {:?}",
    actual,
    eps,
    expected
  );
}
