use num_traits::Zero;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;

use super::Point;
use crate::PairValue;

/// A displacement in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Vector<T> {
  pub dx: T,
  pub dy: T,
}

impl<T> Distribution<Vector<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector<T> {
    Vector::new(rng.gen(), rng.gen())
  }
}

impl<T> Vector<T> {
  pub const fn new(dx: T, dy: T) -> Vector<T> {
    Vector { dx, dy }
  }

  pub fn zero() -> Self
  where
    T: Zero,
  {
    Vector::new(T::zero(), T::zero())
  }

  pub fn cast<U, F>(&self, f: F) -> Vector<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Vector::new(f(self.dx.clone()), f(self.dy.clone()))
  }
}

impl<T: Clone> PairValue for Vector<T> {
  type Element = T;

  fn from_pair((dx, dy): (T, T)) -> Self {
    Vector { dx, dy }
  }

  fn to_pair(&self) -> (T, T) {
    (self.dx.clone(), self.dy.clone())
  }
}

impl<T> From<(T, T)> for Vector<T> {
  fn from((dx, dy): (T, T)) -> Vector<T> {
    Vector { dx, dy }
  }
}

impl<T> From<[T; 2]> for Vector<T> {
  fn from([dx, dy]: [T; 2]) -> Vector<T> {
    Vector { dx, dy }
  }
}

impl<T> From<Vector<T>> for (T, T) {
  fn from(vector: Vector<T>) -> (T, T) {
    (vector.dx, vector.dy)
  }
}

impl<T> From<Point<T>> for Vector<T> {
  fn from(point: Point<T>) -> Vector<T> {
    Vector {
      dx: point.x,
      dy: point.y,
    }
  }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "<{}, {}>", self.dx, self.dy)
  }
}

not_nan!(Vector; f32, f64);

crate::pair_operators!(Vector);
