use num_traits::Zero;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;

use super::Vector;
use crate::PairValue;

/// A position in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point<T> {
  pub x: T,
  pub y: T,
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point::new(rng.gen(), rng.gen())
  }
}

impl<T> Point<T> {
  pub const fn new(x: T, y: T) -> Point<T> {
    Point { x, y }
  }

  // Similar to num_traits::identities::Zero but doesn't require an Add impl.
  pub fn zero() -> Self
  where
    T: Zero,
  {
    Point::new(T::zero(), T::zero())
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point::new(f(self.x.clone()), f(self.y.clone()))
  }

  pub fn as_vec(&self) -> Vector<T>
  where
    T: Clone,
  {
    self.convert()
  }
}

impl<T: Clone> PairValue for Point<T> {
  type Element = T;

  fn from_pair((x, y): (T, T)) -> Self {
    Point { x, y }
  }

  fn to_pair(&self) -> (T, T) {
    (self.x.clone(), self.y.clone())
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from((x, y): (T, T)) -> Point<T> {
    Point { x, y }
  }
}

impl<T> From<[T; 2]> for Point<T> {
  fn from([x, y]: [T; 2]) -> Point<T> {
    Point { x, y }
  }
}

impl<T> From<Point<T>> for (T, T) {
  fn from(point: Point<T>) -> (T, T) {
    (point.x, point.y)
  }
}

impl<T> From<Vector<T>> for Point<T> {
  fn from(vector: Vector<T>) -> Point<T> {
    Point {
      x: vector.dx,
      y: vector.dy,
    }
  }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

not_nan!(Point; f32, f64);

crate::pair_operators!(Point);
