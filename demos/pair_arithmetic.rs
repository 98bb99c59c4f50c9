use pairwise::data::*;
use pairwise::lifted;
use pairwise::PairValue;

fn main() {
  let size = Size::new(1, 2);
  let doubled = size + size;
  println!("{} + {} = {}", size, size, doubled);
  println!("{} * 4 = {}", doubled, doubled * 4);

  let point = Point::new(1.5, 20.3);
  println!("{} * 3 = {}", point, point * 3.0);
  println!("4 * {} = {}", point, 4.0 * point);

  let moved: Point<f64> = lifted::add(&point, &Size::new(1.0, 2.0));
  println!("{} + 1x2 as point = {}", point, moved);
  println!("{} * 3 = {}", moved, moved * 3.0);

  let size = Size::new(2.0, 4.0);
  println!("{} / 3 = {}", size, size / 3.0);

  let step: Vector<f64> = moved.convert();
  dbg!(-step);
  dbg!(lifted::checked::add::<Point<u8>, _, _>(&Point::new(250, 0), &Size::new(10, 0)));
}
