mod pair_arithmetic {
  use pairwise::data::*;
  use pairwise::lifted;
  use pairwise::*;

  fn assert_close(actual: (f64, f64), expected: (f64, f64), eps: f64) {
    assert!(
      (actual.0 - expected.0).abs() <= eps && (actual.1 - expected.1).abs() <= eps,
      "{:?} != {:?}",
      actual,
      expected
    );
  }

  #[test]
  fn size_doubled_and_scaled() {
    let size = Size::new(1, 2);
    let doubled = size + size;
    assert_eq!(doubled, Size::new(2, 4));
    assert_eq!(doubled * 4, Size::new(8, 16));
  }

  #[test]
  fn point_scaled_both_ways() {
    let point = Point::new(1.5, 20.3);
    assert_close((point * 3.0).into(), (4.5, 60.9), 1e-9);
    assert_close((4.0 * point).into(), (6.0, 81.2), 1e-9);
  }

  #[test]
  fn point_moved_by_size() {
    let point = Point::new(1.5, 20.3);
    let size = Size::new(1.0, 2.0);
    let moved: Point<f64> = lifted::add(&point, &size);
    assert_close(moved.into(), (2.5, 22.3), 1e-9);
    assert_close((moved * 3.0).into(), (7.5, 66.9), 1e-9);
  }

  #[test]
  fn size_divided() {
    assert_close((Size::new(2.0, 4.0) / 3.0).into(), (0.667, 1.333), 1e-3);
  }

  #[test]
  fn three_types_one_expression() {
    let origin = Point::new(2, 3);
    let extent = Size::new(4, 5);
    let corner: Point<i32> = lifted::add(&origin, &extent);
    let diagonal: Vector<i32> = lifted::sub(&corner, &origin);
    assert_eq!(diagonal, Vector::new(4, 5));
    assert_eq!(-diagonal, Vector::new(-4, -5));
    assert_eq!(diagonal.convert::<Size<i32>>(), extent);
  }

  #[test]
  fn checked_reports_instead_of_panicking() {
    let near_max = Point::new(u8::MAX - 1, 0);
    let r: Result<Point<u8>, Error> = lifted::checked::add(&near_max, &Size::new(2, 0));
    assert_eq!(r, Err(Error::Overflow));
    assert_eq!(lifted::checked::div(&near_max, 0), Err(Error::DivisionByZero));
  }

  #[test]
  fn pairs_are_shareable_across_threads() {
    let v = Vector::new(1.0_f64, 2.0);
    let handles: Vec<_> = (1..=4)
      .map(|s| std::thread::spawn(move || v * f64::from(s)))
      .collect();
    let scaled: Vec<Vector<f64>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(scaled[3], Vector::new(4.0, 8.0));
  }
}
