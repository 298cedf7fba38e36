mod common;

use stream_mapper::prelude::*;

type M = Mapping<String, i32>;

fn inc(n: i32) -> i32 {
  n + 1
}

fn double(n: i32) -> i32 {
  n * 2
}

fn checked_half(n: i32) -> M {
  if n % 2 == 0 {
    Mapping::success(n / 2)
  } else {
    Mapping::failure(format!("{} is odd", n))
  }
}

fn values() -> Vec<i32> {
  vec![-7, -2, 0, 1, 2, 9, 64, i32::MAX - 1]
}

#[test]
fn constructors_agree_with_predicates() {
  common::init_logger();

  for v in values() {
    let ok = M::success(v);
    assert!(ok.is_success() && !ok.is_failure());
    assert_eq!(ok.get_success(), Some(&v));

    let failed = M::failure(v.to_string());
    assert!(failed.is_failure() && !failed.is_success());
    assert_eq!(failed.get_success(), None);
  }
}

#[test]
fn functor_composition() {
  for v in values().into_iter().filter(|v| *v < i32::MAX / 2) {
    assert_eq!(M::success(v).map(inc).map(double),
               M::success(v).map(|x| double(inc(x))));
  }
}

#[test]
fn failure_short_circuits_map_and_flat_map() {
  let failed = M::failure("e".into());

  assert_eq!(failed.clone().map(inc), failed);
  assert_eq!(failed.clone().flat_map(checked_half), failed);
  assert_eq!(failed.clone().map(inc).map(double).flat_map(checked_half),
             failed);
}

#[test]
fn monad_left_identity() {
  for v in values() {
    assert_eq!(M::success(v).flat_map(checked_half), checked_half(v));
  }
}

#[test]
fn monad_associativity() {
  for v in values() {
    let nested = M::success(v).flat_map(|x| checked_half(x).flat_map(checked_half));
    let chained = M::success(v).flat_map(checked_half).flat_map(checked_half);
    assert_eq!(nested, chained);
  }
}

#[test]
fn recovery_laws() {
  let len = |e: String| e.len() as i32;

  assert_eq!(M::failure("abc".into()).recover(len), M::success(3));
  assert_eq!(M::success(9).recover(len), M::success(9));
  assert_eq!(M::failure("abc".into()).recover_with(|e| M::failure(e + "!")),
             M::failure("abc!".into()));
}

#[test]
fn hooks_return_an_equal_mapping() {
  for m in vec![M::success(1), M::failure("x".into())] {
    let same = m.clone().if_success(|_| ()).if_failure(|_| ());
    assert_eq!(same, m);
  }
}
