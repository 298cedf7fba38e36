//! Reductions from a sequence of [`Mapping`]s into the payloads of one state.
//!
//! A [`Collector`] splits a reduction into four steps so partial results can
//! be built over separate, contiguous slices of the input and stitched back
//! together. `combine` must be associative and keep the left partial ahead of
//! the right one, so any grouping of neighbouring partials yields the same
//! output as a single pass.

use std::marker::PhantomData;

use super::Mapping;

pub trait Collector<T> {
  type Acc;
  type Out;

  fn supply(&self) -> Self::Acc;
  fn accumulate(&self, acc: &mut Self::Acc, item: T);
  fn combine(&self, left: Self::Acc, right: Self::Acc) -> Self::Acc;
  fn finish(&self, acc: Self::Acc) -> Self::Out;

  fn accumulate_all(&self, items: impl IntoIterator<Item = T>) -> Self::Acc {
    items.into_iter().fold(self.supply(), |mut acc, item| {
                       self.accumulate(&mut acc, item);
                       acc
                     })
  }

  fn collect(&self, items: impl IntoIterator<Item = T>) -> Self::Out {
    self.finish(self.accumulate_all(items))
  }
}

pub struct Successes<F, S>(PhantomData<fn(Mapping<F, S>)>);

pub struct Failures<F, S>(PhantomData<fn(Mapping<F, S>)>);

/// Every success payload, in order. Failures are skipped.
pub fn successes<F, S>() -> Successes<F, S> {
  Successes(PhantomData)
}

/// Every failure payload, in order. Successes are skipped.
pub fn failures<F, S>() -> Failures<F, S> {
  Failures(PhantomData)
}

impl<F, S> Collector<Mapping<F, S>> for Successes<F, S> {
  type Acc = Vec<S>;
  type Out = Vec<S>;

  fn supply(&self) -> Vec<S> {
    Vec::new()
  }

  fn accumulate(&self, acc: &mut Vec<S>, item: Mapping<F, S>) {
    if let Mapping::Success(s) = item {
      acc.push(s);
    }
  }

  fn combine(&self, left: Vec<S>, right: Vec<S>) -> Vec<S> {
    append(left, right)
  }

  fn finish(&self, acc: Vec<S>) -> Vec<S> {
    acc
  }
}

impl<F, S> Collector<Mapping<F, S>> for Failures<F, S> {
  type Acc = Vec<F>;
  type Out = Vec<F>;

  fn supply(&self) -> Vec<F> {
    Vec::new()
  }

  fn accumulate(&self, acc: &mut Vec<F>, item: Mapping<F, S>) {
    if let Mapping::Failure(e) = item {
      acc.push(e);
    }
  }

  fn combine(&self, left: Vec<F>, right: Vec<F>) -> Vec<F> {
    append(left, right)
  }

  fn finish(&self, acc: Vec<F>) -> Vec<F> {
    acc
  }
}

fn append<T>(mut left: Vec<T>, mut right: Vec<T>) -> Vec<T> {
  left.append(&mut right);
  left
}

/// Collect `items` the way a fork-join split would: one partial per run of
/// `chunk_len` items, then neighbouring partials combined pairwise until a
/// single one is left.
pub fn collect_chunked<T, C>(items: impl IntoIterator<Item = T>,
                             chunk_len: usize,
                             collector: &C)
                             -> C::Out
  where C: Collector<T>
{
  let chunk_len = chunk_len.max(1);
  let mut items = items.into_iter().peekable();
  let mut partials = Vec::new();

  while items.peek().is_some() {
    partials.push(collector.accumulate_all(items.by_ref().take(chunk_len)));
  }

  log::debug!("combining {} partials of up to {} items",
              partials.len(),
              chunk_len);

  while partials.len() > 1 {
    let mut level = partials.into_iter();
    let mut next = Vec::new();

    while let Some(left) = level.next() {
      match level.next() {
        | Some(right) => next.push(collector.combine(left, right)),
        | None => next.push(left),
      }
    }

    partials = next;
  }

  let acc = partials.pop().unwrap_or_else(|| collector.supply());
  collector.finish(acc)
}
