use futures::{future::{self, Ready},
              stream::{Filter, Fold, Stream, StreamExt}};

use crate::Mapping;

type Pushed<T> = Ready<Vec<T>>;

/// Async counterparts of [`super::MappingIterExt`] for streams of mappings.
pub trait MappingStreamExt<F, S>: Stream<Item = Mapping<F, S>> + Sized {
  fn successes(self)
               -> Fold<Self, Pushed<S>, Vec<S>, fn(Vec<S>, Mapping<F, S>) -> Pushed<S>> {
    self.fold(Vec::new(), push_success as fn(_, _) -> _)
  }

  fn failures(self)
              -> Fold<Self, Pushed<F>, Vec<F>, fn(Vec<F>, Mapping<F, S>) -> Pushed<F>> {
    self.fold(Vec::new(), push_failure as fn(_, _) -> _)
  }

  fn filter_success(self) -> Filter<Self, Ready<bool>, fn(&Mapping<F, S>) -> Ready<bool>> {
    self.filter(is_success as fn(&_) -> _)
  }

  fn filter_failure(self) -> Filter<Self, Ready<bool>, fn(&Mapping<F, S>) -> Ready<bool>> {
    self.filter(is_failure as fn(&_) -> _)
  }
}

impl<F, S, St> MappingStreamExt<F, S> for St where St: Stream<Item = Mapping<F, S>> {}

fn push_success<F, S>(mut acc: Vec<S>, m: Mapping<F, S>) -> Pushed<S> {
  if let Mapping::Success(s) = m {
    acc.push(s);
  }
  future::ready(acc)
}

fn push_failure<F, S>(mut acc: Vec<F>, m: Mapping<F, S>) -> Pushed<F> {
  if let Mapping::Failure(e) = m {
    acc.push(e);
  }
  future::ready(acc)
}

fn is_success<F, S>(m: &Mapping<F, S>) -> Ready<bool> {
  future::ready(m.is_success())
}

fn is_failure<F, S>(m: &Mapping<F, S>) -> Ready<bool> {
  future::ready(m.is_failure())
}
