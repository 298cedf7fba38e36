use std::iter::{FromIterator, Filter};

use crate::mapping::{collectors, collectors::Collector, Mapping};

pub trait MappingIterExt<F, S>: Iterator<Item = Mapping<F, S>> + Sized {
  fn successes(self) -> Vec<S> {
    collectors::successes().collect(self)
  }

  fn failures(self) -> Vec<F> {
    collectors::failures().collect(self)
  }

  fn only_successes(self) -> Filter<Self, fn(&Mapping<F, S>) -> bool> {
    self.filter(Mapping::only_success())
  }

  fn only_failures(self) -> Filter<Self, fn(&Mapping<F, S>) -> bool> {
    self.filter(Mapping::only_failure())
  }

  /// Split into `(successes, failures)` in one pass.
  fn partition_mappings(self) -> (Vec<S>, Vec<F>) {
    self.fold((vec![], vec![]), |(mut oks, mut errs), m| {
          match m {
            | Mapping::Success(s) => oks.push(s),
            | Mapping::Failure(e) => errs.push(e),
          };
          (oks, errs)
        })
  }

  /// A success holding every payload when nothing failed,
  /// otherwise a failure holding every failure payload.
  fn collect_mappings<Ss, Fs>(self) -> Mapping<Fs, Ss>
    where Ss: FromIterator<S>,
          Fs: FromIterator<F>
  {
    match self.partition_mappings() {
      | (oks, errs) if errs.is_empty() => Mapping::Success(oks.into_iter().collect()),
      | (_, errs) => {
        log::debug!("collect_mappings: {} failures", errs.len());
        Mapping::Failure(errs.into_iter().collect())
      },
    }
  }
}

impl<F, S, I> MappingIterExt<F, S> for I where I: Iterator<Item = Mapping<F, S>> {}
