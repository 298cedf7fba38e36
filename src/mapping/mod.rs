use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize as De, Serialize as Ser};

mod catch;
pub mod collectors;

pub use catch::Caught;

/// The outcome of a computation that either produced an `S`
/// or failed with an `F`.
///
/// Built with [`Mapping::success`], [`Mapping::failure`], or by lifting a
/// fallible function with [`Mapping::of`]. Every combinator consumes the
/// mapping and hands back a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Ser, De))]
pub enum Mapping<F, S> {
  Failure(F),
  Success(S),
}

impl<F, S> Mapping<F, S> {
  pub fn success(value: S) -> Self {
    Self::Success(value)
  }

  pub fn failure(err: F) -> Self {
    Self::Failure(err)
  }

  /// Lift a fallible function into one that always returns a mapping,
  /// keeping the error it returned as the failure payload.
  ///
  /// ```
  /// use stream_mapper::Mapping;
  ///
  /// let mut parse = Mapping::of(str::parse::<i32>);
  ///
  /// assert_eq!(parse("42"), Mapping::success(42));
  /// assert!(parse("not-a-number").is_failure());
  /// ```
  pub fn of<T>(mut f: impl FnMut(T) -> Result<S, F>) -> impl FnMut(T) -> Self {
    move |t| match f(t) {
      | Ok(s) => Self::Success(s),
      | Err(e) => {
        log::trace!("> captured failure");
        Self::Failure(e)
      },
    }
  }

  /// Like [`Mapping::of`], but runs `failure_mapper` over the captured
  /// error before storing it.
  pub fn of_with<T, E>(f: impl FnMut(T) -> Result<S, E>,
                       mut failure_mapper: impl FnMut(E) -> F)
                       -> impl FnMut(T) -> Self {
    let mut capture = Mapping::<E, S>::of(f);
    move |t| capture(t).map_failure(&mut failure_mapper)
  }

  pub fn from_option(opt: Option<S>, on_none: impl FnOnce() -> F) -> Self {
    match opt {
      | Some(s) => Self::Success(s),
      | None => Self::Failure(on_none()),
    }
  }

  /// Predicate for `Iterator::filter`, keeps successes.
  pub fn only_success() -> fn(&Self) -> bool {
    Self::is_success
  }

  /// Predicate for `Iterator::filter`, keeps failures.
  pub fn only_failure() -> fn(&Self) -> bool {
    Self::is_failure
  }

  pub fn is_success(&self) -> bool {
    matches!(self, Self::Success(_))
  }

  pub fn is_failure(&self) -> bool {
    matches!(self, Self::Failure(_))
  }

  /// `None` when this is a failure.
  pub fn get_success(&self) -> Option<&S> {
    match self {
      | Self::Success(s) => Some(s),
      | Self::Failure(_) => None,
    }
  }

  /// `None` when this is a success.
  pub fn get_failure(&self) -> Option<&F> {
    match self {
      | Self::Failure(e) => Some(e),
      | Self::Success(_) => None,
    }
  }

  pub fn into_success(self) -> Option<S> {
    match self {
      | Self::Success(s) => Some(s),
      | Self::Failure(_) => None,
    }
  }

  pub fn into_failure(self) -> Option<F> {
    match self {
      | Self::Failure(e) => Some(e),
      | Self::Success(_) => None,
    }
  }

  pub fn as_ref(&self) -> Mapping<&F, &S> {
    match self {
      | Self::Failure(e) => Mapping::Failure(e),
      | Self::Success(s) => Mapping::Success(s),
    }
  }

  /// Transform the success payload. A failure passes through untouched
  /// and `f` is never called.
  pub fn map<U>(self, f: impl FnOnce(S) -> U) -> Mapping<F, U> {
    match self {
      | Self::Failure(e) => Mapping::Failure(e),
      | Self::Success(s) => Mapping::Success(f(s)),
    }
  }

  pub fn flat_map<U>(self, f: impl FnOnce(S) -> Mapping<F, U>) -> Mapping<F, U> {
    match self {
      | Self::Failure(e) => Mapping::Failure(e),
      | Self::Success(s) => f(s),
    }
  }

  pub fn map_failure<G>(self, f: impl FnOnce(F) -> G) -> Mapping<G, S> {
    match self {
      | Self::Failure(e) => Mapping::Failure(f(e)),
      | Self::Success(s) => Mapping::Success(s),
    }
  }

  pub fn recover(self, f: impl FnOnce(F) -> S) -> Self {
    match self {
      | Self::Failure(e) => Self::Success(f(e)),
      | ok => ok,
    }
  }

  pub fn recover_with(self, f: impl FnOnce(F) -> Self) -> Self {
    match self {
      | Self::Failure(e) => f(e),
      | ok => ok,
    }
  }

  pub fn if_success(self, consumer: impl FnOnce(&S)) -> Self {
    if let Self::Success(s) = &self {
      consumer(s);
    }
    self
  }

  pub fn if_failure(self, consumer: impl FnOnce(&F)) -> Self {
    if let Self::Failure(e) = &self {
      consumer(e);
    }
    self
  }

  pub fn into_option(self) -> Option<S> {
    self.into_success()
  }

  pub fn into_result(self) -> Result<S, F> {
    self.into()
  }

  pub fn or_else(self, default: S) -> S {
    match self {
      | Self::Success(s) => s,
      | Self::Failure(_) => default,
    }
  }

  pub fn or_else_get(self, supplier: impl FnOnce() -> S) -> S {
    match self {
      | Self::Success(s) => s,
      | Self::Failure(_) => supplier(),
    }
  }
}

impl<F: fmt::Display, S: fmt::Display> fmt::Display for Mapping<F, S> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Failure(e) => write!(f, "Failure({})", e),
      | Self::Success(s) => write!(f, "Success({})", s),
    }
  }
}

impl<F, S> From<Result<S, F>> for Mapping<F, S> {
  fn from(r: Result<S, F>) -> Self {
    match r {
      | Ok(s) => Self::Success(s),
      | Err(e) => Self::Failure(e),
    }
  }
}

impl<F, S> From<Mapping<F, S>> for Result<S, F> {
  fn from(m: Mapping<F, S>) -> Self {
    match m {
      | Mapping::Success(s) => Ok(s),
      | Mapping::Failure(e) => Err(e),
    }
  }
}
