use std::{any::Any,
          panic::{self, AssertUnwindSafe}};

#[cfg(feature = "serde")]
use serde::{Deserialize as De, Serialize as Ser};
use thiserror::Error as DeriveError;

use super::Mapping;

/// A panic caught by [`Mapping::catching`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, DeriveError)]
#[cfg_attr(feature = "serde", derive(Ser, De))]
#[error("panicked: {message}")]
pub struct Caught {
  message: String,
}

impl Caught {
  pub fn new(message: impl Into<String>) -> Self {
    Self { message: message.into() }
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  fn from_panic(payload: Box<dyn Any + Send>) -> Self {
    let message = payload.downcast::<String>()
                         .map(|s| *s)
                         .or_else(|p| p.downcast::<&'static str>().map(|s| (*s).to_string()))
                         .unwrap_or_else(|_| "Box<dyn Any>".to_string());

    Self { message }
  }
}

impl<S> Mapping<Caught, S> {
  /// Lift an infallible-looking function into one that turns a panic
  /// into a failure instead of unwinding into the caller.
  ///
  /// The process panic hook still runs before the panic is caught.
  pub fn catching<T>(mut f: impl FnMut(T) -> S) -> impl FnMut(T) -> Self {
    move |t| match panic::catch_unwind(AssertUnwindSafe(|| f(t))) {
      | Ok(s) => Self::Success(s),
      | Err(payload) => {
        let caught = Caught::from_panic(payload);
        log::warn!("> caught panic: {}", caught.message);
        Self::Failure(caught)
      },
    }
  }
}

impl<F, S> Mapping<F, S> {
  pub fn catching_with<T>(f: impl FnMut(T) -> S,
                          mut failure_mapper: impl FnMut(Caught) -> F)
                          -> impl FnMut(T) -> Self {
    let mut capture = Mapping::<Caught, S>::catching(f);
    move |t| capture(t).map_failure(&mut failure_mapper)
  }
}
