use crate::Mapping;

pub trait Tap<T> {
  fn tap(self, action: impl FnOnce(&T) -> ()) -> Self;
}

pub trait TapErr<E> {
  fn tap_err(self, action: impl FnOnce(&E) -> ()) -> Self;
}

impl<F, S> Tap<S> for Mapping<F, S> {
  fn tap(self, action: impl FnOnce(&S) -> ()) -> Self {
    self.if_success(action)
  }
}

impl<F, S> TapErr<F> for Mapping<F, S> {
  fn tap_err(self, action: impl FnOnce(&F) -> ()) -> Self {
    self.if_failure(action)
  }
}
