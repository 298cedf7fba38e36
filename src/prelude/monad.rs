use crate::Mapping;

pub trait Monad<A, B>
  where Self: Sized
{
  type Out;
  fn bind(self, f: impl FnOnce(A) -> Self::Out) -> Self::Out;
}

impl<F, A, B> Monad<A, B> for Mapping<F, A> {
  type Out = Mapping<F, B>;
  fn bind(self, f: impl FnOnce(A) -> Self::Out) -> Self::Out {
    self.flat_map(f)
  }
}
