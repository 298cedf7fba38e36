use crate::Mapping;

pub trait Functor<A, B> {
  type Out;
  fn fmap(self, f: impl FnOnce(A) -> B) -> Self::Out;
}

/// `first` maps the failure side, `second` the success side.
pub trait BiFunctor<A1, A2, B1, B2> {
  type Out;
  fn bi_map(self,
            f1: impl FnOnce(A1) -> B1,
            f2: impl FnOnce(A2) -> B2)
            -> Self::Out;
}

impl<F, A, B> Functor<A, B> for Mapping<F, A> {
  type Out = Mapping<F, B>;
  fn fmap(self, f: impl FnOnce(A) -> B) -> Self::Out {
    self.map(f)
  }
}

impl<F, S, G, U> BiFunctor<F, S, G, U> for Mapping<F, S> {
  type Out = Mapping<G, U>;
  fn bi_map(self,
            f1: impl FnOnce(F) -> G,
            f2: impl FnOnce(S) -> U)
            -> Self::Out {
    match self {
      | Mapping::Failure(e) => Mapping::Failure(f1(e)),
      | Mapping::Success(s) => Mapping::Success(f2(s)),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  type M = Mapping<String, i32>;

  #[test]
  fn fmap_identity() {
    assert_eq!(M::success(3).fmap(|x| x), M::success(3));
    assert_eq!(M::failure("e".into()).fmap(|x| x), M::failure("e".into()));
  }

  #[test]
  fn bi_map_touches_only_the_present_side() {
    let ok: Mapping<usize, String> =
      M::success(3).bi_map(|e: String| e.len(), |n: i32| n.to_string());
    let failed: Mapping<usize, String> =
      M::failure("boom".into()).bi_map(|e: String| e.len(), |n: i32| n.to_string());

    assert_eq!(ok, Mapping::success("3".to_string()));
    assert_eq!(failed, Mapping::failure(4));
  }
}
