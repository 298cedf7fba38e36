use crate::Mapping;

pub trait IntoMapping<T, E> {
  fn into_mapping(self) -> Mapping<E, T>;
}

pub trait Open<A>
  where Self: Sized
{
  fn open(self) -> A;
}

impl<T, E> IntoMapping<T, E> for Result<T, E> {
  fn into_mapping(self) -> Mapping<E, T> {
    self.into()
  }
}

impl<A> Open<A> for Mapping<A, A> {
  fn open(self) -> A {
    match self {
      | Mapping::Success(a) | Mapping::Failure(a) => a,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn into_mapping_keeps_the_state() {
    assert_eq!("7".parse::<u8>().into_mapping(), Mapping::success(7));
    assert!("-7".parse::<u8>().into_mapping().is_failure());
  }

  #[test]
  fn open_takes_whichever_side_is_present() {
    let describe = |m: Mapping<String, i32>| m.map(|n| format!("got {}", n)).open();

    assert_eq!(describe(Mapping::success(3)), "got 3");
    assert_eq!(describe(Mapping::failure("nothing".into())), "nothing");
  }
}
