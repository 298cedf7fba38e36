pub mod monad;
pub use monad::*;

pub mod tap;
pub use tap::*;

pub mod functor;
pub use functor::*;

pub mod iter;
pub use iter::*;

pub mod stream;
pub use stream::*;

pub mod result;
pub use result::*;

pub use crate::mapping::{collectors::Collector, Caught, Mapping};
