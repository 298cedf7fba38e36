//! A two-state value for the outcome of a fallible computation, plus
//! combinators and collectors for working with sequences of them.
//!
//! ```
//! use stream_mapper::prelude::*;
//!
//! let parsed = vec!["1", "two", "3"].into_iter()
//!                                   .map(Mapping::of(str::parse::<i32>))
//!                                   .collect::<Vec<_>>();
//!
//! assert_eq!(parsed.iter().filter(|m| m.is_failure()).count(), 1);
//! assert_eq!(parsed.into_iter().successes(), vec![1, 3]);
//! ```

pub mod mapping;
pub mod prelude;

pub use mapping::{collectors, Caught, Mapping};
