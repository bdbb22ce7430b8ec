//! Eager sequence operations: filter, map, aggregates, ordering,
//! deduplication and iteration with side effects.
//!
//! The [`query`] functions accept nullable (`Option`) arguments and reject
//! `None` through the [`guard`]. The same operations are available as
//! infallible methods on [`Sequence`].

pub mod error;
pub mod guard;
pub mod numeric;
pub mod query;
pub mod sequence;

pub use error::{Error, Result};
pub use guard::{check_argument, CheckArgument};
pub use numeric::AsF64;
pub use sequence::{Sequence, SequenceCore};
