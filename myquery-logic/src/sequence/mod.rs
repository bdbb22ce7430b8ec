//! A sequence is an ordered, finite and repeatedly iterable collection of
//! elements of any type.
//!
//! [`SequenceCore`] is the abstraction every operation consumes. It is
//! implemented for the owned [`Sequence`] container as well as for the
//! standard library's ordered collections.

mod core;
mod iter;
mod traits;

pub use self::core::Sequence;
pub(crate) use iter::distinct_non_null;
pub use iter::{Distinct, DistinctNonNull};
pub use traits::SequenceCore;
