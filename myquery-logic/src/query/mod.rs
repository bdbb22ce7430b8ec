//! The sequence operations with nullable arguments.
//!
//! Every function checks its arguments with the [`guard`](crate::guard)
//! first, in declaration order, and fails with
//! [`Error::NullArgument`](crate::Error::NullArgument) naming the first
//! absent one. No operation mutates its source; results are freshly
//! allocated.
//!
//! ```
//! use myquery_logic::query;
//!
//! let source = [-2, -1, 0, 1, 2];
//! let even = query::filter(Some(&source), Some(|n: &i32| n % 2 == 0)).unwrap();
//! assert_eq!(even, [-2, 0, 2]);
//!
//! let err = query::count(None::<&[i32]>).unwrap_err();
//! assert_eq!(err.to_string(), "Value cannot be null. (Parameter 'source')");
//! ```
pub(crate) mod aggregate;
pub(crate) mod convert;
pub(crate) mod order;
pub(crate) mod transform;

pub use aggregate::{average, count, max, min, sum};
pub use convert::{to_array, to_list};
pub use order::{distinct, distinct_non_null, sort_by};
pub use transform::{filter, for_each, for_each_indexed, map};
