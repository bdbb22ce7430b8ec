use std::hash::Hash;

use crate::error;
use crate::guard::CheckArgument;
use crate::sequence::{self, Distinct, Sequence, SequenceCore};

/// A copy of the source sorted ascending by the key `key_selector` extracts.
///
/// The sort is stable: elements with equal keys keep their relative order.
pub fn sort_by<S, T, K, F>(
    source: Option<&S>,
    key_selector: Option<F>,
) -> error::Result<Sequence<T>>
where
    S: SequenceCore<T> + ?Sized,
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let source = source.check_argument("source")?;
    let key_selector = key_selector.check_argument("key_selector")?;
    Ok(sort_by_items(source, key_selector))
}

/// Every distinct element once, in order of first occurrence.
pub fn distinct<S, T>(source: Option<&S>) -> error::Result<Sequence<T>>
where
    S: SequenceCore<T> + ?Sized,
    T: Eq + Hash + Clone,
{
    let source = source.check_argument("source")?;
    Ok(distinct_items(source))
}

/// Every distinct present element once, in order of first occurrence.
///
/// Null (`None`) elements never make it into the result.
pub fn distinct_non_null<S, T>(source: Option<&S>) -> error::Result<Sequence<T>>
where
    S: SequenceCore<Option<T>> + ?Sized,
    T: Eq + Hash + Clone,
{
    let source = source.check_argument("source")?;
    Ok(distinct_non_null_items(source))
}

pub(crate) fn sort_by_items<S, T, K>(source: &S, key_selector: impl FnMut(&T) -> K) -> Sequence<T>
where
    S: SequenceCore<T> + ?Sized,
    T: Clone,
    K: Ord,
{
    let mut items = super::convert::to_list_items(source);
    items.sort_by_key(key_selector);
    tracing::trace!(len = items.len(), "sorted sequence");
    items.into()
}

pub(crate) fn distinct_items<S, T>(source: &S) -> Sequence<T>
where
    S: SequenceCore<T> + ?Sized,
    T: Eq + Hash + Clone,
{
    let distinct: Sequence<T> = Distinct::new(source.items()).cloned().collect();
    tracing::trace!(
        before = source.len(),
        after = distinct.len(),
        "removed duplicates"
    );
    distinct
}

pub(crate) fn distinct_non_null_items<S, T>(source: &S) -> Sequence<T>
where
    S: SequenceCore<Option<T>> + ?Sized,
    T: Eq + Hash + Clone,
{
    let distinct: Sequence<T> = sequence::distinct_non_null(source.items())
        .cloned()
        .collect();
    tracing::trace!(
        before = source.len(),
        after = distinct.len(),
        "removed nulls and duplicates"
    );
    distinct
}
