use crate::error;
use crate::guard::CheckArgument;
use crate::sequence::{Sequence, SequenceCore};

/// Keep the elements for which `predicate` returns true, in their original
/// order.
pub fn filter<S, T, P>(source: Option<&S>, predicate: Option<P>) -> error::Result<Sequence<T>>
where
    S: SequenceCore<T> + ?Sized,
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let source = source.check_argument("source")?;
    let predicate = predicate.check_argument("predicate")?;
    Ok(filter_items(source, predicate))
}

/// Apply `mapping` to every element. The result is index aligned with the
/// source.
pub fn map<S, T, R, F>(source: Option<&S>, mapping: Option<F>) -> error::Result<Sequence<R>>
where
    S: SequenceCore<T> + ?Sized,
    F: FnMut(&T) -> R,
{
    let source = source.check_argument("source")?;
    let mapping = mapping.check_argument("mapping")?;
    Ok(map_items(source, mapping))
}

/// Invoke `action` once per element, front to back.
///
/// Hands back the source itself so calls can be chained.
pub fn for_each<'a, S, T, A>(source: Option<&'a S>, action: Option<A>) -> error::Result<&'a S>
where
    S: SequenceCore<T> + ?Sized,
    A: FnMut(&T),
{
    let source = source.check_argument("source")?;
    let action = action.check_argument("action")?;
    Ok(for_each_items(source, action))
}

/// Invoke `action` once per element together with its zero-based index.
pub fn for_each_indexed<'a, S, T, A>(
    source: Option<&'a S>,
    action: Option<A>,
) -> error::Result<&'a S>
where
    S: SequenceCore<T> + ?Sized,
    A: FnMut(usize, &T),
{
    let source = source.check_argument("source")?;
    let action = action.check_argument("action")?;
    Ok(for_each_indexed_items(source, action))
}

pub(crate) fn filter_items<S, T>(source: &S, mut predicate: impl FnMut(&T) -> bool) -> Sequence<T>
where
    S: SequenceCore<T> + ?Sized,
    T: Clone,
{
    source
        .items()
        .filter(|item| predicate(item))
        .cloned()
        .collect()
}

pub(crate) fn map_items<S, T, R>(source: &S, mapping: impl FnMut(&T) -> R) -> Sequence<R>
where
    S: SequenceCore<T> + ?Sized,
{
    source.items().map(mapping).collect()
}

pub(crate) fn for_each_items<S, T>(source: &S, action: impl FnMut(&T)) -> &S
where
    S: SequenceCore<T> + ?Sized,
{
    source.items().for_each(action);
    source
}

pub(crate) fn for_each_indexed_items<S, T>(source: &S, mut action: impl FnMut(usize, &T)) -> &S
where
    S: SequenceCore<T> + ?Sized,
{
    for (index, item) in source.items().enumerate() {
        action(index, item);
    }
    source
}
