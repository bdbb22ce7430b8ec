use crate::error;
use crate::guard::CheckArgument;
use crate::sequence::SequenceCore;

/// Copy the source into a fixed-size slice.
pub fn to_array<S, T>(source: Option<&S>) -> error::Result<Box<[T]>>
where
    S: SequenceCore<T> + ?Sized,
    T: Clone,
{
    let source = source.check_argument("source")?;
    Ok(to_array_items(source))
}

/// Copy the source into a growable vector.
pub fn to_list<S, T>(source: Option<&S>) -> error::Result<Vec<T>>
where
    S: SequenceCore<T> + ?Sized,
    T: Clone,
{
    let source = source.check_argument("source")?;
    Ok(to_list_items(source))
}

pub(crate) fn to_array_items<S, T>(source: &S) -> Box<[T]>
where
    S: SequenceCore<T> + ?Sized,
    T: Clone,
{
    to_list_items(source).into_boxed_slice()
}

pub(crate) fn to_list_items<S, T>(source: &S) -> Vec<T>
where
    S: SequenceCore<T> + ?Sized,
    T: Clone,
{
    let mut list = Vec::with_capacity(source.len());
    list.extend(source.items().cloned());
    list
}
