use crate::error;
use crate::guard::CheckArgument;
use crate::numeric::AsF64;
use crate::sequence::SequenceCore;

/// The number of elements in the source.
pub fn count<S, T>(source: Option<&S>) -> error::Result<usize>
where
    S: SequenceCore<T> + ?Sized,
{
    let source = source.check_argument("source")?;
    Ok(count_items(source))
}

/// Total of the selected values. An empty source sums to `0.0`.
pub fn sum<S, T, N, F>(source: Option<&S>, selector: Option<F>) -> error::Result<f64>
where
    S: SequenceCore<T> + ?Sized,
    N: AsF64,
    F: FnMut(&T) -> N,
{
    let source = source.check_argument("source")?;
    let selector = selector.check_argument("selector")?;
    Ok(sum_items(source, selector))
}

/// Smallest selected value, or `None` for an empty source.
///
/// A later value only replaces the current minimum if it is strictly
/// smaller, so the earliest of equal values is kept.
pub fn min<S, T, N, F>(source: Option<&S>, selector: Option<F>) -> error::Result<Option<f64>>
where
    S: SequenceCore<T> + ?Sized,
    N: AsF64,
    F: FnMut(&T) -> N,
{
    let source = source.check_argument("source")?;
    let selector = selector.check_argument("selector")?;
    Ok(min_items(source, selector))
}

/// Largest selected value, or `None` for an empty source.
pub fn max<S, T, N, F>(source: Option<&S>, selector: Option<F>) -> error::Result<Option<f64>>
where
    S: SequenceCore<T> + ?Sized,
    N: AsF64,
    F: FnMut(&T) -> N,
{
    let source = source.check_argument("source")?;
    let selector = selector.check_argument("selector")?;
    Ok(max_items(source, selector))
}

/// Arithmetic mean of the selected values, or `None` for an empty source.
pub fn average<S, T, N, F>(source: Option<&S>, selector: Option<F>) -> error::Result<Option<f64>>
where
    S: SequenceCore<T> + ?Sized,
    N: AsF64,
    F: FnMut(&T) -> N,
{
    let source = source.check_argument("source")?;
    let selector = selector.check_argument("selector")?;
    Ok(average_items(source, selector))
}

pub(crate) fn count_items<S, T>(source: &S) -> usize
where
    S: SequenceCore<T> + ?Sized,
{
    source.len()
}

pub(crate) fn sum_items<S, T, N>(source: &S, mut selector: impl FnMut(&T) -> N) -> f64
where
    S: SequenceCore<T> + ?Sized,
    N: AsF64,
{
    source
        .items()
        .map(|item| -> f64 { selector(item).as_f64() })
        .fold(0.0, |total, value| total + value)
}

pub(crate) fn min_items<S, T, N>(source: &S, selector: impl FnMut(&T) -> N) -> Option<f64>
where
    S: SequenceCore<T> + ?Sized,
    N: AsF64,
{
    min_or_max(source, selector, |value, min| value < min)
}

pub(crate) fn max_items<S, T, N>(source: &S, selector: impl FnMut(&T) -> N) -> Option<f64>
where
    S: SequenceCore<T> + ?Sized,
    N: AsF64,
{
    min_or_max(source, selector, |value, max| value > max)
}

pub(crate) fn average_items<S, T, N>(source: &S, mut selector: impl FnMut(&T) -> N) -> Option<f64>
where
    S: SequenceCore<T> + ?Sized,
    N: AsF64,
{
    let (total, count) = source
        .items()
        .map(|item| -> f64 { selector(item).as_f64() })
        .fold((0.0, 0usize), |(total, count), value| (total + value, count + 1));
    if count == 0 {
        None
    } else {
        Some(total / count as f64)
    }
}

// the extreme is seeded by the first value and only replaced when `replaces`
// holds. a NaN seed is therefore kept, and a later NaN never wins.
fn min_or_max<S, T, N>(
    source: &S,
    mut selector: impl FnMut(&T) -> N,
    replaces: impl Fn(f64, f64) -> bool,
) -> Option<f64>
where
    S: SequenceCore<T> + ?Sized,
    N: AsF64,
{
    let mut values = source.items().map(|item| -> f64 { selector(item).as_f64() });
    let first = values.next()?;
    Some(values.fold(first, |extreme, value| {
        if replaces(value, extreme) {
            value
        } else {
            extreme
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source() {
        let source: [f64; 0] = [];
        assert_eq!(sum(Some(&source), Some(|v: &f64| *v)), Ok(0.0));
        assert_eq!(min(Some(&source), Some(|v: &f64| *v)), Ok(None));
        assert_eq!(max(Some(&source), Some(|v: &f64| *v)), Ok(None));
        assert_eq!(average(Some(&source), Some(|v: &f64| *v)), Ok(None));
        assert_eq!(count(Some(&source)), Ok(0));
    }

    #[test]
    fn test_selector_projects_elements() {
        let source = [("a", 3u8), ("b", 1u8), ("c", 2u8)];
        let select = |pair: &(&str, u8)| pair.1;
        assert_eq!(sum(Some(&source), Some(select)), Ok(6.0));
        assert_eq!(min(Some(&source), Some(select)), Ok(Some(1.0)));
        assert_eq!(max(Some(&source), Some(select)), Ok(Some(3.0)));
        assert_eq!(average(Some(&source), Some(select)), Ok(Some(2.0)));
    }

    #[test]
    fn test_wide_integer_selectors() {
        let source: [i64; 3] = [i64::MAX, -1, 0];
        assert_eq!(max(Some(&source), Some(|v: &i64| *v)), Ok(Some(i64::MAX as f64)));
        assert_eq!(min(Some(&source), Some(|v: &i64| *v)), Ok(Some(-1.0)));
        let lengths = vec!["a", "bcd"];
        assert_eq!(sum(Some(&lengths), Some(|s: &&str| s.len())), Ok(4.0));
        assert_eq!(average(Some(&lengths), Some(|s: &&str| s.len() as u64)), Ok(Some(2.0)));
    }

    #[test]
    fn test_nan_seed_is_kept() {
        let source = [f64::NAN, 1.0, 2.0];
        let min = min_items(&source, |v: &f64| *v).unwrap();
        assert!(min.is_nan());
        let source = [1.0, f64::NAN, 2.0];
        assert_eq!(max_items(&source, |v: &f64| *v), Some(2.0));
    }

    #[test]
    fn test_missing_selector() {
        let source = vec![1];
        let err = sum(Some(&source), None::<fn(&i32) -> i32>).unwrap_err();
        assert_eq!(err.parameter(), "selector");
        let err = average(Some(&source), None::<fn(&i32) -> i32>).unwrap_err();
        assert_eq!(err.parameter(), "selector");
    }

    #[test]
    fn test_missing_source_is_checked_first() {
        let err = min(None::<&Vec<i32>>, None::<fn(&i32) -> i32>).unwrap_err();
        assert_eq!(err.parameter(), "source");
        let err = count(None::<&Vec<i32>>).unwrap_err();
        assert_eq!(err.parameter(), "source");
    }
}
