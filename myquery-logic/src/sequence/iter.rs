use std::hash::Hash;

use ahash::HashSet;

/// An iterator yielding the first occurrence of every distinct element.
///
/// Membership is tracked in a hash set, so each element is checked in
/// constant time; the output keeps first-occurrence order.
pub struct Distinct<'a, T, I>
where
    T: 'a,
    I: Iterator<Item = &'a T>,
{
    iter: I,
    seen: HashSet<&'a T>,
}

impl<'a, T, I> Distinct<'a, T, I>
where
    T: Eq + Hash + 'a,
    I: Iterator<Item = &'a T>,
{
    pub fn new(iter: I) -> Self {
        Self {
            iter,
            seen: HashSet::default(),
        }
    }
}

impl<'a, T, I> Iterator for Distinct<'a, T, I>
where
    T: Eq + Hash + 'a,
    I: Iterator<Item = &'a T>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.iter.by_ref().find(|item| self.seen.insert(*item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // everything left could be a duplicate, but never more than
        // what is left
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

/// [`Distinct`] over a sequence of nullable elements. `None` elements are
/// skipped before the membership check.
pub type DistinctNonNull<'a, T, I> = Distinct<'a, T, std::iter::Flatten<I>>;

pub(crate) fn distinct_non_null<'a, T, I>(iter: I) -> DistinctNonNull<'a, T, I>
where
    T: Eq + Hash + 'a,
    I: Iterator<Item = &'a Option<T>>,
{
    Distinct::new(iter.flatten())
}
