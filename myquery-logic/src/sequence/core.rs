use std::hash::Hash;

use crate::numeric::AsF64;
use crate::query::{aggregate, convert, order, transform};

/// An owned, ordered sequence of elements.
///
/// This is the container the operations produce. It offers the operations
/// as methods too; a receiver and a closure can't be absent, so unlike the
/// functions in [`crate::query`] these never fail.
///
/// ```
/// use myquery_logic::Sequence;
///
/// let numbers: Sequence<i32> = (-10..=10).collect();
/// let even = numbers.filter(|n| n % 2 == 0);
/// assert_eq!(even.count(), 11);
/// assert_eq!(even.sum(|n| *n), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence<T> {
    items: Vec<T>,
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Sequence<T> {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the element at the index, if it exists
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Take the elements out as a vector without copying
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }

    /// The elements for which `predicate` holds, in order.
    pub fn filter(&self, predicate: impl FnMut(&T) -> bool) -> Sequence<T>
    where
        T: Clone,
    {
        transform::filter_items(self, predicate)
    }

    /// Transform every element, keeping positions aligned.
    pub fn map<R>(&self, mapping: impl FnMut(&T) -> R) -> Sequence<R> {
        transform::map_items(self, mapping)
    }

    /// Copy into a fixed-size slice.
    pub fn to_array(&self) -> Box<[T]>
    where
        T: Clone,
    {
        convert::to_array_items(self)
    }

    /// Copy into a growable vector.
    pub fn to_list(&self) -> Vec<T>
    where
        T: Clone,
    {
        convert::to_list_items(self)
    }

    pub fn count(&self) -> usize {
        aggregate::count_items(self)
    }

    /// Sum of the selected values; `0.0` when empty.
    pub fn sum<N: AsF64>(&self, selector: impl FnMut(&T) -> N) -> f64 {
        aggregate::sum_items(self, selector)
    }

    /// Smallest selected value; the earliest one wins ties.
    pub fn min<N: AsF64>(&self, selector: impl FnMut(&T) -> N) -> Option<f64> {
        aggregate::min_items(self, selector)
    }

    /// Largest selected value; the earliest one wins ties.
    pub fn max<N: AsF64>(&self, selector: impl FnMut(&T) -> N) -> Option<f64> {
        aggregate::max_items(self, selector)
    }

    pub fn average<N: AsF64>(&self, selector: impl FnMut(&T) -> N) -> Option<f64> {
        aggregate::average_items(self, selector)
    }

    /// Call `action` for every element, then hand back `self` for chaining.
    pub fn for_each(&self, action: impl FnMut(&T)) -> &Self {
        transform::for_each_items(self, action)
    }

    /// Like [`Sequence::for_each`], passing the zero-based index along.
    pub fn for_each_indexed(&self, action: impl FnMut(usize, &T)) -> &Self {
        transform::for_each_indexed_items(self, action)
    }

    /// A copy sorted ascending by the extracted key. The sort is stable.
    pub fn sort_by<K: Ord>(&self, key_selector: impl FnMut(&T) -> K) -> Sequence<T>
    where
        T: Clone,
    {
        order::sort_by_items(self, key_selector)
    }

    /// Every distinct element once, in order of first occurrence.
    pub fn distinct(&self) -> Sequence<T>
    where
        T: Eq + Hash + Clone,
    {
        order::distinct_items(self)
    }
}

impl<T> Sequence<Option<T>> {
    /// Every distinct present element once, in order of first occurrence.
    /// `None` elements are dropped.
    pub fn distinct_non_null(&self) -> Sequence<T>
    where
        T: Eq + Hash + Clone,
    {
        order::distinct_non_null_items(self)
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(items: [T; N]) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl<T> From<Box<[T]>> for Sequence<T> {
    fn from(items: Box<[T]>) -> Self {
        Self {
            items: items.into_vec(),
        }
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    fn from(sequence: Sequence<T>) -> Self {
        sequence.items
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: PartialEq> PartialEq<[T]> for Sequence<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.items == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Sequence<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.items == other
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for Sequence<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        &self.items == other
    }
}
