use std::collections::VecDeque;

use super::core::Sequence;

/// The core sequence interface: an operation source must implement this.
///
/// Elements are only ever handed out by reference; the operations copy
/// what they keep, so a source is never aliased into a result.
pub trait SequenceCore<T> {
    /// Get the elements from the sequence as an iterator, front to back
    fn items<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;

    /// Number of elements produced by one full iteration
    fn len(&self) -> usize {
        self.items().count()
    }

    /// Check whether the sequence is empty
    fn is_empty(&self) -> bool {
        self.items().next().is_none()
    }
}

impl<T> SequenceCore<T> for [T] {
    #[inline]
    fn items<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }
}

impl<T, const N: usize> SequenceCore<T> for [T; N] {
    #[inline]
    fn items<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<T> SequenceCore<T> for Vec<T> {
    #[inline]
    fn items<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl<T> SequenceCore<T> for VecDeque<T> {
    #[inline]
    fn items<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}

impl<T> SequenceCore<T> for Sequence<T> {
    #[inline]
    fn items<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }

    #[inline]
    fn len(&self) -> usize {
        Sequence::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Sequence::is_empty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // a sequence that only knows how to iterate
    struct Countdown(u8);

    impl SequenceCore<u8> for Countdown {
        fn items<'a>(&'a self) -> impl Iterator<Item = &'a u8>
        where
            u8: 'a,
        {
            static DIGITS: [u8; 10] = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
            DIGITS[(10 - self.0 as usize)..].iter()
        }
    }

    #[test]
    fn test_default_len_iterates() {
        assert_eq!(Countdown(3).len(), 3);
        assert!(!Countdown(3).is_empty());
        assert!(Countdown(0).is_empty());
    }

    #[test]
    fn test_collections_agree() {
        let vec = vec![1, 2, 3];
        let deque: VecDeque<_> = vec.iter().copied().collect();
        let array = [1, 2, 3];
        let sequence: Sequence<_> = vec.clone().into();

        assert_eq!(SequenceCore::len(&vec), 3);
        assert_eq!(SequenceCore::len(&deque), 3);
        assert_eq!(SequenceCore::len(&array), 3);
        assert_eq!(SequenceCore::len(vec.as_slice()), 3);
        assert_eq!(SequenceCore::len(&sequence), 3);
        assert!(deque.items().eq(sequence.items()));
    }
}
