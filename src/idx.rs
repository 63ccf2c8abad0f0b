use std::{fmt, marker::PhantomData, num::NonZeroUsize, ops, cmp, hash};

/// A typed handle into a `Vec<T>` arena.
///
/// Stored off by one in a [NonZeroUsize] so `Option<Idx<T>>` stays a single word.
#[repr(transparent)]
pub struct Idx<T>(NonZeroUsize, PhantomData<T>);

impl<T> fmt::Debug for Idx<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.usize(), f)
    }
}

pub trait IdxDisplay {
    fn fmt(f: &mut fmt::Formatter<'_>, idx: usize) -> fmt::Result;
}

impl<T: IdxDisplay> fmt::Display for Idx<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        T::fmt(f, self.usize())
    }
}

impl<T> Idx<T> {
    pub fn new(index: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(index), PhantomData)
    }

    pub fn usize(&self) -> usize {
        self.0.get() - 1
    }
}

// #[derive] does not work where type parameters do not implement the trait
// https://github.com/rust-lang/rust/issues/26925
impl<T> Clone for Idx<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Idx<T> { }

impl<T> PartialEq for Idx<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Idx<T> { }

impl<T> cmp::PartialOrd for Idx<T> {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> cmp::Ord for Idx<T> {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> hash::Hash for Idx<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> ops::Index<Idx<T>> for Vec<T> {
    type Output = T;

    fn index(&self, index: Idx<T>) -> &Self::Output {
        &self[index.usize()]
    }
}

impl<T> ops::IndexMut<Idx<T>> for Vec<T> {
    fn index_mut(&mut self, index: Idx<T>) -> &mut Self::Output {
        &mut self[index.usize()]
    }
}

impl<T> ops::Index<Idx<T>> for [T] {
    type Output = T;

    fn index(&self, index: Idx<T>) -> &Self::Output {
        &self[index.usize()]
    }
}

impl<T> ops::IndexMut<Idx<T>> for [T] {
    fn index_mut(&mut self, index: Idx<T>) -> &mut Self::Output {
        &mut self[index.usize()]
    }
}

pub trait SliceExt<T> {
    fn iter_index(&self) -> SliceIndexIter<T>;
}

impl<T> SliceExt<T> for [T] {
    fn iter_index(&self) -> SliceIndexIter<T> {
        SliceIndexIter::new(self.len())
    }
}

impl<T> SliceExt<T> for Vec<T> {
    fn iter_index(&self) -> SliceIndexIter<T> {
        SliceIndexIter::new(self.len())
    }
}

/// Yields every handle of an arena, in storage order
pub struct SliceIndexIter<T> {
    range: ops::Range<usize>,
    _phantom: PhantomData<T>,
}

impl<T> SliceIndexIter<T> {
    fn new(len: usize) -> Self {
        Self {
            range: 0..len,
            _phantom: PhantomData,
        }
    }
}

impl<T> Iterator for SliceIndexIter<T> {
    type Item = Idx<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(Idx::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<T> DoubleEndedIterator for SliceIndexIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().map(Idx::new)
    }
}

impl<T> ExactSizeIterator for SliceIndexIter<T> { }
