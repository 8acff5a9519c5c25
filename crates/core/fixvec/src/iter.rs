//! Owning and draining iterators for [`FixedVec`].

use core::iter::FusedIterator;
use core::mem::{self, MaybeUninit};
use core::ops::Range;
use core::ptr::{self, NonNull};
use core::{fmt, slice};

use crate::vec::FixedVec;

// ---------------------------------------------------------------------------
// IntoIter
// ---------------------------------------------------------------------------

/// An iterator that moves elements out of a [`FixedVec`].
///
/// Created by [`FixedVec::into_iter`](IntoIterator::into_iter). Elements that
/// are never yielded are dropped with the iterator.
pub struct IntoIter<T, const N: usize> {
    data: [MaybeUninit<T>; N],
    // Live slots not yet yielded.
    alive: Range<usize>,
}

impl<T, const N: usize> IntoIter<T, N> {
    pub(crate) fn new(vec: FixedVec<T, N>) -> Self {
        let (data, len) = vec.into_raw_parts();
        Self { data, alive: 0..len }
    }

    /// Returns the elements that have not been yielded yet.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: Slots in `alive` are initialized and not yet moved out.
        unsafe {
            slice::from_raw_parts(
                self.data.as_ptr().add(self.alive.start).cast::<T>(),
                self.alive.len(),
            )
        }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let index = self.alive.next()?;
        // SAFETY: `index` was in `alive`, so the slot is initialized, and it
        // has just been removed from `alive`, so it is read exactly once.
        Some(unsafe { self.data[index].assume_init_read() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.alive.len();
        (len, Some(len))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        let index = self.alive.next_back()?;
        // SAFETY: Same as `next`.
        Some(unsafe { self.data[index].assume_init_read() })
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        let remaining = mem::replace(&mut self.alive, 0..0);
        // SAFETY: The slots in `remaining` are initialized and were never
        // yielded; `alive` is emptied first so nothing is dropped twice.
        unsafe {
            let first = self.data.as_mut_ptr().add(remaining.start).cast::<T>();
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first, remaining.len()));
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

// ---------------------------------------------------------------------------
// Drain
// ---------------------------------------------------------------------------

/// A draining iterator over a range of a [`FixedVec`].
///
/// Created by [`FixedVec::drain`] / [`FixedVec::try_drain`]. While the drain
/// is alive the vector's length stops at the start of the range; when it is
/// dropped, unyielded elements in the range are dropped and the tail is
/// shifted down to close the gap.
pub struct Drain<'a, T, const N: usize> {
    vec: NonNull<FixedVec<T, N>>,
    iter: slice::Iter<'a, T>,
    tail_start: usize,
    tail_len: usize,
}

impl<'a, T, const N: usize> Drain<'a, T, N> {
    /// `vec.len()` must already be set to `range.start`, and
    /// `range.end + tail_len` must be the length before draining.
    pub(crate) fn new(vec: &'a mut FixedVec<T, N>, range: Range<usize>, tail_len: usize) -> Self {
        // SAFETY: `range` lies within the old live range, so the slots are
        // initialized. They are read at most once through `iter`.
        let iter = unsafe {
            slice::from_raw_parts(vec.as_ptr().add(range.start), range.len()).iter()
        };
        Self {
            vec: NonNull::from(vec),
            iter,
            tail_start: range.end,
            tail_len,
        }
    }

    /// Returns the elements of the range that have not been yielded yet.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.iter.as_slice()
    }
}

impl<T, const N: usize> Iterator for Drain<'_, T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        // SAFETY: Each element of the range is yielded at most once and is
        // never dropped by the drain afterwards.
        self.iter.next().map(|elem| unsafe { ptr::read(elem) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T, const N: usize> DoubleEndedIterator for Drain<'_, T, N> {
    fn next_back(&mut self) -> Option<T> {
        // SAFETY: Same as `next`.
        self.iter.next_back().map(|elem| unsafe { ptr::read(elem) })
    }
}

impl<T, const N: usize> ExactSizeIterator for Drain<'_, T, N> {}

impl<T, const N: usize> FusedIterator for Drain<'_, T, N> {}

impl<T, const N: usize> Drop for Drain<'_, T, N> {
    fn drop(&mut self) {
        // Moves the tail back even if dropping a remaining element panics.
        struct CloseGap<'r, 'a, T, const N: usize>(&'r mut Drain<'a, T, N>);

        impl<T, const N: usize> Drop for CloseGap<'_, '_, T, N> {
            fn drop(&mut self) {
                let drain = &mut *self.0;
                // SAFETY: The vector outlives the drain. Slots
                // [tail_start..tail_start+tail_len] are live; the gap below
                // them starts at the vector's current length.
                unsafe {
                    let vec = drain.vec.as_mut();
                    let start = vec.len();
                    if drain.tail_len > 0 && drain.tail_start != start {
                        let base = vec.as_mut_ptr();
                        ptr::copy(base.add(drain.tail_start), base.add(start), drain.tail_len);
                    }
                    vec.set_len(start + drain.tail_len);
                }
            }
        }

        let remaining = mem::take(&mut self.iter);
        let drop_len = remaining.len();
        let first = remaining.as_slice().as_ptr().cast_mut();
        let guard = CloseGap(self);
        if drop_len > 0 {
            // SAFETY: The remaining elements were never yielded and are no
            // longer reachable through `iter`.
            unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first, drop_len)) };
        }
        drop(guard);
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Drain<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Drain").field(&self.iter.as_slice()).finish()
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    extern crate std;
    use std::string::{String, ToString};
    use std::vec;
    use std::vec::Vec;

    use crate::{fixed_vec, FixedVec};

    #[test]
    fn into_iter_moves_in_order() {
        let vec: FixedVec<String, 4> = fixed_vec!["a".to_string(), "b".to_string()];
        let collected: Vec<String> = vec.into_iter().collect();
        assert_eq!(collected, vec!["a", "b"]);
    }

    #[test]
    fn into_iter_both_ends() {
        let vec: FixedVec<i32, 8> = fixed_vec![1, 2, 3, 4];
        let mut iter = vec.into_iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.as_slice(), &[2, 3]);
        assert_eq!(iter.rev().collect::<Vec<_>>(), vec![3, 2]);
    }

    #[test]
    fn into_iter_partial_then_drop() {
        let vec: FixedVec<String, 4> =
            fixed_vec!["x".to_string(), "y".to_string(), "z".to_string()];
        let mut iter = vec.into_iter();
        assert_eq!(iter.next().as_deref(), Some("x"));
        drop(iter);
    }

    #[test]
    fn drain_as_slice_tracks_progress() {
        let mut vec: FixedVec<i32, 8> = fixed_vec![0, 1, 2, 3];
        let mut drain = vec.drain(1..);
        assert_eq!(drain.len(), 3);
        assert_eq!(drain.next(), Some(1));
        assert_eq!(drain.as_slice(), &[2, 3]);
    }

    #[test]
    fn drain_forgotten_leaves_prefix() {
        let mut vec: FixedVec<i32, 8> = fixed_vec![0, 1, 2, 3];
        core::mem::forget(vec.drain(1..3));
        assert_eq!(vec, [0]);
    }

    #[test]
    fn drain_empty_range_is_noop() {
        let mut vec: FixedVec<i32, 8> = fixed_vec![0, 1];
        assert_eq!(vec.drain(1..1).count(), 0);
        assert_eq!(vec, [0, 1]);
    }
}
