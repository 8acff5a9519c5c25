//! Fixed-capacity vector implementation backed by inline storage.
//!
//! This module provides [`FixedVec`], a vector-like sequence with a compile-time
//! fixed capacity. Unlike `Vec` from the standard library, `FixedVec` stores its
//! elements inline in an array of uninitialized slots, so it never allocates.
//!
//! # Storage
//!
//! A `FixedVec<T, N>` is an array of `N` [`MaybeUninit<T>`] slots plus a live
//! count `len`. Slots `[0, len)` always hold live values in logical order and
//! slots `[len, N)` never do. Every write into a vacant slot is paired with an
//! increment of `len`; every drop or move-out is paired with a decrement. User
//! code that panics midway (a `Clone` impl, a constructor closure, an
//! iterator, a `Drop` impl) can at worst leak values, never double-drop them.
//!
//! # Capacity Management
//!
//! The capacity is a const generic parameter and cannot change at runtime.
//! Every operation that adds elements comes in two forms: a `try_*` form that
//! returns [`FixedVecError::CapacityExceeded`], and a plain form that panics.
//!
//! # Invalidation
//!
//! Every operation that changes the length or shifts elements takes
//! `&mut self`, so outstanding iterators and references are rejected by the
//! borrow checker. Indices strictly before an insertion or removal point keep
//! denoting the same element; when removing while walking indices, walk them
//! in reverse.
//!
//! # Examples
//!
//! ```
//! use fixvec::FixedVec;
//!
//! let mut vec = FixedVec::<i32, 10>::new();
//!
//! vec.push(5);
//! vec.try_insert_slice(1, &[2, 3, 5, 4, 4, 2, 5]).unwrap();
//!
//! assert_eq!(vec.len(), 8);
//! assert_eq!(vec, [5, 2, 3, 5, 4, 4, 2, 5]);
//!
//! // Reverse iteration
//! let last_two: Vec<i32> = vec.iter().rev().take(2).copied().collect();
//! assert_eq!(last_two, [5, 2]);
//! ```

use core::borrow::{Borrow, BorrowMut};
use core::hash::{Hash, Hasher};
use core::mem::{self, ManuallyDrop, MaybeUninit};
use core::ops::{Bound, Deref, DerefMut, Index, IndexMut, Range, RangeBounds};
use core::slice::SliceIndex;
use core::{fmt, iter, ptr, slice};

use crate::error::FixedVecError;
use crate::iter::{Drain, IntoIter};
use crate::{fv_debug, fv_trace, fv_warn};

/// A fixed-capacity vector with inline storage.
///
/// `FixedVec` provides a vector-like interface with a compile-time fixed
/// capacity `N`. Elements are stored inline, making it suitable for `no_std`
/// environments and hot paths where heap allocation is not available or not
/// desirable.
///
/// # Type Parameters
///
/// - `T`: The type of elements stored in the vector
/// - `N`: The maximum number of elements (capacity)
///
/// # Examples
///
/// ```
/// use fixvec::FixedVec;
///
/// let mut vec = FixedVec::<String, 4>::new();
/// vec.push(String::from("hello"));
/// vec.push(String::from("world"));
///
/// assert_eq!(vec.len(), 2);
/// assert_eq!(vec[1], "world");
/// ```
pub struct FixedVec<T, const N: usize> {
    data: [MaybeUninit<T>; N],
    len: usize,
}

impl<T, const N: usize> Default for FixedVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Construction and slot primitives
// ---------------------------------------------------------------------------

impl<T, const N: usize> FixedVec<T, N> {
    /// The fixed capacity of this vector type.
    pub const CAPACITY: usize = N;

    /// Creates a new `FixedVec` with no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixvec::FixedVec;
    ///
    /// let vec = FixedVec::<u8, 4>::new();
    /// assert_eq!(vec.len(), 0);
    /// assert!(vec.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: [const { MaybeUninit::uninit() }; N],
            len: 0,
        }
    }

    /// Creates a `FixedVec` holding the given values, in order.
    ///
    /// The number of values is checked against the capacity at compile time:
    /// passing more than `N` values is a build error, not a runtime failure.
    ///
    /// ```
    /// use fixvec::FixedVec;
    ///
    /// let vec = FixedVec::<u8, 4>::from_array([1, 2, 3]);
    /// assert_eq!(vec, [1, 2, 3]);
    /// assert_eq!(vec.remaining_capacity(), 1);
    /// ```
    ///
    /// ```compile_fail
    /// use fixvec::FixedVec;
    ///
    /// let vec = FixedVec::<u8, 2>::from_array([1, 2, 3]);
    /// ```
    #[must_use]
    pub fn from_array<const M: usize>(values: [T; M]) -> Self {
        const { assert!(M <= N, "FixedVec: too many initial elements") };
        let mut vec = Self::new();
        for value in values {
            // SAFETY: At most `M <= N` values are written.
            unsafe { vec.push_unchecked(value) };
        }
        vec
    }

    /// Moves every element out into a new `FixedVec`, leaving `self` empty.
    ///
    /// ```
    /// use fixvec::fixed_vec;
    /// use fixvec::FixedVec;
    ///
    /// let mut source: FixedVec<u8, 4> = fixed_vec![1, 2];
    /// let moved = source.take();
    /// assert_eq!(moved, [1, 2]);
    /// assert!(source.is_empty());
    /// ```
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Replaces the contents of `self` with the elements of `other`, leaving
    /// `other` empty.
    ///
    /// The current elements of `self` are dropped first.
    pub fn move_from(&mut self, other: &mut Self) {
        self.clear();
        mem::swap(self, other);
    }

    /// Writes `value` into the first vacant slot and counts it as live.
    ///
    /// # Safety
    ///
    /// The caller must guarantee `self.len < N`.
    unsafe fn push_unchecked(&mut self, value: T) -> &mut T {
        debug_assert!(self.len < N);
        // SAFETY: `self.len < N` per the caller contract, so the slot exists
        // and is vacant.
        let slot = unsafe { self.data.get_unchecked_mut(self.len) };
        let elem = slot.write(value);
        self.len += 1;
        elem
    }

    /// Sets the live count.
    ///
    /// # Safety
    ///
    /// `len <= N` and slots `[0, len)` must hold initialized values that
    /// nothing else will drop.
    pub(crate) unsafe fn set_len(&mut self, len: usize) {
        debug_assert!(len <= N);
        self.len = len;
    }

    /// Splits the vector into its raw storage and live count without
    /// dropping anything.
    pub(crate) fn into_raw_parts(self) -> ([MaybeUninit<T>; N], usize) {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never used or dropped again, so the storage is
        // moved out exactly once.
        let data = unsafe { ptr::read(&this.data) };
        (data, this.len)
    }

    #[cold]
    fn capacity_error(&self) -> FixedVecError {
        fv_debug!("FixedVec: capacity of {} exceeded (len {})", N, self.len);
        FixedVecError::CapacityExceeded { capacity: N }
    }

    #[cold]
    fn out_of_range(&self, index: usize) -> FixedVecError {
        fv_debug!("FixedVec: index {} out of range (len {})", index, self.len);
        FixedVecError::OutOfRange {
            index,
            len: self.len,
        }
    }

    /// Resolves `range` against the live range.
    fn live_range<R: RangeBounds<usize>>(&self, range: &R) -> Result<Range<usize>, FixedVecError> {
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => self.len,
        };
        if start > end || end > self.len {
            fv_debug!("FixedVec: invalid range {}..{} (len {})", start, end, self.len);
            return Err(FixedVecError::InvalidRange {
                start,
                end,
                len: self.len,
            });
        }
        Ok(start..end)
    }
}

// ---------------------------------------------------------------------------
// Capacity and element access
// ---------------------------------------------------------------------------

impl<T, const N: usize> FixedVec<T, N> {
    /// Returns the number of elements in the `FixedVec`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixvec::FixedVec;
    ///
    /// let mut vec = FixedVec::<u8, 4>::new();
    /// assert_eq!(vec.len(), 0);
    /// vec.push(1);
    /// assert_eq!(vec.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the `FixedVec` is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the fixed capacity `N`.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns true if the `FixedVec` is at capacity.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns how many more elements fit before the vector is full.
    #[must_use]
    pub const fn remaining_capacity(&self) -> usize {
        N - self.len
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`FixedVecError::OutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixvec::{fixed_vec, FixedVec, FixedVecError};
    ///
    /// let vec: FixedVec<u8, 4> = fixed_vec![10, 20];
    /// assert_eq!(vec.try_get(1), Ok(&20));
    /// assert_eq!(vec.try_get(2), Err(FixedVecError::OutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn try_get(&self, index: usize) -> Result<&T, FixedVecError> {
        if index < self.len {
            // SAFETY: Bounds checked above.
            Ok(unsafe { self.get_unchecked(index) })
        } else {
            Err(self.out_of_range(index))
        }
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`FixedVecError::OutOfRange`] if `index >= len`.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, FixedVecError> {
        if index < self.len {
            // SAFETY: Bounds checked above.
            return Ok(unsafe { self.get_unchecked_mut(index) });
        }
        Err(self.out_of_range(index))
    }

    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.len()`.
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        // SAFETY: `index < len` per the caller contract, and elements
        // 0..len are initialized.
        unsafe { self.data.get_unchecked(index).assume_init_ref() }
    }

    /// Returns a mutable reference to the element at `index` without bounds
    /// checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.len()`.
    #[must_use]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        // SAFETY: `index < len` per the caller contract, and elements
        // 0..len are initialized.
        unsafe { self.data.get_unchecked_mut(index).assume_init_mut() }
    }

    /// Returns the first element, or `None` if empty.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the first element mutably, or `None` if empty.
    #[must_use]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element, or `None` if empty.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the last element mutably, or `None` if empty.
    #[must_use]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Returns a slice of all the elements in the `FixedVec`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixvec::FixedVec;
    ///
    /// let mut vec = FixedVec::<u8, 4>::new();
    /// vec.push(1);
    /// vec.push(2);
    ///
    /// assert_eq!(vec.as_slice(), &[1, 2]);
    /// ```
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: Elements 0..self.len are initialized by the push invariant,
        // and the pointer from `self.data` is valid for `self.len` elements.
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    /// Returns a mutable slice of all the elements in the `FixedVec`.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: Elements 0..self.len are initialized by the push invariant,
        // and the mutable pointer from `self.data` is valid for `self.len` elements.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    /// Returns a pointer to the first slot. Valid for reads of `len` elements.
    #[must_use]
    pub const fn as_ptr(&self) -> *const T {
        self.data.as_ptr().cast::<T>()
    }

    /// Returns a mutable pointer to the first slot. Valid for reads and
    /// writes of `len` elements.
    #[must_use]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr().cast::<T>()
    }

    /// Returns an iterator over the elements of the `FixedVec`.
    ///
    /// The iterator is double-ended; use `.rev()` for reverse order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a mutable iterator over the elements of the `FixedVec`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixvec::{fixed_vec, FixedVec};
    ///
    /// let mut vec: FixedVec<u8, 4> = fixed_vec![1, 2, 3];
    /// for i in vec.iter_mut() {
    ///     *i += 1;
    /// }
    /// assert_eq!(vec, [2, 3, 4]);
    /// ```
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Converts a full vector into an array, or hands it back if it is not
    /// full.
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged if `len < N`.
    pub fn into_array(self) -> Result<[T; N], Self> {
        if self.len < N {
            return Err(self);
        }
        let (data, _) = self.into_raw_parts();
        // SAFETY: All `N` slots are live, and `[MaybeUninit<T>; N]` has the
        // same layout as `[T; N]`.
        Ok(unsafe { ptr::read(data.as_ptr().cast::<[T; N]>()) })
    }
}

// ---------------------------------------------------------------------------
// Modification
// ---------------------------------------------------------------------------

impl<T, const N: usize> FixedVec<T, N> {
    /// Tries to push a value onto the end of the `FixedVec`.
    ///
    /// Returns a reference to the new element.
    ///
    /// # Errors
    ///
    /// Returns [`FixedVecError::CapacityExceeded`] if the `FixedVec` is full;
    /// `value` is dropped and the vector is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixvec::FixedVec;
    ///
    /// let mut vec = FixedVec::<u8, 1>::new();
    /// assert!(vec.try_push(1).is_ok());
    /// assert_eq!(vec.len(), 1);
    /// assert!(vec.try_push(2).is_err());
    /// ```
    pub fn try_push(&mut self, value: T) -> Result<&mut T, FixedVecError> {
        self.try_push_with(|| value)
    }

    /// Tries to construct a value with `f` directly at the end of the
    /// `FixedVec`. `f` is not called if the vector is full.
    ///
    /// # Errors
    ///
    /// Returns [`FixedVecError::CapacityExceeded`] if the `FixedVec` is full.
    pub fn try_push_with<F>(&mut self, f: F) -> Result<&mut T, FixedVecError>
    where
        F: FnOnce() -> T,
    {
        if self.len == N {
            return Err(self.capacity_error());
        }
        let value = f();
        // SAFETY: `len < N` checked above.
        Ok(unsafe { self.push_unchecked(value) })
    }

    /// Pushes a value onto the end of the `FixedVec`.
    ///
    /// # Panics
    ///
    /// Panics if the `FixedVec` is full.
    pub fn push(&mut self, value: T) -> &mut T {
        self.try_push(value).unwrap_or_else(|err| fail(err))
    }

    /// Constructs a value with `f` directly at the end of the `FixedVec`.
    ///
    /// # Panics
    ///
    /// Panics if the `FixedVec` is full.
    pub fn push_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.try_push_with(f).unwrap_or_else(|err| fail(err))
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: The element at `self.len` was initialized by a previous push
        // and is no longer counted as live.
        Some(unsafe { self.data[self.len].assume_init_read() })
    }

    /// Drops every element after the first `new_len`.
    ///
    /// Has no effect if `new_len >= len`.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let old_len = self.len;
        self.len = new_len;
        // SAFETY: Slots new_len..old_len were live and are no longer counted,
        // so a panicking destructor cannot cause a double drop.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.as_mut_ptr().add(new_len), old_len - new_len);
            ptr::drop_in_place(tail);
        }
    }

    /// Removes all elements.
    ///
    /// For element types without drop glue this only resets the length.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Tries to construct a value with `f` directly at `index`, shifting all
    /// elements at or after `index` one slot to the right.
    ///
    /// `index == len` appends. `f` is called after the checks and before any
    /// element is moved, so a panic in `f` leaves the vector untouched.
    ///
    /// # Errors
    ///
    /// Returns [`FixedVecError::CapacityExceeded`] if the `FixedVec` is full,
    /// or [`FixedVecError::OutOfRange`] if `index > len`.
    pub fn try_insert_with<F>(&mut self, index: usize, f: F) -> Result<&mut T, FixedVecError>
    where
        F: FnOnce() -> T,
    {
        if self.len == N {
            return Err(self.capacity_error());
        }
        if index > self.len {
            return Err(self.out_of_range(index));
        }
        let value = f();
        let len = self.len;
        // SAFETY: `index <= len < N`. Elements [index..len] are initialized
        // and are shifted one slot right into [index+1..len+1], which is
        // still within the array; `ptr::copy` handles the overlap. The slot
        // at `index` is then vacant and receives `value`.
        unsafe {
            let slot = self.as_mut_ptr().add(index);
            ptr::copy(slot, slot.add(1), len - index);
            slot.write(value);
            self.len = len + 1;
            Ok(&mut *slot)
        }
    }

    /// Tries to insert `value` at `index`, shifting later elements right.
    ///
    /// # Errors
    ///
    /// Returns [`FixedVecError::CapacityExceeded`] if the `FixedVec` is full,
    /// or [`FixedVecError::OutOfRange`] if `index > len`. `value` is dropped
    /// and the vector is left unchanged.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, FixedVecError> {
        self.try_insert_with(index, || value)
    }

    /// Inserts `value` at `index`, shifting all elements after it to the right.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` or if the `FixedVec` is full.
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        self.try_insert(index, value).unwrap_or_else(|err| fail(err))
    }

    /// Constructs a value with `f` directly at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` or if the `FixedVec` is full.
    pub fn insert_with<F>(&mut self, index: usize, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.try_insert_with(index, f).unwrap_or_else(|err| fail(err))
    }

    /// Inserts every item of `iter` at `index`, in order.
    ///
    /// Returns the index range now occupied by the inserted items.
    ///
    /// # Errors
    ///
    /// Returns [`FixedVecError::OutOfRange`] if `index > len`, before the
    /// iterator is touched. Returns [`FixedVecError::CapacityExceeded`] if
    /// the iterator yields more items than fit: the items inserted so far
    /// stay in place, in order, and the item that did not fit is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixvec::{fixed_vec, FixedVec};
    ///
    /// let mut vec: FixedVec<u8, 6> = fixed_vec![1, 5];
    /// let placed = vec.try_insert_iter(1, 2..5).unwrap();
    /// assert_eq!(placed, 1..4);
    /// assert_eq!(vec, [1, 2, 3, 4, 5]);
    /// ```
    pub fn try_insert_iter<I>(&mut self, index: usize, iter: I) -> Result<Range<usize>, FixedVecError>
    where
        I: IntoIterator<Item = T>,
    {
        // Moves the appended run in front of the old tail, also while
        // unwinding out of the source iterator.
        struct Rotate<'a, T, const N: usize> {
            vec: &'a mut FixedVec<T, N>,
            index: usize,
            old_len: usize,
        }

        impl<T, const N: usize> Drop for Rotate<'_, T, N> {
            fn drop(&mut self) {
                let added = self.vec.len - self.old_len;
                self.vec.as_mut_slice()[self.index..].rotate_right(added);
            }
        }

        if index > self.len {
            return Err(self.out_of_range(index));
        }

        let old_len = self.len;
        let mut guard = Rotate {
            vec: self,
            index,
            old_len,
        };
        let mut result = Ok(());
        for value in iter {
            if guard.vec.len == N {
                drop(value);
                result = Err(guard.vec.capacity_error());
                break;
            }
            // SAFETY: `len < N` checked above.
            unsafe { guard.vec.push_unchecked(value) };
        }
        let added = guard.vec.len - old_len;
        drop(guard);
        result.map(|()| index..index + added)
    }

    /// Inserts `count` clones of `value` at `index`.
    ///
    /// Returns the index range now occupied by the inserted copies.
    ///
    /// # Errors
    ///
    /// Returns [`FixedVecError::OutOfRange`] if `index > len`, inserting
    /// nothing. Returns [`FixedVecError::CapacityExceeded`] if `count` copies
    /// do not fit: the copies that fit stay at `index..`, in order.
    pub fn try_insert_n(&mut self, index: usize, count: usize, value: T) -> Result<Range<usize>, FixedVecError>
    where
        T: Clone,
    {
        if index > self.len {
            return Err(self.out_of_range(index));
        }
        self.try_insert_iter(index, iter::repeat_n(value, count))
    }

    /// Inserts clones of every element of `values` at `index`, in order.
    ///
    /// Returns the index range now occupied by the inserted elements.
    ///
    /// # Errors
    ///
    /// Returns [`FixedVecError::OutOfRange`] if `index > len`, inserting
    /// nothing. Returns [`FixedVecError::CapacityExceeded`] if `values` does
    /// not fit: the leading elements that fit stay at `index..`, in order.
    pub fn try_insert_slice(&mut self, index: usize, values: &[T]) -> Result<Range<usize>, FixedVecError>
    where
        T: Clone,
    {
        if index > self.len {
            return Err(self.out_of_range(index));
        }
        self.try_insert_iter(index, values.iter().cloned())
    }

    /// Appends clones of every element of `values`.
    ///
    /// # Errors
    ///
    /// Returns [`FixedVecError::CapacityExceeded`] if `values` does not fit;
    /// the leading elements that fit are still appended.
    pub fn try_extend_from_slice(&mut self, values: &[T]) -> Result<(), FixedVecError>
    where
        T: Clone,
    {
        self.try_insert_slice(self.len, values).map(|_| ())
    }

    /// Appends clones of every element of `values`.
    ///
    /// # Panics
    ///
    /// Panics if `values` does not fit.
    pub fn extend_from_slice(&mut self, values: &[T])
    where
        T: Clone,
    {
        self.try_extend_from_slice(values).unwrap_or_else(|err| fail(err));
    }

    /// Removes and returns the element at `index`, shifting all elements
    /// after it to the left, or returns `None` without touching the vector if
    /// `index >= len`.
    pub fn try_remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            fv_trace!("FixedVec: remove at {} ignored (len {})", index, self.len);
            return None;
        }
        // SAFETY: The element at `index` is initialized. We read it out,
        // then shift elements [index+1..len] one position left.
        unsafe {
            let ptr = self.as_mut_ptr().add(index);
            let value = ptr.read();
            ptr::copy(ptr.add(1), ptr, self.len - index - 1);
            self.len -= 1;
            Some(value)
        }
    }

    /// Removes and returns the element at `index`, shifting all elements
    /// after it to the left. Preserves ordering.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        match self.try_remove(index) {
            Some(value) => value,
            None => panic!("index out of bounds"),
        }
    }

    /// Removes the element at `index` by swapping it with the last element.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn swap_remove(&mut self, index: usize) -> T {
        assert!(index < self.len, "index out of bounds");
        self.len -= 1;
        // Swap the target with the last element, then read the target.
        self.data.swap(index, self.len);
        // SAFETY: The element at `self.len` (formerly at `index`) was initialized.
        unsafe { self.data[self.len].assume_init_read() }
    }

    /// Removes the elements in `range` and returns them as an iterator.
    ///
    /// Elements the iterator does not yield are dropped when it is dropped;
    /// the tail is then shifted left to close the gap.
    ///
    /// # Errors
    ///
    /// Returns [`FixedVecError::InvalidRange`] if the range starts after it
    /// ends or ends past `len`.
    pub fn try_drain<R>(&mut self, range: R) -> Result<Drain<'_, T, N>, FixedVecError>
    where
        R: RangeBounds<usize>,
    {
        let Range { start, end } = self.live_range(&range)?;
        let len = self.len;
        // Elements from `start` on are owned by the drain until it is dropped.
        self.len = start;
        Ok(Drain::new(self, start..end, len - end))
    }

    /// Removes the elements in `range` and returns them as an iterator.
    ///
    /// # Panics
    ///
    /// Panics if the range starts after it ends or ends past `len`.
    pub fn drain<R>(&mut self, range: R) -> Drain<'_, T, N>
    where
        R: RangeBounds<usize>,
    {
        self.try_drain(range).unwrap_or_else(|err| fail(err))
    }

    /// Drops the elements in `range`, shifting the tail left to close the gap.
    ///
    /// # Errors
    ///
    /// Returns [`FixedVecError::InvalidRange`] if the range starts after it
    /// ends or ends past `len`; the vector is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixvec::{fixed_vec, FixedVec};
    ///
    /// let mut vec: FixedVec<u8, 8> = fixed_vec![0, 1, 2, 3, 4];
    /// vec.try_remove_range(1..3).unwrap();
    /// assert_eq!(vec, [0, 3, 4]);
    /// assert!(vec.try_remove_range(3..4).is_err());
    /// ```
    pub fn try_remove_range<R>(&mut self, range: R) -> Result<(), FixedVecError>
    where
        R: RangeBounds<usize>,
    {
        drop(self.try_drain(range)?);
        Ok(())
    }

    /// Retains only the elements for which `f` returns true, preserving
    /// their order.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T) -> bool,
    {
        struct Compact<'a, T, const N: usize> {
            vec: &'a mut FixedVec<T, N>,
            original_len: usize,
            processed: usize,
            kept: usize,
        }

        impl<T, const N: usize> Drop for Compact<'_, T, N> {
            fn drop(&mut self) {
                let rest = self.original_len - self.processed;
                // SAFETY: Slots [processed..original_len] are unvisited and
                // still live; [kept..processed] are vacant. Moving the former
                // down keeps the live run contiguous even if `f` or a
                // destructor panicked.
                unsafe {
                    let base = self.vec.as_mut_ptr();
                    ptr::copy(base.add(self.processed), base.add(self.kept), rest);
                }
                self.vec.len = self.kept + rest;
            }
        }

        let original_len = self.len;
        self.len = 0;
        let mut compact = Compact {
            vec: self,
            original_len,
            processed: 0,
            kept: 0,
        };

        while compact.processed < original_len {
            let base = compact.vec.as_mut_ptr();
            // SAFETY: `processed < original_len`, so the slot is live and
            // unvisited; `kept <= processed`.
            unsafe {
                let cur = base.add(compact.processed);
                if f(&mut *cur) {
                    if compact.kept != compact.processed {
                        ptr::copy_nonoverlapping(cur, base.add(compact.kept), 1);
                    }
                    compact.processed += 1;
                    compact.kept += 1;
                } else {
                    compact.processed += 1;
                    ptr::drop_in_place(cur);
                }
            }
        }
    }
}

impl<T, const N: usize> FixedVec<T, N> {
    /// Builds a `FixedVec` from an iterator.
    ///
    /// # Errors
    ///
    /// Returns [`FixedVecError::CapacityExceeded`] if the iterator yields
    /// more than `N` items.
    pub fn try_from_iter<I>(iter: I) -> Result<Self, FixedVecError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut vec = Self::new();
        for value in iter {
            vec.try_push(value)?;
        }
        Ok(vec)
    }
}

#[cold]
#[track_caller]
fn fail(err: FixedVecError) -> ! {
    fv_warn!("FixedVec: {}", err);
    match err {
        FixedVecError::CapacityExceeded { .. } => panic!("FixedVec: ran out of capacity"),
        FixedVecError::OutOfRange { .. } => panic!("index out of bounds"),
        FixedVecError::InvalidRange { start, end, len } => {
            panic!("range {start}..{end} out of bounds for length {len}")
        }
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<T, const N: usize> Drop for FixedVec<T, N> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone, const N: usize> Clone for FixedVec<T, N> {
    fn clone(&self) -> Self {
        let mut vec = Self::new();
        for value in self {
            // SAFETY: `vec.len < self.len <= N` at every write.
            unsafe { vec.push_unchecked(value.clone()) };
        }
        vec
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        for value in source {
            // SAFETY: `self.len < source.len <= N` at every write.
            unsafe { self.push_unchecked(value.clone()) };
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, const N: usize> Deref for FixedVec<T, N> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> DerefMut for FixedVec<T, N> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedVec<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> AsMut<[T]> for FixedVec<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> Borrow<[T]> for FixedVec<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> BorrowMut<[T]> for FixedVec<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I, const N: usize> Index<I> for FixedVec<T, N>
where
    I: SliceIndex<[T]>,
{
    type Output = I::Output;

    /// Returns the element or subslice at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I, const N: usize> IndexMut<I> for FixedVec<T, N>
where
    I: SliceIndex<[T]>,
{
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<FixedVec<U, M>> for FixedVec<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &FixedVec<U, M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<[U; M]> for FixedVec<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; M]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for FixedVec<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, const N: usize> PartialEq<&[U]> for FixedVec<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: Eq, const N: usize> Eq for FixedVec<T, N> {}

impl<T: PartialOrd, const N: usize> PartialOrd for FixedVec<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord, const N: usize> Ord for FixedVec<T, N> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash, const N: usize> Hash for FixedVec<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T, const N: usize> From<[T; N]> for FixedVec<T, N> {
    fn from(values: [T; N]) -> Self {
        Self::from_array(values)
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for FixedVec<T, N> {
    type Error = FixedVecError;

    fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        let mut vec = Self::new();
        vec.try_extend_from_slice(values)?;
        Ok(vec)
    }
}

impl<T, const N: usize> FromIterator<T> for FixedVec<T, N> {
    /// # Panics
    ///
    /// Panics if the iterator yields more than `N` items.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T, const N: usize> Extend<T> for FixedVec<T, N> {
    /// # Panics
    ///
    /// Panics if the vector runs out of capacity.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T: Copy + 'a, const N: usize> Extend<&'a T> for FixedVec<T, N> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedVec<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedVec<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, const N: usize> IntoIterator for FixedVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
