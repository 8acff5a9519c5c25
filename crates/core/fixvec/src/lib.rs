//! Fixed-capacity vector with inline storage.
//!
//! This crate provides [`FixedVec`], a drop-in replacement for `Vec` whose
//! capacity is a compile-time constant and whose elements live inline in the
//! value itself. It is useful in environments where heap allocation is
//! unavailable, restricted, or undesirable (kernels, embedded firmware,
//! interrupt handlers, latency-sensitive paths).
//!
//! # Overview
//!
//! - [`FixedVec`] - the container: access, iteration, insertion, removal
//! - [`FixedVecError`] - out-of-range, capacity-exceeded and invalid-range failures
//! - [`IntoIter`] / [`Drain`] - owning and range-draining iterators
//! - [`fixed_vec!`] - literal construction, with the element count checked at compile time
//! - [`log`] - an optional diagnostic sink for reported failures
//!
//! A `FixedVec`:
//! - Never allocates
//! - Has a fixed maximum capacity determined at compile time
//! - Works in `no_std` environments
//! - Dereferences to a slice, so every slice method is available
//!
//! # Examples
//!
//! ```
//! use fixvec::{fixed_vec, FixedVec, FixedVecError};
//!
//! let mut vec: FixedVec<i32, 4> = fixed_vec![1, 2];
//!
//! vec.push(3);
//! vec.insert(0, 0);
//! assert_eq!(vec, [0, 1, 2, 3]);
//!
//! // Full: the checked forms report the failure instead of panicking.
//! assert_eq!(vec.try_push(4), Err(FixedVecError::CapacityExceeded { capacity: 4 }));
//! assert_eq!(vec.try_get(7), Err(FixedVecError::OutOfRange { index: 7, len: 4 }));
//!
//! for value in vec.iter().rev() {
//!     println!("{value}");
//! }
//! ```
//!
//! # Features
//!
//! - `std` (default): enables the unit tests that need `std`
//! - `serde`: `Serialize` / `Deserialize` for [`FixedVec`] as a plain sequence
//!
//! # Performance Characteristics
//!
//! - Push/pop: O(1)
//! - Index access: O(1)
//! - Insert/remove at `i`: O(len - i)
//! - Iteration: O(n)

#![no_std]

pub mod error;
pub mod iter;
pub mod log;
pub mod vec;

#[cfg(feature = "serde")]
mod serde;

pub use error::FixedVecError;
pub use iter::{Drain, IntoIter};
pub use vec::FixedVec;

/// Creates a [`FixedVec`] holding the given values, in order.
///
/// The capacity comes from the expected type. Passing more values than the
/// capacity fails to compile.
///
/// ```
/// use fixvec::{fixed_vec, FixedVec};
///
/// let vec: FixedVec<u8, 8> = fixed_vec![1, 2, 3];
/// assert_eq!(vec.len(), 3);
///
/// let empty: FixedVec<u8, 8> = fixed_vec![];
/// assert!(empty.is_empty());
/// ```
///
/// ```compile_fail
/// use fixvec::{fixed_vec, FixedVec};
///
/// let vec: FixedVec<u8, 2> = fixed_vec![1, 2, 3];
/// ```
#[macro_export]
macro_rules! fixed_vec {
    () => {
        $crate::FixedVec::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::FixedVec::from_array([$($value),+])
    };
}
