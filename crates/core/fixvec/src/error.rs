//! Error type shared by every fallible [`FixedVec`](crate::FixedVec) operation.

use core::fmt;

/// Errors that can occur when operating on a [`FixedVec`](crate::FixedVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedVecError {
    /// The requested index is not within the live range `[0, len)` (or
    /// `[0, len]` for insertion positions).
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// The number of live elements at the time of the call.
        len: usize,
    },
    /// The operation would exceed the fixed capacity of the vector.
    CapacityExceeded {
        /// The compile-time capacity of the vector.
        capacity: usize,
    },
    /// A range passed to a range removal does not describe live elements.
    InvalidRange {
        /// Inclusive start of the requested range.
        start: usize,
        /// Exclusive end of the requested range.
        end: usize,
        /// The number of live elements at the time of the call.
        len: usize,
    },
}

impl FixedVecError {
    /// Returns true if this is a [`FixedVecError::CapacityExceeded`] error.
    #[must_use]
    pub const fn is_capacity_exceeded(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }

    /// Returns true if this is a [`FixedVecError::OutOfRange`] error.
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

impl fmt::Display for FixedVecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::CapacityExceeded { capacity } => {
                write!(f, "capacity of {capacity} exceeded")
            }
            Self::InvalidRange { start, end, len } => {
                write!(f, "range {start}..{end} is invalid for length {len}")
            }
        }
    }
}

impl core::error::Error for FixedVecError {}

#[cfg(all(test, feature = "std"))]
mod tests {
    extern crate std;
    use std::string::ToString;

    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            FixedVecError::OutOfRange { index: 4, len: 2 }.to_string(),
            "index 4 out of range for length 2"
        );
        assert_eq!(
            FixedVecError::CapacityExceeded { capacity: 3 }.to_string(),
            "capacity of 3 exceeded"
        );
        assert_eq!(
            FixedVecError::InvalidRange { start: 3, end: 5, len: 4 }.to_string(),
            "range 3..5 is invalid for length 4"
        );
    }

    #[test]
    fn kind_predicates() {
        assert!(FixedVecError::CapacityExceeded { capacity: 1 }.is_capacity_exceeded());
        assert!(!FixedVecError::CapacityExceeded { capacity: 1 }.is_out_of_range());
        assert!(FixedVecError::OutOfRange { index: 0, len: 0 }.is_out_of_range());
    }
}
