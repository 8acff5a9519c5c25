//! `serde` support: a [`FixedVec`] (de)serializes as a plain sequence.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::vec::FixedVec;

impl<T: Serialize, const N: usize> Serialize for FixedVec<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for FixedVec<T, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(FixedVecVisitor(PhantomData))
    }
}

struct FixedVecVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T: Deserialize<'de>, const N: usize> Visitor<'de> for FixedVecVisitor<T, N> {
    type Value = FixedVec<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of at most {N} elements")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut vec = FixedVec::new();
        while let Some(value) = seq.next_element()? {
            if vec.try_push(value).is_err() {
                return Err(de::Error::invalid_length(N + 1, &self));
            }
        }
        Ok(vec)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    extern crate std;
    use std::string::ToString;

    use crate::{fixed_vec, FixedVec};

    #[test]
    fn serializes_live_elements_only() {
        let vec: FixedVec<u32, 8> = fixed_vec![1, 2, 3];
        assert_eq!(serde_json::to_string(&vec).unwrap(), "[1,2,3]");
    }

    #[test]
    fn deserializes_within_capacity() {
        let vec: FixedVec<u32, 4> = serde_json::from_str("[4,5]").unwrap();
        assert_eq!(vec, [4, 5]);
    }

    #[test]
    fn rejects_too_many_elements() {
        let err = serde_json::from_str::<FixedVec<u32, 2>>("[1,2,3]").unwrap_err();
        assert!(err.to_string().contains("at most 2 elements"));
    }
}
