//! Property tests comparing `FixedVec` against `Vec` as a model.

#![allow(missing_docs)]

use fixvec::{fixed_vec, FixedVec, FixedVecError};
use proptest::prelude::*;

const CAP: usize = 16;

type Seq = FixedVec<i32, CAP>;

fn seq_from(values: &[i32]) -> Seq {
    Seq::try_from(values).expect("generated within capacity")
}

fn values(max: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..=max)
}

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
    Insert(usize, i32),
    Remove(usize),
    RemoveRange(usize, usize),
    Truncate(usize),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Push),
        2 => Just(Op::Pop),
        3 => (0..CAP + 2, any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => (0..CAP + 2).prop_map(Op::Remove),
        1 => (0..CAP + 2, 0..CAP + 2).prop_map(|(a, b)| Op::RemoveRange(a, b)),
        1 => (0..CAP + 2).prop_map(Op::Truncate),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn operations_match_vec_model(ops in prop::collection::vec(op(), 0..64)) {
        let mut seq = Seq::new();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::Push(v) => {
                    let result = seq.try_push(v).map(|r| *r);
                    if model.len() < CAP {
                        model.push(v);
                        prop_assert_eq!(result, Ok(v));
                    } else {
                        prop_assert_eq!(result, Err(FixedVecError::CapacityExceeded { capacity: CAP }));
                    }
                }
                Op::Pop => prop_assert_eq!(seq.pop(), model.pop()),
                Op::Insert(i, v) => {
                    let result = seq.try_insert(i, v).map(|r| *r);
                    if model.len() == CAP {
                        prop_assert!(result.unwrap_err().is_capacity_exceeded());
                    } else if i > model.len() {
                        prop_assert!(result.unwrap_err().is_out_of_range());
                    } else {
                        model.insert(i, v);
                        prop_assert_eq!(result, Ok(v));
                    }
                }
                Op::Remove(i) => {
                    let expected = (i < model.len()).then(|| model.remove(i));
                    prop_assert_eq!(seq.try_remove(i), expected);
                }
                Op::RemoveRange(a, b) => {
                    let result = seq.try_remove_range(a..b);
                    if a <= b && b <= model.len() {
                        model.drain(a..b).for_each(drop);
                        prop_assert_eq!(result, Ok(()));
                    } else {
                        prop_assert_eq!(
                            result,
                            Err(FixedVecError::InvalidRange { start: a, end: b, len: model.len() })
                        );
                    }
                }
                Op::Truncate(n) => {
                    seq.truncate(n);
                    model.truncate(n);
                }
                Op::Clear => {
                    seq.clear();
                    model.clear();
                }
            }

            prop_assert!(seq.len() <= CAP);
            prop_assert_eq!(seq.as_slice(), model.as_slice());
        }
    }

    #[test]
    fn push_then_pop_restores(start in values(CAP - 1), v in any::<i32>()) {
        let mut seq = seq_from(&start);
        seq.push(v);
        prop_assert_eq!(seq.pop(), Some(v));
        prop_assert_eq!(seq.as_slice(), start.as_slice());
    }

    #[test]
    fn insert_slice_matches_single_inserts(
        start in values(CAP),
        block in values(CAP),
        at in any::<prop::sample::Index>(),
    ) {
        let mut seq = seq_from(&start);
        let p = at.index(start.len() + 1);
        let result = seq.try_insert_slice(p, &block);

        // Same outcome as inserting the block one element at a time.
        let placed = block.len().min(CAP - start.len());
        if placed == block.len() {
            prop_assert_eq!(result, Ok(p..p + placed));
        } else {
            prop_assert!(result.unwrap_err().is_capacity_exceeded());
        }
        prop_assert_eq!(seq.len(), start.len() + placed);
        prop_assert_eq!(&seq[..p], &start[..p]);
        prop_assert_eq!(&seq[p..p + placed], &block[..placed]);
        prop_assert_eq!(&seq[p + placed..], &start[p..]);
    }

    #[test]
    fn remove_shifts_suffix(start in values(CAP).prop_filter("non-empty", |v| !v.is_empty()),
                            at in any::<prop::sample::Index>()) {
        let mut seq = seq_from(&start);
        let p = at.index(start.len());
        prop_assert_eq!(seq.remove(p), start[p]);
        prop_assert_eq!(seq.len(), start.len() - 1);
        prop_assert_eq!(&seq[..p], &start[..p]);
        prop_assert_eq!(&seq[p..], &start[p + 1..]);
    }

    #[test]
    fn clone_is_equal_and_independent(start in values(CAP - 1), v in any::<i32>()) {
        let original = seq_from(&start);
        let mut copy = original.clone();
        prop_assert_eq!(&copy, &original);
        copy.push(v);
        prop_assert_eq!(original.as_slice(), start.as_slice());
    }

    #[test]
    fn take_moves_everything(start in values(CAP)) {
        let mut source = seq_from(&start);
        let moved = source.take();
        prop_assert_eq!(moved.as_slice(), start.as_slice());
        prop_assert!(source.is_empty());
    }

    #[test]
    fn checked_access_past_len_is_rejected(start in values(CAP), extra in 0usize..8) {
        let seq = seq_from(&start);
        let index = start.len() + extra;
        prop_assert_eq!(
            seq.try_get(index),
            Err(FixedVecError::OutOfRange { index, len: start.len() })
        );
        prop_assert_eq!(seq.as_slice(), start.as_slice());
    }

    #[test]
    fn equality_ignores_capacity(start in values(8)) {
        let small = FixedVec::<i32, 8>::try_from(start.as_slice()).unwrap();
        let large = FixedVec::<i32, 32>::try_from(start.as_slice()).unwrap();
        prop_assert_eq!(small, large);
    }
}

#[test]
fn demo_scenario() {
    let mut seq = FixedVec::<i32, 10>::new();
    seq.push(5);
    assert_eq!(seq, [5]);
    seq.try_insert_slice(1, &[2, 3, 5, 4, 4, 2, 5]).unwrap();
    assert_eq!(seq.len(), 8);
    let walked: Vec<i32> = seq.iter().copied().collect();
    assert_eq!(walked, [5, 2, 3, 5, 4, 4, 2, 5]);
}

#[test]
fn fourth_push_into_three_slots_fails() {
    let mut seq: FixedVec<i32, 3> = fixed_vec![1, 2, 3];
    assert_eq!(seq.len(), 3);
    assert_eq!(seq.try_push(4), Err(FixedVecError::CapacityExceeded { capacity: 3 }));
    assert_eq!(seq.len(), 3);
}

#[test]
fn reverse_walk_removal() {
    let mut seq: FixedVec<i32, 8> = fixed_vec![1, 2, 3, 4, 5, 6];
    for i in (0..seq.len()).rev() {
        if seq[i] % 3 != 0 {
            seq.remove(i);
        }
    }
    assert_eq!(seq, [3, 6]);
}
