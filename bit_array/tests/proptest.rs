//! Property-based tests for BitArray.

use std::collections::BTreeSet;

use bit_array::{AllOnesCache, BitArray, BitArrayError};
use proptest::prelude::*;

//
// -----------------------------------------------------------------------------
// Helper Functions
// -----------------------------------------------------------------------------

/// A size together with positions inside it.
fn sized_positions() -> impl Strategy<Value = (usize, Vec<usize>)> {
    (1usize..300).prop_flat_map(|len| (Just(len), prop::collection::vec(0..len, 0..64)))
}

/// A size together with two independent position sets inside it.
fn sized_pair() -> impl Strategy<Value = (usize, Vec<usize>, Vec<usize>)> {
    (1usize..300).prop_flat_map(|len| {
        (
            Just(len),
            prop::collection::vec(0..len, 0..64),
            prop::collection::vec(0..len, 0..64),
        )
    })
}

fn build(len: usize, positions: &[usize]) -> BitArray {
    let mut b = BitArray::new(len).unwrap();
    for &pos in positions {
        b.set(pos).unwrap();
    }
    b
}

fn model(positions: &[usize]) -> BTreeSet<usize> {
    positions.iter().copied().collect()
}

//
// -----------------------------------------------------------------------------
// Indexed Access
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_set_only_touches_its_position(len in 1usize..300, raw_pos in any::<usize>()) {
        let pos = raw_pos % len;
        let mut b = BitArray::new(len).unwrap();

        for p in 0..len {
            prop_assert_eq!(b.get(p).unwrap(), 0);
        }

        b.set(pos).unwrap();
        for p in 0..len {
            prop_assert_eq!(b.get(p).unwrap(), u64::from(p == pos));
        }
    }
}

proptest! {
    #[test]
    fn prop_out_of_range_index_fails(len in 0usize..300, extra in 0usize..100) {
        let mut b = BitArray::new(len).unwrap();
        let index = len + extra;
        let expected = BitArrayError::IndexOutOfRange { index, len };

        prop_assert_eq!(b.set(index).unwrap_err(), expected.clone());
        prop_assert_eq!(b.get(index).unwrap_err(), expected);
    }
}

proptest! {
    #[test]
    fn prop_count_and_ones_match_model((len, positions) in sized_positions()) {
        let b = build(len, &positions);
        let expected = model(&positions);

        prop_assert_eq!(b.count(), expected.len());
        prop_assert_eq!(b.ones().collect::<Vec<_>>(), expected.into_iter().collect::<Vec<_>>());
    }
}

//
// -----------------------------------------------------------------------------
// All-Ones Cache
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_all_counts_every_position(len in 0usize..1100) {
        prop_assert_eq!(BitArray::new(len).unwrap().all().count(), len);
    }
}

proptest! {
    #[test]
    fn prop_repeated_construction_is_independent((len, positions) in sized_positions()) {
        let cache = AllOnesCache::new();
        let mut first = BitArray::with_cache(len, &cache).unwrap();
        let second = BitArray::with_cache(len, &cache).unwrap();

        let mut first_all = first.all();
        first_all.none();
        for &pos in &positions {
            first.set(pos).unwrap();
        }
        first.inverse();

        prop_assert_eq!(second.all().count(), len);
        prop_assert_eq!(cache.clone_of(len).unwrap().count(), len);
        prop_assert_eq!(cache.len(), 1);
    }
}

//
// -----------------------------------------------------------------------------
// Boolean Algebra
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_double_inverse_is_identity((len, positions) in sized_positions()) {
        let original = build(len, &positions);
        let mut b = original.clone();
        b.inverse();
        prop_assert_eq!(b.count(), len - original.count());
        b.inverse();
        prop_assert_eq!(b, original);
    }
}

proptest! {
    #[test]
    fn prop_de_morgan((len, xs, ys) in sized_pair()) {
        let a = build(len, &xs);
        let b = build(len, &ys);

        let mut lhs = a.clone();
        lhs.or(&b).unwrap().inverse();

        let mut rhs = a.clone();
        let mut b_inv = b.clone();
        b_inv.inverse();
        rhs.inverse().and(&b_inv).unwrap();

        prop_assert_eq!(lhs, rhs);
    }
}

proptest! {
    #[test]
    fn prop_minus_is_and_not((len, xs, ys) in sized_pair()) {
        let a = build(len, &xs);
        let b = build(len, &ys);

        let mut lhs = a.clone();
        lhs.minus(&b).unwrap();

        let mut b_inv = b.clone();
        b_inv.inverse();
        let mut rhs = a.clone();
        rhs.and(&b_inv).unwrap();

        prop_assert_eq!(&lhs, &rhs);

        let expected: Vec<usize> = model(&xs).difference(&model(&ys)).copied().collect();
        prop_assert_eq!(lhs.ones().collect::<Vec<_>>(), expected);
    }
}

proptest! {
    #[test]
    fn prop_xor_matches_symmetric_difference((len, xs, ys) in sized_pair()) {
        let mut a = build(len, &xs);
        a.xor(&build(len, &ys)).unwrap();

        let expected: Vec<usize> = model(&xs).symmetric_difference(&model(&ys)).copied().collect();
        prop_assert_eq!(a.ones().collect::<Vec<_>>(), expected);
    }
}

proptest! {
    #[test]
    fn prop_size_mismatch_is_rejected(len in 1usize..300, delta in 1usize..64) {
        let mut a = BitArray::new(len).unwrap();
        let b = BitArray::new(len + delta).unwrap();

        prop_assert!(!a.equal(&b));
        prop_assert!(matches!(
            a.or(&b),
            Err(BitArrayError::SizeMismatch { .. })
        ), "expected SizeMismatch error");
    }
}

//
// -----------------------------------------------------------------------------
// Shifts
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_shift_left_then_right_restores((len, positions) in sized_positions(), times in 0usize..=64) {
        let original = build(len, &positions);
        let mut b = original.clone();
        b.shift_left(times).unwrap().shift_right(times).unwrap();
        prop_assert_eq!(b, original);
    }
}

proptest! {
    #[test]
    fn prop_shift_left_matches_model((len, positions) in sized_positions(), times in 0usize..=64) {
        let mut b = build(len, &positions);
        b.shift_left(times).unwrap();

        let expected: Vec<usize> = model(&positions)
            .into_iter()
            .map(|p| p + times)
            .filter(|&p| p < len)
            .collect();
        prop_assert_eq!(b.ones().collect::<Vec<_>>(), expected);
    }
}

proptest! {
    #[test]
    fn prop_shift_right_matches_model((len, positions) in sized_positions(), times in 0usize..=64) {
        let mut b = build(len, &positions);
        b.shift_right(times).unwrap();

        let expected: Vec<usize> = model(&positions)
            .into_iter()
            .filter_map(|p| p.checked_sub(times))
            .collect();
        prop_assert_eq!(b.ones().collect::<Vec<_>>(), expected);
    }
}

proptest! {
    #[test]
    fn prop_oversized_shift_fails((len, positions) in sized_positions(), times in 65usize..1000) {
        let original = build(len, &positions);
        let mut b = original.clone();

        prop_assert_eq!(b.shift_left(times).unwrap_err(), BitArrayError::ShiftTooLarge(times));
        prop_assert_eq!(b.shift_right(times).unwrap_err(), BitArrayError::ShiftTooLarge(times));
        prop_assert_eq!(b, original);
    }
}

//
// -----------------------------------------------------------------------------
// Rendering
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_dump_has_one_line_per_logical_word((len, positions) in sized_positions()) {
        let mut b = build(len, &positions);
        b.inverse();
        let dump = b.to_string();

        prop_assert_eq!(dump.lines().count(), len.div_ceil(64));
        prop_assert!(dump.lines().all(|line| line.len() == 64));
        prop_assert_eq!(dump.matches('1').count(), b.count());
    }
}

#[test]
fn known_shift_restores_board_positions() {
    let positions = [43, 61, 63, 64, 65, 80];
    let original = build(81, &positions);
    for times in 0..=64 {
        let mut b = original.clone();
        b.shift_left(times).unwrap().shift_right(times).unwrap();
        assert_eq!(b, original, "shift by {times}");
        assert_eq!(b.ones().collect::<Vec<_>>(), positions);
    }
}
