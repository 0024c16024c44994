use num_bigint::BigUint;
use pretty_assertions::assert_eq;

use crate::plc::Plc;

#[test]
fn dense_round_trip_period_count() {
    for n in [0u128, 1, 999, 1000, 999_999, 1_000_000, 123_456_789] {
        let plc = Plc::from_u128(n);
        let expected = if n == 0 {
            1
        } else {
            let mut p = 0u32;
            let mut m = n;
            while m > 0 {
                p += 1;
                m /= 1000;
            }
            p
        };
        assert_eq!(plc.period_count(), BigUint::from(expected));
    }
}

#[test]
fn notation_round_trips() {
    for n in [0u128, 4, 373, 1000, 373_373, 1_103_323] {
        let plc = Plc::from_u128(n);
        let again = Plc::from_notation(&plc.to_notation()).unwrap();
        assert_eq!(plc, again);
    }

    let compressed = Plc::from_pairs(vec![(373, BigUint::from(8u32))]).unwrap();
    let again = Plc::from_notation(&compressed.to_notation()).unwrap();
    assert_eq!(compressed, again);
    assert_eq!(compressed.to_notation(), "[373]{8}");
}

#[test]
fn ordering_compares_period_count_first() {
    let short = Plc::from_u128(999);
    let long = Plc::from_u128(1000);
    assert!(short < long);
}

#[test]
fn ordering_expands_misaligned_runs() {
    let a = Plc::from_pairs(vec![(5, BigUint::from(2u32)), (1, BigUint::from(1u32))]).unwrap();
    let b = Plc::from_pairs(vec![(5, BigUint::from(1u32)), (2, BigUint::from(2u32))]).unwrap();
    assert!(a < b);
}

#[test]
fn adjacent_equal_runs_are_rejected() {
    let result = Plc::from_pairs(vec![(5, BigUint::from(1u32)), (5, BigUint::from(1u32))]);
    assert!(result.is_err());
}

#[test]
fn leading_zero_run_only_valid_alone() {
    assert!(Plc::from_pairs(vec![(0, BigUint::from(1u32))]).is_ok());
    assert!(Plc::from_pairs(vec![(0, BigUint::from(1u32)), (5, BigUint::from(1u32))]).is_err());
}

#[test]
fn from_pairs_merging_drops_zero_repeat_and_coalesces() {
    let plc = Plc::from_pairs_merging(vec![
        (1, BigUint::from(0u32)),
        (5, BigUint::from(2u32)),
        (5, BigUint::from(3u32)),
    ])
    .unwrap();
    assert_eq!(plc.runs().len(), 1);
    assert_eq!(plc.runs()[0].value, 5);
    assert_eq!(plc.runs()[0].repeat, BigUint::from(5u32));
}

#[test]
fn run_position_bounds_cover_every_period_once() {
    let plc = Plc::from_pairs(vec![
        (1, BigUint::from(1u32)),
        (103, BigUint::from(1u32)),
        (373, BigUint::from(8u32)),
    ])
    .unwrap();
    let bounds = plc.run_position_bounds();
    assert_eq!(bounds.len(), 3);
    // Most significant run first, matching `Plc::runs()` order; zillion
    // index 0 is the least significant period.
    assert_eq!(bounds[0], (BigUint::from(9u32), BigUint::from(9u32)));
    assert_eq!(bounds[1], (BigUint::from(8u32), BigUint::from(8u32)));
    assert_eq!(bounds[2], (BigUint::from(0u32), BigUint::from(7u32)));
}
