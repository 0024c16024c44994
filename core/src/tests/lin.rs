use num_bigint::BigUint;

use crate::length::compute_length;
use crate::lin::find_lin;
use crate::plc::Plc;

fn lin_value(n: u16) -> Plc {
    Plc::from_pairs(vec![(n, BigUint::from(1u32))]).unwrap()
}

#[test]
fn small_case_table_matches_given_values() {
    let cases = [
        (3u32, 1u16),
        (4, 4),
        (5, 3),
        (6, 11),
        (7, 15),
        (8, 13),
        (9, 17),
        (10, 24),
        (11, 23),
        (12, 73),
        (23, 323),
        (24, 373),
    ];
    for (ell, expected) in cases {
        let got = find_lin(BigUint::from(ell)).unwrap();
        assert_eq!(got, lin_value(expected), "F({ell})");
    }
}

#[test]
fn f_323_matches_the_known_transition_window() {
    let got = find_lin(BigUint::from(323u32)).unwrap();
    let expected = Plc::from_pairs(vec![
        (1, BigUint::from(1u32)),
        (103, BigUint::from(1u32)),
        (323, BigUint::from(1u32)),
        (373, BigUint::from(8u32)),
    ])
    .unwrap();
    assert_eq!(got, expected);
    assert_eq!(got.period_count(), BigUint::from(11u32));
}

#[test]
fn f_is_a_left_inverse_of_l_on_its_own_range() {
    for ell in 3u32..50 {
        let x = find_lin(BigUint::from(ell)).unwrap();
        assert_eq!(compute_length(&x), BigUint::from(ell), "L(F({ell})) == {ell}");
    }
}

#[test]
fn lengths_below_three_are_unreachable() {
    assert!(find_lin(BigUint::from(0u32)).is_err());
    assert!(find_lin(BigUint::from(2u32)).is_err());
}
