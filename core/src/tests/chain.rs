use num_bigint::BigUint;
use pretty_assertions::assert_eq;

use crate::chain::minimal_chain;
use crate::length::compute_length;
use crate::plc::Plc;

#[test]
fn minimal_chain_of_length_seven_is_the_known_seed() {
    let chain = minimal_chain(7).unwrap();
    let expected: Vec<Plc> = [4u128, 5, 3, 6, 11, 23, 323]
        .into_iter()
        .map(Plc::from_u128)
        .collect();
    assert_eq!(chain, expected);
}

#[test]
fn minimal_chain_of_length_eight_extends_with_f_of_323() {
    let chain = minimal_chain(8).unwrap();
    assert_eq!(chain.len(), 8);
    assert_eq!(chain[..7], minimal_chain(7).unwrap()[..]);

    let last = &chain[7];
    assert_eq!(last.to_notation(), "1103323[373]{8}");
    assert_eq!(last.period_count(), BigUint::from(11u32));
    assert_eq!(compute_length(last), BigUint::from(323u32));
}

#[test]
fn minimal_chain_of_length_three_and_five_are_special_seeds() {
    let three = minimal_chain(3).unwrap();
    assert_eq!(
        three,
        vec![Plc::from_u128(4), Plc::from_u128(3), Plc::from_u128(5)]
    );

    let five = minimal_chain(5).unwrap();
    assert_eq!(
        five,
        vec![
            Plc::from_u128(4),
            Plc::from_u128(3),
            Plc::from_u128(5),
            Plc::from_u128(6),
            Plc::from_u128(11),
        ]
    );
}

#[test]
fn undefined_short_lengths_are_rejected() {
    assert!(minimal_chain(4).is_err());
    assert!(minimal_chain(6).is_err());
}
