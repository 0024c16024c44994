//! `F(ℓ)`, the letter-inefficient-number generator from `spec.md` §4.4: the
//! smallest positive integer whose spelling has exactly `ℓ` letters.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use fourchain_lexicon::V;

use crate::length::compute_length;
use crate::plc::Plc;
use crate::{ChainError, Result};

/// Offset table `T` from `spec.md` §6, indexed by `d - 1` for `d` in `[1, 21]`.
/// `T[d-1] = (y, z)` with `V[y] + V[z] == 27 + d`.
const TRANSITION_TABLE: [(u16, u16); 21] = [
    (3, 323),
    (3, 373),
    (11, 373),
    (13, 323),
    (13, 373),
    (17, 373),
    (23, 323),
    (23, 373),
    (73, 373),
    (101, 373),
    (103, 323),
    (103, 373),
    (111, 373),
    (113, 323),
    (113, 373),
    (117, 373),
    (123, 323),
    (123, 373),
    (173, 373),
    (323, 373),
    (373, 373),
];

/// Smallest `v` in `[1, 999]` with `V[v] == ell`, used directly for target
/// lengths of at most 24 letters (every such length is reachable by a
/// single period, so no exponential search is needed).
fn small_case(ell: u32) -> Option<u16> {
    (1u16..1000).find(|&v| V[v as usize] == ell)
}

/// `L(E_n)` where `E_n = [(373, n)]`, with the convention `L(E_0) = 0`.
fn length_of_en(n: &BigUint) -> BigUint {
    if n.is_zero() {
        return BigUint::zero();
    }
    let en = Plc::from_pairs(vec![(373, n.clone())]).expect("n >= 1 here");
    compute_length(&en)
}

fn ceil_div(a: &BigUint, b: u32) -> BigUint {
    let b = BigUint::from(b);
    (a + &b - 1u32) / b
}

/// `F(ℓ)`: the smallest positive integer, as a PLC, whose spelling has
/// exactly `ℓ` letters.
pub fn find_lin(ell: BigUint) -> Result<Plc> {
    if ell < BigUint::from(3u32) {
        return Err(ChainError::UnreachableLength(ell.to_string()));
    }

    if ell <= BigUint::from(24u32) {
        let ell_u32 = ell.to_u32().expect("ell <= 24 fits in u32");
        let v = small_case(ell_u32).expect("every length in [3, 24] is reachable by a single period");
        return Plc::from_pairs(vec![(v, BigUint::one())]);
    }

    // Phase 1: exponential + binary search for the smallest n with
    // L(E_n) >= ell, knowing L(E_{n-1}) < ell.
    let mut lo = BigUint::zero();
    let mut hi = BigUint::one();
    while length_of_en(&hi) < ell {
        lo = hi.clone();
        hi = &hi * 2u32;
    }
    while &lo + 1u32 < hi {
        let mid = (&lo + &hi) / 2u32;
        if length_of_en(&mid) < ell {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    let n = hi;
    let l_en = length_of_en(&n);
    if l_en == ell {
        return Plc::from_pairs(vec![(373, n)]);
    }

    // Phase 2: refine by replacing the m most-significant 373-periods with
    // 001-periods, then patch the shortfall with a two-period window.
    let m = ceil_div(&(l_en - &ell), 21);
    let x0 = Plc::from_pairs_merging(vec![(1, m.clone()), (373, &n - &m)])?;
    let l_x0 = compute_length(&x0);
    let d = &ell - &l_x0;

    if d.is_zero() {
        return Ok(x0);
    }

    let d_u32 = d.to_u32().expect("d is in [1, 20]");
    let (y, z) = TRANSITION_TABLE[(d_u32 - 1) as usize];
    let n_minus_m = &n - &m;
    let trailing = if n_minus_m.is_zero() {
        BigUint::zero()
    } else {
        &n_minus_m - 1u32
    };
    Plc::from_pairs_merging(vec![
        (1, &m - 1u32),
        (y, BigUint::one()),
        (z, BigUint::one()),
        (373, trailing),
    ])
}
