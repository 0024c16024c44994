//! The letter-counting function `L = L_V + L_N` from `spec.md` §4.3.

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use fourchain_lexicon::N;

use crate::occurrence::occurrence;
use crate::plc::Plc;

/// `Σ` over runs `(v, r)` of `V[v] * r`: the letters contributed by every
/// period's own cardinal spelling.
fn l_v(x: &Plc) -> BigUint {
    x.runs().iter().fold(BigUint::zero(), |acc, run| {
        acc + BigUint::from(fourchain_lexicon::V[run.value as usize]) * &run.repeat
    })
}

/// `L_Z(a, z) = 2*(z - a*[a>0]) + [a<=0<z] + Σ_d N[d]*O(d,a,z)`.
///
/// `a` and `z` here are zillion-index-scale bounds (never the chain value
/// itself), so densifying them via [`Plc::to_biguint`] is safe.
fn l_z(a: &Plc, z: &Plc) -> BigInt {
    let a_val = a.to_biguint();
    let z_val = z.to_biguint();

    let mut total = BigInt::from(2) * (BigInt::from(z_val.clone()) - BigInt::from(a_val.clone()));
    if a_val.is_zero() && !z_val.is_zero() {
        total += 1;
    }

    for d in 0u16..1000 {
        let count = occurrence(d, a, z).expect("digit d is always in [0, 1000) here");
        total += BigInt::from(N[d as usize]) * BigInt::from(count);
    }
    total
}

/// `L_N(x) = L_Z(0, Z(x)) - Σ` over zero-runs `(0, r_n)` at zillion position
/// `p_n` of `L_Z(p_n, p_n + r_n)`.
///
/// `L_Z(a, b)` attributes the name of the period at zillion index `j` to
/// the half-open slot `(a, b]` via `j = b` when `a = j - 1` — i.e. naming
/// positions `[lo, hi]` (inclusive, as returned by
/// [`Plc::run_position_bounds`]) corresponds to `L_Z(lo - 1, hi)`, not
/// `L_Z(lo, hi + 1)`. The ones-place (zillion index 0) never carries a
/// name, so a zero-run touching it (`lo == 0`) must not shift `a` below 0.
fn l_n(x: &Plc) -> BigUint {
    let zero = Plc::zero();
    let z = Plc::from_biguint(x.zillion_index());
    let mut total = l_z(&zero, &z);

    for (run, (lo, hi)) in x.runs().iter().zip(x.run_position_bounds()) {
        if run.value == 0 {
            let a_val = if lo.is_zero() { BigUint::zero() } else { &lo - 1u32 };
            let a = Plc::from_biguint(a_val);
            let z_bound = Plc::from_biguint(hi);
            total -= l_z(&a, &z_bound);
        }
    }

    total
        .to_biguint()
        .expect("L_N(x) is non-negative for every valid PLC")
}

/// `L(x) = L_V(x) + L_N(x)`: the exact letter count of `x`'s spelling,
/// without ever spelling `x`.
pub fn compute_length(x: &Plc) -> BigUint {
    l_v(x) + l_n(x)
}
