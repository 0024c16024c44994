//! The digit-occurrence counter `O_{d,b}(a,z)` from `spec.md` §4.2, kept
//! generic over the base `b` so the base-1000 production path (driven by
//! `Plc` runs) and the base-10 textbook sanity checks in the test suite
//! share one closed-form implementation.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::plc::Plc;
use crate::{ChainError, Result};

/// One run as seen by the counter: a period value repeated some number of
/// times. Independent of [`Plc`] so the same math can be driven by ad hoc
/// decimal runs in tests.
#[derive(Clone)]
pub(crate) struct CountRun {
    pub value: u64,
    pub repeat: BigUint,
}

fn pow_big(base: &BigUint, exp: &BigUint) -> BigUint {
    let mut result = BigUint::one();
    let mut b = base.clone();
    let mut e = exp.clone();
    let two = BigUint::from(2u32);
    while !e.is_zero() {
        let (q, r) = e.div_rem(&two);
        if r.is_one() {
            result *= &b;
        }
        b = &b * &b;
        e = q;
    }
    result
}

/// `sum_{k=0}^{r-1} base^k`, exact (no remainder) since `base^r - 1` is
/// always a multiple of `base - 1`.
fn geometric_sum(base: &BigUint, r: &BigUint) -> BigUint {
    let denom = base - BigUint::one();
    if denom.is_zero() {
        return r.clone();
    }
    (pow_big(base, r) - BigUint::one()) / denom
}

/// `O+(d, z) = O(d, 0, z)`: occurrences of digit `d` across all base-`base`
/// digits of all integers in `[0, z)`, where `z` is given as a run list,
/// most significant first.
pub(crate) fn occurrence_plus(base: u64, d: u64, runs: &[CountRun]) -> BigInt {
    let n = runs.len();
    if n == 0 {
        return BigInt::zero();
    }
    let b = BigUint::from(base);
    let bm1 = &b - BigUint::one();

    // periods_after[i] = periods strictly less significant than run i.
    // low_after[i]     = dense value of runs[i+1..].
    let mut periods_after = vec![BigUint::zero(); n];
    let mut low_after = vec![BigUint::zero(); n];
    for i in (0..n - 1).rev() {
        let next = &runs[i + 1];
        periods_after[i] = &periods_after[i + 1] + &next.repeat;
        low_after[i] = BigUint::from(next.value) * geometric_sum(&b, &next.repeat)
            * pow_big(&b, &periods_after[i + 1])
            + &low_after[i + 1];
    }

    // high_before[i] = dense value of runs[..i].
    let mut high_before = vec![BigUint::zero(); n];
    for i in 1..n {
        let prev = &runs[i - 1];
        high_before[i] = &high_before[i - 1] * pow_big(&b, &prev.repeat)
            + BigUint::from(prev.value) * geometric_sum(&b, &prev.repeat);
    }

    let mut total = BigInt::zero();
    for i in 0..n {
        let v = runs[i].value;
        let r = &runs[i].repeat;
        let lo = &periods_after[i];
        let hi = lo + r - 1u32;
        let h = &high_before[i];
        let low = &low_after[i];

        let s_run = pow_big(&b, lo) * geometric_sum(&b, r);
        let b_hi = pow_big(&b, &hi);

        let term_a_hi = BigInt::from(r.clone() * h.clone() * &b_hi);
        let term_a_v = BigInt::from(v) * BigInt::from(r.clone() * &b_hi - &s_run) / BigInt::from(bm1.clone());
        let term_a = term_a_hi + term_a_v;

        let gt = if v > d { 1 } else { 0 };
        let eq_zero = if d == 0 { 1 } else { 0 };
        let term_b = BigInt::from(gt - eq_zero) * BigInt::from(s_run.clone());

        let term_c = if v == d {
            let gs_minus_r = BigInt::from(geometric_sum(&b, r)) - BigInt::from(r.clone());
            let inner = BigInt::from(pow_big(&b, lo)) * BigInt::from(v) * gs_minus_r
                / BigInt::from(bm1.clone())
                + BigInt::from(r.clone() * low);
            inner
        } else {
            BigInt::zero()
        };

        total += term_a + term_b + term_c;
    }

    if d == 0 {
        total += 1;
    }
    total
}

fn plc_to_count_runs(plc: &Plc) -> Vec<CountRun> {
    plc.runs()
        .iter()
        .map(|r| CountRun {
            value: r.value as u64,
            repeat: r.repeat.clone(),
        })
        .collect()
}

/// Production entry point: `O(d, a, z)` at base 1000, operating directly on
/// `Plc` bounds, never materializing either bound as a dense integer beyond
/// the run-local closed-form terms above.
pub(crate) fn occurrence(d: u16, a: &Plc, z: &Plc) -> Result<BigUint> {
    if d >= 1000 {
        return Err(ChainError::OutOfRange(d as u32));
    }
    if a >= z {
        return Ok(BigUint::zero());
    }
    let o_z = occurrence_plus(1000, d as u64, &plc_to_count_runs(z));
    let o_a = occurrence_plus(1000, d as u64, &plc_to_count_runs(a));
    let diff = o_z - o_a;
    debug_assert!(!diff.is_negative(), "O(d,a,z) must be non-negative for a <= z");
    Ok(diff.to_biguint().unwrap_or_else(BigUint::zero))
}

#[cfg(test)]
pub(crate) fn occurrence_generic(base: u64, d: u64, a: &[CountRun], z: &[CountRun]) -> BigInt {
    occurrence_plus(base, d, z) - occurrence_plus(base, d, a)
}

#[cfg(test)]
pub(crate) fn decimal_runs(mut n: u64) -> Vec<CountRun> {
    // Most-significant-first decimal digits of `n`, base 10, used only to
    // validate the closed form against the classic textbook case.
    if n == 0 {
        return vec![CountRun {
            value: 0,
            repeat: BigUint::one(),
        }];
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(n % 10);
        n /= 10;
    }
    digits.reverse();
    let mut runs: Vec<CountRun> = Vec::new();
    for d in digits {
        match runs.last_mut() {
            Some(last) if last.value == d => last.repeat += 1u32,
            _ => runs.push(CountRun {
                value: d,
                repeat: BigUint::one(),
            }),
        }
    }
    runs
}
