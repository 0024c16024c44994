use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::{ChainError, Result};

const BASE: u32 = 1000;

/// One run of a [`Plc`]: a three-digit period value repeated `repeat` times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub value: u16,
    pub repeat: BigUint,
}

impl Run {
    fn new(value: u16, repeat: BigUint) -> Self {
        Self { value, repeat }
    }
}

/// A period-list compression: a positive integer represented as an ordered
/// sequence of (period value, period repetition) runs, most significant
/// first. See `spec.md` §3 for the invariants this type upholds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plc {
    runs: Vec<Run>,
}

impl Plc {
    /// The PLC representing zero: a single run `(0, 1)`.
    pub fn zero() -> Self {
        Plc {
            runs: vec![Run::new(0, BigUint::one())],
        }
    }

    /// Builds a PLC from an explicit list of `(value, repeat)` pairs,
    /// validating the structural invariants from `spec.md` §4.1.
    pub fn from_pairs(pairs: Vec<(u16, BigUint)>) -> Result<Self> {
        if pairs.is_empty() {
            return Err(ChainError::InvalidPlc("a PLC needs at least one run".into()));
        }
        let runs: Vec<Run> = pairs
            .into_iter()
            .map(|(value, repeat)| Run::new(value, repeat))
            .collect();
        Self::validate(&runs)?;
        Ok(Plc { runs })
    }

    /// Builds a PLC from an ordered list of `(value, repeat)` pairs, first
    /// dropping zero-repeat entries and merging adjacent pairs that share a
    /// value. Used wherever a run list is assembled piecewise (e.g. the LIN
    /// generator's transition window) and may not yet be in maximal-run
    /// form.
    pub fn from_pairs_merging(pairs: Vec<(u16, BigUint)>) -> Result<Self> {
        let mut merged: Vec<(u16, BigUint)> = Vec::new();
        for (value, repeat) in pairs {
            if repeat.is_zero() {
                continue;
            }
            match merged.last_mut() {
                Some((v, r)) if *v == value => *r += repeat,
                _ => merged.push((value, repeat)),
            }
        }
        Self::from_pairs(merged)
    }

    fn validate(runs: &[Run]) -> Result<()> {
        for run in runs {
            if run.value >= BASE as u16 {
                return Err(ChainError::InvalidPlc(format!(
                    "period value {} is out of range [0, 1000)",
                    run.value
                )));
            }
            if run.repeat.is_zero() {
                return Err(ChainError::InvalidPlc("a run's repeat count must be >= 1".into()));
            }
        }
        for pair in runs.windows(2) {
            if pair[0].value == pair[1].value {
                return Err(ChainError::InvalidPlc(
                    "adjacent runs must not share a period value".into(),
                ));
            }
        }
        if runs[0].value == 0 && runs.len() > 1 {
            return Err(ChainError::InvalidPlc(
                "a leading zero run is only permitted when it is the sole run".into(),
            ));
        }
        Ok(())
    }

    /// Builds a PLC from base-1000 digits, most significant first,
    /// compressing adjacent equal digits into runs.
    pub fn from_digits(digits: &[u16]) -> Result<Self> {
        let mut trimmed = digits;
        while trimmed.len() > 1 && trimmed[0] == 0 {
            trimmed = &trimmed[1..];
        }
        let mut pairs: Vec<(u16, BigUint)> = Vec::new();
        for &d in trimmed {
            match pairs.last_mut() {
                Some((v, r)) if *v == d => *r += 1u32,
                _ => pairs.push((d, BigUint::one())),
            }
        }
        Self::from_pairs(pairs)
    }

    /// Builds a PLC from a dense integer value by repeated `divmod 1000`.
    /// Intended for zillion-index-scale values (tens of digits), never for
    /// the astronomically large chain values themselves.
    pub fn from_biguint(mut n: BigUint) -> Self {
        if n.is_zero() {
            return Plc::zero();
        }
        let base = BigUint::from(BASE);
        let mut digits = Vec::new();
        while !n.is_zero() {
            let (q, r) = num_integer::Integer::div_rem(&n, &base);
            digits.push(r.to_u32_digits().first().copied().unwrap_or(0) as u16);
            n = q;
        }
        digits.reverse();
        Self::from_digits(&digits).expect("dense decomposition always yields a valid PLC")
    }

    pub fn from_u128(n: u128) -> Self {
        Self::from_biguint(BigUint::from(n))
    }

    /// Reconstructs the dense integer value via repeated `value*1000 + v`.
    /// Only meaningful for zillion-index-scale PLCs (tens of digits, as
    /// produced by [`Plc::zillion_index`] and [`Plc::run_position_bounds`]);
    /// never call this on a chain value itself.
    pub fn to_biguint(&self) -> BigUint {
        let base = BigUint::from(BASE);
        let mut value = BigUint::zero();
        for run in &self.runs {
            let repeat: u32 = run
                .repeat
                .to_u32_digits()
                .first()
                .copied()
                .unwrap_or(0);
            for _ in 0..repeat {
                value = value * &base + BigUint::from(run.value);
            }
        }
        value
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn is_zero(&self) -> bool {
        self.runs.len() == 1 && self.runs[0].value == 0
    }

    /// Total number of base-1000 periods, `P` in `spec.md` §3.
    pub fn period_count(&self) -> BigUint {
        self.runs.iter().fold(BigUint::zero(), |acc, r| acc + &r.repeat)
    }

    /// `Z = P - 1`, the zillion index of the leading period.
    pub fn zillion_index(&self) -> BigUint {
        self.period_count() - 1u32
    }

    /// `(lo, hi)` zillion-index bounds occupied by each run, least
    /// significant period first, in the same order as [`Plc::runs`].
    pub fn run_position_bounds(&self) -> Vec<(BigUint, BigUint)> {
        let mut bounds = Vec::with_capacity(self.runs.len());
        let mut periods_after = BigUint::zero();
        for run in self.runs.iter().rev() {
            let lo = periods_after.clone();
            let hi = &lo + &run.repeat - 1u32;
            bounds.push((lo, hi));
            periods_after += &run.repeat;
        }
        bounds.reverse();
        bounds
    }

    /// Textual round-trip form: `[vvv]{r}` per run, with `r == 1` runs
    /// written bare (zero-padded to three digits, except the leading run,
    /// which may drop its leading zeros).
    pub fn to_notation(&self) -> String {
        let mut out = String::new();
        for (i, run) in self.runs.iter().enumerate() {
            if run.repeat.is_one() {
                if i == 0 {
                    out.push_str(&run.value.to_string());
                } else {
                    out.push_str(&format!("{:03}", run.value));
                }
            } else {
                out.push_str(&format!("[{:03}]{{{}}}", run.value, run.repeat));
            }
        }
        out
    }

    /// Parses the textual form produced by [`Plc::to_notation`].
    pub fn from_notation(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        let mut pairs: Vec<(u16, BigUint)> = Vec::new();
        let mut i = 0usize;
        let mut leading = true;
        while i < bytes.len() {
            if bytes[i] == b'[' {
                let close = s[i..]
                    .find(']')
                    .map(|p| i + p)
                    .ok_or_else(|| ChainError::InvalidPlc("unterminated '[' in PLC notation".into()))?;
                let value: u16 = s[i + 1..close]
                    .parse()
                    .map_err(|_| ChainError::InvalidPlc("bad period value in brackets".into()))?;
                i = close + 1;
                let repeat = if i < bytes.len() && bytes[i] == b'{' {
                    let close_brace = s[i..]
                        .find('}')
                        .map(|p| i + p)
                        .ok_or_else(|| ChainError::InvalidPlc("unterminated '{' in PLC notation".into()))?;
                    let rep: BigUint = s[i + 1..close_brace]
                        .parse()
                        .map_err(|_| ChainError::InvalidPlc("bad repeat count in braces".into()))?;
                    i = close_brace + 1;
                    rep
                } else {
                    BigUint::one()
                };
                pairs.push((value, repeat));
                leading = false;
            } else {
                let start = i;
                while i < bytes.len() && bytes[i] != b'[' {
                    i += 1;
                }
                let bare = &s[start..i];
                pairs.extend(parse_bare_chunk(bare, leading)?);
                leading = false;
            }
        }
        Self::from_pairs(pairs)
    }
}

fn parse_bare_chunk(s: &str, is_leading_segment: bool) -> Result<Vec<(u16, BigUint)>> {
    if s.is_empty() {
        return Ok(Vec::new());
    }
    let chars: Vec<char> = s.chars().collect();
    let mut idx = 0usize;
    let mut out = Vec::new();
    if is_leading_segment {
        let rem = chars.len() % 3;
        let lead_len = if rem == 0 { 3 } else { rem };
        let value: u16 = chars[0..lead_len]
            .iter()
            .collect::<String>()
            .parse()
            .map_err(|_| ChainError::InvalidPlc("bad leading period value".into()))?;
        out.push((value, BigUint::one()));
        idx = lead_len;
    }
    while idx < chars.len() {
        if idx + 3 > chars.len() {
            return Err(ChainError::InvalidPlc(
                "bare (unbracketed) run segment is not a multiple of 3 digits".into(),
            ));
        }
        let value: u16 = chars[idx..idx + 3]
            .iter()
            .collect::<String>()
            .parse()
            .map_err(|_| ChainError::InvalidPlc("bad bare period value".into()))?;
        out.push((value, BigUint::one()));
        idx += 3;
    }
    Ok(out)
}

impl fmt::Display for Plc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_notation())
    }
}

impl PartialOrd for Plc {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Plc {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_count = self.period_count().cmp(&other.period_count());
        if by_count != Ordering::Equal {
            return by_count;
        }
        cmp_same_length(&self.runs, &other.runs)
    }
}

/// Lexicographic comparison of two run lists known to cover the same total
/// period count, expanding misaligned runs chunk by chunk until a
/// difference appears (`spec.md` §4.1).
fn cmp_same_length(a: &[Run], b: &[Run]) -> Ordering {
    let mut ai = a.iter();
    let mut bi = b.iter();
    let mut a_cur: Option<(u16, BigUint)> = None;
    let mut b_cur: Option<(u16, BigUint)> = None;
    loop {
        if a_cur.is_none() {
            a_cur = ai.next().map(|r| (r.value, r.repeat.clone()));
        }
        if b_cur.is_none() {
            b_cur = bi.next().map(|r| (r.value, r.repeat.clone()));
        }
        match (a_cur.take(), b_cur.take()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some((av, ar)), Some((bv, br))) => {
                if av != bv {
                    return av.cmp(&bv);
                }
                match ar.cmp(&br) {
                    Ordering::Equal => {}
                    Ordering::Less => b_cur = Some((bv, br - &ar)),
                    Ordering::Greater => a_cur = Some((av, ar - &br)),
                }
            }
        }
    }
}
