//! The chain assembler from `spec.md` §4.5: builds the canonical minimal
//! four-chain of a given length by repeatedly extending a known seed.

use crate::lin::find_lin;
use crate::plc::Plc;
use crate::{ChainError, Result};

fn literal_chain(values: &[u32]) -> Vec<Plc> {
    values.iter().map(|&v| Plc::from_u128(v as u128)).collect()
}

/// `minimal_chain(n)`: the first (smallest) four-chain with exactly `n`
/// elements.
///
/// Lengths 3 and 5 are hard-coded special cases (`spec.md` §4.5's rationale:
/// the obvious one- and two-element extensions of `(4, 3, 5)` die at the
/// sterile vertices 1 and 2, so no four-chain of length 4 exists and length
/// 5's seed is not a prefix extension of the length-7 seed). From length 7
/// onward the chain is the length-7 seed `(4, 5, 3, 6, 11, 23, 323)`
/// extended one element at a time via `F`.
pub fn minimal_chain(n: usize) -> Result<Vec<Plc>> {
    if n == 3 {
        return Ok(literal_chain(&[4, 3, 5]));
    }
    if n == 5 {
        return Ok(literal_chain(&[4, 3, 5, 6, 11]));
    }
    if n < 7 {
        return Err(ChainError::UnreachableLength(format!(
            "no four-chain of length {n} is defined"
        )));
    }

    let mut chain = literal_chain(&[4, 5, 3, 6, 11, 23, 323]);
    while chain.len() < n {
        let last = chain.last().expect("chain is never empty");
        let target_len = last.to_biguint();
        let next = find_lin(target_len)?;
        chain.push(next);
    }
    Ok(chain)
}
