mod chain;
mod length;
mod lin;
mod occurrence;
mod plc;
#[cfg(test)]
mod tests;

pub use chain::minimal_chain;
pub use length::compute_length;
pub use lin::find_lin;
pub use plc::{Plc, Run};

/// Errors the core can report. All of them are reachable from the public
/// surface; none correspond to a state the library can reach on its own.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    /// A PLC's run list violated one of the structural invariants in
    /// `spec.md` §4.1: adjacent runs sharing a value, a non-leading run
    /// with repeat zero, or a leading zero run alongside other runs.
    #[error("invalid PLC: {0}")]
    InvalidPlc(String),
    /// A digit outside `[0, 1000)` was supplied to the occurrence counter.
    #[error("digit {0} is out of range [0, 1000)")]
    OutOfRange(u32),
    /// `find_lin` was asked for a letter length below 3, which no positive
    /// integer's spelling can have (0, 1, 2 are the sterile lengths).
    #[error("length {0} is unreachable: no positive integer's spelling has fewer than 3 letters")]
    UnreachableLength(String),
}

pub type Result<T> = std::result::Result<T, ChainError>;
