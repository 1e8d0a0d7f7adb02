use super::*;

/// A cryptographically secure source of random bytes.
///
/// Implementations must never degrade to a general-purpose PRNG. If the
/// source cannot deliver, return [`CommitError::EntropySourceUnavailable`].
pub trait Entropy {
    fn fill(&mut self, bytes: &mut [u8]) -> Result<(), CommitError>;
}

/// The operating system's random source.
#[derive(Debug, Default, Clone, Copy)]
pub struct Os;

impl Entropy for Os {
    fn fill(&mut self, bytes: &mut [u8]) -> Result<(), CommitError> {
        getrandom::fill(bytes).map_err(|e| CommitError::EntropySourceUnavailable(e.to_string()))
    }
}
