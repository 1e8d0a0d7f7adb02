/// Errors raised while producing or parsing commitment material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitError {
    /// The secure random source could not produce bytes. Fatal: there is no
    /// fallback to a weaker generator.
    EntropySourceUnavailable(String),
    /// A revealed key that is not 64 hex characters.
    InvalidKey(String),
    /// A published commitment that is not 64 hex characters.
    InvalidCommitment(String),
}

impl std::fmt::Display for CommitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EntropySourceUnavailable(s) => write!(f, "secure random source unavailable: {}", s),
            Self::InvalidKey(s) => write!(f, "invalid key: {}", s),
            Self::InvalidCommitment(s) => write!(f, "invalid commitment: {}", s),
        }
    }
}

impl std::error::Error for CommitError {}
