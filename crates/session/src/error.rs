use rpsx_commit::CommitError;
use rpsx_rules::RulesError;

/// Errors that end a session.
///
/// Bad menu input never shows up here; it is reported on the console and
/// the prompt repeats.
#[derive(Debug)]
pub enum SessionError {
    /// The move set was rejected before any key material was drawn.
    Rules(RulesError),
    /// Key generation failed.
    Commit(CommitError),
    /// The console could not be read or written.
    Io(std::io::Error),
}

impl From<RulesError> for SessionError {
    fn from(e: RulesError) -> Self {
        Self::Rules(e)
    }
}
impl From<CommitError> for SessionError {
    fn from(e: CommitError) -> Self {
        Self::Commit(e)
    }
}
impl From<std::io::Error> for SessionError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rules(e) => write!(f, "{}", e),
            Self::Commit(e) => write!(f, "{}", e),
            Self::Io(e) => write!(f, "console error: {}", e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rules(e) => Some(e),
            Self::Commit(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}
