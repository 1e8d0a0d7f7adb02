/// Errors raised while validating a move set or a menu selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// Fewer than three moves, or an even number of them.
    InvalidMoveCount(usize),
    /// The same name appears twice (case-sensitive).
    DuplicateMove(String),
    /// Menu input that is neither a sentinel nor a position in range.
    InvalidSelection(String),
}

impl std::fmt::Display for RulesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMoveCount(n) => write!(
                f,
                "Please provide an odd number (>= {}) of non-repeating moves as arguments (got {}).",
                rpsx_core::MIN_MOVES,
                n
            ),
            Self::DuplicateMove(name) => write!(
                f,
                "Duplicate moves are not allowed ({} repeats). Please provide non-repeating moves.",
                name
            ),
            Self::InvalidSelection(input) => {
                write!(f, "Invalid input {:?}. Please try again.", input)
            }
        }
    }
}

impl std::error::Error for RulesError {}
