use super::*;
use rpsx_commit::Commitment;
use rpsx_core::EXIT;
use rpsx_core::HELP;
use rpsx_rules::Moves;
use rpsx_rules::RulesError;
use rpsx_rules::Table;

/// Everything a session shows the user, in the order it happens.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// The computer's commitment, published before the user picks.
    Committed(&'a Commitment),
    /// The numbered list of moves and sentinels.
    Menu(&'a Moves),
    /// The outcome table requested with `?`.
    Help(Table<'a>),
    /// Input that did not parse; the prompt repeats.
    Rejected(&'a RulesError),
    /// The user left with `0` or closed the input.
    Exited,
    /// The result and the revealed key.
    Resolved(&'a Resolution),
}

/// Plain-text rendering shared by every console.
impl std::fmt::Display for Event<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Committed(commitment) => write!(f, "HMAC: {}", commitment),
            Self::Menu(moves) => {
                writeln!(f, "Available moves:")?;
                for (m, name) in moves.iter() {
                    writeln!(f, "{} - {}", m.position(), name)?;
                }
                writeln!(f, "{} - exit", EXIT)?;
                write!(f, "{} - help", HELP)
            }
            Self::Help(table) => write!(f, "\nHelp table:\n{}", table),
            Self::Rejected(e) => write!(f, "{}", e),
            Self::Exited => write!(f, "Game exited."),
            Self::Resolved(r) => {
                writeln!(f, "Your move: {}", r.user_move())?;
                writeln!(f, "Computer move: {}", r.computer_move())?;
                writeln!(f, "{}", r.verdict())?;
                write!(f, "HMAC key: {}", r.key())
            }
        }
    }
}
