use rpsx_core::EXIT;
use rpsx_core::HELP;
use rpsx_rules::Move;
use rpsx_rules::Moves;
use rpsx_rules::RulesError;

/// One line of menu input, interpreted against a move set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `0`: leave without resolving.
    Exit,
    /// `?`: show the outcome table.
    Help,
    /// `1..=N`: play that move.
    Play(Move),
}

impl Command {
    pub fn parse(input: &str, moves: &Moves) -> Result<Self, RulesError> {
        match input.trim() {
            EXIT => Ok(Self::Exit),
            HELP => Ok(Self::Help),
            other => moves.select(other).map(Self::Play),
        }
    }
}
