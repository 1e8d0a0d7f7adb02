use rpsx_commit::Commitment;
use rpsx_commit::SecretKey;
use rpsx_rules::Actor;
use rpsx_rules::Choice;
use rpsx_rules::Moves;
use rpsx_rules::Outcome;

/// A finished game with everything needed to audit it.
///
/// Holds the revealed key next to the commitment that was published
/// before the user moved, so [`Resolution::verify`] can replay the check
/// a suspicious user would do by hand.
#[derive(Debug, Clone)]
pub struct Resolution {
    moves: Moves,
    user: Choice,
    computer: Choice,
    outcome: Outcome,
    key: SecretKey,
    commitment: Commitment,
}

impl Resolution {
    pub(crate) fn new(
        moves: Moves,
        user: Choice,
        computer: Choice,
        key: SecretKey,
        commitment: Commitment,
    ) -> Self {
        debug_assert!(user.actor() == Actor::User);
        debug_assert!(computer.actor() == Actor::Computer);
        let outcome = moves.rules().outcome(user.index(), computer.index());
        Self {
            moves,
            user,
            computer,
            outcome,
            key,
            commitment,
        }
    }
    pub fn user(&self) -> Choice {
        self.user
    }
    pub fn computer(&self) -> Choice {
        self.computer
    }
    pub fn user_move(&self) -> &str {
        self.moves.name(self.user.index())
    }
    pub fn computer_move(&self) -> &str {
        self.moves.name(self.computer.index())
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    pub fn key(&self) -> &SecretKey {
        &self.key
    }
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }
    /// Recomputes the commitment from the revealed key and computer move.
    pub fn verify(&self) -> bool {
        self.commitment.verify(&self.key, self.computer_move())
    }
    /// One-line verdict as shown to the user.
    pub fn verdict(&self) -> String {
        match self.outcome {
            Outcome::Draw => String::from("Draw!"),
            outcome => format!("You {}!", outcome),
        }
    }
}
