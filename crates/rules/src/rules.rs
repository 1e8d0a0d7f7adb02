use super::*;

/// The circular win relation over `N` moves.
///
/// Moves sit on a circle in rank order. A move loses to the `half = N / 2`
/// moves that follow it and beats the `half` moves that precede it, so for
/// rock-paper-scissors paper beats rock, scissors beats paper, and rock
/// wraps around to beat scissors.
///
/// The comparison is written without modular arithmetic. With the computer
/// ahead of the user by at most `half` the user loses; with the user ahead
/// by more than `half` the computer has wrapped around past the user and
/// the user loses again. The boundaries are `<= half` on one side and
/// `> half` on the other because the forward and backward distances sum to
/// `N`, and for odd `N` exactly one of them is at most `half`.
///
/// `N` must be odd. Even sets are rejected by [`Moves`] before a relation
/// is ever built; an even `N` here would produce a pair at distance exactly
/// `N / 2` in both directions that both sides win.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Rules(usize);

impl From<usize> for Rules {
    fn from(n: usize) -> Self {
        debug_assert!(n % 2 == 1, "win relation needs an odd move count");
        Self(n)
    }
}

impl Rules {
    /// Number of moves on the circle.
    pub fn n(&self) -> usize {
        self.0
    }
    /// How many moves each move beats (and loses to).
    pub fn half(&self) -> usize {
        self.0 / 2
    }
    /// Outcome for the user playing `user` against the computer's `computer`.
    pub fn outcome(&self, user: Move, computer: Move) -> Outcome {
        let u = usize::from(user);
        let c = usize::from(computer);
        let half = self.half();
        debug_assert!(u < self.0 && c < self.0);
        match () {
            _ if u == c => Outcome::Draw,
            _ if c > u && c - u <= half => Outcome::Lose,
            _ if u > c && u - c > half => Outcome::Lose,
            _ => Outcome::Win,
        }
    }
    /// Index-level form of [`Rules::outcome`].
    pub fn winner_of(user: usize, computer: usize, n: usize) -> Outcome {
        Self::from(n).outcome(Move::from(user), Move::from(computer))
    }
}
