use super::*;
use rpsx_core::MIN_MOVES;
use std::collections::HashSet;

/// A position within a [`Moves`] set, `0..N`.
///
/// Positions are the only thing the win relation looks at; names are
/// carried by [`Moves`] and only matter for display and commitments.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Move(usize);

/// usize isomorphism
impl From<usize> for Move {
    fn from(n: usize) -> Self {
        Self(n)
    }
}
impl From<Move> for usize {
    fn from(m: Move) -> usize {
        m.0
    }
}

impl Move {
    /// 1-based position as shown in the menu.
    pub fn position(&self) -> usize {
        self.0 + 1
    }
}

/// An ordered set of distinct move names.
///
/// Construction is the only place a move set is validated: the length must
/// be odd and at least [`MIN_MOVES`], and no name may repeat (exact,
/// case-sensitive match). The order fixes each move's rank for the lifetime
/// of the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Moves(Vec<String>);

impl TryFrom<Vec<String>> for Moves {
    type Error = RulesError;
    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        let n = names.len();
        if n < MIN_MOVES || n % 2 == 0 {
            return Err(RulesError::InvalidMoveCount(n));
        }
        let mut seen = HashSet::with_capacity(n);
        if let Some(name) = names.iter().find(|name| !seen.insert(name.as_str())) {
            return Err(RulesError::DuplicateMove(name.clone()));
        }
        Ok(Self(names))
    }
}

impl TryFrom<&[&str]> for Moves {
    type Error = RulesError;
    fn try_from(names: &[&str]) -> Result<Self, Self::Error> {
        Self::try_from(names.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }
}

impl Moves {
    /// Number of moves, always odd and at least three.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    /// Never true for a validated set; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Name of the move at `m`.
    ///
    /// Panics if `m` did not come from this set.
    pub fn name(&self, m: Move) -> &str {
        self.0[m.0].as_str()
    }
    /// Move at zero-based `index`, if in range.
    pub fn get(&self, index: usize) -> Option<Move> {
        (index < self.len()).then_some(Move(index))
    }
    /// All moves in rank order with their names.
    pub fn iter(&self) -> impl Iterator<Item = (Move, &str)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(i, name)| (Move(i), name.as_str()))
    }
    /// The win relation over this set.
    pub fn rules(&self) -> Rules {
        Rules::from(self.len())
    }
    /// Parses a 1-based menu position such as `"2"`.
    ///
    /// Leading and trailing whitespace is ignored. `0` is not a move; the
    /// caller handles it as the exit sentinel before getting here.
    pub fn select(&self, input: &str) -> Result<Move, RulesError> {
        input
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|p| (1..=self.len()).contains(p))
            .map(|p| Move(p - 1))
            .ok_or_else(|| RulesError::InvalidSelection(input.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves(names: &[&str]) -> Result<Moves, RulesError> {
        Moves::try_from(names)
    }

    #[test]
    fn accepts_classic_set() {
        let set = moves(&["rock", "paper", "scissors"]).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.name(Move::from(1)), "paper");
    }

    #[test]
    fn rejects_two_moves() {
        assert_eq!(
            moves(&["rock", "paper"]),
            Err(RulesError::InvalidMoveCount(2))
        );
    }

    #[test]
    fn rejects_even_count() {
        assert_eq!(
            moves(&["a", "b", "c", "d"]),
            Err(RulesError::InvalidMoveCount(4))
        );
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(moves(&[]), Err(RulesError::InvalidMoveCount(0)));
    }

    #[test]
    fn rejects_duplicate() {
        assert_eq!(
            moves(&["rock", "paper", "rock"]),
            Err(RulesError::DuplicateMove("rock".to_string()))
        );
    }

    #[test]
    fn duplicates_are_case_sensitive() {
        assert!(moves(&["rock", "Rock", "ROCK"]).is_ok());
    }

    #[test]
    fn count_checked_before_duplicates() {
        assert_eq!(
            moves(&["rock", "rock"]),
            Err(RulesError::InvalidMoveCount(2))
        );
    }

    #[test]
    fn select_is_one_based() {
        let set = moves(&["rock", "paper", "scissors"]).unwrap();
        assert_eq!(set.select("1"), Ok(Move::from(0)));
        assert_eq!(set.select(" 3 \n"), Ok(Move::from(2)));
    }

    #[test]
    fn select_rejects_out_of_range() {
        let set = moves(&["rock", "paper", "scissors"]).unwrap();
        for input in ["0", "4", "-1", "", "two", "1.0", "?"] {
            assert!(
                matches!(set.select(input), Err(RulesError::InvalidSelection(_))),
                "{:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn iter_preserves_order() {
        let set = moves(&["x", "y", "z"]).unwrap();
        let names = set.iter().map(|(_, name)| name).collect::<Vec<_>>();
        assert_eq!(names, vec!["x", "y", "z"]);
        assert_eq!(set.get(2), Some(Move::from(2)));
        assert_eq!(set.get(3), None);
    }
}
