use super::*;

/// Who picked a move.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Actor {
    User,
    Computer,
}

/// A move attributed to one side of the game.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Choice {
    actor: Actor,
    index: Move,
}

impl From<(Actor, Move)> for Choice {
    fn from((actor, index): (Actor, Move)) -> Self {
        Self { actor, index }
    }
}

impl Choice {
    pub fn actor(&self) -> Actor {
        self.actor
    }
    pub fn index(&self) -> Move {
        self.index
    }
}
