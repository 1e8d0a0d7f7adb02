//! Move sets and the circular win relation.
//!
//! ## Core Types
//!
//! - [`Moves`] — A validated, ordered set of distinct move names (odd, ≥ 3)
//! - [`Move`] — A position within a [`Moves`] set
//! - [`Choice`] — A move attributed to the user or the computer
//! - [`Outcome`] — Win, lose, or draw from the user's perspective
//!
//! ## Relation
//!
//! [`Rules`] arranges N moves on a circle. Every move loses to the `N / 2`
//! moves that follow it and beats the `N / 2` moves that precede it, which
//! is classic rock-paper-scissors for `N = 3`.
//!
//! [`Table`] renders the whole relation as a grid for the in-game help.
mod choice;
mod error;
mod moves;
mod outcome;
mod rules;
mod table;

pub use choice::*;
pub use error::*;
pub use moves::*;
pub use outcome::*;
pub use rules::*;
pub use table::*;
