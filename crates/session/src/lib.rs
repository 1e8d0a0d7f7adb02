//! The commit-then-reveal game loop.
//!
//! A [`Session`] walks through the game's phases:
//!
//! 1. **Validating** — `play` turns raw names into [`Moves`]; nothing
//!    random happens if they are rejected
//! 2. **AwaitingSecret** — [`Session::open`] draws a [`SecretKey`], lets the
//!    [`Opponent`] pick, and commits to the pick
//! 3. **AwaitingUserInput** — [`Session::run`] publishes the commitment and
//!    reads [`Command`]s until one ends the game
//! 4. **Resolved** — the user's move is scored and the key revealed in a
//!    [`Resolution`]
//! 5. **Terminated** — an [`Ending`] is returned
//!
//! All interaction goes through a [`Console`]: [`Plain`] for line-based
//! streams, [`Terminal`] for an interactive tty.
//!
//! [`Moves`]: rpsx_rules::Moves
//! [`SecretKey`]: rpsx_commit::SecretKey
mod command;
mod console;
mod error;
mod event;
mod opponent;
mod plain;
mod resolution;
mod session;
mod terminal;

pub use command::*;
pub use console::*;
pub use error::*;
pub use event::*;
pub use opponent::*;
pub use plain::*;
pub use resolution::*;
pub use session::*;
pub use terminal::*;
