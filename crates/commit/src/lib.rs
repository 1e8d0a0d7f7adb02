//! Commit-then-reveal primitives.
//!
//! - [`Entropy`] — A cryptographically secure byte source ([`Os`] in production)
//! - [`SecretKey`] — 256 bits of fresh key material, revealed after the game
//! - [`Commitment`] — HMAC-SHA256 of a move name under a [`SecretKey`]
//!
//! The computer publishes a [`Commitment`] before the user moves. Once the
//! key is revealed, anyone can recompute the HMAC over the revealed move
//! and check that it matches what was published.
mod commitment;
mod entropy;
mod error;
mod key;

pub use commitment::*;
pub use entropy::*;
pub use error::*;
pub use key::*;
