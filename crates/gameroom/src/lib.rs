//! Server-side game coordination.
//!
//! A connection becomes a [`Participant`], waits in the [`Lobby`] until
//! some seeker claims a partner, and the pair plays one [`Session`] to a
//! [`Conclusion`].
//!
//! ## Players
//!
//! - [`Participant`] — One connected client: identity, channel, per-game role
//! - [`Abort`] — A participant left mid-game; carries who and why
//!
//! ## Matchmaking
//!
//! - [`Lobby`] — Shared waiting pool with atomic pair claiming
//! - [`Claim`] — Result of one scan of the pool
//!
//! ## Play
//!
//! - [`Session`] — Turn-based state machine over two participants
//! - [`Opening`] — Who takes the first turn
//! - [`Conclusion`] — How a session ended
mod lobby;
mod participant;
mod session;

pub use lobby::*;
pub use participant::*;
pub use session::*;
