//! Tic-tac-toe game hosting.
//!
//! A single accept loop hands every connection its own task: secure
//! handshake, identity, waiting pool, and for whichever task claims a
//! pair, the game itself.
//!
//! - [`Config`] — Listen address, certificates, and game knobs from flags or environment
//! - [`Server`] — Bound acceptor shared by all connection tasks
mod config;
mod server;

pub use config::*;
pub use server::*;
