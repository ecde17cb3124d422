//! Tic-tac-toe client.
//!
//! A [`Client`] connects (retrying while the server is not up), mirrors
//! the game into a [`View`], and asks a [`Seat`] for each move.
//!
//! - [`Config`] — Server address, certificates, and play mode
//! - [`Client`] — Connection plus local view; drives one game
//! - [`View`] — Client-side game state rebuilt from server commands
//! - [`Seat`] — Decides moves and hears every server update
//! - [`Fish`] — Seat that plays a random empty cell
//! - `Human` — Terminal seat (feature `cli`)
mod client;
mod config;
mod fish;
#[cfg(feature = "cli")]
mod human;
mod seat;
mod view;

pub use client::*;
pub use config::*;
pub use fish::*;
#[cfg(feature = "cli")]
pub use human::*;
pub use seat::*;
pub use view::*;
