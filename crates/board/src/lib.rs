//! Tic-tac-toe rules: roles, board state, and terminal evaluation.
//!
//! This crate is pure and synchronous. It knows nothing about connections,
//! turn order between participants, or the wire protocol beyond the
//! 9-character board text.
//!
//! - [`Role`] — The symbol a participant plays (X or O)
//! - [`Board`] — Nine cells, mutated only from empty to a role
//! - [`Outcome`] — In progress, won by a role, or drawn
//! - [`LINES`] — The eight winning triples
mod board;
mod outcome;
mod role;

pub use board::*;
pub use outcome::*;
pub use role::*;
