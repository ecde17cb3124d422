use super::*;
use ttt_core::Index;
use ttt_wire::ServerCommand;

/// Whoever sits at the client side of the board.
#[async_trait::async_trait]
pub trait Seat: Send {
    /// Picks a cell for the current turn, or `None` to leave the game.
    async fn decide(&mut self, view: &View) -> Option<Index>;
    /// Hears every server command after it has been applied to the view.
    async fn notify(&mut self, update: &ServerCommand);
}
