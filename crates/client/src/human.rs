use super::*;
use dialoguer::Confirm;
use dialoguer::Input;
use ttt_board::Board;
use ttt_core::CELLS;
use ttt_core::Index;
use ttt_wire::ServerCommand;

/// Terminal seat. Cells are numbered 1 through 9 on screen.
///
/// Prompts block on stdin, so they run on tokio's blocking pool.
#[derive(Debug, Default)]
pub struct Human;

#[async_trait::async_trait]
impl Seat for Human {
    async fn decide(&mut self, view: &View) -> Option<Index> {
        let board = view.board;
        tokio::task::spawn_blocking(move || Self::prompt(board))
            .await
            .inspect_err(|e| log::error!("move prompt failed: {}", e))
            .ok()
            .flatten()
    }
    async fn notify(&mut self, update: &ServerCommand) {
        match update {
            ServerCommand::IdConfirm(id) => println!("Connected as player {}", id),
            ServerCommand::Role(role) => println!("You play {}", role),
            ServerCommand::Opponent(id) => println!("Opponent is player {}", id),
            ServerCommand::Board(board) => println!("\n{}\n", board.grid()),
            ServerCommand::TurnPossible(true) => println!("{}", YOUR_TURN_TEXT),
            ServerCommand::TurnPossible(false) => println!("{}", THEIR_TURN_TEXT),
            ServerCommand::MoveId(index) => println!("Opponent played {}", index + 1),
            ServerCommand::GameResult(text) => println!("{}", text),
            ServerCommand::Quit => println!("{}", LEFT_TEXT),
        }
    }
}

impl Human {
    /// Asks whether to queue up for another game.
    pub async fn rematch() -> bool {
        tokio::task::spawn_blocking(|| {
            Confirm::new()
                .with_prompt("Play again?")
                .default(true)
                .interact()
                .unwrap_or(false)
        })
        .await
        .unwrap_or(false)
    }
    fn prompt(board: Board) -> Option<Index> {
        Input::<usize>::new()
            .with_prompt("Your move [1-9]")
            .validate_with(move |input: &usize| cell(&board, *input).map(|_| ()))
            .report(false)
            .interact_text()
            .inspect_err(|e| log::warn!("input closed: {}", e))
            .ok()
            .and_then(|input| cell(&board, input).ok())
    }
}

/// Board index for the on-screen cell number `input`, if it can be played.
fn cell(board: &Board, input: usize) -> Result<Index, &'static str> {
    match input.checked_sub(1) {
        Some(index) if board.is_vacant(index) => Ok(index),
        Some(index) if index < CELLS => Err("That cell is taken"),
        _ => Err("Pick a cell from 1 to 9"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_numbers_map_to_vacant_cells() {
        let board = Board::try_from("X   O    ").unwrap();
        assert_eq!(cell(&board, 2), Ok(1));
        assert_eq!(cell(&board, 9), Ok(8));
        assert_eq!(cell(&board, 1), Err("That cell is taken"));
        assert_eq!(cell(&board, 5), Err("That cell is taken"));
        assert_eq!(cell(&board, 0), Err("Pick a cell from 1 to 9"));
        assert_eq!(cell(&board, 10), Err("Pick a cell from 1 to 9"));
    }
}
