use ttt_board::Board;
use ttt_board::Role;
use ttt_core::Index;
use ttt_core::PlayerId;
use ttt_wire::ClientCommand;
use ttt_wire::ServerCommand;

pub const WAITING_TEXT: &str = "Waiting for start";
pub const YOUR_TURN_TEXT: &str = "Your turn";
pub const THEIR_TURN_TEXT: &str = "Opponent's turn";
pub const LEFT_TEXT: &str = "Opponent left";

/// Client-side mirror of one game.
///
/// Rebuilt purely from server commands plus the client's own moves.
/// Once `finished` is set nothing more is expected on this connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub id: Option<PlayerId>,
    pub role: Option<Role>,
    pub opponent: Option<PlayerId>,
    pub board: Board,
    pub turn_possible: bool,
    pub finished: bool,
    pub status: String,
}

impl Default for View {
    fn default() -> Self {
        Self {
            id: None,
            role: None,
            opponent: None,
            board: Board::default(),
            turn_possible: false,
            finished: false,
            status: WAITING_TEXT.to_string(),
        }
    }
}

impl View {
    pub fn apply(&mut self, command: &ServerCommand) {
        match command {
            ServerCommand::IdConfirm(id) => self.id = Some(*id),
            ServerCommand::Role(role) => self.role = Some(*role),
            ServerCommand::Opponent(id) => self.opponent = Some(*id),
            ServerCommand::Board(board) => self.board = *board,
            ServerCommand::TurnPossible(possible) => {
                self.turn_possible = *possible;
                self.status = match possible {
                    true => YOUR_TURN_TEXT,
                    false => THEIR_TURN_TEXT,
                }
                .to_string();
            }
            ServerCommand::MoveId(index) => {
                let theirs = self.role.map(Role::opponent).unwrap_or(Role::O);
                self.board.mark(*index, theirs);
            }
            ServerCommand::GameResult(text) => {
                self.status = text.clone();
                self.opponent = None;
                self.turn_possible = false;
                self.finished = true;
            }
            ServerCommand::Quit => {
                *self = Self {
                    id: self.id,
                    finished: true,
                    status: LEFT_TEXT.to_string(),
                    ..Self::default()
                };
            }
        }
    }
    /// Marks `index` locally and yields the command to send, provided it
    /// is this client's turn and the cell is empty.
    pub fn make_move(&mut self, index: Index) -> Option<ClientCommand> {
        let role = self.role?;
        if !self.turn_possible || !self.board.mark(index, role) {
            return None;
        }
        self.turn_possible = false;
        Some(ClientCommand::MoveId(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seated(role: Role) -> View {
        let mut view = View::default();
        view.apply(&ServerCommand::IdConfirm(1));
        view.apply(&ServerCommand::Role(role));
        view.apply(&ServerCommand::Opponent(2));
        view
    }

    #[test]
    fn starts_waiting() {
        let view = View::default();
        assert_eq!(view.status, WAITING_TEXT);
        assert!(!view.turn_possible);
        assert!(!view.finished);
    }

    #[test]
    fn turn_sets_status() {
        let mut view = seated(Role::X);
        view.apply(&ServerCommand::TurnPossible(true));
        assert_eq!(view.status, YOUR_TURN_TEXT);
        view.apply(&ServerCommand::TurnPossible(false));
        assert_eq!(view.status, THEIR_TURN_TEXT);
    }

    #[test]
    fn move_needs_turn_and_empty_cell() {
        let mut view = seated(Role::O);
        assert_eq!(view.make_move(0), None);
        view.apply(&ServerCommand::TurnPossible(true));
        view.apply(&ServerCommand::MoveId(4));
        assert_eq!(view.board.get(4), Some(Role::X));
        assert_eq!(view.make_move(4), None);
        assert_eq!(view.make_move(0), Some(ClientCommand::MoveId(0)));
        assert_eq!(view.board.get(0), Some(Role::O));
        assert!(!view.turn_possible);
        assert_eq!(view.make_move(1), None);
    }

    #[test]
    fn result_finishes() {
        let mut view = seated(Role::X);
        view.apply(&ServerCommand::GameResult("You win!".into()));
        assert!(view.finished);
        assert_eq!(view.status, "You win!");
        assert_eq!(view.opponent, None);
    }

    #[test]
    fn quit_resets_game() {
        let mut view = seated(Role::X);
        view.apply(&ServerCommand::Board(Board::try_from("X   O    ").unwrap()));
        view.apply(&ServerCommand::TurnPossible(true));
        view.apply(&ServerCommand::Quit);
        assert!(view.finished);
        assert_eq!(view.status, LEFT_TEXT);
        assert_eq!(view.id, Some(1));
        assert_eq!(view.role, None);
        assert_eq!(view.board, Board::default());
        assert!(!view.turn_possible);
    }
}
