use super::*;
use ttt_board::Board;
use ttt_board::Role;
use ttt_core::CELLS;
use ttt_core::Index;
use ttt_core::PlayerId;

pub const ID_CONFIRM: &str = "id_confirm";
pub const ROLE: &str = "role";
pub const OPPONENT: &str = "opponent";
pub const BOARD: &str = "board";
pub const TURN_POSSIBLE: &str = "turn_possible";
pub const MOVE_ID: &str = "move_id";
pub const GAME_RESULT: &str = "game_result";
pub const QUIT: &str = "quit";
pub const EXIT: &str = "exit";

/// Messages sent from server to client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ServerCommand {
    /// Identity assigned at registration.
    IdConfirm(PlayerId),
    /// Symbol drawn for this game.
    Role(Role),
    /// Identity of the paired opponent.
    Opponent(PlayerId),
    /// Full board snapshot.
    Board(Board),
    /// Whether the recipient holds the turn.
    TurnPossible(bool),
    /// The cell the opponent just played, echoed verbatim.
    MoveId(Index),
    /// Free-text verdict at game end.
    GameResult(String),
    /// The opponent is gone; the game is over.
    Quit,
}

impl ServerCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::IdConfirm(_) => ID_CONFIRM,
            Self::Role(_) => ROLE,
            Self::Opponent(_) => OPPONENT,
            Self::Board(_) => BOARD,
            Self::TurnPossible(_) => TURN_POSSIBLE,
            Self::MoveId(_) => MOVE_ID,
            Self::GameResult(_) => GAME_RESULT,
            Self::Quit => QUIT,
        }
    }
}

impl From<&ServerCommand> for Envelope {
    fn from(cmd: &ServerCommand) -> Self {
        let name = cmd.name();
        match cmd {
            ServerCommand::IdConfirm(id) => Envelope::new(name, id.to_string()),
            ServerCommand::Role(role) => Envelope::new(name, role.to_string()),
            ServerCommand::Opponent(id) => Envelope::new(name, id.to_string()),
            ServerCommand::Board(board) => Envelope::new(name, board.to_string()),
            ServerCommand::TurnPossible(b) => Envelope::new(name, b.to_string()),
            ServerCommand::MoveId(i) => Envelope::new(name, i.to_string()),
            ServerCommand::GameResult(text) => Envelope::new(name, text.as_str()),
            ServerCommand::Quit => Envelope::new(name, ""),
        }
    }
}

impl TryFrom<Envelope> for ServerCommand {
    type Error = ProtocolError;
    fn try_from(e: Envelope) -> Result<Self, Self::Error> {
        let payload = e.payload();
        let parsed = match e.command.as_str() {
            ID_CONFIRM => payload.parse().ok().map(Self::IdConfirm),
            ROLE => Role::try_from(payload).ok().map(Self::Role),
            OPPONENT => payload.parse().ok().map(Self::Opponent),
            BOARD => Board::try_from(payload).ok().map(Self::Board),
            TURN_POSSIBLE => Some(Self::TurnPossible(payload == "true")),
            MOVE_ID => parse_index(payload).map(Self::MoveId),
            GAME_RESULT => Some(Self::GameResult(payload.to_string())),
            QUIT => Some(Self::Quit),
            other => return Err(ProtocolError::UnknownCommand(other.to_string())),
        };
        parsed.ok_or_else(|| ProtocolError::InvalidPayload {
            command: e.command.clone(),
            message: e.message.clone(),
        })
    }
}

/// Messages sent from client to server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientCommand {
    /// The cell the mover plays.
    MoveId(Index),
    /// Voluntary disconnect.
    Exit,
}

impl ClientCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::MoveId(_) => MOVE_ID,
            Self::Exit => EXIT,
        }
    }
}

impl From<&ClientCommand> for Envelope {
    fn from(cmd: &ClientCommand) -> Self {
        match cmd {
            ClientCommand::MoveId(i) => Envelope::new(MOVE_ID, i.to_string()),
            ClientCommand::Exit => Envelope::bare(EXIT),
        }
    }
}

/// A cell index on the wire: decimal digits naming a cell in 0..9.
pub fn parse_index(s: &str) -> Option<Index> {
    s.trim().parse::<Index>().ok().filter(|i| *i < CELLS)
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn server_payloads() {
        let board = Board::try_from("XO       ").unwrap();
        let cases = [
            (ServerCommand::IdConfirm(7), "id_confirm", "7"),
            (ServerCommand::Role(Role::O), "role", "O"),
            (ServerCommand::Opponent(3), "opponent", "3"),
            (ServerCommand::Board(board), "board", "XO       "),
            (ServerCommand::TurnPossible(false), "turn_possible", "false"),
            (ServerCommand::MoveId(8), "move_id", "8"),
            (ServerCommand::GameResult("You lose".into()), "game_result", "You lose"),
            (ServerCommand::Quit, "quit", ""),
        ];
        for (cmd, name, payload) in cases {
            let envelope = Envelope::from(&cmd);
            assert_eq!(envelope, Envelope::new(name, payload));
            assert_eq!(ServerCommand::try_from(envelope), Ok(cmd));
        }
    }
    #[test]
    fn unknown_server_command() {
        assert_eq!(
            ServerCommand::try_from(Envelope::new("chat", "hi")),
            Err(ProtocolError::UnknownCommand("chat".into()))
        );
    }
    #[test]
    fn invalid_server_payload() {
        assert!(matches!(
            ServerCommand::try_from(Envelope::new("role", "Z")),
            Err(ProtocolError::InvalidPayload { .. })
        ));
        assert!(matches!(
            ServerCommand::try_from(Envelope::new("move_id", "9")),
            Err(ProtocolError::InvalidPayload { .. })
        ));
    }
    #[test]
    fn client_envelopes() {
        assert_eq!(Envelope::from(&ClientCommand::MoveId(4)), Envelope::new("move_id", "4"));
        assert_eq!(Envelope::from(&ClientCommand::Exit), Envelope::bare("exit"));
    }
    #[test]
    fn index_bounds() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index(" 8 "), Some(8));
        assert_eq!(parse_index("9"), None);
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index("four"), None);
    }
}
