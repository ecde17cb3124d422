use super::*;
use rand::Rng;
use ttt_board::Board;
use ttt_board::Outcome;
use ttt_board::Role;
use ttt_core::DRAW_TEXT;
use ttt_core::LOSE_TEXT;
use ttt_core::PlayerId;
use ttt_core::WIN_TEXT;
use ttt_wire::ServerCommand;

/// Who takes the first turn of a session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Opening {
    /// The participant that claimed the pairing, whatever symbol it drew.
    #[default]
    Caller,
    /// Whoever drew X.
    Cross,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conclusion {
    Win { winner: PlayerId, loser: PlayerId },
    Draw,
    Abandoned { by: PlayerId },
}

impl std::fmt::Display for Conclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Win { winner, .. } => write!(f, "{} victory", winner),
            Self::Draw => write!(f, "a draw"),
            Self::Abandoned { by } => write!(f, "{} leaving", by),
        }
    }
}

/// One game between two participants, driven to completion by a single task.
///
/// Each turn broadcasts the board, grants the turn to the mover, waits for
/// its move, echoes the move to the other side, then evaluates. An
/// occupied cell still spends the turn. The first disconnect on either
/// side ends the session and the survivor is told to quit.
pub struct Session {
    seats: [Participant; 2],
    roles: [Role; 2],
    board: Board,
    mover: usize,
}

impl Session {
    /// Draws the caller's symbol uniformly; the partner takes the other.
    pub fn new<R>(caller: Participant, partner: Participant, opening: Opening, rng: &mut R) -> Self
    where
        R: Rng,
    {
        let drawn = rng.random::<Role>();
        let roles = [drawn, drawn.opponent()];
        let mut seats = [caller, partner];
        let ids = [seats[0].id(), seats[1].id()];
        seats[0].pair(roles[0], ids[1]);
        seats[1].pair(roles[1], ids[0]);
        let mover = match opening {
            Opening::Caller => 0,
            Opening::Cross => roles.iter().position(|r| *r == Role::X).unwrap_or(0),
        };
        Self {
            seats,
            roles,
            board: Board::default(),
            mover,
        }
    }
    /// Symbol held by participant `id` in this session.
    pub fn role_of(&self, id: PlayerId) -> Option<Role> {
        self.seats
            .iter()
            .position(|p| p.id() == id)
            .map(|i| self.roles[i])
    }
    /// Participant currently holding the turn.
    pub fn mover(&self) -> PlayerId {
        self.seats[self.mover].id()
    }
    /// X first, then O.
    fn lineup(&self) -> (PlayerId, PlayerId) {
        match self.roles[0] {
            Role::X => (self.seats[0].id(), self.seats[1].id()),
            Role::O => (self.seats[1].id(), self.seats[0].id()),
        }
    }
}

impl Session {
    pub async fn run(mut self) -> Conclusion {
        let (x, o) = self.lineup();
        log::info!("Game {} vs {} started", x, o);
        let conclusion = match self.play().await {
            Ok(conclusion) => conclusion,
            Err(abort) => self.abandon(abort).await,
        };
        log::info!("Game {} vs {} finished by {}", x, o, conclusion);
        for mut seat in self.seats {
            seat.unpair();
            seat.close().await;
        }
        conclusion
    }
    async fn play(&mut self) -> Result<Conclusion, Abort> {
        for seat in self.seats.iter_mut() {
            seat.send_personal_info().await?;
        }
        loop {
            let role = self.roles[self.mover];
            self.turn(role).await?;
            let outcome = self.board.evaluate(role);
            if outcome.is_terminal() {
                return self.announce(outcome).await;
            }
            self.mover = 1 - self.mover;
        }
    }
    async fn turn(&mut self, role: Role) -> Result<(), Abort> {
        let [a, b] = &mut self.seats;
        let (mover, other) = match self.mover {
            0 => (a, b),
            _ => (b, a),
        };
        mover.send(ServerCommand::Board(self.board)).await?;
        other.send(ServerCommand::Board(self.board)).await?;
        mover.send(ServerCommand::TurnPossible(true)).await?;
        other.send(ServerCommand::TurnPossible(false)).await?;
        let index = mover.receive_move().await?;
        other.send(ServerCommand::MoveId(index)).await?;
        if !self.board.mark(index, role) {
            log::debug!("[game] player {} played taken cell {}", mover.id(), index);
        }
        Ok(())
    }
    async fn announce(&mut self, outcome: Outcome) -> Result<Conclusion, Abort> {
        let [a, b] = &mut self.seats;
        let (mover, other) = match self.mover {
            0 => (a, b),
            _ => (b, a),
        };
        mover.send(ServerCommand::Board(self.board)).await?;
        other.send(ServerCommand::Board(self.board)).await?;
        match outcome.winner() {
            Some(_) => {
                mover.send(ServerCommand::GameResult(WIN_TEXT.into())).await?;
                other.send(ServerCommand::GameResult(LOSE_TEXT.into())).await?;
                Ok(Conclusion::Win {
                    winner: mover.id(),
                    loser: other.id(),
                })
            }
            None => {
                mover.send(ServerCommand::GameResult(DRAW_TEXT.into())).await?;
                other.send(ServerCommand::GameResult(DRAW_TEXT.into())).await?;
                Ok(Conclusion::Draw)
            }
        }
    }
    /// The survivor hears `quit` and nothing else.
    async fn abandon(&mut self, abort: Abort) -> Conclusion {
        log::debug!("[game] {}", abort);
        for seat in self.seats.iter_mut().filter(|p| p.id() != abort.id) {
            seat.quit().await;
        }
        Conclusion::Abandoned { by: abort.id }
    }
}
