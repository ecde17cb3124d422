use ttt_board::Role;
use ttt_core::Index;
use ttt_core::PlayerId;
use ttt_wire::Channel;
use ttt_wire::Disconnect;
use ttt_wire::Envelope;
use ttt_wire::MOVE_ID;
use ttt_wire::ServerCommand;
use std::time::Duration;

/// A participant dropped out of its game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Abort {
    pub id: PlayerId,
    pub reason: Disconnect,
}

impl std::fmt::Display for Abort {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "player {} left: {}", self.id, self.reason)
    }
}

impl std::error::Error for Abort {}

/// One connected client as seen by the server.
///
/// Identity is fixed at registration. Role and opponent are set when a
/// session pairs this participant and cleared when it ends. The first
/// failed read or write marks the participant gone; every later send or
/// receive fails fast without touching the channel.
pub struct Participant {
    id: PlayerId,
    role: Option<Role>,
    opponent: Option<PlayerId>,
    channel: Channel,
    patience: Option<Duration>,
    gone: bool,
}

impl Participant {
    pub fn new(id: PlayerId, channel: Channel) -> Self {
        Self {
            id,
            role: None,
            opponent: None,
            channel,
            patience: None,
            gone: false,
        }
    }
    /// Upper bound on how long this participant may take to move.
    pub fn with_patience(mut self, patience: Option<Duration>) -> Self {
        self.patience = patience;
        self
    }
    pub fn id(&self) -> PlayerId {
        self.id
    }
    pub fn role(&self) -> Option<Role> {
        self.role
    }
    pub fn opponent(&self) -> Option<PlayerId> {
        self.opponent
    }
    pub fn is_gone(&self) -> bool {
        self.gone
    }
    pub fn is_paired(&self) -> bool {
        self.opponent.is_some()
    }
}

impl Participant {
    pub fn pair(&mut self, role: Role, opponent: PlayerId) {
        self.role = Some(role);
        self.opponent = Some(opponent);
    }
    pub fn unpair(&mut self) {
        self.role = None;
        self.opponent = None;
    }
}

impl Participant {
    pub async fn send(&mut self, command: ServerCommand) -> Result<(), Abort> {
        if self.gone {
            return Err(self.abort(Disconnect::Closed));
        }
        log::debug!("[player {}] <- {:?}", self.id, command);
        match self.channel.send(&Envelope::from(&command)).await {
            Ok(()) => Ok(()),
            Err(reason) => Err(self.disconnect(reason)),
        }
    }
    /// Waits for one `move_id` and parses its cell index.
    /// A payload that is not a cell on the board counts as malformed.
    pub async fn receive_move(&mut self) -> Result<Index, Abort> {
        if self.gone {
            return Err(self.abort(Disconnect::Closed));
        }
        let received = match self.patience {
            Some(patience) => tokio::time::timeout(patience, self.channel.expect(MOVE_ID))
                .await
                .unwrap_or(Err(Disconnect::Timeout)),
            None => self.channel.expect(MOVE_ID).await,
        };
        match received.map(|text| (ttt_wire::parse_index(&text), text)) {
            Ok((Some(index), _)) => {
                log::debug!("[player {}] -> move {}", self.id, index);
                Ok(index)
            }
            Ok((None, text)) => Err(self.disconnect(Disconnect::Malformed(format!(
                "not a cell: {:?}",
                text
            )))),
            Err(reason) => Err(self.disconnect(reason)),
        }
    }
    /// Tells the participant its role, then who it plays against.
    pub async fn send_personal_info(&mut self) -> Result<(), Abort> {
        match (self.role, self.opponent) {
            (Some(role), Some(opponent)) => {
                self.send(ServerCommand::Role(role)).await?;
                self.send(ServerCommand::Opponent(opponent)).await
            }
            _ => {
                log::warn!("[player {}] personal info requested while unpaired", self.id);
                Ok(())
            }
        }
    }
    /// Best-effort notice that the opponent is gone.
    pub async fn quit(&mut self) {
        if let Err(abort) = self.send(ServerCommand::Quit).await {
            log::debug!("[player {}] quit notice not delivered: {}", self.id, abort);
        }
    }
    /// Shuts down the write side and releases the connection.
    pub async fn close(mut self) {
        if !self.gone {
            self.channel.close().await;
        }
    }
}

impl Participant {
    /// Checks, without waiting, that the client is still connected.
    /// A hang-up marks the participant gone.
    pub async fn is_alive(&mut self) -> bool {
        if !self.gone && self.channel.is_closed().await {
            self.disconnect(Disconnect::Closed);
        }
        !self.gone
    }
    /// Marks this participant gone. Logs only on the first call.
    pub fn disconnect(&mut self, reason: Disconnect) -> Abort {
        if !self.gone {
            self.gone = true;
            log::info!("Player {} disconnected ({})", self.id, reason);
        }
        self.abort(reason)
    }
    fn abort(&self, reason: Disconnect) -> Abort {
        Abort {
            id: self.id,
            reason,
        }
    }
}
