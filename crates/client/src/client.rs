use super::*;
use anyhow::Context;
use std::io::ErrorKind;
use tokio::net::TcpStream;
use ttt_core::RETRY_INTERVAL;
use ttt_wire::Channel;
use ttt_wire::ClientCommand;
use ttt_wire::Disconnect;
use ttt_wire::Envelope;
use ttt_wire::ServerCommand;
use ttt_wire::tls;

/// One connection to the server and the game it carries.
pub struct Client {
    channel: Channel,
    view: View,
}

impl From<Channel> for Client {
    fn from(channel: Channel) -> Self {
        Self {
            channel,
            view: View::default(),
        }
    }
}

impl Client {
    /// Dials the server, waiting out refused connections, then performs
    /// the TLS handshake unless running insecure.
    pub async fn connect(config: &Config) -> anyhow::Result<Self> {
        let connector = match config.insecure {
            true => None,
            false => Some(tls::connector(&config.cert, &config.key, &config.server_ca)?),
        };
        let stream = Self::dial(&config.server).await?;
        match connector {
            None => Ok(Self::from(Channel::new(stream))),
            Some(connector) => connector
                .connect(tls::domain(&config.domain)?, stream)
                .await
                .with_context(|| format!("handshake with {}", config.domain))
                .map(Channel::new)
                .map(Self::from),
        }
    }
    async fn dial(addr: &str) -> anyhow::Result<TcpStream> {
        loop {
            match TcpStream::connect(addr).await {
                Ok(stream) => return Ok(stream),
                Err(e) if e.kind() == ErrorKind::ConnectionRefused => {
                    log::info!("Waiting for server to startup...");
                    tokio::time::sleep(RETRY_INTERVAL).await;
                }
                Err(e) => return Err(e).with_context(|| format!("connect {}", addr)),
            }
        }
    }
    pub fn view(&self) -> &View {
        &self.view
    }
}

impl Client {
    /// Next well-formed server command. Unknown commands and bad payloads
    /// are logged and skipped.
    pub async fn next(&mut self) -> Result<ServerCommand, Disconnect> {
        loop {
            match ServerCommand::try_from(self.channel.recv().await?) {
                Ok(command) => return Ok(command),
                Err(e) => log::warn!("ignoring server message: {}", e),
            }
        }
    }
    /// Plays until the game finishes, consulting `seat` on each turn.
    ///
    /// A seat that declines to move sends `exit` and ends the game with
    /// [`Disconnect::Exit`].
    pub async fn play<S>(&mut self, seat: &mut S) -> Result<&View, Disconnect>
    where
        S: Seat + ?Sized,
    {
        while !self.view.finished {
            let command = self.next().await?;
            log::debug!("[client] <- {:?}", command);
            self.view.apply(&command);
            seat.notify(&command).await;
            if command == ServerCommand::TurnPossible(true) {
                self.turn(seat).await?;
            }
        }
        Ok(&self.view)
    }
    async fn turn<S>(&mut self, seat: &mut S) -> Result<(), Disconnect>
    where
        S: Seat + ?Sized,
    {
        loop {
            let Some(index) = seat.decide(&self.view).await else {
                self.send(ClientCommand::Exit).await?;
                return Err(Disconnect::Exit);
            };
            match self.view.make_move(index) {
                Some(command) => return self.send(command).await,
                None => log::warn!("cell {} is not playable", index + 1),
            }
        }
    }
    async fn send(&mut self, command: ClientCommand) -> Result<(), Disconnect> {
        self.channel.send(&Envelope::from(&command)).await
    }
    /// Leaves politely: `exit` if a game is still running, then shutdown.
    pub async fn close(mut self) {
        if !self.view.finished {
            if let Err(e) = self.send(ClientCommand::Exit).await {
                log::debug!("exit not delivered: {}", e);
            }
        }
        self.channel.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::duplex;
    use ttt_board::Role;
    use ttt_core::Index;

    /// Plays a fixed list of cells, leaving once it runs out.
    struct Script(Vec<Index>);

    #[async_trait::async_trait]
    impl Seat for Script {
        async fn decide(&mut self, _: &View) -> Option<Index> {
            match self.0.is_empty() {
                true => None,
                false => Some(self.0.remove(0)),
            }
        }
        async fn notify(&mut self, _: &ServerCommand) {}
    }

    fn connected() -> (Client, Channel) {
        let (near, far) = duplex(4096);
        (Client::from(Channel::new(near)), Channel::new(far))
    }

    async fn push(far: &mut Channel, command: ServerCommand) {
        far.send(&Envelope::from(&command)).await.unwrap();
    }

    #[tokio::test]
    async fn plays_and_reads_result() {
        let (mut client, mut far) = connected();
        let server = tokio::spawn(async move {
            push(&mut far, ServerCommand::IdConfirm(1)).await;
            push(&mut far, ServerCommand::Role(Role::X)).await;
            push(&mut far, ServerCommand::Opponent(2)).await;
            push(&mut far, ServerCommand::TurnPossible(true)).await;
            let reply = far.recv().await.unwrap();
            push(&mut far, ServerCommand::GameResult("You win!".into())).await;
            reply
        });
        let view = client.play(&mut Script(vec![4])).await.unwrap().clone();
        assert_eq!(server.await.unwrap(), Envelope::new("move_id", "4"));
        assert_eq!(view.status, "You win!");
        assert_eq!(view.board.get(4), Some(Role::X));
        assert!(view.finished);
    }

    #[tokio::test]
    async fn unknown_commands_are_skipped() {
        let (mut client, mut far) = connected();
        far.send(&Envelope::new("chat", "hello")).await.unwrap();
        far.send(&Envelope::new("role", "Z")).await.unwrap();
        push(&mut far, ServerCommand::IdConfirm(5)).await;
        assert_eq!(client.next().await, Ok(ServerCommand::IdConfirm(5)));
    }

    #[tokio::test]
    async fn quit_ends_play() {
        let (mut client, mut far) = connected();
        push(&mut far, ServerCommand::IdConfirm(1)).await;
        push(&mut far, ServerCommand::Quit).await;
        let view = client.play(&mut Script(vec![])).await.unwrap();
        assert_eq!(view.status, LEFT_TEXT);
    }

    #[tokio::test]
    async fn declining_seat_sends_exit() {
        let (mut client, mut far) = connected();
        push(&mut far, ServerCommand::Role(Role::O)).await;
        push(&mut far, ServerCommand::TurnPossible(true)).await;
        assert_eq!(client.play(&mut Script(vec![])).await.unwrap_err(), Disconnect::Exit);
        assert_eq!(far.recv().await.unwrap(), Envelope::bare("exit"));
    }

    #[tokio::test]
    async fn server_hangup_is_closed() {
        let (mut client, far) = connected();
        drop(far);
        assert_eq!(client.play(&mut Script(vec![])).await.unwrap_err(), Disconnect::Closed);
    }
}
