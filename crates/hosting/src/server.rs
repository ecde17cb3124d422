use super::*;
use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use tokio_rustls::TlsAcceptor;
use ttt_core::PlayerId;
use ttt_gameroom::Lobby;
use ttt_gameroom::Participant;
use ttt_gameroom::Session;
use ttt_wire::Channel;
use ttt_wire::ServerCommand;

/// Accepts connections and runs each one to the end of its game.
///
/// Identities are taken from one counter inside the accept loop, so they
/// follow connection order and never repeat. A connection that fails its
/// handshake still spends its id.
pub struct Server {
    config: Config,
    lobby: Lobby,
    tls: Option<TlsAcceptor>,
    counter: AtomicU64,
}

impl Server {
    /// Loads certificates unless running insecure.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let tls = match config.insecure {
            true => {
                log::warn!("serving without TLS");
                None
            }
            false => Some(ttt_wire::tls::acceptor(
                &config.cert,
                &config.key,
                &config.client_ca,
            )?),
        };
        Ok(Self {
            lobby: Lobby::new(config.poll()),
            counter: AtomicU64::new(1),
            tls,
            config,
        })
    }
    pub async fn listen(&self) -> anyhow::Result<TcpListener> {
        TcpListener::bind(&self.config.bind)
            .await
            .with_context(|| format!("bind {}", self.config.bind))
    }
    /// Binds, then serves until the listener fails.
    pub async fn run(self) -> anyhow::Result<()> {
        let listener = self.listen().await?;
        Arc::new(self).serve(listener).await
    }
    /// Accept loop. Only a listener failure returns; per-connection
    /// failures stay inside their own task.
    pub async fn serve(self: Arc<Self>, listener: TcpListener) -> anyhow::Result<()> {
        log::info!("Server started on {}", listener.local_addr()?);
        loop {
            let (stream, addr) = listener.accept().await.context("accept")?;
            let id = self.counter.fetch_add(1, Ordering::Relaxed);
            log::info!("{} connected as player {}", addr, id);
            tokio::spawn(self.clone().handle(stream, addr, id));
        }
    }
}

impl Server {
    async fn handle(self: Arc<Self>, stream: TcpStream, addr: SocketAddr, id: PlayerId) {
        let Some(channel) = self.secure(stream, addr).await else {
            return;
        };
        let mut participant = Participant::new(id, channel).with_patience(self.config.patience());
        if participant.send(ServerCommand::IdConfirm(id)).await.is_err() {
            return;
        }
        self.lobby.enqueue(participant).await;
        if let Some((caller, partner)) = self.lobby.seek(id).await {
            self.host(caller, partner).await;
        }
    }
    async fn secure(&self, stream: TcpStream, addr: SocketAddr) -> Option<Channel> {
        match &self.tls {
            None => Some(Channel::new(stream)),
            Some(tls) => tls
                .accept(stream)
                .await
                .inspect_err(|e| log::warn!("{} handshake failed: {}", addr, e))
                .ok()
                .map(Channel::new),
        }
    }
    /// Runs the game on its own task so a panic ends that game alone.
    async fn host(&self, caller: Participant, partner: Participant) {
        let ids: [PlayerId; 2] = [caller.id(), partner.id()];
        let session = Session::new(caller, partner, self.config.opening(), &mut rand::rng());
        if let Err(e) = tokio::spawn(session.run()).await {
            log::error!("Game {} vs {} finished by error: {}", ids[0], ids[1], e);
        }
    }
}
