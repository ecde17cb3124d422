use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use ttt_core::DEFAULT_BIND;
use ttt_core::POLL_INTERVAL;
use ttt_gameroom::Opening;

/// Server settings, from flags with environment fallbacks.
#[derive(Debug, Clone, Parser)]
#[command(name = "server", version, about = "Tic-tac-toe game server", long_about = None)]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = DEFAULT_BIND)]
    pub bind: String,
    /// PEM certificate chain presented to clients.
    #[arg(long, env = "SERVER_CERT", default_value = "cert/server.cert")]
    pub cert: PathBuf,
    /// PEM private key for the certificate.
    #[arg(long, env = "SERVER_KEY", default_value = "cert/server.key")]
    pub key: PathBuf,
    /// PEM certificate(s) client certificates must chain to.
    #[arg(long, env = "CLIENT_CA", default_value = "cert/client.cert")]
    pub client_ca: PathBuf,
    /// Serve plain TCP without TLS.
    #[arg(long)]
    pub insecure: bool,
    /// Milliseconds between waiting-pool scans.
    #[arg(long, default_value_t = POLL_INTERVAL.as_millis() as u64)]
    pub poll_ms: u64,
    /// Seconds a player may take to move before being dropped.
    #[arg(long)]
    pub move_timeout: Option<u64>,
    /// X moves first instead of the player that claimed the pairing.
    #[arg(long)]
    pub x_opens: bool,
}

impl Config {
    pub fn poll(&self) -> Duration {
        Duration::from_millis(self.poll_ms)
    }
    pub fn patience(&self) -> Option<Duration> {
        self.move_timeout.map(Duration::from_secs)
    }
    pub fn opening(&self) -> Opening {
        match self.x_opens {
            true => Opening::Cross,
            false => Opening::Caller,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            cert: PathBuf::from("cert/server.cert"),
            key: PathBuf::from("cert/server.key"),
            client_ca: PathBuf::from("cert/client.cert"),
            insecure: false,
            poll_ms: POLL_INTERVAL.as_millis() as u64,
            move_timeout: None,
            x_opens: false,
        }
    }
}
