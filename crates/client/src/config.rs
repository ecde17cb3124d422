use clap::Parser;
use std::path::PathBuf;
use ttt_core::DEFAULT_DOMAIN;
use ttt_core::DEFAULT_SERVER;

/// Client settings, from flags with environment fallbacks.
#[derive(Debug, Clone, Parser)]
#[command(name = "client", version, about = "Tic-tac-toe client", long_about = None)]
pub struct Config {
    /// Server address to dial.
    #[arg(long, env = "SERVER_ADDR", default_value = DEFAULT_SERVER)]
    pub server: String,
    /// Name the server certificate must be valid for.
    #[arg(long, env = "SERVER_DOMAIN", default_value = DEFAULT_DOMAIN)]
    pub domain: String,
    /// PEM certificate chain presented to the server.
    #[arg(long, env = "CLIENT_CERT", default_value = "cert/client.cert")]
    pub cert: PathBuf,
    /// PEM private key for the certificate.
    #[arg(long, env = "CLIENT_KEY", default_value = "cert/client.key")]
    pub key: PathBuf,
    /// PEM certificate(s) the server certificate must chain to.
    #[arg(long, env = "SERVER_CA", default_value = "cert/server.cert")]
    pub server_ca: PathBuf,
    /// Connect over plain TCP without TLS.
    #[arg(long)]
    pub insecure: bool,
    /// Let the computer play random moves.
    #[arg(long)]
    pub cpu: bool,
    /// Games to play before exiting. Without it a human is asked after
    /// each game and the computer plays once.
    #[arg(long)]
    pub rounds: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            domain: DEFAULT_DOMAIN.to_string(),
            cert: PathBuf::from("cert/client.cert"),
            key: PathBuf::from("cert/client.key"),
            server_ca: PathBuf::from("cert/server.cert"),
            insecure: false,
            cpu: false,
            rounds: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = Config::parse_from([
            "client",
            "--server",
            "10.0.0.2:30000",
            "--domain",
            "ttt.example",
            "--insecure",
            "--cpu",
            "--rounds",
            "3",
        ]);
        assert_eq!(config.server, "10.0.0.2:30000");
        assert_eq!(config.domain, "ttt.example");
        assert!(config.insecure && config.cpu);
        assert_eq!(config.rounds, Some(3));
        assert_eq!(config.server_ca, PathBuf::from("cert/server.cert"));
    }
}
