//! Tic-tac-toe Server Binary
//!
//! Accepts mutually authenticated TLS connections on BIND_ADDR
//! (default 127.0.0.1:30000) and pairs clients into games.

use clap::Parser;

#[tokio::main]
async fn main() {
    ttt_core::log("server");
    ttt_core::kys();
    let config = ttt_hosting::Config::parse();
    if let Err(e) = async { ttt_hosting::Server::new(config)?.run().await }.await {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
