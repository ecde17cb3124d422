//! Tic-tac-toe Client Binary
//!
//! Connects to SERVER_ADDR (default localhost:30000) and plays from the
//! terminal, or with `--cpu` lets random moves play.

use clap::Parser;
use ttt_client::Client;
use ttt_client::Config;
use ttt_client::Fish;
use ttt_client::Human;
use ttt_client::Seat;
use ttt_wire::Disconnect;

#[tokio::main]
async fn main() {
    ttt_core::log("client");
    ttt_core::kys();
    let config = Config::parse();
    let mut seat: Box<dyn Seat> = match config.cpu {
        true => Box::new(Fish),
        false => Box::new(Human),
    };
    for round in 1.. {
        let mut client = match Client::connect(&config).await {
            Ok(client) => client,
            Err(e) => {
                log::error!("{:#}", e);
                std::process::exit(1);
            }
        };
        match client.play(seat.as_mut()).await.map(|view| view.status.clone()) {
            Ok(status) => log::info!("{}", status),
            Err(Disconnect::Exit) => break,
            Err(e) => {
                log::error!("Disconnected from the server: {}", e);
                std::process::exit(1);
            }
        }
        client.close().await;
        let again = match config.rounds {
            Some(rounds) => round < rounds,
            None => !config.cpu && Human::rematch().await,
        };
        if !again {
            break;
        }
    }
}
