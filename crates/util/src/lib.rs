//! Core type aliases, constants, and runtime utilities for networked tic-tac-toe.
//!
//! This crate provides the foundational types and protocol parameters
//! shared by the server, the client, and the game logic crates.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Connection identity, handed out sequentially from 1 as clients register.
pub type PlayerId = u64;
/// Board cell index in row-major order (0..9).
pub type Index = usize;

// ============================================================================
// BOARD GEOMETRY
// ============================================================================
/// Number of cells on the board.
pub const CELLS: usize = 9;

// ============================================================================
// NETWORKING
// ============================================================================
/// Default server listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1:30000";
/// Default address clients dial.
pub const DEFAULT_SERVER: &str = "localhost:30000";
/// Default TLS server name presented by clients.
pub const DEFAULT_DOMAIN: &str = "localhost";
/// Upper bound on a single newline-terminated envelope, terminator included.
/// Real envelopes are well under 100 bytes.
pub const MAX_ENVELOPE: usize = 4096;
/// Interval between matchmaking scans while a participant waits for a partner.
pub const POLL_INTERVAL: std::time::Duration = std::time::Duration::from_secs(1);
/// Interval between connection attempts while the server is not up yet.
pub const RETRY_INTERVAL: std::time::Duration = std::time::Duration::from_secs(1);

// ============================================================================
// RESULT TEXT
// ============================================================================
/// `game_result` payload sent to both players on a full board.
pub const DRAW_TEXT: &str = "It's a draw";
/// `game_result` payload sent to the winner.
pub const WIN_TEXT: &str = "You win!";
/// `game_result` payload sent to the loser.
pub const LOSE_TEXT: &str = "You lose";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Log file for the binary `name`, started `secs` after the epoch.
pub fn logfile(name: &str, secs: u64) -> std::path::PathBuf {
    std::path::Path::new("logs").join(format!("ttt-{}-{}.log", name, secs))
}

/// Initialize dual logging for the binary `name`: INFO to the terminal,
/// DEBUG to a fresh file under `logs/`. TLS library chatter is filtered out.
#[cfg(feature = "runtime")]
pub fn log(name: &str) {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let path = logfile(name, secs);
    std::fs::create_dir_all("logs").expect("create logs directory");
    let file = std::fs::File::create(&path).expect("create log file");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .add_filter_ignore_str("rustls")
        .build();
    simplelog::CombinedLogger::init(vec![
        simplelog::TermLogger::new(
            log::LevelFilter::Info,
            config.clone(),
            simplelog::TerminalMode::Mixed,
            simplelog::ColorChoice::Auto,
        ),
        simplelog::WriteLogger::new(log::LevelFilter::Debug, config, file),
    ])
    .expect("initialize logger");
    log::debug!("logging to {}", path.display());
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
/// Open games are torn down with the process; clients observe a closed stream.
#[cfg(feature = "runtime")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}
