//! Wire protocol between the tic-tac-toe server and its clients.
//!
//! Every message is one JSON object on one line:
//! `{"command": <string>, "message": <string, optional>}`.
//!
//! ## Framing
//!
//! - [`Envelope`] — One self-delimited command/payload unit
//! - [`Channel`] — Framed exchange over any [`Transport`], buffered on the
//!   [`Inbox`] side and flushed per envelope on the [`Outbox`] side
//!
//! ## Commands
//!
//! - [`ServerCommand`] — Closed set of server → client messages with typed payloads
//! - [`ClientCommand`] — Closed set of client → server messages
//!
//! ## Failure
//!
//! - [`Disconnect`] — Terminal channel state; every I/O or protocol failure lands here
//! - [`ProtocolError`] — Client-side decoding failures, which are tolerated
//!
//! ## Security
//!
//! - [`tls`] — Mutually authenticated TLS acceptor/connector from PEM files
mod channel;
mod command;
mod envelope;
mod error;

pub mod tls;

pub use channel::*;
pub use command::*;
pub use envelope::*;
pub use error::*;
