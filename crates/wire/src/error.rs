/// Terminal state of a channel.
///
/// A disconnect is not retried or recovered from. Whoever observes it ends
/// the exchange it was part of, and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disconnect {
    /// Peer closed the stream, possibly mid-envelope.
    Closed,
    /// Transport failure (reset, abort, broken pipe, ...).
    Io(std::io::ErrorKind),
    /// Bytes that are not a valid envelope or payload.
    Malformed(String),
    /// A line longer than the envelope limit.
    Oversized,
    /// A well-formed envelope carrying the wrong command.
    Unexpected { expected: String, found: String },
    /// Peer announced a voluntary disconnect.
    Exit,
    /// Peer stayed silent past its deadline.
    Timeout,
}

impl From<std::io::Error> for Disconnect {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Self::Closed,
            std::io::ErrorKind::InvalidData => Self::Malformed(e.to_string()),
            kind => Self::Io(kind),
        }
    }
}

impl std::fmt::Display for Disconnect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closed => write!(f, "connection closed"),
            Self::Io(kind) => write!(f, "transport failure: {}", kind),
            Self::Malformed(s) => write!(f, "malformed message: {}", s),
            Self::Oversized => write!(f, "message exceeds {} bytes", ttt_core::MAX_ENVELOPE),
            Self::Unexpected { expected, found } => {
                write!(f, "expected {} but received {}", expected, found)
            }
            Self::Exit => write!(f, "peer exited"),
            Self::Timeout => write!(f, "peer timed out"),
        }
    }
}

impl std::error::Error for Disconnect {}

/// Errors decoding a server envelope on the client side.
/// These are logged and skipped, unlike the server's strict handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    UnknownCommand(String),
    InvalidPayload {
        command: String,
        message: Option<String>,
    },
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand(s) => write!(f, "unknown command '{}'", s),
            Self::InvalidPayload { command, message } => {
                write!(f, "invalid payload for {}: {:?}", command, message)
            }
        }
    }
}

impl std::error::Error for ProtocolError {}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn io_errors_become_disconnects() {
        use std::io::Error;
        use std::io::ErrorKind;
        assert_eq!(Disconnect::from(Error::from(ErrorKind::UnexpectedEof)), Disconnect::Closed);
        assert_eq!(
            Disconnect::from(Error::from(ErrorKind::ConnectionReset)),
            Disconnect::Io(ErrorKind::ConnectionReset)
        );
        assert!(matches!(
            Disconnect::from(Error::new(ErrorKind::InvalidData, "bad utf-8")),
            Disconnect::Malformed(_)
        ));
    }
}
