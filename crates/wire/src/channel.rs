use super::*;
use std::pin::Pin;
use std::task::Poll;
use tokio::io::AsyncBufRead;
use tokio::io::AsyncBufReadExt;
use tokio::io::AsyncRead;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWrite;
use tokio::io::AsyncWriteExt;
use tokio::io::BufReader;
use tokio::io::ReadHalf;
use tokio::io::WriteHalf;
use ttt_core::MAX_ENVELOPE;

/// Any reliable ordered byte stream: plain TCP, TLS over TCP, or an
/// in-memory duplex in tests.
pub trait Transport: AsyncRead + AsyncWrite + Unpin + Send {}
impl<T> Transport for T where T: AsyncRead + AsyncWrite + Unpin + Send {}

type Stream = Box<dyn Transport>;

/// Framed envelope exchange over a [`Transport`].
///
/// Reads are buffered, so several envelopes arriving in one segment come
/// out one per `recv` with no bytes lost or spliced.
pub struct Channel {
    inbox: Inbox,
    outbox: Outbox,
}

impl Channel {
    pub fn new<T>(stream: T) -> Self
    where
        T: Transport + 'static,
    {
        let (reader, writer) = tokio::io::split(Box::new(stream) as Stream);
        Self {
            inbox: Inbox {
                reader: BufReader::new(reader),
            },
            outbox: Outbox { writer },
        }
    }
    pub async fn send(&mut self, envelope: &Envelope) -> Result<(), Disconnect> {
        self.outbox.send(envelope).await
    }
    pub async fn recv(&mut self) -> Result<Envelope, Disconnect> {
        self.inbox.recv().await
    }
    pub async fn expect(&mut self, command: &str) -> Result<String, Disconnect> {
        self.inbox.expect(command).await
    }
    /// Whether the peer has hung up, checked without waiting.
    pub async fn is_closed(&mut self) -> bool {
        self.inbox.is_closed().await
    }
    pub async fn close(&mut self) {
        self.outbox.close().await
    }
}

/// Read half of a [`Channel`].
pub struct Inbox {
    reader: BufReader<ReadHalf<Stream>>,
}

impl Inbox {
    /// Polls the reader once. Bytes already sent stay buffered for the
    /// next `recv`; only end of stream or a read error count as closed.
    pub async fn is_closed(&mut self) -> bool {
        std::future::poll_fn(|cx| match Pin::new(&mut self.reader).poll_fill_buf(cx) {
            Poll::Ready(Ok(buffered)) => Poll::Ready(buffered.is_empty()),
            Poll::Ready(Err(_)) => Poll::Ready(true),
            Poll::Pending => Poll::Ready(false),
        })
        .await
    }
    /// Reads exactly one envelope.
    pub async fn recv(&mut self) -> Result<Envelope, Disconnect> {
        let mut line = String::new();
        let n = (&mut self.reader)
            .take(MAX_ENVELOPE as u64)
            .read_line(&mut line)
            .await?;
        match (n, line.ends_with('\n')) {
            (0, _) => Err(Disconnect::Closed),
            (_, true) => Envelope::decode(&line),
            (n, false) if n >= MAX_ENVELOPE => Err(Disconnect::Oversized),
            (_, false) => Err(Disconnect::Closed),
        }
    }
    /// Reads one envelope and returns its payload, provided it carries
    /// `command`. Anything else, including `exit`, ends the channel.
    pub async fn expect(&mut self, command: &str) -> Result<String, Disconnect> {
        let envelope = self.recv().await?;
        match envelope.command.as_str() {
            EXIT => Err(Disconnect::Exit),
            found if found != command => Err(Disconnect::Unexpected {
                expected: command.to_string(),
                found: found.to_string(),
            }),
            _ => Ok(envelope.message.unwrap_or_default()),
        }
    }
}

/// Write half of a [`Channel`].
pub struct Outbox {
    writer: WriteHalf<Stream>,
}

impl Outbox {
    /// Writes one envelope and flushes it in full.
    pub async fn send(&mut self, envelope: &Envelope) -> Result<(), Disconnect> {
        self.writer.write_all(envelope.encode().as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }
    /// Best-effort shutdown of the write direction.
    pub async fn close(&mut self) {
        if let Err(e) = self.writer.shutdown().await {
            log::debug!("shutdown failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::duplex;

    #[tokio::test]
    async fn two_envelopes_in_one_write() {
        let (near, mut far) = duplex(1024);
        let mut channel = Channel::new(near);
        let bytes = format!(
            "{}{}",
            Envelope::new("board", "X        ").encode(),
            Envelope::new("turn_possible", "true").encode()
        );
        far.write_all(bytes.as_bytes()).await.unwrap();
        assert_eq!(channel.recv().await, Ok(Envelope::new("board", "X        ")));
        assert_eq!(channel.recv().await, Ok(Envelope::new("turn_possible", "true")));
    }

    #[tokio::test]
    async fn envelope_split_across_writes() {
        let (near, mut far) = duplex(1024);
        let mut channel = Channel::new(near);
        let line = Envelope::new("move_id", "4").encode();
        let (head, tail) = line.split_at(7);
        far.write_all(head.as_bytes()).await.unwrap();
        far.flush().await.unwrap();
        let pending = tokio::spawn(async move {
            let got = channel.recv().await;
            (channel, got)
        });
        far.write_all(tail.as_bytes()).await.unwrap();
        let (_, got) = pending.await.unwrap();
        assert_eq!(got, Ok(Envelope::new("move_id", "4")));
    }

    #[tokio::test]
    async fn send_then_receive_across_duplex() {
        let (near, far) = duplex(1024);
        let mut a = Channel::new(near);
        let mut b = Channel::new(far);
        a.send(&Envelope::new("id_confirm", "1")).await.unwrap();
        a.send(&Envelope::new("role", "X")).await.unwrap();
        assert_eq!(b.expect("id_confirm").await, Ok("1".to_string()));
        assert_eq!(b.expect("role").await, Ok("X".to_string()));
    }

    #[tokio::test]
    async fn expect_rejects_other_commands() {
        let (near, mut far) = duplex(1024);
        let mut channel = Channel::new(near);
        far.write_all(Envelope::new("board", "         ").encode().as_bytes())
            .await
            .unwrap();
        assert_eq!(
            channel.expect("move_id").await,
            Err(Disconnect::Unexpected {
                expected: "move_id".into(),
                found: "board".into()
            })
        );
    }

    #[tokio::test]
    async fn expect_treats_exit_as_disconnect() {
        let (near, mut far) = duplex(1024);
        let mut channel = Channel::new(near);
        far.write_all(Envelope::bare("exit").encode().as_bytes())
            .await
            .unwrap();
        assert_eq!(channel.expect("exit").await, Err(Disconnect::Exit));
    }

    #[tokio::test]
    async fn eof_is_closed() {
        let (near, mut far) = duplex(1024);
        let mut channel = Channel::new(near);
        far.write_all(b"{\"command\":\"mov").await.unwrap();
        drop(far);
        assert_eq!(channel.recv().await, Err(Disconnect::Closed));
        assert_eq!(channel.recv().await, Err(Disconnect::Closed));
    }

    #[tokio::test]
    async fn hangup_is_seen_without_reading() {
        let (near, far) = duplex(1024);
        let mut channel = Channel::new(near);
        let mut far = Channel::new(far);
        assert!(!channel.is_closed().await);
        far.send(&Envelope::bare("exit")).await.unwrap();
        far.close().await;
        assert!(!channel.is_closed().await);
        assert_eq!(channel.recv().await, Ok(Envelope::bare("exit")));
        assert!(channel.is_closed().await);
    }

    #[tokio::test]
    async fn oversized_line() {
        let (near, mut far) = duplex(2 * MAX_ENVELOPE);
        let mut channel = Channel::new(near);
        far.write_all(&vec![b'a'; MAX_ENVELOPE + 10]).await.unwrap();
        assert_eq!(channel.recv().await, Err(Disconnect::Oversized));
    }

    #[tokio::test]
    async fn send_to_dropped_peer_fails() {
        let (near, far) = duplex(64);
        let mut channel = Channel::new(near);
        drop(far);
        assert!(matches!(
            channel.send(&Envelope::new("quit", "")).await,
            Err(Disconnect::Io(_))
        ));
    }
}
