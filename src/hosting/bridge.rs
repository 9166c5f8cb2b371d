use crate::duplex::Sink;
use crate::duplex::Source;
use futures::StreamExt;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

/// Websocket limits, injected per bridge rather than set process-wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Largest inbound frame, in bytes.
    pub max_frame: usize,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            max_frame: 64 * 1024,
        }
    }
}

/// What the writer task puts on the wire, in the order it was queued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Text(String),
    Close,
}

/// Splits an upgraded websocket into the two halves a session needs.
pub struct Bridge;

impl Bridge {
    /// Spawns the writer task and returns the read and write halves.
    /// The writer stops on the first failed send, after sending a close
    /// frame, or once every [`Outbound`] clone is gone.
    pub fn open(
        session: actix_ws::Session,
        stream: actix_ws::MessageStream,
        config: &BridgeConfig,
    ) -> (Inbound, Outbound) {
        let (tx, rx) = unbounded_channel::<Frame>();
        actix_web::rt::spawn(Self::pump(session.clone(), rx));
        let inbound = Inbound {
            session,
            stream: stream.max_frame_size(config.max_frame),
        };
        (inbound, Outbound::from(tx))
    }

    async fn pump(mut session: actix_ws::Session, mut rx: UnboundedReceiver<Frame>) {
        while let Some(frame) = rx.recv().await {
            match frame {
                Frame::Text(text) => {
                    if let Err(e) = session.text(text).await {
                        log::warn!("websocket write failed: {:?}", e);
                        return;
                    }
                }
                Frame::Close => {
                    session.close(None).await.ok();
                    return;
                }
            }
        }
    }
}

/// Read half: every text frame is one line.
pub struct Inbound {
    session: actix_ws::Session,
    stream: actix_ws::MessageStream,
}

#[async_trait::async_trait(?Send)]
impl Source for Inbound {
    async fn line(&mut self) -> String {
        loop {
            match self.stream.next().await {
                Some(Ok(actix_ws::Message::Text(text))) => return text.to_string(),
                Some(Ok(actix_ws::Message::Binary(bytes))) => {
                    return String::from_utf8_lossy(&bytes).into_owned();
                }
                Some(Ok(actix_ws::Message::Ping(bytes))) => {
                    if self.session.pong(&bytes).await.is_err() {
                        return String::new();
                    }
                }
                Some(Ok(actix_ws::Message::Close(reason))) => {
                    log::info!("websocket closed by client: {:?}", reason);
                    return String::new();
                }
                Some(Err(e)) => {
                    log::warn!("error reading from websocket: {}", e);
                    return String::new();
                }
                None => return String::new(),
                Some(Ok(_)) => continue,
            }
        }
    }
}

/// Write half: every write is one text message.
#[derive(Debug, Clone)]
pub struct Outbound {
    tx: UnboundedSender<Frame>,
}

impl From<UnboundedSender<Frame>> for Outbound {
    fn from(tx: UnboundedSender<Frame>) -> Self {
        Self { tx }
    }
}

impl Outbound {
    /// Close the socket once everything written so far has gone out.
    pub fn close(&self) {
        self.tx.send(Frame::Close).ok();
    }
}

impl Sink for Outbound {
    fn write(&self, bytes: &[u8]) -> std::io::Result<usize> {
        self.tx
            .send(Frame::Text(String::from_utf8_lossy(bytes).into_owned()))
            .map(|_| bytes.len())
            .map_err(|_| std::io::Error::new(std::io::ErrorKind::BrokenPipe, "websocket closed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BAD_PLAYER_PROMPT;

    #[test]
    fn each_write_is_one_message() {
        let (tx, mut rx) = unbounded_channel();
        let outbound = Outbound::from(tx);
        assert_eq!(outbound.write(b"Blind is now 100\n").unwrap(), 17);
        assert_eq!(outbound.write(b"Blind is now 200\n").unwrap(), 17);
        assert_eq!(rx.try_recv().unwrap(), Frame::Text("Blind is now 100\n".into()));
        assert_eq!(rx.try_recv().unwrap(), Frame::Text("Blind is now 200\n".into()));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn close_queues_behind_pending_text() {
        let (tx, mut rx) = unbounded_channel();
        let outbound = Outbound::from(tx);
        outbound.write(BAD_PLAYER_PROMPT.as_bytes()).unwrap();
        outbound.close();
        assert_eq!(rx.try_recv().unwrap(), Frame::Text(BAD_PLAYER_PROMPT.into()));
        assert_eq!(rx.try_recv().unwrap(), Frame::Close);
    }

    #[test]
    fn closed_socket_is_broken_pipe() {
        let (tx, rx) = unbounded_channel();
        drop(rx);
        let err = Outbound::from(tx).write(b"Blind is now 100\n").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn default_frame_limit() {
        assert_eq!(BridgeConfig::default().max_frame, 65536);
    }
}
