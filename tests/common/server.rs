//! Fake IRC server.
//!
//! Accepts one client on an ephemeral localhost port. The test drives the
//! server side line by line.

use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpListener;
use tokio::time::timeout;

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// A listening fake server.
pub struct FakeServer {
    listener: TcpListener,
    port: u16,
}

impl FakeServer {
    /// Bind on `127.0.0.1:0`.
    pub async fn bind() -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let port = listener.local_addr()?.port();
        Ok(Self { listener, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Accept the next client.
    pub async fn accept(&self) -> anyhow::Result<Peer> {
        let (stream, _) = timeout(RECV_TIMEOUT, self.listener.accept()).await??;
        let (read_half, write_half) = stream.into_split();
        Ok(Peer {
            reader: BufReader::new(read_half),
            writer: Some(write_half),
        })
    }
}

/// Server side of one accepted client.
pub struct Peer {
    reader: BufReader<OwnedReadHalf>,
    writer: Option<OwnedWriteHalf>,
}

#[allow(dead_code)]
impl Peer {
    /// Send raw bytes, unmodified.
    pub async fn send_bytes(&mut self, bytes: &[u8]) -> anyhow::Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("peer already closed"))?;
        writer.write_all(bytes).await?;
        writer.flush().await?;
        Ok(())
    }

    /// Send one line, appending CRLF.
    pub async fn send_line(&mut self, line: &str) -> anyhow::Result<()> {
        self.send_bytes(format!("{line}\r\n").as_bytes()).await
    }

    /// Next line from the client, without its CRLF.
    pub async fn recv_line(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        let n = timeout(RECV_TIMEOUT, self.reader.read_line(&mut line)).await??;
        if n == 0 {
            anyhow::bail!("client closed the connection");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }

    /// Whether the client has closed its side.
    pub async fn recv_eof(&mut self) -> anyhow::Result<bool> {
        let mut line = String::new();
        let n = timeout(RECV_TIMEOUT, self.reader.read_line(&mut line)).await??;
        Ok(n == 0)
    }

    /// Close our write side; the client sees end of stream.
    pub fn close(&mut self) {
        self.writer = None;
    }
}
