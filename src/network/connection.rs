//! Connection - owns the socket, the receive buffer and the registry.
//!
//! ```text
//!   socket ──read──▶ LineBuffer ──drain──▶ MessageRef ──▶ Registry
//!                        ▲                                   │
//!                        └── next read              Handler(ctx) ──▶ socket
//! ```
//!
//! Every complete line buffered by one read is parsed and dispatched, in
//! order, before the next read. The `MessageRef` a handler sees borrows
//! the receive buffer and is gone when its handler returns.

use std::io;

use slirc_proto::{Command, FrameError, LineBuffer, MessageRef};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::net::{TcpStream, lookup_host};
use tracing::{debug, error, info, instrument, trace, warn};

use crate::config::Config;
use crate::error::{ConnectionError, DispatchError, RegistryError, SendError};
use crate::handlers::{Context, Handler, Identity, PingHandler, Registry, Writer};

/// Read half of the connection.
pub type Reader = Box<dyn AsyncRead + Send + Unpin>;

/// A client connection to one IRC server.
pub struct Connection {
    ctx: Context,
    framer: LineBuffer,
    registry: Registry,
    reader: Option<Reader>,
    read_buf: Vec<u8>,
}

impl Connection {
    /// Create a disconnected connection with only the PING handler
    /// registered.
    pub fn new(identity: Identity, recv_capacity: usize, send_capacity: usize) -> Self {
        let mut registry = Registry::new();
        registry.insert_builtin(Command::Word("PING".to_owned()), Box::new(PingHandler));

        Self {
            ctx: Context::new(identity, send_capacity),
            framer: LineBuffer::with_capacity(recv_capacity),
            registry,
            reader: None,
            read_buf: vec![0; recv_capacity],
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Identity::from(config),
            config.limits.recv_buffer,
            config.limits.send_buffer,
        )
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Send side, for issuing commands outside a handler.
    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Register `handler` for `key`. See [`Registry::register`].
    pub fn register(
        &mut self,
        key: Command,
        handler: Box<dyn Handler>,
    ) -> Result<(), RegistryError> {
        self.registry.register(key, handler)
    }

    pub fn is_connected(&self) -> bool {
        self.reader.is_some() && self.ctx.is_connected()
    }

    /// Use an already-open stream. Any buffered input is discarded.
    pub fn attach(&mut self, reader: Reader, writer: Writer) {
        self.framer.clear();
        self.reader = Some(reader);
        self.ctx.attach(writer);
    }

    /// Resolve the configured server, open a TCP connection and log in.
    #[instrument(skip(self), fields(server = %self.ctx.identity().server, port = self.ctx.identity().port), name = "connect")]
    pub async fn connect(&mut self) -> Result<(), ConnectionError> {
        let host = self.ctx.identity().server.clone();
        let port = self.ctx.identity().port;

        let resolve_failure = |source| ConnectionError::ResolveFailure {
            host: host.clone(),
            port,
            source,
        };
        let addrs: Vec<_> = lookup_host((host.as_str(), port))
            .await
            .map_err(resolve_failure)?
            .collect();
        if addrs.is_empty() {
            return Err(resolve_failure(io::Error::new(
                io::ErrorKind::NotFound,
                "no addresses found",
            )));
        }

        let mut last_err = None;
        for addr in addrs {
            match TcpStream::connect(addr).await {
                Ok(stream) => {
                    info!(%addr, "connected");
                    let (read_half, write_half) = stream.into_split();
                    return self.open(Box::new(read_half), Box::new(write_half)).await;
                }
                Err(source) => {
                    debug!(%addr, error = %source, "connect attempt failed");
                    last_err = Some(ConnectionError::ConnectFailure { addr, source });
                }
            }
        }
        Err(last_err.unwrap_or(ConnectionError::NotConnected))
    }

    /// Attach a stream and log in. A failed login closes the stream again.
    async fn open(&mut self, reader: Reader, writer: Writer) -> Result<(), ConnectionError> {
        self.attach(reader, writer);
        match self.login().await {
            Ok(()) => Ok(()),
            Err(err) => Err(self.fail(err.into())),
        }
    }

    /// Send `PASS` (if a password is set), `NICK` and `USER`.
    pub async fn login(&mut self) -> Result<(), SendError> {
        let identity = self.ctx.identity().clone();
        if let Some(password) = &identity.password {
            self.ctx.pass(password).await?;
        }
        self.ctx.nick(&identity.nick).await?;
        self.ctx.user(&identity.user, &identity.realname).await?;
        debug!(nick = %identity.nick, "login sent");
        Ok(())
    }

    /// Read and dispatch until the server closes the connection.
    ///
    /// Returns `Ok` on a clean close. A read error or a line that does not
    /// fit the receive buffer closes the connection and is returned.
    pub async fn run(&mut self) -> Result<(), ConnectionError> {
        loop {
            let Self {
                ctx,
                framer,
                registry,
                reader,
                read_buf,
            } = &mut *self;
            let reader = reader.as_mut().ok_or(ConnectionError::NotConnected)?;

            let room = framer.remaining();
            if room == 0 {
                let err = FrameError::BufferOverflow {
                    pending: framer.pending(),
                    incoming: 0,
                    capacity: framer.capacity(),
                };
                return Err(self.fail(err.into()));
            }

            let n = match reader.read(&mut read_buf[..room]).await {
                Ok(0) => {
                    info!("server closed connection");
                    self.disconnect();
                    return Ok(());
                }
                Ok(n) => n,
                Err(e) => return Err(self.fail(ConnectionError::Read(e))),
            };

            if let Err(err) = process(ctx, framer, registry, &read_buf[..n]).await {
                return Err(self.fail(err.into()));
            }
        }
    }

    /// Feed `bytes` as if read from the socket and dispatch every line
    /// completed by them. Returns how many were handled.
    ///
    /// Bytes that overflow the receive buffer close the connection.
    pub async fn receive(&mut self, bytes: &[u8]) -> Result<usize, ConnectionError> {
        match process(&mut self.ctx, &mut self.framer, &self.registry, bytes).await {
            Ok(handled) => Ok(handled),
            Err(err) => Err(self.fail(err.into())),
        }
    }

    /// Drop the socket and any buffered input.
    pub fn disconnect(&mut self) {
        let had_reader = self.reader.take().is_some();
        let had_writer = self.ctx.detach().is_some();
        if had_reader || had_writer {
            debug!("disconnected");
        }
        self.framer.clear();
    }

    fn fail(&mut self, err: ConnectionError) -> ConnectionError {
        error!(error = %err, code = err.error_code(), "closing connection");
        self.disconnect();
        err
    }
}

/// Feed one read into the framer, then parse and dispatch each complete
/// line. Message-local failures are logged and skipped.
async fn process(
    ctx: &mut Context,
    framer: &mut LineBuffer,
    registry: &Registry,
    bytes: &[u8],
) -> Result<usize, FrameError> {
    framer.feed(bytes)?;

    let mut handled = 0;
    for line in framer.drain() {
        trace!(line = %String::from_utf8_lossy(line), "<<");

        let msg = match MessageRef::parse(line) {
            Ok(msg) => msg,
            Err(error) => {
                warn!(error = %error, code = error.error_code(), "dropping unparsable line");
                continue;
            }
        };

        match registry.dispatch(ctx, &msg).await {
            Ok(()) => handled += 1,
            Err(DispatchError::UnknownCommand(key)) => {
                debug!(command = %key, "no handler");
            }
            Err(error) => {
                warn!(error = %error, code = error.error_code(), "handler failed");
            }
        }
    }
    Ok(handled)
}
