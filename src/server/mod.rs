// Server module
// Owns the listening socket and the accept loop.

pub mod listener;
pub mod shutdown;

pub use listener::create_listener;
pub use shutdown::{start_signal_handler, SignalHandler};

use crate::config::ServerState;
use crate::error::BindError;
use crate::handler;
use crate::logger;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Notify;

/// A bound static-file server: the listening socket plus the immutable
/// state every request handler shares.
pub struct Server {
    listener: TcpListener,
    state: Arc<ServerState>,
}

impl Server {
    /// Bind the listening socket.
    ///
    /// A port already in use or insufficient privileges yields
    /// `BindError`; startup treats this as fatal and never retries.
    pub fn bind(addr: SocketAddr, state: Arc<ServerState>) -> Result<Self, BindError> {
        let listener = create_listener(addr).map_err(|source| BindError { addr, source })?;
        Ok(Self { listener, state })
    }

    /// Address the listener is bound to. Resolves port 0 bindings.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept connections until `shutdown` fires.
    ///
    /// The loop stops accepting immediately on shutdown; connections
    /// already being served finish naturally. Accept errors are logged
    /// and do not terminate the loop.
    pub async fn serve(self, shutdown: Arc<Notify>) -> std::io::Result<()> {
        loop {
            tokio::select! {
                accept_result = self.listener.accept() => {
                    match accept_result {
                        Ok((stream, _peer_addr)) => {
                            serve_connection(stream, Arc::clone(&self.state));
                        }
                        Err(e) => {
                            logger::log_error(&format!("Failed to accept connection: {e}"));
                        }
                    }
                }

                _ = shutdown.notified() => {
                    return Ok(());
                }
            }
        }
    }
}

/// Serve a single connection in a spawned task.
fn serve_connection(stream: TcpStream, state: Arc<ServerState>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| {
                let state = Arc::clone(&state);
                async move { handler::handle_request(req, state).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
