// Listener construction module

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

/// Create the `TcpListener` for the accept loop.
///
/// `SO_REUSEADDR` lets a restarted server rebind a port still in
/// TIME_WAIT. `SO_REUSEPORT` is not set: a second instance on an
/// already-bound port must fail fast instead of silently sharing it.
///
/// # Returns
///
/// * `Ok(TcpListener)` - Successfully created and bound listener
/// * `Err(std::io::Error)` - Failed to create or bind socket
pub fn create_listener(addr: std::net::SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    socket.set_reuse_address(true)?;

    // Non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
