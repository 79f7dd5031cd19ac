//! Dual-transport stub server: one UDP socket and one TCP listener bound to
//! the same port, each driven by its own worker task over a shared handler.
//!
//! Lifecycle: `Created → Running → Stopping → Stopped`. Shutdown is signaled
//! through a `CancellationToken`; each worker polls it only at its receive
//! point, so an in-flight request always finishes before the worker exits.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use super::handler::QueryHandler;
use super::transport::{self, MAX_UDP_PACKET_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ServerState {
    Created,
    Running,
    Stopping,
    Stopped,
}

pub struct StubDnsServer {
    handler: Arc<QueryHandler>,
    shutdown: CancellationToken,
    state: ServerState,
    workers: Vec<JoinHandle<()>>,
    local_addr: Option<SocketAddr>,
}

impl StubDnsServer {
    pub fn new(handler: Arc<QueryHandler>) -> Self {
        Self {
            handler,
            shutdown: CancellationToken::new(),
            state: ServerState::Created,
            workers: Vec::new(),
            local_addr: None,
        }
    }

    /// Bind both listeners and launch one worker per transport.
    ///
    /// Either both sockets come up or neither does: a failed TCP bind drops
    /// the already bound UDP socket before returning. With port 0 the UDP
    /// socket is bound first and the TCP listener reuses the port the
    /// operating system picked.
    pub async fn start(&mut self, addr: SocketAddr) -> io::Result<()> {
        if self.state != ServerState::Created {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "server has already been started",
            ));
        }

        let udp_socket = bind_udp_socket(addr)?;
        let bound = udp_socket.local_addr()?;
        let tcp_listener = bind_tcp_listener(SocketAddr::new(addr.ip(), bound.port()))?;

        info!(addr = %bound, "Stub DNS server listening on UDP and TCP");

        self.workers.push(tokio::spawn(run_udp_listener(
            udp_socket,
            self.handler.clone(),
            self.shutdown.clone(),
        )));
        self.workers.push(tokio::spawn(run_tcp_listener(
            tcp_listener,
            self.handler.clone(),
            self.shutdown.clone(),
        )));

        self.local_addr = Some(bound);
        self.state = ServerState::Running;
        Ok(())
    }

    /// Address both listeners are bound to, once running.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.local_addr
    }

    pub fn is_running(&self) -> bool {
        self.state == ServerState::Running
    }

    /// Signal both workers and wait for them to join. A no-op unless the
    /// server is running.
    pub async fn stop(&mut self) {
        if self.state != ServerState::Running {
            return;
        }

        self.state = ServerState::Stopping;
        self.shutdown.cancel();

        for worker in self.workers.drain(..) {
            if let Err(e) = worker.await {
                error!(error = %e, "Transport worker panicked during shutdown");
            }
        }

        self.state = ServerState::Stopped;
        info!("Stub DNS server stopped");
    }
}

async fn run_udp_listener(
    socket: UdpSocket,
    handler: Arc<QueryHandler>,
    shutdown: CancellationToken,
) {
    let mut recv_buf = [0u8; MAX_UDP_PACKET_SIZE];

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => {
                debug!("UDP worker shutting down");
                break;
            }
            received = socket.recv_from(&mut recv_buf) => {
                match received {
                    Ok((len, peer)) => {
                        if let Some(reply) = handler.handle(&recv_buf[..len]) {
                            if let Err(e) = socket.send_to(&reply, peer).await {
                                warn!(peer = %peer, error = %e, "Failed to send UDP reply");
                            }
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "UDP receive error");
                    }
                }
            }
        }
    }
}

async fn run_tcp_listener(
    listener: TcpListener,
    handler: Arc<QueryHandler>,
    shutdown: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = shutdown.cancelled() => {
                debug!("TCP worker shutting down");
                break;
            }
            accepted = listener.accept() => {
                match accepted {
                    Ok((stream, peer)) => {
                        debug!(peer = %peer, "TCP connection accepted");
                        serve_tcp_connection(stream, peer, &handler, &shutdown).await;
                    }
                    Err(e) => {
                        warn!(error = %e, "TCP accept error");
                    }
                }
            }
        }
    }
}

/// Serve framed requests on one connection until the client closes it or the
/// stop signal arrives. Connections are served inline, so the TCP worker
/// processes one request at a time, in arrival order.
async fn serve_tcp_connection(
    mut stream: TcpStream,
    peer: SocketAddr,
    handler: &QueryHandler,
    shutdown: &CancellationToken,
) {
    loop {
        let request = tokio::select! {
            _ = shutdown.cancelled() => break,
            request = transport::read_framed(&mut stream) => request,
        };

        match request {
            Ok(bytes) => {
                if let Some(reply) = handler.handle(&bytes) {
                    if let Err(e) = transport::write_framed(&mut stream, &reply).await {
                        warn!(peer = %peer, error = %e, "Failed to send TCP reply");
                        break;
                    }
                }
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                debug!(peer = %peer, "TCP connection closed");
                break;
            }
            Err(e) => {
                warn!(peer = %peer, error = %e, "TCP receive error");
                break;
            }
        }
    }
}

fn bind_udp_socket(addr: SocketAddr) -> io::Result<UdpSocket> {
    let socket = Socket::new(socket_domain(addr), Type::DGRAM, Some(Protocol::UDP))?;
    socket.set_reuse_address(true)?;
    socket.bind(&addr.into())?;
    socket.set_nonblocking(true)?;
    UdpSocket::from_std(socket.into())
}

fn bind_tcp_listener(addr: SocketAddr) -> io::Result<TcpListener> {
    let socket = Socket::new(socket_domain(addr), Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    socket.bind(&addr.into())?;
    socket.listen(128)?;
    socket.set_nonblocking(true)?;
    TcpListener::from_std(socket.into())
}

fn socket_domain(addr: SocketAddr) -> Domain {
    if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    }
}
