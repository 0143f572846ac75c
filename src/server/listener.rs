use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use tokio::net::TcpSocket;
use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::router::Router;

/// Backlog passed to `listen(2)`, matching the historical cap.
const LISTEN_BACKLOG: u32 = 20;

/// Binds the listening socket and runs the accept loop until shutdown.
///
/// Connections are handled strictly one at a time: each accepted
/// connection runs to completion before the next accept. An accept
/// failure while running is logged and the loop continues; once the
/// shutdown channel fires, failures are expected (the socket is going
/// away) and ignored.
pub async fn run(
    cfg: &Config,
    router: &Router,
    running: &AtomicBool,
    mut shutdown: watch::Receiver<bool>,
) -> Result<()> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, cfg.port));

    let socket = TcpSocket::new_v4().context("can't create socket")?;
    socket.set_reuseaddr(true).context("can't configure socket")?;
    socket.bind(addr).context("bind failed")?;
    let listener = socket.listen(LISTEN_BACKLOG).context("listen failed")?;

    running.store(true, Ordering::SeqCst);
    info!("Server listening on port {}", cfg.port);

    loop {
        tokio::select! {
            res = listener.accept() => match res {
                Ok((stream, peer)) => {
                    debug!("Accepted connection from {}", peer);

                    let conn = Connection::new(stream, router, &cfg.default_resource);
                    if let Err(e) = conn.run().await {
                        debug!("Connection error from {}: {}", peer, e);
                    }
                }
                Err(e) => {
                    if running.load(Ordering::SeqCst) {
                        error!("Accept failed: {}", e);
                    } else {
                        break;
                    }
                }
            },

            _ = shutdown.changed() => {
                break;
            }
        }
    }

    running.store(false, Ordering::SeqCst);
    info!("Server stopped");
    Ok(())
}
