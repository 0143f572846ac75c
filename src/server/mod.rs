//! Server state and lifecycle.
//!
//! A [`Server`] is constructed with its configuration, populated with
//! routes, then activated with [`Server::up`]. Shutdown goes through an
//! explicit cancellation handle instead of any global state: call
//! [`Server::down`] or hand a [`ShutdownHandle`] to another task (e.g. a
//! ctrl-c listener) and have it call `down()` there.

pub mod listener;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use tokio::sync::watch;
use tracing::info;

use crate::config::Config;
use crate::http::request::{Method, Request};
use crate::http::response::Response;
use crate::router::Router;

/// Cancellation handle for stopping a running server from another task.
///
/// `down()` is idempotent: it flips the running flag and signals the
/// accept loop, which exits cleanly and releases the listening socket.
#[derive(Clone)]
pub struct ShutdownHandle {
    running: Arc<AtomicBool>,
    shutdown: Arc<watch::Sender<bool>>,
}

impl ShutdownHandle {
    pub fn down(&self) {
        if self.running.swap(false, Ordering::SeqCst) {
            info!("Server stopping");
        }
        self.shutdown.send_replace(true);
    }
}

/// The HTTP server: configuration, route table, and lifecycle state.
pub struct Server {
    config: Config,
    router: Router,
    running: Arc<AtomicBool>,
    shutdown: Arc<watch::Sender<bool>>,
    shutdown_rx: watch::Receiver<bool>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        let router = Router::new(config.default_resource.clone());
        let (shutdown, shutdown_rx) = watch::channel(false);

        Self {
            config,
            router,
            running: Arc::new(AtomicBool::new(false)),
            shutdown: Arc::new(shutdown),
            shutdown_rx,
        }
    }

    /// Registers a handler for `(method, path)`.
    ///
    /// Must be called before [`Server::up`]; the route table is read-only
    /// while serving. Registering the same key again silently replaces the
    /// previous handler.
    pub fn register_handler<H>(&mut self, path: &str, method: Method, handler: H)
    where
        H: Fn(&Request) -> Response + Send + Sync + 'static,
    {
        self.router.register(method, path, Box::new(handler));
    }

    /// Binds the listening socket and serves connections until shutdown.
    ///
    /// Blocks the calling task for the lifetime of the server. Socket
    /// creation, bind, and listen failures are fatal and returned to the
    /// caller; transient accept failures are logged and survived.
    pub async fn up(&mut self) -> Result<()> {
        listener::run(
            &self.config,
            &self.router,
            &self.running,
            self.shutdown_rx.clone(),
        )
        .await
    }

    /// Stops the server. Safe to call repeatedly and before `up()`.
    pub fn down(&self) {
        self.handle().down();
    }

    /// Returns a cloneable handle for calling `down()` from another task.
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        self.handle()
    }

    fn handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            running: Arc::clone(&self.running),
            shutdown: Arc::clone(&self.shutdown),
        }
    }
}
