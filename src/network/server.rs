//! TCP Server
//!
//! Binds the listener and serves connections one at a time.

use std::net::{SocketAddr, TcpListener};

use crate::config::Config;
use crate::error::Result;
use crate::station::Station;

use super::Connection;

/// Serial TCP server for weather queries
///
/// Handles exactly one connection at a time: accept, one exchange, close,
/// then back to accept. Pending clients wait in the OS listen backlog.
pub struct Server {
    listener: TcpListener,
    station: Station,
}

impl Server {
    /// Bind the listening socket
    ///
    /// A bind failure is fatal for the caller; there is no retry.
    pub fn bind(config: &Config, station: Station) -> Result<Self> {
        let listener = TcpListener::bind(&config.listen_addr)?;
        tracing::info!("Listening on {}", config.listen_addr);
        Ok(Self { listener, station })
    }

    /// The bound local address (useful when binding port 0)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve forever (blocking)
    ///
    /// Accept failures affect only the attempted connection: they are
    /// logged and the loop continues. Per-connection errors never bring
    /// down the listener. The only way out is process termination.
    pub fn run(&self) -> Result<()> {
        loop {
            let (stream, peer) = match self.listener.accept() {
                Ok(accepted) => accepted,
                Err(e) => {
                    tracing::warn!("Accept failed: {e}");
                    continue;
                }
            };

            tracing::info!("Client connected: {peer}");

            match Connection::new(stream, &self.station) {
                Ok(mut conn) => {
                    // Errors here are per-connection and already logged;
                    // the listener keeps serving.
                    let _ = conn.handle();
                }
                Err(e) => {
                    tracing::warn!("Failed to set up connection from {peer}: {e}");
                }
            }
        }
    }
}
