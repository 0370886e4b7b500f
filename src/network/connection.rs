//! Connection Handler
//!
//! Handles a single client connection: exactly one request/response
//! cycle, then the connection is dropped. No keep-alive, no pipelining.

use std::io::{BufReader, BufWriter};
use std::net::TcpStream;

use crate::error::{MeteoError, Result};
use crate::protocol::{read_request, write_response};
use crate::station::Station;

/// Handles a single client connection
pub struct Connection<'a> {
    /// TCP stream reader
    reader: BufReader<TcpStream>,

    /// TCP stream writer
    writer: BufWriter<TcpStream>,

    /// The station answering the query
    station: &'a Station,

    /// Peer address for logging
    peer_addr: String,
}

impl<'a> Connection<'a> {
    /// Create a new connection handler
    pub fn new(stream: TcpStream, station: &'a Station) -> Result<Self> {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Disable Nagle's algorithm: the exchange is two tiny records
        stream.set_nodelay(true)?;

        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
            station,
            peer_addr,
        })
    }

    /// Handle the single exchange (blocking)
    ///
    /// Reads one request, answers it, and returns. A peer that closes
    /// before sending a full request gets no response and no retry;
    /// failures here never outlive the connection.
    pub fn handle(&mut self) -> Result<()> {
        let request = match read_request(&mut self.reader) {
            Ok(req) => req,
            Err(MeteoError::Io(ref e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                // Peer closed before sending a complete request
                tracing::debug!("Client {} disconnected before sending a request", self.peer_addr);
                return Ok(());
            }
            Err(MeteoError::Io(ref e)) if e.kind() == std::io::ErrorKind::ConnectionReset => {
                tracing::debug!("Connection reset by client {}", self.peer_addr);
                return Ok(());
            }
            Err(e) => {
                tracing::warn!("Error reading request from {}: {e}", self.peer_addr);
                return Err(e);
            }
        };

        tracing::info!(
            "Request '{} {}' from client {}",
            request.kind as char,
            request.city,
            self.peer_addr
        );

        let response = self.station.respond(&request);

        if let Err(e) = write_response(&mut self.writer, &response) {
            tracing::warn!("Error sending response to {}: {e}", self.peer_addr);
            return Err(e);
        }

        tracing::debug!("Connection with {} closed", self.peer_addr);
        Ok(())
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}
