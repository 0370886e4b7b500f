//! One-shot client
//!
//! Opens a connection, performs a single exchange, and closes.

use std::net::{TcpStream, ToSocketAddrs};

use crate::error::{MeteoError, Result};
use crate::protocol::{read_response, write_request, Request, Response};

/// Send one request and wait for the response
///
/// Every failure is fatal to the exchange: no retry, no backoff. The
/// connection closes when the stream is dropped on return.
pub fn query(addr: impl ToSocketAddrs, request: &Request) -> Result<Response> {
    let mut stream = TcpStream::connect(addr)
        .map_err(|e| MeteoError::Network(format!("connect failed: {e}")))?;
    stream.set_nodelay(true)?;

    write_request(&mut stream, request)?;
    read_response(&mut stream)
}
