//! Network Module
//!
//! TCP server and client handling.
//!
//! ## Architecture
//! - Single-threaded serial accept loop
//! - One request/response cycle per connection, then close
//! - Requests answered by the Station

mod server;
mod connection;
mod client;

pub use server::Server;
pub use connection::Connection;
pub use client::query;
