//! Integration tests for meteo
//!
//! Each test starts a real server on an ephemeral port and talks to it
//! over loopback with the one-shot client.

use std::net::{SocketAddr, TcpStream};
use std::thread;

use meteo::network::{query, Server};
use meteo::protocol::{Measurement, Request, Status};
use meteo::station::range;
use meteo::{Config, Station};

/// Start a server on an ephemeral loopback port in a background thread
fn spawn_server() -> SocketAddr {
    let config = Config::builder().listen_addr("127.0.0.1:0").build();
    let server = Server::bind(&config, Station::new()).unwrap();
    let addr = server.local_addr().unwrap();

    thread::spawn(move || {
        let _ = server.run();
    });

    addr
}

// =============================================================================
// Exchange Scenarios
// =============================================================================

#[test]
fn test_temperature_query_succeeds() {
    let addr = spawn_server();

    let request = Request::parse("t bari").unwrap();
    let response = query(addr, &request).unwrap();

    assert_eq!(response.status, Status::Success);
    assert_eq!(response.kind, Some(Measurement::Temperature));

    let (lo, hi) = range(Measurement::Temperature);
    assert!(response.value >= lo && response.value <= hi);
}

#[test]
fn test_unknown_city_reported_not_found() {
    let addr = spawn_server();

    let request = Request::parse("h atlantide").unwrap();
    let response = query(addr, &request).unwrap();

    assert_eq!(response.status, Status::CityNotFound);
    assert_eq!(response.kind, Some(Measurement::Humidity));
    assert_eq!(response.value, 0.0);
}

#[test]
fn test_unsupported_kind_reported_invalid() {
    let addr = spawn_server();

    let request = Request::parse("x bari").unwrap();
    let response = query(addr, &request).unwrap();

    assert_eq!(response.status, Status::InvalidRequest);
    assert_eq!(response.kind, None);
}

#[test]
fn test_uppercase_city_on_the_wire_still_matches() {
    // The client normally lowercases, but the server matches
    // case-insensitively either way
    let addr = spawn_server();

    let request = Request::new(b'w', "MILANO").unwrap();
    let response = query(addr, &request).unwrap();

    assert_eq!(response.status, Status::Success);
    assert_eq!(response.kind, Some(Measurement::Wind));
}

#[test]
fn test_repeated_queries_each_succeed() {
    let addr = spawn_server();
    let request = Request::parse("p roma").unwrap();

    let (lo, hi) = range(Measurement::Pressure);
    for _ in 0..2 {
        let response = query(addr, &request).unwrap();
        assert_eq!(response.status, Status::Success);
        assert!(response.value >= lo && response.value <= hi);
    }
}

// =============================================================================
// Failure Scenarios
// =============================================================================

#[test]
fn test_listener_survives_silent_client() {
    let addr = spawn_server();

    // Connect and disconnect without sending a request; the server must
    // close that connection and keep serving
    let stream = TcpStream::connect(addr).unwrap();
    drop(stream);

    let request = Request::parse("t torino").unwrap();
    let response = query(addr, &request).unwrap();
    assert_eq!(response.status, Status::Success);
}

#[test]
fn test_listener_survives_partial_request() {
    use std::io::Write;

    let addr = spawn_server();

    // Send a truncated record and close; the server logs and moves on
    let mut stream = TcpStream::connect(addr).unwrap();
    stream.write_all(&[b't', b'b', b'a']).unwrap();
    drop(stream);

    let request = Request::parse("h napoli").unwrap();
    let response = query(addr, &request).unwrap();
    assert_eq!(response.status, Status::Success);
}
