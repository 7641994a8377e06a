//! End-to-end Tests
//!
//! Full loopback exchanges: a real server on an ephemeral port, a real
//! client, one connection per scenario.

use std::net::SocketAddr;
use std::thread;

use meteo::network::{Client, Server};
use meteo::protocol::{Request, Status};
use meteo::report;
use meteo::{Config, MeasurementGenerator};

/// Start a server on an ephemeral port that serves `sessions` connections
/// then stops
fn spawn_server(sessions: usize) -> SocketAddr {
    let config = Config::builder().port(0).build();
    let mut server =
        Server::with_generator(&config, MeasurementGenerator::with_seed(42)).unwrap();
    let addr = server.local_addr().unwrap();

    thread::spawn(move || {
        for _ in 0..sessions {
            let _ = server.serve_next();
        }
    });

    addr
}

fn connect(addr: SocketAddr) -> Client {
    Client::connect(("127.0.0.1", addr.port())).unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_scenario_temperature_for_known_city() {
    let addr = spawn_server(1);

    let request = Request::from_input("t bari").unwrap();
    let response = connect(addr).exchange(&request).unwrap();

    assert_eq!(response.status, Status::Success);
    assert_eq!(response.type_code, b't');
    assert!((-10.0..40.0).contains(&response.value));

    let line = report::render(&request, &response);
    assert!(line.starts_with("Bari: Temperatura = "), "got {:?}", line);
    assert!(line.ends_with("°C"), "got {:?}", line);
}

#[test]
fn test_scenario_unknown_city() {
    let addr = spawn_server(1);

    let request = Request::from_input("h Atlantis").unwrap();
    let response = connect(addr).exchange(&request).unwrap();

    assert_eq!(response.status, Status::CityNotFound);
    assert_eq!(response.type_code, 0);
    assert_eq!(response.value, 0.0);
    assert_eq!(report::render(&request, &response), report::MSG_CITY_NOT_FOUND);
}

#[test]
fn test_scenario_invalid_type() {
    let addr = spawn_server(1);

    let request = Request::from_input("x roma").unwrap();
    let response = connect(addr).exchange(&request).unwrap();

    assert_eq!(response.status, Status::InvalidRequest);
    assert_eq!(report::render(&request, &response), report::MSG_INVALID_REQUEST);
}

#[test]
fn test_scenario_mixed_case_city() {
    let addr = spawn_server(1);

    let request = Request::from_input("p REGGIO CALABRIA").unwrap();
    let response = connect(addr).exchange(&request).unwrap();

    assert_eq!(response.status, Status::Success);
    assert_eq!(response.type_code, b'p');
    assert!((950.0..1050.0).contains(&response.value));
}

#[test]
fn test_sequential_sessions_on_one_server() {
    // The accept loop outlives a session: each connection gets its own
    // complete exchange, one after the other
    let addr = spawn_server(3);

    for input in ["t bari", "w venezia", "h torino"] {
        let request = Request::from_input(input).unwrap();
        let response = connect(addr).exchange(&request).unwrap();
        assert_eq!(response.status, Status::Success, "input {:?}", input);
    }
}

#[test]
fn test_failed_session_does_not_stop_the_next() {
    use std::io::Write;
    use std::net::TcpStream;

    let addr = spawn_server(2);

    // First connection sends a short, broken block and disconnects
    {
        let mut stream = TcpStream::connect(("127.0.0.1", addr.port())).unwrap();
        stream.write_all(&[b't', b'b', b'a']).unwrap();
    }

    // The server abandons that session and still serves the next one
    let request = Request::from_input("t roma").unwrap();
    let response = connect(addr).exchange(&request).unwrap();
    assert_eq!(response.status, Status::Success);
}

#[test]
fn test_truncated_city_travels_and_is_rejected_semantically() {
    let addr = spawn_server(1);

    // 200 bytes of city: truncated client-side, still a normal exchange
    let request = Request::new(b't', "a".repeat(200));
    let response = connect(addr).exchange(&request).unwrap();

    assert_eq!(response.status, Status::CityNotFound);
}
