//! Report Tests
//!
//! Tests for the client-side rendering of completed exchanges.

use meteo::protocol::{Request, Response, Status};
use meteo::report::{self, MSG_CITY_NOT_FOUND, MSG_INVALID_REQUEST, MSG_UNKNOWN_STATUS};

// =============================================================================
// Success Rendering
// =============================================================================

#[test]
fn test_render_temperature() {
    let req = Request::new(b't', "bari");
    let resp = Response::success(b't', 12.5);

    assert_eq!(report::render(&req, &resp), "Bari: Temperatura = 12.5°C");
}

#[test]
fn test_render_humidity() {
    let req = Request::new(b'h', "roma");
    let resp = Response::success(b'h', 63.5);

    assert_eq!(report::render(&req, &resp), "Roma: Umidita' = 63.5%");
}

#[test]
fn test_render_wind_speed() {
    let req = Request::new(b'w', "milano");
    let resp = Response::success(b'w', 7.5);

    assert_eq!(report::render(&req, &resp), "Milano: Vento = 7.5 km/h");
}

#[test]
fn test_render_pressure() {
    let req = Request::new(b'p', "napoli");
    let resp = Response::success(b'p', 1013.5);

    assert_eq!(report::render(&req, &resp), "Napoli: Pressione = 1013.5 hPa");
}

#[test]
fn test_render_capitalizes_original_city_text() {
    // The client renders the text the user typed, not the server's
    // lowercased copy: first letter up, everything else down
    let req = Request::new(b't', "rEGGIO cALABRIA");
    let resp = Response::success(b't', 25.5);

    assert_eq!(
        report::render(&req, &resp),
        "Reggio calabria: Temperatura = 25.5°C"
    );
}

#[test]
fn test_render_negative_temperature() {
    let req = Request::new(b't', "torino");
    let resp = Response::success(b't', -9.5);

    assert_eq!(report::render(&req, &resp), "Torino: Temperatura = -9.5°C");
}

// =============================================================================
// Non-success Rendering
// =============================================================================

#[test]
fn test_render_city_not_found() {
    let req = Request::new(b'h', "atlantis");
    let resp = Response::city_not_found();

    assert_eq!(report::render(&req, &resp), MSG_CITY_NOT_FOUND);
}

#[test]
fn test_render_invalid_request() {
    let req = Request::new(b'x', "roma");
    let resp = Response::invalid_request();

    assert_eq!(report::render(&req, &resp), MSG_INVALID_REQUEST);
}

#[test]
fn test_render_unknown_status() {
    let req = Request::new(b't', "bari");
    let resp = Response {
        status: Status::Unknown(9),
        type_code: 0,
        value: 0.0,
    };

    assert_eq!(report::render(&req, &resp), MSG_UNKNOWN_STATUS);
}

#[test]
fn test_render_success_with_unrecognized_type_is_defensive() {
    // The server never sends this; the client still must not crash or
    // pretend it understood
    let req = Request::new(b't', "bari");
    let resp = Response::success(b'z', 1.0);

    assert_eq!(report::render(&req, &resp), MSG_UNKNOWN_STATUS);
}
