//! Report rendering
//!
//! Turns a completed exchange into the human-readable line the client
//! prints. The request passed in is the client's original one — its city
//! keeps the case the user typed, since the server never sends the city
//! back.

use crate::protocol::{MeasurementType, Request, Response, Status};

/// Fixed message for a CITY_NOT_FOUND response
pub const MSG_CITY_NOT_FOUND: &str = "Citta' non disponibile";

/// Fixed message for an INVALID_REQUEST response
pub const MSG_INVALID_REQUEST: &str = "Richiesta non valida";

/// Fixed message for any unrecognized status
pub const MSG_UNKNOWN_STATUS: &str = "Stato sconosciuto";

/// Render a response as the line shown to the user
///
/// Success renders `"<City>: <label> = <value><unit>"` with the value at
/// one decimal place; the three non-success outcomes render their fixed
/// messages. A success block whose type byte is unrecognized falls back
/// to the unknown-status message too — the server never produces one, but
/// the client must not trust that.
pub fn render(request: &Request, response: &Response) -> String {
    match response.status {
        Status::Success => match MeasurementType::from_code(response.type_code) {
            Some(ty) => format!(
                "{}: {} = {:.1}{}",
                capitalize(&request.city),
                ty.label(),
                response.value,
                ty.unit()
            ),
            None => MSG_UNKNOWN_STATUS.to_string(),
        },
        Status::CityNotFound => MSG_CITY_NOT_FOUND.to_string(),
        Status::InvalidRequest => MSG_INVALID_REQUEST.to_string(),
        Status::Unknown(_) => MSG_UNKNOWN_STATUS.to_string(),
    }
}

/// First character uppercased, the rest lowercased
fn capitalize(city: &str) -> String {
    let mut chars = city.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
