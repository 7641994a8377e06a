//! City catalog and request validation
//!
//! The catalog is the fixed set of cities the service knows about;
//! validation turns a raw request into the status the response will carry.

use crate::protocol::{MeasurementType, Request, Status};

/// Cities the service can answer for, lowercase, fixed for the process
/// lifetime
pub const CITIES: &[&str] = &[
    "bari",
    "roma",
    "milano",
    "napoli",
    "torino",
    "palermo",
    "genova",
    "bologna",
    "firenze",
    "venezia",
    "reggio calabria",
];

/// Outcome of validating a request
///
/// Carries the lowercased city alongside the status so the caller's
/// request text is left untouched; the normalized form is what matching
/// ran against (and what the server logs).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    /// Status the response will carry
    pub status: Status,

    /// The request's city, lowercased
    pub city: String,
}

/// Validate a request against the known types and the city catalog
///
/// Checks, in order:
/// 1. The type byte must name a [`MeasurementType`]; anything else is
///    `InvalidRequest` and the city is not looked up.
/// 2. The city, lowercased, must match a catalog entry exactly — no
///    partial matches, no trimming. Found is `Success`, not found is
///    `CityNotFound`.
pub fn validate(request: &Request) -> Validation {
    let city = request.city.to_lowercase();

    if MeasurementType::from_code(request.type_code).is_none() {
        return Validation {
            status: Status::InvalidRequest,
            city,
        };
    }

    let status = if CITIES.iter().any(|&known| known == city) {
        Status::Success
    } else {
        Status::CityNotFound
    };

    Validation { status, city }
}
