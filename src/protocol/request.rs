//! Request definitions
//!
//! The measurement type tags and the client request carrying one of them
//! plus a city name.

use crate::error::{MeteoError, Result};
use super::codec::CITY_CAPACITY;

/// Kind of weather value a client can ask for
///
/// Each type is identified on the wire by a single-character code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MeasurementType {
    Temperature = b't',
    Humidity = b'h',
    WindSpeed = b'w',
    Pressure = b'p',
}

impl MeasurementType {
    /// The single-byte wire code for this type
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Parse a wire code; any byte outside {t,h,w,p} is not a valid type
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            b't' => Some(MeasurementType::Temperature),
            b'h' => Some(MeasurementType::Humidity),
            b'w' => Some(MeasurementType::WindSpeed),
            b'p' => Some(MeasurementType::Pressure),
            _ => None,
        }
    }

    /// Display label used when rendering a successful exchange
    pub fn label(self) -> &'static str {
        match self {
            MeasurementType::Temperature => "Temperatura",
            MeasurementType::Humidity => "Umidita'",
            MeasurementType::WindSpeed => "Vento",
            MeasurementType::Pressure => "Pressione",
        }
    }

    /// Measurement unit, including any separating space
    pub fn unit(self) -> &'static str {
        match self {
            MeasurementType::Temperature => "°C",
            MeasurementType::Humidity => "%",
            MeasurementType::WindSpeed => " km/h",
            MeasurementType::Pressure => " hPa",
        }
    }
}

/// A client request: a raw measurement-type byte and a city name
///
/// The type byte is intentionally NOT validated at construction; the
/// server-side validator decides whether it names a real
/// [`MeasurementType`]. The city is capped at the wire capacity
/// ([`CITY_CAPACITY`] including the terminator) and silently truncated
/// beyond it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Raw measurement-type code (intended to be one of {t,h,w,p})
    pub type_code: u8,

    /// City name, at most `CITY_CAPACITY - 1` bytes of UTF-8 text
    pub city: String,
}

impl Request {
    /// Build a request, truncating the city to the wire capacity
    pub fn new(type_code: u8, city: impl Into<String>) -> Self {
        let mut city = city.into();
        truncate_to_capacity(&mut city);
        Self { type_code, city }
    }

    /// Parse raw user input of the shape `"<type-char> <city words...>"`
    ///
    /// The type is the first character; the city is everything after the
    /// first whitespace run, truncated to capacity. The city keeps its
    /// original case (semantic identity is case-insensitive, but the
    /// client renders the text it was given).
    pub fn from_input(input: &str) -> Result<Self> {
        let mut chars = input.chars();
        let type_char = chars
            .next()
            .ok_or_else(|| MeteoError::Input("empty request string".to_string()))?;
        if !type_char.is_ascii() {
            return Err(MeteoError::Input(format!(
                "measurement type must be a single ASCII character, got '{}'",
                type_char
            )));
        }

        let rest = chars.as_str();
        let city = rest.trim_start();
        if city.len() == rest.len() && !rest.is_empty() {
            // No whitespace run between the type character and the city
            return Err(MeteoError::Input(format!(
                "expected \"<type> <city>\", got {:?}",
                input
            )));
        }
        if city.is_empty() {
            return Err(MeteoError::Input("missing city name".to_string()));
        }

        Ok(Self::new(type_char as u8, city))
    }
}

/// Truncate a city string to fit the wire field, on a char boundary
fn truncate_to_capacity(city: &mut String) {
    let max = CITY_CAPACITY - 1;
    if city.len() <= max {
        return;
    }
    let mut end = max;
    while !city.is_char_boundary(end) {
        end -= 1;
    }
    city.truncate(end);
}
