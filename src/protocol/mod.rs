//! Protocol Module
//!
//! Defines the wire protocol for client-server communication.
//!
//! ## Protocol (fixed-width binary, one exchange per connection)
//!
//! ### Request Block (65 bytes)
//! ```text
//! ┌──────────┬────────────────────────────────────────┐
//! │ Type (1) │              City (64)                 │
//! └──────────┴────────────────────────────────────────┘
//! ```
//!
//! ### Measurement Types
//! - 't': Temperature
//! - 'h': Humidity
//! - 'w': WindSpeed
//! - 'p': Pressure
//!
//! ### Response Block (9 bytes)
//! ```text
//! ┌─────────────┬──────────┬─────────────┐
//! │ Status (4)  │ Type (1) │  Value (4)  │
//! └─────────────┴──────────┴─────────────┘
//! ```
//!
//! ### Status Codes
//! - 0: SUCCESS
//! - 1: CITY_NOT_FOUND
//! - 2: INVALID_REQUEST

mod request;
mod response;
mod codec;

pub use request::{MeasurementType, Request};
pub use response::{Response, Status, TYPE_NONE};
pub use codec::{
    encode_request, decode_request, encode_response, decode_response,
    read_request, write_request, read_response, write_response,
    CITY_CAPACITY, REQUEST_SIZE, RESPONSE_SIZE,
};
