//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! Both blocks are fixed-width and byte-exact: no delimiters, no length
//! prefixes. A receiver that reads exactly [`REQUEST_SIZE`] or
//! [`RESPONSE_SIZE`] bytes holds a complete, unambiguous value, which is
//! what lets the transport boundary work on an exactly-N-bytes contract.
//! Multi-byte fields are big-endian.
//!
//! ## Wire Format
//!
//! ### Request Block (65 bytes)
//! ```text
//! ┌──────────┬────────────────────────────────────────┐
//! │ Type (1) │              City (64)                 │
//! └──────────┴────────────────────────────────────────┘
//! offset 0      raw measurement-type code
//! offset 1..65  UTF-8 text, NUL-terminated within capacity,
//!               unused tail zero-filled
//! ```
//!
//! ### Response Block (9 bytes)
//! ```text
//! ┌─────────────┬──────────┬─────────────┐
//! │ Status (4)  │ Type (1) │  Value (4)  │
//! └─────────────┴──────────┴─────────────┘
//! offset 0..4   status code, u32 big-endian
//! offset 4      measurement-type code (0 unless status = 0)
//! offset 5..9   measurement value, f32 big-endian (0.0 unless status = 0)
//! ```
//!
//! Decoding a full block never fails: every bit pattern is interpretable.
//! An out-of-range status becomes [`Status::Unknown`]; a nonsensical type
//! byte is the validator's problem, not the codec's.

use std::io::{Read, Write};

use crate::error::Result;
use super::{Request, Response, Status};

/// Capacity of the city field, terminator included
pub const CITY_CAPACITY: usize = 64;

/// Request block size: 1 byte type + 64 bytes city
pub const REQUEST_SIZE: usize = 1 + CITY_CAPACITY;

/// Response block size: 4 bytes status + 1 byte type + 4 bytes value
pub const RESPONSE_SIZE: usize = 4 + 1 + 4;

// =============================================================================
// Request Encoding/Decoding
// =============================================================================

/// Encode a request into its fixed-width block
///
/// The city is clamped to `CITY_CAPACITY - 1` bytes so the field is always
/// NUL-terminated, whatever the caller handed in.
pub fn encode_request(request: &Request) -> [u8; REQUEST_SIZE] {
    let mut block = [0u8; REQUEST_SIZE];
    block[0] = request.type_code;

    let city = request.city.as_bytes();
    let len = city.len().min(CITY_CAPACITY - 1);
    block[1..1 + len].copy_from_slice(&city[..len]);

    block
}

/// Decode a request from a full block
///
/// Never fails: the city is the text up to the first NUL, read as lossy
/// UTF-8, and the type byte is passed through raw for the validator.
pub fn decode_request(block: &[u8; REQUEST_SIZE]) -> Request {
    let city_field = &block[1..];
    let len = city_field
        .iter()
        .position(|&b| b == 0)
        .unwrap_or(city_field.len());
    let city = String::from_utf8_lossy(&city_field[..len]).into_owned();

    Request {
        type_code: block[0],
        city,
    }
}

// =============================================================================
// Response Encoding/Decoding
// =============================================================================

/// Encode a response into its fixed-width block
pub fn encode_response(response: &Response) -> [u8; RESPONSE_SIZE] {
    let mut block = [0u8; RESPONSE_SIZE];
    block[0..4].copy_from_slice(&response.status.code().to_be_bytes());
    block[4] = response.type_code;
    block[5..9].copy_from_slice(&response.value.to_be_bytes());
    block
}

/// Decode a response from a full block
///
/// Never fails: a status code outside {0,1,2} is preserved as
/// [`Status::Unknown`] for the client to render defensively.
pub fn decode_response(block: &[u8; RESPONSE_SIZE]) -> Response {
    let status = u32::from_be_bytes([block[0], block[1], block[2], block[3]]);
    let value = f32::from_be_bytes([block[5], block[6], block[7], block[8]]);

    Response {
        status: Status::from_code(status),
        type_code: block[4],
        value,
    }
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read exactly one request block from a stream
///
/// Blocks until the full block is received; a short transfer (peer closed
/// mid-block) surfaces as an IO error.
pub fn read_request<R: Read>(reader: &mut R) -> Result<Request> {
    let mut block = [0u8; REQUEST_SIZE];
    reader.read_exact(&mut block)?;
    Ok(decode_request(&block))
}

/// Write a request block to a stream
pub fn write_request<W: Write>(writer: &mut W, request: &Request) -> Result<()> {
    writer.write_all(&encode_request(request))?;
    writer.flush()?;
    Ok(())
}

/// Read exactly one response block from a stream
pub fn read_response<R: Read>(reader: &mut R) -> Result<Response> {
    let mut block = [0u8; RESPONSE_SIZE];
    reader.read_exact(&mut block)?;
    Ok(decode_response(&block))
}

/// Write a response block to a stream
pub fn write_response<W: Write>(writer: &mut W, response: &Response) -> Result<()> {
    writer.write_all(&encode_response(response))?;
    writer.flush()?;
    Ok(())
}
