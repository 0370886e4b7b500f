//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! The byte layout is explicit: the two ends share these functions and
//! never depend on in-memory struct layout or padding.
//!
//! ## Wire Format
//!
//! ### Request (65 bytes)
//! ```text
//! ┌──────────┬──────────────────────────────────────┐
//! │ Kind (1) │   City (64, NUL-terminated/padded)   │
//! └──────────┴──────────────────────────────────────┘
//! ```
//!
//! ### Response (6 bytes)
//! ```text
//! ┌───────────┬──────────┬─────────────────┐
//! │ Status (1)│ Kind (1) │ Value (4, f32be)│
//! └───────────┴──────────┴─────────────────┘
//! ```

use std::io::{Read, Write};

use crate::error::{MeteoError, Result};

use super::{Measurement, Request, Response, Status, CITY_CAPACITY};

/// Total request size on the wire: kind byte + city field
pub const REQUEST_SIZE: usize = 1 + CITY_CAPACITY;

/// Total response size on the wire: status + kind + f32 value
pub const RESPONSE_SIZE: usize = 1 + 1 + 4;

// =============================================================================
// Request Encoding/Decoding
// =============================================================================

/// Encode a request to its fixed-size wire form
///
/// Format: kind (1) + city (64, NUL-terminated and NUL-padded)
pub fn encode_request(request: &Request) -> Result<Vec<u8>> {
    let city = request.city.as_bytes();
    if city.is_empty() {
        return Err(MeteoError::Protocol("city must not be empty".to_string()));
    }
    if city.len() > CITY_CAPACITY - 1 {
        return Err(MeteoError::Protocol(format!(
            "city too long: {} bytes (max {})",
            city.len(),
            CITY_CAPACITY - 1
        )));
    }
    // Request fields are pub, so re-check here: an interior NUL would
    // truncate the name inside the NUL-terminated field
    if city.contains(&0) {
        return Err(MeteoError::Protocol(
            "city must not contain NUL bytes".to_string(),
        ));
    }

    let mut message = vec![0u8; REQUEST_SIZE];
    message[0] = request.kind;
    message[1..1 + city.len()].copy_from_slice(city);
    Ok(message)
}

/// Decode a request from its fixed-size wire form
pub fn decode_request(bytes: &[u8]) -> Result<Request> {
    if bytes.len() < REQUEST_SIZE {
        return Err(MeteoError::Protocol(format!(
            "Incomplete request: expected {} bytes, got {}",
            REQUEST_SIZE,
            bytes.len()
        )));
    }

    let kind = bytes[0];
    let city_field = &bytes[1..REQUEST_SIZE];

    // City is NUL-terminated within the field
    let city_len = city_field
        .iter()
        .position(|&b| b == 0)
        .ok_or_else(|| MeteoError::Protocol("city field not NUL-terminated".to_string()))?;
    if city_len == 0 {
        return Err(MeteoError::Protocol("city must not be empty".to_string()));
    }

    let city = std::str::from_utf8(&city_field[..city_len])
        .map_err(|e| MeteoError::Protocol(format!("city is not valid UTF-8: {e}")))?
        .to_string();

    Ok(Request { kind, city })
}

// =============================================================================
// Response Encoding/Decoding
// =============================================================================

/// Encode a response to its fixed-size wire form
///
/// Format: status (1) + kind (1, 0 when cleared) + value (4, f32 big-endian)
pub fn encode_response(response: &Response) -> Vec<u8> {
    let mut message = Vec::with_capacity(RESPONSE_SIZE);
    message.push(response.status as u8);
    message.push(response.kind.map(Measurement::code).unwrap_or(0));
    message.extend_from_slice(&response.value.to_be_bytes());
    message
}

/// Decode a response from its fixed-size wire form
pub fn decode_response(bytes: &[u8]) -> Result<Response> {
    if bytes.len() < RESPONSE_SIZE {
        return Err(MeteoError::Protocol(format!(
            "Incomplete response: expected {} bytes, got {}",
            RESPONSE_SIZE,
            bytes.len()
        )));
    }

    let status = match bytes[0] {
        0x00 => Status::Success,
        0x01 => Status::CityNotFound,
        0x02 => Status::InvalidRequest,
        other => {
            return Err(MeteoError::Protocol(format!(
                "Unknown response status: 0x{other:02x}"
            )))
        }
    };

    let kind = match bytes[1] {
        0 => None,
        code => Some(Measurement::from_code(code).ok_or_else(|| {
            MeteoError::Protocol(format!("Unknown measurement code: 0x{code:02x}"))
        })?),
    };

    if status == Status::Success && kind.is_none() {
        return Err(MeteoError::Protocol(
            "SUCCESS response without a measurement kind".to_string(),
        ));
    }

    let value = f32::from_be_bytes([bytes[2], bytes[3], bytes[4], bytes[5]]);

    Ok(Response {
        status,
        kind,
        value,
    })
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read a complete request from a stream
///
/// Blocks until the full fixed-size record is received or an error occurs
pub fn read_request<R: Read>(reader: &mut R) -> Result<Request> {
    let mut buf = [0u8; REQUEST_SIZE];
    reader.read_exact(&mut buf)?;
    decode_request(&buf)
}

/// Write a request to a stream
pub fn write_request<W: Write>(writer: &mut W, request: &Request) -> Result<()> {
    let bytes = encode_request(request)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Read a complete response from a stream
pub fn read_response<R: Read>(reader: &mut R) -> Result<Response> {
    let mut buf = [0u8; RESPONSE_SIZE];
    reader.read_exact(&mut buf)?;
    decode_response(&buf)
}

/// Write a response to a stream
pub fn write_response<W: Write>(writer: &mut W, response: &Response) -> Result<()> {
    let bytes = encode_response(response);
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}
