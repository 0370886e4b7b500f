//! Response definitions
//!
//! Represents responses to clients.

use super::Measurement;

/// Response status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Status {
    Success = 0x00,
    CityNotFound = 0x01,
    InvalidRequest = 0x02,
}

/// A response to send to the client
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// Status code
    pub status: Status,

    /// Echo of the requested kind; cleared when the request was invalid
    pub kind: Option<Measurement>,

    /// Measured value, meaningful only on success
    pub value: f32,
}

impl Response {
    /// Create a SUCCESS response carrying a measured value
    pub fn success(kind: Measurement, value: f32) -> Self {
        Self {
            status: Status::Success,
            kind: Some(kind),
            value,
        }
    }

    /// Create a CITY_NOT_FOUND response echoing the requested kind
    pub fn city_not_found(kind: Measurement) -> Self {
        Self {
            status: Status::CityNotFound,
            kind: Some(kind),
            value: 0.0,
        }
    }

    /// Create an INVALID_REQUEST response
    pub fn invalid_request() -> Self {
        Self {
            status: Status::InvalidRequest,
            kind: None,
            value: 0.0,
        }
    }
}
