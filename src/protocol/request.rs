//! Request definitions
//!
//! Represents weather queries from clients.

use crate::error::{MeteoError, Result};

/// Capacity of the city field on the wire, including the NUL terminator
pub const CITY_CAPACITY: usize = 64;

/// Supported measurement kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Measurement {
    Temperature = b't',
    Humidity = b'h',
    Wind = b'w',
    Pressure = b'p',
}

impl Measurement {
    /// All supported kinds
    pub const ALL: [Measurement; 4] = [
        Measurement::Temperature,
        Measurement::Humidity,
        Measurement::Wind,
        Measurement::Pressure,
    ];

    /// The wire code byte for this kind
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Parse a wire code byte; `None` for unsupported codes
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            b't' => Some(Measurement::Temperature),
            b'h' => Some(Measurement::Humidity),
            b'w' => Some(Measurement::Wind),
            b'p' => Some(Measurement::Pressure),
            _ => None,
        }
    }

    /// Human-readable label for display
    pub fn label(self) -> &'static str {
        match self {
            Measurement::Temperature => "Temperature",
            Measurement::Humidity => "Humidity",
            Measurement::Wind => "Wind",
            Measurement::Pressure => "Pressure",
        }
    }

    /// Measurement unit for display
    pub fn unit(self) -> &'static str {
        match self {
            Measurement::Temperature => "°C",
            Measurement::Humidity => "%",
            Measurement::Wind => "km/h",
            Measurement::Pressure => "hPa",
        }
    }
}

/// A weather query as sent on the wire
///
/// The kind is kept as the raw code byte: clients transmit whatever
/// character they were given, and validation happens server-side so an
/// unsupported kind can be answered with an INVALID_REQUEST status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Raw measurement code byte
    pub kind: u8,

    /// City name, lowercase by convention
    pub city: String,
}

impl Request {
    /// Create a request, validating the city fits the wire field
    pub fn new(kind: u8, city: impl Into<String>) -> Result<Self> {
        let city = city.into();
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
        // The wire field is NUL-terminated, so an interior NUL would
        // truncate the name on decode
        if city.as_bytes().contains(&0) {
            return Err(MeteoError::Protocol(
                "city must not contain NUL bytes".to_string(),
            ));
        }
        Ok(Self { kind, city })
    }

    /// Parse a CLI request string of the form `"<kind-char> <city>"`
    ///
    /// The kind is the first character and the city starts at a fixed
    /// offset of 2; the city is lowercased before transmission.
    pub fn parse(input: &str) -> Result<Self> {
        if input.len() < 3 {
            return Err(MeteoError::RequestFormat(format!(
                "expected \"<type> <city>\", got {input:?}"
            )));
        }
        let kind = input.as_bytes()[0];
        let city = input
            .get(2..)
            .ok_or_else(|| {
                MeteoError::RequestFormat(format!("expected \"<type> <city>\", got {input:?}"))
            })?
            .to_lowercase();
        Self::new(kind, city)
    }

    /// The parsed measurement kind, if supported
    pub fn measurement(&self) -> Option<Measurement> {
        Measurement::from_code(self.kind)
    }
}
