//! Weather station
//!
//! The responder's domain logic: decides how to answer a query and draws
//! pseudo-random measurements. The allowlist and the per-kind ranges are
//! immutable after construction; every exchange is stateless, so two
//! identical requests yield independent draws.

use rand::Rng;

use crate::protocol::{Measurement, Request, Response};

/// Cities the station can report on
pub const DEFAULT_CITIES: [&str; 10] = [
    "bari", "roma", "milano", "napoli", "torino", "palermo", "genova", "bologna", "firenze",
    "venezia",
];

/// Answers weather queries against a fixed city allowlist
#[derive(Debug, Clone)]
pub struct Station {
    cities: Vec<String>,
}

impl Default for Station {
    fn default() -> Self {
        Self::new()
    }
}

impl Station {
    /// Create a station with the default city allowlist
    pub fn new() -> Self {
        Self::with_cities(DEFAULT_CITIES.iter().map(|c| c.to_string()))
    }

    /// Create a station with a custom allowlist
    pub fn with_cities(cities: impl IntoIterator<Item = String>) -> Self {
        Self {
            cities: cities.into_iter().collect(),
        }
    }

    /// Whether the city is on the allowlist, matched case-insensitively
    pub fn knows(&self, city: &str) -> bool {
        self.cities.iter().any(|c| c.eq_ignore_ascii_case(city))
    }

    /// Produce the response for a single request
    ///
    /// Kind validation happens before the city lookup: an unsupported kind
    /// is INVALID_REQUEST no matter what the city field contains.
    pub fn respond(&self, request: &Request) -> Response {
        match request.measurement() {
            None => Response::invalid_request(),
            Some(kind) if !self.knows(&request.city) => Response::city_not_found(kind),
            Some(kind) => Response::success(kind, sample(kind)),
        }
    }
}

/// Draw a measurement uniformly from the kind's range, on a 0.1-unit grid
///
/// Ranges:
/// - temperature: [-10.0, 40.0] °C
/// - humidity:    [20.0, 100.0] %
/// - wind:        [0.0, 100.0] km/h
/// - pressure:    [950.0, 1050.0] hPa
pub fn sample(kind: Measurement) -> f32 {
    let mut rng = rand::thread_rng();
    let (base, steps) = match kind {
        Measurement::Temperature => (-10.0, 500),
        Measurement::Humidity => (20.0, 800),
        Measurement::Wind => (0.0, 1000),
        Measurement::Pressure => (950.0, 1000),
    };
    base + rng.gen_range(0..=steps) as f32 / 10.0
}

/// The inclusive value range for a measurement kind
pub fn range(kind: Measurement) -> (f32, f32) {
    match kind {
        Measurement::Temperature => (-10.0, 40.0),
        Measurement::Humidity => (20.0, 100.0),
        Measurement::Wind => (0.0, 100.0),
        Measurement::Pressure => (950.0, 1050.0),
    }
}
