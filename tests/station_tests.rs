//! Station Tests
//!
//! Tests for query validation and measurement generation.

use meteo::protocol::{Measurement, Request, Status};
use meteo::station::{range, sample, DEFAULT_CITIES};
use meteo::Station;

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_all_kinds_all_cities_succeed() {
    let station = Station::new();

    for kind in Measurement::ALL {
        for city in DEFAULT_CITIES {
            let req = Request::new(kind.code(), city).unwrap();
            let resp = station.respond(&req);

            assert_eq!(resp.status, Status::Success, "{kind:?} {city}");
            assert_eq!(resp.kind, Some(kind));

            let (lo, hi) = range(kind);
            assert!(
                resp.value >= lo && resp.value <= hi,
                "{kind:?} value {} outside [{lo}, {hi}]",
                resp.value
            );
        }
    }
}

#[test]
fn test_city_match_is_case_insensitive() {
    let station = Station::new();

    for city in ["BARI", "Roma", "mIlAnO"] {
        let req = Request::new(b't', city).unwrap();
        assert_eq!(station.respond(&req).status, Status::Success, "{city}");
    }
}

#[test]
fn test_unknown_city_not_found() {
    let station = Station::new();
    let req = Request::new(b'h', "atlantide").unwrap();
    let resp = station.respond(&req);

    assert_eq!(resp.status, Status::CityNotFound);
    assert_eq!(resp.kind, Some(Measurement::Humidity));
    assert_eq!(resp.value, 0.0);
}

#[test]
fn test_unsupported_kind_is_invalid_request() {
    let station = Station::new();

    // Invalid kind wins regardless of the city, known or not
    for city in ["bari", "atlantide"] {
        let req = Request::new(b'x', city).unwrap();
        let resp = station.respond(&req);

        assert_eq!(resp.status, Status::InvalidRequest);
        assert_eq!(resp.kind, None);
        assert_eq!(resp.value, 0.0);
    }
}

#[test]
fn test_custom_allowlist() {
    let station = Station::with_cities(["springfield".to_string()]);

    let known = Request::new(b'w', "springfield").unwrap();
    assert_eq!(station.respond(&known).status, Status::Success);

    let unknown = Request::new(b'w', "bari").unwrap();
    assert_eq!(station.respond(&unknown).status, Status::CityNotFound);
}

#[test]
fn test_repeated_requests_are_independent_successes() {
    let station = Station::new();
    let req = Request::new(b't', "bari").unwrap();

    let (lo, hi) = range(Measurement::Temperature);
    for _ in 0..2 {
        let resp = station.respond(&req);
        assert_eq!(resp.status, Status::Success);
        assert!(resp.value >= lo && resp.value <= hi);
    }
}

// =============================================================================
// Generator Tests
// =============================================================================

#[test]
fn test_samples_stay_in_range() {
    for kind in Measurement::ALL {
        let (lo, hi) = range(kind);
        for _ in 0..1000 {
            let value = sample(kind);
            assert!(
                value >= lo && value <= hi,
                "{kind:?} value {value} outside [{lo}, {hi}]"
            );
        }
    }
}
