//! # meteo
//!
//! A minimal TCP weather-query client/server pair with:
//! - Fixed-size binary request/response records
//! - Serial, one-connection-at-a-time server
//! - Per-kind pseudo-random measurement generators
//! - One exchange per connection, no keep-alive
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────┐   Request (65 B)    ┌───────────────────────┐
//! │  meteo-cli   │ ──────────────────▶ │      meteo-server     │
//! │  (one-shot   │                     │ (serial accept loop)  │
//! │  requester)  │ ◀────────────────── │                       │
//! └──────────────┘   Response (6 B)    └───────────┬───────────┘
//!                                                  │
//!                                      ┌───────────▼───────────┐
//!                                      │        Station        │
//!                                      │  (city allowlist +    │
//!                                      │  random generators)   │
//!                                      └───────────────────────┘
//! ```
//!
//! Each exchange opens a fresh connection, carries exactly one request and
//! one response, and closes. No state is shared between exchanges.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod station;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{MeteoError, Result};
pub use config::Config;
pub use station::Station;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of meteo
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
