//! Protocol Module
//!
//! Defines the wire protocol for client-server communication.
//!
//! ## Protocol Format (Fixed-Size Binary)
//!
//! Both directions carry a single fixed-size record per connection: one
//! request from the client, one response from the server. There is no
//! length prefix and no versioning; both ends agree on the layouts below.
//!
//! ### Request Format (65 bytes)
//! ```text
//! ┌──────────┬──────────────────────────────────────┐
//! │ Kind (1) │          City (64)                   │
//! └──────────┴──────────────────────────────────────┘
//! ```
//! - Kind: ASCII code byte, transmitted as given by the client
//!   - `t`: temperature
//!   - `h`: humidity
//!   - `w`: wind
//!   - `p`: pressure
//! - City: lowercase UTF-8 name, NUL-terminated, NUL-padded to capacity
//!
//! ### Response Format (6 bytes)
//! ```text
//! ┌───────────┬──────────┬─────────────────┐
//! │ Status (1)│ Kind (1) │   Value (4)     │
//! └───────────┴──────────┴─────────────────┘
//! ```
//! - Status codes:
//!   - 0x00: SUCCESS
//!   - 0x01: CITY_NOT_FOUND
//!   - 0x02: INVALID_REQUEST
//! - Kind: echo of the request kind on SUCCESS and CITY_NOT_FOUND,
//!   0x00 otherwise
//! - Value: f32, big-endian; meaningful only on SUCCESS, 0 otherwise

mod request;
mod response;
mod codec;

pub use request::{Measurement, Request, CITY_CAPACITY};
pub use response::{Response, Status};
pub use codec::{
    decode_request, decode_response, encode_request, encode_response, read_request,
    read_response, write_request, write_response, REQUEST_SIZE, RESPONSE_SIZE,
};
