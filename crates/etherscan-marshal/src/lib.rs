#![deny(missing_docs)]

//! # etherscan-marshal
//!
//! Annotation-driven conversion between typed records and the loosely typed
//! wire formats of the Etherscan API.
//!
//! The same logical type arrives in different shapes depending on the
//! endpoint: decimal strings, `0x` hex, 32-byte hex timestamps, calendar
//! dates, comma-grouped decimals and comma-joined lists inside one string.
//! Every field carries a short directive (`"name,modifier,..."`, see
//! [`Annotation`]) and one shared engine does the rest:
//!
//! - [`marshal_request`] turns a [`Request`] into a flat [`WireMap`] of
//!   query parameters, omitting empty values.
//! - [`unmarshal_record`] and [`unmarshal_response`] fill a [`Response`]
//!   (or any [`Decode`] value) from the raw JSON `result`.
//!
//! # Example
//!
//! ```
//! use etherscan_marshal::{decode_record, unmarshal_record, Response, Slot};
//!
//! #[derive(Default)]
//! struct Countdown {
//!     current_block: u64,
//!     remaining_blocks: u64,
//! }
//!
//! impl Response for Countdown {
//!     fn slots(&mut self) -> Vec<Slot<'_>> {
//!         vec![
//!             Slot::new("CurrentBlock", "CurrentBlock", &mut self.current_block),
//!             Slot::new("RemainingBlocks", "RemainingBlock", &mut self.remaining_blocks),
//!         ]
//!     }
//! }
//!
//! decode_record!(Countdown);
//!
//! let raw = serde_json::json!({"CurrentBlock": "12715477", "RemainingBlock": "3284523"});
//! let countdown: Countdown = unmarshal_record(&raw).unwrap();
//! assert_eq!(countdown.remaining_blocks, 3_284_523);
//! ```

pub mod annotation;
pub mod codec;
pub mod error;
pub mod request;
pub mod response;
pub mod types;
pub mod value;

pub use annotation::Annotation;
pub use error::UnmarshalError;
pub use request::{marshal_request, Field, Request, WireMap};
pub use response::{
    fill_record, unmarshal_record, unmarshal_response, unmarshal_response_with, Response, Slot,
};
pub use types::{Address, Bytes, Hash, ADDRESS_LENGTH, HASH_LENGTH};
pub use value::{is_absent, Assign, Decode, Encode};

#[doc(hidden)]
pub use serde_json;
