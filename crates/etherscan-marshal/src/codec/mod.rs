//! Scalar codecs.
//!
//! Each semantic type has a closed codec enum whose variants are the wire
//! encodings the Etherscan API uses for it. `select` picks a variant from a
//! field's [`Annotation`](crate::Annotation); `encode` produces the request
//! parameter text and `decode` reads the raw JSON response value.

mod bigint;
mod boolean;
mod bytes;
mod decimal;
mod timestamp;
mod uint;

pub use bigint::BigIntCodec;
pub use boolean::BoolCodec;
pub use bytes::BytesCodec;
pub use decimal::DecimalCodec;
pub use timestamp::TimestampCodec;
pub use uint::UintCodec;

pub(crate) use bytes::parse_fixed;

use std::num::IntErrorKind;

use serde_json::Value;

use crate::UnmarshalError;

/// Borrow the string inside a raw JSON value.
pub(crate) fn expect_str(raw: &Value) -> Result<&str, UnmarshalError> {
    match raw {
        Value::String(s) => Ok(s),
        other => Err(UnmarshalError::shape("string", other)),
    }
}

/// Strip the mandatory `0x`/`0X` prefix of a hex string.
pub(crate) fn strip_hex_prefix(s: &str) -> Result<&str, UnmarshalError> {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .ok_or_else(|| UnmarshalError::InvalidHex(format!("{s:?} is missing the 0x prefix")))
}

/// Parse an unsigned integer in the given radix, separating overflow from
/// malformed input.
pub(crate) fn parse_u64(digits: &str, radix: u32, original: &str) -> Result<u64, UnmarshalError> {
    // from_str_radix accepts a leading '+', the wire format does not.
    let well_formed = !digits.is_empty()
        && digits.bytes().all(|b| {
            if radix == 16 {
                b.is_ascii_hexdigit()
            } else {
                b.is_ascii_digit()
            }
        });
    if !well_formed {
        return Err(if radix == 16 {
            UnmarshalError::InvalidHex(original.to_string())
        } else {
            UnmarshalError::InvalidInteger(original.to_string())
        });
    }
    u64::from_str_radix(digits, radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => UnmarshalError::IntegerOverflow {
            value: original.to_string(),
            target: "u64",
        },
        _ if radix == 16 => UnmarshalError::InvalidHex(original.to_string()),
        _ => UnmarshalError::InvalidInteger(original.to_string()),
    })
}

/// Decode a plain UTF-8 string field.
pub fn decode_text(raw: &Value) -> Result<String, UnmarshalError> {
    expect_str(raw).map(str::to_string)
}

/// Decode a floating point field.
///
/// The API sends floats both as JSON numbers and as numeric strings (for
/// example inside comma-joined lists), so both are accepted.
pub fn decode_float(raw: &Value) -> Result<f64, UnmarshalError> {
    match raw {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| UnmarshalError::InvalidFloat(n.to_string())),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| UnmarshalError::InvalidFloat(s.clone())),
        other => Err(UnmarshalError::shape("number or numeric string", other)),
    }
}
