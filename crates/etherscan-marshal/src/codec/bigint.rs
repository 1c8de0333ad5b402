use num_bigint::BigInt;
use num_traits::Num;
use serde_json::Value;

use super::{expect_str, strip_hex_prefix};
use crate::{Annotation, UnmarshalError};

/// Wire encodings of an arbitrary-precision integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigIntCodec {
    /// Decimal digits inside a JSON string, e.g. `"5314181600000000000"`.
    Decimal,
    /// Minimal big-endian `0x`-prefixed hex inside a JSON string.
    Hex,
    /// A bare JSON number of any magnitude.
    Number,
}

impl BigIntCodec {
    /// `hex` takes precedence over `num`.
    pub fn select(ann: &Annotation<'_>) -> Self {
        if ann.hex {
            BigIntCodec::Hex
        } else if ann.num {
            BigIntCodec::Number
        } else {
            BigIntCodec::Decimal
        }
    }

    /// Encode as decimal, or minimal `0x` hex for the hex variant.
    pub fn encode(self, value: &BigInt) -> String {
        match self {
            BigIntCodec::Decimal | BigIntCodec::Number => value.to_string(),
            BigIntCodec::Hex => format!("{value:#x}"),
        }
    }

    /// Decode a raw big integer value.
    pub fn decode(self, raw: &Value) -> Result<BigInt, UnmarshalError> {
        match self {
            BigIntCodec::Decimal => {
                let s = expect_str(raw)?;
                parse_decimal(s)
            }
            BigIntCodec::Hex => {
                let s = expect_str(raw)?;
                let (negative, unsigned) = match s.strip_prefix('-') {
                    Some(rest) => (true, rest),
                    None => (false, s),
                };
                let digits = strip_hex_prefix(unsigned)?;
                if digits.is_empty() {
                    return Err(UnmarshalError::InvalidHex(format!("{s:?} has no digits")));
                }
                if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
                    return Err(UnmarshalError::InvalidHex(s.to_string()));
                }
                let magnitude = BigInt::from_str_radix(digits, 16)
                    .map_err(|_| UnmarshalError::InvalidHex(s.to_string()))?;
                Ok(if negative { -magnitude } else { magnitude })
            }
            BigIntCodec::Number => match raw {
                // The number keeps its literal text, so no digits are lost.
                Value::Number(n) => parse_decimal(&n.to_string()),
                other => Err(UnmarshalError::shape("number", other)),
            },
        }
    }
}

fn parse_decimal(s: &str) -> Result<BigInt, UnmarshalError> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(UnmarshalError::InvalidInteger(s.to_string()));
    }
    BigInt::from_str_radix(s, 10).map_err(|_| UnmarshalError::InvalidInteger(s.to_string()))
}
