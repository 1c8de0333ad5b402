use serde_json::Value;

use super::{expect_str, UintCodec};
use crate::{Annotation, UnmarshalError};

/// Wire encodings of a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolCodec {
    /// A JSON `true`/`false`.
    Json,
    /// A `0x`-prefixed hex integer; non-zero is true.
    Hex,
    /// A decimal integer string; anything but zero is true.
    Numeric,
    /// The literal string `"true"`; any other string is false.
    Text,
}

impl BoolCodec {
    /// Precedence is `hex`, then `num`, then `str`.
    pub fn select(ann: &Annotation<'_>) -> Self {
        if ann.hex {
            BoolCodec::Hex
        } else if ann.num {
            BoolCodec::Numeric
        } else if ann.str {
            BoolCodec::Text
        } else {
            BoolCodec::Json
        }
    }

    /// Encode so that `decode` of the same variant reads it back.
    pub fn encode(self, value: bool) -> String {
        match self {
            BoolCodec::Json | BoolCodec::Text => value.to_string(),
            BoolCodec::Hex => UintCodec::Hex.encode(u64::from(value)),
            BoolCodec::Numeric => UintCodec::Decimal.encode(u64::from(value)),
        }
    }

    /// Decode a raw boolean value.
    pub fn decode(self, raw: &Value) -> Result<bool, UnmarshalError> {
        match self {
            BoolCodec::Json => match raw {
                Value::Bool(b) => Ok(*b),
                other => Err(UnmarshalError::shape("boolean", other)),
            },
            BoolCodec::Hex => Ok(UintCodec::Hex.decode(raw)? != 0),
            BoolCodec::Numeric => Ok(UintCodec::Decimal.decode(raw)? != 0),
            BoolCodec::Text => Ok(expect_str(raw)? == "true"),
        }
    }
}
