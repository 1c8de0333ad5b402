use serde_json::Value;

use super::{expect_str, strip_hex_prefix};
use crate::{Annotation, UnmarshalError};

/// Sentinel the API sends in place of byte strings it no longer returns.
const DEPRECATED: &str = "deprecated";

/// Wire encodings of a raw byte string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BytesCodec {
    /// `0x`-prefixed hex inside a JSON string.
    Hex,
}

impl BytesCodec {
    /// Byte strings are always hex on the wire.
    pub fn select(_ann: &Annotation<'_>) -> Self {
        BytesCodec::Hex
    }

    /// An empty byte string encodes to the empty string so the marshaller
    /// omits it.
    pub fn encode(self, value: &[u8]) -> String {
        match self {
            BytesCodec::Hex if value.is_empty() => String::new(),
            BytesCodec::Hex => format!("0x{}", hex::encode(value)),
        }
    }

    /// `"deprecated"` decodes to an empty byte string.
    pub fn decode(self, raw: &Value) -> Result<Vec<u8>, UnmarshalError> {
        match self {
            BytesCodec::Hex => {
                let s = expect_str(raw)?;
                if s == DEPRECATED {
                    return Ok(Vec::new());
                }
                let digits = strip_hex_prefix(s)?;
                Ok(hex::decode(digits)?)
            }
        }
    }
}

/// Parse a fixed-width hex value (address, hash). The `0x` prefix is optional.
pub(crate) fn parse_fixed<const N: usize>(s: &str) -> Result<[u8; N], UnmarshalError> {
    let digits = strip_hex_prefix(s).unwrap_or(s);
    if digits.len() != N * 2 {
        return Err(UnmarshalError::InvalidLength {
            expected: N,
            got: digits.len() / 2,
        });
    }
    let mut out = [0u8; N];
    hex::decode_to_slice(digits, &mut out)?;
    Ok(out)
}
