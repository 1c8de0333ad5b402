use serde_json::Value;

use super::{expect_str, parse_u64, strip_hex_prefix};
use crate::{Annotation, UnmarshalError};

/// Wire encodings of an unsigned integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UintCodec {
    /// Decimal digits inside a JSON string, e.g. `"47884"`.
    Decimal,
    /// `0x`-prefixed hex inside a JSON string, e.g. `"0x2165403"`.
    Hex,
    /// A bare JSON number.
    Number,
}

impl UintCodec {
    /// `num` takes precedence over `hex`.
    pub fn select(ann: &Annotation<'_>) -> Self {
        if ann.num {
            UintCodec::Number
        } else if ann.hex {
            UintCodec::Hex
        } else {
            UintCodec::Decimal
        }
    }

    /// Encode for a request parameter.
    pub fn encode(self, value: u64) -> String {
        match self {
            UintCodec::Decimal | UintCodec::Number => value.to_string(),
            UintCodec::Hex => format!("{value:#x}"),
        }
    }

    /// Decode a raw unsigned integer value.
    pub fn decode(self, raw: &Value) -> Result<u64, UnmarshalError> {
        match self {
            UintCodec::Decimal => {
                let s = expect_str(raw)?;
                parse_u64(s, 10, s)
            }
            UintCodec::Hex => {
                let s = expect_str(raw)?;
                let digits = strip_hex_prefix(s)?;
                // Some endpoints answer a bare "0x" for zero.
                if digits.is_empty() {
                    return Ok(0);
                }
                parse_u64(digits, 16, s)
            }
            UintCodec::Number => match raw {
                Value::Number(n) => n
                    .as_u64()
                    .ok_or_else(|| UnmarshalError::InvalidInteger(n.to_string())),
                other => Err(UnmarshalError::shape("number", other)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_select() {
        assert_eq!(UintCodec::select(&Annotation::parse("")), UintCodec::Decimal);
        assert_eq!(UintCodec::select(&Annotation::parse("tag,hex")), UintCodec::Hex);
        assert_eq!(UintCodec::select(&Annotation::parse("x,hex,num")), UintCodec::Number);
    }

    #[test]
    fn test_encode() {
        assert_eq!(UintCodec::Decimal.encode(123456), "123456");
        assert_eq!(UintCodec::Hex.encode(123456), "0x1e240");
        assert_eq!(UintCodec::Hex.encode(420), "0x1a4");
        assert_eq!(UintCodec::Hex.encode(0), "0x0");
        assert_eq!(UintCodec::Number.encode(7), "7");
    }

    #[test]
    fn test_decode_decimal() {
        assert_eq!(UintCodec::Decimal.decode(&json!("47884")).unwrap(), 47884);
        assert_eq!(
            UintCodec::Decimal.decode(&json!("18446744073709551615")).unwrap(),
            u64::MAX
        );
        assert!(matches!(
            UintCodec::Decimal.decode(&json!("18446744073709551616")),
            Err(UnmarshalError::IntegerOverflow { .. })
        ));
        assert!(matches!(
            UintCodec::Decimal.decode(&json!("12a")),
            Err(UnmarshalError::InvalidInteger(_))
        ));
        assert!(matches!(
            UintCodec::Decimal.decode(&json!("+5")),
            Err(UnmarshalError::InvalidInteger(_))
        ));
        assert!(matches!(
            UintCodec::Decimal.decode(&json!(12)),
            Err(UnmarshalError::Shape { .. })
        ));
    }

    #[test]
    fn test_decode_hex() {
        assert_eq!(UintCodec::Hex.decode(&json!("0x2165403")).unwrap(), 35_017_731);
        assert_eq!(UintCodec::Hex.decode(&json!("0x0")).unwrap(), 0);
        assert_eq!(UintCodec::Hex.decode(&json!("0x")).unwrap(), 0);
        assert!(matches!(
            UintCodec::Hex.decode(&json!("2165403")),
            Err(UnmarshalError::InvalidHex(_))
        ));
        assert!(matches!(
            UintCodec::Hex.decode(&json!("0xzz")),
            Err(UnmarshalError::InvalidHex(_))
        ));
        assert!(matches!(
            UintCodec::Hex.decode(&json!("0x+1")),
            Err(UnmarshalError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_decode_number() {
        assert_eq!(UintCodec::Number.decode(&json!(1234)).unwrap(), 1234);
        assert!(UintCodec::Number.decode(&json!(-1)).is_err());
        assert!(UintCodec::Number.decode(&json!(1.5)).is_err());
        assert!(UintCodec::Number.decode(&json!("1234")).is_err());
    }
}
