use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde_json::Value;

use crate::{Annotation, UnmarshalError};

/// Wire encodings of a decimal number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalCodec {
    /// A decimal string or JSON number, e.g. `"0.03161"`.
    Plain,
    /// A decimal string with `,` thousands separators, e.g. `"2,524.46"`.
    Comma,
}

impl DecimalCodec {
    /// Pick the variant for a field.
    pub fn select(ann: &Annotation<'_>) -> Self {
        if ann.comma {
            DecimalCodec::Comma
        } else {
            DecimalCodec::Plain
        }
    }

    /// Both forms encode without grouping.
    pub fn encode(self, value: &BigDecimal) -> String {
        match self {
            DecimalCodec::Plain | DecimalCodec::Comma => value.to_string(),
        }
    }

    /// Accepts a JSON string or number.
    pub fn decode(self, raw: &Value) -> Result<BigDecimal, UnmarshalError> {
        let text = match raw {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            other => return Err(UnmarshalError::shape("decimal string or number", other)),
        };
        let text = match self {
            DecimalCodec::Plain => text,
            DecimalCodec::Comma => text.replace(',', ""),
        };
        BigDecimal::from_str(&text).map_err(|_| UnmarshalError::InvalidDecimal(text))
    }
}
