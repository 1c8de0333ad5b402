//! Errors produced while unmarshalling Etherscan responses.

/// Errors produced while turning a raw JSON response into a typed value.
///
/// Scalar decode failures are wrapped in [`UnmarshalError::Field`] or
/// [`UnmarshalError::Element`] on the way out so the caller can see which
/// wire field (or slice index) could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum UnmarshalError {
    /// The raw value has the wrong JSON kind for the destination.
    #[error("expected {expected}, got {found}")]
    Shape {
        /// The JSON kind the destination needs.
        expected: &'static str,
        /// Description of what was received.
        found: String,
    },

    /// Not a decimal integer.
    #[error("invalid integer: {0:?}")]
    InvalidInteger(String),

    /// The integer does not fit the destination type.
    #[error("integer {value} overflows {target}")]
    IntegerOverflow {
        /// The integer as received.
        value: String,
        /// Name of the destination type.
        target: &'static str,
    },

    /// Malformed or unprefixed hex.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// A fixed-size value of the wrong width.
    #[error("invalid length: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Required width in bytes.
        expected: usize,
        /// Width received.
        got: usize,
    },

    /// Not a `YYYY-MM-DD` date.
    #[error("invalid date: {0:?}")]
    InvalidDate(String),

    /// A timestamp outside the representable range.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Not a decimal number.
    #[error("invalid decimal: {0:?}")]
    InvalidDecimal(String),

    /// Not a floating point number.
    #[error("invalid float: {0:?}")]
    InvalidFloat(String),

    /// A string outside an enumeration's vocabulary.
    #[error("unknown {type_name} value: {value:?}")]
    UnknownVariant {
        /// Name of the enumeration.
        type_name: &'static str,
        /// The string received.
        value: String,
    },

    /// Decoding a record field failed.
    #[error("while unmarshalling field {field}: {source}")]
    Field {
        /// Wire name of the field.
        field: String,
        /// The underlying failure.
        #[source]
        source: Box<UnmarshalError>,
    },

    /// Decoding a slice element failed.
    #[error("while unmarshalling element {index}: {source}")]
    Element {
        /// Zero-based position in the slice.
        index: usize,
        /// The underlying failure.
        #[source]
        source: Box<UnmarshalError>,
    },
}

impl UnmarshalError {
    /// Describe a raw JSON value for a [`UnmarshalError::Shape`] message.
    pub(crate) fn shape(expected: &'static str, found: &serde_json::Value) -> Self {
        let found = match found {
            serde_json::Value::Null => "null".to_string(),
            serde_json::Value::Bool(b) => format!("boolean {b}"),
            serde_json::Value::Number(n) => format!("number {n}"),
            serde_json::Value::String(s) => format!("string {s:?}"),
            serde_json::Value::Array(a) => format!("array of {} elements", a.len()),
            serde_json::Value::Object(_) => "object".to_string(),
        };
        UnmarshalError::Shape { expected, found }
    }

    pub(crate) fn in_field(self, field: &str) -> Self {
        UnmarshalError::Field {
            field: field.to_string(),
            source: Box::new(self),
        }
    }

    pub(crate) fn in_element(self, index: usize) -> Self {
        UnmarshalError::Element {
            index,
            source: Box::new(self),
        }
    }
}

impl From<hex::FromHexError> for UnmarshalError {
    fn from(e: hex::FromHexError) -> Self {
        UnmarshalError::InvalidHex(e.to_string())
    }
}
