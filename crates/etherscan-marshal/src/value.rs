//! The [`Encode`] and [`Decode`] traits and their implementations for every
//! supported field value type.
//!
//! Scalars delegate to the codec enum for their semantic type; containers
//! (`Option`, `Vec`) delegate to their element type.

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use serde_json::Value;

use crate::codec::{
    decode_float, decode_text, expect_str, BigIntCodec, BoolCodec, BytesCodec, DecimalCodec,
    TimestampCodec, UintCodec,
};
use crate::types::{Address, Bytes, Hash};
use crate::{Annotation, UnmarshalError};

/// A value that can be written as a request parameter.
pub trait Encode: Sync {
    /// Format the value for the wire.
    ///
    /// # Arguments
    /// * `ann` - The annotation of the field holding this value.
    ///
    /// # Returns
    /// The parameter text. An empty string means the parameter is omitted.
    fn encode(&self, ann: &Annotation<'_>) -> String;
}

/// A value that can be read from a raw JSON response value.
pub trait Decode: Sized {
    /// Decode a present (non-null, non-empty) raw value.
    ///
    /// # Arguments
    /// * `raw` - The raw JSON value taken from the response.
    /// * `ann` - The annotation of the field receiving this value.
    ///
    /// # Returns
    /// The decoded value, or the first decode error encountered.
    fn decode(raw: &Value, ann: &Annotation<'_>) -> Result<Self, UnmarshalError>;
}

/// Object-safe form of [`Decode`]: overwrite `self` with a decoded value.
pub trait Assign {
    /// Decode `raw` and store the result in place.
    fn assign(&mut self, raw: &Value, ann: &Annotation<'_>) -> Result<(), UnmarshalError>;
}

impl<T: Decode> Assign for T {
    fn assign(&mut self, raw: &Value, ann: &Annotation<'_>) -> Result<(), UnmarshalError> {
        *self = T::decode(raw, ann)?;
        Ok(())
    }
}

/// `null` and `""` carry no value and leave the destination untouched.
pub fn is_absent(raw: &Value) -> bool {
    match raw {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

macro_rules! impl_uint {
    ($($ty:ty),+) => {
        $(
            impl Encode for $ty {
                fn encode(&self, ann: &Annotation<'_>) -> String {
                    UintCodec::select(ann).encode(u64::from(*self))
                }
            }

            impl Decode for $ty {
                fn decode(raw: &Value, ann: &Annotation<'_>) -> Result<Self, UnmarshalError> {
                    let value = UintCodec::select(ann).decode(raw)?;
                    <$ty>::try_from(value).map_err(|_| UnmarshalError::IntegerOverflow {
                        value: value.to_string(),
                        target: stringify!($ty),
                    })
                }
            }
        )+
    };
}

impl_uint!(u16, u32, u64);

impl Encode for i64 {
    fn encode(&self, _ann: &Annotation<'_>) -> String {
        self.to_string()
    }
}

impl Encode for BigInt {
    fn encode(&self, ann: &Annotation<'_>) -> String {
        BigIntCodec::select(ann).encode(self)
    }
}

impl Decode for BigInt {
    fn decode(raw: &Value, ann: &Annotation<'_>) -> Result<Self, UnmarshalError> {
        BigIntCodec::select(ann).decode(raw)
    }
}

impl Encode for bool {
    fn encode(&self, ann: &Annotation<'_>) -> String {
        BoolCodec::select(ann).encode(*self)
    }
}

impl Decode for bool {
    fn decode(raw: &Value, ann: &Annotation<'_>) -> Result<Self, UnmarshalError> {
        BoolCodec::select(ann).decode(raw)
    }
}

impl Encode for str {
    fn encode(&self, _ann: &Annotation<'_>) -> String {
        self.to_string()
    }
}

impl Encode for String {
    fn encode(&self, _ann: &Annotation<'_>) -> String {
        self.clone()
    }
}

impl Decode for String {
    fn decode(raw: &Value, _ann: &Annotation<'_>) -> Result<Self, UnmarshalError> {
        decode_text(raw)
    }
}

impl Encode for f64 {
    fn encode(&self, _ann: &Annotation<'_>) -> String {
        self.to_string()
    }
}

impl Decode for f64 {
    fn decode(raw: &Value, _ann: &Annotation<'_>) -> Result<Self, UnmarshalError> {
        decode_float(raw)
    }
}

impl Encode for BigDecimal {
    fn encode(&self, ann: &Annotation<'_>) -> String {
        DecimalCodec::select(ann).encode(self)
    }
}

impl Decode for BigDecimal {
    fn decode(raw: &Value, ann: &Annotation<'_>) -> Result<Self, UnmarshalError> {
        DecimalCodec::select(ann).decode(raw)
    }
}

impl Encode for DateTime<Utc> {
    fn encode(&self, ann: &Annotation<'_>) -> String {
        TimestampCodec::select(ann).encode(self)
    }
}

impl Decode for DateTime<Utc> {
    fn decode(raw: &Value, ann: &Annotation<'_>) -> Result<Self, UnmarshalError> {
        TimestampCodec::select(ann).decode(raw)
    }
}

impl Encode for Bytes {
    fn encode(&self, ann: &Annotation<'_>) -> String {
        BytesCodec::select(ann).encode(&self.0)
    }
}

impl Decode for Bytes {
    fn decode(raw: &Value, ann: &Annotation<'_>) -> Result<Self, UnmarshalError> {
        BytesCodec::select(ann).decode(raw).map(Bytes)
    }
}

macro_rules! impl_fixed {
    ($($ty:ty),+) => {
        $(
            impl Encode for $ty {
                fn encode(&self, _ann: &Annotation<'_>) -> String {
                    self.to_string()
                }
            }

            impl Decode for $ty {
                fn decode(raw: &Value, _ann: &Annotation<'_>) -> Result<Self, UnmarshalError> {
                    expect_str(raw)?.parse()
                }
            }
        )+
    };
}

impl_fixed!(Address, Hash);

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, ann: &Annotation<'_>) -> String {
        (**self).encode(ann)
    }
}

/// `None` is omitted from requests.
impl<T: Encode> Encode for Option<T> {
    fn encode(&self, ann: &Annotation<'_>) -> String {
        match self {
            Some(value) => value.encode(ann),
            None => String::new(),
        }
    }
}

impl<T: Decode> Decode for Option<T> {
    fn decode(raw: &Value, ann: &Annotation<'_>) -> Result<Self, UnmarshalError> {
        if is_absent(raw) {
            return Ok(None);
        }
        T::decode(raw, ann).map(Some)
    }
}

/// Elements are joined with `,` into a single parameter.
impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, ann: &Annotation<'_>) -> String {
        self.iter()
            .map(|item| item.encode(ann))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Either a JSON array decoded element by element, or, for `sep` fields, a
/// single string holding a `,`-joined list.
impl<T: Decode + Default> Decode for Vec<T> {
    fn decode(raw: &Value, ann: &Annotation<'_>) -> Result<Self, UnmarshalError> {
        match raw {
            Value::String(joined) if ann.sep => joined
                .split(',')
                .enumerate()
                .map(|(index, item)| decode_element(&Value::String(item.to_string()), ann, index))
                .collect(),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| decode_element(item, ann, index))
                .collect(),
            other => Err(UnmarshalError::shape("array", other)),
        }
    }
}

fn decode_element<T: Decode + Default>(
    raw: &Value,
    ann: &Annotation<'_>,
    index: usize,
) -> Result<T, UnmarshalError> {
    if is_absent(raw) {
        return Ok(T::default());
    }
    T::decode(raw, ann).map_err(|e| e.in_element(index))
}
