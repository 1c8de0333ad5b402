//! Response unmarshalling: a raw JSON value to a typed record.

use serde_json::{Map, Value};

use crate::value::is_absent;
use crate::{Annotation, Assign, Decode, UnmarshalError};

/// A record that can be filled from a JSON object.
///
/// Implementors hand out a mutable slot per field, in declaration order. A
/// field holding an embedded record is handed out with [`Slot::flatten`]; its
/// fields are then looked up in the same JSON object as the parent's.
pub trait Response {
    /// Describe the record's fields as writable slots.
    fn slots(&mut self) -> Vec<Slot<'_>>;
}

/// One entry of a [`Response`] description.
pub enum Slot<'a> {
    /// A leaf field.
    Value {
        /// Declared field name, lower-cased when the directive has no name.
        name: &'static str,
        /// Wire directive, e.g. `"timeStamp"` or `"gasUsedRatio,sep"`.
        directive: &'static str,
        /// Where the decoded value goes.
        target: &'a mut dyn Assign,
    },
    /// An embedded record whose fields live at the parent's level.
    Flatten(&'a mut dyn Response),
}

impl<'a> Slot<'a> {
    /// Describe a leaf field.
    pub fn new(name: &'static str, directive: &'static str, target: &'a mut dyn Assign) -> Self {
        Slot::Value { name, directive, target }
    }

    /// Describe an embedded record.
    pub fn flatten(inner: &'a mut dyn Response) -> Self {
        Slot::Flatten(inner)
    }
}

/// Decode a record from a raw JSON value.
///
/// `null` yields the default record; anything other than an object is a
/// shape error.
pub fn unmarshal_record<T: Response + Default>(raw: &Value) -> Result<T, UnmarshalError> {
    let mut record = T::default();
    match raw {
        Value::Null => {}
        Value::Object(map) => fill_record(&mut record, map)?,
        other => return Err(UnmarshalError::shape("object", other)),
    }
    Ok(record)
}

/// Populate a record from a JSON object.
///
/// Missing keys and absent values (`null`, `""`) leave the field untouched.
/// The first decode failure aborts and names the field's wire name.
///
/// # Arguments
/// * `record` - The record to fill.
/// * `map` - The JSON object holding the record's fields.
///
/// # Returns
/// `Ok(())` once every field has been visited.
pub fn fill_record(
    record: &mut dyn Response,
    map: &Map<String, Value>,
) -> Result<(), UnmarshalError> {
    for slot in record.slots() {
        match slot {
            Slot::Value { name, directive, target } => {
                let ann = Annotation::parse(directive);
                let wire = ann.wire_name(name);
                let Some(raw) = map.get(wire.as_ref()) else {
                    tracing::debug!(field = name, wire = %wire, "field missing from response");
                    continue;
                };
                if is_absent(raw) {
                    continue;
                }
                target.assign(raw, &ann).map_err(|e| e.in_field(&wire))?;
            }
            Slot::Flatten(inner) => fill_record(inner, map)?,
        }
    }
    Ok(())
}

/// Decode a whole response value.
///
/// An absent value (`null` or `""`) yields the default.
pub fn unmarshal_response<T: Decode + Default>(raw: &Value) -> Result<T, UnmarshalError> {
    unmarshal_response_with(raw, "")
}

/// Decode a whole response value under a directive, e.g. `",hex"` for the
/// proxy endpoints that answer a bare hex quantity.
pub fn unmarshal_response_with<T: Decode + Default>(
    raw: &Value,
    directive: &str,
) -> Result<T, UnmarshalError> {
    if is_absent(raw) {
        return Ok(T::default());
    }
    T::decode(raw, &Annotation::parse(directive))
}

/// Implement [`Decode`] for response records so they can be nested, collected
/// into a `Vec`, or decoded as a whole response.
///
/// ```ignore
/// decode_record!(BlockReward, Uncle);
/// ```
#[macro_export]
macro_rules! decode_record {
    ($($record:ty),+ $(,)?) => {
        $(
            impl $crate::Decode for $record {
                fn decode(
                    raw: &$crate::serde_json::Value,
                    _ann: &$crate::Annotation<'_>,
                ) -> ::std::result::Result<Self, $crate::UnmarshalError> {
                    $crate::unmarshal_record(raw)
                }
            }
        )+
    };
}
