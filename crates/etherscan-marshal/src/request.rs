//! Request marshalling: a typed record to a flat wire parameter map.

use std::collections::BTreeMap;

use crate::{Annotation, Encode};

/// Wire parameter name to parameter text.
pub type WireMap = BTreeMap<String, String>;

/// A record that can be sent as request parameters.
///
/// Implementors list their fields in declaration order. A field holding
/// another record is listed with [`Field::flatten`] so its fields are written
/// as if they were declared inline.
pub trait Request: Sync {
    /// Describe the record's fields.
    fn fields(&self) -> Vec<Field<'_>>;
}

/// One entry of a [`Request`] description.
#[derive(Clone, Copy)]
pub enum Field<'a> {
    /// A leaf value.
    Value {
        /// Declared field name, lower-cased when the directive has no name.
        name: &'static str,
        /// Wire directive, e.g. `"blockNumber,hex"`.
        directive: &'static str,
        /// The value to encode.
        value: &'a dyn Encode,
    },
    /// An embedded record whose fields are promoted into the parent.
    Flatten(&'a dyn Request),
}

impl<'a> Field<'a> {
    /// Describe a leaf value.
    pub fn new(name: &'static str, directive: &'static str, value: &'a dyn Encode) -> Self {
        Field::Value { name, directive, value }
    }

    /// Describe an embedded record.
    pub fn flatten(inner: &'a dyn Request) -> Self {
        Field::Flatten(inner)
    }
}

/// A literal list of fields is itself a request, for one-off parameter sets.
impl<const N: usize> Request for [Field<'_>; N] {
    fn fields(&self) -> Vec<Field<'_>> {
        self.to_vec()
    }
}

/// The empty request.
impl Request for () {
    fn fields(&self) -> Vec<Field<'_>> {
        Vec::new()
    }
}

/// Marshal a request record into its wire parameter map.
///
/// Fields that encode to the empty string are omitted.
///
/// # Arguments
/// * `request` - The record to marshal.
///
/// # Returns
/// The wire parameter map. Marshalling cannot fail.
pub fn marshal_request<R: Request + ?Sized>(request: &R) -> WireMap {
    let mut wire = WireMap::new();
    write_fields(request, &mut wire);
    wire
}

fn write_fields<R: Request + ?Sized>(request: &R, wire: &mut WireMap) {
    for field in request.fields() {
        match field {
            Field::Value { name, directive, value } => {
                let ann = Annotation::parse(directive);
                let text = value.encode(&ann);
                if text.is_empty() {
                    continue;
                }
                wire.insert(ann.wire_name(name).into_owned(), text);
            }
            Field::Flatten(inner) => write_fields(inner, wire),
        }
    }
}
