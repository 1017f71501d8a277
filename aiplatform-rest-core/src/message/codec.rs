//! # JSON Codec
//!
//! Encoding goes through `serde_json::Value`, whose object map is ordered by key, so the
//! bytes produced for a message are deterministic and lexicographically keyed.
//!
//! Decoding is a two step process:
//!
//! 1. The body is parsed into an order-preserving tree. A body that is not JSON is a
//!    [`ErrorKind::MalformedBody`](crate::ErrorKind::MalformedBody).
//! 2. The tree is normalised against the target [`MessageDescriptor`]: unknown keys are
//!    dropped, proto names are renamed to json names, repeated keys resolve to the last
//!    occurrence and, within each tag group, only the member written last survives.
//!
//! The normalised value is then handed to serde. A value of the wrong type for a known
//! field is a [`ErrorKind::SchemaMismatch`](crate::ErrorKind::SchemaMismatch).
use super::{
    Message,
    descriptor::{FieldDescriptor, Label, MessageDescriptor},
};
use crate::error::{Error, ErrorKind};
use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, SeqAccess, Visitor},
};
use serde_json::{Map, Value};
use std::fmt;

/// Encodes a message into its canonical JSON value.
pub fn encode<M: Message>(message: &M) -> Result<Value, Error> {
    serde_json::to_value(message).map_err(|e| {
        Error::new(
            ErrorKind::Internal,
            format!("failed to encode '{}': {e}", M::descriptor().full_name),
        )
        .with_source(e)
    })
}

/// Encodes a message into its canonical JSON object.
pub fn encode_object<M: Message>(message: &M) -> Result<Map<String, Value>, Error> {
    match encode(message)? {
        Value::Object(object) => Ok(object),
        other => Err(Error::new(
            ErrorKind::Internal,
            format!(
                "'{}' did not encode to a JSON object but to {other}",
                M::descriptor().full_name
            ),
        )),
    }
}

/// Encodes a message into the bytes sent on the wire.
pub fn to_bytes<M: Message>(message: &M) -> Result<Vec<u8>, Error> {
    let value = encode(message)?;
    Ok(value.to_string().into_bytes())
}

/// Decodes a response body into `M`. An empty body decodes as `{}`.
pub fn decode<M: Message>(bytes: &[u8]) -> Result<M, Error> {
    let tree = if bytes.iter().all(u8::is_ascii_whitespace) {
        OrderedJson::Object(Vec::new())
    } else {
        serde_json::from_slice::<OrderedJson>(bytes).map_err(Error::malformed_body)?
    };
    from_tree(tree)
}

/// Decodes an already parsed JSON value into `M`.
///
/// Object keys of a `serde_json::Value` have lost their document order, so tag group
/// conflicts resolve in key order.
pub fn decode_value<M: Message>(value: Value) -> Result<M, Error> {
    from_tree(OrderedJson::from(value))
}

fn from_tree<M: Message>(tree: OrderedJson) -> Result<M, Error> {
    let descriptor = M::descriptor();
    let value = normalize(tree, descriptor);
    serde_json::from_value(value).map_err(|e| Error::schema_mismatch(descriptor.full_name, e))
}

/// A JSON tree that keeps object entries in document order, duplicates included.
#[derive(Debug, Clone, PartialEq)]
enum OrderedJson {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Array(Vec<OrderedJson>),
    Object(Vec<(String, OrderedJson)>),
}

impl From<Value> for OrderedJson {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => OrderedJson::Null,
            Value::Bool(b) => OrderedJson::Bool(b),
            Value::Number(n) => OrderedJson::Number(n),
            Value::String(s) => OrderedJson::String(s),
            Value::Array(items) => OrderedJson::Array(items.into_iter().map(Into::into).collect()),
            Value::Object(entries) => OrderedJson::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, value.into()))
                    .collect(),
            ),
        }
    }
}

impl From<OrderedJson> for Value {
    fn from(tree: OrderedJson) -> Self {
        match tree {
            OrderedJson::Null => Value::Null,
            OrderedJson::Bool(b) => Value::Bool(b),
            OrderedJson::Number(n) => Value::Number(n),
            OrderedJson::String(s) => Value::String(s),
            OrderedJson::Array(items) => Value::Array(items.into_iter().map(Into::into).collect()),
            // Later duplicates overwrite earlier ones.
            OrderedJson::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, value.into()))
                    .collect(),
            ),
        }
    }
}

impl<'de> Deserialize<'de> for OrderedJson {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(OrderedJsonVisitor)
    }
}

struct OrderedJsonVisitor;

impl<'de> Visitor<'de> for OrderedJsonVisitor {
    type Value = OrderedJson;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("any valid JSON value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<OrderedJson, E> {
        Ok(OrderedJson::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<OrderedJson, E> {
        Ok(OrderedJson::Number(v.into()))
    }

    fn visit_u64<E>(self, v: u64) -> Result<OrderedJson, E> {
        Ok(OrderedJson::Number(v.into()))
    }

    fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<OrderedJson, E> {
        serde_json::Number::from_f64(v)
            .map(OrderedJson::Number)
            .ok_or_else(|| E::custom(format!("'{v}' is not a finite number")))
    }

    fn visit_str<E>(self, v: &str) -> Result<OrderedJson, E> {
        Ok(OrderedJson::String(v.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<OrderedJson, E> {
        Ok(OrderedJson::String(v))
    }

    fn visit_unit<E>(self) -> Result<OrderedJson, E> {
        Ok(OrderedJson::Null)
    }

    fn visit_none<E>(self) -> Result<OrderedJson, E> {
        Ok(OrderedJson::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<OrderedJson, D::Error> {
        OrderedJson::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<OrderedJson, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(OrderedJson::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<OrderedJson, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, OrderedJson>()? {
            entries.push((key, value));
        }
        Ok(OrderedJson::Object(entries))
    }
}

fn normalize(tree: OrderedJson, descriptor: &'static MessageDescriptor) -> Value {
    let entries = match tree {
        OrderedJson::Object(entries) => entries,
        other => return other.into(),
    };

    let mut resolved: Vec<(&'static FieldDescriptor, Value)> = Vec::new();
    for (key, value) in entries {
        let Some(field) = descriptor.field_by_key(&key) else {
            continue;
        };

        resolved.retain(|(existing, _)| {
            existing.tag != field.tag && (field.group.is_none() || existing.group != field.group)
        });

        // A null is the same as leaving the field out.
        if value == OrderedJson::Null {
            continue;
        }
        resolved.push((field, normalize_field(value, field)));
    }

    Value::Object(
        resolved
            .into_iter()
            .map(|(field, value)| (field.json_name.to_string(), value))
            .collect(),
    )
}

fn normalize_field(value: OrderedJson, field: &FieldDescriptor) -> Value {
    let Some(nested) = field.kind.message() else {
        return value.into();
    };

    match (field.label, value) {
        (Label::Repeated, OrderedJson::Array(items)) => Value::Array(
            items
                .into_iter()
                .map(|item| normalize(item, nested))
                .collect(),
        ),
        (Label::Map, OrderedJson::Object(entries)) => Value::Object(
            entries
                .into_iter()
                .map(|(key, item)| (key, normalize(item, nested)))
                .collect(),
        ),
        (_, value) => normalize(value, nested),
    }
}
