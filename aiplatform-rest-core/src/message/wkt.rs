//! # Well-known types
//!
//! The handful of `google.protobuf` / `google.rpc` types the transport itself needs:
//! [`Empty`], [`Any`], [`Status`] and [`FieldMask`].
use super::{
    Message,
    codec::decode_value,
    descriptor::{FieldDescriptor, Kind, MessageDescriptor},
};
use crate::error::{Error, ErrorKind};
use heck::{ToLowerCamelCase, ToSnakeCase};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _, ser::SerializeMap};

/// `google.protobuf.Empty`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Empty {}

static EMPTY: MessageDescriptor = MessageDescriptor::new("google.protobuf.Empty", &[]);

impl Message for Empty {
    fn descriptor() -> &'static MessageDescriptor {
        &EMPTY
    }
}

/// `google.protobuf.Any` in its JSON form: an `@type` url next to the packed message's fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Any {
    pub type_url: String,
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Any {
    /// Packs a message, stamping its type url.
    pub fn pack<M: Message>(message: &M) -> Result<Self, Error> {
        let fields = super::codec::encode_object(message)?;
        Ok(Self {
            type_url: M::descriptor().type_url(),
            fields,
        })
    }

    /// The fully qualified type name after the last `/` of the type url.
    pub fn type_name(&self) -> &str {
        self.type_url
            .rsplit_once('/')
            .map(|(_, name)| name)
            .unwrap_or(&self.type_url)
    }

    /// Unpacks into `M`.
    ///
    /// An `Any` without a type url (e.g. `{}`) unpacks into whatever `M` is asked for; a
    /// mismatching type url is a [`ErrorKind::SchemaMismatch`]. API version segments of
    /// the package (`v1`, `v1beta1`) are ignored, so messages shared by several API
    /// versions unpack from any of them.
    pub fn unpack<M: Message>(&self) -> Result<M, Error> {
        let expected = M::descriptor().full_name;
        if !self.type_url.is_empty() && !same_type(self.type_name(), expected) {
            return Err(Error::new(
                ErrorKind::SchemaMismatch,
                format!(
                    "expected a packed '{expected}' but found '{}'",
                    self.type_url
                ),
            ));
        }
        decode_value(serde_json::Value::Object(self.fields.clone()))
    }

    /// The canonical JSON rendering.
    pub fn to_json(&self) -> serde_json::Value {
        let mut object = self.fields.clone();
        if !self.type_url.is_empty() {
            object.insert(
                "@type".to_string(),
                serde_json::Value::String(self.type_url.clone()),
            );
        }
        serde_json::Value::Object(object)
    }
}

impl Serialize for Any {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let with_type = usize::from(!self.type_url.is_empty());
        let mut map = serializer.serialize_map(Some(self.fields.len() + with_type))?;
        if with_type == 1 {
            map.serialize_entry("@type", &self.type_url)?;
        }
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Any {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut fields = serde_json::Map::deserialize(deserializer)?;
        let type_url = match fields.remove("@type") {
            Some(serde_json::Value::String(url)) => url,
            Some(other) => {
                return Err(D::Error::custom(format!(
                    "'@type' must be a string, found {other}"
                )));
            }
            None => String::new(),
        };
        Ok(Self { type_url, fields })
    }
}

fn same_type(found: &str, expected: &str) -> bool {
    fn is_version(segment: &str) -> bool {
        let mut chars = segment.chars();
        chars.next() == Some('v')
            && chars.next().is_some_and(|c| c.is_ascii_digit())
            && chars.all(|c| c.is_ascii_alphanumeric())
    }

    let found = found.split('.').filter(|segment| !is_version(segment));
    let expected = expected.split('.').filter(|segment| !is_version(segment));
    found.eq(expected)
}

/// `google.rpc.Status`: the error payload of a failed operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    #[serde(default, skip_serializing_if = "super::json::is_default")]
    pub code: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<Any>,
}

static STATUS: MessageDescriptor = MessageDescriptor::new(
    "google.rpc.Status",
    &[
        FieldDescriptor::new(1, "code", "code", Kind::Int32),
        FieldDescriptor::new(2, "message", "message", Kind::String),
        FieldDescriptor::new(3, "details", "details", Kind::Any).repeated(),
    ],
);

impl Message for Status {
    fn descriptor() -> &'static MessageDescriptor {
        &STATUS
    }
}

/// `google.protobuf.FieldMask`, encoded as a comma separated list of camelCase paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMask {
    /// snake_case field paths, e.g. `display_name` or `rag_embedding_model_config.vertex_prediction_endpoint`.
    pub paths: Vec<String>,
}

impl FieldMask {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }
}

// Each dotted segment is converted on its own; `heck` treats dots as word boundaries.
fn convert_path(path: &str, convert: fn(&str) -> String) -> String {
    path.split('.').map(convert).collect::<Vec<_>>().join(".")
}

fn snake_to_camel(path: &str) -> String {
    convert_path(path, |segment| segment.to_lower_camel_case())
}

fn camel_to_snake(path: &str) -> String {
    convert_path(path, |segment| segment.to_snake_case())
}

impl Serialize for FieldMask {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let joined = self
            .paths
            .iter()
            .map(|path| snake_to_camel(path))
            .collect::<Vec<_>>()
            .join(",");
        serializer.serialize_str(&joined)
    }
}

impl<'de> Deserialize<'de> for FieldMask {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let joined = String::deserialize(deserializer)?;
        let paths = joined
            .split(',')
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(camel_to_snake)
            .collect();
        Ok(Self { paths })
    }
}
