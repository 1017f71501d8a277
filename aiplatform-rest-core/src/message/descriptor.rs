//! # Static Message Descriptors
//!
//! Every message type publishes a [`MessageDescriptor`]: its fully qualified name and one
//! [`FieldDescriptor`] per declared field. Descriptors are plain `static` data built with
//! `const fn` constructors, so the transcoder and the codec can stay schema-agnostic while
//! still knowing field numbers, JSON names, kinds and tag groups.
use std::fmt;

/// The wire kind of a field's value.
#[derive(Clone, Copy)]
pub enum Kind {
    String,
    Bool,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Float,
    Double,
    Bytes,
    /// An enum, encoded by its symbolic name. Holds the enum's fully qualified name.
    Enum(&'static str),
    /// A nested message.
    Message(fn() -> &'static MessageDescriptor),
    Timestamp,
    Duration,
    FieldMask,
    Any,
    /// `google.protobuf.Struct`, an arbitrary JSON object.
    Struct,
}

impl Kind {
    /// The nested descriptor, if this kind is a message.
    pub fn message(&self) -> Option<&'static MessageDescriptor> {
        match self {
            Kind::Message(descriptor) => Some(descriptor()),
            _ => None,
        }
    }

    /// Whether values of this kind are rendered as a single JSON scalar.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Kind::Message(_) | Kind::Any | Kind::Struct)
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::String => f.write_str("String"),
            Kind::Bool => f.write_str("Bool"),
            Kind::Int32 => f.write_str("Int32"),
            Kind::Int64 => f.write_str("Int64"),
            Kind::Uint32 => f.write_str("Uint32"),
            Kind::Uint64 => f.write_str("Uint64"),
            Kind::Float => f.write_str("Float"),
            Kind::Double => f.write_str("Double"),
            Kind::Bytes => f.write_str("Bytes"),
            Kind::Enum(name) => write!(f, "Enum({name})"),
            Kind::Message(descriptor) => write!(f, "Message({})", descriptor().full_name),
            Kind::Timestamp => f.write_str("Timestamp"),
            Kind::Duration => f.write_str("Duration"),
            Kind::FieldMask => f.write_str("FieldMask"),
            Kind::Any => f.write_str("Any"),
            Kind::Struct => f.write_str("Struct"),
        }
    }
}

/// Presence and cardinality of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// Implicit presence: the default value is omitted on the wire.
    Singular,
    /// Explicit presence: a set default value is still encoded.
    Optional,
    Repeated,
    /// A map keyed by the string form of its key type.
    Map,
}

/// Describes one declared field of a message.
#[derive(Debug)]
pub struct FieldDescriptor {
    pub tag: u32,
    /// The proto (snake_case) name, used in URL templates and body selectors.
    pub name: &'static str,
    /// The camelCase name used in JSON bodies and query parameters.
    pub json_name: &'static str,
    pub kind: Kind,
    pub label: Label,
    /// The tag group (oneof) this field belongs to, if any.
    pub group: Option<&'static str>,
}

impl FieldDescriptor {
    pub const fn new(tag: u32, name: &'static str, json_name: &'static str, kind: Kind) -> Self {
        Self {
            tag,
            name,
            json_name,
            kind,
            label: Label::Singular,
            group: None,
        }
    }

    pub const fn optional(self) -> Self {
        Self {
            label: Label::Optional,
            ..self
        }
    }

    pub const fn repeated(self) -> Self {
        Self {
            label: Label::Repeated,
            ..self
        }
    }

    pub const fn map(self) -> Self {
        Self {
            label: Label::Map,
            ..self
        }
    }

    pub const fn in_group(self, group: &'static str) -> Self {
        Self {
            group: Some(group),
            ..self
        }
    }

    /// Whether a JSON object key addresses this field (json name or proto name).
    pub fn matches_key(&self, key: &str) -> bool {
        self.json_name == key || self.name == key
    }
}

/// Describes a message type.
#[derive(Debug)]
pub struct MessageDescriptor {
    /// Fully qualified name, e.g. `google.cloud.aiplatform.v1.RagCorpus`.
    pub full_name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl MessageDescriptor {
    pub const fn new(full_name: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        Self { full_name, fields }
    }

    /// Looks a field up by its proto name.
    pub fn field_by_name(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Looks a field up by a JSON object key (json name, or proto name as an alias).
    pub fn field_by_key(&self, key: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|field| field.matches_key(key))
    }

    /// The names of every tag group declared by the message, in declaration order.
    pub fn groups(&self) -> Vec<&'static str> {
        let mut groups: Vec<&'static str> = Vec::new();
        for group in self.fields.iter().filter_map(|field| field.group) {
            if !groups.contains(&group) {
                groups.push(group);
            }
        }
        groups
    }

    /// The members of a tag group.
    pub fn group_members(&self, group: &str) -> impl Iterator<Item = &'static FieldDescriptor> {
        let fields: &'static [FieldDescriptor] = self.fields;
        let group = group.to_string();
        fields
            .iter()
            .filter(move |field| field.group == Some(group.as_str()))
    }

    /// The `type.googleapis.com/...` url used when the message is packed into an `Any`.
    pub fn type_url(&self) -> String {
        format!("type.googleapis.com/{}", self.full_name)
    }
}
