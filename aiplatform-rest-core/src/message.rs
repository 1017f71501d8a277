//! # Message Model
//!
//! Request and response records implement [`Message`]: they are plain serde structs whose
//! shape is additionally described by a static [`MessageDescriptor`]. The descriptor is what
//! lets the schema-agnostic parts of the crate (transcoder, codec) reason about field
//! numbers, json names, kinds and tag groups without reflection.
//!
//! ## Canonical JSON
//!
//! * Field names are camelCase; proto names are accepted as aliases when decoding.
//! * Implicit-presence scalars are omitted when they hold their default value.
//! * 64-bit integers are decimal strings, bytes are base64, enums are symbolic names.
//! * Tag groups are Rust enums flattened into their parent, so at most one member can be set.
//! * Keys are emitted in lexicographic order (see [`codec`]).
pub mod codec;
pub mod descriptor;
pub mod json;
pub mod wkt;

pub use descriptor::{FieldDescriptor, Kind, Label, MessageDescriptor};

use serde::{Serialize, de::DeserializeOwned};
use std::fmt::Debug;

/// A typed record exchanged with the service.
pub trait Message:
    Serialize + DeserializeOwned + Default + Clone + Debug + PartialEq + Send + Sync + 'static
{
    /// The static schema of this message type.
    fn descriptor() -> &'static MessageDescriptor;

    /// Every declared field in declaration order, paired with its encoded value.
    ///
    /// Omitted fields (defaults, unset optionals, inactive tag group members) have no value.
    fn fields(&self) -> Vec<Field> {
        let object = codec::encode_object(self).unwrap_or_default();
        Self::descriptor()
            .fields
            .iter()
            .map(|descriptor| Field {
                descriptor,
                value: object.get(descriptor.json_name).cloned(),
            })
            .collect()
    }
}

/// One declared field of a message instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub descriptor: &'static FieldDescriptor,
    /// The canonical JSON value, `None` when the field is omitted.
    pub value: Option<serde_json::Value>,
}

impl Field {
    pub fn tag(&self) -> u32 {
        self.descriptor.tag
    }

    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    pub fn kind(&self) -> Kind {
        self.descriptor.kind
    }

    pub fn group(&self) -> Option<&'static str> {
        self.descriptor.group
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }
}

impl PartialEq for FieldDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && self.name == other.name
    }
}
