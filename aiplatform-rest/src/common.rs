use aiplatform_rest_core::message::{
    FieldDescriptor, Kind, Message, MessageDescriptor, json,
    wkt::Status,
};
use prost_types::Timestamp;
use serde::{Deserialize, Serialize};

/// Progress bookkeeping shared by most operation metadata messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericOperationMetadata {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub partial_failures: Vec<Status>,
    #[serde(default, with = "json::timestamp", skip_serializing_if = "Option::is_none")]
    pub create_time: Option<Timestamp>,
    #[serde(default, with = "json::timestamp", skip_serializing_if = "Option::is_none")]
    pub update_time: Option<Timestamp>,
}

static GENERIC_OPERATION_METADATA: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.GenericOperationMetadata",
    &[
        FieldDescriptor::new(
            1,
            "partial_failures",
            "partialFailures",
            Kind::Message(Status::descriptor),
        )
        .repeated(),
        FieldDescriptor::new(2, "create_time", "createTime", Kind::Timestamp),
        FieldDescriptor::new(3, "update_time", "updateTime", Kind::Timestamp),
    ],
);

impl Message for GenericOperationMetadata {
    fn descriptor() -> &'static MessageDescriptor {
        &GENERIC_OPERATION_METADATA
    }
}

/// Metadata of every delete operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOperationMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic_metadata: Option<GenericOperationMetadata>,
}

static DELETE_OPERATION_METADATA: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.DeleteOperationMetadata",
    &[FieldDescriptor::new(
        1,
        "generic_metadata",
        "genericMetadata",
        Kind::Message(GenericOperationMetadata::descriptor),
    )],
);

impl Message for DeleteOperationMetadata {
    fn descriptor() -> &'static MessageDescriptor {
        &DELETE_OPERATION_METADATA
    }
}
