use crate::common::GenericOperationMetadata;
use aiplatform_rest_core::message::{
    FieldDescriptor, Kind, Message, MessageDescriptor,
    json::{self, is_default},
    wkt::FieldMask,
};
use prost_types::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Resources

/// A container of entity types and their features, with online serving capacity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Featurestore {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, with = "json::timestamp", skip_serializing_if = "Option::is_none")]
    pub create_time: Option<Timestamp>,
    #[serde(default, with = "json::timestamp", skip_serializing_if = "Option::is_none")]
    pub update_time: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub etag: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_serving_config: Option<OnlineServingConfig>,
    #[serde(default, skip_serializing_if = "is_default")]
    pub state: FeaturestoreState,
    #[serde(default, skip_serializing_if = "is_default")]
    pub online_storage_ttl_days: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_spec: Option<EncryptionSpec>,
}

impl Featurestore {
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    pub fn with_fixed_node_count(mut self, nodes: i32) -> Self {
        self.online_serving_config = Some(OnlineServingConfig {
            fixed_node_count: nodes,
            scaling: None,
        });
        self
    }
}

static FEATURESTORE: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1beta1.Featurestore",
    &[
        FieldDescriptor::new(1, "name", "name", Kind::String),
        FieldDescriptor::new(3, "create_time", "createTime", Kind::Timestamp),
        FieldDescriptor::new(4, "update_time", "updateTime", Kind::Timestamp),
        FieldDescriptor::new(5, "etag", "etag", Kind::String),
        FieldDescriptor::new(6, "labels", "labels", Kind::String).map(),
        FieldDescriptor::new(
            7,
            "online_serving_config",
            "onlineServingConfig",
            Kind::Message(OnlineServingConfig::descriptor),
        ),
        FieldDescriptor::new(
            8,
            "state",
            "state",
            Kind::Enum("google.cloud.aiplatform.v1beta1.Featurestore.State"),
        ),
        FieldDescriptor::new(13, "online_storage_ttl_days", "onlineStorageTtlDays", Kind::Int32),
        FieldDescriptor::new(
            10,
            "encryption_spec",
            "encryptionSpec",
            Kind::Message(EncryptionSpec::descriptor),
        ),
    ],
);

impl Message for Featurestore {
    fn descriptor() -> &'static MessageDescriptor {
        &FEATURESTORE
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeaturestoreState {
    Stable,
    Updating,
    #[default]
    #[serde(other)]
    StateUnspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnlineServingConfig {
    /// Ignored when `scaling` is set.
    #[serde(default, skip_serializing_if = "is_default")]
    pub fixed_node_count: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaling: Option<Scaling>,
}

static ONLINE_SERVING_CONFIG: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1beta1.Featurestore.OnlineServingConfig",
    &[
        FieldDescriptor::new(2, "fixed_node_count", "fixedNodeCount", Kind::Int32),
        FieldDescriptor::new(4, "scaling", "scaling", Kind::Message(Scaling::descriptor)),
    ],
);

impl Message for OnlineServingConfig {
    fn descriptor() -> &'static MessageDescriptor {
        &ONLINE_SERVING_CONFIG
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scaling {
    #[serde(default, skip_serializing_if = "is_default")]
    pub min_node_count: i32,
    #[serde(default, skip_serializing_if = "is_default")]
    pub max_node_count: i32,
    #[serde(default, skip_serializing_if = "is_default")]
    pub cpu_utilization_target: i32,
}

static SCALING: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1beta1.Featurestore.OnlineServingConfig.Scaling",
    &[
        FieldDescriptor::new(1, "min_node_count", "minNodeCount", Kind::Int32),
        FieldDescriptor::new(2, "max_node_count", "maxNodeCount", Kind::Int32),
        FieldDescriptor::new(3, "cpu_utilization_target", "cpuUtilizationTarget", Kind::Int32),
    ],
);

impl Message for Scaling {
    fn descriptor() -> &'static MessageDescriptor {
        &SCALING
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptionSpec {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kms_key_name: String,
}

static ENCRYPTION_SPEC: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1beta1.EncryptionSpec",
    &[FieldDescriptor::new(1, "kms_key_name", "kmsKeyName", Kind::String)],
);

impl Message for EncryptionSpec {
    fn descriptor() -> &'static MessageDescriptor {
        &ENCRYPTION_SPEC
    }
}

/// A type of entity (user, movie, ...) whose features live in a featurestore.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityType {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, with = "json::timestamp", skip_serializing_if = "Option::is_none")]
    pub create_time: Option<Timestamp>,
    #[serde(default, with = "json::timestamp", skip_serializing_if = "Option::is_none")]
    pub update_time: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub etag: String,
    #[serde(default, skip_serializing_if = "is_default")]
    pub offline_storage_ttl_days: i32,
}

static ENTITY_TYPE: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1beta1.EntityType",
    &[
        FieldDescriptor::new(1, "name", "name", Kind::String),
        FieldDescriptor::new(2, "description", "description", Kind::String),
        FieldDescriptor::new(3, "create_time", "createTime", Kind::Timestamp),
        FieldDescriptor::new(4, "update_time", "updateTime", Kind::Timestamp),
        FieldDescriptor::new(6, "labels", "labels", Kind::String).map(),
        FieldDescriptor::new(7, "etag", "etag", Kind::String),
        FieldDescriptor::new(
            10,
            "offline_storage_ttl_days",
            "offlineStorageTtlDays",
            Kind::Int32,
        ),
    ],
);

impl Message for EntityType {
    fn descriptor() -> &'static MessageDescriptor {
        &ENTITY_TYPE
    }
}

/// One property of an entity type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "is_default")]
    pub value_type: ValueType,
    #[serde(default, with = "json::timestamp", skip_serializing_if = "Option::is_none")]
    pub create_time: Option<Timestamp>,
    #[serde(default, with = "json::timestamp", skip_serializing_if = "Option::is_none")]
    pub update_time: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub etag: String,
    #[serde(default, skip_serializing_if = "is_default")]
    pub disable_monitoring: bool,
    /// Source column of a feature that belongs to a feature group.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version_column_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub point_of_contact: String,
}

impl Feature {
    pub fn new(value_type: ValueType) -> Self {
        Self {
            value_type,
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

static FEATURE: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1beta1.Feature",
    &[
        FieldDescriptor::new(1, "name", "name", Kind::String),
        FieldDescriptor::new(2, "description", "description", Kind::String),
        FieldDescriptor::new(
            3,
            "value_type",
            "valueType",
            Kind::Enum("google.cloud.aiplatform.v1beta1.Feature.ValueType"),
        ),
        FieldDescriptor::new(4, "create_time", "createTime", Kind::Timestamp),
        FieldDescriptor::new(5, "update_time", "updateTime", Kind::Timestamp),
        FieldDescriptor::new(6, "labels", "labels", Kind::String).map(),
        FieldDescriptor::new(7, "etag", "etag", Kind::String),
        FieldDescriptor::new(12, "disable_monitoring", "disableMonitoring", Kind::Bool),
        FieldDescriptor::new(106, "version_column_name", "versionColumnName", Kind::String),
        FieldDescriptor::new(107, "point_of_contact", "pointOfContact", Kind::String),
    ],
);

impl Message for Feature {
    fn descriptor() -> &'static MessageDescriptor {
        &FEATURE
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueType {
    Bool,
    BoolArray,
    Double,
    DoubleArray,
    Int64,
    Int64Array,
    String,
    StringArray,
    Bytes,
    Struct,
    #[default]
    #[serde(other)]
    ValueTypeUnspecified,
}

// Requests and responses

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeaturestoreRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featurestore: Option<Featurestore>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub featurestore_id: String,
}

static CREATE_FEATURESTORE_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1beta1.CreateFeaturestoreRequest",
    &[
        FieldDescriptor::new(1, "parent", "parent", Kind::String),
        FieldDescriptor::new(
            2,
            "featurestore",
            "featurestore",
            Kind::Message(Featurestore::descriptor),
        ),
        FieldDescriptor::new(3, "featurestore_id", "featurestoreId", Kind::String),
    ],
);

impl Message for CreateFeaturestoreRequest {
    fn descriptor() -> &'static MessageDescriptor {
        &CREATE_FEATURESTORE_REQUEST
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetFeaturestoreRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

static GET_FEATURESTORE_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1beta1.GetFeaturestoreRequest",
    &[FieldDescriptor::new(1, "name", "name", Kind::String)],
);

impl Message for GetFeaturestoreRequest {
    fn descriptor() -> &'static MessageDescriptor {
        &GET_FEATURESTORE_REQUEST
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFeaturestoresRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parent: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub filter: String,
    #[serde(default, skip_serializing_if = "is_default")]
    pub page_size: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub page_token: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub order_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_mask: Option<FieldMask>,
}

static LIST_FEATURESTORES_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1beta1.ListFeaturestoresRequest",
    &[
        FieldDescriptor::new(1, "parent", "parent", Kind::String),
        FieldDescriptor::new(2, "filter", "filter", Kind::String),
        FieldDescriptor::new(3, "page_size", "pageSize", Kind::Int32),
        FieldDescriptor::new(4, "page_token", "pageToken", Kind::String),
        FieldDescriptor::new(5, "order_by", "orderBy", Kind::String),
        FieldDescriptor::new(6, "read_mask", "readMask", Kind::FieldMask),
    ],
);

impl Message for ListFeaturestoresRequest {
    fn descriptor() -> &'static MessageDescriptor {
        &LIST_FEATURESTORES_REQUEST
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFeaturestoresResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub featurestores: Vec<Featurestore>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
}

static LIST_FEATURESTORES_RESPONSE: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1beta1.ListFeaturestoresResponse",
    &[
        FieldDescriptor::new(
            1,
            "featurestores",
            "featurestores",
            Kind::Message(Featurestore::descriptor),
        )
        .repeated(),
        FieldDescriptor::new(2, "next_page_token", "nextPageToken", Kind::String),
    ],
);

impl Message for ListFeaturestoresResponse {
    fn descriptor() -> &'static MessageDescriptor {
        &LIST_FEATURESTORES_RESPONSE
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeaturestoreRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featurestore: Option<Featurestore>,
    /// Fields to overwrite; an empty mask overwrites every updatable field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_mask: Option<FieldMask>,
}

static UPDATE_FEATURESTORE_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1beta1.UpdateFeaturestoreRequest",
    &[
        FieldDescriptor::new(
            1,
            "featurestore",
            "featurestore",
            Kind::Message(Featurestore::descriptor),
        ),
        FieldDescriptor::new(2, "update_mask", "updateMask", Kind::FieldMask),
    ],
);

impl Message for UpdateFeaturestoreRequest {
    fn descriptor() -> &'static MessageDescriptor {
        &UPDATE_FEATURESTORE_REQUEST
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteFeaturestoreRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Also delete the entity types and features inside.
    #[serde(default, skip_serializing_if = "is_default")]
    pub force: bool,
}

static DELETE_FEATURESTORE_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1beta1.DeleteFeaturestoreRequest",
    &[
        FieldDescriptor::new(1, "name", "name", Kind::String),
        FieldDescriptor::new(2, "force", "force", Kind::Bool),
    ],
);

impl Message for DeleteFeaturestoreRequest {
    fn descriptor() -> &'static MessageDescriptor {
        &DELETE_FEATURESTORE_REQUEST
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntityTypeRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<EntityType>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub entity_type_id: String,
}

static CREATE_ENTITY_TYPE_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1beta1.CreateEntityTypeRequest",
    &[
        FieldDescriptor::new(1, "parent", "parent", Kind::String),
        FieldDescriptor::new(2, "entity_type", "entityType", Kind::Message(EntityType::descriptor)),
        FieldDescriptor::new(3, "entity_type_id", "entityTypeId", Kind::String),
    ],
);

impl Message for CreateEntityTypeRequest {
    fn descriptor() -> &'static MessageDescriptor {
        &CREATE_ENTITY_TYPE_REQUEST
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetEntityTypeRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

static GET_ENTITY_TYPE_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1beta1.GetEntityTypeRequest",
    &[FieldDescriptor::new(1, "name", "name", Kind::String)],
);

impl Message for GetEntityTypeRequest {
    fn descriptor() -> &'static MessageDescriptor {
        &GET_ENTITY_TYPE_REQUEST
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntityTypesRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parent: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub filter: String,
    #[serde(default, skip_serializing_if = "is_default")]
    pub page_size: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub page_token: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub order_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_mask: Option<FieldMask>,
}

static LIST_ENTITY_TYPES_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1beta1.ListEntityTypesRequest",
    &[
        FieldDescriptor::new(1, "parent", "parent", Kind::String),
        FieldDescriptor::new(2, "filter", "filter", Kind::String),
        FieldDescriptor::new(3, "page_size", "pageSize", Kind::Int32),
        FieldDescriptor::new(4, "page_token", "pageToken", Kind::String),
        FieldDescriptor::new(5, "order_by", "orderBy", Kind::String),
        FieldDescriptor::new(6, "read_mask", "readMask", Kind::FieldMask),
    ],
);

impl Message for ListEntityTypesRequest {
    fn descriptor() -> &'static MessageDescriptor {
        &LIST_ENTITY_TYPES_REQUEST
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntityTypesResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entity_types: Vec<EntityType>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
}

static LIST_ENTITY_TYPES_RESPONSE: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1beta1.ListEntityTypesResponse",
    &[
        FieldDescriptor::new(
            1,
            "entity_types",
            "entityTypes",
            Kind::Message(EntityType::descriptor),
        )
        .repeated(),
        FieldDescriptor::new(2, "next_page_token", "nextPageToken", Kind::String),
    ],
);

impl Message for ListEntityTypesResponse {
    fn descriptor() -> &'static MessageDescriptor {
        &LIST_ENTITY_TYPES_RESPONSE
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEntityTypeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<EntityType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_mask: Option<FieldMask>,
}

static UPDATE_ENTITY_TYPE_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1beta1.UpdateEntityTypeRequest",
    &[
        FieldDescriptor::new(1, "entity_type", "entityType", Kind::Message(EntityType::descriptor)),
        FieldDescriptor::new(2, "update_mask", "updateMask", Kind::FieldMask),
    ],
);

impl Message for UpdateEntityTypeRequest {
    fn descriptor() -> &'static MessageDescriptor {
        &UPDATE_ENTITY_TYPE_REQUEST
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteEntityTypeRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "is_default")]
    pub force: bool,
}

static DELETE_ENTITY_TYPE_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1beta1.DeleteEntityTypeRequest",
    &[
        FieldDescriptor::new(1, "name", "name", Kind::String),
        FieldDescriptor::new(2, "force", "force", Kind::Bool),
    ],
);

impl Message for DeleteEntityTypeRequest {
    fn descriptor() -> &'static MessageDescriptor {
        &DELETE_ENTITY_TYPE_REQUEST
    }
}

/// `parent` is either an entity type or a feature group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeatureRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature: Option<Feature>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub feature_id: String,
}

static CREATE_FEATURE_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1beta1.CreateFeatureRequest",
    &[
        FieldDescriptor::new(1, "parent", "parent", Kind::String),
        FieldDescriptor::new(2, "feature", "feature", Kind::Message(Feature::descriptor)),
        FieldDescriptor::new(3, "feature_id", "featureId", Kind::String),
    ],
);

impl Message for CreateFeatureRequest {
    fn descriptor() -> &'static MessageDescriptor {
        &CREATE_FEATURE_REQUEST
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetFeatureRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

static GET_FEATURE_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1beta1.GetFeatureRequest",
    &[FieldDescriptor::new(1, "name", "name", Kind::String)],
);

impl Message for GetFeatureRequest {
    fn descriptor() -> &'static MessageDescriptor {
        &GET_FEATURE_REQUEST
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFeaturesRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parent: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub filter: String,
    #[serde(default, skip_serializing_if = "is_default")]
    pub page_size: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub page_token: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub order_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_mask: Option<FieldMask>,
    #[serde(default, skip_serializing_if = "is_default")]
    pub latest_stats_count: i32,
}

static LIST_FEATURES_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1beta1.ListFeaturesRequest",
    &[
        FieldDescriptor::new(1, "parent", "parent", Kind::String),
        FieldDescriptor::new(2, "filter", "filter", Kind::String),
        FieldDescriptor::new(3, "page_size", "pageSize", Kind::Int32),
        FieldDescriptor::new(4, "page_token", "pageToken", Kind::String),
        FieldDescriptor::new(5, "order_by", "orderBy", Kind::String),
        FieldDescriptor::new(6, "read_mask", "readMask", Kind::FieldMask),
        FieldDescriptor::new(7, "latest_stats_count", "latestStatsCount", Kind::Int32),
    ],
);

impl Message for ListFeaturesRequest {
    fn descriptor() -> &'static MessageDescriptor {
        &LIST_FEATURES_REQUEST
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFeaturesResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<Feature>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
}

static LIST_FEATURES_RESPONSE: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1beta1.ListFeaturesResponse",
    &[
        FieldDescriptor::new(1, "features", "features", Kind::Message(Feature::descriptor))
            .repeated(),
        FieldDescriptor::new(2, "next_page_token", "nextPageToken", Kind::String),
    ],
);

impl Message for ListFeaturesResponse {
    fn descriptor() -> &'static MessageDescriptor {
        &LIST_FEATURES_RESPONSE
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeatureRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature: Option<Feature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_mask: Option<FieldMask>,
}

static UPDATE_FEATURE_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1beta1.UpdateFeatureRequest",
    &[
        FieldDescriptor::new(1, "feature", "feature", Kind::Message(Feature::descriptor)),
        FieldDescriptor::new(2, "update_mask", "updateMask", Kind::FieldMask),
    ],
);

impl Message for UpdateFeatureRequest {
    fn descriptor() -> &'static MessageDescriptor {
        &UPDATE_FEATURE_REQUEST
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteFeatureRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

static DELETE_FEATURE_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1beta1.DeleteFeatureRequest",
    &[FieldDescriptor::new(1, "name", "name", Kind::String)],
);

impl Message for DeleteFeatureRequest {
    fn descriptor() -> &'static MessageDescriptor {
        &DELETE_FEATURE_REQUEST
    }
}

// Operation metadata

macro_rules! generic_metadata {
    ($name:ident, $full_name:literal) => {
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub generic_metadata: Option<GenericOperationMetadata>,
        }

        impl Message for $name {
            fn descriptor() -> &'static MessageDescriptor {
                static DESCRIPTOR: MessageDescriptor = MessageDescriptor::new(
                    $full_name,
                    &[FieldDescriptor::new(
                        1,
                        "generic_metadata",
                        "genericMetadata",
                        Kind::Message(GenericOperationMetadata::descriptor),
                    )],
                );
                &DESCRIPTOR
            }
        }
    };
}

generic_metadata!(
    CreateFeaturestoreOperationMetadata,
    "google.cloud.aiplatform.v1beta1.CreateFeaturestoreOperationMetadata"
);
generic_metadata!(
    UpdateFeaturestoreOperationMetadata,
    "google.cloud.aiplatform.v1beta1.UpdateFeaturestoreOperationMetadata"
);
generic_metadata!(
    CreateEntityTypeOperationMetadata,
    "google.cloud.aiplatform.v1beta1.CreateEntityTypeOperationMetadata"
);
generic_metadata!(
    CreateFeatureOperationMetadata,
    "google.cloud.aiplatform.v1beta1.CreateFeatureOperationMetadata"
);
