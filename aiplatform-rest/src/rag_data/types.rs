use crate::common::GenericOperationMetadata;
use aiplatform_rest_core::message::{
    FieldDescriptor, Kind, Message, MessageDescriptor,
    json::{self, is_default},
};
use prost_types::Timestamp;
use serde::{Deserialize, Serialize};

// Resources

/// A collection of documents indexed for retrieval.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RagCorpus {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, with = "json::timestamp", skip_serializing_if = "Option::is_none")]
    pub create_time: Option<Timestamp>,
    #[serde(default, with = "json::timestamp", skip_serializing_if = "Option::is_none")]
    pub update_time: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corpus_status: Option<CorpusStatus>,
    #[serde(flatten)]
    pub backend_config: Option<BackendConfig>,
}

/// Where a corpus stores its vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BackendConfig {
    VectorDbConfig(RagVectorDbConfig),
    VertexAiSearchConfig(VertexAiSearchConfig),
}

impl RagCorpus {
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the backend, replacing any backend set before.
    pub fn with_backend_config(mut self, backend_config: BackendConfig) -> Self {
        self.backend_config = Some(backend_config);
        self
    }

    pub fn vector_db_config(&self) -> Option<&RagVectorDbConfig> {
        match &self.backend_config {
            Some(BackendConfig::VectorDbConfig(config)) => Some(config),
            _ => None,
        }
    }

    pub fn vertex_ai_search_config(&self) -> Option<&VertexAiSearchConfig> {
        match &self.backend_config {
            Some(BackendConfig::VertexAiSearchConfig(config)) => Some(config),
            _ => None,
        }
    }
}

static RAG_CORPUS: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.RagCorpus",
    &[
        FieldDescriptor::new(1, "name", "name", Kind::String),
        FieldDescriptor::new(2, "display_name", "displayName", Kind::String),
        FieldDescriptor::new(3, "description", "description", Kind::String),
        FieldDescriptor::new(4, "create_time", "createTime", Kind::Timestamp),
        FieldDescriptor::new(5, "update_time", "updateTime", Kind::Timestamp),
        FieldDescriptor::new(
            8,
            "corpus_status",
            "corpusStatus",
            Kind::Message(CorpusStatus::descriptor),
        ),
        FieldDescriptor::new(
            9,
            "vector_db_config",
            "vectorDbConfig",
            Kind::Message(RagVectorDbConfig::descriptor),
        )
        .in_group("backend_config"),
        FieldDescriptor::new(
            10,
            "vertex_ai_search_config",
            "vertexAiSearchConfig",
            Kind::Message(VertexAiSearchConfig::descriptor),
        )
        .in_group("backend_config"),
    ],
);

impl Message for RagCorpus {
    fn descriptor() -> &'static MessageDescriptor {
        &RAG_CORPUS
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CorpusState {
    Initialized,
    Active,
    Error,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusStatus {
    #[serde(default, skip_serializing_if = "is_default")]
    pub state: CorpusState,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error_status: String,
}

static CORPUS_STATUS: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.CorpusStatus",
    &[
        FieldDescriptor::new(
            1,
            "state",
            "state",
            Kind::Enum("google.cloud.aiplatform.v1.CorpusStatus.State"),
        ),
        FieldDescriptor::new(2, "error_status", "errorStatus", Kind::String),
    ],
);

impl Message for CorpusStatus {
    fn descriptor() -> &'static MessageDescriptor {
        &CORPUS_STATUS
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RagVectorDbConfig {
    #[serde(flatten)]
    pub vector_db: Option<VectorDb>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rag_embedding_model_config: Option<RagEmbeddingModelConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VectorDb {
    RagManagedDb(RagManagedDb),
    Pinecone(Pinecone),
    VertexVectorSearch(VertexVectorSearch),
}

static RAG_VECTOR_DB_CONFIG: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.RagVectorDbConfig",
    &[
        FieldDescriptor::new(
            1,
            "rag_managed_db",
            "ragManagedDb",
            Kind::Message(RagManagedDb::descriptor),
        )
        .in_group("vector_db"),
        FieldDescriptor::new(3, "pinecone", "pinecone", Kind::Message(Pinecone::descriptor))
            .in_group("vector_db"),
        FieldDescriptor::new(
            6,
            "vertex_vector_search",
            "vertexVectorSearch",
            Kind::Message(VertexVectorSearch::descriptor),
        )
        .in_group("vector_db"),
        FieldDescriptor::new(
            7,
            "rag_embedding_model_config",
            "ragEmbeddingModelConfig",
            Kind::Message(RagEmbeddingModelConfig::descriptor),
        ),
    ],
);

impl Message for RagVectorDbConfig {
    fn descriptor() -> &'static MessageDescriptor {
        &RAG_VECTOR_DB_CONFIG
    }
}

/// The default, fully managed vector database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RagManagedDb {}

static RAG_MANAGED_DB: MessageDescriptor =
    MessageDescriptor::new("google.cloud.aiplatform.v1.RagVectorDbConfig.RagManagedDb", &[]);

impl Message for RagManagedDb {
    fn descriptor() -> &'static MessageDescriptor {
        &RAG_MANAGED_DB
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pinecone {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub index_name: String,
}

static PINECONE: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.RagVectorDbConfig.Pinecone",
    &[FieldDescriptor::new(1, "index_name", "indexName", Kind::String)],
);

impl Message for Pinecone {
    fn descriptor() -> &'static MessageDescriptor {
        &PINECONE
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VertexVectorSearch {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub index_endpoint: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub index: String,
}

static VERTEX_VECTOR_SEARCH: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.RagVectorDbConfig.VertexVectorSearch",
    &[
        FieldDescriptor::new(1, "index_endpoint", "indexEndpoint", Kind::String),
        FieldDescriptor::new(2, "index", "index", Kind::String),
    ],
);

impl Message for VertexVectorSearch {
    fn descriptor() -> &'static MessageDescriptor {
        &VERTEX_VECTOR_SEARCH
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RagEmbeddingModelConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertex_prediction_endpoint: Option<VertexPredictionEndpoint>,
}

static RAG_EMBEDDING_MODEL_CONFIG: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.RagEmbeddingModelConfig",
    &[FieldDescriptor::new(
        1,
        "vertex_prediction_endpoint",
        "vertexPredictionEndpoint",
        Kind::Message(VertexPredictionEndpoint::descriptor),
    )],
);

impl Message for RagEmbeddingModelConfig {
    fn descriptor() -> &'static MessageDescriptor {
        &RAG_EMBEDDING_MODEL_CONFIG
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VertexPredictionEndpoint {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub endpoint: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub model: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub model_version_id: String,
}

static VERTEX_PREDICTION_ENDPOINT: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.RagEmbeddingModelConfig.VertexPredictionEndpoint",
    &[
        FieldDescriptor::new(1, "endpoint", "endpoint", Kind::String),
        FieldDescriptor::new(2, "model", "model", Kind::String),
        FieldDescriptor::new(3, "model_version_id", "modelVersionId", Kind::String),
    ],
);

impl Message for VertexPredictionEndpoint {
    fn descriptor() -> &'static MessageDescriptor {
        &VERTEX_PREDICTION_ENDPOINT
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VertexAiSearchConfig {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub serving_config: String,
}

static VERTEX_AI_SEARCH_CONFIG: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.VertexAiSearchConfig",
    &[FieldDescriptor::new(1, "serving_config", "servingConfig", Kind::String)],
);

impl Message for VertexAiSearchConfig {
    fn descriptor() -> &'static MessageDescriptor {
        &VERTEX_AI_SEARCH_CONFIG
    }
}

/// A document inside a corpus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RagFile {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, with = "json::timestamp", skip_serializing_if = "Option::is_none")]
    pub create_time: Option<Timestamp>,
    #[serde(default, with = "json::timestamp", skip_serializing_if = "Option::is_none")]
    pub update_time: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_status: Option<FileStatus>,
    #[serde(flatten)]
    pub rag_file_source: Option<RagFileSource>,
}

/// Where a file was imported from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RagFileSource {
    GcsSource(GcsSource),
    GoogleDriveSource(GoogleDriveSource),
    DirectUploadSource(DirectUploadSource),
}

static RAG_FILE: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.RagFile",
    &[
        FieldDescriptor::new(1, "name", "name", Kind::String),
        FieldDescriptor::new(2, "display_name", "displayName", Kind::String),
        FieldDescriptor::new(3, "description", "description", Kind::String),
        FieldDescriptor::new(8, "gcs_source", "gcsSource", Kind::Message(GcsSource::descriptor))
            .in_group("rag_file_source"),
        FieldDescriptor::new(
            9,
            "google_drive_source",
            "googleDriveSource",
            Kind::Message(GoogleDriveSource::descriptor),
        )
        .in_group("rag_file_source"),
        FieldDescriptor::new(
            10,
            "direct_upload_source",
            "directUploadSource",
            Kind::Message(DirectUploadSource::descriptor),
        )
        .in_group("rag_file_source"),
        FieldDescriptor::new(6, "create_time", "createTime", Kind::Timestamp),
        FieldDescriptor::new(7, "update_time", "updateTime", Kind::Timestamp),
        FieldDescriptor::new(
            13,
            "file_status",
            "fileStatus",
            Kind::Message(FileStatus::descriptor),
        ),
    ],
);

impl Message for RagFile {
    fn descriptor() -> &'static MessageDescriptor {
        &RAG_FILE
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileState {
    Active,
    Error,
    #[default]
    #[serde(other)]
    StateUnspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileStatus {
    #[serde(default, skip_serializing_if = "is_default")]
    pub state: FileState,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error_status: String,
}

static FILE_STATUS: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.FileStatus",
    &[
        FieldDescriptor::new(
            1,
            "state",
            "state",
            Kind::Enum("google.cloud.aiplatform.v1.FileStatus.State"),
        ),
        FieldDescriptor::new(2, "error_status", "errorStatus", Kind::String),
    ],
);

impl Message for FileStatus {
    fn descriptor() -> &'static MessageDescriptor {
        &FILE_STATUS
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GcsSource {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub uris: Vec<String>,
}

static GCS_SOURCE: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.GcsSource",
    &[FieldDescriptor::new(1, "uris", "uris", Kind::String).repeated()],
);

impl Message for GcsSource {
    fn descriptor() -> &'static MessageDescriptor {
        &GCS_SOURCE
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleDriveSource {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_ids: Vec<ResourceId>,
}

static GOOGLE_DRIVE_SOURCE: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.GoogleDriveSource",
    &[FieldDescriptor::new(
        1,
        "resource_ids",
        "resourceIds",
        Kind::Message(ResourceId::descriptor),
    )
    .repeated()],
);

impl Message for GoogleDriveSource {
    fn descriptor() -> &'static MessageDescriptor {
        &GOOGLE_DRIVE_SOURCE
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    ResourceTypeFile,
    ResourceTypeFolder,
    #[default]
    #[serde(other)]
    ResourceTypeUnspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource_id: String,
    #[serde(default, skip_serializing_if = "is_default")]
    pub resource_type: ResourceType,
}

static RESOURCE_ID: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.GoogleDriveSource.ResourceId",
    &[
        FieldDescriptor::new(1, "resource_id", "resourceId", Kind::String),
        FieldDescriptor::new(
            2,
            "resource_type",
            "resourceType",
            Kind::Enum("google.cloud.aiplatform.v1.GoogleDriveSource.ResourceId.ResourceType"),
        ),
    ],
);

impl Message for ResourceId {
    fn descriptor() -> &'static MessageDescriptor {
        &RESOURCE_ID
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectUploadSource {}

static DIRECT_UPLOAD_SOURCE: MessageDescriptor =
    MessageDescriptor::new("google.cloud.aiplatform.v1.DirectUploadSource", &[]);

impl Message for DirectUploadSource {
    fn descriptor() -> &'static MessageDescriptor {
        &DIRECT_UPLOAD_SOURCE
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GcsDestination {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub output_uri_prefix: String,
}

static GCS_DESTINATION: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.GcsDestination",
    &[FieldDescriptor::new(1, "output_uri_prefix", "outputUriPrefix", Kind::String)],
);

impl Message for GcsDestination {
    fn descriptor() -> &'static MessageDescriptor {
        &GCS_DESTINATION
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BigQueryDestination {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub output_uri: String,
}

static BIG_QUERY_DESTINATION: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.BigQueryDestination",
    &[FieldDescriptor::new(1, "output_uri", "outputUri", Kind::String)],
);

impl Message for BigQueryDestination {
    fn descriptor() -> &'static MessageDescriptor {
        &BIG_QUERY_DESTINATION
    }
}

// Import configuration

/// What to import into a corpus and how to chunk it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRagFilesConfig {
    #[serde(flatten)]
    pub import_source: Option<ImportSource>,
    #[serde(flatten)]
    pub partial_failure_sink: Option<PartialFailureSink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rag_file_transformation_config: Option<RagFileTransformationConfig>,
    #[serde(default, skip_serializing_if = "is_default")]
    pub max_embedding_requests_per_min: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImportSource {
    GcsSource(GcsSource),
    GoogleDriveSource(GoogleDriveSource),
}

/// Where per-file import failures are written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartialFailureSink {
    PartialFailureGcsSink(GcsDestination),
    PartialFailureBigquerySink(BigQueryDestination),
}

impl ImportRagFilesConfig {
    /// Imports the given Cloud Storage uris.
    pub fn from_gcs<I, S>(uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            import_source: Some(ImportSource::GcsSource(GcsSource {
                uris: uris.into_iter().map(Into::into).collect(),
            })),
            ..Default::default()
        }
    }

    pub fn with_import_source(mut self, import_source: ImportSource) -> Self {
        self.import_source = Some(import_source);
        self
    }

    pub fn with_partial_failure_sink(mut self, sink: PartialFailureSink) -> Self {
        self.partial_failure_sink = Some(sink);
        self
    }

    pub fn with_chunking(mut self, chunk_size: i32, chunk_overlap: i32) -> Self {
        self.rag_file_transformation_config = Some(RagFileTransformationConfig {
            rag_file_chunking_config: Some(RagFileChunkingConfig {
                fixed_length_chunking: Some(FixedLengthChunking {
                    chunk_size,
                    chunk_overlap,
                }),
            }),
        });
        self
    }
}

static IMPORT_RAG_FILES_CONFIG: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.ImportRagFilesConfig",
    &[
        FieldDescriptor::new(2, "gcs_source", "gcsSource", Kind::Message(GcsSource::descriptor))
            .in_group("import_source"),
        FieldDescriptor::new(
            3,
            "google_drive_source",
            "googleDriveSource",
            Kind::Message(GoogleDriveSource::descriptor),
        )
        .in_group("import_source"),
        FieldDescriptor::new(
            11,
            "partial_failure_gcs_sink",
            "partialFailureGcsSink",
            Kind::Message(GcsDestination::descriptor),
        )
        .in_group("partial_failure_sink"),
        FieldDescriptor::new(
            12,
            "partial_failure_bigquery_sink",
            "partialFailureBigquerySink",
            Kind::Message(BigQueryDestination::descriptor),
        )
        .in_group("partial_failure_sink"),
        FieldDescriptor::new(
            8,
            "rag_file_transformation_config",
            "ragFileTransformationConfig",
            Kind::Message(RagFileTransformationConfig::descriptor),
        ),
        FieldDescriptor::new(
            5,
            "max_embedding_requests_per_min",
            "maxEmbeddingRequestsPerMin",
            Kind::Int32,
        ),
    ],
);

impl Message for ImportRagFilesConfig {
    fn descriptor() -> &'static MessageDescriptor {
        &IMPORT_RAG_FILES_CONFIG
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RagFileTransformationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rag_file_chunking_config: Option<RagFileChunkingConfig>,
}

static RAG_FILE_TRANSFORMATION_CONFIG: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.RagFileTransformationConfig",
    &[FieldDescriptor::new(
        1,
        "rag_file_chunking_config",
        "ragFileChunkingConfig",
        Kind::Message(RagFileChunkingConfig::descriptor),
    )],
);

impl Message for RagFileTransformationConfig {
    fn descriptor() -> &'static MessageDescriptor {
        &RAG_FILE_TRANSFORMATION_CONFIG
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RagFileChunkingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_length_chunking: Option<FixedLengthChunking>,
}

static RAG_FILE_CHUNKING_CONFIG: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.RagFileChunkingConfig",
    &[FieldDescriptor::new(
        3,
        "fixed_length_chunking",
        "fixedLengthChunking",
        Kind::Message(FixedLengthChunking::descriptor),
    )],
);

impl Message for RagFileChunkingConfig {
    fn descriptor() -> &'static MessageDescriptor {
        &RAG_FILE_CHUNKING_CONFIG
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedLengthChunking {
    #[serde(default, skip_serializing_if = "is_default")]
    pub chunk_size: i32,
    #[serde(default, skip_serializing_if = "is_default")]
    pub chunk_overlap: i32,
}

static FIXED_LENGTH_CHUNKING: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.RagFileChunkingConfig.FixedLengthChunking",
    &[
        FieldDescriptor::new(1, "chunk_size", "chunkSize", Kind::Int32),
        FieldDescriptor::new(2, "chunk_overlap", "chunkOverlap", Kind::Int32),
    ],
);

impl Message for FixedLengthChunking {
    fn descriptor() -> &'static MessageDescriptor {
        &FIXED_LENGTH_CHUNKING
    }
}

// Requests and responses

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRagCorpusRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rag_corpus: Option<RagCorpus>,
}

static CREATE_RAG_CORPUS_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.CreateRagCorpusRequest",
    &[
        FieldDescriptor::new(1, "parent", "parent", Kind::String),
        FieldDescriptor::new(2, "rag_corpus", "ragCorpus", Kind::Message(RagCorpus::descriptor)),
    ],
);

impl Message for CreateRagCorpusRequest {
    fn descriptor() -> &'static MessageDescriptor {
        &CREATE_RAG_CORPUS_REQUEST
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetRagCorpusRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

static GET_RAG_CORPUS_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.GetRagCorpusRequest",
    &[FieldDescriptor::new(1, "name", "name", Kind::String)],
);

impl Message for GetRagCorpusRequest {
    fn descriptor() -> &'static MessageDescriptor {
        &GET_RAG_CORPUS_REQUEST
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRagCorporaRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parent: String,
    #[serde(default, skip_serializing_if = "is_default")]
    pub page_size: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub page_token: String,
}

static LIST_RAG_CORPORA_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.ListRagCorporaRequest",
    &[
        FieldDescriptor::new(1, "parent", "parent", Kind::String),
        FieldDescriptor::new(2, "page_size", "pageSize", Kind::Int32),
        FieldDescriptor::new(3, "page_token", "pageToken", Kind::String),
    ],
);

impl Message for ListRagCorporaRequest {
    fn descriptor() -> &'static MessageDescriptor {
        &LIST_RAG_CORPORA_REQUEST
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRagCorporaResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rag_corpora: Vec<RagCorpus>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
}

static LIST_RAG_CORPORA_RESPONSE: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.ListRagCorporaResponse",
    &[
        FieldDescriptor::new(1, "rag_corpora", "ragCorpora", Kind::Message(RagCorpus::descriptor))
            .repeated(),
        FieldDescriptor::new(2, "next_page_token", "nextPageToken", Kind::String),
    ],
);

impl Message for ListRagCorporaResponse {
    fn descriptor() -> &'static MessageDescriptor {
        &LIST_RAG_CORPORA_RESPONSE
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRagCorpusRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rag_corpus: Option<RagCorpus>,
}

static UPDATE_RAG_CORPUS_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.UpdateRagCorpusRequest",
    &[FieldDescriptor::new(
        1,
        "rag_corpus",
        "ragCorpus",
        Kind::Message(RagCorpus::descriptor),
    )],
);

impl Message for UpdateRagCorpusRequest {
    fn descriptor() -> &'static MessageDescriptor {
        &UPDATE_RAG_CORPUS_REQUEST
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteRagCorpusRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Also delete the corpus's files.
    #[serde(default, skip_serializing_if = "is_default")]
    pub force: bool,
}

static DELETE_RAG_CORPUS_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.DeleteRagCorpusRequest",
    &[
        FieldDescriptor::new(1, "name", "name", Kind::String),
        FieldDescriptor::new(2, "force", "force", Kind::Bool),
    ],
);

impl Message for DeleteRagCorpusRequest {
    fn descriptor() -> &'static MessageDescriptor {
        &DELETE_RAG_CORPUS_REQUEST
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRagFilesRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_rag_files_config: Option<ImportRagFilesConfig>,
}

static IMPORT_RAG_FILES_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.ImportRagFilesRequest",
    &[
        FieldDescriptor::new(1, "parent", "parent", Kind::String),
        FieldDescriptor::new(
            2,
            "import_rag_files_config",
            "importRagFilesConfig",
            Kind::Message(ImportRagFilesConfig::descriptor),
        ),
    ],
);

impl Message for ImportRagFilesRequest {
    fn descriptor() -> &'static MessageDescriptor {
        &IMPORT_RAG_FILES_REQUEST
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRagFilesResponse {
    #[serde(default, with = "json::int64", skip_serializing_if = "is_default")]
    pub imported_rag_files_count: i64,
    #[serde(default, with = "json::int64", skip_serializing_if = "is_default")]
    pub failed_rag_files_count: i64,
    #[serde(default, with = "json::int64", skip_serializing_if = "is_default")]
    pub skipped_rag_files_count: i64,
    #[serde(flatten)]
    pub partial_failure_sink: Option<PartialFailures>,
}

/// Where the failures of an import were written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartialFailures {
    PartialFailuresGcsPath(String),
    PartialFailuresBigqueryTable(String),
}

static IMPORT_RAG_FILES_RESPONSE: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.ImportRagFilesResponse",
    &[
        FieldDescriptor::new(4, "partial_failures_gcs_path", "partialFailuresGcsPath", Kind::String)
            .in_group("partial_failure_sink"),
        FieldDescriptor::new(
            5,
            "partial_failures_bigquery_table",
            "partialFailuresBigqueryTable",
            Kind::String,
        )
        .in_group("partial_failure_sink"),
        FieldDescriptor::new(1, "imported_rag_files_count", "importedRagFilesCount", Kind::Int64),
        FieldDescriptor::new(2, "failed_rag_files_count", "failedRagFilesCount", Kind::Int64),
        FieldDescriptor::new(3, "skipped_rag_files_count", "skippedRagFilesCount", Kind::Int64),
    ],
);

impl Message for ImportRagFilesResponse {
    fn descriptor() -> &'static MessageDescriptor {
        &IMPORT_RAG_FILES_RESPONSE
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetRagFileRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

static GET_RAG_FILE_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.GetRagFileRequest",
    &[FieldDescriptor::new(1, "name", "name", Kind::String)],
);

impl Message for GetRagFileRequest {
    fn descriptor() -> &'static MessageDescriptor {
        &GET_RAG_FILE_REQUEST
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRagFilesRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parent: String,
    #[serde(default, skip_serializing_if = "is_default")]
    pub page_size: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub page_token: String,
}

static LIST_RAG_FILES_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.ListRagFilesRequest",
    &[
        FieldDescriptor::new(1, "parent", "parent", Kind::String),
        FieldDescriptor::new(2, "page_size", "pageSize", Kind::Int32),
        FieldDescriptor::new(3, "page_token", "pageToken", Kind::String),
    ],
);

impl Message for ListRagFilesRequest {
    fn descriptor() -> &'static MessageDescriptor {
        &LIST_RAG_FILES_REQUEST
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRagFilesResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rag_files: Vec<RagFile>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
}

static LIST_RAG_FILES_RESPONSE: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.ListRagFilesResponse",
    &[
        FieldDescriptor::new(1, "rag_files", "ragFiles", Kind::Message(RagFile::descriptor))
            .repeated(),
        FieldDescriptor::new(2, "next_page_token", "nextPageToken", Kind::String),
    ],
);

impl Message for ListRagFilesResponse {
    fn descriptor() -> &'static MessageDescriptor {
        &LIST_RAG_FILES_RESPONSE
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteRagFileRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

static DELETE_RAG_FILE_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.DeleteRagFileRequest",
    &[FieldDescriptor::new(1, "name", "name", Kind::String)],
);

impl Message for DeleteRagFileRequest {
    fn descriptor() -> &'static MessageDescriptor {
        &DELETE_RAG_FILE_REQUEST
    }
}

// Operation metadata

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRagCorpusOperationMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic_metadata: Option<GenericOperationMetadata>,
}

static CREATE_RAG_CORPUS_OPERATION_METADATA: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.CreateRagCorpusOperationMetadata",
    &[FieldDescriptor::new(
        1,
        "generic_metadata",
        "genericMetadata",
        Kind::Message(GenericOperationMetadata::descriptor),
    )],
);

impl Message for CreateRagCorpusOperationMetadata {
    fn descriptor() -> &'static MessageDescriptor {
        &CREATE_RAG_CORPUS_OPERATION_METADATA
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRagCorpusOperationMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic_metadata: Option<GenericOperationMetadata>,
}

static UPDATE_RAG_CORPUS_OPERATION_METADATA: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.UpdateRagCorpusOperationMetadata",
    &[FieldDescriptor::new(
        1,
        "generic_metadata",
        "genericMetadata",
        Kind::Message(GenericOperationMetadata::descriptor),
    )],
);

impl Message for UpdateRagCorpusOperationMetadata {
    fn descriptor() -> &'static MessageDescriptor {
        &UPDATE_RAG_CORPUS_OPERATION_METADATA
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRagFilesOperationMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic_metadata: Option<GenericOperationMetadata>,
    #[serde(default, with = "json::int64", skip_serializing_if = "is_default")]
    pub rag_corpus_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_rag_files_config: Option<ImportRagFilesConfig>,
    #[serde(default, skip_serializing_if = "is_default")]
    pub progress_percentage: i32,
}

static IMPORT_RAG_FILES_OPERATION_METADATA: MessageDescriptor = MessageDescriptor::new(
    "google.cloud.aiplatform.v1.ImportRagFilesOperationMetadata",
    &[
        FieldDescriptor::new(
            1,
            "generic_metadata",
            "genericMetadata",
            Kind::Message(GenericOperationMetadata::descriptor),
        ),
        FieldDescriptor::new(2, "rag_corpus_id", "ragCorpusId", Kind::Int64),
        FieldDescriptor::new(
            3,
            "import_rag_files_config",
            "importRagFilesConfig",
            Kind::Message(ImportRagFilesConfig::descriptor),
        ),
        FieldDescriptor::new(4, "progress_percentage", "progressPercentage", Kind::Int32),
    ],
);

impl Message for ImportRagFilesOperationMetadata {
    fn descriptor() -> &'static MessageDescriptor {
        &IMPORT_RAG_FILES_OPERATION_METADATA
    }
}
