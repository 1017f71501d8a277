use crate::message::{
    FieldDescriptor, Kind, Message, MessageDescriptor,
    json::is_default,
    wkt::{Any, Status},
};
use serde::{Deserialize, Serialize};

/// `google.longrunning.Operation`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Any>,
    #[serde(default, skip_serializing_if = "is_default")]
    pub done: bool,
    #[serde(flatten)]
    pub result: Option<OperationResult>,
}

/// The outcome of a finished operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperationResult {
    Error(Status),
    Response(Any),
}

static OPERATION: MessageDescriptor = MessageDescriptor::new(
    "google.longrunning.Operation",
    &[
        FieldDescriptor::new(1, "name", "name", Kind::String),
        FieldDescriptor::new(2, "metadata", "metadata", Kind::Any),
        FieldDescriptor::new(3, "done", "done", Kind::Bool),
        FieldDescriptor::new(4, "error", "error", Kind::Message(Status::descriptor))
            .in_group("result"),
        FieldDescriptor::new(5, "response", "response", Kind::Any).in_group("result"),
    ],
);

impl Message for Operation {
    fn descriptor() -> &'static MessageDescriptor {
        &OPERATION
    }
}

impl Operation {
    pub fn error(&self) -> Option<&Status> {
        match &self.result {
            Some(OperationResult::Error(status)) => Some(status),
            _ => None,
        }
    }

    pub fn response(&self) -> Option<&Any> {
        match &self.result {
            Some(OperationResult::Response(response)) => Some(response),
            _ => None,
        }
    }
}

/// `google.longrunning.ListOperationsResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOperationsResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<Operation>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
}

static LIST_OPERATIONS_RESPONSE: MessageDescriptor = MessageDescriptor::new(
    "google.longrunning.ListOperationsResponse",
    &[
        FieldDescriptor::new(
            1,
            "operations",
            "operations",
            Kind::Message(Operation::descriptor),
        )
        .repeated(),
        FieldDescriptor::new(2, "next_page_token", "nextPageToken", Kind::String),
    ],
);

impl Message for ListOperationsResponse {
    fn descriptor() -> &'static MessageDescriptor {
        &LIST_OPERATIONS_RESPONSE
    }
}

/// Parameters of a `List` call; `name` is the parent resource whose operations are listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOperationsRequest {
    pub name: String,
    pub filter: Option<String>,
    pub page_size: Option<i32>,
    pub page_token: Option<String>,
}

impl ListOperationsRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_page_size(mut self, page_size: i32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub(crate) fn query(&self, page_token: Option<&str>) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(filter) = &self.filter {
            query.push(("filter".to_string(), filter.clone()));
        }
        if let Some(page_size) = self.page_size {
            query.push(("pageSize".to_string(), page_size.to_string()));
        }
        if let Some(token) = page_token.filter(|token| !token.is_empty()) {
            query.push(("pageToken".to_string(), token.to_string()));
        }
        query
    }
}
