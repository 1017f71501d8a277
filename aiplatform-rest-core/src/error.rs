//! # Error Taxonomy
//!
//! Every failure surfaced at the caller boundary of an RPC is an [`Error`]. Errors are
//! classified by *cause* through [`ErrorKind`] rather than by HTTP status code, and carry
//! the diagnostics a caller needs: the original HTTP status, the server message, the opaque
//! `details` payload, whether a retry could help, and the RPC / request id.
//!
//! The mapping from an HTTP response to an error is total: [`Error::from_http_response`]
//! yields exactly one kind for every status `>= 400`.
use crate::BoxError;
use crate::message::wkt::Status;
use serde::Deserialize;
use std::fmt;

/// Classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The client sent malformed or illegal input (400).
    InvalidArgument,
    /// Missing or expired credentials (401).
    Unauthenticated,
    /// The caller is not allowed to perform the operation (403).
    PermissionDenied,
    /// The addressed resource does not exist (404).
    NotFound,
    /// The resource already exists or the request conflicts with it (409).
    AlreadyExists,
    /// Quota or rate limit exhausted (429).
    ResourceExhausted,
    /// The system is not in a state required for the operation (412, some 400s).
    FailedPrecondition,
    /// Concurrency conflict reported by the server (409 with `ABORTED`).
    Aborted,
    /// The service is temporarily unavailable (503) or the network failed.
    Unavailable,
    /// The caller's deadline elapsed or the server timed out (504).
    DeadlineExceeded,
    /// Server-side invariant broken (500).
    Internal,
    /// Anything else, including non-JSON error bodies.
    Unknown,
    /// The transport was closed before the call was issued.
    TransportClosed,
    /// No HTTP binding of the route could be satisfied by the request.
    NoBindingMatched,
    /// No operation URL template matches the operation name.
    UnroutableOperation,
    /// A response body was not valid JSON.
    MalformedBody,
    /// A response body was JSON but did not fit the declared message type.
    SchemaMismatch,
}

impl ErrorKind {
    /// `Conflict` is reported as [`ErrorKind::AlreadyExists`].
    pub const CONFLICT: ErrorKind = ErrorKind::AlreadyExists;

    /// Maps a canonical status name (e.g. `NOT_FOUND`) to its kind.
    ///
    /// Returns `None` for names that are not part of the taxonomy.
    pub fn from_status_name(name: &str) -> Option<Self> {
        let kind = match name {
            "INVALID_ARGUMENT" | "OUT_OF_RANGE" => ErrorKind::InvalidArgument,
            "UNAUTHENTICATED" => ErrorKind::Unauthenticated,
            "PERMISSION_DENIED" => ErrorKind::PermissionDenied,
            "NOT_FOUND" => ErrorKind::NotFound,
            "ALREADY_EXISTS" => ErrorKind::AlreadyExists,
            "RESOURCE_EXHAUSTED" => ErrorKind::ResourceExhausted,
            "FAILED_PRECONDITION" => ErrorKind::FailedPrecondition,
            "ABORTED" => ErrorKind::Aborted,
            "UNAVAILABLE" => ErrorKind::Unavailable,
            "DEADLINE_EXCEEDED" => ErrorKind::DeadlineExceeded,
            "INTERNAL" => ErrorKind::Internal,
            "UNKNOWN" => ErrorKind::Unknown,
            _ => return None,
        };
        Some(kind)
    }

    /// Maps an HTTP status code (>= 400) to its kind.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => ErrorKind::InvalidArgument,
            401 => ErrorKind::Unauthenticated,
            403 => ErrorKind::PermissionDenied,
            404 => ErrorKind::NotFound,
            409 => ErrorKind::AlreadyExists,
            412 => ErrorKind::FailedPrecondition,
            429 => ErrorKind::ResourceExhausted,
            500 => ErrorKind::Internal,
            503 => ErrorKind::Unavailable,
            504 => ErrorKind::DeadlineExceeded,
            _ => ErrorKind::Unknown,
        }
    }

    /// Maps a canonical numeric code (as found in `google.rpc.Status.code`) to its kind.
    pub fn from_code(code: i32) -> Self {
        match code {
            3 | 11 => ErrorKind::InvalidArgument,
            4 => ErrorKind::DeadlineExceeded,
            5 => ErrorKind::NotFound,
            6 => ErrorKind::AlreadyExists,
            7 => ErrorKind::PermissionDenied,
            8 => ErrorKind::ResourceExhausted,
            9 => ErrorKind::FailedPrecondition,
            10 => ErrorKind::Aborted,
            13 => ErrorKind::Internal,
            14 => ErrorKind::Unavailable,
            16 => ErrorKind::Unauthenticated,
            _ => ErrorKind::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::Unauthenticated => "Unauthenticated",
            ErrorKind::PermissionDenied => "PermissionDenied",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::AlreadyExists => "AlreadyExists",
            ErrorKind::ResourceExhausted => "ResourceExhausted",
            ErrorKind::FailedPrecondition => "FailedPrecondition",
            ErrorKind::Aborted => "Aborted",
            ErrorKind::Unavailable => "Unavailable",
            ErrorKind::DeadlineExceeded => "DeadlineExceeded",
            ErrorKind::Internal => "Internal",
            ErrorKind::Unknown => "Unknown",
            ErrorKind::TransportClosed => "TransportClosed",
            ErrorKind::NoBindingMatched => "NoBindingMatched",
            ErrorKind::UnroutableOperation => "UnroutableOperation",
            ErrorKind::MalformedBody => "MalformedBody",
            ErrorKind::SchemaMismatch => "SchemaMismatch",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error returned by every RPC, operation and session call.
#[derive(Debug, thiserror::Error)]
#[error("{kind}: '{message}'")]
pub struct Error {
    kind: ErrorKind,
    http_status: Option<u16>,
    message: String,
    details: Option<serde_json::Value>,
    retryable: bool,
    rpc: Option<String>,
    request_id: Option<String>,
    body: Option<Vec<u8>>,
    #[source]
    source: Option<BoxError>,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            http_status: None,
            message: message.into(),
            details: None,
            retryable: matches!(kind, ErrorKind::Unavailable),
            rpc: None,
            request_id: None,
            body: None,
            source: None,
        }
    }

    pub(crate) fn transport_closed() -> Self {
        Self::new(ErrorKind::TransportClosed, "the transport has been closed")
    }

    pub(crate) fn deadline_exceeded(timeout: std::time::Duration) -> Self {
        Self::new(
            ErrorKind::DeadlineExceeded,
            format!("deadline of {timeout:?} exceeded"),
        )
    }

    pub(crate) fn malformed_body(source: serde_json::Error) -> Self {
        Self::new(
            ErrorKind::MalformedBody,
            format!("response body is not valid JSON: {source}"),
        )
        .with_source(source)
    }

    pub(crate) fn schema_mismatch(type_name: &str, source: serde_json::Error) -> Self {
        Self::new(
            ErrorKind::SchemaMismatch,
            format!("JSON does not match the schema of '{type_name}': {source}"),
        )
        .with_source(source)
    }

    /// Maps a non-success HTTP response into an error.
    ///
    /// The JSON status envelope (`{"error": {"code", "message", "status", "details"}}`) is
    /// preferred: its `status` name decides the kind when it is part of the taxonomy,
    /// otherwise the HTTP status code does. An empty body is classified by the HTTP status
    /// alone; any other body that is not a status envelope yields [`ErrorKind::Unknown`]
    /// with the raw bytes attached.
    pub fn from_http_response(status: u16, headers: &http::HeaderMap, body: &[u8]) -> Self {
        let request_id = ["x-request-id", "x-goog-request-id"]
            .iter()
            .find_map(|name| headers.get(*name))
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let mut error = match parse_envelope(body) {
            Some(envelope) => {
                let kind = envelope
                    .status
                    .as_deref()
                    .and_then(ErrorKind::from_status_name)
                    .unwrap_or_else(|| ErrorKind::from_http_status(status));
                let mut error = Error::new(kind, envelope.message.unwrap_or_default());
                error.details = envelope.details;
                error
            }
            None if body.iter().all(u8::is_ascii_whitespace) => {
                Error::new(ErrorKind::from_http_status(status), format!("HTTP {status}"))
            }
            None => {
                let mut error = Error::new(
                    ErrorKind::Unknown,
                    format!("HTTP {status} with an unrecognised error body"),
                );
                error.body = Some(body.to_vec());
                error
            }
        };

        error.http_status = Some(status);
        error.request_id = request_id;
        error.retryable = matches!(status, 503 | 504);
        error
    }

    /// Maps a `google.rpc.Status` carried by a finished operation into an error.
    pub fn from_status(status: &Status) -> Self {
        let mut error = Error::new(ErrorKind::from_code(status.code), status.message.clone());
        if !status.details.is_empty() {
            error.details = Some(serde_json::Value::Array(
                status.details.iter().map(|any| any.to_json()).collect(),
            ));
        }
        error
    }

    pub fn with_rpc(mut self, rpc: impl Into<String>) -> Self {
        self.rpc = Some(rpc.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub(crate) fn with_retryable(mut self, retryable: bool) -> Self {
        self.retryable = retryable;
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The HTTP status of the failed response, if the server answered.
    pub fn http_status(&self) -> Option<u16> {
        self.http_status
    }

    /// The server-provided message, or a locally generated description.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The server-provided `details` payload, untouched.
    pub fn details(&self) -> Option<&serde_json::Value> {
        self.details.as_ref()
    }

    /// Whether repeating the same call may succeed.
    pub fn is_retryable(&self) -> bool {
        self.retryable
    }

    /// The RPC (or operation verb) that failed.
    pub fn rpc(&self) -> Option<&str> {
        self.rpc.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// The raw response body, kept when it could not be interpreted.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: EnvelopeBody,
}

#[derive(Debug, Deserialize)]
struct EnvelopeBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    details: Option<serde_json::Value>,
}

// Some front ends wrap the envelope in a one-element array.
fn parse_envelope(body: &[u8]) -> Option<EnvelopeBody> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    let value = match value {
        serde_json::Value::Array(mut items) if items.len() == 1 => items.remove(0),
        other => other,
    };
    serde_json::from_value::<ErrorEnvelope>(value)
        .ok()
        .map(|envelope| envelope.error)
}
