//! # Route Tables
//!
//! Each RPC is described by a [`Route`]: its name, an ordered list of [`HttpRule`]
//! bindings (the first one is the primary binding, the rest are additional bindings) and
//! whether retrying it is safe.
//!
//! Routes are `const`-constructible so service crates declare them as `static` data:
//!
//! ```rust
//! use aiplatform_rest_core::routing::{HttpRule, Route};
//!
//! static GET_RAG_CORPUS: Route = Route::new(
//!     "GetRagCorpus",
//!     &[HttpRule::get("/{name=projects/*/locations/*/ragCorpora/*}")],
//! );
//!
//! assert!(GET_RAG_CORPUS.is_idempotent());
//! ```
//!
//! Templates are compiled on first use and cached for the lifetime of the process.
pub mod template;
pub mod transcode;

pub use template::{PathTemplate, TemplateError};
pub use transcode::{FieldPartition, TranscodedRequest, transcode};

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::{collections::HashMap, fmt, sync::Arc};

/// The HTTP verb of a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Verb {
    pub fn as_method(&self) -> http::Method {
        match self {
            Verb::Get => http::Method::GET,
            Verb::Post => http::Method::POST,
            Verb::Put => http::Method::PUT,
            Verb::Patch => http::Method::PATCH,
            Verb::Delete => http::Method::DELETE,
        }
    }

    /// Verbs that are safe to repeat unless a route says otherwise.
    pub fn is_idempotent(&self) -> bool {
        matches!(self, Verb::Get | Verb::Put | Verb::Delete)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_method().as_str())
    }
}

/// One HTTP binding: verb, URL template and body selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpRule {
    pub verb: Verb,
    pub uri: &'static str,
    /// `None` for no body, `Some("*")` for the whole request or `Some(field)` for one field.
    pub body: Option<&'static str>,
}

impl HttpRule {
    pub const fn get(uri: &'static str) -> Self {
        Self {
            verb: Verb::Get,
            uri,
            body: None,
        }
    }

    pub const fn delete(uri: &'static str) -> Self {
        Self {
            verb: Verb::Delete,
            uri,
            body: None,
        }
    }

    pub const fn post(uri: &'static str, body: &'static str) -> Self {
        Self {
            verb: Verb::Post,
            uri,
            body: Some(body),
        }
    }

    pub const fn patch(uri: &'static str, body: &'static str) -> Self {
        Self {
            verb: Verb::Patch,
            uri,
            body: Some(body),
        }
    }

    pub const fn put(uri: &'static str, body: &'static str) -> Self {
        Self {
            verb: Verb::Put,
            uri,
            body: Some(body),
        }
    }

    /// The compiled template of this rule.
    pub fn template(&self) -> Result<Arc<PathTemplate>, TemplateError> {
        compiled(self.uri)
    }
}

/// The declarative description of an RPC's HTTP shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    rpc: &'static str,
    rules: &'static [HttpRule],
    idempotent: Option<bool>,
}

impl Route {
    pub const fn new(rpc: &'static str, rules: &'static [HttpRule]) -> Self {
        Self {
            rpc,
            rules,
            idempotent: None,
        }
    }

    /// Overrides whether retrying this RPC is safe.
    pub const fn idempotent(self, idempotent: bool) -> Self {
        Self {
            rpc: self.rpc,
            rules: self.rules,
            idempotent: Some(idempotent),
        }
    }

    pub fn rpc(&self) -> &'static str {
        self.rpc
    }

    pub fn rules(&self) -> &'static [HttpRule] {
        self.rules
    }

    /// Whether failed attempts may be retried: the explicit marking if present, otherwise
    /// the idempotency of the primary binding's verb.
    pub fn is_idempotent(&self) -> bool {
        self.idempotent.unwrap_or_else(|| {
            self.rules
                .first()
                .is_some_and(|rule| rule.verb.is_idempotent())
        })
    }
}

static TEMPLATES: Lazy<RwLock<HashMap<&'static str, Arc<PathTemplate>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

fn compiled(uri: &'static str) -> Result<Arc<PathTemplate>, TemplateError> {
    if let Some(template) = TEMPLATES.read().get(uri) {
        return Ok(template.clone());
    }
    let template = Arc::new(PathTemplate::parse(uri)?);
    Ok(TEMPLATES.write().entry(uri).or_insert(template).clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    static CREATE: Route = Route::new(
        "CreateRagCorpus",
        &[HttpRule::post("/{parent=projects/*/locations/*}/ragCorpora", "rag_corpus")],
    );

    #[test]
    fn test_idempotency_defaults_follow_verb() {
        assert!(!CREATE.is_idempotent());
        assert!(CREATE.idempotent(true).is_idempotent());

        static DELETE: Route = Route::new("DeleteRagCorpus", &[HttpRule::delete("/{name=*}")]);
        assert!(DELETE.is_idempotent());
        assert!(!DELETE.idempotent(false).is_idempotent());
    }

    #[test]
    fn test_templates_are_cached() {
        let rule = CREATE.rules()[0];
        let first = rule.template().unwrap();
        let second = rule.template().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
