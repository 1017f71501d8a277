//! # Transcoder
//!
//! Turns a typed request into the concrete HTTP call described by its [`Route`]:
//!
//! 1. Bindings are tried in declaration order. A binding is usable when every variable of
//!    its template is bound to a set, non-empty scalar that matches the variable's pattern.
//! 2. Fields consumed by the path are removed from the request.
//! 3. The body is the whole remaining request (`*`), one named field, or nothing.
//! 4. Whatever is left is flattened into lexicographically sorted query parameters.
use super::{HttpRule, PathTemplate, Route, Verb};
use crate::{
    error::{Error, ErrorKind},
    message::{Message, MessageDescriptor, codec},
};
use serde_json::{Map, Value};

/// Which fields of the request ended up where.
///
/// `path` holds dotted field paths (`rag_corpus.name`), `body` and `query` hold top-level
/// proto field names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPartition {
    pub path: Vec<String>,
    pub body: Vec<String>,
    pub query: Vec<String>,
}

/// The concrete HTTP shape of one call.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscodedRequest {
    pub verb: Verb,
    /// Unescaped path segments; the custom verb, if any, is part of the last one.
    pub path_segments: Vec<String>,
    /// Sorted by key; repeated fields produce repeated keys.
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub partition: FieldPartition,
}

impl TranscodedRequest {
    /// Resolves the request against a base url, e.g. `https://host/v1/`.
    pub fn url(&self, base: &url::Url) -> url::Url {
        let mut url = base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(&self.path_segments);
        }
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        url
    }

    /// The percent-encoded path, rooted at `/`.
    pub fn path(&self) -> String {
        match url::Url::parse("http://localhost/") {
            Ok(base) => {
                let mut url = base;
                if let Ok(mut segments) = url.path_segments_mut() {
                    segments.clear().extend(&self.path_segments);
                }
                url.path().to_string()
            }
            Err(_) => format!("/{}", self.path_segments.join("/")),
        }
    }

    /// The serialized body, when the binding has one.
    pub fn body_bytes(&self) -> Option<Vec<u8>> {
        self.body.as_ref().map(|body| body.to_string().into_bytes())
    }
}

/// Transcodes `request` according to `route`.
pub fn transcode<M: Message>(route: &Route, request: &M) -> Result<TranscodedRequest, Error> {
    let descriptor = M::descriptor();
    let object = codec::encode_object(request)?;

    for rule in route.rules() {
        let template = rule.template().map_err(|e| {
            Error::new(ErrorKind::Internal, e.to_string())
                .with_rpc(route.rpc())
                .with_source(e)
        })?;
        if let Some(transcoded) = try_binding(rule, &template, descriptor, &object) {
            return Ok(transcoded);
        }
    }

    Err(Error::new(
        ErrorKind::NoBindingMatched,
        format!("no HTTP binding of '{}' matches the request", route.rpc()),
    )
    .with_rpc(route.rpc()))
}

fn try_binding(
    rule: &HttpRule,
    template: &PathTemplate,
    descriptor: &'static MessageDescriptor,
    object: &Map<String, Value>,
) -> Option<TranscodedRequest> {
    let mut values = Vec::new();
    let mut json_paths = Vec::new();
    for variable in template.variables() {
        let json_path = json_path(descriptor, &variable.field_path)?;
        let value = scalar_at(object, &json_path)?;
        if value.is_empty() || !variable.matches(&value) {
            return None;
        }
        values.push(value);
        json_paths.push(json_path);
    }

    let value_refs: Vec<&str> = values.iter().map(String::as_str).collect();
    let path_segments = template.expand(&value_refs)?;

    let mut partition = FieldPartition {
        path: template.variables().map(|variable| variable.field()).collect(),
        ..Default::default()
    };

    let mut leftovers = object.clone();
    for json_path in &json_paths {
        remove_at(&mut leftovers, json_path);
    }

    let body = match rule.body {
        None => None,
        Some("*") => {
            partition.body = proto_names(descriptor, leftovers.keys());
            Some(Value::Object(std::mem::take(&mut leftovers)))
        }
        Some(field) => {
            let json_name = descriptor
                .field_by_name(field)
                .map(|field| field.json_name)
                .unwrap_or(field);
            partition.body.push(field.to_string());
            Some(
                leftovers
                    .remove(json_name)
                    .unwrap_or_else(|| Value::Object(Map::new())),
            )
        }
    };

    partition.query = proto_names(descriptor, leftovers.keys());
    let mut query = Vec::new();
    for (key, value) in &leftovers {
        flatten_query(key, value, &mut query);
    }
    query.sort_by(|(a, _), (b, _)| a.cmp(b));

    Some(TranscodedRequest {
        verb: rule.verb,
        path_segments,
        query,
        body,
        partition,
    })
}

/// Maps a proto field path onto json names, descending through message descriptors.
fn json_path(descriptor: &'static MessageDescriptor, field_path: &[String]) -> Option<Vec<String>> {
    let mut current = Some(descriptor);
    let mut path = Vec::with_capacity(field_path.len());
    for name in field_path {
        let field = current?.field_by_name(name)?;
        path.push(field.json_name.to_string());
        current = field.kind.message();
    }
    Some(path)
}

fn scalar_at(object: &Map<String, Value>, path: &[String]) -> Option<String> {
    let (leaf, parents) = path.split_last()?;
    let mut current = object;
    for key in parents {
        current = current.get(key)?.as_object()?;
    }
    match current.get(leaf)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn remove_at(object: &mut Map<String, Value>, path: &[String]) {
    let Some((leaf, parents)) = path.split_last() else {
        return;
    };
    let mut current = object;
    for key in parents {
        match current.get_mut(key).and_then(Value::as_object_mut) {
            Some(next) => current = next,
            None => return,
        }
    }
    current.remove(leaf);
}

fn proto_names<'a>(
    descriptor: &MessageDescriptor,
    keys: impl Iterator<Item = &'a String>,
) -> Vec<String> {
    keys.map(|key| {
        descriptor
            .field_by_key(key)
            .map(|field| field.name.to_string())
            .unwrap_or_else(|| key.clone())
    })
    .collect()
}

fn flatten_query(key: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::String(s) => out.push((key.to_string(), s.clone())),
        Value::Number(n) => out.push((key.to_string(), n.to_string())),
        Value::Bool(b) => out.push((key.to_string(), b.to_string())),
        Value::Array(items) => {
            for item in items {
                flatten_query(key, item, out);
            }
        }
        Value::Object(entries) => {
            for (nested, item) in entries {
                flatten_query(&format!("{key}.{nested}"), item, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{FieldDescriptor, Kind};
    use serde::{Deserialize, Serialize};
    use std::collections::BTreeMap;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Corpus {
        #[serde(default, skip_serializing_if = "String::is_empty")]
        name: String,
        #[serde(default, skip_serializing_if = "String::is_empty")]
        display_name: String,
    }

    static CORPUS: MessageDescriptor = MessageDescriptor::new(
        "test.Corpus",
        &[
            FieldDescriptor::new(1, "name", "name", Kind::String),
            FieldDescriptor::new(2, "display_name", "displayName", Kind::String),
        ],
    );

    impl Message for Corpus {
        fn descriptor() -> &'static MessageDescriptor {
            &CORPUS
        }
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Request {
        #[serde(default, skip_serializing_if = "String::is_empty")]
        parent: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        corpus: Option<Corpus>,
        #[serde(default, skip_serializing_if = "crate::message::json::is_default")]
        page_size: i32,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        tags: Vec<String>,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        labels: BTreeMap<String, String>,
    }

    static REQUEST: MessageDescriptor = MessageDescriptor::new(
        "test.Request",
        &[
            FieldDescriptor::new(1, "parent", "parent", Kind::String),
            FieldDescriptor::new(2, "corpus", "corpus", Kind::Message(Corpus::descriptor)),
            FieldDescriptor::new(3, "page_size", "pageSize", Kind::Int32),
            FieldDescriptor::new(4, "tags", "tags", Kind::String).repeated(),
            FieldDescriptor::new(5, "labels", "labels", Kind::String).map(),
        ],
    );

    impl Message for Request {
        fn descriptor() -> &'static MessageDescriptor {
            &REQUEST
        }
    }

    static LIST: Route = Route::new(
        "ListCorpora",
        &[
            HttpRule::get("/{parent=projects/*/locations/*}/ragCorpora"),
            HttpRule::get("/{parent=projects/*}/ragCorpora"),
        ],
    );

    static CREATE: Route = Route::new(
        "CreateCorpus",
        &[HttpRule::post("/{parent=projects/*/locations/*}/ragCorpora", "corpus")],
    );

    static UPDATE: Route = Route::new(
        "UpdateCorpus",
        &[HttpRule::patch("/{corpus.name=projects/*/locations/*/ragCorpora/*}", "corpus")],
    );

    static IMPORT: Route = Route::new(
        "ImportFiles",
        &[HttpRule::post("/{parent=projects/*/locations/*}/ragFiles:import", "*")],
    );

    fn request() -> Request {
        Request {
            parent: "projects/p/locations/l".to_string(),
            page_size: 10,
            tags: vec!["b".to_string(), "a".to_string()],
            labels: BTreeMap::from([("env".to_string(), "prod".to_string())]),
            ..Default::default()
        }
    }

    #[test]
    fn test_get_puts_leftovers_in_sorted_query() {
        let transcoded = transcode(&LIST, &request()).unwrap();

        assert_eq!(transcoded.verb, Verb::Get);
        assert_eq!(transcoded.path(), "/projects/p/locations/l/ragCorpora");
        assert_eq!(transcoded.body, None);
        assert_eq!(
            transcoded.query,
            vec![
                ("labels.env".to_string(), "prod".to_string()),
                ("pageSize".to_string(), "10".to_string()),
                ("tags".to_string(), "b".to_string()),
                ("tags".to_string(), "a".to_string()),
            ]
        );
        assert_eq!(transcoded.partition.path, vec!["parent"]);
        assert_eq!(transcoded.partition.query, vec!["labels", "page_size", "tags"]);
    }

    #[test]
    fn test_additional_binding_is_used_when_primary_does_not_match() {
        let request = Request {
            parent: "projects/p".to_string(),
            ..Default::default()
        };

        let transcoded = transcode(&LIST, &request).unwrap();

        assert_eq!(transcoded.path(), "/projects/p/ragCorpora");
    }

    #[test]
    fn test_no_binding_when_path_field_is_missing_or_mismatched() {
        let err = transcode(&LIST, &Request::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoBindingMatched);
        assert_eq!(err.rpc(), Some("ListCorpora"));

        let request = Request {
            parent: "folders/f".to_string(),
            ..Default::default()
        };
        let err = transcode(&LIST, &request).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoBindingMatched);
    }

    #[test]
    fn test_named_body_field() {
        let request = Request {
            parent: "projects/p/locations/l".to_string(),
            corpus: Some(Corpus {
                display_name: "d".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };

        let transcoded = transcode(&CREATE, &request).unwrap();

        assert_eq!(transcoded.verb, Verb::Post);
        assert_eq!(transcoded.body_bytes().unwrap(), br#"{"displayName":"d"}"#);
        assert!(transcoded.query.is_empty());
        assert_eq!(transcoded.partition.body, vec!["corpus"]);
    }

    #[test]
    fn test_absent_body_message_encodes_as_empty_object() {
        let request = Request {
            parent: "projects/p/locations/l".to_string(),
            ..Default::default()
        };

        let transcoded = transcode(&CREATE, &request).unwrap();

        assert_eq!(transcoded.body, Some(serde_json::json!({})));
    }

    #[test]
    fn test_nested_path_field_is_removed_from_body() {
        let request = Request {
            corpus: Some(Corpus {
                name: "projects/p/locations/l/ragCorpora/c".to_string(),
                display_name: "new".to_string(),
            }),
            ..Default::default()
        };

        let transcoded = transcode(&UPDATE, &request).unwrap();

        assert_eq!(transcoded.path(), "/projects/p/locations/l/ragCorpora/c");
        assert_eq!(
            transcoded.body,
            Some(serde_json::json!({"displayName": "new"}))
        );
        assert_eq!(transcoded.partition.path, vec!["corpus.name"]);
    }

    #[test]
    fn test_wildcard_body_takes_every_leftover() {
        let transcoded = transcode(&IMPORT, &request()).unwrap();

        assert_eq!(
            transcoded.path(),
            "/projects/p/locations/l/ragFiles:import"
        );
        assert_eq!(
            transcoded.body,
            Some(serde_json::json!({
                "pageSize": 10,
                "tags": ["b", "a"],
                "labels": {"env": "prod"}
            }))
        );
        assert!(transcoded.query.is_empty());
    }

    #[test]
    fn test_single_segment_variables_are_percent_encoded() {
        static GET: Route = Route::new("GetCorpus", &[HttpRule::get("/corpora/{parent}")]);
        let request = Request {
            parent: "a b%".to_string(),
            ..Default::default()
        };

        let transcoded = transcode(&GET, &request).unwrap();

        assert_eq!(transcoded.path_segments, vec!["corpora", "a b%"]);
        assert_eq!(transcoded.path(), "/corpora/a%20b%25");
    }

    #[test]
    fn test_slash_in_single_segment_variable_matches_no_binding() {
        static GET: Route = Route::new("GetCorpus", &[HttpRule::get("/corpora/{parent}")]);
        let request = Request {
            parent: "a/b".to_string(),
            ..Default::default()
        };

        let err = transcode(&GET, &request).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NoBindingMatched);
    }

    #[test]
    fn test_url_joins_base_prefix_and_query() {
        let base = url::Url::parse("https://aiplatform.googleapis.com/v1/").unwrap();
        let transcoded = transcode(&LIST, &request()).unwrap();

        let url = transcoded.url(&base);

        assert_eq!(
            url.as_str(),
            "https://aiplatform.googleapis.com/v1/projects/p/locations/l/ragCorpora?labels.env=prod&pageSize=10&tags=b&tags=a"
        );
    }

    #[test]
    fn test_transcoding_is_deterministic() {
        let first = transcode(&IMPORT, &request()).unwrap();
        let second = transcode(&IMPORT, &request()).unwrap();
        assert_eq!(first.body_bytes(), second.body_bytes());
        assert_eq!(first.path(), second.path());
    }
}
