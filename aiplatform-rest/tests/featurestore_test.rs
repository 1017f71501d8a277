use aiplatform_rest::{
    DeleteOperationMetadata,
    aiplatform_rest_core::{
        ErrorKind, Metadata,
        client::CallOptions,
        config::ApiSurface,
        http::StaticToken,
        message::wkt::{Empty, FieldMask},
    },
    featurestore::*,
};
use serde_json::json;
use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::{Duration, Instant},
};
use support::{TOKEN, config};
use tracing_test::traced_test;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path, query_param},
};

mod support;

const FEATURESTORE: &str = "projects/p/locations/l/featurestores/f";

fn client(uri: &str) -> FeaturestoreServiceRestTransport {
    FeaturestoreServiceRestTransport::builder()
        .config(config(uri))
        .credentials(Arc::new(StaticToken::new(TOKEN)))
        .build()
        .unwrap()
        .into()
}

#[derive(Debug, Default)]
struct Counter {
    posts: AtomicUsize,
    response_headers: Mutex<Metadata>,
}

impl FeaturestoreServiceInterceptor for Counter {
    fn post_get_featurestore(&self, response: Featurestore) -> Featurestore {
        self.posts.fetch_add(1, Ordering::SeqCst);
        response
    }

    fn post_get_featurestore_with_metadata(
        &self,
        response: Featurestore,
        metadata: Metadata,
    ) -> (Featurestore, Metadata) {
        *self.response_headers.lock().unwrap() = metadata.clone();
        (response, metadata)
    }
}

#[tokio::test]
async fn test_get_feature_decodes_the_value_type() {
    let server = MockServer::start().await;
    let name = format!("{FEATURESTORE}/entityTypes/e/features/x");
    Mock::given(method("GET"))
        .and(path(format!("/v1beta1/{name}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": name,
            "valueType": "INT64",
            "labels": {"team": "ranking"},
            "createTime": "2024-01-02T03:04:05.500Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server.uri());
    let feature = client
        .get_feature(GetFeatureRequest { name: name.clone() }, CallOptions::new())
        .await
        .unwrap();

    assert_eq!(feature.name, name);
    assert_eq!(feature.value_type, ValueType::Int64);
    assert_eq!(
        feature.labels.get("team").map(String::as_str),
        Some("ranking")
    );
    assert_eq!(feature.create_time.unwrap().nanos, 500_000_000);
}

#[tokio::test]
async fn test_get_featurestore_retries_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v1beta1/{FEATURESTORE}")))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .with_priority(1)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/v1beta1/{FEATURESTORE}")))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-request-id", "req-7")
                .set_body_json(json!({"name": FEATURESTORE, "state": "STABLE"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let counter = Arc::new(Counter::default());
    let client: FeaturestoreServiceRestTransport = FeaturestoreServiceRestTransport::builder()
        .config(config(&server.uri()))
        .credentials(Arc::new(StaticToken::new(TOKEN)))
        .interceptor(counter.clone())
        .build()
        .unwrap()
        .into();

    let started = Instant::now();
    let featurestore = client
        .get_featurestore(
            GetFeaturestoreRequest {
                name: FEATURESTORE.to_string(),
            },
            CallOptions::new(),
        )
        .await
        .unwrap();

    assert_eq!(featurestore.state, FeaturestoreState::Stable);
    assert_eq!(counter.posts.load(Ordering::SeqCst), 1);
    assert!(
        counter
            .response_headers
            .lock()
            .unwrap()
            .iter()
            .any(|(key, value)| key == "x-request-id" && value == "req-7")
    );
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_exhausted_retries_skip_post_hooks() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v1beta1/{FEATURESTORE}")))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let counter = Arc::new(Counter::default());
    let client: FeaturestoreServiceRestTransport = FeaturestoreServiceRestTransport::builder()
        .config(config(&server.uri()))
        .credentials(Arc::new(StaticToken::new(TOKEN)))
        .interceptor(counter.clone())
        .build()
        .unwrap()
        .into();

    let err = client
        .get_featurestore(
            GetFeaturestoreRequest {
                name: FEATURESTORE.to_string(),
            },
            CallOptions::new(),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unavailable);
    assert_eq!(err.rpc(), Some("GetFeaturestore"));
    assert_eq!(counter.posts.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_call_deadline_is_deadline_exceeded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v1beta1/{FEATURESTORE}/entityTypes")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(2))
                .set_body_json(json!({})),
        )
        .mount(&server)
        .await;

    let client = client(&server.uri());
    let err = client
        .list_entity_types(
            ListEntityTypesRequest {
                parent: FEATURESTORE.to_string(),
                ..Default::default()
            },
            CallOptions::new().with_timeout(Duration::from_millis(100)),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DeadlineExceeded);
    assert_eq!(err.rpc(), Some("ListEntityTypes"));
}

#[tokio::test]
async fn test_delete_featurestore_resolves_to_empty() {
    let server = MockServer::start().await;
    let operation_name = format!("{FEATURESTORE}/operations/op1");
    Mock::given(method("DELETE"))
        .and(path(format!("/v1beta1/{FEATURESTORE}")))
        .and(query_param("force", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": operation_name,
            "metadata": {
                "@type": "type.googleapis.com/google.cloud.aiplatform.v1beta1.DeleteOperationMetadata",
                "genericMetadata": {}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/v1beta1/{operation_name}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": operation_name,
            "done": true,
            "response": {"@type": "type.googleapis.com/google.protobuf.Empty"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server.uri());
    let handle = client
        .delete_featurestore(
            DeleteFeaturestoreRequest {
                name: FEATURESTORE.to_string(),
                force: true,
            },
            CallOptions::new(),
        )
        .await
        .unwrap();
    assert_eq!(
        handle.metadata().unwrap(),
        Some(DeleteOperationMetadata {
            generic_metadata: Some(Default::default())
        })
    );

    assert_eq!(handle.wait(None).await.unwrap(), Empty::default());
}

#[tokio::test]
async fn test_create_feature_under_a_feature_group() {
    let server = MockServer::start().await;
    let parent = "projects/p/locations/l/featureGroups/g";
    let operation_name = format!("{parent}/features/price/operations/op2");
    Mock::given(method("POST"))
        .and(path(format!("/v1beta1/{parent}/features")))
        .and(query_param("featureId", "price"))
        .and(body_json(json!({
            "valueType": "DOUBLE",
            "versionColumnName": "price_usd"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": operation_name,
            "done": true,
            "response": {
                "@type": "type.googleapis.com/google.cloud.aiplatform.v1beta1.Feature",
                "name": format!("{parent}/features/price"),
                "valueType": "DOUBLE",
                "versionColumnName": "price_usd"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server.uri());
    let feature = Feature {
        version_column_name: "price_usd".to_string(),
        ..Feature::new(ValueType::Double)
    };
    let handle = client
        .create_feature(
            CreateFeatureRequest {
                parent: parent.to_string(),
                feature: Some(feature),
                feature_id: "price".to_string(),
            },
            CallOptions::new(),
        )
        .await
        .unwrap();

    let created = handle.wait(None).await.unwrap();

    assert_eq!(created.name, format!("{parent}/features/price"));
    assert_eq!(created.value_type, ValueType::Double);
}

#[tokio::test]
async fn test_update_feature_sends_the_mask() {
    let server = MockServer::start().await;
    let name = format!("{FEATURESTORE}/entityTypes/e/features/x");
    Mock::given(method("PATCH"))
        .and(path(format!("/v1beta1/{name}")))
        .and(query_param("updateMask", "description,labels"))
        .and(body_json(json!({
            "description": "clicks in the last hour",
            "labels": {"team": "ranking"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": name,
            "description": "clicks in the last hour"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server.uri());
    let mut feature =
        Feature::new(ValueType::ValueTypeUnspecified).with_description("clicks in the last hour");
    feature.name = name.clone();
    feature.labels.insert("team".to_string(), "ranking".to_string());

    let updated = client
        .update_feature(
            UpdateFeatureRequest {
                feature: Some(feature),
                update_mask: Some(FieldMask::new(["description", "labels"])),
            },
            CallOptions::new(),
        )
        .await
        .unwrap();

    assert_eq!(updated.description, "clicks in the last hour");
}

#[tokio::test]
async fn test_list_features_reads_the_mask_in_camel_case() {
    let server = MockServer::start().await;
    let parent = format!("{FEATURESTORE}/entityTypes/e");
    Mock::given(method("GET"))
        .and(path(format!("/v1beta1/{parent}/features")))
        .and(query_param("readMask", "valueType,pointOfContact"))
        .and(query_param("latestStatsCount", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "features": [
                {"name": format!("{parent}/features/a"), "valueType": "STRING_ARRAY"},
                {"name": format!("{parent}/features/b"), "valueType": "EMBEDDING"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server.uri());
    let page = client
        .list_features(
            ListFeaturesRequest {
                parent,
                read_mask: Some(FieldMask::new(["value_type", "point_of_contact"])),
                latest_stats_count: 2,
                ..Default::default()
            },
            CallOptions::new(),
        )
        .await
        .unwrap();

    let value_types: Vec<_> = page.features.iter().map(|f| f.value_type).collect();
    assert_eq!(
        value_types,
        vec![ValueType::StringArray, ValueType::ValueTypeUnspecified]
    );
    assert!(page.next_page_token.is_empty());
}

#[tokio::test]
async fn test_ui_surface_routes_operations_under_ui() {
    let server = MockServer::start().await;
    let operation_name = format!("{FEATURESTORE}/entityTypes/e/operations/op3");
    Mock::given(method("POST"))
        .and(path(format!("/ui/{operation_name}:cancel")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client: FeaturestoreServiceRestTransport = FeaturestoreServiceRestTransport::builder()
        .config(config(&server.uri()).with_surface(ApiSurface::Ui))
        .credentials(Arc::new(StaticToken::new(TOKEN)))
        .build()
        .unwrap()
        .into();

    client.operations().cancel(&operation_name).await.unwrap();
}

#[tokio::test]
#[traced_test]
async fn test_dispatch_is_logged_without_the_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = client(&server.uri());
    client
        .get_entity_type(
            GetEntityTypeRequest {
                name: format!("{FEATURESTORE}/entityTypes/users"),
            },
            CallOptions::new(),
        )
        .await
        .unwrap();

    assert!(logs_contain("Dispatching RPC"));
    assert!(logs_contain("GetEntityType"));
    assert!(!logs_contain(TOKEN));
}
