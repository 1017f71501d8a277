use aiplatform_rest::{
    aiplatform_rest_core::{
        ErrorKind, Metadata,
        client::CallOptions,
        http::StaticToken,
        message::wkt::Empty,
        operations::{Operation, OperationHandle, PollingPolicy},
    },
    rag_data::*,
};
use futures_util::future::join_all;
use serde_json::json;
use std::{sync::Arc, sync::Mutex, time::Duration};
use support::{TOKEN, config};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param},
};

mod support;

fn client(uri: &str) -> VertexRagDataServiceRestTransport {
    VertexRagDataServiceRestTransport::builder()
        .config(config(uri))
        .credentials(Arc::new(StaticToken::new(TOKEN)))
        .build()
        .unwrap()
        .into()
}

/// Rewrites the corpus name of `GetRagCorpus` and records the hooks it saw.
#[derive(Debug, Default)]
struct Redirect {
    target: String,
    events: Mutex<Vec<String>>,
}

impl VertexRagDataServiceInterceptor for Redirect {
    fn pre_get_rag_corpus(
        &self,
        mut request: GetRagCorpusRequest,
        mut metadata: Metadata,
    ) -> (GetRagCorpusRequest, Metadata) {
        self.events
            .lock()
            .unwrap()
            .push(format!("pre:{}", request.name));
        request.name = self.target.clone();
        metadata.push(("x-redirected".to_string(), "1".to_string()));
        (request, metadata)
    }

    fn post_get_rag_corpus(&self, response: RagCorpus) -> RagCorpus {
        self.events
            .lock()
            .unwrap()
            .push(format!("post:{}", response.name));
        response
    }

    fn post_create_rag_corpus(&self, response: Operation) -> Operation {
        self.events
            .lock()
            .unwrap()
            .push(format!("post:{}", response.name));
        response
    }
}

#[tokio::test]
async fn test_create_corpus_waits_for_the_operation() {
    let server = MockServer::start().await;
    let operation_name = "projects/p/locations/l/ragCorpora/c1/operations/op1";
    Mock::given(method("POST"))
        .and(path("/v1/projects/p/locations/l/ragCorpora"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(json!({"displayName": "d"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": operation_name,
            "done": false,
            "metadata": {
                "@type": "type.googleapis.com/google.cloud.aiplatform.v1.CreateRagCorpusOperationMetadata",
                "genericMetadata": {"createTime": "2024-05-01T10:00:00Z"}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/v1/{operation_name}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": operation_name})))
        .up_to_n_times(1)
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/v1/{operation_name}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": operation_name,
            "done": true,
            "response": {
                "@type": "type.googleapis.com/google.cloud.aiplatform.v1.RagCorpus",
                "name": "projects/p/locations/l/ragCorpora/c1",
                "displayName": "d",
                "corpusStatus": {"state": "ACTIVE"}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server.uri());
    let request = CreateRagCorpusRequest {
        parent: "projects/p/locations/l".to_string(),
        rag_corpus: Some(RagCorpus::default().with_display_name("d")),
    };

    let handle = client
        .create_rag_corpus(request, CallOptions::new())
        .await
        .unwrap();
    assert_eq!(handle.name(), operation_name);
    assert!(handle.result().is_none());
    let metadata = handle.metadata().unwrap().unwrap();
    assert_eq!(
        metadata.generic_metadata.unwrap().create_time.unwrap().seconds,
        1_714_557_600
    );

    let corpus = handle.wait(None).await.unwrap();

    assert_eq!(corpus.name, "projects/p/locations/l/ragCorpora/c1");
    assert_eq!(corpus.corpus_status.unwrap().state, CorpusState::Active);
}

#[tokio::test]
async fn test_delete_corpus_resolves_to_empty() {
    let server = MockServer::start().await;
    let operation_name = "projects/p/locations/l/ragCorpora/c/operations/op2";
    Mock::given(method("DELETE"))
        .and(path("/v1/projects/p/locations/l/ragCorpora/c"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"name": operation_name, "done": false})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/v1/{operation_name}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": operation_name,
            "done": true,
            "response": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server.uri());
    let request = DeleteRagCorpusRequest {
        name: "projects/p/locations/l/ragCorpora/c".to_string(),
        force: false,
    };

    let handle = client
        .delete_rag_corpus(request, CallOptions::new())
        .await
        .unwrap();
    let empty: Empty = handle.wait(None).await.unwrap();

    assert_eq!(empty, Empty::default());
}

#[tokio::test]
async fn test_failed_import_surfaces_the_operation_error() {
    let server = MockServer::start().await;
    let operation_name = "projects/p/locations/l/ragCorpora/c/operations/op3";
    Mock::given(method("POST"))
        .and(path("/v1/projects/p/locations/l/ragCorpora/c/ragFiles:import"))
        .and(body_json(json!({
            "importRagFilesConfig": {
                "gcsSource": {"uris": ["gs://bucket/docs/"]},
                "ragFileTransformationConfig": {
                    "ragFileChunkingConfig": {
                        "fixedLengthChunking": {"chunkSize": 512, "chunkOverlap": 64}
                    }
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": operation_name,
            "done": true,
            "error": {"code": 7, "message": "bucket is not readable"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server.uri());
    let request = ImportRagFilesRequest {
        parent: "projects/p/locations/l/ragCorpora/c".to_string(),
        import_rag_files_config: Some(
            ImportRagFilesConfig::from_gcs(["gs://bucket/docs/"]).with_chunking(512, 64),
        ),
    };

    let handle = client
        .import_rag_files(request, CallOptions::new())
        .await
        .unwrap();
    assert!(handle.done());

    let err = handle.wait(None).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::PermissionDenied);
    assert_eq!(err.message(), "bucket is not readable");
    assert_eq!(err.rpc(), Some(operation_name));
}

#[tokio::test]
async fn test_import_response_counts_decode() {
    let server = MockServer::start().await;
    let operation_name = "projects/p/locations/l/ragCorpora/c/operations/op4";
    Mock::given(method("GET"))
        .and(path(format!("/v1/{operation_name}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": operation_name,
            "done": true,
            "metadata": {
                "@type": "type.googleapis.com/google.cloud.aiplatform.v1.ImportRagFilesOperationMetadata",
                "ragCorpusId": "42",
                "progressPercentage": 100
            },
            "response": {
                "@type": "type.googleapis.com/google.cloud.aiplatform.v1.ImportRagFilesResponse",
                "importedRagFilesCount": "3",
                "skippedRagFilesCount": "1"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server.uri());
    let operation = client.operations().get(operation_name).await.unwrap();
    let handle: OperationHandle<ImportRagFilesResponse, ImportRagFilesOperationMetadata> =
        client.transport().operation_handle(operation);

    let metadata = handle.metadata().unwrap().unwrap();
    assert_eq!(metadata.rag_corpus_id, 42);
    assert_eq!(metadata.progress_percentage, 100);

    let response = handle.result().unwrap().unwrap();
    assert_eq!(response.imported_rag_files_count, 3);
    assert_eq!(response.skipped_rag_files_count, 1);
    assert_eq!(response.failed_rag_files_count, 0);
}

#[tokio::test]
async fn test_pre_hook_rewrites_the_target() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/projects/p/locations/l/ragCorpora/b"))
        .and(header("x-redirected", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "projects/p/locations/l/ragCorpora/b"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let interceptor = Arc::new(Redirect {
        target: "projects/p/locations/l/ragCorpora/b".to_string(),
        ..Default::default()
    });
    let client: VertexRagDataServiceRestTransport = VertexRagDataServiceRestTransport::builder()
        .config(config(&server.uri()))
        .credentials(Arc::new(StaticToken::new(TOKEN)))
        .interceptor(interceptor.clone())
        .build()
        .unwrap()
        .into();

    let corpus = client
        .get_rag_corpus(
            GetRagCorpusRequest {
                name: "projects/p/locations/l/ragCorpora/a".to_string(),
            },
            CallOptions::new(),
        )
        .await
        .unwrap();

    assert_eq!(corpus.name, "projects/p/locations/l/ragCorpora/b");
    assert_eq!(
        *interceptor.events.lock().unwrap(),
        vec![
            "pre:projects/p/locations/l/ragCorpora/a",
            "post:projects/p/locations/l/ragCorpora/b"
        ]
    );
}

#[tokio::test]
async fn test_failed_create_skips_post_hooks() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/projects/p/locations/l/ragCorpora"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": 400,
                "message": "display_name is required",
                "status": "INVALID_ARGUMENT"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let interceptor = Arc::new(Redirect::default());
    let client: VertexRagDataServiceRestTransport = VertexRagDataServiceRestTransport::builder()
        .config(config(&server.uri()))
        .credentials(Arc::new(StaticToken::new(TOKEN)))
        .interceptor(interceptor.clone())
        .build()
        .unwrap()
        .into();

    let err = client
        .create_rag_corpus(
            CreateRagCorpusRequest {
                parent: "projects/p/locations/l".to_string(),
                rag_corpus: None,
            },
            CallOptions::new(),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.http_status(), Some(400));
    assert_eq!(err.rpc(), Some("CreateRagCorpus"));
    assert!(interceptor.events.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_files_sends_paging_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/projects/p/locations/l/ragCorpora/c/ragFiles"))
        .and(query_param("pageSize", "2"))
        .and(query_param("pageToken", "t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ragFiles": [
                {
                    "name": "projects/p/locations/l/ragCorpora/c/ragFiles/f1",
                    "gcsSource": {"uris": ["gs://b/f1.pdf"]},
                    "fileStatus": {"state": "ACTIVE"}
                },
                {"name": "projects/p/locations/l/ragCorpora/c/ragFiles/f2"}
            ],
            "nextPageToken": "t2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server.uri());
    let page = client
        .list_rag_files(
            ListRagFilesRequest {
                parent: "projects/p/locations/l/ragCorpora/c".to_string(),
                page_size: 2,
                page_token: "t1".to_string(),
            },
            CallOptions::new(),
        )
        .await
        .unwrap();

    assert_eq!(page.rag_files.len(), 2);
    assert_eq!(page.next_page_token, "t2");
    assert_eq!(
        page.rag_files[0].rag_file_source,
        Some(RagFileSource::GcsSource(GcsSource {
            uris: vec!["gs://b/f1.pdf".to_string()]
        }))
    );
    assert_eq!(
        page.rag_files[0].file_status.as_ref().unwrap().state,
        FileState::Active
    );
}

#[tokio::test]
async fn test_operation_wait_respects_its_deadline() {
    let server = MockServer::start().await;
    let operation_name = "projects/p/locations/l/ragCorpora/c/ragFiles/f/operations/op5";
    Mock::given(method("GET"))
        .and(path(format!("/v1/{operation_name}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": operation_name})))
        .mount(&server)
        .await;

    let client = client(&server.uri());
    let operation = client.operations().get(operation_name).await.unwrap();
    let handle: OperationHandle<Empty> = client.transport().operation_handle(operation);

    let policy = client
        .operations()
        .polling()
        .with_timeout(Duration::from_millis(100));
    let err = handle.wait(Some(policy)).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DeadlineExceeded);
}

#[tokio::test]
async fn test_concurrent_gets_share_one_transport() {
    let server = MockServer::start().await;
    for i in 0..6 {
        let name = format!("projects/p/locations/l/ragCorpora/c{i}");
        Mock::given(method("GET"))
            .and(path(format!("/v1/{name}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_millis(20))
                    .set_body_json(json!({"name": name, "displayName": format!("corpus {i}")})),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client(&server.uri());
    let calls = (0..6).map(|i| {
        let client = client.clone();
        async move {
            client
                .get_rag_corpus(
                    GetRagCorpusRequest {
                        name: format!("projects/p/locations/l/ragCorpora/c{i}"),
                    },
                    CallOptions::new(),
                )
                .await
        }
    });

    let corpora = join_all(calls).await;

    for (i, corpus) in corpora.into_iter().enumerate() {
        assert_eq!(corpus.unwrap().display_name, format!("corpus {i}"));
    }
}

#[tokio::test]
async fn test_closed_client_rejects_calls() {
    let server = MockServer::start().await;
    let client = client(&server.uri());
    let clone = client.clone();

    client.close();

    assert!(clone.is_closed());
    let err = clone
        .get_rag_file(
            GetRagFileRequest {
                name: "projects/p/locations/l/ragCorpora/c/ragFiles/f".to_string(),
            },
            CallOptions::new(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TransportClosed);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_polling_policy_defaults_come_from_config() {
    let server = MockServer::start().await;
    let client = client(&server.uri());

    assert_eq!(
        *client.operations().polling(),
        PollingPolicy::default().with_backoff(support::fast_backoff())
    );
}
