use aiplatform_rest_core::routing::{HttpRule, Route};

pub static CREATE_RAG_CORPUS: Route = Route::new(
    "CreateRagCorpus",
    &[HttpRule::post(
        "/{parent=projects/*/locations/*}/ragCorpora",
        "rag_corpus",
    )],
);

pub static UPDATE_RAG_CORPUS: Route = Route::new(
    "UpdateRagCorpus",
    &[HttpRule::patch(
        "/{rag_corpus.name=projects/*/locations/*/ragCorpora/*}",
        "rag_corpus",
    )],
);

pub static GET_RAG_CORPUS: Route = Route::new(
    "GetRagCorpus",
    &[HttpRule::get("/{name=projects/*/locations/*/ragCorpora/*}")],
);

pub static LIST_RAG_CORPORA: Route = Route::new(
    "ListRagCorpora",
    &[HttpRule::get("/{parent=projects/*/locations/*}/ragCorpora")],
);

pub static DELETE_RAG_CORPUS: Route = Route::new(
    "DeleteRagCorpus",
    &[HttpRule::delete("/{name=projects/*/locations/*/ragCorpora/*}")],
);

pub static IMPORT_RAG_FILES: Route = Route::new(
    "ImportRagFiles",
    &[HttpRule::post(
        "/{parent=projects/*/locations/*/ragCorpora/*}/ragFiles:import",
        "*",
    )],
);

pub static GET_RAG_FILE: Route = Route::new(
    "GetRagFile",
    &[HttpRule::get(
        "/{name=projects/*/locations/*/ragCorpora/*/ragFiles/*}",
    )],
);

pub static LIST_RAG_FILES: Route = Route::new(
    "ListRagFiles",
    &[HttpRule::get(
        "/{parent=projects/*/locations/*/ragCorpora/*}/ragFiles",
    )],
);

pub static DELETE_RAG_FILE: Route = Route::new(
    "DeleteRagFile",
    &[HttpRule::delete(
        "/{name=projects/*/locations/*/ragCorpora/*/ragFiles/*}",
    )],
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rag_data::types::*;
    use aiplatform_rest_core::{ErrorKind, routing::{Verb, transcode}};
    use std::collections::BTreeSet;

    #[test]
    fn test_create_corpus_sends_the_corpus_as_body() {
        let request = CreateRagCorpusRequest {
            parent: "projects/p/locations/l".to_string(),
            rag_corpus: Some(RagCorpus::default().with_display_name("d")),
        };

        let transcoded = transcode(&CREATE_RAG_CORPUS, &request).unwrap();

        assert_eq!(transcoded.verb, Verb::Post);
        assert_eq!(transcoded.path(), "/projects/p/locations/l/ragCorpora");
        assert!(transcoded.query.is_empty());
        assert_eq!(transcoded.body_bytes().unwrap(), br#"{"displayName":"d"}"#);
    }

    #[test]
    fn test_update_binds_the_nested_name() {
        let request = UpdateRagCorpusRequest {
            rag_corpus: Some(RagCorpus {
                name: "projects/p/locations/l/ragCorpora/c".to_string(),
                description: "new".to_string(),
                ..Default::default()
            }),
        };

        let transcoded = transcode(&UPDATE_RAG_CORPUS, &request).unwrap();

        assert_eq!(transcoded.verb, Verb::Patch);
        assert_eq!(transcoded.path(), "/projects/p/locations/l/ragCorpora/c");
        assert!(!UPDATE_RAG_CORPUS.is_idempotent());
    }

    #[test]
    fn test_list_moves_paging_fields_to_the_query() {
        let request = ListRagFilesRequest {
            parent: "projects/p/locations/l/ragCorpora/c".to_string(),
            page_size: 50,
            page_token: "next".to_string(),
        };

        let transcoded = transcode(&LIST_RAG_FILES, &request).unwrap();

        assert_eq!(
            transcoded.path(),
            "/projects/p/locations/l/ragCorpora/c/ragFiles"
        );
        assert_eq!(
            transcoded.query,
            vec![
                ("pageSize".to_string(), "50".to_string()),
                ("pageToken".to_string(), "next".to_string()),
            ]
        );
        assert!(transcoded.body_bytes().is_none());
    }

    #[test]
    fn test_delete_corpus_passes_force_as_query() {
        let request = DeleteRagCorpusRequest {
            name: "projects/p/locations/l/ragCorpora/c".to_string(),
            force: true,
        };

        let transcoded = transcode(&DELETE_RAG_CORPUS, &request).unwrap();

        assert_eq!(transcoded.verb, Verb::Delete);
        assert_eq!(
            transcoded.query,
            vec![("force".to_string(), "true".to_string())]
        );
    }

    #[test]
    fn test_import_body_star_takes_every_unbound_field() {
        let request = ImportRagFilesRequest {
            parent: "projects/p/locations/l/ragCorpora/c".to_string(),
            import_rag_files_config: Some(ImportRagFilesConfig::from_gcs(["gs://b/x.pdf"])),
        };

        let transcoded = transcode(&IMPORT_RAG_FILES, &request).unwrap();

        assert_eq!(
            transcoded.path(),
            "/projects/p/locations/l/ragCorpora/c/ragFiles:import"
        );
        assert_eq!(
            String::from_utf8(transcoded.body_bytes().unwrap()).unwrap(),
            r#"{"importRagFilesConfig":{"gcsSource":{"uris":["gs://b/x.pdf"]}}}"#
        );

        let partition = &transcoded.partition;
        let path: BTreeSet<_> = partition.path.iter().collect();
        let body: BTreeSet<_> = partition.body.iter().collect();
        assert!(path.is_disjoint(&body));
        assert!(partition.query.is_empty());
    }

    #[test]
    fn test_name_outside_the_collection_matches_no_binding() {
        let request = GetRagFileRequest {
            name: "projects/p/locations/l/ragCorpora/c".to_string(),
        };

        let err = transcode(&GET_RAG_FILE, &request).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NoBindingMatched);
    }
}
