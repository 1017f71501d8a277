//! # Operations Client
//!
//! Issues `Get`, `List`, `Cancel`, `Delete` and `Wait` calls for operation names, picking
//! the URL from the transport's [`OperationRoutes`].
use super::{
    ListOperationsRequest, ListOperationsResponse, Operation, OperationRoutes, OperationVerb,
    PollingPolicy,
};
use crate::{
    error::{Error, ErrorKind},
    http::{HttpRequest, HttpResponse, RetryPolicy, Session},
    message::{codec, json},
};
use futures_util::{Stream, TryStreamExt, stream};
use std::{sync::Arc, time::Duration};
use tokio::time::Instant;
use url::Url;

#[derive(Debug, Clone)]
pub struct OperationsClient {
    session: Arc<Session>,
    base_url: Url,
    routes: &'static OperationRoutes,
    retry: RetryPolicy,
    polling: PollingPolicy,
}

impl OperationsClient {
    pub fn new(
        session: Arc<Session>,
        base_url: Url,
        routes: &'static OperationRoutes,
        retry: RetryPolicy,
        polling: PollingPolicy,
    ) -> Self {
        Self {
            session,
            base_url,
            routes,
            retry,
            polling,
        }
    }

    pub fn routes(&self) -> &'static OperationRoutes {
        self.routes
    }

    pub fn polling(&self) -> &PollingPolicy {
        &self.polling
    }

    /// Fetches the current state of an operation.
    pub async fn get(&self, name: &str) -> Result<Operation, Error> {
        let response = self.call(OperationVerb::Get, name, Vec::new(), None).await?;
        decode(OperationVerb::Get, &response)
    }

    /// Lists the operations of a parent resource, following page tokens lazily.
    pub fn list(
        &self,
        request: ListOperationsRequest,
    ) -> impl Stream<Item = Result<Operation, Error>> + Send + 'static {
        let client = self.clone();
        let first = request.page_token.clone().unwrap_or_default();

        stream::try_unfold(Some(first), move |token| {
            let client = client.clone();
            let request = request.clone();
            async move {
                let Some(token) = token else {
                    return Ok::<_, Error>(None);
                };
                let page = client.list_page(&request, &token).await?;
                let next = (!page.next_page_token.is_empty()).then_some(page.next_page_token);
                let operations = stream::iter(page.operations.into_iter().map(Ok::<_, Error>));
                Ok::<_, Error>(Some((operations, next)))
            }
        })
        .try_flatten()
    }

    async fn list_page(
        &self,
        request: &ListOperationsRequest,
        token: &str,
    ) -> Result<ListOperationsResponse, Error> {
        let query = request.query(Some(token));
        tracing::debug!(name = %request.name, page_token = token, "Listing operations");
        let response = self
            .call(OperationVerb::List, &request.name, query, None)
            .await?;
        decode(OperationVerb::List, &response)
    }

    /// Asks the server to stop the operation. Cancellation is best-effort.
    pub async fn cancel(&self, name: &str) -> Result<(), Error> {
        self.call(OperationVerb::Cancel, name, Vec::new(), Some(b"{}".to_vec()))
            .await
            .map(|_| ())
    }

    /// Deletes the operation record.
    pub async fn delete(&self, name: &str) -> Result<(), Error> {
        self.call(OperationVerb::Delete, name, Vec::new(), None)
            .await
            .map(|_| ())
    }

    /// Blocks until the operation is done, polling per `policy` (or the client default).
    ///
    /// An elapsed [`PollingPolicy::timeout`] is [`ErrorKind::DeadlineExceeded`], never a
    /// partial result.
    pub async fn wait(&self, name: &str, policy: Option<PollingPolicy>) -> Result<Operation, Error> {
        let policy = policy.unwrap_or(self.polling);
        let deadline = policy.timeout.map(|timeout| Instant::now() + timeout);

        let polls = self.poll_until_done(name, &policy, deadline);
        match policy.timeout {
            Some(timeout) => tokio::time::timeout(timeout, polls)
                .await
                .map_err(|_| Error::deadline_exceeded(timeout).with_rpc(OperationVerb::Wait.rpc()))?,
            None => polls.await,
        }
    }

    async fn poll_until_done(
        &self,
        name: &str,
        policy: &PollingPolicy,
        deadline: Option<Instant>,
    ) -> Result<Operation, Error> {
        let mut delays = policy.backoff.delays();
        let mut server_wait = policy.prefer_server_wait;

        loop {
            let operation = if server_wait {
                let hold = deadline
                    .map(|deadline| deadline.saturating_duration_since(Instant::now()))
                    .unwrap_or(policy.backoff.max)
                    .min(policy.backoff.max);
                match self.wait_on_server(name, hold).await {
                    Ok(operation) => operation,
                    Err(e) if is_unsupported(&e) => {
                        tracing::debug!(error = %e, "Server-side wait unavailable, polling instead");
                        server_wait = false;
                        self.get(name).await?
                    }
                    Err(e) => return Err(e),
                }
            } else {
                self.get(name).await?
            };

            if operation.done {
                return Ok(operation);
            }

            let delay = delays.next().unwrap_or(policy.backoff.max);
            tracing::debug!(name, ?delay, "Operation not done yet");
            tokio::time::sleep(delay).await;
        }
    }

    async fn wait_on_server(&self, name: &str, hold: Duration) -> Result<Operation, Error> {
        let timeout = json::duration::format(&hold).map_err(|e| {
            Error::new(ErrorKind::InvalidArgument, format!("Invalid wait timeout: {e}"))
                .with_rpc(OperationVerb::Wait.rpc())
        })?;
        let query = vec![("timeout".to_string(), timeout)];
        let response = self
            .call(OperationVerb::Wait, name, query, Some(b"{}".to_vec()))
            .await?;
        decode(OperationVerb::Wait, &response)
    }

    async fn call(
        &self,
        verb: OperationVerb,
        name: &str,
        query: Vec<(String, String)>,
        body: Option<Vec<u8>>,
    ) -> Result<HttpResponse, Error> {
        let segments = self.routes.path(verb, name)?;

        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(&segments);
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(&query);
        }

        let request = HttpRequest {
            method: verb.http_verb().as_method(),
            url,
            metadata: Vec::new(),
            body,
        };
        self.session
            .execute(&request, &self.retry, verb.is_idempotent(), None)
            .await
            .map_err(|e| e.with_rpc(verb.rpc()))
    }
}

fn decode<M: crate::Message>(verb: OperationVerb, response: &HttpResponse) -> Result<M, Error> {
    codec::decode(&response.body).map_err(|e| e.with_rpc(verb.rpc()))
}

fn is_unsupported(error: &Error) -> bool {
    error.kind() == ErrorKind::UnroutableOperation || error.http_status() == Some(501)
}
