use super::{Operation, OperationResult, OperationsClient, PollingPolicy};
use crate::{
    error::Error,
    message::{Message, wkt::Empty},
};
use std::{fmt, marker::PhantomData};

/// An [`Operation`] bound to the message types of its result (`R`) and metadata (`M`).
///
/// Returned by mutating RPCs. The handle owns a snapshot of the operation; [`refresh`]
/// replaces it with the server's current state and [`wait`] drives it to completion.
///
/// [`refresh`]: OperationHandle::refresh
/// [`wait`]: OperationHandle::wait
pub struct OperationHandle<R, M = Empty> {
    operation: Operation,
    client: OperationsClient,
    _types: PhantomData<fn() -> (R, M)>,
}

impl<R: Message, M: Message> OperationHandle<R, M> {
    pub fn new(operation: Operation, client: OperationsClient) -> Self {
        Self {
            operation,
            client,
            _types: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        &self.operation.name
    }

    pub fn done(&self) -> bool {
        self.operation.done
    }

    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    pub fn into_operation(self) -> Operation {
        self.operation
    }

    /// Type url of the declared result message.
    pub fn result_type() -> String {
        R::descriptor().type_url()
    }

    /// Type url of the declared metadata message.
    pub fn metadata_type() -> String {
        M::descriptor().type_url()
    }

    /// The progress metadata of the last snapshot, if the server attached any.
    pub fn metadata(&self) -> Result<Option<M>, Error> {
        self.operation
            .metadata
            .as_ref()
            .map(|any| any.unpack::<M>())
            .transpose()
    }

    /// The outcome of a finished operation; `None` while it is still running.
    ///
    /// A finished operation without a response (e.g. a delete) yields `R::default()`.
    pub fn result(&self) -> Option<Result<R, Error>> {
        if !self.operation.done {
            return None;
        }
        let outcome = match &self.operation.result {
            Some(OperationResult::Error(status)) => {
                Err(Error::from_status(status).with_rpc(self.operation.name.clone()))
            }
            Some(OperationResult::Response(response)) => response.unpack::<R>(),
            None => Ok(R::default()),
        };
        Some(outcome)
    }

    /// Replaces the snapshot with the server's current state.
    pub async fn refresh(&mut self) -> Result<&Operation, Error> {
        self.operation = self.client.get(&self.operation.name).await?;
        Ok(&self.operation)
    }

    /// Waits for completion and returns the decoded result.
    pub async fn wait(mut self, policy: Option<PollingPolicy>) -> Result<R, Error> {
        if !self.operation.done {
            self.operation = self.client.wait(&self.operation.name, policy).await?;
        }
        match self.result() {
            Some(outcome) => outcome,
            None => Ok(R::default()),
        }
    }

    pub async fn cancel(&self) -> Result<(), Error> {
        self.client.cancel(&self.operation.name).await
    }

    pub async fn delete(&self) -> Result<(), Error> {
        self.client.delete(&self.operation.name).await
    }
}

impl<R, M> fmt::Debug for OperationHandle<R, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationHandle")
            .field("operation", &self.operation)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ErrorKind,
        message::wkt::{Any, Status},
        operations::OperationRoutes,
        http::{AnonymousCredentials, RetryPolicy, Session, SessionSettings, TokenRequest},
    };
    use once_cell::sync::Lazy;
    use std::sync::Arc;

    static ROUTES: Lazy<OperationRoutes> =
        Lazy::new(|| OperationRoutes::new(&["projects/*/locations/*"]));

    fn client() -> OperationsClient {
        let session = Session::new(
            SessionSettings {
                user_agent: "test".to_string(),
                api_client: "test".to_string(),
                quota_project_id: None,
                pool_idle_timeout: None,
                pool_max_idle_per_host: 1,
            },
            Arc::new(AnonymousCredentials),
            TokenRequest::default(),
            None,
        );
        OperationsClient::new(
            Arc::new(session),
            url::Url::parse("http://localhost/v1/").unwrap(),
            &ROUTES,
            RetryPolicy::none(),
            PollingPolicy::default(),
        )
    }

    fn finished(result: Option<OperationResult>) -> Operation {
        Operation {
            name: "projects/p/locations/l/operations/op1".to_string(),
            metadata: None,
            done: true,
            result,
        }
    }

    #[test]
    fn test_running_operation_has_no_result() {
        let mut operation = finished(None);
        operation.done = false;
        let handle = OperationHandle::<Status>::new(operation, client());

        assert!(handle.result().is_none());
        assert_eq!(
            OperationHandle::<Status>::result_type(),
            "type.googleapis.com/google.rpc.Status"
        );
    }

    #[test]
    fn test_error_status_surfaces_as_error() {
        let status = Status {
            code: 5,
            message: "corpus missing".to_string(),
            details: Vec::new(),
        };
        let handle = OperationHandle::<Empty>::new(
            finished(Some(OperationResult::Error(status))),
            client(),
        );

        let err = handle.result().unwrap().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), "corpus missing");
    }

    #[test]
    fn test_response_unpacks_to_declared_type() {
        let status = Status {
            code: 3,
            message: "packed".to_string(),
            details: Vec::new(),
        };
        let response = Any::pack(&status).unwrap();
        let handle = OperationHandle::<Status>::new(
            finished(Some(OperationResult::Response(response))),
            client(),
        );

        assert_eq!(handle.result().unwrap().unwrap(), status);
    }

    #[test]
    fn test_done_without_response_is_default() {
        let handle = OperationHandle::<Empty>::new(finished(None), client());
        assert_eq!(handle.result().unwrap().unwrap(), Empty {});
    }
}
