//! # RPC Dispatcher
//!
//! One [`RpcCallable`] exists per RPC, usually as a `static` in the service crate. Calling
//! it runs the full pipeline:
//!
//! 1. `pre` hook over `(request, metadata)`.
//! 2. Transcoding against the RPC's [`Route`].
//! 3. The session call, under the retry policy and deadline of the call.
//! 4. Decoding of the response body.
//! 5. `post`, then `post_with_metadata` with the response headers.
//!
//! Errors at any step are returned as they are; the post hooks only see successes.
use super::{CallOptions, RestTransport};
use crate::{
    error::Error,
    http::HttpRequest,
    interceptor::Hooks,
    message::{Message, codec},
    routing::{Route, transcode},
};
use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// The untyped identity of a callable: its RPC name and route.
pub trait Callable: fmt::Debug + Send + Sync {
    fn rpc(&self) -> &'static str;
    fn route(&self) -> &'static Route;
}

pub struct RpcCallable<I: ?Sized, Req, Res> {
    route: &'static Route,
    hooks: Hooks<I, Req, Res>,
}

impl<I: ?Sized, Req, Res> RpcCallable<I, Req, Res> {
    pub const fn new(route: &'static Route, hooks: Hooks<I, Req, Res>) -> Self {
        Self { route, hooks }
    }

    pub fn hooks(&self) -> &Hooks<I, Req, Res> {
        &self.hooks
    }
}

impl<I, Req, Res> RpcCallable<I, Req, Res>
where
    I: ?Sized + Send + Sync,
    Req: Message,
    Res: Message,
{
    pub async fn call(
        &self,
        transport: &RestTransport<I>,
        request: Req,
        options: CallOptions,
    ) -> Result<Res, Error> {
        let rpc = self.route.rpc();
        if transport.is_closed() {
            return Err(Error::transport_closed().with_rpc(rpc));
        }

        let interceptor = transport.interceptor();
        let (request, metadata) = (self.hooks.pre)(interceptor, request, options.metadata);

        let transcoded = transcode(self.route, &request)?;
        let http_request = HttpRequest {
            method: transcoded.verb.as_method(),
            url: transcoded.url(transport.base_url()),
            metadata,
            body: transcoded.body_bytes(),
        };

        tracing::debug!(
            rpc,
            verb = %transcoded.verb,
            path = %transcoded.path(),
            query = ?transcoded.query,
            "Dispatching RPC"
        );

        let retry = options.retry.unwrap_or_else(|| transport.default_retry());
        let timeout = options.timeout.or_else(|| transport.default_timeout());
        let response = transport
            .session()
            .execute(&http_request, &retry, self.route.is_idempotent(), timeout)
            .await
            .map_err(|e| e.with_rpc(rpc))?;

        let decoded: Res = codec::decode(&response.body).map_err(|e| e.with_rpc(rpc))?;
        let decoded = (self.hooks.post)(interceptor, decoded);
        let (decoded, _) = (self.hooks.post_with_metadata)(interceptor, decoded, response.metadata());
        Ok(decoded)
    }
}

impl<I: ?Sized, Req, Res> Callable for RpcCallable<I, Req, Res> {
    fn rpc(&self) -> &'static str {
        self.route.rpc()
    }

    fn route(&self) -> &'static Route {
        self.route
    }
}

impl<I: ?Sized, Req, Res> PartialEq for RpcCallable<I, Req, Res> {
    fn eq(&self, other: &Self) -> bool {
        self.route.rpc() == other.route.rpc()
    }
}

impl<I: ?Sized, Req, Res> Eq for RpcCallable<I, Req, Res> {}

impl<I: ?Sized, Req, Res> Hash for RpcCallable<I, Req, Res> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.route.rpc().hash(state);
    }
}

impl<I: ?Sized, Req, Res> fmt::Debug for RpcCallable<I, Req, Res> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcCallable")
            .field("rpc", &self.route.rpc())
            .finish_non_exhaustive()
    }
}
