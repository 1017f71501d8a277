//! # Interceptor Hooks
//!
//! Every RPC is wrapped by three hooks over the transport's interceptor object `I`:
//!
//! 1. `pre(request, metadata)` runs before transcoding and may rewrite both.
//! 2. `post(response)` runs on success.
//! 3. `post_with_metadata(response, response_headers)` runs right after `post`.
//!
//! Failed calls skip both post hooks. Service crates declare one interceptor trait per
//! service with identity defaults and bind its methods into a [`Hooks`] per RPC.
//!
//! Hooks take `&I`: the interceptor is shared by concurrent calls and never mutated by
//! the dispatcher.
use crate::Metadata;
use std::fmt;

pub type PreHook<I, Req> = fn(&I, Req, Metadata) -> (Req, Metadata);
pub type PostHook<I, Res> = fn(&I, Res) -> Res;
pub type PostWithMetadataHook<I, Res> = fn(&I, Res, Metadata) -> (Res, Metadata);

pub struct Hooks<I: ?Sized, Req, Res> {
    pub pre: PreHook<I, Req>,
    pub post: PostHook<I, Res>,
    pub post_with_metadata: PostWithMetadataHook<I, Res>,
}

impl<I: ?Sized, Req, Res> Hooks<I, Req, Res> {
    pub const fn new(
        pre: PreHook<I, Req>,
        post: PostHook<I, Res>,
        post_with_metadata: PostWithMetadataHook<I, Res>,
    ) -> Self {
        Self {
            pre,
            post,
            post_with_metadata,
        }
    }

    /// Hooks that pass everything through untouched.
    pub const fn identity() -> Self {
        Self {
            pre: pass_request::<I, Req>,
            post: pass_response::<I, Res>,
            post_with_metadata: pass_response_with_metadata::<I, Res>,
        }
    }
}

fn pass_request<I: ?Sized, Req>(_: &I, request: Req, metadata: Metadata) -> (Req, Metadata) {
    (request, metadata)
}

fn pass_response<I: ?Sized, Res>(_: &I, response: Res) -> Res {
    response
}

fn pass_response_with_metadata<I: ?Sized, Res>(
    _: &I,
    response: Res,
    metadata: Metadata,
) -> (Res, Metadata) {
    (response, metadata)
}

impl<I: ?Sized, Req, Res> Clone for Hooks<I, Req, Res> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: ?Sized, Req, Res> Copy for Hooks<I, Req, Res> {}

impl<I: ?Sized, Req, Res> fmt::Debug for Hooks<I, Req, Res> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks").finish_non_exhaustive()
    }
}
