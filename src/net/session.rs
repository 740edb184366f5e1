//! Authorized executor seam
//!
//! The SDK does not ship a transport. Applications implement [`Session`] on top
//! of their HTTP client of choice, usually by sending the output of
//! [`to_http_request`](super::to_http_request) and handing the response body to
//! [`ApiRequest::parse_response`].

use super::{ApiRequest, HostsProvider};
use crate::Result;
use async_trait::async_trait;

/// An authorized context able to execute API requests
#[async_trait]
pub trait Session: Send + Sync {
    /// Hosts the session talks to
    fn hosts(&self) -> &dyn HostsProvider;

    /// Whether an access token is attached to outgoing requests
    fn is_authorized(&self) -> bool;

    /// Execute a request and parse its response
    async fn execute<R>(&self, request: &R) -> Result<R::Response>
    where
        R: ApiRequest + Sync,
        R::Response: Send;
}
