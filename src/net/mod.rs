//! Request descriptors and the seams to the transport layer
//!
//! Nothing in this module opens a connection. An [`ApiRequest`] describes one
//! API call (method, URL, parameters) and knows how to parse the response body;
//! a caller-provided [`Session`] executes it. [`to_http_request`] turns a
//! descriptor into an [`http::Request`] for transports built on the `http`
//! types.
//!
//! # Architecture
//!
//! - [`hosts`] - Host resolution ([`HostsProvider`], [`DefaultHostsProvider`])
//! - [`session`] - The authorized executor seam ([`Session`])
//! - [`Parameters`] / [`PostRequest`] - Parameter bookkeeping shared by requests
//!
//! # Examples
//!
//! ```
//! use yandex_money_api::methods::process_payment;
//! use yandex_money_api::net::{to_http_request, DefaultHostsProvider};
//!
//! # fn example() -> yandex_money_api::Result<()> {
//! let request = process_payment::Request::new("1234567")?;
//! let http_request = to_http_request(&request, &DefaultHostsProvider::sandbox(), Some("token"))?;
//!
//! assert_eq!(http_request.uri(), "https://demomoney.yandex.ru/api/process-payment");
//! assert_eq!(http_request.body(), "request_id=1234567");
//! # Ok(())
//! # }
//! ```

use crate::adapters::{JsonAdapter, TypeAdapter};
use crate::Result;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use url::form_urlencoded;
use url::Url;

pub mod hosts;
pub mod session;


pub use hosts::{DefaultHostsProvider, HostsProvider};
pub use session::Session;

/// Content type of form-encoded request bodies
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A single API call: where it goes, what it carries, and how to read the answer
pub trait ApiRequest {
    /// Model the response body is parsed into
    type Response;

    /// HTTP method of the call
    fn method(&self) -> Method;

    /// Absolute URL of the call
    fn request_url(&self, hosts: &dyn HostsProvider) -> String;

    /// Parameters sent with the call
    fn parameters(&self) -> &Parameters;

    /// Parse the response body
    fn parse_response(&self, body: &str) -> Result<Self::Response>;
}

/// Ordered request parameters; a name appears at most once
///
/// Absent optional values are never stored, so the encoded payload carries no
/// empty placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    entries: Vec<(String, String)>,
}

impl Parameters {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value under the same name
    pub fn set(&mut self, name: &str, value: impl Display) {
        let value = value.to_string();
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    /// Set a parameter when a value is present
    pub fn set_opt(&mut self, name: &str, value: Option<impl Display>) {
        if let Some(value) = value {
            self.set(name, value);
        }
    }

    /// Value of a parameter
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether a parameter is set
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no parameter is set
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Encode as `application/x-www-form-urlencoded`
    pub fn to_form_body(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

/// Parameter holder and response adapter shared by POST requests
///
/// Concrete requests embed one and expose it through [`ApiRequest`].
#[derive(Debug, Clone)]
pub struct PostRequest<T> {
    parameters: Parameters,
    adapter: JsonAdapter<T>,
}

impl<T> PostRequest<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Create a request parsing responses with `adapter`
    pub fn new(adapter: JsonAdapter<T>) -> Self {
        Self {
            parameters: Parameters::new(),
            adapter,
        }
    }

    /// Set a parameter
    pub fn add_parameter(&mut self, name: &str, value: impl Display) {
        self.parameters.set(name, value);
    }

    /// Set a parameter when a value is present
    pub fn add_optional_parameter(&mut self, name: &str, value: Option<impl Display>) {
        self.parameters.set_opt(name, value);
    }

    /// Parameters collected so far
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Parse a response body with the request's adapter
    pub fn parse_response(&self, body: &str) -> Result<T> {
        self.adapter.from_json(body)
    }
}

/// Build an [`http::Request`] for `request`
///
/// POST parameters travel form-encoded in the body; GET parameters are appended
/// to the query string. An access token, when given, is sent as a bearer token.
pub fn to_http_request<R>(
    request: &R,
    hosts: &dyn HostsProvider,
    access_token: Option<&str>,
) -> Result<http::Request<String>>
where
    R: ApiRequest + ?Sized,
{
    let method = request.method();
    let mut url = Url::parse(&request.request_url(hosts))?;

    let body = if method == Method::GET {
        if !request.parameters().is_empty() {
            url.query_pairs_mut().extend_pairs(request.parameters().iter());
        }
        String::new()
    } else {
        request.parameters().to_form_body()
    };

    tracing::debug!("Prepared {} {} ({} parameters)", method, url, request.parameters().len());

    let mut builder = http::Request::builder()
        .method(method.clone())
        .uri(url.as_str());

    if method != Method::GET {
        builder = builder.header(CONTENT_TYPE, FORM_CONTENT_TYPE);
    }
    if let Some(token) = access_token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
    }

    Ok(builder.body(body)?)
}
