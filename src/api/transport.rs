use std::{
    error::Error as StdError,
    fmt::{Display, Formatter},
    time::Duration,
};

use http::StatusCode;
use ureq::Agent;

/// Outgoing `GET` request.
#[derive(Debug)]
pub struct HttpRequest<'a> {
    /// Full URL including the encoded query string.
    pub url: &'a str,

    pub headers: Vec<(&'static str, &'a str)>,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }
}

/// The request never produced a usable response: connection failure, timeout,
/// or an HTTP error status reported by the underlying stack.
#[derive(Debug)]
pub struct TransportError(Box<dyn StdError + Send + Sync + 'static>);

impl TransportError {
    pub fn new(source: impl Into<Box<dyn StdError + Send + Sync + 'static>>) -> Self {
        Self(source.into())
    }
}

impl Display for TransportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "transport failure: {}", self.0)
    }
}

impl StdError for TransportError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.0)
    }
}

/// Anything that can perform a `GET`.
pub trait Transport {
    fn get(&self, request: &HttpRequest<'_>) -> Result<HttpResponse, TransportError>;
}

/// Blocking [`ureq`] transport.
///
/// `4xx` and `5xx` responses come back as [`TransportError`].
pub struct UreqTransport(Agent);

impl Default for UreqTransport {
    fn default() -> Self {
        Self(Agent::config_builder().http_status_as_error(true).build().into())
    }
}

impl Transport for UreqTransport {
    fn get(&self, request: &HttpRequest<'_>) -> Result<HttpResponse, TransportError> {
        let mut builder = self.0.get(request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, *value);
        }
        let mut response = builder
            .config()
            .timeout_global(Some(request.timeout))
            .build()
            .call()
            .map_err(TransportError::new)?;
        let body = response.body_mut().read_to_string().map_err(TransportError::new)?;
        Ok(HttpResponse { status: response.status(), body })
    }
}
