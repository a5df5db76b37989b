//! Request and response types exchanged with transports.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::context::Context;
use crate::errors::{Result, TransportError};

/// An outgoing HTTP request and the execution context it was issued under.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
    context: Context,
}

impl Request {
    /// Creates a request under the background context.
    #[must_use]
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
            context: Context::background(),
        }
    }

    /// Creates a request from a URL string.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUrl` if `url` does not parse.
    pub fn parse(method: Method, url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(|e| TransportError::InvalidUrl(format!("{url}: {e}")))?;
        Ok(Self::new(method, url))
    }

    /// Sets the execution context.
    #[must_use]
    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Returns the method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the URL.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the headers for modification.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Returns the body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Returns the execution context.
    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Splits the request into its parts.
    #[must_use]
    pub fn into_parts(self) -> (Method, Url, HeaderMap, Option<Vec<u8>>, Context) {
        (self.method, self.url, self.headers, self.body, self.context)
    }
}

/// A buffered HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl Response {
    /// Creates an empty response with the given status.
    #[must_use]
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }

    /// Creates a response from its parts.
    #[must_use]
    pub fn from_parts(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns the status code.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the canonical reason phrase, e.g. "I'm a teapot".
    #[must_use]
    pub fn reason(&self) -> Option<&'static str> {
        self.status.canonical_reason()
    }

    /// Whether the status is 2xx.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the body bytes.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Consumes the response and returns the body.
    #[must_use]
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// Decodes the body as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns `Body` if the body is not valid UTF-8.
    pub fn text(&self) -> Result<String> {
        String::from_utf8(self.body.clone()).map_err(|e| TransportError::Body(e.to_string()))
    }

    /// Deserializes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `Json` if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::CONTENT_TYPE;

    #[test]
    fn test_request_parse() {
        let request = Request::parse(Method::GET, "http://localhost/pouch/00/basic").unwrap();
        assert_eq!(*request.method(), Method::GET);
        assert_eq!(request.url().path(), "/pouch/00/basic");
        assert!(request.body().is_none());
        assert!(request.context().is_background());
    }

    #[test]
    fn test_request_parse_invalid_url() {
        let result = Request::parse(Method::GET, "not a url");
        match result {
            Err(TransportError::InvalidUrl(msg)) => assert!(msg.contains("not a url")),
            other => panic!("Expected InvalidUrl error, got {other:?}"),
        }
    }

    #[test]
    fn test_request_builder() {
        let request = Request::parse(Method::POST, "http://localhost/items")
            .unwrap()
            .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .with_body(r#"{"a":1}"#);

        assert_eq!(
            request.headers().get(CONTENT_TYPE),
            Some(&HeaderValue::from_static("application/json"))
        );
        assert_eq!(request.body(), Some(br#"{"a":1}"#.as_slice()));
    }

    #[test]
    fn test_response_reason() {
        let response = Response::new(StatusCode::IM_A_TEAPOT);
        assert_eq!(response.status().as_u16(), 418);
        assert_eq!(response.reason(), Some("I'm a teapot"));
        assert!(!response.is_success());
    }

    #[test]
    fn test_response_text_and_json() {
        let response = Response::new(StatusCode::OK).with_body(r#"{"id":42}"#);
        assert_eq!(response.text().unwrap(), r#"{"id":42}"#);

        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["id"], 42);
    }

    #[test]
    fn test_response_text_invalid_utf8() {
        let response = Response::new(StatusCode::OK).with_body(vec![0xff, 0xfe]);
        assert!(matches!(response.text(), Err(TransportError::Body(_))));
    }
}
