//! Incoming HTTP request type.

use std::collections::HashMap;

use bytes::Bytes;
use http::HeaderMap;

use crate::error::Error;
use crate::locale::{LocaleConfig, RequestView};
use crate::method::Method;

/// An incoming HTTP request with its body fully read.
#[derive(Debug)]
pub struct Request {
    method: Method,
    path: String,
    query: Option<String>,
    headers: HeaderMap,
    body: Bytes,
    params: HashMap<String, String>,
}

impl Request {
    /// Converts an `http` request whose body has already been collected.
    ///
    /// Fails with [`Error::MethodNotAllowed`] for methods lingo does not route.
    ///
    /// ```rust
    /// use bytes::Bytes;
    /// use lingo::Request;
    ///
    /// let req = http::Request::builder()
    ///     .uri("/dashboard?page=2")
    ///     .header("accept-language", "de")
    ///     .body(Bytes::new())
    ///     .unwrap();
    /// let req = Request::from_http(req).unwrap();
    /// assert_eq!(req.path(), "/dashboard");
    /// assert_eq!(req.query(), Some("page=2"));
    /// ```
    pub fn from_http(req: http::Request<Bytes>) -> Result<Self, Error> {
        let (parts, body) = req.into_parts();
        let method = Method::try_from(&parts.method)
            .map_err(|()| Error::MethodNotAllowed(parts.method.to_string()))?;

        Ok(Self {
            method,
            path: parts.uri.path().to_owned(),
            query: parts.uri.query().map(str::to_owned),
            headers: parts.headers,
            body,
            params: HashMap::new(),
        })
    }

    pub(crate) fn set_params(&mut self, params: HashMap<String, String>) {
        self.params = params;
    }

    pub fn method(&self) -> Method { self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn query(&self) -> Option<&str> { self.query.as_deref() }
    pub fn headers(&self) -> &HeaderMap { &self.headers }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Case-insensitive header lookup. Non-ASCII values read as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/{lang}/invoices/{id}`, `req.param("id")` on
    /// `/de/invoices/42` returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// The configured locale this request's path is scoped to.
    pub fn locale<'c>(&self, config: &'c LocaleConfig) -> Option<&'c str> {
        config.locale_of(&self.path)
    }

    /// The projection the locale resolver works on.
    pub fn view(&self) -> RequestView<'_> {
        RequestView::new(&self.path, &self.headers)
    }
}
