//! Radix-tree request router with a middleware chain in front.
//!
//! One tree per HTTP method, O(path-length) lookup. Middleware registered with
//! [`Router::layer`] runs before lookup, so a locale redirect never touches the
//! routing table.

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;
use tracing::{Instrument, info_span};

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::middleware::{BoxedMiddleware, Flow, Middleware};
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// The application router.
///
/// Build it once at startup and pass it to [`Server::serve`](crate::Server::serve).
/// Every builder method returns `self` so registrations chain.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
    middleware: Vec<BoxedMiddleware>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new(), middleware: Vec::new() }
    }

    /// Register a handler for a method + path pair.
    ///
    /// Path parameters use `{name}` syntax; `req.param("name")` retrieves them:
    ///
    /// ```rust
    /// # use lingo::{Method, Request, Response, Router};
    /// # async fn invoice(_: Request) -> Response { Response::text("") }
    /// # async fn create_invoice(_: Request) -> Response { Response::text("") }
    /// Router::new()
    ///     .on(Method::Get,  "/{lang}/invoices/{id}", invoice)
    ///     .on(Method::Post, "/{lang}/invoices",      create_invoice);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or conflicts with one already
    /// registered for `method`. Routes are fixed at startup, so this is a
    /// programming error.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Get, path, handler)
    }

    pub fn post(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Post, path, handler)
    }

    /// Append a middleware layer. Layers run in the order they were added.
    pub fn layer(mut self, middleware: impl Middleware) -> Self {
        self.middleware.push(Arc::new(middleware));
        self
    }

    /// Runs the middleware chain, then the matching handler.
    ///
    /// Unmatched paths get `404 Not Found`.
    pub async fn handle(&self, mut req: Request) -> Response {
        let span = info_span!("request", method = %req.method(), path = req.path());

        let answered = span.in_scope(|| {
            self.middleware.iter().find_map(|layer| match layer.on_request(&req) {
                Flow::Respond(res) => {
                    tracing::debug!(status = res.status_code().code(), "answered by middleware");
                    Some(res)
                }
                Flow::Continue => None,
            })
        });
        if let Some(res) = answered {
            return res;
        }

        match self.lookup(req.method(), req.path()) {
            Some((handler, params)) => {
                req.set_params(params);
                handler.call(req).instrument(span).await
            }
            None => Response::status(Status::NotFound),
        }
    }

    fn lookup(
        &self,
        method: Method,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let tree = self.routes.get(&method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}
