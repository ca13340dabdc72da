//! Route handlers and how the router stores them.
//!
//! A localized app registers one handler per page, usually under a `{lang}`
//! segment: `/{lang}/dashboard`, `/{lang}/invoices/{id}`. Every page is a
//! different `async fn` type, so at registration each one is wrapped into an
//! [`ErasedHandler`] trait object and kept in the per-method radix tree.
//!
//! By the time a handler runs, the locale middleware has already made sure
//! the path carries a configured locale; `req.param("lang")` or
//! [`Request::locale`] reads it back.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

/// The future a page handler returns once its output is turned into a
/// [`Response`].
pub(crate) type ResponseFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

#[doc(hidden)]
pub trait ErasedHandler {
    fn call(&self, req: Request) -> ResponseFuture;
}

/// Shared across every connection task; cloned once per matched request.
#[doc(hidden)]
pub type BoxedHandler = Arc<dyn ErasedHandler + Send + Sync + 'static>;

/// Anything the router accepts as a page handler:
///
/// ```text
/// async fn dashboard(req: Request) -> impl IntoResponse
/// move |req: Request| dashboard_with(req, locales.clone())
/// ```
///
/// Sealed: implemented only through the blanket impl over `Fn(Request)`.
pub trait Handler: sealed::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler;
}

mod sealed {
    pub trait Sealed {}
}

impl<F, Fut, R> sealed::Sealed for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn into_boxed_handler(self) -> BoxedHandler {
        Arc::new(PageHandler(self))
    }
}

struct PageHandler<F>(F);

impl<F, Fut, R> ErasedHandler for PageHandler<F>
where
    F: Fn(Request) -> Fut + Send + Sync,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, req: Request) -> ResponseFuture {
        let page = (self.0)(req);
        Box::pin(async move { page.await.into_response() })
    }
}
