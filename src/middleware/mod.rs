//! Middleware layer.
//!
//! Middleware sees every request before routing and either lets it continue
//! or answers it directly. Layers run in registration order; the first one
//! that responds short-circuits the rest and the router.
//!
//! ```rust
//! use lingo::locale::{LocaleConfig, Resolver};
//! use lingo::middleware::LocaleRedirect;
//! use lingo::{Request, Response, Router};
//!
//! async fn dashboard(_req: Request) -> Response { Response::text("dashboard") }
//!
//! let config = LocaleConfig::new(["en", "de", "ru"], "en").unwrap();
//! let app = Router::new()
//!     .get("/{lang}/dashboard", dashboard)
//!     .layer(LocaleRedirect::new(Resolver::new(config)));
//! ```

mod locale;

pub use locale::{Exclusions, LocaleRedirect};

use std::sync::Arc;

use crate::request::Request;
use crate::response::Response;

/// What a middleware decided for a request.
#[derive(Debug)]
pub enum Flow {
    /// Hand the request to the next layer, and finally the router.
    Continue,
    /// Answer now; later layers and the handler are skipped.
    Respond(Response),
}

/// A request-inspecting layer.
///
/// Synchronous on purpose: layers decide from the request alone, with no I/O.
pub trait Middleware: Send + Sync + 'static {
    fn on_request(&self, req: &Request) -> Flow;
}

pub(crate) type BoxedMiddleware = Arc<dyn Middleware>;
