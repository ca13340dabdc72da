//! # lingo
//!
//! Locale-prefixed routing for HTTP services.
//!
//! Every page of a localized application lives under a locale segment:
//! `/en/dashboard`, `/de/invoices/42`. lingo sits in front of the router and
//! makes sure each request ends up there:
//!
//! - A path that already starts with a configured locale passes through.
//! - Anything else is redirected (`307`) to the same path under the best
//!   locale for the client: a framework hint header first, then weighted
//!   `Accept-Language` negotiation, then the configured default.
//!
//! No cookies, no sessions, no cached decisions. Each request is resolved from
//! its path and headers alone.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use lingo::locale::{LocaleConfig, Resolver};
//! use lingo::middleware::LocaleRedirect;
//! use lingo::{Request, Response, Router, Server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lingo::Error> {
//!     let config = LocaleConfig::new(["en", "de", "ru"], "en")?;
//!
//!     let app = Router::new()
//!         .get("/{lang}/dashboard", dashboard)
//!         .layer(LocaleRedirect::new(Resolver::new(config)));
//!
//!     // GET /dashboard  (accept-language: ru)  →  307 location: /ru/dashboard
//!     Server::bind("0.0.0.0:3000")?.serve(app).await
//! }
//!
//! async fn dashboard(req: Request) -> Response {
//!     let lang = req.param("lang").unwrap_or("en");
//!     Response::text(format!("dashboard ({lang})"))
//! }
//! ```

mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod settings;
mod status;

pub mod locale;
pub mod middleware;

pub use error::{ConfigError, Error};
pub use handler::Handler;
pub use method::Method;
pub use request::Request;
pub use response::{ContentType, IntoResponse, Response, ResponseBuilder};
pub use router::Router;
pub use server::{Server, serve_listener};
pub use settings::{ExcludeSettings, I18nSettings, ServerSettings, Settings};
pub use status::Status;
