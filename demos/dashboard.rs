//! Locale-routed dashboard skeleton.
//!
//! Run with:
//!   RUST_LOG=lingo=debug cargo run --example dashboard
//!   LINGO_CONFIG=lingo.toml cargo run --example dashboard
//!
//! Try:
//!   curl -i http://localhost:3000/dashboard -H 'accept-language: ru;q=1.0'
//!   curl -i http://localhost:3000/dashboard/invoices?page=2 -H 'next-url: /de'
//!   curl -i http://localhost:3000/de/dashboard
//!   curl -i http://localhost:3000/api/invoices

use std::path::Path;
use std::sync::Arc;

use lingo::locale::switch_locale;
use lingo::{Request, Response, Router, Server, Settings, Status};
use tracing_subscriber::EnvFilter;

/// Locales the switcher links to, straight from the loaded settings.
type Locales = Arc<[String]>;

#[tokio::main]
async fn main() -> Result<(), lingo::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = match std::env::var("LINGO_CONFIG") {
        Ok(path) => Settings::load(Path::new(&path))?,
        Err(_) => Settings::default(),
    };
    let locales: Locales = settings.locale_config()?.locales().into();

    let app = Router::new()
        .get("/{lang}",                     with_locales(&locales, home))
        .get("/{lang}/dashboard",           with_locales(&locales, dashboard))
        .get("/{lang}/dashboard/invoices",  with_locales(&locales, invoices))
        .post("/{lang}/dashboard/invoices", create_invoice)
        .get("/api/invoices",               api_invoices)
        .layer(settings.locale_redirect()?);

    Server::bind(&settings.server.addr)?.serve(app).await
}

/// Adapts a page that renders the locale switcher into a router handler.
fn with_locales<Fut>(
    locales: &Locales,
    page: fn(Request, Locales) -> Fut,
) -> impl Fn(Request) -> Fut + Send + Sync + 'static
where
    Fut: Future<Output = Response> + Send + 'static,
{
    let locales = Arc::clone(locales);
    move |req| page(req, Arc::clone(&locales))
}

async fn home(req: Request, locales: Locales) -> Response {
    let lang = req.param("lang").unwrap_or_default();
    Response::html(format!("<h1>Acme ({lang})</h1>{}", switcher(req.path(), &locales)))
}

async fn dashboard(req: Request, locales: Locales) -> Response {
    let lang = req.param("lang").unwrap_or_default();
    Response::html(format!("<h1>Dashboard ({lang})</h1>{}", switcher(req.path(), &locales)))
}

async fn invoices(req: Request, locales: Locales) -> Response {
    let page = req.query().unwrap_or("page=1");
    Response::html(format!("<h1>Invoices</h1><p>{page}</p>{}", switcher(req.path(), &locales)))
}

// Form handling and persistence live elsewhere; this only acknowledges.
async fn create_invoice(req: Request) -> Response {
    if req.body().is_empty() {
        return Response::status(Status::BadRequest);
    }
    let lang = req.param("lang").unwrap_or_default();
    Response::redirect(Status::SeeOther, format!("/{lang}/dashboard/invoices"))
}

async fn api_invoices(_req: Request) -> Response {
    Response::json(br#"[{"id":"1","amount":15795,"status":"pending"}]"#.to_vec())
}

fn switcher(path: &str, locales: &[String]) -> String {
    locales
        .iter()
        .map(|l| format!(r#"<a href="{}">{l}</a>"#, switch_locale(path, l)))
        .collect::<Vec<_>>()
        .join(" ")
}
