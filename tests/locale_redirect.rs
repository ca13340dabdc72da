//! End-to-end behaviour of the locale middleware in front of a router.

use bytes::Bytes;
use lingo::locale::{LocaleConfig, Resolver};
use lingo::middleware::LocaleRedirect;
use lingo::{Request, Response, Router, Settings, Status};

async fn page(req: Request) -> Response {
    let lang = req.param("lang").unwrap_or("?").to_owned();
    Response::text(format!("{lang}:{}", req.path()))
}

async fn api(_req: Request) -> Response {
    Response::json(b"[]".to_vec())
}

fn app() -> Router {
    let config = LocaleConfig::new(["en", "de", "ru"], "en").unwrap();
    Router::new()
        .get("/{lang}", page)
        .get("/{lang}/dashboard", page)
        .get("/api/invoices", api)
        .layer(LocaleRedirect::new(Resolver::new(config)))
}

fn get(uri: &str, headers: &[(&str, &str)]) -> Request {
    let mut builder = http::Request::builder().uri(uri);
    for (k, v) in headers {
        builder = builder.header(*k, *v);
    }
    Request::from_http(builder.body(Bytes::new()).unwrap()).unwrap()
}

fn assert_redirect(res: &Response, location: &str) {
    assert_eq!(res.status_code(), Status::TemporaryRedirect);
    assert_eq!(res.header("location"), Some(location));
}

#[tokio::test]
async fn accept_language_scenario() {
    let res = app().handle(get("/dashboard", &[("accept-language", "ru;q=1.0")])).await;
    assert_redirect(&res, "/ru/dashboard");
}

#[tokio::test]
async fn weighted_preferences() {
    let res = app().handle(get("/dashboard", &[("accept-language", "de;q=0.9, en;q=0.5")])).await;
    assert_redirect(&res, "/de/dashboard");
}

#[tokio::test]
async fn preferences_split_over_several_lines() {
    let res = app()
        .handle(get("/dashboard", &[("accept-language", "fr"), ("accept-language", "de;q=0.9")]))
        .await;
    assert_redirect(&res, "/de/dashboard");
}

#[tokio::test]
async fn hint_header_wins() {
    let res = app()
        .handle(get("/dashboard", &[("next-url", "/ru"), ("accept-language", "de")]))
        .await;
    assert_redirect(&res, "/ru/dashboard");
}

#[tokio::test]
async fn unsupported_language_gets_default() {
    let res = app().handle(get("/dashboard", &[("accept-language", "fr")])).await;
    assert_redirect(&res, "/en/dashboard");
    let res = app().handle(get("/dashboard", &[])).await;
    assert_redirect(&res, "/en/dashboard");
}

#[tokio::test]
async fn prefixed_request_reaches_handler() {
    let res = app().handle(get("/de/dashboard", &[("accept-language", "ru")])).await;
    assert_eq!(res.status_code(), Status::Ok);
    assert_eq!(res.body(), b"de:/de/dashboard");

    let res = app().handle(get("/ru", &[])).await;
    assert_eq!(res.body(), b"ru:/ru");
}

#[tokio::test]
async fn lookalike_segment_is_redirected() {
    let res = app().handle(get("/english/page", &[("accept-language", "de")])).await;
    assert_redirect(&res, "/de/english/page");
}

#[tokio::test]
async fn redirect_target_is_served() {
    let app = app();
    let res = app.handle(get("/dashboard?tab=latest", &[("accept-language", "ru")])).await;
    assert_redirect(&res, "/ru/dashboard?tab=latest");

    let res = app.handle(get("/ru/dashboard?tab=latest", &[("accept-language", "ru")])).await;
    assert_eq!(res.status_code(), Status::Ok);
}

#[tokio::test]
async fn api_routes_are_not_localized() {
    let res = app().handle(get("/api/invoices", &[("accept-language", "de")])).await;
    assert_eq!(res.status_code(), Status::Ok);
    assert_eq!(res.header("content-type"), Some("application/json"));
}

#[tokio::test]
async fn settings_build_the_same_middleware() {
    let settings = Settings::parse(
        r#"
        [i18n]
        locales = ["en", "de"]
        default_locale = "de"
        hint_header = "x-locale"
        "#,
    )
    .unwrap();
    let app = Router::new()
        .get("/{lang}/dashboard", page)
        .layer(settings.locale_redirect().unwrap());

    let res = app.handle(get("/dashboard", &[("next-url", "/en")])).await;
    assert_redirect(&res, "/de/dashboard");
    let res = app.handle(get("/dashboard", &[("x-locale", "/en")])).await;
    assert_redirect(&res, "/en/dashboard");
}
