//! The locale resolver.
//!
//! One decision per request: is the path already locale-scoped, and if not,
//! where should the client be sent?
//!
//! ```text
//! /ru/dashboard                         → PassThrough
//! /dashboard   next-url: /de            → RedirectTo("/de/dashboard")
//! /dashboard   accept-language: ru      → RedirectTo("/ru/dashboard")
//! /dashboard   (nothing usable)         → RedirectTo("/<default>/dashboard")
//! ```
//!
//! Choosing the locale is a chain of [`LocaleStrategy`] steps tried in order;
//! the first one that names a configured locale wins and the default locale
//! catches everything else. The stock chain is [`HintHeader`] followed by
//! [`AcceptLanguage`].

use std::sync::Arc;

use http::HeaderMap;
use http::header::{ACCEPT_LANGUAGE, HeaderName};
use tracing::debug;

use super::LocaleConfig;
use super::negotiate::negotiate;
use crate::error::ConfigError;

/// Header the upstream framework uses to pass a pathname-derived locale hint.
pub const DEFAULT_HINT_HEADER: &str = "next-url";

/// Read-only view of the parts of a request the resolver looks at.
#[derive(Clone, Copy, Debug)]
pub struct RequestView<'a> {
    pub path: &'a str,
    pub headers: &'a HeaderMap,
}

impl<'a> RequestView<'a> {
    pub fn new(path: &'a str, headers: &'a HeaderMap) -> Self {
        Self { path, headers }
    }

    /// Header value as text. Values that are not visible ASCII read as absent.
    pub fn header(&self, name: &HeaderName) -> Option<&'a str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Every line of a list-valued header joined with `", "`, in the order
    /// received (RFC 9110 §5.3). Lines that are not visible ASCII are skipped;
    /// `None` when no line is left.
    pub fn header_list(&self, name: &HeaderName) -> Option<String> {
        let lines: Vec<&str> = self
            .headers
            .get_all(name)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect();
        if lines.is_empty() { None } else { Some(lines.join(", ")) }
    }
}

/// What the caller should do with the request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The path already starts with a configured locale.
    PassThrough,
    /// Redirect to this locale-prefixed path.
    RedirectTo(String),
}

/// One step of locale selection.
///
/// Return a locale from `config` to settle the decision, or `None` to let the
/// next strategy try.
pub trait LocaleStrategy: Send + Sync + 'static {
    fn pick<'c>(&self, req: &RequestView<'_>, config: &'c LocaleConfig) -> Option<&'c str>;
}

/// Exact-match override from a hint header.
///
/// One leading `/` is stripped from the raw value; the rest must equal a
/// configured locale exactly. No other normalisation happens, so `/de/x` or
/// ` de` simply do not match.
#[derive(Clone, Debug)]
pub struct HintHeader {
    name: HeaderName,
}

impl HintHeader {
    pub fn new(name: &str) -> Result<Self, ConfigError> {
        let name = HeaderName::try_from(name)
            .map_err(|_| ConfigError::InvalidHeaderName(name.to_owned()))?;
        Ok(Self { name })
    }
}

impl Default for HintHeader {
    fn default() -> Self {
        Self { name: HeaderName::from_static(DEFAULT_HINT_HEADER) }
    }
}

impl LocaleStrategy for HintHeader {
    fn pick<'c>(&self, req: &RequestView<'_>, config: &'c LocaleConfig) -> Option<&'c str> {
        let Some(raw) = req.header(&self.name) else {
            debug!(header = %self.name, "locale hint missing");
            return None;
        };
        let hint = raw.strip_prefix('/').unwrap_or(raw);
        let locale = config.get(hint);
        debug!(header = %self.name, value = raw, matched = locale.is_some(), "locale hint");
        locale
    }
}

/// Quality-weighted `Accept-Language` negotiation.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptLanguage;

impl LocaleStrategy for AcceptLanguage {
    fn pick<'c>(&self, req: &RequestView<'_>, config: &'c LocaleConfig) -> Option<&'c str> {
        let header = req.header_list(&ACCEPT_LANGUAGE)?;
        negotiate(&header, config)
    }
}

/// Resolves the locale for each request.
///
/// Cheap to clone; the configuration and strategies are shared.
#[derive(Clone)]
pub struct Resolver {
    config: Arc<LocaleConfig>,
    strategies: Arc<[Box<dyn LocaleStrategy>]>,
}

impl Resolver {
    /// Hint header (`next-url`) first, then `Accept-Language`.
    pub fn new(config: impl Into<Arc<LocaleConfig>>) -> Self {
        let strategies: Vec<Box<dyn LocaleStrategy>> =
            vec![Box::new(HintHeader::default()), Box::new(AcceptLanguage)];
        Self::with_strategies(config, strategies)
    }

    /// A resolver with a custom strategy chain. An empty chain always picks
    /// the default locale.
    pub fn with_strategies(
        config: impl Into<Arc<LocaleConfig>>,
        strategies: Vec<Box<dyn LocaleStrategy>>,
    ) -> Self {
        Self { config: config.into(), strategies: strategies.into() }
    }

    pub fn config(&self) -> &LocaleConfig { &self.config }

    /// Decides between pass-through and redirect for one request.
    pub fn resolve(&self, req: &RequestView<'_>) -> Resolution {
        if self.config.locale_of(req.path).is_some() {
            return Resolution::PassThrough;
        }

        let locale = self.pick_locale(req);
        let target = prefixed_path(locale, req.path);
        debug!(path = req.path, locale, target = %target, "redirecting to locale");
        Resolution::RedirectTo(target)
    }

    /// Best-fit locale for the request, ignoring its path.
    pub fn pick_locale(&self, req: &RequestView<'_>) -> &str {
        self.strategies
            .iter()
            .find_map(|s| s.pick(req, &self.config))
            .unwrap_or_else(|| self.config.default_locale())
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("config", &self.config)
            .field("strategies", &self.strategies.len())
            .finish()
    }
}

/// `/` + locale + path, with exactly one `/` between locale and path.
fn prefixed_path(locale: &str, path: &str) -> String {
    let sep = if path.starts_with('/') { "" } else { "/" };
    format!("/{locale}{sep}{path}")
}

#[cfg(test)]
mod tests {
    use http::HeaderValue;

    use super::*;

    fn resolver() -> Resolver {
        Resolver::new(LocaleConfig::new(["en", "de", "ru"], "en").unwrap())
    }

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for &(k, v) in pairs {
            let name = HeaderName::from_bytes(k.as_bytes()).unwrap();
            map.append(name, HeaderValue::from_static(v));
        }
        map
    }

    fn resolve(path: &str, pairs: &[(&'static str, &'static str)]) -> Resolution {
        let headers = headers(pairs);
        resolver().resolve(&RequestView::new(path, &headers))
    }

    fn redirect(path: &str) -> Resolution {
        Resolution::RedirectTo(path.to_owned())
    }

    #[test]
    fn prefixed_paths_pass_through() {
        for path in ["/en/x", "/de", "/ru/a/b", "/en/"] {
            assert_eq!(resolve(path, &[("accept-language", "ru")]), Resolution::PassThrough, "{path}");
        }
    }

    #[test]
    fn unprefixed_path_redirects_by_accept_language() {
        assert_eq!(resolve("/dashboard", &[("accept-language", "ru;q=1.0")]), redirect("/ru/dashboard"));
        assert_eq!(resolve("/invoices", &[("accept-language", "de;q=0.9, en;q=0.5")]), redirect("/de/invoices"));
    }

    #[test]
    fn substring_prefix_is_not_a_locale() {
        assert_eq!(resolve("/english/page", &[]), redirect("/en/english/page"));
        assert_eq!(resolve("/rule", &[("accept-language", "de")]), redirect("/de/rule"));
    }

    #[test]
    fn hint_overrides_accept_language() {
        let got = resolve("/dashboard", &[("next-url", "/de"), ("accept-language", "ru")]);
        assert_eq!(got, redirect("/de/dashboard"));
        let got = resolve("/dashboard", &[("next-url", "ru"), ("accept-language", "de")]);
        assert_eq!(got, redirect("/ru/dashboard"));
    }

    #[test]
    fn unmatched_hint_falls_through_to_negotiation() {
        for hint in ["/de/dashboard", "//de", " de", "/DE", "/fr", ""] {
            let got = resolve("/dashboard", &[("next-url", hint), ("accept-language", "ru")]);
            assert_eq!(got, redirect("/ru/dashboard"), "{hint:?}");
        }
    }

    #[test]
    fn missing_or_unsupported_preferences_use_default() {
        assert_eq!(resolve("/dashboard", &[]), redirect("/en/dashboard"));
        assert_eq!(resolve("/dashboard", &[("accept-language", "")]), redirect("/en/dashboard"));
        assert_eq!(resolve("/dashboard", &[("accept-language", "fr")]), redirect("/en/dashboard"));
        assert_eq!(resolve("/dashboard", &[("accept-language", ";;;q=,=")]), redirect("/en/dashboard"));
    }

    #[test]
    fn non_ascii_header_reads_as_absent() {
        let mut headers = HeaderMap::new();
        headers.insert("next-url", HeaderValue::from_bytes(b"/d\xe9").unwrap());
        headers.insert("accept-language", HeaderValue::from_bytes(b"ru, \xff").unwrap());
        let got = resolver().resolve(&RequestView::new("/x", &headers));
        assert_eq!(got, redirect("/en/x"));
    }

    #[test]
    fn repeated_accept_language_lines_are_combined() {
        let got = resolve("/dashboard", &[("accept-language", "fr"), ("accept-language", "de;q=0.9")]);
        assert_eq!(got, redirect("/de/dashboard"));

        // Order across lines still breaks quality ties.
        let got = resolve("/dashboard", &[("accept-language", "ru;q=0.5"), ("accept-language", "de;q=0.5")]);
        assert_eq!(got, redirect("/ru/dashboard"));
    }

    #[test]
    fn unreadable_line_does_not_hide_the_others() {
        let mut headers = HeaderMap::new();
        headers.append("accept-language", HeaderValue::from_bytes("rüssisch".as_bytes()).unwrap());
        headers.append("accept-language", HeaderValue::from_static("ru"));
        let view = RequestView::new("/x", &headers);
        assert_eq!(view.header_list(&ACCEPT_LANGUAGE).as_deref(), Some("ru"));
        assert_eq!(resolver().resolve(&view), redirect("/ru/x"));
    }

    #[test]
    fn default_is_configurable() {
        let resolver = Resolver::new(LocaleConfig::new(["en", "de", "ru"], "ru").unwrap());
        let headers = HeaderMap::new();
        assert_eq!(resolver.resolve(&RequestView::new("/", &headers)), redirect("/ru/"));
    }

    #[test]
    fn exactly_one_separator() {
        assert_eq!(prefixed_path("en", "/dashboard"), "/en/dashboard");
        assert_eq!(prefixed_path("en", "dashboard"), "/en/dashboard");
        assert_eq!(prefixed_path("en", "/"), "/en/");
        assert_eq!(prefixed_path("en", ""), "/en/");
    }

    #[test]
    fn resolution_is_deterministic() {
        let a = resolve("/a", &[("accept-language", "de;q=0.5, ru;q=0.5")]);
        let b = resolve("/a", &[("accept-language", "de;q=0.5, ru;q=0.5")]);
        assert_eq!(a, b);
    }

    #[test]
    fn custom_strategy_chain() {
        let config = LocaleConfig::new(["en", "de"], "en").unwrap();
        let only_negotiation: Vec<Box<dyn LocaleStrategy>> = vec![Box::new(AcceptLanguage)];
        let resolver = Resolver::with_strategies(config, only_negotiation);
        let headers = headers(&[("next-url", "/de")]);
        assert_eq!(resolver.pick_locale(&RequestView::new("/", &headers)), "en");

        let config = LocaleConfig::new(["en", "de"], "en").unwrap();
        let resolver = Resolver::with_strategies(config, Vec::new());
        let headers = self::headers(&[("accept-language", "de")]);
        assert_eq!(resolver.pick_locale(&RequestView::new("/", &headers)), "en");
    }

    #[test]
    fn custom_hint_header_name() {
        let config = LocaleConfig::new(["en", "de"], "en").unwrap();
        let hint = HintHeader::new("x-locale-hint").unwrap();
        let only_hint: Vec<Box<dyn LocaleStrategy>> = vec![Box::new(hint)];
        let resolver = Resolver::with_strategies(config, only_hint);
        let headers = headers(&[("X-Locale-Hint", "/de")]);
        assert_eq!(resolver.pick_locale(&RequestView::new("/", &headers)), "de");
    }

    #[test]
    fn invalid_hint_header_name() {
        assert!(matches!(HintHeader::new("bad header"), Err(ConfigError::InvalidHeaderName(_))));
    }
}
