//! Locale configuration and path helpers.
//!
//! A [`LocaleConfig`] is the ordered set of locales an application serves plus
//! the one it falls back to. It is built once at startup, validated, and then
//! shared read-only (behind an `Arc`) by every request.
//!
//! ```rust
//! use lingo::locale::LocaleConfig;
//!
//! let config = LocaleConfig::new(["en", "de", "ru"], "en").unwrap();
//! assert_eq!(config.locale_of("/de/invoices"), Some("de"));
//! assert_eq!(config.locale_of("/english"), None);
//! ```

mod negotiate;
mod resolver;

pub use negotiate::{LanguageRange, negotiate, parse_accept_language};
pub use resolver::{
    AcceptLanguage, DEFAULT_HINT_HEADER, HintHeader, LocaleStrategy, RequestView, Resolution, Resolver,
};

use crate::error::ConfigError;

/// Supported locales, in preference order, plus the default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleConfig {
    locales: Vec<String>,
    default: usize,
}

impl LocaleConfig {
    /// Validates and builds a configuration.
    ///
    /// Codes must be non-empty, unique (ignoring ASCII case) and free of
    /// characters that would break a path segment or an `Accept-Language`
    /// entry. `default` must be one of `locales`.
    pub fn new<I, S>(locales: I, default: &str) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut codes: Vec<String> = Vec::new();
        for code in locales {
            let code = code.into();
            if !is_valid_code(&code) {
                return Err(ConfigError::InvalidLocale(code));
            }
            if codes.iter().any(|c| c.eq_ignore_ascii_case(&code)) {
                return Err(ConfigError::DuplicateLocale(code));
            }
            codes.push(code);
        }

        if codes.is_empty() {
            return Err(ConfigError::NoLocales);
        }

        let default = codes
            .iter()
            .position(|c| c == default)
            .ok_or_else(|| ConfigError::UnknownDefault(default.to_owned()))?;

        Ok(Self { locales: codes, default })
    }

    pub fn locales(&self) -> &[String] { &self.locales }
    pub fn default_locale(&self) -> &str { &self.locales[self.default] }

    /// Exact, case-sensitive membership test. Returns the configured code.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.locales.iter().find(|c| *c == code).map(String::as_str)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// The configured locale that prefixes `path`, if any.
    ///
    /// A prefix only counts when it is a whole segment: `/en` and `/en/x`
    /// match `en`, `/english` does not.
    pub fn locale_of(&self, path: &str) -> Option<&str> {
        let rest = path.strip_prefix('/')?;
        self.locales
            .iter()
            .find(|code| match rest.strip_prefix(code.as_str()) {
                Some(tail) => tail.is_empty() || tail.starts_with('/'),
                None => false,
            })
            .map(String::as_str)
    }
}

/// Replaces the first segment of `path` with `locale`.
///
/// Used to build locale-switcher links: `/de/dashboard` becomes
/// `/ru/dashboard`. An empty path has nothing to switch and yields `/`.
pub fn switch_locale(path: &str, locale: &str) -> String {
    if path.is_empty() {
        return "/".to_owned();
    }
    let mut segments: Vec<&str> = path.split('/').collect();
    if segments.len() < 2 {
        segments.push(locale);
    } else {
        segments[1] = locale;
    }
    segments.join("/")
}

fn is_valid_code(code: &str) -> bool {
    !code.is_empty()
        && !code
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | ';' | ','))
}
