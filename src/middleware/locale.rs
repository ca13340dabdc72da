//! Locale-prefix redirect middleware.
//!
//! Requests whose path already starts with a configured locale continue to
//! the router. Everything else gets a `307 Temporary Redirect` to the same
//! path under the resolved locale, query string included.
//!
//! API routes, static assets and the site icon are not pages and are never
//! redirected; see [`Exclusions`].

use tracing::debug;

use super::{Flow, Middleware};
use crate::locale::{Resolution, Resolver};
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// Paths the locale middleware leaves alone.
///
/// - `prefixes` match right after the leading `/`, without a segment
///   boundary: `api` excludes `/api/users` and `/apidocs` alike.
/// - `paths` match exactly.
/// - `suffixes` match the end of the path (`.png`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exclusions {
    pub prefixes: Vec<String>,
    pub paths: Vec<String>,
    pub suffixes: Vec<String>,
}

impl Exclusions {
    /// Excludes nothing.
    pub fn none() -> Self {
        Self { prefixes: Vec::new(), paths: Vec::new(), suffixes: Vec::new() }
    }

    pub fn matches(&self, path: &str) -> bool {
        let rest = path.strip_prefix('/').unwrap_or(path);
        self.prefixes.iter().any(|p| rest.starts_with(p.as_str()))
            || self.paths.iter().any(|p| p == path)
            || self.suffixes.iter().any(|s| path.ends_with(s.as_str()))
    }
}

impl Default for Exclusions {
    fn default() -> Self {
        Self {
            prefixes: vec!["api".into(), "_next/static".into(), "_next/image".into()],
            paths: vec!["/favicon.ico".into()],
            suffixes: vec![".png".into()],
        }
    }
}

/// Redirects unprefixed page requests to their locale-prefixed path.
#[derive(Clone, Debug)]
pub struct LocaleRedirect {
    resolver: Resolver,
    exclusions: Exclusions,
}

impl LocaleRedirect {
    /// Uses the default [`Exclusions`].
    pub fn new(resolver: Resolver) -> Self {
        Self { resolver, exclusions: Exclusions::default() }
    }

    pub fn exclusions(mut self, exclusions: Exclusions) -> Self {
        self.exclusions = exclusions;
        self
    }

    pub fn resolver(&self) -> &Resolver { &self.resolver }
}

impl Middleware for LocaleRedirect {
    fn on_request(&self, req: &Request) -> Flow {
        if self.exclusions.matches(req.path()) {
            debug!(path = req.path(), "locale middleware skipped");
            return Flow::Continue;
        }

        match self.resolver.resolve(&req.view()) {
            Resolution::PassThrough => Flow::Continue,
            Resolution::RedirectTo(mut location) => {
                if let Some(query) = req.query() {
                    location.push('?');
                    location.push_str(query);
                }
                Flow::Respond(Response::redirect(Status::TemporaryRedirect, location))
            }
        }
    }
}
