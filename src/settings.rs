//! File-based configuration.
//!
//! Everything is optional; an empty file yields the defaults:
//!
//! ```toml
//! [server]
//! addr = "0.0.0.0:3000"
//!
//! [i18n]
//! locales = ["en", "de", "ru"]
//! default_locale = "en"
//! hint_header = "next-url"
//!
//! [exclude]
//! prefixes = ["api", "_next/static", "_next/image"]
//! paths = ["/favicon.ico"]
//! suffixes = [".png"]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, Error};
use crate::locale::{AcceptLanguage, HintHeader, LocaleConfig, LocaleStrategy, Resolver};
use crate::middleware::{Exclusions, LocaleRedirect};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub server: ServerSettings,
    pub i18n: I18nSettings,
    pub exclude: ExcludeSettings,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSettings {
    pub addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { addr: "0.0.0.0:3000".to_owned() }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct I18nSettings {
    pub locales: Vec<String>,
    pub default_locale: String,
    pub hint_header: String,
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            locales: vec!["en".to_owned(), "de".to_owned(), "ru".to_owned()],
            default_locale: "en".to_owned(),
            hint_header: crate::locale::DEFAULT_HINT_HEADER.to_owned(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExcludeSettings {
    pub prefixes: Vec<String>,
    pub paths: Vec<String>,
    pub suffixes: Vec<String>,
}

impl Default for ExcludeSettings {
    fn default() -> Self {
        let Exclusions { prefixes, paths, suffixes } = Exclusions::default();
        Self { prefixes, paths, suffixes }
    }
}

impl Settings {
    /// Reads and parses a TOML settings file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content)?)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Validated locale set.
    pub fn locale_config(&self) -> Result<LocaleConfig, ConfigError> {
        LocaleConfig::new(self.i18n.locales.iter().cloned(), &self.i18n.default_locale)
    }

    /// Resolver with the configured hint header followed by negotiation.
    pub fn resolver(&self) -> Result<Resolver, ConfigError> {
        let hint = HintHeader::new(&self.i18n.hint_header)?;
        let strategies: Vec<Box<dyn LocaleStrategy>> = vec![Box::new(hint), Box::new(AcceptLanguage)];
        Ok(Resolver::with_strategies(self.locale_config()?, strategies))
    }

    /// The locale middleware as configured.
    pub fn locale_redirect(&self) -> Result<LocaleRedirect, ConfigError> {
        let exclusions = Exclusions {
            prefixes: self.exclude.prefixes.clone(),
            paths: self.exclude.paths.clone(),
            suffixes: self.exclude.suffixes.clone(),
        };
        Ok(LocaleRedirect::new(self.resolver()?).exclusions(exclusions))
    }
}
