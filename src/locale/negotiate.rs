//! `Accept-Language` parsing and negotiation.
//!
//! The header is an ordered list of language ranges with optional quality
//! weights (RFC 9110 §12.5.4):
//!
//! ```text
//! accept-language: de-CH, de;q=0.9, en;q=0.5, *;q=0.1
//! ```
//!
//! Negotiation picks, among the *configured* locales, the one the client
//! prefers most. For every configured locale we find the header entry that
//! matches it best (by specificity, then quality, then position), and then
//! rank the locales by that entry's quality, specificity and position.
//! Configured order breaks any remaining tie.

use std::cmp::Ordering;

use super::LocaleConfig;

/// One parsed entry of an `Accept-Language` header.
#[derive(Clone, Debug, PartialEq)]
pub struct LanguageRange<'a> {
    /// The full range as sent, e.g. `de-CH` or `*`.
    pub tag: &'a str,
    /// The primary subtag, e.g. `de` for `de-CH`.
    pub primary: &'a str,
    pub quality: f32,
    /// Position in the header, starting at 0.
    pub position: usize,
}

/// How closely a header entry matches a configured locale. Declared from
/// weakest to strongest so the derived `Ord` ranks them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Specificity {
    Wildcard,
    /// The locale's primary subtag equals the entry (`en` accepts `en-GB`).
    LocaleBase,
    /// The entry's primary subtag equals the locale (`en-GB` accepts `en`).
    RangeBase,
    Exact,
}

#[derive(Clone, Copy, Debug)]
struct Candidate {
    quality: f32,
    specificity: Specificity,
    position: usize,
    index: usize,
}

/// Parses an `Accept-Language` value.
///
/// Malformed entries are skipped rather than rejected: an unparseable or
/// out-of-range `q` drops that entry only. Entries with `q=0` are kept; they
/// explicitly mark a language as not acceptable.
pub fn parse_accept_language(value: &str) -> Vec<LanguageRange<'_>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .enumerate()
        .filter_map(|(position, entry)| parse_range(entry, position))
        .collect()
}

fn parse_range(entry: &str, position: usize) -> Option<LanguageRange<'_>> {
    let mut parts = entry.split(';');
    let tag = parts.next()?.trim();
    if tag.is_empty() || tag.contains(char::is_whitespace) {
        return None;
    }

    let mut quality = 1.0;
    for param in parts {
        let Some((key, val)) = param.split_once('=') else { continue };
        if key.trim().eq_ignore_ascii_case("q") {
            quality = val.trim().parse::<f32>().ok()?;
            if !(0.0..=1.0).contains(&quality) {
                return None;
            }
        }
    }

    let primary = tag.split('-').next().unwrap_or(tag);
    Some(LanguageRange { tag, primary, quality, position })
}

/// Returns the configured locale the client prefers, or `None` if no
/// configured locale is acceptable.
///
/// A missing header is the caller's concern; an empty one yields `None`.
pub fn negotiate<'c>(header: &str, config: &'c LocaleConfig) -> Option<&'c str> {
    let ranges = parse_accept_language(header);
    if ranges.is_empty() {
        return None;
    }

    config
        .locales()
        .iter()
        .enumerate()
        .filter_map(|(index, locale)| best_range(locale, index, &ranges))
        .filter(|c| c.quality > 0.0)
        .min_by(rank)
        .map(|c| config.locales()[c.index].as_str())
}

/// The header entry that best describes how acceptable `locale` is.
fn best_range(locale: &str, index: usize, ranges: &[LanguageRange<'_>]) -> Option<Candidate> {
    let locale_primary = locale.split('-').next().unwrap_or(locale);

    ranges
        .iter()
        .filter_map(|range| {
            let specificity = if range.tag.eq_ignore_ascii_case(locale) {
                Specificity::Exact
            } else if range.primary.eq_ignore_ascii_case(locale) {
                Specificity::RangeBase
            } else if range.tag.eq_ignore_ascii_case(locale_primary) {
                Specificity::LocaleBase
            } else if range.tag == "*" {
                Specificity::Wildcard
            } else {
                return None;
            };
            Some(Candidate { quality: range.quality, specificity, position: range.position, index })
        })
        .max_by(|a, b| {
            a.specificity
                .cmp(&b.specificity)
                .then(a.quality.total_cmp(&b.quality))
                .then(b.position.cmp(&a.position))
        })
}

/// Orders candidates best-first.
fn rank(a: &Candidate, b: &Candidate) -> Ordering {
    b.quality
        .total_cmp(&a.quality)
        .then(b.specificity.cmp(&a.specificity))
        .then(a.position.cmp(&b.position))
        .then(a.index.cmp(&b.index))
}
