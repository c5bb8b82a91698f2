//! Locale-aware date display for list rows.
//!
//! # Responsibility
//! - Map a POSIX/BCP-47 locale tag to a date display pattern.
//! - Format optional calendar dates into display text.
//!
//! # Invariants
//! - Absent dates format as an empty string.
//! - Unknown or missing locales fall back to the US pattern.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static LOCALE_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<lang>[A-Za-z]{2,3})(?:[_-](?P<region>[A-Za-z]{2}))?(?:[.@].*)?$")
        .expect("valid locale tag regex")
});

/// Environment variables consulted for the host locale, highest priority first.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

/// Date display pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateLocale {
    /// `M/D/YYYY`, no zero padding.
    #[default]
    Us,
    /// `DD/MM/YYYY`.
    DayFirst,
    /// `DD.MM.YYYY`.
    Dotted,
    /// `YYYY-MM-DD`.
    Iso,
}

impl DateLocale {
    /// Resolves a locale tag such as `en_US.UTF-8`, `fr-FR` or `de`.
    ///
    /// Returns `None` for tags that do not name a language (`C`, `POSIX`, "").
    pub fn from_tag(tag: &str) -> Option<Self> {
        let captures = LOCALE_TAG_RE.captures(tag.trim())?;
        let lang = captures.name("lang")?.as_str().to_ascii_lowercase();
        let region = captures
            .name("region")
            .map(|m| m.as_str().to_ascii_uppercase());

        let locale = match (lang.as_str(), region.as_deref()) {
            (_, Some("US")) | ("en", None) => Self::Us,
            ("de" | "ru" | "pl" | "cs" | "fi" | "nb" | "tr" | "uk" | "ro", _) => Self::Dotted,
            ("sv" | "ja" | "zh" | "ko" | "lt" | "hu", _) => Self::Iso,
            _ => Self::DayFirst,
        };
        Some(locale)
    }

    /// Resolves the host locale from `LC_ALL`, `LC_TIME` then `LANG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`DateLocale::from_env`] with an injectable variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        LOCALE_ENV_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty())
            .and_then(|value| Self::from_tag(&value))
            .unwrap_or_default()
    }

    /// Formats a date for display.
    pub fn format(self, date: NaiveDate) -> String {
        match self {
            Self::Us => format!("{}/{}/{}", date.month(), date.day(), date.year()),
            Self::DayFirst => date.format("%d/%m/%Y").to_string(),
            Self::Dotted => date.format("%d.%m.%Y").to_string(),
            Self::Iso => date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Formats an optional date, yielding `""` when absent.
    pub fn format_opt(self, date: Option<NaiveDate>) -> String {
        date.map(|date| self.format(date)).unwrap_or_default()
    }
}
