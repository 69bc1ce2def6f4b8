//! Locale-aware rendering of a calendar day.

use crate::consts::DATE_SEPARATOR;
use chrono::{Datelike, NaiveDate};
use std::fmt::Write;

/// Renders a normalized calendar day for display to a user.
pub trait LocaleFormatter {
    fn format_date(&self, date: NaiveDate) -> String;
}

impl<F> LocaleFormatter for F
where
    F: Fn(NaiveDate) -> String,
{
    fn format_date(&self, date: NaiveDate) -> String {
        self(date)
    }
}

/// US numeric form without padding, e.g. `1/22/1992`. Used by
/// [`crate::DateTimeValue::to_locale_date_string`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumericLocale;

impl LocaleFormatter for NumericLocale {
    fn format_date(&self, date: NaiveDate) -> String {
        format!("{}/{}/{}", date.month(), date.day(), date.year())
    }
}

/// Formats with a chrono strftime pattern such as `%d.%m.%Y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternLocale {
    pattern: String,
}

impl PatternLocale {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl LocaleFormatter for PatternLocale {
    fn format_date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.pattern)).is_ok() {
            return out;
        }

        tracing::debug!(pattern = %self.pattern, "rejected date pattern, using ISO form");
        format!(
            "{:04}{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{:02}",
            date.year(),
            date.month(),
            date.day()
        )
    }
}
