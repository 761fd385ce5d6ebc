//! Canonical due-date representation and loose date parsing.

use super::TodoDomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar date stored and compared in canonical `YYYY-MM-DD` form.
///
/// Human-entered dates are normalised through [`DueDate::parse`] at every
/// point a date enters the system; stored data is already canonical and is
/// never re-parsed at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DueDate(NaiveDate);

impl DueDate {
    /// Parses a loosely-formatted date string into a canonical date.
    ///
    /// Accepts `-`, `.`, and `/` as separators. A 4-digit first segment is
    /// read as year-month-day; anything else is read as day-month-year
    /// (day-first). Parsing is idempotent on already-canonical input.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::InvalidDateFormat`] when the input does
    /// not split into three numeric segments or names an impossible
    /// calendar date.
    pub fn parse(raw: &str) -> Result<Self, TodoDomainError> {
        let invalid = || TodoDomainError::InvalidDateFormat(raw.to_owned());

        let mut segments = raw.trim().split(['-', '.', '/']);
        let (Some(first), Some(second), Some(third), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(invalid());
        };

        let (year_text, month_text, day_text) = if first.len() == 4 {
            (first, second, third)
        } else {
            (third, second, first)
        };

        let year: i32 = year_text.parse().map_err(|_| invalid())?;
        let month: u32 = month_text.parse().map_err(|_| invalid())?;
        let day: u32 = day_text.parse().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// Wraps an already-validated calendar date.
    #[must_use]
    pub const fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the wrapped calendar date.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // NaiveDate renders as ISO 8601 `YYYY-MM-DD`, the canonical form.
        write!(f, "{}", self.0)
    }
}
