//! Date module - years found in narrative text

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar year promoted to a full date (January 1 of that year)
///
/// Ordering follows the calendar, so a sorted `Vec<DateToken>` is
/// chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DateToken(NaiveDate);

impl DateToken {
    /// Create a token for January 1 of `year`
    ///
    /// Returns `None` when the year is outside chrono's supported range.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronicle_domain::DateToken;
    ///
    /// let token = DateToken::from_year(1776).unwrap();
    /// assert_eq!(token.year(), 1776);
    /// ```
    pub fn from_year(year: i32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, 1, 1).map(Self)
    }

    /// Get the calendar year
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Long-form US English rendering, e.g. `January 1, 1776`
    pub fn long_form(&self) -> String {
        self.0.format("%B %-d, %Y").to_string()
    }
}

impl fmt::Display for DateToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.long_form())
    }
}
