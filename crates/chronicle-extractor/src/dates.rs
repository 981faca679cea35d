//! Year detection

use crate::config::ExtractorConfig;
use chronicle_domain::{Clock, DateToken};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Four-digit years from 1000 through 2029, delimited by ASCII word boundaries
static YEAR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)(1[0-9]{3}|20[0-2][0-9])(?-u:\b)").expect("year pattern is valid")
});

/// Extract the years mentioned in `text`, sorted chronologically
///
/// When the text names no year, `placeholder_count` dates spaced
/// `placeholder_interval_years` apart and ending at the clock's current year
/// are returned instead, so the result is never empty.
pub fn extract_dates<C: Clock>(text: &str, config: &ExtractorConfig, clock: &C) -> Vec<DateToken> {
    let mut dates: Vec<DateToken> = YEAR_PATTERN
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<i32>().ok())
        .filter_map(DateToken::from_year)
        .collect();

    if dates.is_empty() {
        let dates = placeholder_dates(config, clock);
        debug!("No years found, using {} placeholder dates", dates.len());
        return dates;
    }

    dates.sort();
    debug!("Extracted {} dates", dates.len());
    dates
}

/// Evenly spaced dates ending at the current year, oldest first
fn placeholder_dates<C: Clock>(config: &ExtractorConfig, clock: &C) -> Vec<DateToken> {
    let current = clock.current_year();
    (0..config.placeholder_count)
        .rev()
        .filter_map(|step| {
            let back = i32::try_from(step).ok()?.checked_mul(config.placeholder_interval_years)?;
            DateToken::from_year(current.checked_sub(back)?)
        })
        .collect()
}
