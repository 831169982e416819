use chrono::NaiveDate;
use log::warn;

use super::NetworkConfig;
use crate::FetchError;

/// Parses a `YYYY-MM-DD` date
pub fn parse_query_date(date_str: &str) -> Result<NaiveDate, FetchError> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .map_err(|_| FetchError::InvalidDate(date_str.to_string()))
}

/// Picks the date to query disruptions for.
///
/// Falls back to `today` when no date is requested, when the requested date
/// cannot be parsed, or when it lies outside the range the service covers.
pub fn resolve_query_date(
    requested: Option<&str>,
    today: NaiveDate,
    config: &NetworkConfig,
) -> NaiveDate {
    let Some(date_str) = requested else {
        return today;
    };

    match parse_query_date(date_str) {
        Ok(date) if (config.valid_from..=config.valid_until).contains(&date) => date,
        Ok(date) => {
            warn!(
                "Date {date} is outside of {}..={}, using {today}",
                config.valid_from, config.valid_until
            );
            today
        }
        Err(e) => {
            warn!("{e}, using {today}");
            today
        }
    }
}
