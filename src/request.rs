//! Request construction for the population indicator endpoint.

use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate};
use reqwest::Url;

/// Total population indicator.
pub const POPULATION_INDICATOR: &str = "SP.POP.TOTL";

/// Large enough to cover every annual observation in a single page.
pub const PER_PAGE: u32 = 1000;

// Unreserved characters plus `;`, which the API uses to join several codes.
fn is_path_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~' | ';')
}

/// Build the locator for `country`'s total population over the inclusive
/// year range of `from..=to`.
///
/// ```
/// # use chrono::NaiveDate;
/// # use wb_population::request::build_url;
/// let from = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
/// let to = NaiveDate::from_ymd_opt(2012, 1, 1).unwrap();
/// let url = build_url("https://api.worldbank.org/v2", "it", from, to)?;
/// assert_eq!(url.path(), "/v2/countries/it/indicators/SP.POP.TOTL");
/// # Ok::<(), wb_population::Error>(())
/// ```
///
/// The country code is embedded verbatim; whether it names a real country is
/// left to the service.
pub fn build_url(base_url: &str, country: &str, from: NaiveDate, to: NaiveDate) -> Result<Url> {
    let malformed = |reason: String| Error::MalformedRequest {
        country: country.to_string(),
        reason,
    };

    if country.is_empty() {
        return Err(malformed("empty country code".into()));
    }
    if let Some(bad) = country.chars().find(|c| !is_path_safe(*c)) {
        return Err(malformed(format!("character {bad:?} not allowed in a path segment")));
    }

    let raw = format!(
        "{}/countries/{}/indicators/{}",
        base_url.trim_end_matches('/'),
        country,
        POPULATION_INDICATOR
    );
    let mut url = Url::parse(&raw).map_err(|e| malformed(format!("{raw}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(malformed(format!("{raw}: not a hierarchical url")));
    }

    url.query_pairs_mut()
        .append_pair("date", &format!("{}:{}", from.year(), to.year()))
        .append_pair("per_page", &PER_PAGE.to_string());

    Ok(url)
}
