//! Population providers and the **World Bank Indicators API (v2)** adapter.
//!
//! Callers depend on [`PopulationProvider`] so data sources can be swapped
//! without touching them. [`WorldBank`] is the implementation backed by the
//! `countries/{code}/indicators/SP.POP.TOTL` endpoint.
//!
//! ### Notes
//! - One outbound request per `fetch`; `per_page` is large enough that the
//!   full annual series fits on the first page.
//! - Errors are returned exactly as the failing stage produced them. Nothing
//!   is retried.
//!
//! Typical usage:
//! ```no_run
//! # use chrono::NaiveDate;
//! # use wb_population::{HttpTransport, PopulationProvider, WorldBank};
//! let wb = WorldBank::new(HttpTransport::try_default()?);
//! let from = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
//! let to = NaiveDate::from_ymd_opt(2012, 1, 1).unwrap();
//! let resp = wb.fetch("it", from, to)?;
//! println!("{}: {} observations", resp.provider, resp.history.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::decode::{decode, normalize};
use crate::error::Result;
use crate::models::{Provider, Response};
use crate::request::build_url;
use crate::transport::{HttpTransport, Transport};
use chrono::NaiveDate;
use log::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.worldbank.org/v2";

/// Capability shared by every population data source.
pub trait PopulationProvider: Send + Sync {
    /// Tag stamped on every [`Response`] this provider returns.
    fn provider(&self) -> Provider;

    /// Fetch the population history of `country` for the years of
    /// `from..=to`.
    ///
    /// ### Errors
    /// - `Error::MalformedRequest` if `country` cannot be put into a URL
    /// - `Error::Transport` if the network call fails
    /// - `Error::Decode` if the body does not match the expected schema
    fn fetch(&self, country: &str, from: NaiveDate, to: NaiveDate) -> Result<Response>;
}

/// Adapter for The World Bank. Immutable after construction; share it freely
/// across threads when the transport allows it.
#[derive(Debug, Clone)]
pub struct WorldBank<T = HttpTransport> {
    pub base_url: String,
    transport: T,
}

impl<T: Transport> WorldBank<T> {
    pub const PROVIDER: Provider = Provider::WorldBank;

    pub fn new(transport: T) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            transport,
        }
    }

    /// Point the adapter at another deployment (mirrors, local test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl<T: Transport> PopulationProvider for WorldBank<T> {
    fn provider(&self) -> Provider {
        Self::PROVIDER
    }

    fn fetch(&self, country: &str, from: NaiveDate, to: NaiveDate) -> Result<Response> {
        let url = build_url(&self.base_url, country, from, to)?;
        debug!("GET {}", url);

        let body = self.transport.get(url.as_str())?;
        let envelope = decode(&body)?;
        drop(body);

        let history = normalize(envelope)?;
        debug!("{}: {} observations for {}", Self::PROVIDER, history.len(), country);

        Ok(Response {
            provider: Self::PROVIDER,
            history,
        })
    }
}
