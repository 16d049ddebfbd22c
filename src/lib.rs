//! wb_population
//!
//! Fetch historical population figures for a country and normalize them into
//! a provider-agnostic time series. Pairs with the `wbpop` CLI.
//!
//! ### Features
//! - Fetch total population for a country over an inclusive range of years
//! - Interchangeable providers behind the [`PopulationProvider`] trait
//! - Save as CSV or JSON
//! - Quick summary statistics (min, max, mean, median)
//!
//! ### Example
//! ```no_run
//! use chrono::NaiveDate;
//! use wb_population::{HttpTransport, PopulationProvider, WorldBank};
//!
//! let wb = WorldBank::new(HttpTransport::try_default()?);
//! let resp = wb.fetch(
//!     "it",
//!     NaiveDate::from_ymd_opt(2010, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
//! )?;
//! wb_population::storage::save_csv(&resp, "it_2010_2020.csv")?;
//! println!("{:#?}", wb_population::stats::summary(&resp));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod decode;
pub mod error;
pub mod models;
pub mod request;
pub mod stats;
pub mod storage;
pub mod transport;

pub use api::{PopulationProvider, WorldBank};
pub use error::{DecodeError, Error, TransportError};
pub use models::{Instant, Provider, Response};
pub use transport::{HttpTransport, Transport};
