//! Error taxonomy for the fetch pipeline.
//!
//! Each variant of [`Error`] names the stage that failed. The adapter hands
//! them to the caller as-is; nothing is retried or swallowed.

use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The inputs cannot be turned into a valid resource locator.
    #[error("malformed request for country {country:?}: {reason}")]
    MalformedRequest { country: String, reason: String },

    /// The transport collaborator failed to deliver a body.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The body could not be decoded into the expected schema.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[derive(Debug, Error)]
pub enum DecodeError {
    /// Ill-formed markup or a malformed scalar.
    #[error("decode xml: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// Well-formed, but not shaped like a single envelope.
    #[error("malformed document: {0}")]
    Malformed(String),

    /// Paging reports observations but the entry list is absent.
    #[error("envelope reports {total} records but contains none")]
    MissingEntries { total: u32 },

    /// The service answered with its own error payload instead of data.
    #[error("world bank api error {id} ({key}): {message}")]
    Api {
        id: String,
        key: String,
        message: String,
    },

    #[error("year {0} cannot be resolved to a calendar date")]
    YearOutOfRange(i32),
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("GET {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GET {url}: request failed with HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failure reported by a caller-supplied transport.
    #[error("GET {url}: {message}")]
    Other { url: String, message: String },
}
