//! Response decoding and normalization for the World Bank XML payload.
//!
//! A successful response looks like:
//!
//! ```xml
//! <wb:data page="1" pages="1" per_page="1000" total="3" lastupdated="2024-06-28"
//!          xmlns:wb="http://www.worldbank.org">
//!   <wb:data>
//!     <wb:indicator id="SP.POP.TOTL">Population, total</wb:indicator>
//!     <wb:country id="IT">Italy</wb:country>
//!     <wb:countryiso3code>ITA</wb:countryiso3code>
//!     <wb:date>2012</wb:date>
//!     <wb:value>59539717</wb:value>
//!     <wb:unit />
//!     <wb:obs_status />
//!     <wb:decimal>0</wb:decimal>
//!   </wb:data>
//!   ...
//! </wb:data>
//! ```
//!
//! Rejected requests come back as `<wb:error><wb:message id=".." key="..">..</wb:message></wb:error>`.

use crate::error::DecodeError;
use crate::models::{Instant, WireEnvelope, WireEntry, WireError};
use chrono::{DateTime, TimeZone, Utc};
use quick_xml::Reader;
use quick_xml::events::Event;

/// Parse a response body into the wire envelope.
///
/// All-or-nothing: ill-formed markup, content after the root element or a
/// single bad scalar fails the whole body. An envelope without entries is
/// accepted only when its `total` says there is nothing to report.
pub fn decode(body: &[u8]) -> Result<WireEnvelope, DecodeError> {
    let body = body.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(body);
    match root_element(body)?.as_str() {
        "data" => {
            let envelope: WireEnvelope = quick_xml::de::from_reader(body)?;
            if envelope.entries.is_empty() && envelope.total > 0 {
                return Err(DecodeError::MissingEntries {
                    total: envelope.total,
                });
            }
            Ok(envelope)
        }
        "error" => {
            let api: WireError = quick_xml::de::from_reader(body)?;
            Err(DecodeError::Api {
                id: api.message.id,
                key: api.message.key,
                message: api.message.text.trim().to_string(),
            })
        }
        other => Err(DecodeError::Malformed(format!(
            "unexpected root element <{other}>"
        ))),
    }
}

/// Walk the whole document once and return the local name of its single
/// root element.
fn root_element(body: &[u8]) -> Result<String, DecodeError> {
    let mut reader = Reader::from_reader(body);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut root: Option<String> = None;
    let mut claim = |name: &[u8]| {
        if root.is_some() {
            return Err(DecodeError::Malformed("more than one root element".into()));
        }
        root = Some(String::from_utf8_lossy(name).into_owned());
        Ok(())
    };

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(quick_xml::DeError::from)?;
        match event {
            Event::Start(e) => {
                if depth == 0 {
                    claim(e.local_name().as_ref())?;
                }
                depth += 1;
            }
            Event::Empty(e) if depth == 0 => claim(e.local_name().as_ref())?,
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Text(_) | Event::CData(_) if depth == 0 => {
                return Err(DecodeError::Malformed("text outside the root element".into()));
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if depth > 0 {
        return Err(DecodeError::Malformed("document ends inside an element".into()));
    }
    root.ok_or_else(|| DecodeError::Malformed("no root element".into()))
}

/// Map wire entries to observations, one per entry, in source order.
///
/// Values are copied as-is: `decimal` is not applied and an unreported value
/// (empty `<wb:value />`) is indistinguishable from a real zero.
pub fn normalize(envelope: WireEnvelope) -> Result<Vec<Instant>, DecodeError> {
    envelope.entries.iter().map(to_instant).collect()
}

fn to_instant(entry: &WireEntry) -> Result<Instant, DecodeError> {
    Ok(Instant {
        date: year_end(entry.date)?,
        value: entry.value,
    })
}

/// Dec-31 of `year`, 00:00:00 UTC.
pub fn year_end(year: i32) -> Result<DateTime<Utc>, DecodeError> {
    Utc.with_ymd_and_hms(year, 12, 31, 0, 0, 0)
        .single()
        .ok_or(DecodeError::YearOutOfRange(year))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_end_is_utc_midnight_on_dec_31() {
        let d = year_end(2011).unwrap();
        assert_eq!(d.to_rfc3339(), "2011-12-31T00:00:00+00:00");
    }

    #[test]
    fn year_end_rejects_unrepresentable_years() {
        assert!(matches!(
            year_end(i32::MAX),
            Err(DecodeError::YearOutOfRange(i32::MAX))
        ));
    }

    #[test]
    fn normalize_keeps_source_order() {
        let entry = |date, value| WireEntry {
            date,
            value,
            ..Default::default()
        };
        let env = WireEnvelope {
            entries: vec![entry(2012, 3), entry(2010, 1), entry(2011, 0)],
            ..Default::default()
        };
        let got = normalize(env).unwrap();
        let years: Vec<String> = got.iter().map(|i| i.date.format("%Y").to_string()).collect();
        assert_eq!(years, ["2012", "2010", "2011"]);
        assert_eq!(got[2].value, 0);
    }
}
