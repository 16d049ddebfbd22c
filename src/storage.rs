use crate::models::Response;
use anyhow::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save a series as CSV with header `provider,date,value`.
pub fn save_csv<P: AsRef<Path>>(resp: &Response, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("provider", "date", "value"))?;
    for i in &resp.history {
        wtr.serialize((
            resp.provider.as_str(),
            i.date.format("%Y-%m-%d").to_string(),
            i.value,
        ))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save a series as pretty JSON.
pub fn save_json<P: AsRef<Path>>(resp: &Response, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(resp)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
