use crate::models::{Instant, Response};
use serde::{Deserialize, Serialize};

/// Summary statistics for one series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    /// Earliest and latest observation by date, whatever order the source used.
    pub first: Option<Instant>,
    pub last: Option<Instant>,
}

/// Compute statistics over the history of `resp`.
pub fn summary(resp: &Response) -> Summary {
    let mut vals: Vec<i64> = resp.history.iter().map(|i| i.value).collect();
    vals.sort_unstable();
    let count = vals.len();
    let min = vals.first().copied();
    let max = vals.last().copied();
    let mean = if count > 0 {
        Some(vals.iter().map(|v| *v as f64).sum::<f64>() / count as f64)
    } else {
        None
    };
    let median = if count == 0 {
        None
    } else if count % 2 == 1 {
        Some(vals[count / 2] as f64)
    } else {
        Some((vals[count / 2 - 1] as f64 + vals[count / 2] as f64) / 2.0)
    };
    let first = resp.history.iter().min_by_key(|i| i.date).copied();
    let last = resp.history.iter().max_by_key(|i| i.date).copied();
    Summary {
        count,
        min,
        max,
        mean,
        median,
        first,
        last,
    }
}
