//! Time-bucketed chart series.

use serde::{Deserialize, Serialize};

/// One resolution tier of a chart: parallel label and value sequences.
///
/// `labels.len() == data.len()` always holds; deserialization rejects payloads
/// that break it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBucket")]
pub struct ChartBucket {
    labels: Vec<String>,
    data: Vec<f64>,
}

#[derive(Deserialize)]
struct RawBucket {
    #[serde(default)]
    labels: Vec<String>,
    #[serde(default)]
    data: Vec<f64>,
}

impl TryFrom<RawBucket> for ChartBucket {
    type Error = String;

    fn try_from(raw: RawBucket) -> Result<Self, Self::Error> {
        Self::new(raw.labels, raw.data)
    }
}

impl ChartBucket {
    /// Builds a bucket, rejecting label/value sequences of different length.
    pub fn new(labels: Vec<String>, data: Vec<f64>) -> Result<Self, String> {
        if labels.len() != data.len() {
            return Err(format!(
                "chart bucket has {} labels but {} values",
                labels.len(),
                data.len()
            ));
        }
        Ok(Self { labels, data })
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates `(label, value)` pairs in series order.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.data.iter().copied())
    }

    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}

/// The same metric pre-aggregated by the service at daily and monthly
/// granularity. A bucket missing from the payload decodes as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    #[serde(default)]
    pub daily: ChartBucket,
    #[serde(default)]
    pub monthly: ChartBucket,
}
