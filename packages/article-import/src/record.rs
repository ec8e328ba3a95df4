use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

/// Format of the `timestamp` column, e.g. `2024-03-01 09:30:00`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of the articles CSV.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArticleRecord {
    pub author: String,
    /// Product name, empty when the article is not about a product.
    #[serde(default)]
    pub product: String,
    pub title: String,
    pub timestamp: String,
}

impl ArticleRecord {
    pub fn product(&self) -> Option<&str> {
        (!self.product.is_empty()).then_some(self.product.as_str())
    }
}

/// Parse a timestamp in [`TIMESTAMP_FORMAT`]. The value carries no zone and
/// is taken as UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map(|naive| naive.and_utc())
}
