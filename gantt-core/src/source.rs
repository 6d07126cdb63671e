//! Where chart rows come from.

use crate::error::{ChartError, Result};

/// Endpoint serving the chart rows as a JSON array.
pub const DEFAULT_CHARTS_URL: &str = "https://my-db-chart.herokuapp.com/charts";

/// Remote chart data source. Filtering is applied on the date axis, so the
/// request never carries the date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSource {
    pub url: String,
}

impl ChartSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Classify an HTTP status: 2xx passes, anything else is a fetch error.
    pub fn check_status(&self, status: u16) -> Result<()> {
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(ChartError::HttpStatus {
                status,
                url: self.url.clone(),
            })
        }
    }
}

impl Default for ChartSource {
    fn default() -> Self {
        Self::new(DEFAULT_CHARTS_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_default_url() {
        assert_eq!(ChartSource::default().url, DEFAULT_CHARTS_URL);
    }

    #[test]
    fn test_check_status() {
        let source = ChartSource::default();
        assert!(source.check_status(200).is_ok());
        assert!(source.check_status(204).is_ok());

        let err = source.check_status(404).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Fetch);
        assert_eq!(
            err,
            ChartError::HttpStatus {
                status: 404,
                url: DEFAULT_CHARTS_URL.to_string()
            }
        );
        assert!(source.check_status(301).is_err());
        assert!(source.check_status(500).is_err());
    }
}
