//! Retrieval of numbered payout reports from the remote report service.

use crate::error::FetchError;
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;

/// Base URL of the deployed report service. Report N lives at `{base}/{N}`.
pub const DEFAULT_BASE_URL: &str = "https://codetest.stim.se/payouts";

/// The report service rejects non-browser user agents.
const BROWSER_USER_AGENT: &str = "Mozilla/Firefox";

/// A source of numbered payout reports.
///
/// Abstracts the network away from the aggregation core so that it can be
/// driven by an in-memory source in tests. Fetch failures are a distinct
/// error kind from parse failures and are never conflated with them.
pub trait ReportSource {
    /// Retrieves the raw text of report number `index`.
    fn fetch(&self, index: u32) -> Result<String, FetchError>;
}

/// HTTP-backed report source.
pub struct HttpReportSource {
    client: Client,
    base_url: String,
}

impl HttpReportSource {
    /// Creates a source pointing at the deployed report service.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a source with a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        HttpReportSource {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for HttpReportSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSource for HttpReportSource {
    fn fetch(&self, index: u32) -> Result<String, FetchError> {
        let url = format!("{}/{}", self.base_url, index);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .map_err(|source| FetchError::Request { index, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { index, status });
        }

        response
            .text()
            .map_err(|source| FetchError::Request { index, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_url_is_base_slash_index() {
        let source = HttpReportSource::with_base_url("http://localhost:1/reports");
        // Port 1 is unroutable; the point is that the failure is a Request
        // error carrying the index, not a panic or a status error.
        let err = source.fetch(7).unwrap_err();
        assert!(matches!(err, FetchError::Request { index: 7, .. }));
    }
}
