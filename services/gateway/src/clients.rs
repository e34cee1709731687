// Outbound HTTP client for resource fetches
use std::collections::HashMap;
use std::time::Duration;

use common::errors::AppError;

use crate::domain::HttpResponsePackage;

/// Wraps a shared `reqwest::Client` so connections pool across requests.
/// The timeout is fixed at construction and covers the whole request; there
/// are no retries and no way to cancel a fetch once it is in flight.
#[derive(Clone)]
pub struct FetchClient {
    client: reqwest::Client,
}

impl FetchClient {
    pub fn new(timeout_secs: u64) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self { client })
    }

    /// Issues a single GET and buffers the full body as text.
    ///
    /// Non-2xx statuses are not errors here: the upstream status is preserved
    /// in the package and the caller decides what to make of it. Only
    /// transport-level failures (DNS, connect, TLS, timeout) surface as
    /// `AppError::Fetch`. Redirects follow the client default (up to 10 hops);
    /// the package's `url` still echoes the requested URL.
    pub async fn fetch(&self, url: &str) -> Result<HttpResponsePackage, AppError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Fetch(e.to_string()))?;

        let status_code = response.status().as_u16();

        // One value per header name; duplicates collapse last-wins.
        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            headers.insert(
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).to_string(),
            );
        }

        let content = response
            .text()
            .await
            .map_err(|e| AppError::Fetch(e.to_string()))?;

        Ok(HttpResponsePackage {
            status_code,
            headers,
            content,
            url: url.to_string(),
        })
    }
}
