//! Blocking reqwest implementation of the HTTP collaborator.

use super::provider::{HttpFetcher, TransportError};
use crate::config::HttpConfig;
use std::time::Duration;

/// HTTP collaborator backed by `reqwest::blocking`.
///
/// One GET per call. Non-success statuses are errors. The response, and with
/// it the pooled connection, is dropped on every return path.
pub struct ReqwestFetcher {
    client: reqwest::blocking::Client,
}

impl ReqwestFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

impl HttpFetcher for ReqwestFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        tracing::debug!(url, "GET");

        let resp = self.client.get(url).send().map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                TransportError::NetworkUnreachable(e.to_string())
            } else {
                TransportError::Client(e.to_string())
            }
        })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url, "archive returned non-success status");
            return Err(TransportError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp
            .bytes()
            .map_err(|e| TransportError::Body(e.to_string()))?;
        Ok(body.to_vec())
    }
}
