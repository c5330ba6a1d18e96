//! Classifier served over HTTP
//!
//! Sends `{"text": "<message>"}` to a configured endpoint and expects a
//! [`Classification`] in its native JSON shape back.

use crate::classifier::Classifier;
use chatsonar_core::{Classification, Error, Result};
use serde::Serialize;
use std::time::Duration;

#[derive(Serialize)]
struct PingRequest<'a> {
    text: &'a str,
}

/// HTTP-backed classifier
pub struct RemoteClassifier {
    name: String,
    endpoint: String,
    client: reqwest::Client,
}

impl RemoteClassifier {
    /// Create a remote classifier. `timeout` of `None` waits indefinitely.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let endpoint = endpoint.into();
        if endpoint.trim().is_empty() {
            return Err(Error::config("remote classifier endpoint is empty"));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::classifier(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            name: "remote".to_string(),
            endpoint,
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl Classifier for RemoteClassifier {
    async fn classify(&self, text: &str) -> Result<Classification> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&PingRequest { text })
            .send()
            .await
            .map_err(|e| Error::classifier(format!("request to {} failed: {}", self.endpoint, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::classifier(format!(
                "{} returned {}: {}",
                self.endpoint, status, body
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::classifier(format!("failed to read response body: {}", e)))?;

        serde_json::from_slice(&body)
            .map_err(|e| Error::classifier(format!("malformed classifier response: {}", e)))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
