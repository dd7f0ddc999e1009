//! HTTP transport backed by `reqwest`.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use std::time::Duration;

use super::{ActionRequest, ActionResponse, RequestBody, Transport, TransportError};
use crate::config::HttpConfig;

/// HTTP transport with a per-request timeout.
pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a transport from the `[http]` configuration section.
    pub fn new(config: &HttpConfig) -> Result<Self, TransportError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let mut builder = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.clone());
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn map_error(&self, error: reqwest::Error) -> TransportError {
        if error.is_timeout() {
            TransportError::Timeout(self.timeout)
        } else if error.is_builder() {
            TransportError::InvalidRequest(error.to_string())
        } else {
            TransportError::Network(error.to_string())
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ActionRequest) -> Result<ActionResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method.clone(), &request.url)
            .header(ACCEPT, request.expects.accept_header());

        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Form(fields) if request.method == Method::GET => builder.query(fields),
            RequestBody::Form(fields) => builder.form(fields),
        };

        log::debug!("{} {}", request.method, request.url);
        let response = builder.send().await.map_err(|e| self.map_error(e))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await.map_err(|e| self.map_error(e))?.to_vec();
        log::debug!("{} {} -> {} ({} bytes)", request.method, request.url, status, body.len());

        Ok(ActionResponse {
            status,
            content_type,
            body,
        })
    }
}
