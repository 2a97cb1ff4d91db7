//! Single-exchange HTTPS transport under the NVP layer.

use std::time::Duration;

use url::Url;

use crate::{
    errors::{Error, Result},
    nvp::{NvpForm, NvpResponse},
};

/// HTTP method for one NVP exchange.
///
/// `Post` carries the parameters as a urlencoded body; `Get` appends them
/// to the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// One-shot NVP transport.
///
/// Idle connections are not kept around, so each exchange runs on its own
/// connection. No retry or backoff; one request maps to one outcome.
#[derive(Debug, Clone)]
pub struct NvpTransport {
    client: reqwest::Client,
}

impl NvpTransport {
    /// Creates a transport whose requests all carry the given timeout.
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .timeout(timeout)
            .build()
            .expect("Failed to create NVP HTTP client");
        NvpTransport { client }
    }

    /// Sends one request and decodes the NVP body.
    ///
    /// Any status above 200 is a failure; the raw body text rides along in
    /// the error so callers can inspect what the gateway actually said.
    pub async fn send(&self, url: &Url, method: HttpMethod, form: &NvpForm) -> Result<NvpResponse> {
        let request = match method {
            HttpMethod::Post => self.client.post(url.clone()).form(form),
            HttpMethod::Get => self
                .client
                .get(url.clone())
                .query(form)
                .header(reqwest::header::CONTENT_TYPE, "text/plain"),
        };

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        #[cfg(feature = "tracing")]
        tracing::debug!("NVP exchange done: status={} body_bytes={}", status, body.len());

        if status > 200 {
            return Err(Error::Status { status, body });
        }

        NvpResponse::parse(&body)
    }
}
