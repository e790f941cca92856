use std::time::Duration;

use tracing::debug;

use crate::Result;
use crate::http::request::ApiRequest;
use crate::http::response::Response;
use crate::http::types::Method;

/// 默认超时 (秒)
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

#[derive(Clone)]
pub struct Transport {
    inner: reqwest::Client,
}

impl Transport {
    pub fn new(timeout: Duration) -> Result<Self> {
        Ok(Self {
            inner: reqwest::Client::builder().timeout(timeout).build()?,
        })
    }

    pub async fn execute(&self, request: ApiRequest) -> Result<Response> {
        let url = reqwest::Url::parse(&request.url)?;
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };
        let mut req = self.inner.request(method, url);
        for (key, value) in &request.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            req = req.body(body);
        }

        let start = std::time::Instant::now();
        let response = req.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(
            method = %request.method,
            status,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "request finished"
        );

        Ok(Response::new(status, body))
    }
}
