use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::http::client::Transport;
use crate::http::multipart::DEFAULT_BOUNDARY;
use crate::http::{ApiRequest, Method, OutputFormat, Params, ResponseBody};
use crate::{MailgunError, Result};

/// Mailgun API 客户端
///
/// 构造时发送一次 `log` 请求校验 API key，之后不可变
#[derive(Clone)]
pub struct MailgunClient {
    api_key: String,
    endpoint: String,
    timeout: Duration,
    transport: Transport,
}

impl std::fmt::Debug for MailgunClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailgunClient")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl MailgunClient {
    pub async fn connect(api_key: &str, domain: &str, timeout_secs: u64) -> Result<Self> {
        Self::connect_with_base(DEFAULT_BASE_URL, api_key, domain, timeout_secs).await
    }

    /// 使用自定义 base URL 连接，endpoint 为 `<base_url>/<domain>`
    pub async fn connect_with_base(
        base_url: &str,
        api_key: &str,
        domain: &str,
        timeout_secs: u64,
    ) -> Result<Self> {
        if api_key.is_empty() {
            return Err(MailgunError::InvalidApiKey);
        }
        if domain.is_empty() {
            return Err(MailgunError::InvalidDomain);
        }

        // 提前校验 base URL，避免每次请求才发现格式错误
        url::Url::parse(base_url)?;

        let timeout = Duration::from_secs(timeout_secs);
        let client = Self {
            api_key: api_key.to_string(),
            endpoint: format!("{}/{}", base_url.trim_end_matches('/'), domain),
            timeout,
            transport: Transport::new(timeout)?,
        };

        let response = client
            .request("log", &Params::new(), Method::Get, &OutputFormat::Json)
            .await
            .inspect_err(|e| warn!(error = %e, "failed to validate API key"))?;
        // null 与缺失同样视为 key 无效
        if response.get("total_count").filter(|v| !v.is_null()).is_none() {
            warn!(endpoint = %client.endpoint, "log response has no total_count");
            return Err(MailgunError::InvalidApiKey);
        }

        info!(endpoint = %client.endpoint, "Mailgun client connected");
        Ok(client)
    }

    pub async fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::connect_with_base(&config.base_url, &config.api_key, &config.domain, config.timeout)
            .await
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// 构建请求但不发送
    pub fn build_request(&self, method: &str, params: &Params, http: Method) -> Result<ApiRequest> {
        ApiRequest::build(
            &self.endpoint,
            method,
            params,
            http,
            &self.api_key,
            DEFAULT_BOUNDARY,
        )
    }

    /// 所有 API 调用最终都走这里
    pub async fn request(
        &self,
        method: &str,
        params: &Params,
        http: Method,
        output: &OutputFormat,
    ) -> Result<ResponseBody> {
        let request = self.build_request(method, params, http)?;
        let url = request.url.clone();
        debug!(method, http = %http, fields = params.len(), "sending request");

        let response = self.transport.execute(request).await?;
        if !response.is_success() {
            warn!(status = response.status, method, "API returned an error status");
        }
        response.decode(output, &url)
    }

    /// 字符串形式的 HTTP 动词，非 GET/POST 时在发送前直接失败
    pub async fn request_with(
        &self,
        method: &str,
        params: &Params,
        http: &str,
        output: &str,
    ) -> Result<ResponseBody> {
        let http = Method::parse(http)?;
        self.request(method, params, http, &OutputFormat::from(output))
            .await
    }

    /// 默认形式：POST + json
    pub(crate) async fn post(&self, method: &str, params: Params) -> Result<ResponseBody> {
        self.request(method, &params, Method::Post, &OutputFormat::Json)
            .await
    }
}
