use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailgunError {
    /// 服务端返回非 200 状态
    #[error("Receiving {status} for url {url}: {message}")]
    Api {
        status: u16,
        url: String,
        message: String,
    },

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Invalid domain")]
    InvalidDomain,

    #[error("Unknown request type: {0}")]
    UnknownRequestType(String),

    #[error("Error creating the attachment structure: {0}")]
    Attachment(String),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("HTTP 请求失败: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON 解析错误: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("URL 解析错误: {0}")]
    UrlParseError(#[from] url::ParseError),
}

impl MailgunError {
    /// 非 200 响应时的状态码
    pub fn status(&self) -> Option<u16> {
        match self {
            MailgunError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for mailgun-api crate
pub type Result<T> = std::result::Result<T, MailgunError>;
