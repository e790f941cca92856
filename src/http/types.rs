use std::fmt;
use std::str::FromStr;

use crate::{MailgunError, Result};
use serde::{Deserialize, Serialize};

/// API 支持的请求方式，其余动词一律拒绝
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Method {
    Get,
    Post,
}

impl FromStr for Method {
    type Err = MailgunError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            _ => Err(MailgunError::UnknownRequestType(s.to_string())),
        }
    }
}

impl Method {
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 响应格式 (json, php, xml, yaml)
///
/// 只有 json 会被解码，其余格式原样返回
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Other(String),
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            other => OutputFormat::Other(other.to_string()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Other(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_methods() {
        assert_eq!(Method::parse("GET").unwrap(), Method::Get);
        assert_eq!(Method::parse("POST").unwrap(), Method::Post);
    }

    #[test]
    fn test_parse_unknown_method() {
        for verb in ["PUT", "DELETE", "get", ""] {
            match Method::parse(verb) {
                Err(MailgunError::UnknownRequestType(v)) => assert_eq!(v, verb),
                other => panic!("Expected UnknownRequestType, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_output_format() {
        assert_eq!(OutputFormat::from("json"), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from("php"),
            OutputFormat::Other("php".to_string())
        );
        // 大小写敏感
        assert_eq!(
            OutputFormat::from("JSON"),
            OutputFormat::Other("JSON".to_string())
        );
        assert_eq!(OutputFormat::default().to_string(), "json");
    }
}
