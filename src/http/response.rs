use serde_json::Value;

use crate::http::types::OutputFormat;
use crate::{MailgunError, Result};

pub struct Response {
    pub status: u16,
    pub body: String,
}

/// 解码后的响应体
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Raw(String),
}

impl ResponseBody {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(v) => Some(v),
            ResponseBody::Raw(_) => None,
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            ResponseBody::Json(v) => Some(v),
            ResponseBody::Raw(_) => None,
        }
    }

    /// JSON 对象中的某个字段
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_json().and_then(|v| v.get(key))
    }
}

impl Response {
    pub fn new(status: u16, body: String) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// 200 时按格式解码；其他状态码统一转换为 `MailgunError::Api`
    pub fn decode(self, output: &OutputFormat, url: &str) -> Result<ResponseBody> {
        if !self.is_success() {
            return Err(MailgunError::Api {
                status: self.status,
                url: url.to_string(),
                message: extract_message(&self.body),
            });
        }

        match output {
            OutputFormat::Json => Ok(ResponseBody::Json(serde_json::from_str(&self.body)?)),
            OutputFormat::Other(_) => Ok(ResponseBody::Raw(self.body)),
        }
    }
}

/// 取出错误响应中的 `message` 字段，取不到时返回空串
fn extract_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const URL: &str = "https://api.mailgun.net/v2/example.com/tags/list";

    #[test]
    fn test_decode_json() {
        let resp = Response::new(200, r#"{"total_count": 2, "items": []}"#.to_string());
        let body = resp.decode(&OutputFormat::Json, URL).unwrap();
        assert_eq!(body, ResponseBody::Json(json!({"total_count": 2, "items": []})));
        assert_eq!(body.get("total_count"), Some(&json!(2)));
    }

    #[test]
    fn test_decode_raw_passthrough() {
        let raw = "<xml><total_count>2</total_count></xml>";
        let resp = Response::new(200, raw.to_string());
        let body = resp
            .decode(&OutputFormat::Other("xml".to_string()), URL)
            .unwrap();
        assert_eq!(body, ResponseBody::Raw(raw.to_string()));
        assert!(body.as_json().is_none());
    }

    #[test]
    fn test_decode_invalid_json() {
        let resp = Response::new(200, "not json".to_string());
        let err = resp.decode(&OutputFormat::Json, URL).unwrap_err();
        assert!(matches!(err, MailgunError::JsonError(_)));
    }

    #[test]
    fn test_non_200_with_message() {
        for status in [201, 400, 401, 404, 500] {
            let resp = Response::new(status, r#"{"message": "Domain not found"}"#.to_string());
            let err = resp.decode(&OutputFormat::Json, URL).unwrap_err();
            match &err {
                MailgunError::Api {
                    status: s,
                    url,
                    message,
                } => {
                    assert_eq!(*s, status);
                    assert_eq!(url, URL);
                    assert_eq!(message, "Domain not found");
                }
                other => panic!("Expected Api error, got {:?}", other),
            }
            assert_eq!(
                err.to_string(),
                format!("Receiving {} for url {}: Domain not found", status, URL)
            );
        }
    }

    #[test]
    fn test_non_200_without_message() {
        let resp = Response::new(502, "Bad Gateway".to_string());
        let err = resp
            .decode(&OutputFormat::Other("xml".to_string()), URL)
            .unwrap_err();
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.to_string(), format!("Receiving 502 for url {}: ", URL));
    }
}
