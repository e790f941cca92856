use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use url::form_urlencoded;

use crate::Result;
use crate::http::multipart;
use crate::http::params::Params;
use crate::http::types::Method;

/// 构建完成、尚未发送的请求
///
/// 纯数据，不涉及网络，便于在测试中直接断言 URL / header / body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// 组装 `<endpoint>/<method>` 请求
    ///
    /// GET 且参数非空时，把编码后的 body 经 percent-encoding 后拼在 URL 的 `?` 之后，
    /// 服务端解码即得到原样的 multipart 文本；POST 则作为请求体发送
    pub fn build(
        endpoint: &str,
        api_method: &str,
        params: &Params,
        http: Method,
        api_key: &str,
        boundary: &str,
    ) -> Result<Self> {
        let mut url = format!("{}/{}", endpoint, api_method);
        let encoded = multipart::encode(boundary, params)?;

        let headers = vec![
            ("Authorization".to_string(), basic_auth(api_key)),
            (
                "Content-Type".to_string(),
                format!("multipart/form-data; boundary={}", boundary),
            ),
        ];

        let body = match http {
            Method::Get => {
                if !params.is_empty() {
                    url.push('?');
                    url.extend(form_urlencoded::byte_serialize(&encoded));
                }
                None
            }
            Method::Post => Some(encoded),
        };

        Ok(Self {
            method: http,
            url,
            headers,
            body,
        })
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// `Basic base64("api:<key>")`
pub fn basic_auth(api_key: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("api:{}", api_key)))
}
