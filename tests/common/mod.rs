#![allow(dead_code)]

use mailgun_api::MailgunClient;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "key-test";
pub const DOMAIN: &str = "example.com";
/// base64("api:key-test")
pub const AUTH: &str = "Basic YXBpOmtleS10ZXN0";

pub fn base_url(server: &MockServer) -> String {
    format!("{}/v2", server.uri())
}

pub fn api_path(method: &str) -> String {
    format!("/v2/{}/{}", DOMAIN, method)
}

/// 挂载 `log` 校验接口
pub async fn mount_log(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(api_path("log")))
        .and(header("Authorization", AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_count": 0,
            "items": []
        })))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn connected_client(server: &MockServer) -> MailgunClient {
    mount_log(server).await;
    MailgunClient::connect_with_base(&base_url(server), API_KEY, DOMAIN, 5)
        .await
        .unwrap()
}
