use crate::Result;
use crate::client::MailgunClient;
use crate::http::{Params, ResponseBody};

/// events 以逗号拼接成单个字段
fn webhook_params(url: &str, events: &[&str]) -> Params {
    Params::new()
        .with("url", url)
        .with("events", events.join(","))
}

impl MailgunClient {
    pub async fn webhooks_add(&self, url: &str, events: &[&str]) -> Result<ResponseBody> {
        self.post("webhooks/add", webhook_params(url, events)).await
    }

    pub async fn webhooks_update(&self, url: &str, events: &[&str]) -> Result<ResponseBody> {
        self.post("webhooks/update", webhook_params(url, events))
            .await
    }

    pub async fn webhooks_delete(&self, id: &str) -> Result<ResponseBody> {
        self.post("webhooks/delete", Params::new().with("id", id))
            .await
    }

    pub async fn webhooks_info(&self, id: &str) -> Result<ResponseBody> {
        self.post("webhooks/info", Params::new().with("id", id))
            .await
    }

    pub async fn webhooks_list(&self) -> Result<ResponseBody> {
        self.post("webhooks/list", Params::new()).await
    }
}
