use crate::Result;
use crate::client::MailgunClient;
use crate::http::{Params, ResponseBody};

impl MailgunClient {
    pub async fn urls_list(&self) -> Result<ResponseBody> {
        self.post("urls/list", Params::new()).await
    }

    pub async fn urls_time_series(&self, url: &str) -> Result<ResponseBody> {
        self.post("urls/time-series", Params::new().with("url", url))
            .await
    }

    pub async fn urls_search(&self, q: &str) -> Result<ResponseBody> {
        self.post("urls/search", Params::new().with("q", q)).await
    }
}
