use crate::Result;
use crate::client::MailgunClient;
use crate::http::{Params, ResponseBody};

impl MailgunClient {
    pub async fn tags_list(&self) -> Result<ResponseBody> {
        self.post("tags/list", Params::new()).await
    }

    pub async fn tags_info(&self, tag: &str) -> Result<ResponseBody> {
        self.post("tags/info", Params::new().with("tag", tag)).await
    }

    pub async fn tags_time_series(&self, tag: &str) -> Result<ResponseBody> {
        self.post("tags/time-series", Params::new().with("tag", tag))
            .await
    }

    /// 所有标签汇总的时间序列
    pub async fn tags_all_time_series(&self) -> Result<ResponseBody> {
        self.post("tags/all-time-series", Params::new()).await
    }
}
