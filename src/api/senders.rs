use crate::Result;
use crate::client::MailgunClient;
use crate::http::{Params, ResponseBody};

impl MailgunClient {
    pub async fn senders_domains(&self) -> Result<ResponseBody> {
        self.post("senders/domains", Params::new()).await
    }

    pub async fn senders_list(&self) -> Result<ResponseBody> {
        self.post("senders/list", Params::new()).await
    }

    /// 查询发件人信息
    pub async fn senders_info(&self, email: &str) -> Result<ResponseBody> {
        self.post("senders/info", Params::new().with("address", email))
            .await
    }

    pub async fn senders_time_series(&self, email: &str) -> Result<ResponseBody> {
        self.post("senders/time-series", Params::new().with("address", email))
            .await
    }
}
