use crate::Result;
use crate::client::MailgunClient;
use crate::http::{Params, ResponseBody};

impl MailgunClient {
    pub async fn users_ping(&self) -> Result<ResponseBody> {
        self.post("users/ping", Params::new()).await
    }

    pub async fn users_info(&self) -> Result<ResponseBody> {
        self.post("users/info", Params::new()).await
    }

    pub async fn users_senders(&self) -> Result<ResponseBody> {
        self.post("users/senders", Params::new()).await
    }
}
