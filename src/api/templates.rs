use crate::Result;
use crate::client::MailgunClient;
use crate::http::{Params, ResponseBody};

impl MailgunClient {
    pub async fn templates_add(&self, name: &str, code: &str) -> Result<ResponseBody> {
        let params = Params::new().with("name", name).with("code", code);
        self.post("templates/add", params).await
    }

    pub async fn templates_update(&self, name: &str, code: &str) -> Result<ResponseBody> {
        let params = Params::new().with("name", name).with("code", code);
        self.post("templates/update", params).await
    }

    pub async fn templates_delete(&self, name: &str) -> Result<ResponseBody> {
        self.post("templates/delete", Params::new().with("name", name))
            .await
    }

    pub async fn templates_info(&self, name: &str) -> Result<ResponseBody> {
        self.post("templates/info", Params::new().with("name", name))
            .await
    }

    pub async fn templates_list(&self) -> Result<ResponseBody> {
        self.post("templates/list", Params::new()).await
    }

    pub async fn templates_time_series(&self, name: &str) -> Result<ResponseBody> {
        self.post("templates/time-series", Params::new().with("name", name))
            .await
    }
}
