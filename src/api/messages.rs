use chrono::NaiveDate;
use serde_json::Value;

use crate::Result;
use crate::client::MailgunClient;
use crate::http::{Params, ResponseBody};

/// 默认返回条数
const DEFAULT_SEARCH_LIMIT: u32 = 100;

/// `messages/search` 的查询条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSearch {
    pub query: String,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub tags: Vec<String>,
    pub senders: Vec<String>,
    pub limit: u32,
}

impl MessageSearch {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            date_from: None,
            date_to: None,
            tags: Vec::new(),
            senders: Vec::new(),
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    pub fn date_from(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    pub fn date_to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn senders<I, S>(mut self, senders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.senders = senders.into_iter().map(Into::into).collect();
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// 字段顺序固定：query, date_from, date_to, tags, senders, limit
    pub fn to_params(&self) -> Params {
        let format_date = |d: Option<NaiveDate>| {
            d.map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        };

        Params::new()
            .with("query", self.query.as_str())
            .with("date_from", format_date(self.date_from))
            .with("date_to", format_date(self.date_to))
            .with("tags", self.tags.join(","))
            .with("senders", self.senders.join(","))
            .with("limit", self.limit.to_string())
    }
}

impl MailgunClient {
    pub async fn messages_search(&self, search: &MessageSearch) -> Result<ResponseBody> {
        self.post("messages/search", search.to_params()).await
    }

    /// 发送邮件，参数原样提交；字段名含 `attachment` 的值会作为文件上传
    pub async fn messages_send(&self, message: Params) -> Result<ResponseBody> {
        self.post("messages", message).await
    }

    /// 结构化字段序列化为 JSON 文本后提交
    pub async fn messages_send_template(
        &self,
        template_name: &str,
        template_content: &Value,
        message: &Value,
    ) -> Result<ResponseBody> {
        let params = Params::new()
            .with("template_name", template_name)
            .with("template_content", serde_json::to_string(template_content)?)
            .with("message", serde_json::to_string(message)?);
        self.post("messages/send-template", params).await
    }
}
