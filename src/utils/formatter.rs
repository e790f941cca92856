use crate::http::ResponseBody;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Table};
use serde_json::Value;

pub enum ResponseFormat {
    Pretty,
    Table,
}

pub struct ResponseFormatter {
    format: ResponseFormat,
    color: bool,
}

impl ResponseFormatter {
    pub fn new(format: ResponseFormat) -> Self {
        Self {
            format,
            color: true,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn format(&self, body: &ResponseBody) -> String {
        match body {
            ResponseBody::Raw(raw) => raw.clone(),
            ResponseBody::Json(value) => match self.format {
                ResponseFormat::Table => self
                    .format_table(value)
                    .unwrap_or_else(|| self.format_pretty(value)),
                ResponseFormat::Pretty => self.format_pretty(value),
            },
        }
    }

    pub fn format_error(&self, error: &str) -> String {
        let line = format!("Error: {}", error);
        if self.color {
            line.red().bold().to_string()
        } else {
            line
        }
    }

    fn format_pretty(&self, value: &Value) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
    }

    /// 把 `items` 数组渲染为表格，列为所有对象 key 的并集
    /// 没有 `items` 或其中有非对象元素时返回 None
    fn format_table(&self, value: &Value) -> Option<String> {
        let items = value.get("items")?.as_array()?;
        let mut columns: Vec<String> = Vec::new();
        for item in items {
            for key in item.as_object()?.keys() {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        if self.color {
            table.set_header(
                columns
                    .iter()
                    .map(|c| Cell::new(c).add_attribute(Attribute::Bold)),
            );
        } else {
            table.set_header(&columns);
        }

        for item in items {
            table.add_row(columns.iter().map(|c| match item.get(c) {
                Some(Value::String(s)) => Cell::new(s),
                Some(Value::Null) | None => Cell::new(""),
                Some(other) => Cell::new(other.to_string()),
            }));
        }

        let mut output = vec![table.to_string()];
        if let Some(total) = value.get("total_count") {
            let line = format!("total_count: {}", total);
            output.push(if self.color {
                line.cyan().to_string()
            } else {
                line
            });
        }
        Some(output.join("\n"))
    }
}
