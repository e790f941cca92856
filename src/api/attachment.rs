use std::fs;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

use crate::{MailgunError, Result};

/// base64 内容每行字符数
const LINE_WIDTH: usize = 76;

/// 允许的附件类型前缀
pub const VALID_CONTENT_TYPES: [&str; 3] = ["image/", "text/", "application/pdf"];

/// 附件结构 `{type, name, content}`，content 为按行切分的 base64
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    #[serde(rename = "type")]
    pub mime_type: String,
    pub name: String,
    pub content: String,
}

impl Attachment {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::build(path.as_ref()).map_err(MailgunError::Attachment)
    }

    fn build(path: &Path) -> std::result::Result<Self, String> {
        if !path.is_file() {
            return Err(format!("{} is not a valid file.", path.display()));
        }

        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let data = fs::read(path).map_err(|e| e.to_string())?;

        let mime_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        if !is_valid_content_type(&mime_type) {
            return Err(format!(
                "{} is not a valid content type (it should be {}).",
                mime_type,
                VALID_CONTENT_TYPES.join("*,")
            ));
        }

        Ok(Self {
            mime_type,
            name,
            content: chunk_split(&STANDARD.encode(data), LINE_WIDTH),
        })
    }
}

pub fn is_valid_content_type(content_type: &str) -> bool {
    VALID_CONTENT_TYPES
        .iter()
        .any(|valid| content_type.contains(valid))
}

/// 每 `width` 个字符后追加一个换行，包括最后一段
fn chunk_split(text: &str, width: usize) -> String {
    let mut output = String::with_capacity(text.len() + text.len() / width + 1);
    // base64 输出只含 ASCII，可以按字节切分
    for chunk in text.as_bytes().chunks(width) {
        output.push_str(&String::from_utf8_lossy(chunk));
        output.push('\n');
    }
    output
}
