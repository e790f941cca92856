//! multipart/form-data 编码
//!
//! 字段名与值不做任何转义。字段名中包含 `attachment` 的字段视为文件，
//! 读取文件内容原样嵌入。

use std::fs;
use std::path::Path;

use crate::Result;
use crate::http::params::Params;

/// 默认分隔符
pub const DEFAULT_BOUNDARY: &str = "A0sFSD";

/// 附件固定使用的 Content-Type
pub const ATTACHMENT_CONTENT_TYPE: &str = "image/png";

const ATTACHMENT_MARKER: &str = "attachment";

/// 按插入顺序把参数编码为 multipart body
pub fn encode(boundary: &str, params: &Params) -> Result<Vec<u8>> {
    let mut output = Vec::new();

    for (key, value) in params.iter() {
        output.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        if is_attachment(key) {
            output.extend_from_slice(&encode_file(key, value)?);
        } else {
            output.extend_from_slice(encode_text(key, value).as_bytes());
        }
    }

    output.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());
    Ok(output)
}

pub fn is_attachment(name: &str) -> bool {
    name.contains(ATTACHMENT_MARKER)
}

fn encode_text(name: &str, value: &str) -> String {
    format!(
        "Content-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
        name, value
    )
}

fn encode_file(name: &str, path: &str) -> Result<Vec<u8>> {
    let path = path.strip_prefix('@').unwrap_or(path);
    let filename = Path::new(path)
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut data = format!(
        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
        name, filename
    )
    .into_bytes();
    data.extend_from_slice(b"Content-Transfer-Encoding: binary\r\n");
    data.extend_from_slice(format!("Content-Type: {}\r\n\r\n", ATTACHMENT_CONTENT_TYPE).as_bytes());
    data.extend_from_slice(&fs::read(path)?);
    data.extend_from_slice(b"\r\n");
    Ok(data)
}
