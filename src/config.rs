use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::http::client::DEFAULT_TIMEOUT_SECS;
use crate::{MailgunError, Result};

/// 默认 API 地址，最终 endpoint 为 `<base_url>/<domain>`
pub const DEFAULT_BASE_URL: &str = "https://api.mailgun.net/v2";

static ENV_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("valid env regex"));

/// 客户端配置
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            domain: String::new(),
            timeout: default_timeout(),
            base_url: default_base_url(),
        }
    }
}

/// 命令行 / 环境变量覆盖项，优先级高于配置文件
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_key: Option<String>,
    pub domain: Option<String>,
    pub timeout: Option<u64>,
    pub base_url: Option<String>,
}

impl ClientConfig {
    /// 应用覆盖项
    pub fn merge(mut self, overrides: &Overrides) -> Self {
        if let Some(key) = &overrides.api_key {
            self.api_key = key.clone();
        }
        if let Some(domain) = &overrides.domain {
            self.domain = domain.clone();
        }
        if let Some(timeout) = overrides.timeout {
            self.timeout = timeout;
        }
        if let Some(base_url) = &overrides.base_url {
            self.base_url = base_url.clone();
        }
        self
    }

    /// 展开字段中的 `${VAR}` 系统环境变量
    fn resolve_env_vars(mut self) -> Self {
        self.api_key = resolve_env_vars(&self.api_key);
        self.domain = resolve_env_vars(&self.domain);
        self.base_url = resolve_env_vars(&self.base_url);
        self
    }
}

/// 替换文本中的 `${VAR}`，未定义的变量保持原样
pub fn resolve_env_vars(text: &str) -> String {
    ENV_REGEX
        .replace_all(text, |caps: &Captures| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .to_string()
}

/// 配置文件加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 配置文件名
    const CONFIG_FILE: &'static str = "mailgun.toml";

    /// 从指定路径加载配置文件
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<ClientConfig> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            MailgunError::Config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: ClientConfig = toml::from_str(&content)
            .map_err(|e| MailgunError::Config(format!("Failed to parse config file: {}", e)))?;
        Ok(config.resolve_env_vars())
    }

    /// 查找配置文件
    /// 查找顺序：
    /// 1. 当前目录及其父目录
    /// 2. 用户配置目录 ~/.config/mailgun/
    pub fn find() -> Option<PathBuf> {
        Self::find_from_dir(&std::env::current_dir().ok()?).or_else(Self::user_config_path)
    }

    fn find_from_dir(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            let config_path = current.join(Self::CONFIG_FILE);
            if config_path.is_file() {
                return Some(config_path);
            }

            // 尝试父目录
            if !current.pop() {
                return None;
            }
        }
    }

    fn user_config_path() -> Option<PathBuf> {
        let home = dirs::home_dir()?;
        let config_path = home.join(".config").join("mailgun").join(Self::CONFIG_FILE);
        config_path.is_file().then_some(config_path)
    }

    /// 加载最终配置：显式路径 > 自动查找 > 默认值，最后应用覆盖项
    pub fn load(explicit: Option<&Path>, overrides: &Overrides) -> Result<ClientConfig> {
        let base = match explicit {
            Some(path) => Self::load_from_path(path)?,
            None => match Self::find() {
                Some(path) => {
                    tracing::debug!(path = %path.display(), "using config file");
                    Self::load_from_path(path)?
                }
                None => ClientConfig::default(),
            },
        };

        Ok(base.merge(overrides))
    }
}
