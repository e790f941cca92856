pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod utils;

// Re-export commonly used types
pub use api::{Attachment, MessageSearch};
pub use client::MailgunClient;
pub use config::{ClientConfig, ConfigLoader};
pub use error::{MailgunError, Result};
pub use http::{Method, OutputFormat, Params, ResponseBody};
