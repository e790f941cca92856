pub mod client;
pub mod multipart;
pub mod params;
pub mod request;
pub mod response;
pub mod types;

// Re-export commonly used types for convenient access
pub use client::Transport;
pub use params::Params;
pub use request::ApiRequest;
pub use response::{Response, ResponseBody};
pub use types::{Method, OutputFormat};
