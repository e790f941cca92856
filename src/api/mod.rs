//! 各资源的便捷方法，每个方法对应一次远程调用

pub mod attachment;
mod messages;
mod senders;
mod tags;
mod templates;
mod urls;
mod users;
mod webhooks;

pub use attachment::Attachment;
pub use messages::MessageSearch;
