pub mod chat;
pub mod ids;

pub use chat::{Chat, MarkdownFragment, Message};
pub use ids::ChatId;
