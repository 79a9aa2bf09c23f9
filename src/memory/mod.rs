//! 记忆层：对话消息与子任务转写

pub mod conversation;

pub use conversation::{Message, Role, Transcript};
