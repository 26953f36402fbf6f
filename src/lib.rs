pub mod chat;
pub mod config;
pub mod error;

pub use chat::{ChatClient, ChatRequest, ChatResponse, HttpChatClient};
pub use error::{Error, Result};
