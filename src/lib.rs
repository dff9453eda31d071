pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod mcp;

pub use api::PromptClient;
pub use error::{PromptuaryError, Result};
pub use mcp::PromptuaryServer;
