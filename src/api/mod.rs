//! Client for the remote prompt-management REST API.
//!
//! `schema` defines the wire shapes and validates untrusted values,
//! `endpoints` builds resource URLs, and `client` performs the HTTP calls.

pub mod client;
pub mod endpoints;
pub mod schema;

pub use client::PromptClient;
pub use schema::{
    ChatMessage, CreatePromptRequest, ListPromptsQuery, Prompt, PromptMeta,
    PromptMetaListResponse, UpdatePromptVersionRequest,
};
