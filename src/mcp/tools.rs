//! Parameter types for the MCP tools.
//!
//! The adapter validates tool input against these schemas before invocation;
//! list filters reuse the wire query shape directly.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::api::schema::CreatePromptRequest;

/// Parameters for the create_prompt tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreatePromptParams {
    /// The prompt to create: a new name, or a new version of an existing name
    pub prompt: CreatePromptRequest,
}

/// Parameters for the get_prompt tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetPromptParams {
    /// The name of the prompt to get
    pub name: String,
    /// The version of the prompt to get. Defaults to the latest version.
    pub version: Option<u32>,
    /// The label of the prompt to get. Defaults to 'production' if version is
    /// not provided.
    pub label: Option<String>,
}

/// Parameters for the update_labels tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLabelsParams {
    /// The name of the prompt to publish
    pub name: String,
    /// The version of the prompt to publish
    pub version: u32,
    /// The new labels of the prompt version; replaces the current set
    pub new_labels: Vec<String>,
}
