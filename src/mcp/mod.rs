//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the remote prompt-management API as four callable tools and serves
//! the prompt-template catalog. Tool failures are always reported as
//! structured `isError` results; template fetch failures propagate to the
//! adapter as protocol errors.

pub mod error;
pub mod prompts;
pub mod tools;

use rmcp::{
    handler::server::wrapper::Parameters,
    model::*,
    service::{RequestContext, RoleServer},
    tool, tool_handler, tool_router, ErrorData as McpErrorData, ServerHandler,
};
use serde::Serialize;

use crate::api::schema::ListPromptsQuery;
use crate::api::PromptClient;
use crate::config::Connection;
use tools::{CreatePromptParams, GetPromptParams, UpdateLabelsParams};

/// The MCP server: one per transport session, holding the client scoped to
/// the credentials it was constructed from.
#[derive(Clone)]
pub struct PromptuaryServer {
    client: PromptClient,
    personas: Vec<String>,
    tool_router: rmcp::handler::server::tool::ToolRouter<Self>,
}

fn json_result<T: Serialize>(value: &T) -> CallToolResult {
    match serde_json::to_string_pretty(value) {
        Ok(json) => CallToolResult::success(vec![Content::text(json)]),
        Err(e) => CallToolResult::error(vec![Content::text(format!(
            "Error serializing response: {e}"
        ))]),
    }
}

#[tool_router]
impl PromptuaryServer {
    pub fn new(client: PromptClient, personas: Vec<String>) -> Self {
        Self {
            client,
            personas,
            tool_router: Self::tool_router(),
        }
    }

    pub fn connect(connection: &Connection, personas: Vec<String>) -> crate::error::Result<Self> {
        Ok(Self::new(PromptClient::new(connection)?, personas))
    }

    /// Run the server on the given transport until it closes or errors.
    pub async fn serve<T, E, A>(
        self,
        transport: T,
    ) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>>
    where
        T: rmcp::transport::IntoTransport<RoleServer, E, A>,
        E: std::error::Error + Send + Sync + 'static,
    {
        use rmcp::service::ServiceExt;
        let running = ServiceExt::serve(self, transport)
            .await
            .map_err(|e| -> Box<dyn std::error::Error + Send + Sync> { Box::new(e) })?;
        running
            .waiting()
            .await
            .map_err(|e| -> Box<dyn std::error::Error + Send + Sync> { Box::new(e) })?;
        Ok(())
    }

    #[tool(
        name = "list_prompts",
        description = "List all prompts in the Langfuse project, with optional name/label/tag filters and pagination"
    )]
    pub async fn list_prompts_tool(
        &self,
        Parameters(params): Parameters<ListPromptsQuery>,
    ) -> std::result::Result<CallToolResult, McpErrorData> {
        match self.client.list_prompts(&params).await {
            Ok(list) => Ok(json_result(&list)),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Error listing prompts: {e}"
            ))])),
        }
    }

    #[tool(
        name = "create_prompt",
        description = "Create a new prompt in the Langfuse project (a new name, or a new version of an existing name)"
    )]
    pub async fn create_prompt_tool(
        &self,
        Parameters(params): Parameters<CreatePromptParams>,
    ) -> std::result::Result<CallToolResult, McpErrorData> {
        match self.client.create_prompt(&params.prompt).await {
            Ok(created) => Ok(json_result(&created)),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Error creating prompt: {e}"
            ))])),
        }
    }

    #[tool(
        name = "get_prompt",
        description = "Get a prompt from the Langfuse project by name, optionally pinned to a version or label"
    )]
    pub async fn get_prompt_tool(
        &self,
        Parameters(params): Parameters<GetPromptParams>,
    ) -> std::result::Result<CallToolResult, McpErrorData> {
        match self
            .client
            .get_prompt(&params.name, params.version, params.label.as_deref())
            .await
        {
            Ok(prompt) => Ok(json_result(&prompt)),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Error getting prompt: {e}"
            ))])),
        }
    }

    #[tool(
        name = "update_labels",
        description = "Update the labels of a prompt version; an assigned label moves from its previous holder"
    )]
    pub async fn update_labels_tool(
        &self,
        Parameters(params): Parameters<UpdateLabelsParams>,
    ) -> std::result::Result<CallToolResult, McpErrorData> {
        let request = crate::api::UpdatePromptVersionRequest {
            new_labels: params.new_labels,
        };
        match self
            .client
            .update_prompt(&params.name, params.version, &request)
            .await
        {
            Ok(updated) => Ok(json_result(&updated)),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Error updating labels: {e}"
            ))])),
        }
    }
}

#[tool_handler]
impl ServerHandler for PromptuaryServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Promptuary bridges a Langfuse prompt-management project. \
                 Use list_prompts / get_prompt to inspect prompts, create_prompt \
                 to add a prompt or version, and update_labels to move labels \
                 such as 'production' between versions."
                    .to_string(),
            ),
        }
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListPromptsResult, McpErrorData> {
        Ok(ListPromptsResult {
            prompts: prompts::catalog(&self.personas),
            next_cursor: None,
            meta: None,
        })
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<GetPromptResult, McpErrorData> {
        prompts::resolve(&self.client, &self.personas, &request.name).await
    }
}
