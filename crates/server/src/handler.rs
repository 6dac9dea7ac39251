//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the appropriate implementations.
use crate::tools::{GetPageParams, SearchParams, get_page::get_page_impl, search::search_impl};

use mdn_client::MdnClient;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

/// Name reported to clients during initialization.
pub const SERVER_NAME: &str = "mdn";

/// The main MCP server handler for mdn-mcp.
#[derive(Clone)]
pub struct McpMdnServer {
    tool_router: ToolRouter<Self>,
    client: MdnClient,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl McpMdnServer {
    /// Create a new server handler backed by the given MDN client.
    pub fn new(client: MdnClient) -> Self {
        Self { tool_router: Self::tool_router(), client }
    }

    #[tool(description = "Search MDN Web Docs and get summaries of relevant pages")]
    async fn search(&self, params: Parameters<SearchParams>) -> Result<CallToolResult, McpError> {
        search_impl(&self.client, params.0).await
    }

    #[tool(name = "get-page", description = "Get full content of an MDN Web Docs page")]
    async fn get_page(&self, params: Parameters<GetPageParams>) -> Result<CallToolResult, McpError> {
        get_page_impl(&self.client, params.0).await
    }
}

impl ServerHandler for McpMdnServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}
