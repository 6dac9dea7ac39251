//! search tool implementation.
//!
//! Queries the MDN search API and renders each hit as a title/path/summary
//! block. Upstream failures come back as a fixed text result, never as a
//! protocol error.

use mdn_client::{MdnClient, render_documents};
use mdn_core::Error;
use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Text returned when the search request fails for any reason.
pub const SEARCH_FAILED: &str = "Failed to search MDN documentation";

/// Input parameters for search tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// Search query for MDN docs
    #[schemars(length(min = 1))]
    pub query: String,
}

/// Implementation of the search tool.
pub async fn search_impl(client: &MdnClient, params: SearchParams) -> Result<CallToolResult, McpError> {
    if params.query.is_empty() {
        return Err(Error::InvalidInput("query cannot be empty".into()).into());
    }

    tracing::info!("searching mdn for: {}", params.query);

    let text = match client.search(&params.query).await {
        Ok(response) => render_documents(&response.documents),
        Err(e) => {
            tracing::error!("error: {}", e);
            SEARCH_FAILED.to_string()
        }
    };

    Ok(CallToolResult::success(vec![Content::text(text)]))
}
