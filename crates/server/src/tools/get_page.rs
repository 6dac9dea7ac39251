//! get-page tool implementation.
//!
//! Fetches an MDN page and returns the inner markup of its `<main>` element,
//! or the whole body when there is none.

use mdn_client::{MdnClient, extract_main};
use mdn_core::Error;
use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Text returned when the page cannot be retrieved.
pub const GET_PAGE_FAILED: &str = "Failed to retrieve MDN documentation";

/// Input parameters for get-page tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetPageParams {
    /// MDN page path (e.g., /en-US/docs/Web/API/Headers)
    #[schemars(length(min = 1))]
    pub path: String,
}

/// Implementation of the get-page tool.
pub async fn get_page_impl(client: &MdnClient, params: GetPageParams) -> Result<CallToolResult, McpError> {
    if params.path.is_empty() {
        return Err(Error::InvalidInput("path cannot be empty".into()).into());
    }

    tracing::info!("getting page contents for: {}", params.path);

    let text = match client.fetch_page(&params.path).await {
        Ok(html) => extract_main(&html).to_string(),
        Err(e) => {
            tracing::error!("error: {}", e);
            GET_PAGE_FAILED.to_string()
        }
    };

    Ok(CallToolResult::success(vec![Content::text(text)]))
}
