//! MCP tool implementations.
//!
//! This module contains all tools exposed by the mdn-mcp server.

pub mod get_page;
pub mod search;

pub use get_page::GetPageParams;
pub use search::SearchParams;
