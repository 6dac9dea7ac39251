//! Client code for mdn-mcp.
//!
//! This crate provides the HTTP client for the MDN search API and page fetch,
//! main-content extraction, and search result formatting shared by the server.

pub mod extract;
pub mod format;
pub mod mdn;

pub use extract::{Extractor, MainElementExtractor, extract_main};
pub use format::{SEPARATOR, render_document, render_documents};
pub use mdn::{MdnClient, MdnConfig, MdnError, SearchDocument, SearchResponse};
