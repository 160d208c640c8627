//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use super::definitions::{GetAncestryTool, GetPortraitsTool, SearchPeopleTool};
use crate::domains::familysearch::FamilySearchClient;

#[cfg(feature = "http")]
use super::ToolError;

/// Tool registry - manages all available tools.
///
/// Built per call by the HTTP transport; it only holds the shared client.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    client: Arc<FamilySearchClient>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(client: Arc<FamilySearchClient>) -> Self {
        Self { client }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            SearchPeopleTool::NAME,
            GetPortraitsTool::NAME,
            GetAncestryTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            SearchPeopleTool::to_tool(),
            GetPortraitsTool::to_tool(),
            GetAncestryTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// Only an unknown tool name is an `Err`; tool failures are text results.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let client = self.client.clone();
        match name {
            SearchPeopleTool::NAME => SearchPeopleTool::http_handler(arguments, client).await,
            GetPortraitsTool::NAME => GetPortraitsTool::http_handler(arguments, client).await,
            GetAncestryTool::NAME => GetAncestryTool::http_handler(arguments, client).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name).to_string())
            }
        }
    }
}
