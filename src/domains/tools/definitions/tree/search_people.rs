//! Family Tree person search tool.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::common::{error_result, parse_arguments, text_result};
use crate::domains::familysearch::{
    AccessToken, FamilySearchClient, SearchQuery, format_search_results,
};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the person search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchPeopleParams {
    #[schemars(description = "FamilySearch API access token")]
    pub access_token: AccessToken,

    /// Search criteria; every field is optional.
    #[serde(flatten)]
    pub query: SearchQuery,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Search people in the Family Tree.
pub struct SearchPeopleTool;

impl SearchPeopleTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search-people";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search for people in FamilySearch's Family Tree";

    const ACTION: &'static str = "searching FamilySearch";

    /// Decode raw arguments and run the search.
    pub async fn execute(client: &FamilySearchClient, arguments: serde_json::Value) -> CallToolResult {
        match parse_arguments::<SearchPeopleParams>(arguments) {
            Ok(params) => Self::search(client, &params).await,
            Err(e) => error_result(Self::ACTION, e),
        }
    }

    /// Run the search and format the hits.
    #[instrument(skip_all, fields(tool = Self::NAME))]
    pub async fn search(client: &FamilySearchClient, params: &SearchPeopleParams) -> CallToolResult {
        info!("Searching Family Tree with params: {:?}", params.query);

        match client.search(&params.access_token, &params.query).await {
            Ok(results) => {
                let text = format_search_results(&results);
                debug!("Formatted results: {}", text);
                text_result(text)
            }
            Err(e) => error_result(Self::ACTION, e),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        client: Arc<FamilySearchClient>,
    ) -> Result<serde_json::Value, String> {
        let result = Self::execute(&client, arguments).await;
        Ok(super::common::to_http_response(result))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchPeopleParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(client: Arc<FamilySearchClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move { Ok(Self::execute(&client, serde_json::Value::Object(args)).await) }
                .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
