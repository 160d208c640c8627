//! Person ancestry tool.
//!
//! Fetches up to eight generations of ancestors and renders them as an
//! indented tree, the requested person first.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, instrument};

use super::common::{error_result, parse_arguments, text_result};
use crate::domains::familysearch::client::{DEFAULT_GENERATIONS, MAX_GENERATIONS, MIN_GENERATIONS};
use crate::domains::familysearch::{AccessToken, FamilySearchClient, format_ancestry};
use crate::domains::tools::ToolError;

/// Parameters for the ancestry tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetAncestryParams {
    #[schemars(description = "FamilySearch API access token")]
    pub access_token: AccessToken,

    #[schemars(description = "FamilySearch person ID")]
    pub person_id: String,

    #[schemars(
        description = "Number of generations to retrieve (1-8, default 4)",
        range(min = 1, max = 8)
    )]
    pub generations: Option<u8>,
}

impl GetAncestryParams {
    /// Requested depth, defaulted and range-checked.
    pub fn generations(&self) -> Result<u8, ToolError> {
        let generations = self.generations.unwrap_or(DEFAULT_GENERATIONS);
        if (MIN_GENERATIONS..=MAX_GENERATIONS).contains(&generations) {
            Ok(generations)
        } else {
            Err(ToolError::invalid_arguments(format!(
                "generations must be between {} and {}, got {}",
                MIN_GENERATIONS, MAX_GENERATIONS, generations
            )))
        }
    }
}

/// Fetch and render a person's ancestor tree.
pub struct GetAncestryTool;

impl GetAncestryTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-ancestry";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get ancestry information for a person in FamilySearch's Family Tree";

    const ACTION: &'static str = "fetching ancestry";

    pub async fn execute(client: &FamilySearchClient, arguments: serde_json::Value) -> CallToolResult {
        match parse_arguments::<GetAncestryParams>(arguments) {
            Ok(params) => Self::fetch(client, &params).await,
            Err(e) => error_result(Self::ACTION, e),
        }
    }

    #[instrument(skip_all, fields(tool = Self::NAME, person_id = %params.person_id))]
    pub async fn fetch(client: &FamilySearchClient, params: &GetAncestryParams) -> CallToolResult {
        let generations = match params.generations() {
            Ok(g) => g,
            Err(e) => return error_result(Self::ACTION, e),
        };

        match client
            .get_ancestry(&params.access_token, &params.person_id, generations)
            .await
        {
            Ok(results) => {
                let text = format_ancestry(&results);
                debug!("Formatted ancestry ({} generations): {}", generations, text);
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
            input_schema: cached_schema_for_type::<GetAncestryParams>(),
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
