//! Person portraits tool.

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
use crate::domains::familysearch::{AccessToken, FamilySearchClient, format_portraits};

/// Parameters for the portraits tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetPortraitsParams {
    #[schemars(description = "FamilySearch API access token")]
    pub access_token: AccessToken,

    #[schemars(description = "FamilySearch person ID")]
    pub person_id: String,
}

/// Fetch the portrait images attached to a person.
pub struct GetPortraitsTool;

impl GetPortraitsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-portraits";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get portrait pictures for a person in FamilySearch's Family Tree";

    const ACTION: &'static str = "fetching portraits";

    pub async fn execute(client: &FamilySearchClient, arguments: serde_json::Value) -> CallToolResult {
        match parse_arguments::<GetPortraitsParams>(arguments) {
            Ok(params) => Self::fetch(client, &params).await,
            Err(e) => error_result(Self::ACTION, e),
        }
    }

    #[instrument(skip_all, fields(tool = Self::NAME, person_id = %params.person_id))]
    pub async fn fetch(client: &FamilySearchClient, params: &GetPortraitsParams) -> CallToolResult {
        match client
            .get_portraits(&params.access_token, &params.person_id)
            .await
        {
            Ok(results) => {
                let text = format_portraits(&results);
                debug!("Formatted portraits: {}", text);
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
            input_schema: cached_schema_for_type::<GetPortraitsParams>(),
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
