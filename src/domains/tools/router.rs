//! Tool Router - builds the rmcp ToolRouter used by the STDIO transport.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{GetAncestryTool, GetPortraitsTool, SearchPeopleTool};
use crate::domains::familysearch::FamilySearchClient;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<FamilySearchClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(SearchPeopleTool::create_route(client.clone()))
        .with_route(GetPortraitsTool::create_route(client.clone()))
        .with_route(GetAncestryTool::create_route(client))
}
