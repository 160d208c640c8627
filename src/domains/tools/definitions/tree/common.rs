//! Helpers shared by the Family Tree tools.
//!
//! Tool failures never become protocol errors: they are rendered as a
//! regular text result reading `Error <action>: <message>`.

use rmcp::model::{CallToolResult, Content};
use serde::de::DeserializeOwned;
use std::fmt::Display;
use tracing::warn;

use crate::domains::tools::ToolError;

/// Wrap report text in a successful tool result.
pub fn text_result(text: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text)])
}

/// Render a failure as `Error <action>: <message>`.
pub fn error_result(action: &str, error: impl Display) -> CallToolResult {
    let text = format!("Error {}: {}", action, error);
    warn!("{}", text);
    text_result(text)
}

/// Decode raw tool arguments into a parameter struct.
pub fn parse_arguments<P: DeserializeOwned>(arguments: serde_json::Value) -> Result<P, ToolError> {
    let arguments = match arguments {
        serde_json::Value::Null => serde_json::Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Shape a tool result the way the HTTP transport returns it.
#[cfg(feature = "http")]
pub fn to_http_response(result: CallToolResult) -> serde_json::Value {
    serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    })
}

/// First text content of a result (tests only).
#[cfg(test)]
pub fn result_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}
