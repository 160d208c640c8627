//! STDIO transport implementation.
//!
//! The MCP client spawns the server and speaks JSON-RPC over stdin/stdout
//! through rmcp. stdout belongs to the protocol, so all logging goes to
//! stderr.

use rmcp::ServiceExt;
use tracing::{info, instrument};

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve `server` until the client closes stdin.
    #[instrument(skip_all, fields(server = %server.name()))]
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!(
            "FamilySearch MCP Server running on stdio ({} tools)",
            server.list_tools().len()
        );

        let running = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(format!("stdio handshake failed: {e}")))?;

        let reason = running
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!("Client disconnected: {:?}", reason);
        Ok(())
    }
}
