//! FamilySearch MCP Server Library
//!
//! This crate exposes FamilySearch's Family Tree to Model Context Protocol
//! clients: person search, portraits and ancestry, each rendered as a plain
//! text report.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, the main server
//!   and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **familysearch**: API client, GEDCOM X records and text formatting
//!   - **tools**: MCP tools that can be executed by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use familysearch_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
