//! Domains module containing business logic organized by bounded contexts.
//!
//! - **familysearch**: upstream API gateway, record types and text reports
//! - **tools**: the MCP tools that expose the FamilySearch domain to clients

pub mod familysearch;
pub mod tools;
