//! FamilySearch domain module.
//!
//! Everything needed to talk to the FamilySearch Family Tree API and turn
//! its GEDCOM X responses into readable text:
//!
//! - `query` - maps a [`SearchQuery`] into the `q.*` parameter dialect
//! - `models` - the subset of GEDCOM X the formatters read
//! - `client` - the authenticated gateway for the three read endpoints
//! - `format` - plain-text report builders (search, portraits, ancestry tree)
//!
//! Nothing here keeps state between calls. The client is an immutable handle
//! that is cloned into every tool invocation.

pub mod client;
mod error;
pub mod format;
pub mod models;
pub mod query;

pub use client::{AccessToken, FamilySearchClient};
pub use error::{FamilySearchError, FamilySearchResult};
pub use format::{format_ancestry, format_portraits, format_search_results};
pub use models::{AncestryResults, PortraitResults, SearchResults};
pub use query::SearchQuery;
