//! Tool definitions module.
//!
//! Each tool is defined in its own file under its upstream's directory.

pub mod tree;

pub use tree::{
    GetAncestryParams, GetAncestryTool, GetPortraitsParams, GetPortraitsTool, SearchPeopleParams,
    SearchPeopleTool,
};
