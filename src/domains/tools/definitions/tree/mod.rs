//! FamilySearch Family Tree tools.
//!
//! - `search_people`: person search with name, gender, place and year filters
//! - `portraits`: portrait images attached to a person
//! - `ancestry`: indented ancestor tree for a person
//!
//! Each tool has handlers for both HTTP and STDIO transports.

pub mod ancestry;
pub mod common;
pub mod portraits;
pub mod search_people;

pub use ancestry::{GetAncestryParams, GetAncestryTool};
pub use portraits::{GetPortraitsParams, GetPortraitsTool};
pub use search_people::{SearchPeopleParams, SearchPeopleTool};
