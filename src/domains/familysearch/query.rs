//! Search query builder.
//!
//! Translates a typed [`SearchQuery`] into the Family Tree search dialect
//! (`q.givenName`, `q.birthLikeDate.from`, ...). A single year is sent as
//! the one-year window `[year, year + 1)`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Typed person search request. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    #[schemars(description = "Person's given (first) name")]
    pub given_name: Option<String>,

    #[schemars(description = "Person's surname (last name)")]
    pub surname: Option<String>,

    #[schemars(description = "Person's gender (M/F)")]
    pub gender: Option<String>,

    #[schemars(description = "Place of birth")]
    pub birth_place: Option<String>,

    #[schemars(description = "Year of birth")]
    pub birth_year: Option<i32>,

    #[schemars(description = "Place of death")]
    pub death_place: Option<String>,

    #[schemars(description = "Year of death")]
    pub death_year: Option<i32>,
}

impl SearchQuery {
    /// Query parameters for the search endpoint, in a stable order.
    ///
    /// Absent and empty fields are left out.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        push_text(&mut params, "q.givenName", &self.given_name);
        push_text(&mut params, "q.surname", &self.surname);
        push_text(&mut params, "q.sex", &self.gender);
        push_text(&mut params, "q.birthLikePlace", &self.birth_place);
        push_year_range(
            &mut params,
            ("q.birthLikeDate.from", "q.birthLikeDate.to"),
            self.birth_year,
        );
        push_text(&mut params, "q.deathLikePlace", &self.death_place);
        push_year_range(
            &mut params,
            ("q.deathLikeDate.from", "q.deathLikeDate.to"),
            self.death_year,
        );

        params
    }
}

fn push_text(params: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
        params.push((key, value.to_string()));
    }
}

fn push_year_range(
    params: &mut Vec<(&'static str, String)>,
    (from, to): (&'static str, &'static str),
    year: Option<i32>,
) {
    if let Some(year) = year {
        params.push((from, year.to_string()));
        params.push((to, year.saturating_add(1).to_string()));
    }
}
