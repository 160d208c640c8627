//! GEDCOM X record types returned by the Family Tree API.
//!
//! Only the fields the formatters read are modelled. Every nested field is
//! optional because the API omits whatever it does not know, and arrays may
//! arrive as `null` as well as missing. Unknown fields are ignored.

use std::collections::HashMap;

use serde::Deserialize;

/// Fact type URI for a birth.
pub const BIRTH: &str = "http://gedcomx.org/Birth";

/// Fact type URI for a death.
pub const DEATH: &str = "http://gedcomx.org/Death";

/// Gender type URI for male.
pub const MALE: &str = "http://gedcomx.org/Male";

/// Relationship type URI for parent/child links.
pub const PARENT_CHILD: &str = "http://gedcomx.org/ParentChild";

/// Link relation of the full-size portrait image.
pub const IMAGE_URL_HIGH_RES: &str = "image-url-high-res";

/// Link relation of the standard portrait image.
pub const IMAGE_URL: &str = "image-url";

/// Treat an empty string the same as an absent one.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

// ============================================================================
// Persons
// ============================================================================

/// A person in the tree.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: Option<String>,
    pub names: Option<Vec<Name>>,
    pub gender: Option<Gender>,
    pub facts: Option<Vec<Fact>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Name {
    pub name_forms: Option<Vec<NameForm>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameForm {
    pub full_text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Gender {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// A dated, placed event such as a birth or death.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Fact {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub date: Option<Date>,
    pub place: Option<Place>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Date {
    pub original: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Place {
    pub original: Option<String>,
}

impl Person {
    /// The person id, or an empty string when the record carries none.
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    /// Full text of the first form of the first name.
    pub fn display_name(&self) -> Option<&str> {
        self.names
            .as_deref()?
            .first()?
            .name_forms
            .as_deref()?
            .first()
            .and_then(|form| non_empty(&form.full_text))
    }

    /// Whether the gender is explicitly male.
    pub fn is_male(&self) -> bool {
        self.gender
            .as_ref()
            .and_then(|g| g.kind.as_deref())
            .is_some_and(|kind| kind == MALE)
    }

    /// First fact of the given type, in record order.
    pub fn first_fact(&self, kind: &str) -> Option<&Fact> {
        self.facts
            .as_deref()?
            .iter()
            .find(|fact| fact.kind.as_deref() == Some(kind))
    }
}

impl Fact {
    /// Original date text, if present and non-empty.
    pub fn date_text(&self) -> Option<&str> {
        self.date.as_ref().and_then(|d| non_empty(&d.original))
    }

    /// Original place text, if present and non-empty.
    pub fn place_text(&self) -> Option<&str> {
        self.place.as_ref().and_then(|p| non_empty(&p.original))
    }
}

// ============================================================================
// Search
// ============================================================================

/// Response body of the tree search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResults {
    pub entries: Option<Vec<SearchEntry>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchEntry {
    pub content: Option<EntryContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryContent {
    pub gedcomx: Option<Gedcomx>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Gedcomx {
    pub persons: Option<Vec<Person>>,
}

impl SearchEntry {
    /// The matched person: the first person of the embedded document.
    pub fn person(&self) -> Option<&Person> {
        self.content
            .as_ref()?
            .gedcomx
            .as_ref()?
            .persons
            .as_deref()?
            .first()
    }
}

// ============================================================================
// Portraits
// ============================================================================

/// Response body of the person portraits endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortraitResults {
    pub portraits: Option<Vec<Portrait>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Portrait {
    pub description: Option<String>,
    pub links: Option<HashMap<String, Link>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Link {
    pub href: Option<String>,
}

impl Portrait {
    pub fn description_text(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    /// Image URL, preferring the high resolution link.
    pub fn preferred_url(&self) -> Option<&str> {
        let links = self.links.as_ref()?;
        [IMAGE_URL_HIGH_RES, IMAGE_URL]
            .iter()
            .find_map(|rel| links.get(*rel).and_then(|link| non_empty(&link.href)))
    }
}

// ============================================================================
// Ancestry
// ============================================================================

/// Response body of the ancestry endpoint.
///
/// The first person is the one the ancestry was requested for.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AncestryResults {
    pub persons: Option<Vec<Person>>,
    pub relationships: Option<Vec<Relationship>>,
}

/// A relationship between two persons. For parent/child links `person1` is
/// the parent and `person2` the child.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Relationship {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub person1: Option<ResourceReference>,
    pub person2: Option<ResourceReference>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceReference {
    pub resource_id: Option<String>,
}

impl Relationship {
    /// `(parent id, child id)` when this is a complete parent/child link.
    pub fn parent_child(&self) -> Option<(&str, &str)> {
        if self.kind.as_deref() != Some(PARENT_CHILD) {
            return None;
        }
        let parent = self.person1.as_ref()?.resource_id.as_deref()?;
        let child = self.person2.as_ref()?.resource_id.as_deref()?;
        Some((parent, child))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_accessors() {
        let person: Person = serde_json::from_value(serde_json::json!({
            "id": "KWCB-1",
            "names": [{ "nameForms": [{ "fullText": "John Smith" }] }],
            "gender": { "type": MALE },
            "facts": [
                { "type": BIRTH, "date": { "original": "1 Jan 1900" } },
                { "type": BIRTH, "date": { "original": "2 Jan 1900" } }
            ]
        }))
        .unwrap();

        assert_eq!(person.id(), "KWCB-1");
        assert_eq!(person.display_name(), Some("John Smith"));
        assert!(person.is_male());
        let birth = person.first_fact(BIRTH).unwrap();
        assert_eq!(birth.date_text(), Some("1 Jan 1900"));
        assert_eq!(birth.place_text(), None);
        assert!(person.first_fact(DEATH).is_none());
    }

    #[test]
    fn test_null_arrays_are_accepted() {
        let person: Person =
            serde_json::from_str(r#"{"id": "X", "names": null, "facts": null}"#).unwrap();
        assert_eq!(person.display_name(), None);
        assert!(person.first_fact(BIRTH).is_none());
        assert!(!person.is_male());
    }

    #[test]
    fn test_preferred_url_falls_back_on_empty_href() {
        let portrait: Portrait = serde_json::from_value(serde_json::json!({
            "links": {
                "image-url-high-res": { "href": "" },
                "image-url": { "href": "https://example.org/p.jpg" }
            }
        }))
        .unwrap();
        assert_eq!(portrait.preferred_url(), Some("https://example.org/p.jpg"));
    }

    #[test]
    fn test_parent_child_ignores_other_types() {
        let rel: Relationship = serde_json::from_value(serde_json::json!({
            "type": "http://gedcomx.org/Couple",
            "person1": { "resourceId": "A" },
            "person2": { "resourceId": "B" }
        }))
        .unwrap();
        assert_eq!(rel.parent_child(), None);
    }
}
