//! Plain-text report builders for FamilySearch responses.
//!
//! All three formatters are total: a missing or empty top-level array gives
//! a fixed sentinel string, and every absent nested field has a textual
//! default.

use std::collections::HashMap;

use super::models::{
    AncestryResults, BIRTH, DEATH, Fact, Person, PortraitResults, Relationship, SearchResults,
};

pub const NO_SEARCH_RESULTS: &str = "No results found.";
pub const NO_PORTRAITS: &str = "No portraits found for this person.";
pub const NO_ANCESTRY: &str = "No ancestry information found.";

const UNKNOWN: &str = "Unknown";
const SEPARATOR: &str = "---";
const INDENT: &str = "  ";

// ============================================================================
// Shared person rendering
// ============================================================================

fn vital_line(fact: Option<&Fact>, verb: &str, label: &str) -> String {
    match fact {
        Some(fact) => format!(
            "{}: {} at {}",
            verb,
            fact.date_text().unwrap_or(UNKNOWN),
            fact.place_text().unwrap_or(UNKNOWN)
        ),
        None => format!("{}: {}", label, UNKNOWN),
    }
}

fn birth_line(person: &Person) -> String {
    vital_line(person.first_fact(BIRTH), "Born", "Birth")
}

fn death_line(person: &Person) -> String {
    vital_line(person.first_fact(DEATH), "Died", "Death")
}

// ============================================================================
// Search
// ============================================================================

/// Render search hits, one block per entry.
///
/// Gender renders as `Male` only for an explicit male tag; anything else,
/// including no gender at all, renders as `Female`. Entries that carry no
/// person are skipped.
pub fn format_search_results(results: &SearchResults) -> String {
    let blocks: Vec<String> = results
        .entries
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(|entry| entry.person())
        .map(|person| {
            let gender = if person.is_male() { "Male" } else { "Female" };
            format!(
                "\nPerson: {}\nGender: {}\n{}\n{}\nFamilySearch ID: {}\n{}",
                person.display_name().unwrap_or(UNKNOWN),
                gender,
                birth_line(person),
                death_line(person),
                person.id(),
                SEPARATOR
            )
        })
        .collect();

    if blocks.is_empty() {
        return NO_SEARCH_RESULTS.to_string();
    }
    blocks.join("\n")
}

// ============================================================================
// Portraits
// ============================================================================

/// Render portraits in input order with 1-based numbering.
pub fn format_portraits(results: &PortraitResults) -> String {
    let portraits = results.portraits.as_deref().unwrap_or_default();
    if portraits.is_empty() {
        return NO_PORTRAITS.to_string();
    }

    portraits
        .iter()
        .enumerate()
        .map(|(index, portrait)| {
            format!(
                "\nPortrait {}:\nDescription: {}\nURL: {}\n{}",
                index + 1,
                portrait.description_text().unwrap_or("No description"),
                portrait.preferred_url().unwrap_or("No URL available"),
                SEPARATOR
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Ancestry
// ============================================================================

/// Render the ancestor tree rooted at the first person of the response.
///
/// Each person is followed by its parents, in relationship order, each
/// introduced by a `---` line and indented one level deeper. A parent id
/// with no matching person ends that branch silently, and so does a parent
/// already on the current path (cyclic input).
pub fn format_ancestry(results: &AncestryResults) -> String {
    let persons = results.persons.as_deref().unwrap_or_default();
    let Some(root) = persons.first() else {
        return NO_ANCESTRY.to_string();
    };

    let tree = AncestryTree::new(persons, results.relationships.as_deref().unwrap_or_default());
    let mut out = String::new();
    tree.render(root.id(), 0, &mut Vec::new(), &mut out);
    out
}

/// Lookup tables for the ancestry walk.
struct AncestryTree<'a> {
    persons: HashMap<&'a str, &'a Person>,
    /// Child id to parent ids, in the order the relationships appear.
    parents: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> AncestryTree<'a> {
    fn new(persons: &'a [Person], relationships: &'a [Relationship]) -> Self {
        let persons = persons.iter().map(|p| (p.id(), p)).collect();

        let mut parents: HashMap<&str, Vec<&str>> = HashMap::new();
        for (parent, child) in relationships.iter().filter_map(|r| r.parent_child()) {
            parents.entry(child).or_default().push(parent);
        }

        Self { persons, parents }
    }

    fn render(&self, person_id: &'a str, depth: usize, path: &mut Vec<&'a str>, out: &mut String) {
        let Some(person) = self.persons.get(person_id) else {
            return;
        };
        if path.contains(&person_id) {
            return;
        }

        let indent = INDENT.repeat(depth);
        for line in person_block(person).lines() {
            out.push_str(&indent);
            out.push_str(line);
            out.push('\n');
        }

        path.push(person_id);
        for &parent_id in self.parents.get(person_id).into_iter().flatten() {
            out.push_str(&indent);
            out.push_str(SEPARATOR);
            out.push('\n');
            self.render(parent_id, depth + 1, path, out);
        }
        path.pop();
    }
}

fn person_block(person: &Person) -> String {
    format!(
        "{}\n{}\n{}\nID: {}",
        person.display_name().unwrap_or(UNKNOWN),
        birth_line(person),
        death_line(person),
        person.id()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::familysearch::models::{MALE, PARENT_CHILD};
    use serde_json::{Value, json};

    fn search(value: Value) -> String {
        format_search_results(&serde_json::from_value(value).unwrap())
    }

    fn portraits(value: Value) -> String {
        format_portraits(&serde_json::from_value(value).unwrap())
    }

    fn ancestry(value: Value) -> String {
        format_ancestry(&serde_json::from_value(value).unwrap())
    }

    fn person(id: &str, name: &str) -> Value {
        json!({ "id": id, "names": [{ "nameForms": [{ "fullText": name }] }] })
    }

    fn parent_of(parent: &str, child: &str) -> Value {
        json!({
            "type": PARENT_CHILD,
            "person1": { "resourceId": parent },
            "person2": { "resourceId": child }
        })
    }

    fn entry(person: Value) -> Value {
        json!({ "content": { "gedcomx": { "persons": [person] } } })
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    #[test]
    fn test_search_sentinels() {
        assert_eq!(search(json!({ "entries": [] })), NO_SEARCH_RESULTS);
        assert_eq!(search(json!({})), NO_SEARCH_RESULTS);
        assert_eq!(search(json!({ "entries": null })), NO_SEARCH_RESULTS);
    }

    #[test]
    fn test_search_full_block() {
        let text = search(json!({
            "entries": [entry(json!({
                "id": "KWCB-1",
                "names": [{ "nameForms": [{ "fullText": "John Smith" }] }],
                "gender": { "type": MALE },
                "facts": [
                    { "type": BIRTH, "date": { "original": "1900" }, "place": { "original": "Ohio" } },
                    { "type": DEATH, "date": { "original": "1970" } }
                ]
            }))]
        }));

        assert_eq!(
            text,
            "\nPerson: John Smith\nGender: Male\nBorn: 1900 at Ohio\nDied: 1970 at Unknown\nFamilySearch ID: KWCB-1\n---"
        );
    }

    #[test]
    fn test_search_missing_gender_renders_female() {
        let text = search(json!({ "entries": [entry(person("KWCB-2", "Pat Doe"))] }));
        assert!(text.contains("Gender: Female"));
    }

    #[test]
    fn test_search_missing_facts() {
        let text = search(json!({ "entries": [entry(person("KWCB-2", "Pat Doe"))] }));
        assert!(text.contains("\nBirth: Unknown\nDeath: Unknown\n"));
    }

    #[test]
    fn test_search_first_matching_fact_wins() {
        let text = search(json!({
            "entries": [entry(json!({
                "id": "X",
                "facts": [
                    { "type": BIRTH, "date": { "original": "first" } },
                    { "type": BIRTH, "date": { "original": "second" } }
                ]
            }))]
        }));
        assert!(text.contains("Born: first at Unknown"));
        assert!(!text.contains("second"));
    }

    #[test]
    fn test_search_entries_joined_with_newline() {
        let text = search(json!({
            "entries": [entry(person("A", "Ann")), entry(person("B", "Bob"))]
        }));
        assert!(text.contains("FamilySearch ID: A\n---\n\nPerson: Bob"));
    }

    #[test]
    fn test_search_entry_without_person_is_skipped() {
        let text = search(json!({ "entries": [{ "content": {} }, entry(person("A", "Ann"))] }));
        assert_eq!(text.matches("Person:").count(), 1);
        assert_eq!(search(json!({ "entries": [{}] })), NO_SEARCH_RESULTS);
    }

    // ------------------------------------------------------------------
    // Portraits
    // ------------------------------------------------------------------

    #[test]
    fn test_portrait_sentinels() {
        assert_eq!(portraits(json!({ "portraits": [] })), NO_PORTRAITS);
        assert_eq!(portraits(json!({})), NO_PORTRAITS);
    }

    #[test]
    fn test_portrait_prefers_high_res() {
        let text = portraits(json!({
            "portraits": [{
                "description": "Wedding day",
                "links": {
                    "image-url": { "href": "https://img/low.jpg" },
                    "image-url-high-res": { "href": "https://img/high.jpg" }
                }
            }]
        }));
        assert_eq!(
            text,
            "\nPortrait 1:\nDescription: Wedding day\nURL: https://img/high.jpg\n---"
        );
    }

    #[test]
    fn test_portrait_defaults() {
        let text = portraits(json!({
            "portraits": [
                { "links": { "image-url": { "href": "https://img/low.jpg" } } },
                { "links": { "thumbnail": { "href": "https://img/t.jpg" } } }
            ]
        }));
        assert!(text.contains("Portrait 1:\nDescription: No description\nURL: https://img/low.jpg"));
        assert!(text.contains("Portrait 2:\nDescription: No description\nURL: No URL available"));
    }

    // ------------------------------------------------------------------
    // Ancestry
    // ------------------------------------------------------------------

    #[test]
    fn test_ancestry_sentinels() {
        assert_eq!(ancestry(json!({ "persons": [] })), NO_ANCESTRY);
        assert_eq!(ancestry(json!({})), NO_ANCESTRY);
    }

    #[test]
    fn test_ancestry_root_only() {
        let text = ancestry(json!({ "persons": [person("R", "Root")] }));
        assert_eq!(text, "Root\nBirth: Unknown\nDeath: Unknown\nID: R\n");
    }

    #[test]
    fn test_ancestry_two_person_chain() {
        let text = ancestry(json!({
            "persons": [person("R", "Root"), person("P", "Parent")],
            "relationships": [parent_of("P", "R")]
        }));
        assert_eq!(
            text,
            "Root\nBirth: Unknown\nDeath: Unknown\nID: R\n\
             ---\n\
             \x20 Parent\n  Birth: Unknown\n  Death: Unknown\n  ID: P\n"
        );
    }

    #[test]
    fn test_ancestry_parent_order_and_depth() {
        let text = ancestry(json!({
            "persons": [
                person("R", "Root"),
                person("F", "Father"),
                person("M", "Mother"),
                person("GF", "Grandfather")
            ],
            "relationships": [
                parent_of("F", "R"),
                parent_of("GF", "F"),
                parent_of("M", "R")
            ]
        }));

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Root");
        assert_eq!(lines[4], "---");
        assert_eq!(lines[5], "  Father");
        assert_eq!(lines[9], "  ---");
        assert_eq!(lines[10], "    Grandfather");
        assert_eq!(lines[14], "---");
        assert_eq!(lines[15], "  Mother");
        assert_eq!(lines.len(), 19);
    }

    #[test]
    fn test_ancestry_missing_parent_is_dead_end() {
        let text = ancestry(json!({
            "persons": [person("R", "Root")],
            "relationships": [parent_of("GHOST", "R")]
        }));
        assert_eq!(text, "Root\nBirth: Unknown\nDeath: Unknown\nID: R\n---\n");
    }

    #[test]
    fn test_ancestry_ignores_other_relationship_types() {
        let text = ancestry(json!({
            "persons": [person("R", "Root"), person("S", "Spouse")],
            "relationships": [{
                "type": "http://gedcomx.org/Couple",
                "person1": { "resourceId": "S" },
                "person2": { "resourceId": "R" }
            }]
        }));
        assert!(!text.contains("Spouse"));
    }

    #[test]
    fn test_ancestry_cycle_terminates() {
        let text = ancestry(json!({
            "persons": [person("A", "Alpha"), person("B", "Beta")],
            "relationships": [parent_of("B", "A"), parent_of("A", "B")]
        }));
        assert_eq!(text.matches("Alpha").count(), 1);
        assert_eq!(text.matches("Beta").count(), 1);
    }

    #[test]
    fn test_ancestry_pedigree_collapse_renders_each_path() {
        let text = ancestry(json!({
            "persons": [
                person("R", "Root"),
                person("F", "Father"),
                person("M", "Mother"),
                person("G", "Shared")
            ],
            "relationships": [
                parent_of("F", "R"),
                parent_of("M", "R"),
                parent_of("G", "F"),
                parent_of("G", "M")
            ]
        }));
        assert_eq!(text.matches("    Shared").count(), 2);
    }

    #[test]
    fn test_ancestry_unknown_name_and_fact_details() {
        let text = ancestry(json!({
            "persons": [{
                "id": "R",
                "facts": [{ "type": DEATH, "place": { "original": "Paris" } }]
            }]
        }));
        assert_eq!(text, "Unknown\nBirth: Unknown\nDied: Unknown at Paris\nID: R\n");
    }
}
