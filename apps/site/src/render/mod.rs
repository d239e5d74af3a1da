//! Renderers that populate the page regions from a résumé document.
//!
//! Each renderer clears its region and rebuilds it. None of them write back to
//! the document, and a failure in one leaves earlier regions as they were.

pub mod header;
pub mod sections;
pub mod toc;

use serde_json::Value;
use thiserror::Error;

use crate::models::resume::ResumeDocument;

pub use header::render_header;
pub use sections::render_sections;
pub use toc::render_toc;

#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("`order` must be a list of section names")]
    OrderNotAList,

    #[error("entry {index} of `order` is not a section name")]
    OrderEntryNotAName { index: usize },

    #[error("section '{section}' is null")]
    NullSection { section: String },

    #[error("item {index} of section '{section}' is null")]
    NullItem { section: String, index: usize },
}

/// Section names in render order: the explicit `order` list when present,
/// otherwise the keys of `sections` as they appear in the document.
/// Every explicit entry must be a string.
pub fn section_order(doc: &ResumeDocument) -> Result<Vec<String>, RenderError> {
    match doc.order() {
        Some(Value::Array(names)) => names
            .iter()
            .enumerate()
            .map(|(index, name)| match name {
                Value::String(name) => Ok(name.clone()),
                _ => Err(RenderError::OrderEntryNotAName { index }),
            })
            .collect(),
        Some(_) => Err(RenderError::OrderNotAList),
        None => Ok(doc.section_names()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> ResumeDocument {
        ResumeDocument::from_value(value).unwrap()
    }

    #[test]
    fn test_explicit_order_wins() {
        let d = doc(json!({
            "order": ["Projects", "Missing", "Experience"],
            "sections": {"Experience": [], "Projects": []}
        }));
        assert_eq!(
            section_order(&d).unwrap(),
            vec!["Projects", "Missing", "Experience"]
        );
    }

    #[test]
    fn test_falls_back_to_section_keys() {
        let d = doc(json!({"sections": {"Experience": [], "Education": []}}));
        assert_eq!(section_order(&d).unwrap(), vec!["Experience", "Education"]);
    }

    #[test]
    fn test_empty_order_falls_back_only_when_absent() {
        let d = doc(json!({"order": [], "sections": {"Experience": []}}));
        assert!(section_order(&d).unwrap().is_empty());

        let d = doc(json!({"order": null, "sections": {"Experience": []}}));
        assert_eq!(section_order(&d).unwrap(), vec!["Experience"]);
    }

    #[test]
    fn test_non_list_order_fails() {
        let d = doc(json!({"order": "Experience"}));
        assert_eq!(section_order(&d), Err(RenderError::OrderNotAList));
    }

    #[test]
    fn test_non_string_order_entry_fails() {
        let d = doc(json!({"order": ["Experience", null, 5]}));
        assert_eq!(
            section_order(&d),
            Err(RenderError::OrderEntryNotAName { index: 1 })
        );
    }

    #[test]
    fn test_no_sections_no_order() {
        assert!(section_order(&doc(json!({}))).unwrap().is_empty());
    }
}
