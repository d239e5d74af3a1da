use serde_json::{Map, Value};

use crate::markup::field_text;

/// Key of the section the skills chips are always read from.
pub const SKILLS_KEY: &str = "Skills";

/// Read-only view over a parsed résumé document.
///
/// No schema is enforced: missing or oddly typed fields read as empty rather
/// than failing. The renderers decide which shapes are fatal.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeDocument {
    fields: Map<String, Value>,
}

/// Contact lines, each `None` when absent or empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contact {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

impl ResumeDocument {
    /// Wraps a parsed payload. Only a top-level JSON object is a document.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    pub fn name(&self) -> String {
        field_text(self.fields.get("name")).unwrap_or_default()
    }

    pub fn tagline(&self) -> String {
        field_text(self.fields.get("tagline")).unwrap_or_default()
    }

    pub fn contact(&self) -> Option<Contact> {
        let contact = self.fields.get("contact").filter(|v| crate::markup::truthy(v))?;
        let get = |key: &str| field_text(contact.get(key));
        Some(Contact {
            phone: get("phone"),
            email: get("email"),
            github: get("github"),
            linkedin: get("linkedin"),
        })
    }

    /// The explicit `order` field, if it is present at all.
    pub fn order(&self) -> Option<&Value> {
        self.fields.get("order").filter(|v| crate::markup::truthy(v))
    }

    /// The `sections` mapping; anything that is not an object reads as empty.
    pub fn sections(&self) -> Option<&Map<String, Value>> {
        self.fields.get("sections").and_then(Value::as_object)
    }

    pub fn section(&self, name: &str) -> Option<&Value> {
        self.sections().and_then(|s| s.get(name))
    }

    pub fn section_names(&self) -> Vec<String> {
        self.sections()
            .map(|s| s.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn skills(&self) -> Option<&Value> {
        self.section(SKILLS_KEY)
    }
}
