use serde::{Deserialize, Serialize};

/// A node in the support-category tree.
///
/// Topics carry no identifier beyond their name; equality is structural.
/// The backend sends `suggestions` only for nodes that have children, so the
/// field is optional on the wire and omitted again when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Display name of the topic.
    pub name: String,
    /// Child topics offered after selecting this one; empty for a leaf.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Topic>,
}

impl Topic {
    /// A topic with no further suggestions.
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            suggestions: Vec::new(),
        }
    }

    /// A topic with child suggestions.
    pub fn branch(name: impl Into<String>, suggestions: Vec<Self>) -> Self {
        Self {
            name: name.into(),
            suggestions,
        }
    }

    /// True when the topic has nothing left to drill into.
    pub fn is_leaf(&self) -> bool {
        self.suggestions.is_empty()
    }
}
